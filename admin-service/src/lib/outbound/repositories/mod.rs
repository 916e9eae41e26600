pub mod admin;
pub mod organization;

pub use admin::PostgresAdminStore;
pub use organization::PostgresOrganizationDirectory;
