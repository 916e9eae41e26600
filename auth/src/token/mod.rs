pub mod claims;
pub mod errors;
pub mod signer;

pub use claims::AdminClaims;
pub use errors::SigningError;
pub use signer::TokenSigner;
