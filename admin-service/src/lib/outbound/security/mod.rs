pub mod password;
pub mod token;

pub use password::Argon2Verifier;
pub use token::JwtTokenIssuer;
