//! Authentication primitives library
//!
//! Provides the cryptographic building blocks consumed by the admin service:
//! - Password verification and hashing (Argon2id, PHC string format)
//! - Signed access token issuance and validation (JWT, HS256)
//!
//! The service defines its own authentication ports and adapts these
//! implementations behind them, so the domain layer never touches `argon2`
//! or `jsonwebtoken` directly.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{TokenSigner, AdminClaims};
//!
//! let signer = TokenSigner::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = AdminClaims::for_admin("admin1", "org1", "a@example.com", 24);
//! let token = signer.sign(&claims).unwrap();
//! let decoded: AdminClaims = signer.verify(&token).unwrap();
//! assert_eq!(decoded.admin_id, "admin1");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::AdminClaims;
pub use token::SigningError;
pub use token::TokenSigner;
