//! # na-meste Auth
//!
//! Access token claims and JWT utilities.
//!
//! - [`claims`]: the [`Claims`] carried by every token (subject, role, iat, exp, issuer)
//! - [`jwt`]: [`create_access_token`] and [`verify_token`]
//! - [`error`]: [`TokenError`], distinguishing expired, forged and unparseable tokens
//!
//! There is no revocation list; a token stays valid until it expires.

pub mod claims;
pub mod error;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use error::TokenError;
pub use jwt::{create_access_token, verify_token};
