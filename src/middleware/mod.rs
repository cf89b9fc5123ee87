//! Authentication and authorization.
//!
//! - [`auth`]: bearer token extraction, verification and the [`auth::AuthUser`] extractor
//! - [`role`]: per-route role guards
//!
//! # Request flow on a guarded route
//!
//! 1. No `Authorization` header: 401 `no token provided`
//! 2. Header not starting with `Bearer `: 401 `invalid Authorization format`
//! 3. Bad signature, wrong issuer or expired: 401 `invalid or expired token`
//! 4. Role differs from the route's role: 403 `forbidden: insufficient permissions`
//! 5. Otherwise the handler runs with the claims in the request extensions

pub mod auth;
pub mod role;
