//! # na-meste Core
//!
//! Core types, errors, and utilities for the na-meste attendance API.
//!
//! This crate provides foundational types used throughout the application:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`password`]: Salted password hashing and verification
//! - [`response`]: The `{status, error?, ...payload}` response envelope
//! - [`roles`]: The closed set of user roles
//! - [`validation`]: Rendering of field validation failures
//!
//! # Example
//!
//! ```ignore
//! use na_meste_core::{AppError, Role, hash_password, verify_password};
//!
//! let digest = hash_password("secret")?;
//! assert!(verify_password("secret", &digest)?);
//!
//! let role: Role = "scanner".parse()?;
//! let error = AppError::not_found(anyhow::anyhow!("User with this email does not exist"));
//! ```

pub mod errors;
pub mod password;
pub mod response;
pub mod roles;
pub mod validation;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use password::{hash_password, verify_password};
pub use response::ApiResponse;
pub use roles::{Role, RoleParseError};
pub use validation::{ValidationFailure, collect_failures, render_failures};
