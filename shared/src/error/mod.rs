//! Error system for the bioskop service
//!
//! - [`ErrorCode`]: the error classes a handler can produce
//! - [`AppError`]: error with code, message and optional raw cause
//! - [`ErrorBody`]: JSON body `{"error": ..., "details": ...}`
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::not_found("bioskop");
//! assert_eq!(err.code, ErrorCode::NotFound);
//! assert_eq!(err.message, "bioskop not found");
//!
//! let err = AppError::database("connection refused");
//! assert_eq!(err.details.as_deref(), Some("connection refused"));
//! ```

mod codes;
mod http;
mod types;

pub use codes::ErrorCode;
pub use types::{AppError, AppResult, ErrorBody};
