//! Shared types for the bioskop service
//!
//! Wire types used by the HTTP server and its clients: the cinema entity,
//! request payloads, confirmation bodies, and the error type.

pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorBody, ErrorCode};
pub use models::{Bioskop, BioskopInput};
