//! Error codes for the bioskop service
//!
//! Codes are grouped by range:
//! - 0xxx: Request errors (validation, lookup)
//! - 9xxx: System errors (database)

use std::fmt;

/// Error code enum
///
/// Codes are `u16` values so they stay stable in logs across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: Request ====================
    /// Required field empty after trimming
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Body could not be parsed or required fields are missing
    InvalidRequest = 5,

    // ==================== 9xxx: System ====================
    /// Database connection, query or decode failure
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default message used when no custom message is given
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "validation failed",
            ErrorCode::NotFound => "resource not found",
            ErrorCode::InvalidRequest => "invalid request body",
            ErrorCode::DatabaseError => "database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
