//! API error taxonomy.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Errors surfaced by the HTTP layer.
///
/// `Unauthorized` (401) means the credential itself is bad or expired and
/// the session must be torn down; `Forbidden` (403) means the caller is
/// authenticated but not allowed, and the session stays intact.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// 401 — missing/expired credential; session-invalidating.
    #[error("unauthorized")]
    Unauthorized,
    /// 403 — insufficient privilege; the session survives.
    #[error("forbidden")]
    Forbidden,
    /// Any other non-success status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// Transport failure: DNS, refused connection, or timeout.
    #[error("network error: {0}")]
    Network(String),
    /// Response body did not match the expected schema.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ApiError {
    /// Map a non-success HTTP status to an error variant.
    pub const fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            other => Self::Status(other),
        }
    }

    /// True when the error means the stored session is no longer valid
    /// and the user has to log in again.
    pub const fn invalidates_session(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
