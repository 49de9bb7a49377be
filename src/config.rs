//! Client configuration constants.

/// Base URL every API path is appended to.
pub const API_BASE_URL: &str = "http://localhost:8080/api";

/// Fixed deadline for a single request, in milliseconds.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;
