//! REST API calls for the station-manager backend.
//!
//! Client-side (`csr`): real HTTP via the `http` adapter. Host builds get
//! stubs returning a network error, since these endpoints are only
//! meaningful in the browser. The body decoders are plain functions so
//! response parsing is covered by host tests.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::error::ApiError;
use crate::net::types::{Envelope, Station, TokenPair};

#[cfg(not(feature = "csr"))]
const OFFLINE: &str = "not available outside the browser";

/// Log in and return the issued token pair.
///
/// No bearer credential is attached: a stale token on this call could turn
/// a failed login into a spurious session teardown.
///
/// # Errors
///
/// `Unauthorized` for bad credentials, `Network`/`Status` for transport
/// and server failures, `Malformed` when the envelope lacks a token pair.
pub async fn login(username: &str, password: &str) -> Result<TokenPair, ApiError> {
    #[cfg(feature = "csr")]
    {
        use crate::net::http::{self, Credential};
        use crate::net::types::LoginRequest;

        let body = http::post_json(
            "/authentication/login",
            &LoginRequest { username, password },
            Credential::None,
        )
        .await?;
        token_pair_from_body(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (username, password);
        Err(ApiError::Network(OFFLINE.to_owned()))
    }
}

/// Register a new user. Success does not log the user in.
///
/// # Errors
///
/// Propagates transport and server failures unchanged.
pub async fn register(name: &str, username: &str, password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        use crate::net::http::{self, Credential};
        use crate::net::types::RegisterRequest;

        http::post_json(
            "/authentication/register",
            &RegisterRequest { name, username, password },
            Credential::None,
        )
        .await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (name, username, password);
        Err(ApiError::Network(OFFLINE.to_owned()))
    }
}

/// Fetch the full station list.
///
/// # Errors
///
/// `Unauthorized`/`Forbidden`/`Status` per the response status, `Network`
/// on transport failure, `Malformed` when a station entry cannot be
/// decoded. A non-list payload is coerced to an empty list, not an error.
pub async fn fetch_stations() -> Result<Vec<Station>, ApiError> {
    #[cfg(feature = "csr")]
    {
        use crate::net::http::{self, Credential};

        let body = http::get("/stations", Credential::Bearer).await?;
        stations_from_body(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Network(OFFLINE.to_owned()))
    }
}

/// Create a station.
///
/// # Errors
///
/// Propagates transport and server failures unchanged.
pub async fn create_station(name: &str, location: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        use crate::net::http::{self, Credential};
        use crate::net::types::CreateStationRequest;

        http::post_json(
            "/stations/save",
            &CreateStationRequest { name, location },
            Credential::Bearer,
        )
        .await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (name, location);
        Err(ApiError::Network(OFFLINE.to_owned()))
    }
}

/// Bulk-save the server-side station list (no request body).
///
/// # Errors
///
/// Propagates transport and server failures unchanged.
pub async fn save_stations() -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        use crate::net::http::{self, Credential};

        http::post_empty("/stations/save", Credential::Bearer).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Network(OFFLINE.to_owned()))
    }
}

/// Decode the response envelope.
fn parse_envelope(body: &str) -> Result<Envelope, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))
}

/// Extract the token pair from a login response body.
pub fn token_pair_from_body(body: &str) -> Result<TokenPair, ApiError> {
    let envelope = parse_envelope(body)?;
    serde_json::from_value(envelope.data).map_err(|e| ApiError::Malformed(e.to_string()))
}

/// Extract the station list from a stations response body.
///
/// Coercion rules, in order: an envelope whose `data` is a list decodes as
/// that list; `data` present but not a list yields an empty list; a body
/// that is itself a list decodes directly; anything else yields an empty
/// list. Only an undecodable list entry (or unparseable JSON) is an error.
pub fn stations_from_body(body: &str) -> Result<Vec<Station>, ApiError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))?;

    let payload = match value {
        serde_json::Value::Object(mut fields) => match fields.remove("data") {
            Some(data) => data,
            None => return Ok(Vec::new()),
        },
        other => other,
    };

    if payload.is_array() {
        serde_json::from_value(payload).map_err(|e| ApiError::Malformed(e.to_string()))
    } else {
        Ok(Vec::new())
    }
}
