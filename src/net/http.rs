//! HTTP client adapter over `gloo-net`.
//!
//! Adds the base URL, a fixed request deadline, and (for protected calls)
//! the bearer credential to every request. The token is read from durable
//! storage on each request — not from the in-memory session — which is
//! what makes persisting the token at login "apply the default outbound
//! credential" without a mutable header registry.
//!
//! This layer classifies statuses into `ApiError` and nothing more. It
//! never clears the session or navigates; that belongs to the one
//! top-level handler in `state::auth`.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

#[cfg(feature = "csr")]
use crate::net::error::ApiError;

/// Whether a request carries the stored bearer token.
///
/// Login and register use `None`: a stale token attached to an
/// authentication call could turn a failed login into a spurious session
/// teardown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Credential {
    Bearer,
    None,
}

/// Format the authorization header value for a raw token.
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Absolute URL for an API path.
pub fn url(path: &str) -> String {
    format!("{}{path}", crate::config::API_BASE_URL)
}

#[cfg(feature = "csr")]
fn authorize(
    builder: gloo_net::http::RequestBuilder,
    credential: Credential,
) -> gloo_net::http::RequestBuilder {
    use crate::storage::{self, SessionStorage};

    match credential {
        Credential::None => builder,
        Credential::Bearer => match storage::durable().get(storage::TOKEN_KEY) {
            Some(token) if !token.is_empty() => {
                builder.header("Authorization", &bearer_header(&token))
            }
            _ => builder,
        },
    }
}

/// Send a built request, racing it against the fixed deadline.
#[cfg(feature = "csr")]
async fn send(request: gloo_net::http::Request) -> Result<String, ApiError> {
    use futures::FutureExt;

    let timeout = std::time::Duration::from_millis(u64::from(crate::config::REQUEST_TIMEOUT_MS));
    let request_future = request.send().fuse();
    let deadline = gloo_timers::future::sleep(timeout).fuse();
    futures::pin_mut!(request_future, deadline);

    let response = futures::select! {
        result = request_future => {
            result.map_err(|e| ApiError::Network(e.to_string()))?
        }
        () = deadline => {
            return Err(ApiError::Network("request timed out".to_owned()));
        }
    };

    if !response.ok() {
        return Err(ApiError::from_status(response.status()));
    }
    response.text().await.map_err(|e| ApiError::Network(e.to_string()))
}

/// `GET` a path, returning the raw response body.
#[cfg(feature = "csr")]
pub async fn get(path: &str, credential: Credential) -> Result<String, ApiError> {
    let request = authorize(gloo_net::http::Request::get(&url(path)), credential)
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;
    send(request).await
}

/// `POST` a JSON body to a path, returning the raw response body.
#[cfg(feature = "csr")]
pub async fn post_json<B: serde::Serialize>(
    path: &str,
    body: &B,
    credential: Credential,
) -> Result<String, ApiError> {
    let request = authorize(gloo_net::http::Request::post(&url(path)), credential)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    send(request).await
}

/// `POST` with no body (bulk-save style endpoints).
#[cfg(feature = "csr")]
pub async fn post_empty(path: &str, credential: Credential) -> Result<String, ApiError> {
    let request = authorize(gloo_net::http::Request::post(&url(path)), credential)
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;
    send(request).await
}
