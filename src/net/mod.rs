//! HTTP transport, REST calls, and wire types.
//!
//! DESIGN
//! ======
//! `http` is the only module that touches the network; it attaches the
//! bearer credential and maps statuses into `error::ApiError`. It never
//! navigates — reacting to an expired session is the job of one top-level
//! handler in `state::auth`. `api` pairs each endpoint with a pure body
//! decoder so response parsing is testable on the host.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
