//! # station-manager
//!
//! Leptos + WASM frontend for the station-manager backend. Handles
//! login/register, session persistence in `localStorage`, and listing and
//! creation of transit station records.
//!
//! This crate contains pages, components, the shared session and station
//! list state, the HTTP adapter that attaches the bearer credential, and
//! the navigation guard. Browser-only code is gated behind the `csr`
//! feature so the unit tests run on the host.

pub mod app;
pub mod components;
pub mod config;
pub mod guard;
pub mod net;
pub mod pages;
pub mod state;
pub mod storage;
pub mod util;

pub use app::App;
