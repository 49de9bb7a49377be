//! Station list state and the actions that drive it.
//!
//! The list is a read-only projection of server data: fetches replace the
//! whole collection, creation triggers a full refresh rather than an
//! incremental merge. Error strings recorded here are the user-facing
//! messages; the underlying `ApiError` is still returned so the caller
//! can route session-invalidating failures to the expiry handler.

#[cfg(test)]
#[path = "stations_test.rs"]
mod stations_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::Station;

/// User-facing message when loading the list fails.
pub const LOAD_ERROR: &str = "Failed to load stations. Please try again.";
/// User-facing message when creating a station fails.
pub const CREATE_ERROR: &str = "Failed to create station. Please try again.";
/// User-facing message when the bulk save fails.
pub const SAVE_ERROR: &str = "Failed to save stations. Please try again.";

/// In-memory station list with loading and error flags. One instance per
/// process, provided via context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StationsState {
    pub stations: Vec<Station>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl StationsState {
    /// Number of loaded stations.
    pub fn count(&self) -> usize {
        self.stations.len()
    }

    /// Stations run by the given agency.
    pub fn by_agency(&self, agency: &str) -> Vec<&Station> {
        self.stations.iter().filter(|s| s.agency == agency).collect()
    }

    /// Case-insensitive name search; a blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Station> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.stations.iter().collect();
        }
        self.stations
            .iter()
            .filter(|s| s.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Drop the recorded error message.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Back to the empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Fetch the station list, replacing the current records wholesale.
///
/// A malformed list renders as empty with a logged warning rather than an
/// error — the backend occasionally reshapes this payload and an empty
/// screen beats a crash. Transport and status failures empty the list and
/// record [`LOAD_ERROR`]. The loading flag is always cleared last.
///
/// # Errors
///
/// Returns the underlying `ApiError` for transport/status failures so the
/// caller can detect session expiry; the state is already updated by then.
pub async fn fetch_all(stations: RwSignal<StationsState>) -> Result<(), ApiError> {
    stations.update(|s| {
        s.is_loading = true;
        s.error = None;
    });

    let result = match crate::net::api::fetch_stations().await {
        Ok(list) => {
            stations.update(|s| s.stations = list);
            Ok(())
        }
        Err(ApiError::Malformed(detail)) => {
            leptos::logging::warn!("station list payload malformed: {detail}");
            stations.update(|s| s.stations = Vec::new());
            Ok(())
        }
        Err(err) => {
            stations.update(|s| {
                s.stations = Vec::new();
                s.error = Some(LOAD_ERROR.to_owned());
            });
            Err(err)
        }
    };

    stations.update(|s| s.is_loading = false);
    result
}

/// Create a station, then refresh the whole list — exactly one full
/// refetch, no incremental merge.
///
/// # Errors
///
/// On failure the existing records are left untouched, [`CREATE_ERROR`]
/// is recorded, and the error is returned for the caller to react to.
pub async fn create(
    stations: RwSignal<StationsState>,
    name: &str,
    location: &str,
) -> Result<(), ApiError> {
    stations.update(|s| {
        s.is_loading = true;
        s.error = None;
    });

    let result = match crate::net::api::create_station(name, location).await {
        Ok(()) => fetch_all(stations).await,
        Err(err) => {
            stations.update(|s| s.error = Some(CREATE_ERROR.to_owned()));
            Err(err)
        }
    };

    stations.update(|s| s.is_loading = false);
    result
}

/// Trigger the backend's bulk save. No request body and no local mutation.
///
/// # Errors
///
/// Records [`SAVE_ERROR`] and returns the error on failure.
pub async fn persist_all(stations: RwSignal<StationsState>) -> Result<(), ApiError> {
    stations.update(|s| {
        s.is_loading = true;
        s.error = None;
    });

    let result = match crate::net::api::save_stations().await {
        Ok(()) => Ok(()),
        Err(err) => {
            stations.update(|s| s.error = Some(SAVE_ERROR.to_owned()));
            Err(err)
        }
    };

    stations.update(|s| s.is_loading = false);
    result
}
