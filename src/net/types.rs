//! Wire types for the station-manager REST API.
//!
//! The backend wraps every successful body in an envelope
//! `{ "message": ..., "data": ... }` where the shape of `data` depends on
//! the endpoint. Station records are read-only projections of server data;
//! the client never edits individual fields, it only replaces the whole
//! collection on fetch.

use serde::{Deserialize, Serialize};

/// Response envelope. `data` is kept as raw JSON and decoded in a second,
/// endpoint-specific step so a surprising payload becomes a tagged
/// `Malformed` error instead of a crash.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Token pair returned by a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub token: String,
    pub refresh_token: String,
}

/// A transit station with its routes, as served by `GET /stations`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    #[serde(rename = "stationUri", default)]
    pub uri: String,
    #[serde(rename = "stationAgency", default)]
    pub agency: String,
    #[serde(rename = "stationName", default)]
    pub name: String,
    #[serde(rename = "stationRoutes", default)]
    pub routes: Vec<StationRoute>,
}

/// A route serving a station.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationRoute {
    #[serde(rename = "routeGroupId", default)]
    pub group_id: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub stop_times_count: u32,
    #[serde(default)]
    pub stop_times: Vec<StopTime>,
}

/// A scheduled departure on a route.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopTime {
    #[serde(default)]
    pub service_id: i64,
    #[serde(default)]
    pub departure_time: String,
    #[serde(default)]
    pub departure_timestamp: i64,
    #[serde(default)]
    pub shape: String,
}

/// Body for `POST /authentication/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Body for `POST /authentication/register`.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub username: &'a str,
    pub password: &'a str,
}

/// Body for creating a station via `POST /stations/save`.
#[derive(Clone, Debug, Serialize)]
pub struct CreateStationRequest<'a> {
    pub name: &'a str,
    pub location: &'a str,
}
