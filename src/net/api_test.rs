use super::*;

// =============================================================
// Login envelope
// =============================================================

#[test]
fn token_pair_decodes_from_nested_envelope() {
    let body = r#"{
        "message": "User logged in successfully",
        "data": { "token": "jwt-token", "refreshToken": "jwt-refresh" }
    }"#;
    let pair = token_pair_from_body(body).expect("token pair");
    assert_eq!(pair.token, "jwt-token");
    assert_eq!(pair.refresh_token, "jwt-refresh");
}

#[test]
fn token_pair_missing_fields_is_malformed() {
    let body = r#"{ "message": "ok", "data": { "token": "only-half" } }"#;
    assert!(matches!(
        token_pair_from_body(body),
        Err(ApiError::Malformed(_))
    ));
}

#[test]
fn token_pair_without_data_is_malformed() {
    let body = r#"{ "message": "ok" }"#;
    assert!(matches!(
        token_pair_from_body(body),
        Err(ApiError::Malformed(_))
    ));
}

// =============================================================
// Stations envelope coercion
// =============================================================

#[test]
fn stations_decode_from_envelope_list() {
    let body = r#"{
        "message": "ok",
        "data": [
            {
                "stationUri": "central",
                "stationAgency": "metro",
                "stationName": "Central",
                "stationRoutes": [
                    {
                        "routeGroupId": "g1",
                        "uri": "r1",
                        "name": "Line 1",
                        "stopTimesCount": 1,
                        "stopTimes": [
                            {
                                "serviceId": 7,
                                "departureTime": "08:15",
                                "departureTimestamp": 1700000000,
                                "shape": "loop"
                            }
                        ]
                    }
                ]
            }
        ]
    }"#;
    let stations = stations_from_body(body).expect("stations");
    assert_eq!(stations.len(), 1);
    let station = &stations[0];
    assert_eq!(station.uri, "central");
    assert_eq!(station.agency, "metro");
    assert_eq!(station.name, "Central");
    assert_eq!(station.routes.len(), 1);
    let route = &station.routes[0];
    assert_eq!(route.group_id, "g1");
    assert_eq!(route.stop_times_count, 1);
    assert_eq!(route.stop_times[0].service_id, 7);
    assert_eq!(route.stop_times[0].departure_time, "08:15");
    assert_eq!(route.stop_times[0].departure_timestamp, 1_700_000_000);
    assert_eq!(route.stop_times[0].shape, "loop");
}

#[test]
fn stations_decode_from_bare_list_body() {
    let body = r#"[ { "stationUri": "north", "stationAgency": "bus", "stationName": "North" } ]"#;
    let stations = stations_from_body(body).expect("stations");
    assert_eq!(stations.len(), 1);
    assert_eq!(stations[0].name, "North");
    assert!(stations[0].routes.is_empty());
}

#[test]
fn non_list_data_coerces_to_empty_without_error() {
    let body = r#"{ "message": "ok", "data": { "unexpected": true } }"#;
    let stations = stations_from_body(body).expect("coerced");
    assert!(stations.is_empty());
}

#[test]
fn object_body_without_data_coerces_to_empty() {
    let body = r#"{ "message": "ok" }"#;
    let stations = stations_from_body(body).expect("coerced");
    assert!(stations.is_empty());
}

#[test]
fn scalar_body_coerces_to_empty() {
    let stations = stations_from_body("42").expect("coerced");
    assert!(stations.is_empty());
}

#[test]
fn unparseable_body_is_malformed() {
    assert!(matches!(
        stations_from_body("not json"),
        Err(ApiError::Malformed(_))
    ));
}

#[test]
fn station_entries_tolerate_missing_fields() {
    let body = r#"{ "data": [ {} ] }"#;
    let stations = stations_from_body(body).expect("defaults");
    assert_eq!(stations.len(), 1);
    assert!(stations[0].uri.is_empty());
    assert!(stations[0].routes.is_empty());
}
