use super::*;

#[test]
fn status_401_maps_to_unauthorized() {
    assert_eq!(ApiError::from_status(401), ApiError::Unauthorized);
}

#[test]
fn status_403_maps_to_forbidden() {
    assert_eq!(ApiError::from_status(403), ApiError::Forbidden);
}

#[test]
fn other_statuses_keep_their_code() {
    assert_eq!(ApiError::from_status(500), ApiError::Status(500));
    assert_eq!(ApiError::from_status(404), ApiError::Status(404));
}

#[test]
fn only_unauthorized_invalidates_the_session() {
    assert!(ApiError::Unauthorized.invalidates_session());
    assert!(!ApiError::Forbidden.invalidates_session());
    assert!(!ApiError::Status(500).invalidates_session());
    assert!(!ApiError::Network("down".to_owned()).invalidates_session());
    assert!(!ApiError::Malformed("bad".to_owned()).invalidates_session());
}

#[test]
fn display_distinguishes_variants() {
    assert_eq!(ApiError::Unauthorized.to_string(), "unauthorized");
    assert_eq!(ApiError::Status(502).to_string(), "request failed with status 502");
}
