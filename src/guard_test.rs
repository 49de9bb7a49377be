use super::*;

#[test]
fn anonymous_user_is_bounced_from_protected_routes() {
    assert_eq!(evaluate(STATIONS_PATH, false), GuardOutcome::RedirectToLogin);
    assert_eq!(
        evaluate("/stations/central", false),
        GuardOutcome::RedirectToLogin
    );
}

#[test]
fn authenticated_user_reaches_protected_routes() {
    assert_eq!(evaluate(STATIONS_PATH, true), GuardOutcome::Allow);
}

#[test]
fn authenticated_user_is_bounced_from_login() {
    assert_eq!(evaluate(LOGIN_PATH, true), GuardOutcome::RedirectToStations);
}

#[test]
fn anonymous_user_may_visit_login_and_register() {
    assert_eq!(evaluate(LOGIN_PATH, false), GuardOutcome::Allow);
    assert_eq!(evaluate(REGISTER_PATH, false), GuardOutcome::Allow);
}

#[test]
fn register_stays_open_while_authenticated() {
    // Only the login page redirects authenticated users.
    assert_eq!(evaluate(REGISTER_PATH, true), GuardOutcome::Allow);
}

#[test]
fn prefix_lookalikes_are_not_protected() {
    assert!(requires_auth("/stations/central"));
    assert!(!requires_auth("/stationsfoo"));
    assert!(!requires_auth("/"));
}
