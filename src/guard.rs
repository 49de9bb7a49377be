//! Navigation guard: authentication gating for route transitions.
//!
//! The decision is a pure function over the target path and the session
//! flag; pages apply the outcome through the router (see
//! `pages::enforce_guard`). Session expiry mid-flight is handled
//! separately by `state::auth::expire_to_login`.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

/// Login page path.
pub const LOGIN_PATH: &str = "/login";
/// Registration page path.
pub const REGISTER_PATH: &str = "/register";
/// Station listing path.
pub const STATIONS_PATH: &str = "/stations";

/// Paths that require an authenticated session (including subpaths).
const PROTECTED: &[&str] = &[STATIONS_PATH];

/// Decision for an attempted navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    RedirectToLogin,
    RedirectToStations,
}

/// True when the path is gated on authentication.
pub fn requires_auth(path: &str) -> bool {
    PROTECTED.iter().any(|protected| {
        path == *protected
            || path
                .strip_prefix(protected)
                .is_some_and(|rest| rest.starts_with('/'))
    })
}

/// Evaluate a navigation target against the session state.
///
/// Protected paths bounce anonymous users to the login page; the login
/// page bounces already-authenticated users to the station listing;
/// everything else passes through unchanged.
pub fn evaluate(path: &str, authenticated: bool) -> GuardOutcome {
    if requires_auth(path) && !authenticated {
        return GuardOutcome::RedirectToLogin;
    }
    if path == LOGIN_PATH && authenticated {
        return GuardOutcome::RedirectToStations;
    }
    GuardOutcome::Allow
}
