//! Page components and the shared guard effect.

pub mod login;
pub mod register;
pub mod stations;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::guard::{self, GuardOutcome};
use crate::state::auth::AuthState;

/// Apply the navigation guard for a page.
///
/// Runs as an effect so a session change while the page is showing (for
/// example a logout in another part of the UI) re-evaluates the decision.
pub fn enforce_guard(path: &'static str, auth: RwSignal<AuthState>) {
    let navigate = use_navigate();
    Effect::new(move || {
        match guard::evaluate(path, auth.get().is_authenticated) {
            GuardOutcome::Allow => {}
            GuardOutcome::RedirectToLogin => {
                navigate(guard::LOGIN_PATH, NavigateOptions::default());
            }
            GuardOutcome::RedirectToStations => {
                navigate(guard::STATIONS_PATH, NavigateOptions::default());
            }
        }
    });
}
