//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{login::LoginPage, register::RegisterPage, stations::StationsPage};
use crate::state::{auth, auth::AuthState, stations::StationsState};

/// Root application component.
///
/// Creates the single session and station-list contexts, restores a
/// persisted session before the first route renders, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // One session and one station list for the whole process.
    let auth_state = RwSignal::new(AuthState::default());
    let stations_state = RwSignal::new(StationsState::default());
    provide_context(auth_state);
    provide_context(stations_state);

    // Restore a persisted session before the guard sees any route.
    auth::initialize(auth_state);

    view! {
        <Title text="Station Manager"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/login"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("stations") view=StationsPage/>
            </Routes>
        </Router>
    }
}
