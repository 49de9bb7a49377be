//! Station listing page: fetch on mount, create, bulk save, logout.

#[cfg(test)]
#[path = "stations_test.rs"]
mod stations_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::station_card::StationCard;
use crate::components::station_form::StationForm;
use crate::guard;
use crate::net::error::ApiError;
use crate::state::auth::{self, AuthState};
use crate::state::stations::{self, StationsState};

/// Route a failed protected call: expired sessions go through the
/// top-level handler, everything else was already recorded in the store.
fn react_to_error(auth: RwSignal<AuthState>, err: &ApiError) {
    if err.invalidates_session() {
        auth::expire_to_login(auth);
    }
}

/// Whether the mount fetch should fire. Anonymous visitors are about to
/// be bounced by the guard; firing the request anyway would answer 401
/// and turn the guard's soft navigate into a hard expiry redirect.
fn fetch_on_mount(state: &AuthState) -> bool {
    state.is_authenticated
}

/// Station listing page. Guard-protected; fetches the list on mount.
#[component]
pub fn StationsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let stations = expect_context::<RwSignal<StationsState>>();
    super::enforce_guard(guard::STATIONS_PATH, auth);

    // Initial fetch on mount, skipped for anonymous visitors.
    if fetch_on_mount(&auth.get_untracked()) {
        leptos::task::spawn_local(async move {
            if let Err(err) = stations::fetch_all(stations).await {
                react_to_error(auth, &err);
            }
        });
    }

    let on_create = Callback::new(move |(name, location): (String, String)| {
        leptos::task::spawn_local(async move {
            if let Err(err) = stations::create(stations, &name, &location).await {
                react_to_error(auth, &err);
            }
        });
    });

    let on_save = move |_| {
        leptos::task::spawn_local(async move {
            if let Err(err) = stations::persist_all(stations).await {
                react_to_error(auth, &err);
            }
        });
    };

    let navigate = use_navigate();
    let on_logout = move |_| {
        auth::logout(auth);
        navigate(guard::LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="stations-page">
            <header class="stations-page__header">
                <h1>"Stations"</h1>
                <span class="stations-page__user">{move || auth.get().username}</span>
                <button class="btn" on:click=on_save>"Save all"</button>
                <button class="btn" on:click=on_logout>"Log out"</button>
            </header>

            {move || {
                stations.get().error.map(|msg| {
                    view! {
                        <div class="stations-page__error">
                            <span>{msg}</span>
                            <button class="btn" on:click=move |_| {
                                stations.update(StationsState::clear_error)
                            }>"Dismiss"</button>
                        </div>
                    }
                })
            }}

            <StationForm on_create=on_create/>

            {move || {
                stations
                    .get()
                    .is_loading
                    .then(|| view! { <p class="stations-page__loading">"Loading stations..."</p> })
            }}

            <ul class="stations-page__list">
                {move || {
                    stations
                        .get()
                        .stations
                        .into_iter()
                        .map(|station| view! { <StationCard station=station/> })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
