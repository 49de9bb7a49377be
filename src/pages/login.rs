//! Login page with username/password form.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::guard;
use crate::net::error::ApiError;
use crate::state::auth::{self, AuthState};

/// Login page — authenticated users are bounced to the station listing by
/// the guard; a 401 here is a bad password, never a session teardown.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    super::enforce_guard(guard::LOGIN_PATH, auth);

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let navigate = use_navigate();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        error.set(None);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result =
                auth::login(auth, &username.get_untracked(), &password.get_untracked()).await;
            pending.set(false);
            match result {
                Ok(()) => navigate(guard::STATIONS_PATH, NavigateOptions::default()),
                Err(ApiError::Unauthorized) => {
                    error.set(Some("Invalid username or password.".to_owned()));
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="login-page">
            <h1>"Station Manager"</h1>
            <form class="login-page__form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=username
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=password
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            {move || {
                error.get().map(|msg| view! { <p class="login-page__error">{msg}</p> })
            }}
            <p class="login-page__hint">
                "No account yet? " <a href=guard::REGISTER_PATH>"Register"</a>
            </p>
        </div>
    }
}
