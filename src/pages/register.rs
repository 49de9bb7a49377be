//! Registration page.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::guard;
use crate::state::auth::{self, AuthState};

/// Registration page — a successful registration does not log the user
/// in; they are sent to the login page to sign in themselves.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    super::enforce_guard(guard::REGISTER_PATH, auth);

    let name = RwSignal::new(String::new());
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
            let result = auth::register(
                &name.get_untracked(),
                &username.get_untracked(),
                &password.get_untracked(),
            )
            .await;
            pending.set(false);
            match result {
                Ok(()) => navigate(guard::LOGIN_PATH, NavigateOptions::default()),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="register-page">
            <h1>"Create account"</h1>
            <form class="register-page__form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=name
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
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
                    {move || if pending.get() { "Registering..." } else { "Register" }}
                </button>
            </form>
            {move || {
                error.get().map(|msg| view! { <p class="register-page__error">{msg}</p> })
            }}
            <p class="register-page__hint">
                "Already registered? " <a href=guard::LOGIN_PATH>"Sign in"</a>
            </p>
        </div>
    }
}
