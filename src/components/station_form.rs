//! Inline form for creating a station.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Name + location inputs; submits through `on_create` and clears itself.
/// Blank fields are ignored rather than sent to the backend.
#[component]
pub fn StationForm(on_create: Callback<(String, String)>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get_untracked();
        let location_value = location.get_untracked();
        if name_value.trim().is_empty() || location_value.trim().is_empty() {
            return;
        }
        on_create.run((name_value, location_value));
        name.set(String::new());
        location.set(String::new());
    };

    view! {
        <form class="station-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Station name"
                prop:value=name
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Location"
                prop:value=location
                on:input=move |ev| location.set(event_target_value(&ev))
            />
            <button type="submit" class="btn btn--primary">"Add station"</button>
        </form>
    }
}
