//! Card for a single station in the listing.

use leptos::prelude::*;

use crate::net::types::Station;

/// A station list entry: name, agency, and a route summary.
#[component]
pub fn StationCard(station: Station) -> impl IntoView {
    let route_summary = match station.routes.len() {
        0 => "no routes".to_owned(),
        1 => "1 route".to_owned(),
        n => format!("{n} routes"),
    };

    view! {
        <li class="station-card">
            <span class="station-card__name">{station.name}</span>
            <span class="station-card__agency">{station.agency}</span>
            <span class="station-card__routes">{route_summary}</span>
        </li>
    }
}
