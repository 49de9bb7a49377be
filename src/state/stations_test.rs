use super::*;

fn station(name: &str, agency: &str) -> Station {
    Station {
        uri: name.to_lowercase(),
        agency: agency.to_owned(),
        name: name.to_owned(),
        routes: Vec::new(),
    }
}

fn loaded_state() -> StationsState {
    StationsState {
        stations: vec![
            station("Central", "metro"),
            station("North Gate", "metro"),
            station("Harbor", "ferry"),
        ],
        is_loading: false,
        error: None,
    }
}

#[test]
fn defaults_are_empty_and_idle() {
    let state = StationsState::default();
    assert!(state.stations.is_empty());
    assert!(!state.is_loading);
    assert!(state.error.is_none());
    assert_eq!(state.count(), 0);
}

#[test]
fn count_tracks_loaded_records() {
    assert_eq!(loaded_state().count(), 3);
}

#[test]
fn by_agency_filters_exact_matches() {
    let state = loaded_state();
    let metro = state.by_agency("metro");
    assert_eq!(metro.len(), 2);
    assert!(metro.iter().all(|s| s.agency == "metro"));
    assert!(state.by_agency("tram").is_empty());
}

#[test]
fn search_is_case_insensitive() {
    let state = loaded_state();
    let hits = state.search("norTH");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "North Gate");
}

#[test]
fn blank_search_returns_everything() {
    let state = loaded_state();
    assert_eq!(state.search("").len(), 3);
    assert_eq!(state.search("   ").len(), 3);
}

#[test]
fn clear_error_only_touches_the_error() {
    let mut state = loaded_state();
    state.error = Some(LOAD_ERROR.to_owned());
    state.clear_error();
    assert!(state.error.is_none());
    assert_eq!(state.count(), 3);
}

#[test]
fn reset_returns_to_defaults() {
    let mut state = loaded_state();
    state.is_loading = true;
    state.error = Some(SAVE_ERROR.to_owned());
    state.reset();
    assert_eq!(state, StationsState::default());
}

// =============================================================
// Action error discipline
//
// Off-browser builds fail every API call with a network error,
// which is exactly the failure path these assertions need.
// =============================================================

#[cfg(not(feature = "csr"))]
mod failed_actions {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn failed_fetch_empties_records_and_reports_load_error() {
        let stations = RwSignal::new(loaded_state());

        let result = block_on(fetch_all(stations));

        assert!(result.is_err());
        let state = stations.get_untracked();
        assert!(state.stations.is_empty());
        assert_eq!(state.error.as_deref(), Some(LOAD_ERROR));
        assert!(!state.is_loading);
    }

    #[test]
    fn failed_create_leaves_records_untouched() {
        let stations = RwSignal::new(loaded_state());

        let result = block_on(create(stations, "South", "53.07,8.80"));

        assert!(result.is_err());
        let state = stations.get_untracked();
        assert_eq!(state.count(), 3);
        assert_eq!(state.error.as_deref(), Some(CREATE_ERROR));
        assert!(!state.is_loading);
    }

    #[test]
    fn failed_create_returns_the_error_for_the_caller() {
        let stations = RwSignal::new(StationsState::default());
        assert!(matches!(
            block_on(create(stations, "South", "53.07,8.80")),
            Err(ApiError::Network(_))
        ));
    }

    #[test]
    fn failed_persist_keeps_records_and_reports_save_error() {
        let stations = RwSignal::new(loaded_state());

        let result = block_on(persist_all(stations));

        assert!(result.is_err());
        let state = stations.get_untracked();
        assert_eq!(state.count(), 3);
        assert_eq!(state.error.as_deref(), Some(SAVE_ERROR));
        assert!(!state.is_loading);
    }

    #[test]
    fn actions_clear_a_previously_recorded_error_first() {
        let mut seeded = loaded_state();
        seeded.error = Some(CREATE_ERROR.to_owned());
        let stations = RwSignal::new(seeded);

        let _ = block_on(fetch_all(stations));

        // The stale create error was replaced, not appended to.
        assert_eq!(stations.get_untracked().error.as_deref(), Some(LOAD_ERROR));
    }
}
