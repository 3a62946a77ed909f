use std::path::PathBuf;
use std::sync::Once;

use pretty_assertions::assert_eq;
use ridewatch_core::{
    update, AppState, Effect, ExportStatus, Msg, NotificationStatus, RideRecord, SearchStatus,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(ridewatch_logging::initialize_for_tests);
}

fn rides() -> Vec<RideRecord> {
    vec![
        RideRecord::new("Rahul Kumar", "06:30", "350"),
        RideRecord::new("Priya", "07:10", "Full"),
        RideRecord::new("rahul s", "09:45", "N/A"),
    ]
}

fn searching(date: &str, watch: Option<&str>) -> (AppState, u64) {
    let state = AppState::new();
    let (state, _) = update(state, Msg::DateSelected(date.to_string()));
    let (state, _) = update(state, Msg::WatchChanged(watch.map(str::to_string)));
    let (state, effects) = update(state, Msg::SearchClicked);
    let search_id = match effects.as_slice() {
        [Effect::Search { search_id, .. }] => *search_id,
        other => panic!("unexpected effects: {other:?}"),
    };
    (state, search_id)
}

#[test]
fn search_clicked_emits_search_for_selected_date() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::DateSelected(" 2025-08-14 ".to_string()));
    let (state, effects) = update(state, Msg::SearchClicked);

    assert_eq!(
        effects,
        vec![Effect::Search {
            search_id: 1,
            date: "2025-08-14".to_string(),
        }]
    );
    assert_eq!(state.view().search, SearchStatus::Searching { search_id: 1 });
}

#[test]
fn search_without_date_is_ignored() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::SearchClicked);
    assert!(effects.is_empty());
    assert_eq!(state.view().search, SearchStatus::Idle);
}

#[test]
fn completed_search_shows_rides() {
    init_logging();
    let (state, search_id) = searching("2025-08-14", None);
    let (state, effects) = update(
        state,
        Msg::SearchCompleted {
            search_id,
            rides: rides(),
            failure: None,
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.search, SearchStatus::Found { count: 3 });
    assert_eq!(view.rides, rides());
    assert_eq!(view.notification, NotificationStatus::Disabled);
    assert_eq!(view.status_line(), "Found 3 rides");
}

#[test]
fn empty_search_reports_no_results() {
    init_logging();
    let (state, search_id) = searching("2025-08-14", Some("Rahul"));
    let (state, effects) = update(
        state,
        Msg::SearchCompleted {
            search_id,
            rides: Vec::new(),
            failure: None,
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.search, SearchStatus::NoResults);
    assert_eq!(view.notification, NotificationStatus::NoMatch);
    assert_eq!(view.status_line(), "No rides found for the selected date.");
}

#[test]
fn failed_search_reports_error_and_skips_notification() {
    init_logging();
    let (state, search_id) = searching("2025-08-14", Some("Rahul"));
    let (state, effects) = update(
        state,
        Msg::SearchCompleted {
            search_id,
            rides: Vec::new(),
            failure: Some("timeout".to_string()),
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(
        view.search,
        SearchStatus::Failed {
            message: "timeout".to_string()
        }
    );
    assert!(view.rides.is_empty());
    assert_eq!(view.notification, NotificationStatus::Idle);
    assert_eq!(view.status_line(), "Network error: timeout");
}

#[test]
fn watched_driver_triggers_notification_with_matches_only() {
    init_logging();
    let (state, search_id) = searching("2025-08-14", Some("RAHUL"));
    let (state, effects) = update(
        state,
        Msg::SearchCompleted {
            search_id,
            rides: rides(),
            failure: None,
        },
    );

    assert_eq!(
        effects,
        vec![Effect::Notify {
            matches: vec![
                RideRecord::new("Rahul Kumar", "06:30", "350"),
                RideRecord::new("rahul s", "09:45", "N/A"),
            ],
        }]
    );
    assert_eq!(
        state.view().notification,
        NotificationStatus::Sending { matches: 2 }
    );

    let (state, _) = update(state, Msg::NotificationFinished(Ok(())));
    assert_eq!(
        state.view().notification,
        NotificationStatus::Sent { matches: 2 }
    );
    assert_eq!(
        state.view().notification_line().as_deref(),
        Some("Alert sent for 2 rides by \"RAHUL\"")
    );
}

#[test]
fn unmatched_watch_name_does_not_notify() {
    init_logging();
    let (state, search_id) = searching("2025-08-14", Some("Zoya"));
    let (state, effects) = update(
        state,
        Msg::SearchCompleted {
            search_id,
            rides: rides(),
            failure: None,
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.view().notification, NotificationStatus::NoMatch);
}

#[test]
fn blank_watch_name_disables_notification() {
    init_logging();
    let (state, search_id) = searching("2025-08-14", Some("   "));
    let (state, effects) = update(
        state,
        Msg::SearchCompleted {
            search_id,
            rides: rides(),
            failure: None,
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.view().watch, None);
    assert_eq!(state.view().notification, NotificationStatus::Disabled);
}

#[test]
fn notification_failure_keeps_results() {
    init_logging();
    let (state, search_id) = searching("2025-08-14", Some("Priya"));
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            search_id,
            rides: rides(),
            failure: None,
        },
    );
    let (state, effects) = update(
        state,
        Msg::NotificationFinished(Err("authentication failed".to_string())),
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.search, SearchStatus::Found { count: 3 });
    assert_eq!(view.rides.len(), 3);
    assert_eq!(
        view.notification,
        NotificationStatus::Failed {
            message: "authentication failed".to_string()
        }
    );
}

#[test]
fn stale_completion_is_ignored() {
    init_logging();
    let (state, first_id) = searching("2025-08-14", None);
    let (state, effects) = update(state, Msg::SearchClicked);
    assert_eq!(
        effects,
        vec![Effect::Search {
            search_id: first_id + 1,
            date: "2025-08-14".to_string(),
        }]
    );

    let (state, effects) = update(
        state,
        Msg::SearchCompleted {
            search_id: first_id,
            rides: rides(),
            failure: None,
        },
    );
    assert!(effects.is_empty());
    assert_eq!(
        state.view().search,
        SearchStatus::Searching {
            search_id: first_id + 1
        }
    );
    assert!(state.view().rides.is_empty());
}

#[test]
fn export_requests_csv_of_current_rides() {
    init_logging();
    let (state, search_id) = searching("2025-08-14", None);
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            search_id,
            rides: rides(),
            failure: None,
        },
    );
    let path = PathBuf::from("rides.csv");
    let (state, effects) = update(state, Msg::ExportRequested(path.clone()));

    assert_eq!(
        effects,
        vec![Effect::ExportCsv {
            path: path.clone(),
            rides: rides(),
        }]
    );

    let (state, _) = update(state, Msg::ExportFinished(Ok(3)));
    assert_eq!(state.view().export, ExportStatus::Written { path, rows: 3 });
    assert_eq!(
        state.view().export_line().as_deref(),
        Some("Wrote 3 rides to rides.csv")
    );
}

#[test]
fn export_without_rides_is_a_no_op() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::ExportRequested("out.csv".into()));
    assert!(effects.is_empty());
    assert_eq!(state.view().export, ExportStatus::NothingToExport);
}

#[test]
fn new_search_resets_previous_cycle() {
    init_logging();
    let (state, search_id) = searching("2025-08-14", Some("Priya"));
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            search_id,
            rides: rides(),
            failure: None,
        },
    );
    let (state, _) = update(state, Msg::NotificationFinished(Ok(())));
    let (state, _) = update(state, Msg::DateSelected("2025-08-15".to_string()));
    let (state, effects) = update(state, Msg::SearchClicked);

    assert_eq!(effects.len(), 1);
    let view = state.view();
    assert!(view.rides.is_empty());
    assert_eq!(view.notification, NotificationStatus::Idle);
    assert_eq!(view.export, ExportStatus::Idle);
    assert_eq!(view.watch.as_deref(), Some("Priya"));
}

#[test]
fn muted_alerts_flag_matches_without_notifying() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::AlertsMuted(true));
    let (state, _) = update(state, Msg::DateSelected("2025-08-14".to_string()));
    let (state, _) = update(state, Msg::WatchChanged(Some("rahul".to_string())));
    let (state, effects) = update(state, Msg::SearchClicked);
    let search_id = match effects.as_slice() {
        [Effect::Search { search_id, .. }] => *search_id,
        other => panic!("unexpected effects: {other:?}"),
    };

    let (state, effects) = update(
        state,
        Msg::SearchCompleted {
            search_id,
            rides: rides(),
            failure: None,
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.search, SearchStatus::Found { count: 3 });
    assert_eq!(view.notification, NotificationStatus::Flagged { matches: 2 });
    assert_eq!(
        view.notification_line().as_deref(),
        Some("Found 2 rides by \"rahul\" (alerts disabled)")
    );
}

#[test]
fn muted_alerts_still_report_missing_driver() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::AlertsMuted(true));
    let (state, _) = update(state, Msg::DateSelected("2025-08-14".to_string()));
    let (state, _) = update(state, Msg::WatchChanged(Some("Zoya".to_string())));
    let (state, _) = update(state, Msg::SearchClicked);
    let (state, effects) = update(
        state,
        Msg::SearchCompleted {
            search_id: 1,
            rides: rides(),
            failure: None,
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.view().notification, NotificationStatus::NoMatch);
}
