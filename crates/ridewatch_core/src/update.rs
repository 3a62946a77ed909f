use crate::{AppState, Effect, ExportStatus, Msg, NotificationStatus, WatchName};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::DateSelected(date) => {
            state.set_date(date.trim().to_string());
            Vec::new()
        }
        Msg::WatchChanged(raw) => {
            state.set_watch(raw.as_deref().and_then(WatchName::new));
            Vec::new()
        }
        Msg::AlertsMuted(muted) => {
            state.set_alerts_muted(muted);
            Vec::new()
        }
        Msg::SearchClicked => {
            if state.date().is_empty() {
                return (state, Vec::new());
            }
            let search_id = state.begin_search();
            let date = state.date().to_string();
            vec![Effect::Search { search_id, date }]
        }
        Msg::SearchCompleted {
            search_id,
            rides,
            failure,
        } => {
            // A newer search superseded this one.
            if !state.is_current_search(search_id) {
                return (state, Vec::new());
            }
            let failed = failure.is_some();
            state.complete_search(rides, failure);
            if failed {
                return (state, Vec::new());
            }
            notify_effects(&mut state)
        }
        Msg::NotificationFinished(result) => {
            let sending = match state.notification() {
                NotificationStatus::Sending { matches } => Some(*matches),
                _ => None,
            };
            if let Some(matches) = sending {
                state.set_notification(match result {
                    Ok(()) => NotificationStatus::Sent { matches },
                    Err(message) => NotificationStatus::Failed { message },
                });
            }
            Vec::new()
        }
        Msg::ExportRequested(path) => {
            if state.rides().is_empty() {
                state.set_export(ExportStatus::NothingToExport);
                return (state, Vec::new());
            }
            state.set_export(ExportStatus::Writing { path: path.clone() });
            vec![Effect::ExportCsv {
                path,
                rides: state.rides().to_vec(),
            }]
        }
        Msg::ExportFinished(result) => {
            let writing = match state.export() {
                ExportStatus::Writing { path } => Some(path.clone()),
                _ => None,
            };
            if let Some(path) = writing {
                state.set_export(match result {
                    Ok(rows) => ExportStatus::Written { path, rows },
                    Err(message) => ExportStatus::Failed { path, message },
                });
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn notify_effects(state: &mut AppState) -> Vec<Effect> {
    let Some(watch) = state.watch() else {
        return Vec::new();
    };
    let matches = watch.matching(state.rides());
    if matches.is_empty() {
        state.set_notification(NotificationStatus::NoMatch);
        return Vec::new();
    }
    if state.alerts_muted() {
        state.set_notification(NotificationStatus::Flagged {
            matches: matches.len(),
        });
        return Vec::new();
    }
    state.set_notification(NotificationStatus::Sending {
        matches: matches.len(),
    });
    vec![Effect::Notify { matches }]
}
