use std::path::PathBuf;

use crate::RideRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a search date (`YYYY-MM-DD`).
    DateSelected(String),
    /// User set or cleared the driver name to watch for.
    WatchChanged(Option<String>),
    /// Alerts switched off or on. Matches are still flagged while muted.
    AlertsMuted(bool),
    /// User triggered a search for the selected date.
    SearchClicked,
    /// Engine finished a search. `failure` is set when the fetch failed, in
    /// which case `rides` is empty.
    SearchCompleted {
        search_id: crate::SearchId,
        rides: Vec<RideRecord>,
        failure: Option<String>,
    },
    /// Notification delivery finished.
    NotificationFinished(Result<(), String>),
    /// User asked for the current rides as CSV.
    ExportRequested(PathBuf),
    /// CSV export finished with the number of rows written.
    ExportFinished(Result<usize, String>),
    /// Fallback for placeholder wiring.
    NoOp,
}
