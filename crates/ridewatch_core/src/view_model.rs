use crate::{ExportStatus, NotificationStatus, RideRecord, SearchStatus};

/// Snapshot of everything the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub date: String,
    pub watch: Option<String>,
    pub search: SearchStatus,
    pub rides: Vec<RideRecord>,
    pub notification: NotificationStatus,
    pub export: ExportStatus,
}

impl AppViewModel {
    /// One-line summary of the last search.
    pub fn status_line(&self) -> String {
        match &self.search {
            SearchStatus::Idle => "Select a date and search".to_string(),
            SearchStatus::Searching { .. } => format!("Fetching rides for {}...", self.date),
            SearchStatus::Found { count } => format!("Found {count} rides"),
            SearchStatus::NoResults => "No rides found for the selected date.".to_string(),
            SearchStatus::Failed { message } => format!("Network error: {message}"),
        }
    }

    /// Notification outcome, if there is anything to report.
    pub fn notification_line(&self) -> Option<String> {
        let watch = self.watch.as_deref().unwrap_or_default();
        match &self.notification {
            NotificationStatus::Disabled | NotificationStatus::Idle => None,
            NotificationStatus::NoMatch => Some(format!("No rides by \"{watch}\"")),
            NotificationStatus::Flagged { matches } => Some(format!(
                "Found {matches} rides by \"{watch}\" (alerts disabled)"
            )),
            NotificationStatus::Sending { matches } => {
                Some(format!("Sending alert for {matches} rides by \"{watch}\"..."))
            }
            NotificationStatus::Sent { matches } => {
                Some(format!("Alert sent for {matches} rides by \"{watch}\""))
            }
            NotificationStatus::Failed { message } => {
                Some(format!("Failed to send alert: {message}"))
            }
        }
    }

    pub fn export_line(&self) -> Option<String> {
        match &self.export {
            ExportStatus::Idle => None,
            ExportStatus::NothingToExport => Some("Nothing to export".to_string()),
            ExportStatus::Writing { path } => Some(format!("Writing {}...", path.display())),
            ExportStatus::Written { path, rows } => {
                Some(format!("Wrote {rows} rides to {}", path.display()))
            }
            ExportStatus::Failed { path, message } => {
                Some(format!("Failed to write {}: {message}", path.display()))
            }
        }
    }
}
