use std::path::PathBuf;

use crate::view_model::AppViewModel;
use crate::{RideRecord, WatchName};

pub type SearchId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchStatus {
    #[default]
    Idle,
    Searching {
        search_id: SearchId,
    },
    Found {
        count: usize,
    },
    /// The search ran but produced zero rides; informational, not a failure.
    NoResults,
    Failed {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NotificationStatus {
    /// No watch name configured.
    #[default]
    Disabled,
    Idle,
    NoMatch,
    /// Watched driver found while alerts are muted.
    Flagged {
        matches: usize,
    },
    Sending {
        matches: usize,
    },
    Sent {
        matches: usize,
    },
    Failed {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExportStatus {
    #[default]
    Idle,
    NothingToExport,
    Writing {
        path: PathBuf,
    },
    Written {
        path: PathBuf,
        rows: usize,
    },
    Failed {
        path: PathBuf,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    date: String,
    watch: Option<WatchName>,
    alerts_muted: bool,
    last_search_id: SearchId,
    search: SearchStatus,
    rides: Vec<RideRecord>,
    notification: NotificationStatus,
    export: ExportStatus,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            date: self.date.clone(),
            watch: self.watch.as_ref().map(|w| w.as_str().to_string()),
            search: self.search.clone(),
            rides: self.rides.clone(),
            notification: self.notification.clone(),
            export: self.export.clone(),
        }
    }

    pub fn rides(&self) -> &[RideRecord] {
        &self.rides
    }

    pub(crate) fn date(&self) -> &str {
        &self.date
    }

    pub(crate) fn set_date(&mut self, date: String) {
        self.date = date;
    }

    pub(crate) fn watch(&self) -> Option<&WatchName> {
        self.watch.as_ref()
    }

    pub(crate) fn set_watch(&mut self, watch: Option<WatchName>) {
        self.notification = if watch.is_some() {
            NotificationStatus::Idle
        } else {
            NotificationStatus::Disabled
        };
        self.watch = watch;
    }

    pub(crate) fn alerts_muted(&self) -> bool {
        self.alerts_muted
    }

    pub(crate) fn set_alerts_muted(&mut self, muted: bool) {
        self.alerts_muted = muted;
    }

    /// Starts a new search, discarding the previous cycle's results.
    pub(crate) fn begin_search(&mut self) -> SearchId {
        self.last_search_id += 1;
        let search_id = self.last_search_id;
        self.search = SearchStatus::Searching { search_id };
        self.rides.clear();
        self.export = ExportStatus::Idle;
        let watch = self.watch.take();
        self.set_watch(watch);
        search_id
    }

    pub(crate) fn is_current_search(&self, search_id: SearchId) -> bool {
        matches!(self.search, SearchStatus::Searching { search_id: id } if id == search_id)
    }

    pub(crate) fn complete_search(&mut self, rides: Vec<RideRecord>, failure: Option<String>) {
        self.search = match failure {
            Some(message) => SearchStatus::Failed { message },
            None if rides.is_empty() => SearchStatus::NoResults,
            None => SearchStatus::Found { count: rides.len() },
        };
        self.rides = rides;
    }

    pub(crate) fn notification(&self) -> &NotificationStatus {
        &self.notification
    }

    pub(crate) fn set_notification(&mut self, status: NotificationStatus) {
        self.notification = status;
    }

    pub(crate) fn export(&self) -> &ExportStatus {
        &self.export
    }

    pub(crate) fn set_export(&mut self, status: ExportStatus) {
        self.export = status;
    }
}
