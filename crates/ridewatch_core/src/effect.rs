use std::path::PathBuf;

use crate::{RideRecord, SearchId};

/// Side effects requested by [`crate::update`]; executed by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch and extract rides for `date`.
    Search { search_id: SearchId, date: String },
    /// Deliver a summary of rides that matched the watch name.
    Notify { matches: Vec<RideRecord> },
    /// Write rides to a CSV file.
    ExportCsv { path: PathBuf, rides: Vec<RideRecord> },
}
