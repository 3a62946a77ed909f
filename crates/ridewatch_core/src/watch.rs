use crate::RideRecord;

/// Driver-name substring that triggers a notification when matched.
///
/// Matching is case-insensitive. Blank input never produces a watch name,
/// so an empty pattern cannot match every ride.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchName {
    display: String,
    needle: String,
}

impl WatchName {
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            display: trimmed.to_string(),
            needle: trimmed.to_lowercase(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.display
    }

    pub fn matches(&self, ride: &RideRecord) -> bool {
        ride.driver.to_lowercase().contains(&self.needle)
    }

    /// Rides whose driver contains the watch name, in input order.
    pub fn matching(&self, rides: &[RideRecord]) -> Vec<RideRecord> {
        rides
            .iter()
            .filter(|ride| self.matches(ride))
            .cloned()
            .collect()
    }
}
