use serde::Serialize;

/// Value used for `price_or_status` when a listing carries no price data.
pub const PRICE_SENTINEL: &str = "N/A";

/// Column names shared by the table view and the CSV export.
pub const COLUMN_HEADERS: [&str; 3] = ["Driver", "Time", "Price / Status"];

/// One ride listing as shown on the search results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RideRecord {
    pub driver: String,
    /// Departure time exactly as displayed; not parsed.
    pub departure_time: String,
    /// A price, a status such as "Full", or [`PRICE_SENTINEL`].
    pub price_or_status: String,
}

impl RideRecord {
    pub fn new(
        driver: impl Into<String>,
        departure_time: impl Into<String>,
        price_or_status: impl Into<String>,
    ) -> Self {
        Self {
            driver: driver.into(),
            departure_time: departure_time.into(),
            price_or_status: price_or_status.into(),
        }
    }

    /// Fields in [`COLUMN_HEADERS`] order.
    pub fn columns(&self) -> [&str; 3] {
        [&self.driver, &self.departure_time, &self.price_or_status]
    }
}
