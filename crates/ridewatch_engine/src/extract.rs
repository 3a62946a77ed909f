use ridewatch_core::{RideRecord, PRICE_SENTINEL};
use ridewatch_logging::{ride_debug, ride_warn};
use serde::Deserialize;

use crate::dom::{ElementHandle, HtmlDocument, Query, QueryError};

/// CSS selectors identifying the parts of a trip card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RideMarkers {
    pub driver_name: String,
    pub departure_time: String,
    pub price_value: String,
    /// Inside a price container: status text replacing the price.
    pub not_available: String,
    /// Inside a price container: currency symbol, struck-through price or price.
    pub price_part: String,
}

impl Default for RideMarkers {
    fn default() -> Self {
        Self {
            driver_name: r#"span[data-testid="e2e-tripcard-driver-name"]"#.to_string(),
            departure_time: r#"p[data-testid="e2e-itinerary-departure-time"]"#.to_string(),
            price_value: r#"span[data-testid="e2e-tripcard-price-price-value"]"#.to_string(),
            not_available: r#"p[data-testid="e2e-trip-card-not-available"]"#.to_string(),
            price_part: "span".to_string(),
        }
    }
}

pub trait ListingExtractor: Send + Sync {
    /// Never fails; markup without matches yields no rides.
    fn extract(&self, html: &str) -> Vec<RideRecord>;
}

/// Extracts rides from search result trip cards.
///
/// Names, times and price containers are located independently and paired by
/// position, so the result is as long as the shortest of the three lists.
#[derive(Debug, Clone)]
pub struct TripCardExtractor {
    driver_name: Query,
    departure_time: Query,
    price_value: Query,
    not_available: Query,
    price_part: Query,
}

impl TripCardExtractor {
    pub fn new(markers: &RideMarkers) -> Result<Self, QueryError> {
        Ok(Self {
            driver_name: Query::parse(&markers.driver_name)?,
            departure_time: Query::parse(&markers.departure_time)?,
            price_value: Query::parse(&markers.price_value)?,
            not_available: Query::parse(&markers.not_available)?,
            price_part: Query::parse(&markers.price_part)?,
        })
    }

    /// Status marker first, then the second price part, then the only one.
    fn resolve_price(&self, container: &ElementHandle<'_>) -> String {
        if let Some(status) = container.find_first(&self.not_available) {
            return status.text();
        }
        let parts = container.find_all(&self.price_part);
        match parts.as_slice() {
            [] => PRICE_SENTINEL.to_string(),
            [only] => only.text(),
            [_, second, ..] => second.text(),
        }
    }
}

impl ListingExtractor for TripCardExtractor {
    fn extract(&self, html: &str) -> Vec<RideRecord> {
        let doc = HtmlDocument::parse(html);
        let names = doc.find_all(&self.driver_name);
        let times = doc.find_all(&self.departure_time);
        let prices = doc.find_all(&self.price_value);

        if names.len() != times.len() || names.len() != prices.len() {
            ride_warn!(
                "trip card parts differ in count (names={}, times={}, prices={}); keeping the first {}",
                names.len(),
                times.len(),
                prices.len(),
                names.len().min(times.len()).min(prices.len())
            );
        }

        let rides: Vec<RideRecord> = names
            .iter()
            .zip(&times)
            .zip(&prices)
            .map(|((name, time), price)| {
                RideRecord::new(name.text(), time.text(), self.resolve_price(price))
            })
            .collect();
        ride_debug!("extracted {} rides", rides.len());
        rides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> TripCardExtractor {
        TripCardExtractor::new(&RideMarkers::default()).unwrap()
    }

    fn card(name: &str, time: &str, price_inner: &str) -> String {
        format!(
            r#"<div>
                <span data-testid="e2e-tripcard-driver-name"> {name} </span>
                <p data-testid="e2e-itinerary-departure-time">{time}</p>
                <span data-testid="e2e-tripcard-price-price-value">{price_inner}</span>
            </div>"#
        )
    }

    fn only_price(price_inner: &str) -> String {
        let rides = extractor().extract(&card("A", "10:00", price_inner));
        assert_eq!(rides.len(), 1);
        rides[0].price_or_status.clone()
    }

    #[test]
    fn status_marker_wins_over_price_parts() {
        let inner = r#"<span>₹</span><span>350</span>
            <p data-testid="e2e-trip-card-not-available"> Full </p>"#;
        assert_eq!(only_price(inner), "Full");
    }

    #[test]
    fn second_price_part_is_used() {
        assert_eq!(only_price("<span>₹</span><span> 350 </span>"), "350");
    }

    #[test]
    fn single_price_part_is_used() {
        assert_eq!(only_price("<span>Full</span>"), "Full");
    }

    #[test]
    fn missing_price_parts_yield_sentinel() {
        assert_eq!(only_price(""), PRICE_SENTINEL);
        assert_eq!(only_price("just text"), PRICE_SENTINEL);
    }

    #[test]
    fn invalid_marker_fails_construction() {
        let markers = RideMarkers {
            price_part: "span[".to_string(),
            ..RideMarkers::default()
        };
        assert!(TripCardExtractor::new(&markers).is_err());
    }
}
