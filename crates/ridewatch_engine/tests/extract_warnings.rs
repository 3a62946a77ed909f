//! Runs in its own test binary: it owns the global logger.

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use ridewatch_engine::{ListingExtractor, RideMarkers, TripCardExtractor};

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if record.target().starts_with("ridewatch_engine") {
            if let Ok(mut records) = self.records.lock() {
                records.push((record.level(), record.args().to_string()));
            }
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

fn take_warnings() -> Vec<String> {
    let mut records = LOGGER.records.lock().unwrap();
    records
        .drain(..)
        .filter(|(level, _)| *level == Level::Warn)
        .map(|(_, message)| message)
        .collect()
}

fn page(names: usize, times: usize, prices: usize) -> String {
    let mut html = String::from("<html><body>");
    for i in 0..names {
        html.push_str(&format!(
            r#"<span data-testid="e2e-tripcard-driver-name">Driver {i}</span>"#
        ));
    }
    for i in 0..times {
        html.push_str(&format!(
            r#"<p data-testid="e2e-itinerary-departure-time">0{i}:00</p>"#
        ));
    }
    for _ in 0..prices {
        html.push_str(
            r#"<span data-testid="e2e-tripcard-price-price-value"><span>₹</span><span>300</span></span>"#,
        );
    }
    html.push_str("</body></html>");
    html
}

// Single test so no other test in this binary logs concurrently.
#[test]
fn count_mismatch_logs_one_warning() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);
    let extractor = TripCardExtractor::new(&RideMarkers::default()).unwrap();

    let rides = extractor.extract(&page(3, 3, 3));
    assert_eq!(rides.len(), 3);
    assert!(take_warnings().is_empty());

    let rides = extractor.extract(&page(3, 2, 3));
    assert_eq!(rides.len(), 2);
    let warnings = take_warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("names=3, times=2, prices=3"));
}
