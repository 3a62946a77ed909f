use ridewatch_core::RideRecord;
use ridewatch_logging::{ride_debug, ride_info, ride_warn};

use crate::decode::decode_body;
use crate::extract::ListingExtractor;
use crate::fetch::Fetcher;
use crate::search_url::SearchUrlBuilder;
use crate::FetchError;

/// Result of one fetch-and-extract cycle.
///
/// On failure `rides` is empty and `failure` says why; no partial data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub url: String,
    pub rides: Vec<RideRecord>,
    pub failure: Option<FetchError>,
}

impl SearchReport {
    pub fn is_empty(&self) -> bool {
        self.rides.is_empty()
    }
}

/// URL builder, fetcher and extractor wired into one pipeline.
pub struct RideSearch<F, E> {
    urls: SearchUrlBuilder,
    fetcher: F,
    extractor: E,
}

impl<F: Fetcher, E: ListingExtractor> RideSearch<F, E> {
    pub fn new(urls: SearchUrlBuilder, fetcher: F, extractor: E) -> Self {
        Self {
            urls,
            fetcher,
            extractor,
        }
    }

    /// Fetch failures are logged and folded into the report, never returned.
    pub async fn run(&self, date: &str) -> SearchReport {
        let url = self.urls.build(date);
        ride_info!("searching rides for {}", date);

        let output = match self.fetcher.fetch(&url).await {
            Ok(output) => output,
            Err(err) => {
                ride_warn!("search for {} failed: {}", date, err);
                return SearchReport {
                    url,
                    rides: Vec::new(),
                    failure: Some(err),
                };
            }
        };

        let decoded = decode_body(&output.bytes, output.metadata.content_type.as_deref());
        ride_debug!(
            "decoded {} bytes as {}",
            output.metadata.byte_len,
            decoded.encoding_label
        );
        let rides = self.extractor.extract(&decoded.html);
        ride_info!("found {} rides for {}", rides.len(), date);
        SearchReport {
            url,
            rides,
            failure: None,
        }
    }
}
