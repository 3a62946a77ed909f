//! Ridewatch engine: search URL, fetch, extraction, export and notification IO.
mod decode;
mod dom;
mod export;
mod extract;
mod fetch;
mod notify;
mod search;
mod search_url;
mod types;

pub use decode::{decode_body, DecodedHtml};
pub use dom::{ElementHandle, HtmlDocument, Query, QueryError};
pub use export::{export_csv, rides_to_csv, ExportError};
pub use extract::{ListingExtractor, RideMarkers, TripCardExtractor};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use notify::{
    compose_alert, Notifier, NotifierConfig, NotifyError, SmtpNotifier, ALERT_SUBJECT,
};
pub use search::{RideSearch, SearchReport};
pub use search_url::{SearchUrlBuilder, UrlTemplateError, DATE_PLACEHOLDER, DEFAULT_SEARCH_TEMPLATE};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput};
