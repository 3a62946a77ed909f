use ridewatch_core::{Effect, Msg};
use ridewatch_engine::{
    export_csv, Notifier, ReqwestFetcher, RideSearch, SearchUrlBuilder, TripCardExtractor,
};
use ridewatch_logging::{ride_info, ride_warn};

use super::config::AppConfig;

/// Executes effects synchronously; the search is driven to completion on a
/// current-thread runtime before the resulting message is returned.
pub struct EffectRunner {
    runtime: tokio::runtime::Runtime,
    search: RideSearch<ReqwestFetcher, TripCardExtractor>,
    notifier: Result<Box<dyn Notifier>, String>,
}

impl EffectRunner {
    pub fn new(
        config: &AppConfig,
        notifier: Result<Box<dyn Notifier>, String>,
    ) -> anyhow::Result<Self> {
        let urls = match &config.search_template {
            Some(template) => SearchUrlBuilder::with_template(template)?,
            None => SearchUrlBuilder::default(),
        };
        let extractor = TripCardExtractor::new(&config.markers)?;
        let fetcher = ReqwestFetcher::new(config.fetch_settings());
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        Ok(Self {
            runtime,
            search: RideSearch::new(urls, fetcher, extractor),
            notifier,
        })
    }

    pub fn execute(&self, effect: Effect) -> Msg {
        match effect {
            Effect::Search { search_id, date } => {
                let report = self.runtime.block_on(self.search.run(&date));
                ride_info!("search {} finished: {} rides", search_id, report.rides.len());
                Msg::SearchCompleted {
                    search_id,
                    rides: report.rides,
                    failure: report.failure.map(|err| err.to_string()),
                }
            }
            Effect::Notify { matches } => {
                let result = match &self.notifier {
                    Ok(notifier) => notifier.notify(&matches).map_err(|err| err.to_string()),
                    Err(reason) => Err(reason.clone()),
                };
                if let Err(err) = &result {
                    ride_warn!("Notification failed: {}", err);
                }
                Msg::NotificationFinished(result)
            }
            Effect::ExportCsv { path, rides } => {
                let result = export_csv(&path, &rides).map_err(|err| err.to_string());
                if let Err(err) = &result {
                    ride_warn!("Export to {:?} failed: {}", path, err);
                }
                Msg::ExportFinished(result)
            }
        }
    }
}
