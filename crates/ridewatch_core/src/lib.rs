//! Ridewatch core: ride records, presentation helpers and the pure
//! search/notify/export state machine.
mod effect;
mod msg;
mod ride;
mod state;
mod table;
mod update;
mod view_model;
mod watch;

pub use effect::Effect;
pub use msg::Msg;
pub use ride::{RideRecord, COLUMN_HEADERS, PRICE_SENTINEL};
pub use state::{AppState, ExportStatus, NotificationStatus, SearchId, SearchStatus};
pub use table::render_table;
pub use update::update;
pub use view_model::AppViewModel;
pub use watch::WatchName;
