pub mod admin_map;
pub mod alert_feed;
pub mod alert_gate;
pub mod api_client;
pub mod channel;
pub mod location;
pub mod notifier;
pub mod rider_session;
pub mod zone_poller;

pub use admin_map::AdminLiveMapController;
pub use alert_feed::{format_position_entry, AlertFeed, FeedEntry};
pub use alert_gate::{route_alert, AlertGate, ALERT_COOLDOWN_MS};
pub use api_client::ApiClient;
pub use channel::DuplexChannel;
pub use rider_session::{SessionPhase, ShiftController};
pub use zone_poller::ZonePoller;
