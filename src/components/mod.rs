mod admin_map;
mod alert_feed;
mod app;
mod leaderboard;
mod rider_console;

pub use admin_map::AdminMapView;
pub use alert_feed::AlertFeedPanel;
pub use app::App;
pub use leaderboard::LeaderboardView;
pub use rider_console::RiderConsole;
