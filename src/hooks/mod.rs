pub mod use_leaderboard;
pub mod use_rider_session;
pub mod use_rider_stats;

pub use use_leaderboard::use_leaderboard;
pub use use_rider_session::use_rider_session;
pub use use_rider_stats::use_rider_stats;
