pub mod alert;
pub mod leaderboard;
pub mod tier;
pub mod tracking;
pub mod zone;

pub use alert::{AlertKind, AlertMessage};
pub use leaderboard::{LeaderboardEntry, LeaderboardResponse, RiderStats};
pub use tier::{format_rank, score_tier, Tier, TierResult};
pub use tracking::{PositionSample, RiderPositionMsg};
pub use zone::ZoneStatus;
