// ============================================================================
// LEADERBOARD / STATS - Respuestas de los endpoints de rendimiento
// ============================================================================

use serde::Deserialize;

/// Fila del leaderboard semanal. El backend la entrega ya ordenada
/// descendente por `completed_orders`; el cliente no reordena.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LeaderboardEntry {
    pub rider_id: i64,
    pub login_id: String,
    pub completed_orders: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LeaderboardResponse {
    pub leaderboard: Vec<LeaderboardEntry>,
}

/// Estadísticas self-service del repartidor (`GET /riders/stats/{loginId}`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RiderStats {
    pub rank: u32,
    pub total_riders: u32,
    pub week_orders: u32,
    pub tier: String,
    pub next_tier: Option<String>,
    pub orders_to_next_tier: u32,
    pub progress_percent: f32,
    pub weekly_target_completed: bool,
    pub weekly_bonus_amount: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leaderboard_ignora_campos_extra() {
        // el backend añade tier/status por fila; el cliente los recalcula
        let raw = r#"{
            "week_start": "2025-11-03",
            "count": 2,
            "leaderboard": [
                {"rider_id": 7, "login_id": "RID007", "completed_orders": 90, "tier": "GOLD", "status": "STAR"},
                {"rider_id": 3, "login_id": "RID003", "completed_orders": 45}
            ]
        }"#;
        let resp: LeaderboardResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.leaderboard.len(), 2);
        assert_eq!(resp.leaderboard[0].login_id, "RID007");
        assert_eq!(resp.leaderboard[1].completed_orders, 45);
    }

    #[test]
    fn test_parse_rider_stats() {
        let raw = r#"{
            "rank": 4, "total_riders": 12, "week_orders": 61,
            "tier": "SILVER", "next_tier": "GOLD", "orders_to_next_tier": 19,
            "progress_percent": 52.5, "weekly_target_completed": false,
            "weekly_bonus_amount": 20
        }"#;
        let stats: RiderStats = serde_json::from_str(raw).unwrap();
        assert_eq!(stats.rank, 4);
        assert_eq!(stats.next_tier.as_deref(), Some("GOLD"));
    }
}
