// ============================================================================
// TIER SCORING - Motor de puntuación de rendimiento semanal
// ============================================================================
// Función pura compartida por el leaderboard de admin y la vista de
// estadísticas del repartidor. Sin efectos secundarios.
// ============================================================================

use serde::{Deserialize, Serialize};

/// Pedidos semanales necesarios para SILVER
pub const SILVER_THRESHOLD: u32 = 40;
/// Pedidos semanales necesarios para GOLD
pub const GOLD_THRESHOLD: u32 = 80;

const GOLD_BONUS: u32 = 50;
const SILVER_BONUS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Bronze => "BRONZE",
            Tier::Silver => "SILVER",
            Tier::Gold => "GOLD",
        }
    }

    /// Etiqueta de estado que el backend asocia a cada tier en el leaderboard
    pub fn status_label(&self) -> &'static str {
        match self {
            Tier::Bronze => "NEEDS_PUSH",
            Tier::Silver => "ON_TRACK",
            Tier::Gold => "STAR",
        }
    }
}

/// Resultado de la puntuación: tier, bono y progreso hacia el siguiente tier
#[derive(Debug, Clone, PartialEq)]
pub struct TierResult {
    pub tier: Tier,
    pub bonus: u32,
    pub next_tier: Option<Tier>,
    pub orders_to_next: u32,
    pub progress_percent: f32,
}

/// Puntuar un conteo de pedidos completados.
///
/// Reglas (límites inclusivos exactos):
/// - `>= 80` → GOLD, bono 50
/// - `40..=79` → SILVER, bono 20
/// - `< 40` → BRONZE, bono 0
pub fn score_tier(completed_orders: u32) -> TierResult {
    if completed_orders >= GOLD_THRESHOLD {
        TierResult {
            tier: Tier::Gold,
            bonus: GOLD_BONUS,
            next_tier: None,
            orders_to_next: 0,
            progress_percent: 100.0,
        }
    } else if completed_orders >= SILVER_THRESHOLD {
        let span = (GOLD_THRESHOLD - SILVER_THRESHOLD) as f32;
        TierResult {
            tier: Tier::Silver,
            bonus: SILVER_BONUS,
            next_tier: Some(Tier::Gold),
            orders_to_next: GOLD_THRESHOLD - completed_orders,
            progress_percent: (completed_orders - SILVER_THRESHOLD) as f32 / span * 100.0,
        }
    } else {
        TierResult {
            tier: Tier::Bronze,
            bonus: 0,
            next_tier: Some(Tier::Silver),
            orders_to_next: SILVER_THRESHOLD - completed_orders,
            progress_percent: completed_orders as f32 / SILVER_THRESHOLD as f32 * 100.0,
        }
    }
}

/// Formato de rank para las vistas: medallas para el podio, número para el resto.
/// El rank es 1-based y lo asigna el caller sobre la lista ya ordenada por el backend.
pub fn format_rank(rank: usize) -> String {
    match rank {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        n => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limites_exactos_de_tier() {
        assert_eq!(score_tier(0).tier, Tier::Bronze);
        assert_eq!(score_tier(39).tier, Tier::Bronze);
        assert_eq!(score_tier(40).tier, Tier::Silver);
        assert_eq!(score_tier(79).tier, Tier::Silver);
        assert_eq!(score_tier(80).tier, Tier::Gold);
        assert_eq!(score_tier(500).tier, Tier::Gold);
    }

    #[test]
    fn test_bonos_por_tier() {
        assert_eq!(score_tier(10).bonus, 0);
        assert_eq!(score_tier(40).bonus, 20);
        assert_eq!(score_tier(79).bonus, 20);
        assert_eq!(score_tier(80).bonus, 50);
    }

    #[test]
    fn test_progreso_hacia_siguiente_tier() {
        let bronze = score_tier(20);
        assert_eq!(bronze.next_tier, Some(Tier::Silver));
        assert_eq!(bronze.orders_to_next, 20);
        assert!((bronze.progress_percent - 50.0).abs() < f32::EPSILON);

        let silver = score_tier(60);
        assert_eq!(silver.next_tier, Some(Tier::Gold));
        assert_eq!(silver.orders_to_next, 20);
        assert!((silver.progress_percent - 50.0).abs() < f32::EPSILON);

        let gold = score_tier(120);
        assert_eq!(gold.next_tier, None);
        assert_eq!(gold.orders_to_next, 0);
        assert!((gold.progress_percent - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_escenario_leaderboard() {
        // respuesta pre-ordenada [90, 45, 10] → [GOLD, SILVER, BRONZE]
        let tiers: Vec<_> = [90, 45, 10].iter().map(|&o| score_tier(o)).collect();
        assert_eq!(
            tiers.iter().map(|t| t.tier).collect::<Vec<_>>(),
            vec![Tier::Gold, Tier::Silver, Tier::Bronze]
        );
        assert_eq!(
            tiers.iter().map(|t| t.bonus).collect::<Vec<_>>(),
            vec![50, 20, 0]
        );
    }

    #[test]
    fn test_format_rank_podio() {
        assert_eq!(format_rank(1), "🥇");
        assert_eq!(format_rank(2), "🥈");
        assert_eq!(format_rank(3), "🥉");
        assert_eq!(format_rank(4), "4");
        assert_eq!(format_rank(17), "17");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(score_tier(90).tier.status_label(), "STAR");
        assert_eq!(score_tier(45).tier.status_label(), "ON_TRACK");
        assert_eq!(score_tier(5).tier.status_label(), "NEEDS_PUSH");
    }
}
