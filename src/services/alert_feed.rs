// ============================================================================
// ALERT FEED - Log en vivo de eventos broadcast (vista de admin)
// ============================================================================

use crate::models::RiderPositionMsg;

/// Máximo de entradas retenidas por el feed
pub const FEED_CAPACITY: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct FeedEntry {
    pub time: String,
    pub message: String,
}

/// Buffer acotado de los últimos eventos, el más nuevo primero.
/// Los fallos de parseo nunca llegan aquí: se tragan en el canal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlertFeed {
    entries: Vec<FeedEntry>,
}

impl AlertFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insertar una entrada al frente, descartando la más vieja si se
    /// supera la capacidad.
    pub fn push(&mut self, time: String, message: String) {
        self.entries.insert(0, FeedEntry { time, message });
        self.entries.truncate(FEED_CAPACITY);
    }

    pub fn entries(&self) -> &[FeedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Línea de log para un evento de posición broadcast
pub fn format_position_entry(msg: &RiderPositionMsg) -> String {
    format!(
        "Rider {} → ({:.5}, {:.5})",
        msg.rider_id, msg.lat, msg.lon
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mas_nuevo_primero() {
        let mut feed = AlertFeed::new();
        feed.push("10:00:00".to_string(), "a".to_string());
        feed.push("10:00:01".to_string(), "b".to_string());

        assert_eq!(feed.entries()[0].message, "b");
        assert_eq!(feed.entries()[1].message, "a");
    }

    #[test]
    fn test_capacidad_acotada_a_20() {
        let mut feed = AlertFeed::new();
        for i in 0..25 {
            feed.push(format!("10:00:{:02}", i), format!("evento {}", i));
        }

        assert_eq!(feed.len(), FEED_CAPACITY);
        // sobreviven los 20 más recientes
        assert_eq!(feed.entries()[0].message, "evento 24");
        assert_eq!(feed.entries()[19].message, "evento 5");
    }

    #[test]
    fn test_formato_de_entrada_de_posicion() {
        let msg = RiderPositionMsg {
            rider_id: "rider42".to_string(),
            lat: 52.52,
            lon: 13.405,
        };
        assert_eq!(format_position_entry(&msg), "Rider rider42 → (52.52000, 13.40500)");
    }
}
