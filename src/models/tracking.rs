// ============================================================================
// TRACKING - Tipos de posición (rider → backend y broadcast de admin)
// ============================================================================

use serde::{Deserialize, Serialize};

/// Muestra de posición del dispositivo. Efímera: se produce en el callback
/// de geolocalización y se envía por el canal inmediatamente, sin buffering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PositionSample {
    pub lat: f64,
    pub lon: f64,
}

impl PositionSample {
    /// Frame saliente para el canal del repartidor
    pub fn to_wire(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Posición de un repartidor empujada por el canal broadcast de admin.
/// Los tres campos son obligatorios; coordenadas null o ausentes hacen
/// fallar el parseo y el mensaje se descarta sin error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RiderPositionMsg {
    pub rider_id: String,
    pub lat: f64,
    pub lon: f64,
}

impl RiderPositionMsg {
    pub fn parse(raw: &str) -> Option<RiderPositionMsg> {
        serde_json::from_str(raw).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_sample_to_wire() {
        let sample = PositionSample { lat: 52.5, lon: 13.4 };
        assert_eq!(sample.to_wire(), r#"{"lat":52.5,"lon":13.4}"#);
    }

    #[test]
    fn test_parse_broadcast_valido() {
        let msg = RiderPositionMsg::parse(r#"{"rider_id":"r1","lat":10.0,"lon":20.0}"#);
        assert_eq!(
            msg,
            Some(RiderPositionMsg { rider_id: "r1".to_string(), lat: 10.0, lon: 20.0 })
        );
    }

    #[test]
    fn test_broadcast_parcial_se_descarta() {
        // coordenadas null
        assert_eq!(RiderPositionMsg::parse(r#"{"rider_id":"r1","lat":null,"lon":20.0}"#), None);
        // campo ausente
        assert_eq!(RiderPositionMsg::parse(r#"{"rider_id":"r1","lat":10.0}"#), None);
        // basura
        assert_eq!(RiderPositionMsg::parse("💥"), None);
    }
}
