// ============================================================================
// ZONE - Estado de zonas de demanda (red zones) reportado por el backend
// ============================================================================

use serde::Deserialize;

/// Zona geocercada con su color de demanda. La fuente de verdad es el
/// backend; el cliente solo cachea la última copia por `id`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ZoneStatus {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub radius: f64,
    pub color: String,
    // Datos de carga que el backend añade al status; no afectan la paleta
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub pressure: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_con_y_sin_carga() {
        let full: ZoneStatus = serde_json::from_str(
            r#"{"id":"z1","lat":52.5,"lon":13.4,"radius":800,"weight":3,"pressure":1.4,"color":"red"}"#,
        )
        .unwrap();
        assert_eq!(full.color, "red");
        assert_eq!(full.pressure, Some(1.4));

        let minimal: ZoneStatus = serde_json::from_str(
            r#"{"id":"z2","lat":0.0,"lon":0.0,"radius":400,"color":"green"}"#,
        )
        .unwrap();
        assert_eq!(minimal.weight, None);
    }
}
