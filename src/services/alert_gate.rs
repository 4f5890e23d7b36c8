// ============================================================================
// ALERT GATE - Cooldown/dedup de notificaciones por categoría
// ============================================================================
// Suprime entregas repetidas de una misma categoría dentro de la ventana.
// Estado por sesión, un solo escritor, uso cooperativo (sin locks).
// ============================================================================

use std::collections::HashMap;

use crate::models::{AlertKind, AlertMessage};

/// Ventana de supresión: 15 minutos
pub const ALERT_COOLDOWN_MS: f64 = 15.0 * 60.0 * 1000.0;

/// Gate de cooldown: tipo de alerta → timestamp del último disparo (ms).
/// Una entrada ausente siempre es entregable.
#[derive(Debug, Default)]
pub struct AlertGate {
    last_fired: HashMap<AlertKind, f64>,
}

impl AlertGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn should_deliver(&self, kind: AlertKind, now_ms: f64) -> bool {
        match self.last_fired.get(&kind) {
            None => true,
            Some(&last) => now_ms - last >= ALERT_COOLDOWN_MS,
        }
    }

    /// Registrar una entrega. Debe llamarse inmediatamente después de una
    /// decisión positiva, dentro del mismo tick.
    pub fn record(&mut self, kind: AlertKind, now_ms: f64) {
        self.last_fired.insert(kind, now_ms);
    }

    /// Descartar todo el estado (fin de sesión)
    pub fn reset(&mut self) {
        self.last_fired.clear();
    }
}

/// Rutear un mensaje entrante a través del gate. Devuelve título y cuerpo
/// para el sink de notificaciones, o `None` si se suprime/ignora.
pub fn route_alert(gate: &mut AlertGate, msg: &AlertMessage, now_ms: f64) -> Option<(String, String)> {
    let kind = msg.kind()?;

    if !gate.should_deliver(kind, now_ms) {
        log::info!("🔇 Alerta {:?} suprimida por cooldown", kind);
        return None;
    }

    let title = match kind {
        AlertKind::StationaryWarning => "⏸️ Alerta de inactividad",
        AlertKind::RedirectToZone => "🔥 Zona de alta demanda",
    };
    let body = msg.body().unwrap_or_default().to_string();

    gate.record(kind, now_ms);
    Some((title.to_string(), body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primera_ocurrencia_siempre_entregable() {
        let gate = AlertGate::new();
        assert!(gate.should_deliver(AlertKind::StationaryWarning, 0.0));
        assert!(gate.should_deliver(AlertKind::RedirectToZone, 1e15));
    }

    #[test]
    fn test_ventana_exacta_de_cooldown() {
        let mut gate = AlertGate::new();
        let t = 1_000_000.0;
        gate.record(AlertKind::StationaryWarning, t);

        assert!(!gate.should_deliver(AlertKind::StationaryWarning, t + 899_999.0));
        assert!(gate.should_deliver(AlertKind::StationaryWarning, t + 900_000.0));
        // otra categoría no se ve afectada
        assert!(gate.should_deliver(AlertKind::RedirectToZone, t + 1.0));
    }

    #[test]
    fn test_reset_descarta_el_estado() {
        let mut gate = AlertGate::new();
        gate.record(AlertKind::StationaryWarning, 5_000.0);
        gate.reset();
        assert!(gate.should_deliver(AlertKind::StationaryWarning, 5_001.0));
    }

    #[test]
    fn test_dos_alertas_en_un_minuto_entregan_una() {
        let mut gate = AlertGate::new();
        let msg = AlertMessage::StationaryWarning { message: "move".to_string() };

        let first = route_alert(&mut gate, &msg, 0.0);
        let second = route_alert(&mut gate, &msg, 60_000.0);

        assert!(first.is_some());
        assert_eq!(second, None);

        let (title, body) = first.unwrap();
        assert!(title.contains("inactividad"));
        assert_eq!(body, "move");
    }

    #[test]
    fn test_unrecognized_no_entrega_ni_registra() {
        let mut gate = AlertGate::new();
        assert_eq!(route_alert(&mut gate, &AlertMessage::Unrecognized, 0.0), None);
        // el gate sigue virgen para los tipos reales
        assert!(gate.should_deliver(AlertKind::StationaryWarning, 0.0));
    }
}
