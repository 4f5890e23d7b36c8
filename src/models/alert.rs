// ============================================================================
// ALERT MESSAGE - Mensajes entrantes del canal del repartidor
// ============================================================================
// Unión etiquetada sobre los tipos de alerta conocidos del backend.
// Payloads desconocidos o malformados NUNCA son fatales: se ignoran.
// ============================================================================

use serde::Deserialize;

/// Mensaje de alerta recibido por el canal duplex del repartidor
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum AlertMessage {
    #[serde(rename = "STATIONARY_WARNING")]
    StationaryWarning { message: String },
    #[serde(rename = "REDIRECT_TO_ZONE")]
    RedirectToZone { message: String },
    /// Cualquier `type` no reconocido cae aquí y se descarta aguas arriba
    #[serde(other)]
    Unrecognized,
}

/// Categoría de alerta (clave del gate de cooldown)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertKind {
    StationaryWarning,
    RedirectToZone,
}

impl AlertMessage {
    /// Parsear un frame de texto del canal. Payloads malformados → `None`.
    pub fn parse(raw: &str) -> Option<AlertMessage> {
        serde_json::from_str(raw).ok()
    }

    pub fn kind(&self) -> Option<AlertKind> {
        match self {
            AlertMessage::StationaryWarning { .. } => Some(AlertKind::StationaryWarning),
            AlertMessage::RedirectToZone { .. } => Some(AlertKind::RedirectToZone),
            AlertMessage::Unrecognized => None,
        }
    }

    pub fn body(&self) -> Option<&str> {
        match self {
            AlertMessage::StationaryWarning { message } => Some(message),
            AlertMessage::RedirectToZone { message } => Some(message),
            AlertMessage::Unrecognized => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stationary_warning() {
        let msg = AlertMessage::parse(r#"{"type":"STATIONARY_WARNING","message":"move"}"#);
        assert_eq!(
            msg,
            Some(AlertMessage::StationaryWarning { message: "move".to_string() })
        );
        assert_eq!(msg.unwrap().kind(), Some(AlertKind::StationaryWarning));
    }

    #[test]
    fn test_parse_redirect_to_zone() {
        let msg = AlertMessage::parse(r#"{"type":"REDIRECT_TO_ZONE","message":"go north"}"#);
        assert_eq!(msg.as_ref().and_then(|m| m.kind()), Some(AlertKind::RedirectToZone));
        assert_eq!(msg.as_ref().and_then(|m| m.body()), Some("go north"));
    }

    #[test]
    fn test_tipo_desconocido_es_unrecognized() {
        let msg = AlertMessage::parse(r#"{"type":"SOMETHING_NEW","message":"??"}"#);
        assert_eq!(msg, Some(AlertMessage::Unrecognized));
        assert_eq!(msg.unwrap().kind(), None);
    }

    #[test]
    fn test_payload_malformado_se_ignora() {
        assert_eq!(AlertMessage::parse("not json at all"), None);
        assert_eq!(AlertMessage::parse(r#"{"type":"STATIONARY_WARNING"}"#), None);
        assert_eq!(AlertMessage::parse("{}"), None);
    }
}
