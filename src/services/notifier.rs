// ============================================================================
// NOTIFIER - Sink de notificaciones del dispositivo
// ============================================================================

use wasm_bindgen_futures::JsFuture;
use web_sys::{Notification, NotificationOptions, NotificationPermission};

/// Pedir permiso de notificaciones. Best-effort: la denegación no aborta
/// el arranque del turno, solo degrada las alertas a logs.
pub async fn request_permission() -> bool {
    match Notification::permission() {
        NotificationPermission::Granted => return true,
        NotificationPermission::Denied => return false,
        _ => {}
    }

    match Notification::request_permission() {
        Ok(promise) => match JsFuture::from(promise).await {
            Ok(result) => result.as_string().as_deref() == Some("granted"),
            Err(_) => false,
        },
        Err(e) => {
            log::warn!("⚠️ No se pudo pedir permiso de notificaciones: {:?}", e);
            false
        }
    }
}

/// Mostrar una notificación del sistema. Si no hay permiso, la alerta se
/// degrada a un log (el gate ya la contó como entregada).
pub fn deliver(title: &str, body: &str) {
    if !matches!(Notification::permission(), NotificationPermission::Granted) {
        log::warn!("🔕 Sin permiso de notificaciones: {} ({})", title, body);
        return;
    }

    let options = NotificationOptions::new();
    options.set_body(body);

    match Notification::new_with_options(title, &options) {
        Ok(_) => log::info!("🔔 Notificación entregada: {}", title),
        Err(e) => log::error!("❌ Error mostrando notificación: {:?}", e),
    }
}
