// ============================================================================
// RIDER SESSION - Controlador del turno del repartidor
// ============================================================================
// Dueño único de la sesión activa: permisos, canal duplex, suscripción de
// ubicación y gate de alertas. Máximo una sesión por dispositivo; un segundo
// startShift se rechaza, no se fusiona.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::window;

use crate::config::CONFIG;
use crate::models::AlertMessage;
use crate::services::alert_gate::{route_alert, AlertGate};
use crate::services::channel::DuplexChannel;
use crate::services::location::{self, LocationWatch};
use crate::services::notifier;

/// Fases del turno: IDLE → ACQUIRING_PERMISSIONS → ACTIVE → IDLE
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    AcquiringPermissions,
    Active,
}

/// Sesión activa. Invariante: canal y suscripción de ubicación existen
/// juntos o no existen (nunca un teardown a medias).
struct ActiveSession {
    rider_id: String,
    channel: DuplexChannel,
    watch: LocationWatch,
}

struct ShiftInner {
    phase: SessionPhase,
    session: Option<ActiveSession>,
    gate: AlertGate,
}

/// Controlador del turno. Clonable como handle barato (estado compartido
/// single-writer, solo tocado desde callbacks del event loop).
pub struct ShiftController {
    inner: Rc<RefCell<ShiftInner>>,
    on_phase: Rc<dyn Fn(SessionPhase)>,
    alert_sink: Rc<dyn Fn(&str, &str)>,
}

impl Clone for ShiftController {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            on_phase: self.on_phase.clone(),
            alert_sink: self.alert_sink.clone(),
        }
    }
}

fn alert_user(message: &str) {
    if let Some(win) = window() {
        let _ = win.alert_with_message(message);
    }
}

impl ShiftController {
    /// `on_phase` notifica cada transición a la vista; `alert_sink` recibe
    /// título/cuerpo de cada alerta que pasa el gate de cooldown.
    pub fn new(on_phase: Rc<dyn Fn(SessionPhase)>, alert_sink: Rc<dyn Fn(&str, &str)>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ShiftInner {
                phase: SessionPhase::Idle,
                session: None,
                gate: AlertGate::new(),
            })),
            on_phase,
            alert_sink,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.inner.borrow().phase
    }

    fn set_phase(&self, phase: SessionPhase) {
        self.inner.borrow_mut().phase = phase;
        (self.on_phase)(phase);
    }

    /// Iniciar turno. Errores de validación y de permiso se reportan con un
    /// alert bloqueante y dejan el controlador en IDLE, listo para reintentar.
    pub fn start_shift(&self, rider_id: String) {
        {
            let inner = self.inner.borrow();
            if inner.phase != SessionPhase::Idle {
                log::warn!("⚠️ startShift rechazado: ya hay un turno en curso");
                alert_user("Ya hay un turno activo. Termina el turno actual antes de iniciar otro.");
                return;
            }
        }
        if rider_id.trim().is_empty() {
            alert_user("El identificador del repartidor no puede estar vacío.");
            return;
        }

        log::info!("🛵 Iniciando turno de {}", rider_id);
        self.set_phase(SessionPhase::AcquiringPermissions);

        let controller = self.clone();
        spawn_local(async move {
            // 1. Permiso de ubicación (obligatorio)
            if let Err(e) = location::request_permission().await {
                log::warn!("⚠️ {}", e);
                alert_user(&format!("No se puede iniciar el turno: {}", e));
                controller.set_phase(SessionPhase::Idle);
                return;
            }

            // el usuario pudo cancelar durante la espera del permiso
            if controller.phase() != SessionPhase::AcquiringPermissions {
                return;
            }

            // 2. Permiso de notificaciones (best-effort)
            if !notifier::request_permission().await {
                log::warn!("🔕 Notificaciones denegadas: las alertas solo se verán en el log");
            }

            if controller.phase() != SessionPhase::AcquiringPermissions {
                return;
            }

            // 3. Canal duplex hacia el backend
            let url = format!("{}/ws/rider/{}", CONFIG.websocket_url(), rider_id);
            let mut channel = match DuplexChannel::connect(&url) {
                Ok(channel) => channel,
                Err(e) => {
                    log::error!("❌ {}", e);
                    alert_user("No se pudo conectar con el servidor de seguimiento.");
                    controller.set_phase(SessionPhase::Idle);
                    return;
                }
            };

            // Mensajes entrantes → gate de cooldown → sink de notificaciones
            {
                let inner = controller.inner.clone();
                let sink = controller.alert_sink.clone();
                channel.set_on_message(move |raw| {
                    let Some(message) = AlertMessage::parse(&raw) else {
                        // payload malformado: se ignora, nunca es fatal
                        return;
                    };
                    let delivery = {
                        let mut inner = inner.borrow_mut();
                        route_alert(&mut inner.gate, &message, js_sys::Date::now())
                    };
                    if let Some((title, body)) = delivery {
                        sink(&title, &body);
                    }
                });
            }

            // 4. Suscripción continua de ubicación; cada muestra se envía
            //    de inmediato por el canal, sin buffering ni reintentos
            let watch = {
                let inner = controller.inner.clone();
                match LocationWatch::start(move |sample| {
                    if let Some(session) = inner.borrow().session.as_ref() {
                        session.channel.send_text(&sample.to_wire());
                    }
                }) {
                    Ok(watch) => watch,
                    Err(e) => {
                        log::error!("❌ {}", e);
                        channel.close();
                        alert_user(&format!("No se puede iniciar el turno: {}", e));
                        controller.set_phase(SessionPhase::Idle);
                        return;
                    }
                }
            };

            {
                let mut inner = controller.inner.borrow_mut();
                if inner.phase != SessionPhase::AcquiringPermissions {
                    // turno cancelado durante el arranque: liberar lo creado
                    drop(inner);
                    let mut watch = watch;
                    watch.stop();
                    channel.close();
                    return;
                }
                inner.session = Some(ActiveSession {
                    rider_id: rider_id.clone(),
                    channel,
                    watch,
                });
            }
            controller.set_phase(SessionPhase::Active);
            log::info!("✅ Turno activo: streaming de posición de {}", rider_id);
        });
    }

    /// Terminar turno. Idempotente: sin turno activo es un no-op, y es
    /// seguro llamarlo desde el unmount de la vista y desde el botón a la vez.
    pub fn end_shift(&self) {
        let had_session = {
            let mut inner = self.inner.borrow_mut();
            let had = match inner.session.take() {
                Some(mut session) => {
                    session.watch.stop();
                    session.channel.close();
                    log::info!("🏁 Turno de {} terminado", session.rider_id);
                    true
                }
                None => false,
            };
            // el estado del gate es por sesión
            inner.gate.reset();
            had
        };

        if self.phase() != SessionPhase::Idle {
            self.set_phase(SessionPhase::Idle);
        } else if !had_session {
            log::info!("ℹ️ endShift sin turno activo (no-op)");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_controller() -> (ShiftController, Rc<RefCell<Vec<SessionPhase>>>) {
        let phases: Rc<RefCell<Vec<SessionPhase>>> = Rc::new(RefCell::new(Vec::new()));
        let on_phase: Rc<dyn Fn(SessionPhase)> = {
            let phases = phases.clone();
            Rc::new(move |p| phases.borrow_mut().push(p))
        };
        let sink: Rc<dyn Fn(&str, &str)> = Rc::new(|_, _| {
            panic!("el sink no debe dispararse sin sesión");
        });
        (ShiftController::new(on_phase, sink), phases)
    }

    #[test]
    fn test_end_shift_es_idempotente() {
        let (controller, phases) = test_controller();

        // sin turno iniciado: doble endShift es un no-op seguro
        controller.end_shift();
        controller.end_shift();

        assert_eq!(controller.phase(), SessionPhase::Idle);
        // nunca salió de IDLE, así que no hubo transiciones que notificar
        assert!(phases.borrow().is_empty());
    }

    #[test]
    fn test_arranca_en_idle() {
        let (controller, _) = test_controller();
        assert_eq!(controller.phase(), SessionPhase::Idle);
    }
}

