// ============================================================================
// ADMIN LIVE MAP - Controlador del mapa en vivo de la flota
// ============================================================================
// Orquesta el poller de zonas (pull) y el registro de markers (push) sobre
// una misma superficie, tolerando cualquier intercalado entre ambas fuentes.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::CONFIG;
use crate::maps::markers::MarkerRegistry;
use crate::maps::traits::MapSurface;
use crate::maps::zones::ZoneLayer;
use crate::models::RiderPositionMsg;
use crate::services::api_client::ApiClient;
use crate::services::channel::DuplexChannel;
use crate::services::zone_poller::ZonePoller;

struct AdminMapInner<S: MapSurface + 'static> {
    surface: Rc<RefCell<S>>,
    markers: MarkerRegistry<S>,
    zones: Rc<RefCell<ZoneLayer<S>>>,
    poller: ZonePoller<S>,
    channel: Option<DuplexChannel>,
    /// Segundo sink del mismo canal broadcast: alimenta el alert feed
    on_event: Rc<dyn Fn(&RiderPositionMsg)>,
    active: bool,
}

/// Controlador con ciclo de vida explícito (`activate`/`teardown`).
/// Clonable como handle; estado single-writer tocado solo desde callbacks.
pub struct AdminLiveMapController<S: MapSurface + 'static> {
    inner: Rc<RefCell<AdminMapInner<S>>>,
}

impl<S: MapSurface + 'static> Clone for AdminLiveMapController<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S: MapSurface + 'static> AdminLiveMapController<S> {
    pub fn new(surface: Rc<RefCell<S>>, on_event: Rc<dyn Fn(&RiderPositionMsg)>) -> Self {
        let zones = Rc::new(RefCell::new(ZoneLayer::new(surface.clone())));
        Self {
            inner: Rc::new(RefCell::new(AdminMapInner {
                markers: MarkerRegistry::new(surface.clone()),
                poller: ZonePoller::new(ApiClient::new(), zones.clone()),
                zones,
                surface,
                channel: None,
                on_event,
                active: false,
            })),
        }
    }

    /// Arrancar poller y canal broadcast. Llamar cuando la superficie ya
    /// está lista; una segunda llamada es un no-op.
    pub fn activate(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.active {
            return;
        }
        inner.active = true;

        inner.poller.start();

        let url = format!("{}/ws/admin", CONFIG.websocket_url());
        match DuplexChannel::connect(&url) {
            Ok(mut channel) => {
                let handle = self.clone();
                channel.set_on_message(move |raw| handle.handle_broadcast(&raw));
                inner.channel = Some(channel);
                log::info!("👑 Mapa de flota activo: zonas + broadcast");
            }
            Err(e) => {
                // sin canal el mapa sigue vivo solo con el poll de zonas
                log::error!("❌ Canal de admin no disponible: {}", e);
            }
        }
    }

    /// Un mensaje broadcast bien formado actualiza el marker del repartidor
    /// y se reenvía al feed; los malformados se descartan sin error.
    fn handle_broadcast(&self, raw: &str) {
        let Some(msg) = RiderPositionMsg::parse(raw) else {
            log::debug!("Broadcast descartado (payload malformado)");
            return;
        };

        let on_event = {
            let mut inner = self.inner.borrow_mut();
            inner.markers.upsert(&msg.rider_id, msg.lat, msg.lon);
            inner.on_event.clone()
        };
        // fuera del borrow: el sink actualiza estado de la vista
        on_event(&msg);
    }

    /// Teardown re-entrante: cerrar canal, parar poller, soltar markers y
    /// liberar la superficie. Llamable desde el unmount y desde acción
    /// explícita sin fallos de doble liberación.
    pub fn teardown(&self) {
        let mut inner = self.inner.borrow_mut();

        if let Some(mut channel) = inner.channel.take() {
            channel.close();
        }
        inner.poller.stop();
        inner.markers.clear();
        inner.zones.borrow_mut().forget_all();
        if let Err(e) = inner.surface.borrow_mut().release() {
            log::error!("❌ Error liberando la superficie del mapa: {}", e);
        }

        if inner.active {
            inner.active = false;
            log::info!("🏁 Mapa de flota desmontado");
        }
    }
}
