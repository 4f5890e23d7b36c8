// ============================================================================
// ZONE POLLER - Sincronización periódica de zonas de demanda
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;

use crate::maps::traits::MapSurface;
use crate::maps::zones::ZoneLayer;
use crate::services::api_client::ApiClient;

/// Cadencia fija del poll (ms). No hay backoff: un fetch fallido mantiene
/// el último estado renderizado y el siguiente tick llega igual.
pub const ZONE_POLL_INTERVAL_MS: u32 = 5_000;

pub struct ZonePoller<S: MapSurface + 'static> {
    api: ApiClient,
    zones: Rc<RefCell<ZoneLayer<S>>>,
    interval: Option<Interval>,
}

impl<S: MapSurface + 'static> ZonePoller<S> {
    pub fn new(api: ApiClient, zones: Rc<RefCell<ZoneLayer<S>>>) -> Self {
        Self {
            api,
            zones,
            interval: None,
        }
    }

    /// Fetch inmediato y después cada 5 segundos hasta stop()
    pub fn start(&mut self) {
        if self.interval.is_some() {
            return;
        }

        Self::tick(self.api.clone(), self.zones.clone());

        let api = self.api.clone();
        let zones = self.zones.clone();
        self.interval = Some(Interval::new(ZONE_POLL_INTERVAL_MS, move || {
            Self::tick(api.clone(), zones.clone());
        }));
        log::info!("⏱️ Poller de zonas iniciado (cada {}s)", ZONE_POLL_INTERVAL_MS / 1000);
    }

    fn tick(api: ApiClient, zones: Rc<RefCell<ZoneLayer<S>>>) {
        spawn_local(async move {
            match api.fetch_zone_status().await {
                Ok(batch) => zones.borrow_mut().upsert_all(&batch),
                Err(e) => {
                    // se mantiene el último estado renderizado
                    log::warn!("⚠️ Poll de zonas fallido: {}", e);
                }
            }
        });
    }

    /// Cancelar el timer. Idempotente y seguro sin start() previo.
    pub fn stop(&mut self) {
        if let Some(interval) = self.interval.take() {
            interval.cancel();
            log::info!("⏱️ Poller de zonas detenido");
        }
    }
}
