// ============================================================================
// ADMIN MAP VIEW - Mapa en vivo de la flota + log de eventos
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Local;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::AlertFeedPanel;
use crate::maps::MapboxSurface;
use crate::models::RiderPositionMsg;
use crate::services::{format_position_entry, AdminLiveMapController, AlertFeed};
use crate::utils::MAP_READY_DELAY_MS;

#[function_component(AdminMapView)]
pub fn admin_map_view() -> Html {
    let feed = use_state(AlertFeed::new);
    let controller = use_mut_ref(|| None::<AdminLiveMapController<MapboxSurface>>);

    {
        let feed = feed.clone();
        let controller = controller.clone();
        use_effect_with((), move |_| {
            let surface = Rc::new(RefCell::new(MapboxSurface::new()));

            // Mismo evento broadcast, segundo sink: el log en vivo
            let on_event: Rc<dyn Fn(&RiderPositionMsg)> = Rc::new(move |msg| {
                let mut next = (*feed).clone();
                next.push(
                    Local::now().format("%H:%M:%S").to_string(),
                    format_position_entry(msg),
                );
                feed.set(next);
            });

            let ctrl = AdminLiveMapController::new(surface.clone(), on_event);
            surface.borrow_mut().init("admin-map");

            // Esperar a que el mapa cargue antes de arrancar poller y canal
            Timeout::new(MAP_READY_DELAY_MS, {
                let ctrl = ctrl.clone();
                let surface = surface.clone();
                move || {
                    surface.borrow_mut().mark_ready();
                    ctrl.activate();
                }
            })
            .forget();

            *controller.borrow_mut() = Some(ctrl);

            // Teardown al salir de la vista (re-entrante por construcción)
            move || {
                if let Some(ctrl) = controller.borrow_mut().take() {
                    ctrl.teardown();
                }
            }
        });
    }

    html! {
        <div class="admin-map-page">
            <div id="admin-map" class="map-container"></div>
            <AlertFeedPanel feed={(*feed).clone()} />
        </div>
    }
}
