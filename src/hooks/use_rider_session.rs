// ============================================================================
// USE RIDER SESSION HOOK - Turno del repartidor para componentes Yew
// ============================================================================
// Hook nativo de Yew - Delega toda la lógica al ShiftController
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::services::notifier;
use crate::services::rider_session::{SessionPhase, ShiftController};

/// Handle del hook
#[derive(Clone)]
pub struct UseRiderSessionHandle {
    pub phase: SessionPhase,
    pub start_shift: Callback<String>,
    pub end_shift: Callback<()>,
}

#[hook]
pub fn use_rider_session() -> UseRiderSessionHandle {
    let phase = use_state(|| SessionPhase::Idle);

    // Un único controlador por montaje de la vista
    let controller = {
        let phase = phase.clone();
        use_mut_ref(move || {
            let on_phase: Rc<dyn Fn(SessionPhase)> = Rc::new(move |p| phase.set(p));
            let sink: Rc<dyn Fn(&str, &str)> =
                Rc::new(|title, body| notifier::deliver(title, body));
            ShiftController::new(on_phase, sink)
        })
    };

    // Teardown al desmontar: endShift es idempotente, seguro aunque el
    // usuario ya haya terminado el turno con el botón
    {
        let controller = controller.clone();
        use_effect_with((), move |_| {
            move || {
                controller.borrow().end_shift();
            }
        });
    }

    let start_shift = {
        let controller = controller.clone();
        Callback::from(move |rider_id: String| {
            controller.borrow().start_shift(rider_id);
        })
    };

    let end_shift = {
        let controller = controller.clone();
        Callback::from(move |_| {
            controller.borrow().end_shift();
        })
    };

    UseRiderSessionHandle {
        phase: *phase,
        start_shift,
        end_shift,
    }
}
