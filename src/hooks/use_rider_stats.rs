// ============================================================================
// USE RIDER STATS HOOK - Estadísticas self-service del repartidor
// ============================================================================

use yew::prelude::*;

use crate::models::RiderStats;
use crate::services::ApiClient;

#[derive(Clone, PartialEq)]
pub struct RiderStatsState {
    pub stats: Option<RiderStats>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct UseRiderStatsHandle {
    pub state: UseStateHandle<RiderStatsState>,
    pub refresh: Callback<String>,
}

#[hook]
pub fn use_rider_stats() -> UseRiderStatsHandle {
    let state = use_state(|| RiderStatsState {
        stats: None,
        loading: false,
        error: None,
    });

    let refresh = {
        let state = state.clone();
        Callback::from(move |login_id: String| {
            if login_id.trim().is_empty() {
                return;
            }
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let mut current = (*state).clone();
                current.loading = true;
                current.error = None;
                state.set(current);

                match ApiClient::new().fetch_rider_stats(&login_id).await {
                    Ok(stats) => {
                        let mut current = (*state).clone();
                        current.stats = Some(stats);
                        current.loading = false;
                        state.set(current);
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando estadísticas: {}", e);
                        // se conserva la última tarjeta renderizada
                        let mut current = (*state).clone();
                        current.loading = false;
                        current.error = Some(e);
                        state.set(current);
                    }
                }
            });
        })
    };

    UseRiderStatsHandle { state, refresh }
}
