// ============================================================================
// USE LEADERBOARD HOOK - Leaderboard semanal de repartidores
// ============================================================================

use yew::prelude::*;

use crate::models::LeaderboardEntry;
use crate::services::ApiClient;

#[derive(Clone, PartialEq)]
pub struct LeaderboardState {
    pub entries: Vec<LeaderboardEntry>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct UseLeaderboardHandle {
    pub state: UseStateHandle<LeaderboardState>,
    pub refresh: Callback<()>,
}

fn fetch_into(state: UseStateHandle<LeaderboardState>) {
    wasm_bindgen_futures::spawn_local(async move {
        let mut current = (*state).clone();
        current.loading = true;
        current.error = None;
        state.set(current);

        match ApiClient::new().fetch_leaderboard().await {
            Ok(response) => {
                let mut current = (*state).clone();
                current.entries = response.leaderboard;
                current.loading = false;
                state.set(current);
            }
            Err(e) => {
                log::error!("❌ Error cargando leaderboard: {}", e);
                // la vista conserva las filas del último fetch exitoso
                let mut current = (*state).clone();
                current.loading = false;
                current.error = Some(e);
                state.set(current);
            }
        }
    });
}

#[hook]
pub fn use_leaderboard() -> UseLeaderboardHandle {
    let state = use_state(|| LeaderboardState {
        entries: Vec::new(),
        loading: false,
        error: None,
    });

    // Fetch inicial al montar
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            fetch_into(state);
            || ()
        });
    }

    let refresh = {
        let state = state.clone();
        Callback::from(move |_| fetch_into(state.clone()))
    };

    UseLeaderboardHandle { state, refresh }
}
