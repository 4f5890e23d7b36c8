// ============================================================================
// LEADERBOARD VIEW - Ranking semanal con tiers y bonos
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_leaderboard;
use crate::models::{format_rank, score_tier};

#[function_component(LeaderboardView)]
pub fn leaderboard_view() -> Html {
    let board = use_leaderboard();
    let state = (*board.state).clone();

    let on_refresh = {
        let refresh = board.refresh.clone();
        Callback::from(move |_| refresh.emit(()))
    };

    html! {
        <div class="leaderboard-page">
            <div class="leaderboard-header">
                <h2>{ "🏆 Leaderboard semanal" }</h2>
                <button onclick={on_refresh} disabled={state.loading}>
                    { if state.loading { "Cargando..." } else { "Actualizar" } }
                </button>
            </div>
            {
                if state.entries.is_empty() {
                    html! {
                        <p class="leaderboard-empty">
                            {
                                match &state.error {
                                    Some(_) => "No se pudo cargar el leaderboard",
                                    None => "Sin datos de esta semana",
                                }
                            }
                        </p>
                    }
                } else {
                    html! {
                        <table class="leaderboard-table">
                            <thead>
                                <tr>
                                    <th>{ "Rank" }</th>
                                    <th>{ "Repartidor" }</th>
                                    <th>{ "Pedidos" }</th>
                                    <th>{ "Tier" }</th>
                                    <th>{ "Bono" }</th>
                                    <th>{ "Estado" }</th>
                                </tr>
                            </thead>
                            <tbody>
                                {
                                    // el backend ya entrega las filas ordenadas:
                                    // el rank es la posición 1-based en la lista
                                    for state.entries.iter().enumerate().map(|(i, entry)| {
                                        let scored = score_tier(entry.completed_orders);
                                        html! {
                                            <tr key={entry.rider_id}>
                                                <td class="rank-cell">{ format_rank(i + 1) }</td>
                                                <td>{ entry.login_id.clone() }</td>
                                                <td>{ entry.completed_orders }</td>
                                                <td class={format!("tier-{}", scored.tier.as_str().to_lowercase())}>
                                                    { scored.tier.as_str() }
                                                </td>
                                                <td>{ format!("{}€", scored.bonus) }</td>
                                                <td>{ scored.tier.status_label() }</td>
                                            </tr>
                                        }
                                    })
                                }
                            </tbody>
                        </table>
                    }
                }
            }
        </div>
    }
}
