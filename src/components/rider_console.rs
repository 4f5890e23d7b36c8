// ============================================================================
// RIDER CONSOLE - Consola del repartidor: turno + estadísticas
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_rider_session, use_rider_stats};
use crate::models::{score_tier, format_rank};
use crate::services::SessionPhase;
use crate::utils::{load_from_storage, save_to_storage, STORAGE_KEY_LAST_RIDER};

#[function_component(RiderConsole)]
pub fn rider_console() -> Html {
    let session = use_rider_session();
    let stats = use_rider_stats();

    // Rellenar con el último rider id usado en este dispositivo
    let rider_id = use_state(|| {
        load_from_storage::<String>(STORAGE_KEY_LAST_RIDER).unwrap_or_default()
    });

    let oninput = {
        let rider_id = rider_id.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                rider_id.set(input.value());
            }
        })
    };

    let on_start = {
        let rider_id = rider_id.clone();
        let start_shift = session.start_shift.clone();
        Callback::from(move |_| {
            let id = (*rider_id).clone();
            if let Err(e) = save_to_storage(STORAGE_KEY_LAST_RIDER, &id) {
                log::warn!("⚠️ {}", e);
            }
            start_shift.emit(id);
        })
    };

    let on_end = {
        let end_shift = session.end_shift.clone();
        Callback::from(move |_| end_shift.emit(()))
    };

    let on_refresh_stats = {
        let rider_id = rider_id.clone();
        let refresh = stats.refresh.clone();
        Callback::from(move |_| refresh.emit((*rider_id).clone()))
    };

    let phase_label = match session.phase {
        SessionPhase::Idle => "Fuera de turno",
        SessionPhase::AcquiringPermissions => "Solicitando permisos...",
        SessionPhase::Active => "En turno: enviando posición",
    };

    let stats_state = (*stats.state).clone();

    html! {
        <div class="rider-console">
            <section class="shift-card">
                <h2>{ "Mi turno" }</h2>
                <input
                    type="text"
                    placeholder="Identificador de repartidor"
                    value={(*rider_id).clone()}
                    disabled={session.phase != SessionPhase::Idle}
                    {oninput}
                />
                <div class="shift-actions">
                    <button
                        class="btn-start"
                        disabled={session.phase != SessionPhase::Idle}
                        onclick={on_start}
                    >
                        { "Iniciar turno" }
                    </button>
                    <button
                        class="btn-end"
                        disabled={session.phase == SessionPhase::Idle}
                        onclick={on_end}
                    >
                        { "Terminar turno" }
                    </button>
                </div>
                <p class={classes!("shift-phase", (session.phase == SessionPhase::Active).then_some("shift-phase-active"))}>
                    { phase_label }
                </p>
            </section>

            <section class="stats-card">
                <h2>{ "Mis estadísticas" }</h2>
                <button onclick={on_refresh_stats} disabled={stats_state.loading}>
                    { if stats_state.loading { "Cargando..." } else { "Actualizar" } }
                </button>
                {
                    match &stats_state.stats {
                        Some(s) => {
                            // tier y progreso recalculados con el motor local
                            let scored = score_tier(s.week_orders);
                            html! {
                                <div class="stats-body">
                                    <p class="stats-rank">
                                        { format!("{} de {} repartidores", format_rank(s.rank as usize), s.total_riders) }
                                    </p>
                                    <p>{ format!("Pedidos esta semana: {}", s.week_orders) }</p>
                                    <p class={format!("tier-badge tier-{}", scored.tier.as_str().to_lowercase())}>
                                        { format!("{} · bono {}€", scored.tier.as_str(), scored.bonus) }
                                    </p>
                                    <div class="progress-track">
                                        <div
                                            class="progress-fill"
                                            style={format!("width: {:.0}%", scored.progress_percent)}
                                        />
                                    </div>
                                    {
                                        match scored.next_tier {
                                            Some(next) => html! {
                                                <p class="stats-next">
                                                    { format!("{} pedidos para {}", scored.orders_to_next, next.as_str()) }
                                                </p>
                                            },
                                            None => html! {
                                                <p class="stats-next">{ "🏆 Tier máximo alcanzado" }</p>
                                            },
                                        }
                                    }
                                </div>
                            }
                        }
                        None => html! {
                            <p class="stats-empty">
                                {
                                    match &stats_state.error {
                                        Some(_) => "No se pudieron cargar las estadísticas",
                                        None => "Sin datos todavía",
                                    }
                                }
                            </p>
                        },
                    }
                }
            </section>
        </div>
    }
}
