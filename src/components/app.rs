// ============================================================================
// APP - Raíz de la aplicación: consola de repartidor / mapa de admin
// ============================================================================

use yew::prelude::*;

use super::{AdminMapView, LeaderboardView, RiderConsole};

#[derive(Clone, Copy, PartialEq)]
enum View {
    Rider,
    AdminMap,
    Leaderboard,
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| View::Rider);

    let nav_button = |target: View, label: &str| -> Html {
        let view = view.clone();
        let active = *view == target;
        let onclick = Callback::from(move |_| view.set(target));
        html! {
            <button
                class={classes!("nav-btn", active.then_some("nav-btn-active"))}
                {onclick}
            >
                { label }
            </button>
        }
    };

    html! {
        <div class="app-shell">
            <nav class="app-nav">
                <span class="app-title">{ "🛵 Fleet Tracker" }</span>
                { nav_button(View::Rider, "Mi turno") }
                { nav_button(View::AdminMap, "Mapa en vivo") }
                { nav_button(View::Leaderboard, "Leaderboard") }
            </nav>
            <main class="app-main">
                {
                    match *view {
                        View::Rider => html! { <RiderConsole /> },
                        View::AdminMap => html! { <AdminMapView /> },
                        View::Leaderboard => html! { <LeaderboardView /> },
                    }
                }
            </main>
        </div>
    }
}
