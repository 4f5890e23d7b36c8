// ============================================================================
// ALERT FEED PANEL - Log en vivo de los últimos eventos broadcast
// ============================================================================

use yew::prelude::*;

use crate::services::AlertFeed;

#[derive(Properties, PartialEq)]
pub struct AlertFeedPanelProps {
    pub feed: AlertFeed,
}

#[function_component(AlertFeedPanel)]
pub fn alert_feed_panel(props: &AlertFeedPanelProps) -> Html {
    html! {
        <aside class="alert-feed">
            <h3>{ "📡 Actividad en vivo" }</h3>
            {
                if props.feed.is_empty() {
                    html! { <p class="feed-empty">{ "Esperando eventos..." }</p> }
                } else {
                    html! {
                        <ul class="feed-list">
                            {
                                for props.feed.entries().iter().map(|entry| html! {
                                    <li class="feed-entry">
                                        <span class="feed-time">{ entry.time.clone() }</span>
                                        <span class="feed-message">{ entry.message.clone() }</span>
                                    </li>
                                })
                            }
                        </ul>
                    }
                }
            }
        </aside>
    }
}
