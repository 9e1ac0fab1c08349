use leptos::prelude::*;

use crate::widget::CONTAINER_ID;

/// Mount point for the assistant launcher. Pinned bottom-right by the stylesheet.
#[component]
pub fn ChatRoot() -> impl IntoView {
    view! { <div id=CONTAINER_ID class="chat-root"></div> }
}
