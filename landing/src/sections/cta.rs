use leptos::prelude::*;

use crate::assistant::use_assistant;

#[component]
pub fn CallToAction() -> impl IntoView {
    let assistant = use_assistant();

    view! {
        <section class="cta">
            <div class="cta-background"></div>
            <div class="container">
                <div class="cta-inner">
                    <h2 class="section-title">"Ready to Make an Impact?"</h2>
                    <p class="section-description">
                        "Start your sustainability journey with our AI-powered assistant. Get instant insights, "
                        "recommendations, and compliance reports."
                    </p>
                    <button
                        class="btn btn-primary btn-lg"
                        on:click=move |_| {
                            assistant.open();
                        }
                    >
                        <span class="btn-icon">"💬"</span>
                        "Talk to the Assistant"
                    </button>
                    <Show when=move || !assistant.is_loaded()>
                        <p class="cta-hint">"Loading assistant..."</p>
                    </Show>
                </div>
            </div>
        </section>
    }
}
