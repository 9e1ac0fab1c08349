use leptos::prelude::*;

use super::FEATURES_ANCHOR;
use crate::assistant::use_assistant;

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1497435334941-8c899ee9e8e9?w=800&h=600&fit=crop";

#[component]
pub fn Hero() -> impl IntoView {
    let assistant = use_assistant();

    view! {
        <section class="hero">
            <div class="hero-background"></div>
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <div class="badge">
                            <span class="badge-icon">"🌿"</span>
                            "AI-Powered ESG Intelligence"
                        </div>
                        <h1 class="hero-title">
                            "Transform Your "
                            <span class="hero-title-accent">"Carbon Footprint"</span>
                        </h1>
                        <p class="hero-description">
                            "AI-powered ESG analysis and carbon emission intelligence for sustainable business decisions. "
                            "Track, analyze, and reduce your environmental impact with real-time insights."
                        </p>
                        <div class="hero-actions">
                            <button class="btn btn-primary" on:click=move |_| scroll_to_features()>
                                <span class="btn-icon">"⚡"</span>
                                "Explore Features"
                            </button>
                            <button
                                class="btn btn-outline"
                                on:click=move |_| {
                                    assistant.open();
                                }
                            >
                                <span class="btn-icon">"💬"</span>
                                "Ask the Assistant"
                            </button>
                        </div>
                        <div class="hero-stats">
                            <Stat value="5000+" label="Active Users" />
                            <Stat value="1M+" label="Data Points" />
                            <Stat value="98%" label="Satisfaction" />
                        </div>
                    </div>
                    <div class="hero-visual">
                        <div class="hero-image animate-float">
                            <img src=HERO_IMAGE alt="ESG Sustainability Dashboard" />
                            <div class="hero-image-fade"></div>
                        </div>
                        <FloatingCard
                            side="left"
                            icon="📊"
                            title="Real-time Analysis"
                            caption="Live monitoring"
                        />
                        <FloatingCard
                            side="right"
                            icon="🛡"
                            title="GHG Compliant"
                            caption="Standard certified"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Stat(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat-value">{value}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

#[component]
fn FloatingCard(
    side: &'static str,
    icon: &'static str,
    title: &'static str,
    caption: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("floating-card floating-card-{side}")>
            <div class="floating-card-icon">{icon}</div>
            <div>
                <div class="floating-card-title">{title}</div>
                <div class="floating-card-caption">{caption}</div>
            </div>
        </div>
    }
}

/// Smooth-scroll the feature grid into view.
fn scroll_to_features() {
    let Some(target) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(FEATURES_ANCHOR))
    else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
