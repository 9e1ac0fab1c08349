use leptos::prelude::*;

use super::FEATURES_ANCHOR;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "🌿",
        title: "Scope Classification",
        description: "Automatically classify emissions into Scope 1, 2, and 3 categories following GHG Protocol standards",
    },
    Feature {
        icon: "📉",
        title: "Hotspot Detection",
        description: "Identify high-emission activities and processes that need immediate attention",
    },
    Feature {
        icon: "📊",
        title: "Anomaly Detection",
        description: "Detect unusual patterns and spikes in your carbon emission data",
    },
    Feature {
        icon: "💡",
        title: "Smart Recommendations",
        description: "Get practical, data-backed sustainability actions tailored to your business",
    },
    Feature {
        icon: "📄",
        title: "ESG Reports",
        description: "Generate comprehensive ESG summaries and compliance reports instantly",
    },
    Feature {
        icon: "🛡",
        title: "Comparative Analysis",
        description: "Compare emissions across materials, processes, and time periods",
    },
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id=FEATURES_ANCHOR class="features">
            <div class="container">
                <div class="section-header">
                    <span class="badge">"Comprehensive Solutions"</span>
                    <h2 class="section-title">"Powerful Features"</h2>
                    <p class="section-description">
                        "Everything you need for comprehensive carbon intelligence and ESG compliance"
                    </p>
                </div>
                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .map(|f| {
                            view! {
                                <FeatureCard
                                    icon=f.icon
                                    title=f.title
                                    description=f.description
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon">{icon}</div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </article>
    }
}
