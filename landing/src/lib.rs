// ESG Carbon Intelligence landing page, Leptos 0.8 CSR

pub mod assistant;
pub mod sections;
pub mod widget;

use leptos::prelude::*;
use sections::*;

#[component]
pub fn App() -> impl IntoView {
    assistant::provide_assistant();

    view! {
        <div class="page">
            <main>
                <Hero />
                <Features />
                <CallToAction />
            </main>
            <Footer />
            <ChatRoot />
        </div>
    }
}
