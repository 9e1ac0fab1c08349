use leptos::prelude::*;

use super::{FEATURES_ANCHOR, PRODUCT_NAME};

#[component]
pub fn Footer() -> impl IntoView {
    let features_href = format!("#{FEATURES_ANCHOR}");
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="footer-logo">
                            <span class="footer-logo-icon">"🌿"</span>
                            <span class="footer-title">{PRODUCT_NAME}</span>
                        </div>
                        <p class="footer-tagline">
                            "Empowering sustainable business decisions through AI-powered carbon intelligence."
                        </p>
                    </div>
                    <FooterColumn heading="Product">
                        <li><a href=features_href class="footer-link">"Features"</a></li>
                        <li><a href="#" class="footer-link">"Pricing"</a></li>
                        <li><a href="#" class="footer-link">"Documentation"</a></li>
                    </FooterColumn>
                    <FooterColumn heading="Company">
                        <li><a href="#" class="footer-link">"About"</a></li>
                        <li><a href="#" class="footer-link">"Blog"</a></li>
                        <li><a href="#" class="footer-link">"Careers"</a></li>
                    </FooterColumn>
                    <FooterColumn heading="Legal">
                        <li><a href="#" class="footer-link">"Privacy"</a></li>
                        <li><a href="#" class="footer-link">"Terms"</a></li>
                        <li><a href="#" class="footer-link">"Security"</a></li>
                    </FooterColumn>
                </div>
                <p class="footer-copyright">
                    "© 2024 ESG Carbon Intelligence. All rights reserved."
                </p>
            </div>
        </footer>
    }
}

#[component]
fn FooterColumn(heading: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="footer-column">
            <h4 class="footer-heading">{heading}</h4>
            <ul class="footer-links">{children()}</ul>
        </div>
    }
}
