// ESG Carbon Intelligence landing page, Leptos 0.8 CSR

use esg_landing::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));

    leptos::mount::mount_to_body(|| view! { <App/> });
}
