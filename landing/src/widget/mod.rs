//! Embedded assistant widget: configuration, load state and the bootstrap sequence.

mod bootstrap;
mod config;
mod dom;
mod error;
mod host;
mod state;

pub use bootstrap::{Bootstrapper, OpenOutcome};
pub use config::{
    CONFIG_GLOBAL, HOST_URL_KEY, LOADER_PATH, LOADER_QUERY, PUBLISHED_CONFIG_GLOBAL,
    WidgetConfig,
};
pub use dom::{CONTAINER_ID, DomHost, LOADER_GLOBAL};
pub use error::WidgetError;
pub use host::{ScriptLoad, WidgetHost};
pub use state::WidgetLoadState;
