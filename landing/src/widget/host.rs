//! Boundary between the bootstrapper and the browser globals it has to touch.
//!
//! The assistant library insists on ambient globals (`watsonConfig`, `wxOConfiguration`,
//! `wxoLoader`) and a DOM container it renders into. All of that sits behind
//! [`WidgetHost`] so the bootstrap sequence can run against a fake in tests.

use std::rc::Rc;

use futures::future::LocalBoxFuture;

use super::{WidgetConfig, WidgetError};

/// Completion of a script request: resolves once, to success or failure.
pub type ScriptLoad = LocalBoxFuture<'static, Result<(), WidgetError>>;

pub trait WidgetHost {
    /// Configuration supplied by the hosting page, if any.
    fn read_config(&self) -> Result<WidgetConfig, WidgetError>;

    /// Start loading `src` without blocking rendering.
    ///
    /// The request is issued before this returns; the future only reports how it ended.
    fn load_script(&self, src: &str) -> ScriptLoad;

    /// Whether the library's loader entry point is present.
    fn has_loader(&self) -> bool;

    /// Hand the configuration the page supplied to the slot the library reads.
    ///
    /// Implementations publish the page's own object, not a copy rebuilt from `config`.
    fn publish_config(&self, config: &WidgetConfig) -> Result<(), WidgetError>;

    /// Call the loader's `init()`.
    fn init_loader(&self) -> Result<(), WidgetError>;

    /// Whether the chat container is in the document.
    fn has_container(&self) -> bool;

    /// Click the trigger control rendered inside the chat container.
    /// Returns `false` when there is nothing to click.
    fn click_trigger(&self) -> bool;

    /// Call the loader's `open()`. `Ok(false)` when the library has no such entry point.
    fn open_loader(&self) -> Result<bool, WidgetError>;
}

impl<H: WidgetHost + ?Sized> WidgetHost for Rc<H> {
    fn read_config(&self) -> Result<WidgetConfig, WidgetError> {
        (**self).read_config()
    }

    fn load_script(&self, src: &str) -> ScriptLoad {
        (**self).load_script(src)
    }

    fn has_loader(&self) -> bool {
        (**self).has_loader()
    }

    fn publish_config(&self, config: &WidgetConfig) -> Result<(), WidgetError> {
        (**self).publish_config(config)
    }

    fn init_loader(&self) -> Result<(), WidgetError> {
        (**self).init_loader()
    }

    fn has_container(&self) -> bool {
        (**self).has_container()
    }

    fn click_trigger(&self) -> bool {
        (**self).click_trigger()
    }

    fn open_loader(&self) -> Result<bool, WidgetError> {
        (**self).open_loader()
    }
}
