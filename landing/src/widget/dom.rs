//! Browser-backed [`WidgetHost`]: `window` globals, a `<script>` element in `<head>`,
//! and the chat container the library renders into.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::{self, FutureExt};
use js_sys::{Function, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlScriptElement};

use super::config::{CONFIG_GLOBAL, HOST_URL_KEY, PUBLISHED_CONFIG_GLOBAL};
use super::{ScriptLoad, WidgetConfig, WidgetError, WidgetHost};

/// Element the library renders its launcher into.
pub const CONTAINER_ID: &str = "watson-chat-root";

/// Global the loader script defines.
pub const LOADER_GLOBAL: &str = "wxoLoader";

/// Browser host. Remembers the configuration object it read so the very same object
/// can be handed to the library.
#[derive(Debug, Default)]
pub struct DomHost {
    page_config: RefCell<Option<JsValue>>,
}

impl DomHost {
    /// `window[name]`, with `undefined` and `null` folded into `None`.
    fn global(name: &str) -> Option<JsValue> {
        let window = web_sys::window()?;
        let value = Reflect::get(&window, &JsValue::from_str(name)).ok()?;
        if value.is_undefined() || value.is_null() {
            None
        } else {
            Some(value)
        }
    }

    /// `wxoLoader[name]` when it is callable, together with its receiver.
    fn loader_method(name: &str) -> Option<(JsValue, Function)> {
        let loader = Self::global(LOADER_GLOBAL)?;
        let method = Reflect::get(&loader, &JsValue::from_str(name))
            .ok()?
            .dyn_into::<Function>()
            .ok()?;
        Some((loader, method))
    }

    fn container() -> Option<web_sys::Element> {
        web_sys::window()?
            .document()?
            .get_element_by_id(CONTAINER_ID)
    }
}

impl WidgetHost for DomHost {
    fn read_config(&self) -> Result<WidgetConfig, WidgetError> {
        let value = Self::global(CONFIG_GLOBAL).ok_or(WidgetError::MissingConfiguration)?;
        // Reflect::get throws on primitives; that is a missing config too
        let host_url = Reflect::get(&value, &JsValue::from_str(HOST_URL_KEY))
            .ok()
            .and_then(|url| url.as_string());
        let config = WidgetConfig::from_host_url(host_url)?;
        self.page_config.replace(Some(value));
        Ok(config)
    }

    fn load_script(&self, src: &str) -> ScriptLoad {
        match append_script(src) {
            Ok(done) => {
                let src = src.to_string();
                async move {
                    done.await.unwrap_or_else(|_| {
                        Err(WidgetError::ScriptLoad {
                            src,
                            reason: "load callbacks dropped".into(),
                        })
                    })
                }
                .boxed_local()
            }
            Err(e) => future::ready(Err(e)).boxed_local(),
        }
    }

    fn has_loader(&self) -> bool {
        Self::global(LOADER_GLOBAL).is_some()
    }

    fn publish_config(&self, config: &WidgetConfig) -> Result<(), WidgetError> {
        let window = web_sys::window()
            .ok_or_else(|| WidgetError::Initialization("no window".into()))?;
        let page_config = self.page_config.borrow().clone().ok_or_else(|| {
            WidgetError::Initialization(format!(
                "window.{CONFIG_GLOBAL} was never read for {}",
                config.host_url()
            ))
        })?;
        Reflect::set(&window, &JsValue::from_str(PUBLISHED_CONFIG_GLOBAL), &page_config)
            .map_err(|e| WidgetError::Initialization(describe(&e)))?;
        Ok(())
    }

    fn init_loader(&self) -> Result<(), WidgetError> {
        let (loader, init) = Self::loader_method("init").ok_or_else(|| {
            WidgetError::Initialization(format!("{LOADER_GLOBAL}.init is not a function"))
        })?;
        init.call0(&loader)
            .map_err(|e| WidgetError::Initialization(describe(&e)))?;
        Ok(())
    }

    fn has_container(&self) -> bool {
        Self::container().is_some()
    }

    fn click_trigger(&self) -> bool {
        let Some(container) = Self::container() else {
            return false;
        };
        match container.query_selector("button") {
            Ok(Some(element)) => match element.dyn_into::<HtmlElement>() {
                Ok(button) => {
                    button.click();
                    true
                }
                Err(_) => false,
            },
            _ => false,
        }
    }

    fn open_loader(&self) -> Result<bool, WidgetError> {
        match Self::loader_method("open") {
            Some((loader, open)) => open
                .call0(&loader)
                .map(|_| true)
                .map_err(|e| WidgetError::Open(describe(&e))),
            None => Ok(false),
        }
    }
}

/// Append `<script async src=..>` to `<head>` and hand back a receiver that fires from
/// `onload` / `onerror`, whichever comes first.
fn append_script(src: &str) -> Result<oneshot::Receiver<Result<(), WidgetError>>, WidgetError> {
    let failed = |reason: String| WidgetError::ScriptLoad {
        src: src.to_string(),
        reason,
    };

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| failed("no document".into()))?;
    let head = document
        .head()
        .ok_or_else(|| failed("document has no <head>".into()))?;
    let script = document
        .create_element("script")
        .map_err(|e| failed(describe(&e)))?
        .dyn_into::<HtmlScriptElement>()
        .map_err(|_| failed("created element is not a <script>".into()))?;
    script.set_src(src);
    script.set_async(true);

    let (tx, rx) = oneshot::channel();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let on_load = {
        let tx = Rc::clone(&tx);
        Closure::wrap(Box::new(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Ok(()));
            }
        }) as Box<dyn FnMut()>)
    };

    let on_error = {
        let tx = Rc::clone(&tx);
        let src = src.to_string();
        Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Err(WidgetError::ScriptLoad {
                    src: src.clone(),
                    reason: format!("{} event (network error or bad response)", event.type_()),
                }));
            }
        }) as Box<dyn FnMut(_)>)
    };

    script.set_onload(Some(on_load.as_ref().unchecked_ref()));
    script.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    head.append_child(&script).map_err(|e| failed(describe(&e)))?;

    // The element owns these callbacks for the rest of the page's life
    on_load.forget();
    on_error.forget();

    Ok(rx)
}

/// Best-effort text for a thrown JS value.
fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    if let Some(text) = value.as_string() {
        return text;
    }
    format!("{value:?}")
}
