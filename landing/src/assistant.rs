//! Page-level handle to the embedded assistant.
//!
//! [`provide_assistant`] runs the bootstrap once when the app mounts and exposes the
//! load flag plus an `open` action to every section through Leptos context.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::widget::{Bootstrapper, DomHost, OpenOutcome, WidgetHost, WidgetLoadState};

#[derive(Clone, Copy)]
pub struct Assistant {
    state: ReadSignal<WidgetLoadState>,
    host: StoredValue<Rc<dyn WidgetHost>, LocalStorage>,
}

impl Assistant {
    /// Reactive: re-runs dependants when the widget finishes loading.
    pub fn is_loaded(&self) -> bool {
        self.state.get().is_loaded()
    }

    pub fn open(&self) -> OpenOutcome {
        self.host
            .with_value(|host| Bootstrapper::new(Rc::clone(host)).open())
    }
}

/// Register the browser-backed assistant for this page and start loading it.
pub fn provide_assistant() -> Assistant {
    provide_assistant_with(DomHost::default())
}

/// Register the assistant over `host` and start loading it.
///
/// Call once from the root component. The mount effect tracks no signals, so the
/// script is requested a single time however often the view updates.
pub fn provide_assistant_with(host: impl WidgetHost + 'static) -> Assistant {
    let host: Rc<dyn WidgetHost> = Rc::new(host);
    let (state, set_state) = signal(WidgetLoadState::default());

    let boot_host = Rc::clone(&host);
    Effect::new(move || {
        let boot = Bootstrapper::new(Rc::clone(&boot_host));
        spawn_local(async move {
            if boot.initialize().await.is_loaded() {
                set_state.update(|s| {
                    s.mark_loaded();
                });
            }
        });
    });

    let assistant = Assistant {
        state,
        host: StoredValue::new_local(host),
    };
    provide_context(assistant);
    assistant
}

pub fn use_assistant() -> Assistant {
    expect_context::<Assistant>()
}
