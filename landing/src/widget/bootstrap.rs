//! Assistant bootstrap sequence: read config, inject the loader script, init, open.

use log::{debug, error, info, warn};

use super::{WidgetError, WidgetHost, WidgetLoadState};

/// How an [`Bootstrapper::open`] call was served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// A trigger control inside the chat container was clicked.
    ClickedTrigger,
    /// The library's `open()` entry point was called.
    OpenedDirectly,
    /// Nothing to open yet.
    Unavailable,
}

pub struct Bootstrapper<H> {
    host: H,
}

impl<H: WidgetHost> Bootstrapper<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Load and initialize the assistant.
    ///
    /// Every failure is logged and absorbed; the returned state is `Loaded` only when
    /// the script loaded and `init()` succeeded. Calling this twice issues two script
    /// requests, so callers run it once per page activation.
    pub async fn initialize(&self) -> WidgetLoadState {
        match self.try_initialize().await {
            Ok(state) => state,
            Err(e) => {
                error!("{e}");
                WidgetLoadState::NotLoaded
            }
        }
    }

    async fn try_initialize(&self) -> Result<WidgetLoadState, WidgetError> {
        let config = self.host.read_config()?;
        let src = config.script_url();
        debug!("requesting assistant loader from {src}");

        self.host.load_script(&src).await?;
        info!("assistant script loaded");

        if !self.host.has_loader() {
            warn!("assistant script loaded but wxoLoader is not defined; skipping init");
            return Ok(WidgetLoadState::NotLoaded);
        }

        self.host.publish_config(&config)?;
        self.host.init_loader()?;

        let mut state = WidgetLoadState::NotLoaded;
        state.mark_loaded();
        info!("assistant initialized");
        Ok(state)
    }

    /// Open the chat: click the trigger rendered in the chat container if there is one,
    /// otherwise fall back to the library's own `open()`. A no-op without the container
    /// or when neither exists.
    pub fn open(&self) -> OpenOutcome {
        if !self.host.has_container() {
            debug!("assistant container missing; open request ignored");
            return OpenOutcome::Unavailable;
        }
        if self.host.click_trigger() {
            debug!("assistant opened via trigger control");
            return OpenOutcome::ClickedTrigger;
        }
        match self.host.open_loader() {
            Ok(true) => {
                debug!("assistant opened via wxoLoader.open()");
                OpenOutcome::OpenedDirectly
            }
            Ok(false) => {
                debug!("assistant not ready; open request ignored");
                OpenOutcome::Unavailable
            }
            Err(e) => {
                warn!("{e}");
                OpenOutcome::Unavailable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use futures::executor::block_on;
    use futures::future::{self, FutureExt};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::widget::{ScriptLoad, WidgetConfig};

    /// In-memory host recording every interaction.
    #[derive(Default)]
    struct FakeHost {
        pub config: Option<WidgetConfig>,
        pub load_fails: bool,
        pub loader_present: bool,
        pub init_error: Option<String>,
        pub container_present: bool,
        pub trigger_present: bool,
        pub open_present: bool,
        pub open_error: Option<String>,
        pub script_requests: RefCell<Vec<String>>,
        pub published: RefCell<Vec<WidgetConfig>>,
        pub init_calls: Cell<usize>,
        pub clicks: Cell<usize>,
        pub opens: Cell<usize>,
        /// Interleaving of publish/init calls.
        pub calls: RefCell<Vec<&'static str>>,
    }

    impl FakeHost {
        pub fn configured(host_url: &str) -> Self {
            Self {
                config: Some(WidgetConfig::new(host_url)),
                loader_present: true,
                ..Self::default()
            }
        }
    }

    impl WidgetHost for FakeHost {
        fn read_config(&self) -> Result<WidgetConfig, WidgetError> {
            self.config.clone().ok_or(WidgetError::MissingConfiguration)
        }

        fn load_script(&self, src: &str) -> ScriptLoad {
            self.script_requests.borrow_mut().push(src.to_string());
            let outcome = if self.load_fails {
                Err(WidgetError::ScriptLoad {
                    src: src.to_string(),
                    reason: "404".into(),
                })
            } else {
                Ok(())
            };
            future::ready(outcome).boxed_local()
        }

        fn has_loader(&self) -> bool {
            self.loader_present
        }

        fn publish_config(&self, config: &WidgetConfig) -> Result<(), WidgetError> {
            self.calls.borrow_mut().push("publish");
            self.published.borrow_mut().push(config.clone());
            Ok(())
        }

        fn init_loader(&self) -> Result<(), WidgetError> {
            self.calls.borrow_mut().push("init");
            self.init_calls.set(self.init_calls.get() + 1);
            match &self.init_error {
                Some(msg) => Err(WidgetError::Initialization(msg.clone())),
                None => Ok(()),
            }
        }

        fn has_container(&self) -> bool {
            self.container_present
        }

        fn click_trigger(&self) -> bool {
            if self.trigger_present {
                self.clicks.set(self.clicks.get() + 1);
            }
            self.trigger_present
        }

        fn open_loader(&self) -> Result<bool, WidgetError> {
            if let Some(msg) = &self.open_error {
                return Err(WidgetError::Open(msg.clone()));
            }
            if self.open_present {
                self.opens.set(self.opens.get() + 1);
            }
            Ok(self.open_present)
        }
    }

    #[test]
    fn requests_exactly_one_script_at_the_loader_address() {
        let boot = Bootstrapper::new(FakeHost::configured("https://example.com"));
        block_on(boot.initialize());
        assert_eq!(
            *boot.host().script_requests.borrow(),
            vec!["https://example.com/wxochat/wxoLoader.js?embed=true".to_string()]
        );
    }

    #[test]
    fn missing_config_loads_nothing() {
        let boot = Bootstrapper::new(FakeHost::default());
        let state = block_on(boot.initialize());
        assert_eq!(state, WidgetLoadState::NotLoaded);
        assert!(boot.host().script_requests.borrow().is_empty());
        assert_eq!(boot.host().init_calls.get(), 0);
    }

    #[test]
    fn successful_load_publishes_config_then_inits() {
        let boot = Bootstrapper::new(FakeHost::configured("https://example.com"));
        let state = block_on(boot.initialize());
        assert_eq!(state, WidgetLoadState::Loaded);
        assert_eq!(*boot.host().calls.borrow(), vec!["publish", "init"]);
        assert_eq!(
            boot.host().published.borrow()[0],
            WidgetConfig::new("https://example.com")
        );
        assert_eq!(boot.host().init_calls.get(), 1);
    }

    #[test]
    fn failed_load_stays_not_loaded() {
        let boot = Bootstrapper::new(FakeHost {
            load_fails: true,
            ..FakeHost::configured("https://example.com")
        });
        let state = block_on(boot.initialize());
        assert_eq!(state, WidgetLoadState::NotLoaded);
        assert_eq!(boot.host().script_requests.borrow().len(), 1);
        assert_eq!(boot.host().init_calls.get(), 0);
        assert!(boot.host().published.borrow().is_empty());
    }

    #[test]
    fn init_error_is_absorbed() {
        let boot = Bootstrapper::new(FakeHost {
            init_error: Some("TypeError: agentId is required".into()),
            ..FakeHost::configured("https://example.com")
        });
        let state = block_on(boot.initialize());
        assert_eq!(state, WidgetLoadState::NotLoaded);
        assert_eq!(boot.host().init_calls.get(), 1);
    }

    #[test]
    fn loaded_script_without_loader_skips_init() {
        let boot = Bootstrapper::new(FakeHost {
            loader_present: false,
            ..FakeHost::configured("https://example.com")
        });
        let state = block_on(boot.initialize());
        assert_eq!(state, WidgetLoadState::NotLoaded);
        assert!(boot.host().calls.borrow().is_empty());
    }

    #[test]
    fn initializing_twice_requests_the_script_twice() {
        let boot = Bootstrapper::new(FakeHost::configured("https://example.com"));
        block_on(boot.initialize());
        block_on(boot.initialize());
        assert_eq!(boot.host().script_requests.borrow().len(), 2);
    }

    #[test]
    fn open_without_widget_is_a_no_op() {
        let boot = Bootstrapper::new(FakeHost::default());
        assert_eq!(boot.open(), OpenOutcome::Unavailable);
        assert_eq!(boot.host().clicks.get(), 0);
        assert_eq!(boot.host().opens.get(), 0);
    }

    #[test]
    fn open_clicks_trigger_once_per_call() {
        let boot = Bootstrapper::new(FakeHost {
            container_present: true,
            trigger_present: true,
            open_present: true,
            ..FakeHost::default()
        });
        assert_eq!(boot.open(), OpenOutcome::ClickedTrigger);
        assert_eq!(boot.host().clicks.get(), 1);
        assert_eq!(boot.open(), OpenOutcome::ClickedTrigger);
        assert_eq!(boot.host().clicks.get(), 2);
        assert_eq!(boot.host().opens.get(), 0);
    }

    #[test]
    fn open_falls_back_to_loader_open() {
        let boot = Bootstrapper::new(FakeHost {
            container_present: true,
            open_present: true,
            ..FakeHost::default()
        });
        assert_eq!(boot.open(), OpenOutcome::OpenedDirectly);
        assert_eq!(boot.host().opens.get(), 1);
    }

    #[test]
    fn open_without_container_leaves_loader_alone() {
        let boot = Bootstrapper::new(FakeHost {
            open_present: true,
            ..FakeHost::default()
        });
        assert_eq!(boot.open(), OpenOutcome::Unavailable);
        assert_eq!(boot.host().opens.get(), 0);
    }

    #[test]
    fn open_error_is_absorbed() {
        let boot = Bootstrapper::new(FakeHost {
            container_present: true,
            open_error: Some("widget destroyed".into()),
            ..FakeHost::default()
        });
        assert_eq!(boot.open(), OpenOutcome::Unavailable);
    }
}
