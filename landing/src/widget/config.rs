//! Process-wide widget configuration.
//!
//! The hosting page defines `window.watsonConfig` before the wasm bundle boots.
//! Only `hostURL` matters to the landing page. The object itself belongs to the
//! embedded assistant and is republished untouched by the host.

use super::WidgetError;

/// Global the hosting page writes the configuration to.
pub const CONFIG_GLOBAL: &str = "watsonConfig";

/// Global the assistant library reads its configuration from.
pub const PUBLISHED_CONFIG_GLOBAL: &str = "wxOConfiguration";

/// Key of the host URL inside the configuration object.
pub const HOST_URL_KEY: &str = "hostURL";

/// Loader script path, relative to `hostURL`.
pub const LOADER_PATH: &str = "/wxochat/wxoLoader.js";

/// Query suffix asking the host for the embedded build.
pub const LOADER_QUERY: &str = "?embed=true";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    host_url: String,
}

impl WidgetConfig {
    /// Build from the `hostURL` field, if the page supplied one.
    ///
    /// A missing, non-string or blank `hostURL` counts as missing configuration.
    /// Surrounding whitespace is dropped.
    pub fn from_host_url(host_url: Option<String>) -> Result<Self, WidgetError> {
        match host_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(Self {
                host_url: url.to_string(),
            }),
            _ => Err(WidgetError::MissingConfiguration),
        }
    }

    pub fn new(host_url: impl Into<String>) -> Self {
        Self {
            host_url: host_url.into().trim().to_string(),
        }
    }

    pub fn host_url(&self) -> &str {
        &self.host_url
    }

    /// Address of the loader script: `{hostURL}/wxochat/wxoLoader.js?embed=true`.
    pub fn script_url(&self) -> String {
        format!(
            "{}{}{}",
            self.host_url.trim_end_matches('/'),
            LOADER_PATH,
            LOADER_QUERY
        )
    }
}
