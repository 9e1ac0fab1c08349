use thiserror::Error;

/// Everything that can go wrong while wiring up the assistant widget.
///
/// None of these are fatal to the page: the bootstrapper logs them and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    #[error("assistant configuration not found (window.watsonConfig with a hostURL)")]
    MissingConfiguration,

    #[error("failed to load assistant script {src}: {reason}")]
    ScriptLoad { src: String, reason: String },

    #[error("assistant initialization failed: {0}")]
    Initialization(String),

    #[error("assistant open() failed: {0}")]
    Open(String),
}
