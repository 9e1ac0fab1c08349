/// Load flag for the assistant widget.
///
/// Starts `NotLoaded` and moves to `Loaded` at most once per page lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WidgetLoadState {
    #[default]
    NotLoaded,
    Loaded,
}

impl WidgetLoadState {
    pub fn is_loaded(self) -> bool {
        self == WidgetLoadState::Loaded
    }

    /// Forward-only transition. Returns `true` only for the call that flipped the flag.
    pub fn mark_loaded(&mut self) -> bool {
        match self {
            WidgetLoadState::NotLoaded => {
                *self = WidgetLoadState::Loaded;
                true
            }
            WidgetLoadState::Loaded => false,
        }
    }
}
