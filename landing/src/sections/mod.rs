// Landing page sections

/// Product name shown in the footer brand.
pub const PRODUCT_NAME: &str = "ESG Intelligence";

/// Anchor of the feature grid, target of "Explore Features".
pub const FEATURES_ANCHOR: &str = "features";

mod chat_root;
mod cta;
mod features;
mod footer;
mod hero;

pub use chat_root::ChatRoot;
pub use cta::CallToAction;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
