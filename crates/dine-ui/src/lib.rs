//! Storefront components.
//!
//! Every component renders to an HTML string. The category slider is also a
//! small state machine that the `hydrate` feature drives from the browser.

pub mod hero;
pub mod html;
pub mod listing;
pub mod navbar;
pub mod product;
pub mod shell;
pub mod slider;
pub mod status;
pub mod styles;

pub use hero::render_hero;
pub use html::escape_html;
pub use navbar::render_navbar;
pub use shell::{HeadContent, Shell};
pub use slider::{CategorySlider, SliderHost, StaticHost, DEFAULT_SCROLL_STEP};
pub use status::render_status_page;
pub use styles::STOREFRONT_STYLES;
