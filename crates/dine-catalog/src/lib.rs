//! Menu domain types.
//!
//! Read-only snapshots of content API records: categories, products and
//! add-on groups, plus the two derived views the pages render from
//! (products grouped by category, add-ons resolved for a product).

mod addon;
mod category;
mod grouping;
mod ids;
mod media;
mod price;
mod product;
mod wire;

pub use addon::{resolve_addons, AddonConfig, AddonGroup, AddonGroupRef, AddonOption, ResolvedAddon, SelectionType};
pub use category::{anchor_for, Category};
pub use grouping::ProductsByCategory;
pub use ids::{CategoryId, DocumentId, OptionId, ProductId};
pub use media::Media;
pub use price::{format_option_price, format_price};
pub use product::{BaseInfo, CategoryRef, Product};
