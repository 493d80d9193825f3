//! Data models for the menu, the cart, and browsing choices.
//!
//! Models are independent of the terminal UI and the command line.

pub mod cart;
pub mod category;
pub mod menu_item;
pub mod selection;

// Re-export all model types
pub use cart::{Cart, CartEntry, CheckoutSummary};
pub use category::{CategoryFilter, StripCategory, ALL_CATEGORY};
pub use menu_item::{format_money, parse_prep_minutes, Artwork, MenuItem};
pub use selection::{MenuSelection, ServiceType, SortKey};
