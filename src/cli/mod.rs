//! CLI command handlers for ChefMenu.
//!
//! Headless, scriptable access to the menu and cart logic the storefront uses.

pub mod categories;
pub mod common;
pub mod config;
pub mod menu;
pub mod quote;

// Re-export types used by main.rs and tests
pub use categories::CategoriesArgs;
pub use common::{CliError, CliResult, ExitCode, GlobalOptions};
pub use config::ConfigArgs;
pub use menu::MenuArgs;
pub use quote::QuoteArgs;
