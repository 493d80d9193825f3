//! Service layer for business logic.
//!
//! This module contains the catalog loader and the query logic that derives
//! filtered, ordered views from it.

pub mod catalog;
pub mod menu_query;

// Re-export commonly used types
pub use catalog::Catalog;
pub use menu_query::MenuQuery;
