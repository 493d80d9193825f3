//! Catalog loading and validation.
//!
//! The catalog is read once at startup, either from the menu embedded in the
//! binary or from a user-supplied TOML file, and is immutable afterwards.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::models::{CategoryFilter, MenuItem, StripCategory, ALL_CATEGORY};

use super::menu_query::MenuQuery;

/// Menu compiled into the binary.
const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.toml");

/// On-disk catalog format.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    categories: Vec<StripCategory>,
    #[serde(default)]
    items: Vec<MenuItem>,
}

/// The fixed set of orderable dishes plus the category strip labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    categories: Vec<StripCategory>,
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Builds a catalog from parts, validating every item and category.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - two items share an id
    /// - an item has an empty name, a negative price, or a rating outside 0.0..=5.0
    /// - a strip category is invalid (see [`StripCategory::validate`])
    pub fn new(categories: Vec<StripCategory>, items: Vec<MenuItem>) -> Result<Self> {
        for category in &categories {
            category.validate()?;
        }

        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id) {
                anyhow::bail!("Duplicate menu item id {}", item.id);
            }
            Self::validate_item(item)?;
        }

        let catalog = Self { categories, items };
        for item in catalog.unlisted_items() {
            tracing::warn!(
                id = item.id,
                category = %item.category,
                "menu item category is not on the strip, only reachable through All"
            );
        }
        Ok(catalog)
    }

    fn validate_item(item: &MenuItem) -> Result<()> {
        if item.name.trim().is_empty() {
            anyhow::bail!("Menu item {} has an empty name", item.id);
        }

        if !(0.0..=5.0).contains(&item.rating) {
            anyhow::bail!(
                "Menu item '{}' has rating {} outside 0.0 to 5.0",
                item.name,
                item.rating
            );
        }

        if item.price < bigdecimal::BigDecimal::from(0) {
            anyhow::bail!("Menu item '{}' has a negative price", item.name);
        }

        Ok(())
    }

    /// Parses a catalog from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content).context("Failed to parse catalog")?;
        Self::new(file.categories, file.items)
    }

    /// The menu shipped with the application.
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_CATALOG).context("Embedded catalog is invalid")
    }

    /// Loads a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

        let catalog = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            items = catalog.items.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Loads `path` when given, otherwise the embedded menu.
    pub fn load_or_embedded(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::embedded(),
        }
    }

    /// All dishes in catalog order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Strip labels in display order.
    pub fn categories(&self) -> &[StripCategory] {
        &self.categories
    }

    /// Dishes whose category matches no strip value other than "All".
    pub fn unlisted_items(&self) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|item| {
                !self.categories.iter().any(|category| {
                    category.value != ALL_CATEGORY && category.value == item.category
                })
            })
            .collect()
    }

    /// Looks up a dish by id.
    pub fn get(&self, id: u32) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Finds the strip category whose label or value matches, ignoring case.
    pub fn find_category(&self, name: &str) -> Option<&StripCategory> {
        let name = name.trim();
        self.categories.iter().find(|category| {
            category.value.eq_ignore_ascii_case(name) || category.label.eq_ignore_ascii_case(name)
        })
    }

    /// Dishes in `active_category`, in the recommended order.
    pub fn filtered_and_sorted(&self, active_category: &CategoryFilter) -> Vec<&MenuItem> {
        MenuQuery::for_category(active_category.clone()).apply(&self.items)
    }

    /// Dishes matching an arbitrary query.
    pub fn query(&self, query: &MenuQuery) -> Vec<&MenuItem> {
        query.apply(&self.items)
    }
}
