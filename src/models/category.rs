//! Category labels shown in the scrolling strip and the filter built from them.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::MenuItem;

/// Category value that disables filtering.
pub const ALL_CATEGORY: &str = "All";

/// Maximum label length in characters.
const MAX_LABEL_LEN: usize = 20;

/// One entry of the category strip.
///
/// `label` is what the strip shows, `value` is compared against
/// [`MenuItem::category`]. They usually match, but a label may pluralize
/// (e.g., label "Desserts" for value "Dessert").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripCategory {
    /// Text shown in the strip
    pub label: String,
    /// Value matched against item categories
    pub value: String,
}

impl StripCategory {
    /// Creates a new strip category with validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the label or value is empty, or the label is longer
    /// than 20 characters.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let category = Self {
            label: label.into(),
            value: value.into(),
        };
        category.validate()?;
        Ok(category)
    }

    /// Validates label and value.
    pub fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            anyhow::bail!("Category label cannot be empty");
        }

        if self.label.chars().count() > MAX_LABEL_LEN {
            anyhow::bail!(
                "Category label '{}' exceeds maximum length of {} characters",
                self.label,
                MAX_LABEL_LEN
            );
        }

        if self.value.trim().is_empty() {
            anyhow::bail!("Category '{}' has an empty value", self.label);
        }

        Ok(())
    }

    /// The filter selecting this category.
    pub fn filter(&self) -> CategoryFilter {
        CategoryFilter::from_value(&self.value)
    }
}

/// Which category the catalog view is restricted to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No restriction
    #[default]
    All,
    /// Only items whose category equals the value
    Only(String),
}

impl CategoryFilter {
    /// Builds a filter from a category value, treating "All" as no filter.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_CATEGORY {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    /// The category value this filter selects.
    pub fn value(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORY,
            Self::Only(value) => value,
        }
    }

    /// Whether the item passes the filter.
    pub fn matches(&self, item: &MenuItem) -> bool {
        match self {
            Self::All => true,
            Self::Only(value) => item.category == *value,
        }
    }
}
