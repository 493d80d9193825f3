//! Transient filter and sort choices made while browsing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::CategoryFilter;

/// Ordering applied to the catalog view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Rating descending, then preparation time ascending
    #[default]
    Recommended,
    /// Rating descending
    Rating,
    /// Price ascending
    Price,
    /// Preparation time ascending
    Time,
}

impl SortKey {
    /// All sort keys in cycling order.
    pub const ALL: [SortKey; 4] = [Self::Recommended, Self::Rating, Self::Price, Self::Time];

    /// The next key, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::Recommended => Self::Rating,
            Self::Rating => Self::Price,
            Self::Price => Self::Time,
            Self::Time => Self::Recommended,
        }
    }

    /// Lowercase name used on the command line and in config files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::Rating => "rating",
            Self::Price => "price",
            Self::Time => "time",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown sort key '{s}' (expected recommended, rating, price or time)")
            })
    }
}

/// Individual or catering service.
///
/// Stored and displayed, but no filter or pricing rule consults it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceType {
    /// Portions for one household
    #[default]
    Individual,
    /// Event catering
    Catering,
}

impl ServiceType {
    /// Switches to the other service type.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Individual => Self::Catering,
            Self::Catering => Self::Individual,
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Individual => f.write_str("Individual"),
            Self::Catering => f.write_str("Catering"),
        }
    }
}

/// Minimum rating steps offered by the rating toggle.
const RATING_STEPS: [Option<f32>; 4] = [None, Some(4.5), Some(4.7), Some(4.8)];

/// Maximum preparation time steps offered by the time toggle.
const PREP_STEPS: [Option<u32>; 4] = [None, Some(20), Some(30), Some(45)];

/// Everything the user has chosen to narrow down the menu.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuSelection {
    /// Category restriction
    pub active_category: CategoryFilter,
    /// Individual or catering (display only)
    pub service_type: ServiceType,
    /// Inclusive minimum rating
    pub min_rating: Option<f32>,
    /// Inclusive maximum preparation time in minutes
    pub max_prep_minutes: Option<u32>,
    /// Ordering of the view
    pub sort_key: SortKey,
}

impl MenuSelection {
    /// Creates a selection showing everything in the given order.
    pub fn with_sort(sort_key: SortKey) -> Self {
        Self {
            sort_key,
            ..Self::default()
        }
    }

    /// Steps through the minimum-rating presets.
    pub fn cycle_min_rating(&mut self) {
        self.min_rating = next_step(&RATING_STEPS, self.min_rating);
    }

    /// Steps through the maximum-prep-time presets.
    pub fn cycle_max_prep(&mut self) {
        self.max_prep_minutes = next_step(&PREP_STEPS, self.max_prep_minutes);
    }
}

/// Returns the step after `current`, or the first step when `current` is not
/// one of the presets.
fn next_step<T: Copy + PartialEq>(steps: &[Option<T>], current: Option<T>) -> Option<T> {
    steps
        .iter()
        .position(|step| *step == current)
        .map_or(steps[0], |i| steps[(i + 1) % steps.len()])
}
