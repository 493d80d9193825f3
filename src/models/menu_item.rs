//! Menu items offered by the chef.

use bigdecimal::{BigDecimal, RoundingMode};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Text shown in place of artwork that cannot be displayed.
pub const ARTWORK_PLACEHOLDER: &str = "[ no photo ]";

/// A single orderable dish.
///
/// Items are loaded once with the catalog and never mutated afterwards.
///
/// # Validation
///
/// - `id` must be unique within a catalog
/// - `name` must be non-empty
/// - `rating` must be within 0.0..=5.0
/// - `price` must not be negative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique identifier
    pub id: u32,
    /// Display name (e.g., "Truffle Risotto")
    pub name: String,
    /// Short description shown in the detail view
    pub description: String,
    /// Unit price, kept as an exact decimal
    pub price: BigDecimal,
    /// Artwork reference (an http(s) URL); empty when the dish has no photo
    #[serde(default)]
    pub image_ref: String,
    /// Category value the strip filters on (e.g., "Seafood")
    pub category: String,
    /// Average rating between 0.0 and 5.0
    pub rating: f32,
    /// Free-text preparation time (e.g., "35 min")
    pub prep_time: String,
}

/// Displayable artwork for a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artwork<'a> {
    /// A remote image reference
    Remote(&'a str),
    /// Nothing usable, render the placeholder
    Placeholder,
}

impl Artwork<'_> {
    /// Label to print where the image would be.
    pub fn label(&self) -> &str {
        match self {
            Self::Remote(url) => url,
            Self::Placeholder => ARTWORK_PLACEHOLDER,
        }
    }
}

impl MenuItem {
    /// Preparation time in whole minutes.
    ///
    /// See [`parse_prep_minutes`] for the fallback rules.
    pub fn prep_minutes(&self) -> u32 {
        parse_prep_minutes(&self.prep_time)
    }

    /// Resolves the artwork reference, degrading to a placeholder when the
    /// reference is missing or not an http(s) URL.
    pub fn artwork(&self) -> Artwork<'_> {
        let reference = self.image_ref.trim();
        if reference.starts_with("https://") || reference.starts_with("http://") {
            Artwork::Remote(reference)
        } else {
            Artwork::Placeholder
        }
    }

    /// Price of `quantity` portions.
    pub fn price_for(&self, quantity: u32) -> BigDecimal {
        &self.price * BigDecimal::from(quantity)
    }

    /// Price formatted for display (e.g., "$9.50").
    pub fn display_price(&self) -> String {
        format_money(&self.price)
    }
}

/// Parses the leading integer of a free-text preparation time.
///
/// `"35 min"` parses to 35. Text without a numeric prefix (e.g. `"about an
/// hour"`, or a number too large for `u32`) parses to 0 minutes, which acts as
/// a floor value when sorting rather than an error.
pub fn parse_prep_minutes(prep: &str) -> u32 {
    static PREFIX: OnceLock<Regex> = OnceLock::new();
    let pattern =
        PREFIX.get_or_init(|| Regex::new(r"^\s*(\d+)").expect("prep time pattern is valid"));

    pattern
        .captures(prep)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

/// Formats an amount with two decimal places and a dollar sign.
///
/// Half cents round up, so `0.125` reads `$0.13`.
pub fn format_money(amount: &BigDecimal) -> String {
    format!("${}", amount.with_scale_round(2, RoundingMode::HalfUp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn item(image_ref: &str, prep_time: &str) -> MenuItem {
        MenuItem {
            id: 1,
            name: "Truffle Risotto".to_string(),
            description: "Arborio rice".to_string(),
            price: BigDecimal::from_str("28").unwrap(),
            image_ref: image_ref.to_string(),
            category: "Italian".to_string(),
            rating: 4.8,
            prep_time: prep_time.to_string(),
        }
    }

    #[test]
    fn test_parse_prep_minutes_numeric_prefix() {
        assert_eq!(parse_prep_minutes("35 min"), 35);
        assert_eq!(parse_prep_minutes("  5min"), 5);
        assert_eq!(parse_prep_minutes("90"), 90);
    }

    #[test]
    fn test_parse_prep_minutes_falls_back_to_zero() {
        assert_eq!(parse_prep_minutes(""), 0);
        assert_eq!(parse_prep_minutes("about an hour"), 0);
        assert_eq!(parse_prep_minutes("min 35"), 0);
        assert_eq!(parse_prep_minutes("99999999999999 min"), 0);
    }

    #[test]
    fn test_prep_minutes_uses_item_text() {
        assert_eq!(item("", "40 min").prep_minutes(), 40);
    }

    #[test]
    fn test_artwork_remote() {
        let dish = item("https://example.com/risotto.jpg", "35 min");
        assert_eq!(
            dish.artwork(),
            Artwork::Remote("https://example.com/risotto.jpg")
        );
    }

    #[test]
    fn test_artwork_placeholder() {
        assert_eq!(item("", "35 min").artwork(), Artwork::Placeholder);
        assert_eq!(item("risotto.jpg", "35 min").artwork(), Artwork::Placeholder);
        assert_eq!(Artwork::Placeholder.label(), ARTWORK_PLACEHOLDER);
    }

    #[test]
    fn test_format_money_rounds_half_cents_up() {
        assert_eq!(format_money(&BigDecimal::from_str("0.125").unwrap()), "$0.13");
        assert_eq!(format_money(&BigDecimal::from_str("2.675").unwrap()), "$2.68");
        assert_eq!(format_money(&BigDecimal::from_str("0.124").unwrap()), "$0.12");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(&BigDecimal::from_str("28").unwrap()), "$28.00");
        assert_eq!(format_money(&BigDecimal::from_str("9.5").unwrap()), "$9.50");
        assert_eq!(
            format_money(&BigDecimal::from_str("0.30000000000000004").unwrap()),
            "$0.30"
        );
    }
}
