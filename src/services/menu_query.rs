//! Filtering and ordering of the catalog view.

use std::cmp::Ordering;

use crate::models::{CategoryFilter, MenuItem, MenuSelection, SortKey};

/// A filtered, ordered view over catalog items.
///
/// Applying a query never reorders or mutates the catalog itself; it returns
/// references in a fresh vector. Every ordering is a stable sort, so dishes
/// that compare equal keep their catalog order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuQuery {
    /// Category restriction
    pub category: CategoryFilter,
    /// Inclusive minimum rating
    pub min_rating: Option<f32>,
    /// Inclusive maximum preparation time in minutes
    pub max_prep_minutes: Option<u32>,
    /// Ordering
    pub sort_key: SortKey,
}

impl MenuQuery {
    /// Category filter with the recommended ordering and no other filters.
    pub fn for_category(category: CategoryFilter) -> Self {
        Self {
            category,
            ..Self::default()
        }
    }

    /// Whether an item passes every filter.
    pub fn matches(&self, item: &MenuItem) -> bool {
        self.category.matches(item)
            && self.min_rating.map_or(true, |min| item.rating >= min)
            && self
                .max_prep_minutes
                .map_or(true, |max| item.prep_minutes() <= max)
    }

    /// Filters and sorts `items`.
    pub fn apply<'a>(&self, items: &'a [MenuItem]) -> Vec<&'a MenuItem> {
        let mut view: Vec<&MenuItem> = items.iter().filter(|item| self.matches(item)).collect();
        view.sort_by(|a, b| compare(self.sort_key, a, b));
        view
    }
}

impl From<&MenuSelection> for MenuQuery {
    fn from(selection: &MenuSelection) -> Self {
        Self {
            category: selection.active_category.clone(),
            min_rating: selection.min_rating,
            max_prep_minutes: selection.max_prep_minutes,
            sort_key: selection.sort_key,
        }
    }
}

/// Orders two items under `key`.
pub fn compare(key: SortKey, a: &MenuItem, b: &MenuItem) -> Ordering {
    match key {
        SortKey::Rating => b.rating.total_cmp(&a.rating),
        SortKey::Price => a.price.cmp(&b.price),
        SortKey::Time => a.prep_minutes().cmp(&b.prep_minutes()),
        SortKey::Recommended => b
            .rating
            .total_cmp(&a.rating)
            .then_with(|| a.prep_minutes().cmp(&b.prep_minutes())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    fn dish(id: u32, category: &str, rating: f32, prep: &str, price: u32) -> MenuItem {
        MenuItem {
            id,
            name: format!("Dish {id}"),
            description: String::new(),
            price: BigDecimal::from(price),
            image_ref: String::new(),
            category: category.to_string(),
            rating,
            prep_time: prep.to_string(),
        }
    }

    fn ids(view: &[&MenuItem]) -> Vec<u32> {
        view.iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_recommended_orders_by_rating_desc() {
        let items = vec![
            dish(1, "Italian", 4.8, "35 min", 28),
            dish(2, "Chicken", 4.9, "40 min", 35),
            dish(3, "Seafood", 4.7, "20 min", 18),
        ];

        let view = MenuQuery::for_category(CategoryFilter::All).apply(&items);
        assert_eq!(ids(&view), vec![2, 1, 3]);
    }

    #[test]
    fn test_recommended_breaks_ties_by_prep_time() {
        let items = vec![
            dish(1, "Italian", 4.8, "50 min", 45),
            dish(2, "Italian", 4.8, "35 min", 28),
            dish(3, "Italian", 4.8, "soon", 10),
        ];

        let view = MenuQuery::default().apply(&items);
        assert_eq!(ids(&view), vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let items = vec![
            dish(5, "Italian", 4.6, "15 min", 16),
            dish(1, "Italian", 4.6, "15 min", 16),
            dish(3, "Italian", 4.6, "15 min", 16),
        ];

        for key in SortKey::ALL {
            let query = MenuQuery {
                sort_key: key,
                ..MenuQuery::default()
            };
            assert_eq!(ids(&query.apply(&items)), vec![5, 1, 3], "{key}");
        }
    }

    #[test]
    fn test_apply_is_idempotent_and_leaves_items_alone() {
        let items = vec![
            dish(1, "Italian", 4.8, "35 min", 28),
            dish(2, "Chicken", 4.9, "40 min", 35),
        ];
        let before = items.clone();
        let query = MenuQuery::default();

        let first = ids(&query.apply(&items));
        let second = ids(&query.apply(&items));
        assert_eq!(first, second);
        assert_eq!(items, before);
    }

    #[test]
    fn test_other_sort_keys() {
        let items = vec![
            dish(1, "Italian", 4.8, "35 min", 28),
            dish(2, "Chicken", 4.9, "40 min", 35),
            dish(3, "Seafood", 4.7, "20 min", 18),
        ];

        let by = |sort_key| {
            ids(&MenuQuery {
                sort_key,
                ..MenuQuery::default()
            }
            .apply(&items))
        };
        assert_eq!(by(SortKey::Rating), vec![2, 1, 3]);
        assert_eq!(by(SortKey::Price), vec![3, 1, 2]);
        assert_eq!(by(SortKey::Time), vec![3, 1, 2]);
    }

    #[test]
    fn test_filters_are_inclusive() {
        let items = vec![
            dish(1, "Italian", 4.8, "35 min", 28),
            dish(2, "Italian", 4.5, "20 min", 35),
            dish(3, "Seafood", 4.7, "20 min", 18),
        ];

        let query = MenuQuery {
            category: CategoryFilter::from_value("Italian"),
            min_rating: Some(4.5),
            max_prep_minutes: Some(20),
            sort_key: SortKey::Recommended,
        };
        assert_eq!(ids(&query.apply(&items)), vec![2]);
    }

    #[test]
    fn test_from_selection() {
        let mut selection = MenuSelection::with_sort(SortKey::Price);
        selection.active_category = CategoryFilter::from_value("Beef");
        selection.min_rating = Some(4.7);

        let query = MenuQuery::from(&selection);
        assert_eq!(query.sort_key, SortKey::Price);
        assert_eq!(query.category.value(), "Beef");
        assert_eq!(query.min_rating, Some(4.7));
        assert_eq!(query.max_prep_minutes, None);
    }
}
