//! `menu` command: print the filtered, ordered catalog.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{CliError, CliResult, GlobalOptions};
use crate::constants::APP_BINARY_NAME;
use crate::models::{CategoryFilter, MenuItem, SortKey};
use crate::services::MenuQuery;

/// List dishes the way the storefront shows them
#[derive(Debug, Clone, Args)]
pub struct MenuArgs {
    /// Only show this category (label or value, e.g. "Desserts")
    #[arg(short, long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Ordering: recommended, rating, price, or time
    #[arg(short, long, value_name = "KEY")]
    pub sort: Option<SortKey>,

    /// Hide dishes rated below this value
    #[arg(long, value_name = "RATING")]
    pub min_rating: Option<f32>,

    /// Hide dishes that take longer than this many minutes
    #[arg(long, value_name = "MINUTES")]
    pub max_prep: Option<u32>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct MenuRow<'a> {
    id: u32,
    name: &'a str,
    category: &'a str,
    price: String,
    rating: f32,
    prep_time: &'a str,
    prep_minutes: u32,
}

impl<'a> From<&'a MenuItem> for MenuRow<'a> {
    fn from(item: &'a MenuItem) -> Self {
        Self {
            id: item.id,
            name: &item.name,
            category: &item.category,
            price: item.price.round(2).with_scale(2).to_string(),
            rating: item.rating,
            prep_time: &item.prep_time,
            prep_minutes: item.prep_minutes(),
        }
    }
}

#[derive(Debug, Serialize)]
struct MenuResponse<'a> {
    category: &'a str,
    sort: SortKey,
    items: Vec<MenuRow<'a>>,
    count: usize,
}

impl MenuArgs {
    /// Execute the menu command
    pub fn execute(&self, global: &GlobalOptions) -> CliResult<()> {
        if let Some(rating) = self.min_rating {
            if !(0.0..=5.0).contains(&rating) {
                return Err(CliError::validation(format!(
                    "--min-rating must be between 0 and 5 (got {rating})"
                )));
            }
        }

        let catalog = global.load_catalog()?;
        let sort_key = match self.sort {
            Some(key) => key,
            None => global.load_config()?.ui.default_sort,
        };

        let category = match &self.category {
            Some(name) => catalog
                .find_category(name)
                .map(|category| category.filter())
                .ok_or_else(|| {
                    CliError::validation(format!(
                        "Unknown category '{name}'. Run '{APP_BINARY_NAME} categories' to list them."
                    ))
                })?,
            None => CategoryFilter::All,
        };

        let query = MenuQuery {
            category,
            min_rating: self.min_rating,
            max_prep_minutes: self.max_prep,
            sort_key,
        };
        let view = catalog.query(&query);

        let response = MenuResponse {
            category: query.category.value(),
            sort: sort_key,
            count: view.len(),
            items: view.into_iter().map(MenuRow::from).collect(),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if response.count == 0 {
            println!("No dishes match.");
        } else {
            println!(
                "{} ({} dishes, sorted by {}):",
                response.category, response.count, response.sort
            );
            println!();
            for row in &response.items {
                println!(
                    "  {:>3}  {:<24} {:<12} ${:>7}  ★ {:.1}  {}",
                    row.id, row.name, row.category, row.price, row.rating, row.prep_time
                );
            }
        }

        Ok(())
    }
}
