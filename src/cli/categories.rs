//! `categories` command: list the strip labels.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{CliError, CliResult, GlobalOptions};

/// List the categories shown in the scrolling strip
#[derive(Debug, Clone, Args)]
pub struct CategoriesArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CategoryItem<'a> {
    label: &'a str,
    value: &'a str,
    dishes: usize,
}

#[derive(Debug, Serialize)]
struct ListCategoriesResponse<'a> {
    categories: Vec<CategoryItem<'a>>,
    count: usize,
}

impl CategoriesArgs {
    /// Execute the categories command
    pub fn execute(&self, global: &GlobalOptions) -> CliResult<()> {
        let catalog = global.load_catalog()?;

        let categories: Vec<CategoryItem> = catalog
            .categories()
            .iter()
            .map(|category| CategoryItem {
                label: &category.label,
                value: &category.value,
                dishes: catalog.filtered_and_sorted(&category.filter()).len(),
            })
            .collect();

        let response = ListCategoriesResponse {
            count: categories.len(),
            categories,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if response.count == 0 {
            println!("No categories defined.");
        } else {
            println!("Categories ({}):", response.count);
            println!();
            for category in &response.categories {
                println!(
                    "  {:<16} {:<16} {} dishes",
                    category.label, category.value, category.dishes
                );
            }
        }

        Ok(())
    }
}
