//! `quote` command: build a cart from the command line and print its totals.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{CliError, CliResult, GlobalOptions};
use crate::models::{format_money, Cart};

/// Price an order without opening the storefront
#[derive(Debug, Clone, Args)]
pub struct QuoteArgs {
    /// Dish to add, as ID or IDxQUANTITY (e.g. "2x3"); repeatable
    #[arg(short, long = "add", value_name = "ID[xQTY]", required = true)]
    pub add: Vec<String>,

    /// Remove one portion of a dish after all additions; repeatable
    #[arg(short, long = "remove", value_name = "ID")]
    pub remove: Vec<u32>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct QuoteLine<'a> {
    id: u32,
    name: &'a str,
    quantity: u32,
    unit_price: String,
    line_total: String,
}

#[derive(Debug, Serialize)]
struct QuoteResponse<'a> {
    entries: Vec<QuoteLine<'a>>,
    item_count: u64,
    total: String,
}

/// Parses "ID" or "IDxQTY" into an id and a quantity of at least 1.
pub fn parse_add_spec(spec: &str) -> CliResult<(u32, u32)> {
    let spec = spec.trim();
    let (id, quantity) = match spec.split_once(['x', 'X']) {
        Some((id, quantity)) => (id, quantity),
        None => (spec, "1"),
    };

    let id = id
        .trim()
        .parse::<u32>()
        .map_err(|_| CliError::validation(format!("Invalid dish id in '{spec}'")))?;
    let quantity = quantity
        .trim()
        .parse::<u32>()
        .map_err(|_| CliError::validation(format!("Invalid quantity in '{spec}'")))?;

    if quantity == 0 {
        return Err(CliError::validation(format!(
            "Quantity must be at least 1 in '{spec}'"
        )));
    }

    Ok((id, quantity))
}

impl QuoteArgs {
    /// Execute the quote command
    pub fn execute(&self, global: &GlobalOptions) -> CliResult<()> {
        let catalog = global.load_catalog()?;
        let mut cart = Cart::new();

        for spec in &self.add {
            let (id, quantity) = parse_add_spec(spec)?;
            let item = catalog
                .get(id)
                .ok_or_else(|| CliError::validation(format!("Unknown dish id {id}")))?;
            cart.add(item, quantity, None);
        }

        for id in &self.remove {
            cart.remove_one(*id);
        }

        let response = QuoteResponse {
            entries: cart
                .entries()
                .iter()
                .map(|entry| QuoteLine {
                    id: entry.item.id,
                    name: &entry.item.name,
                    quantity: entry.quantity,
                    unit_price: entry.item.display_price(),
                    line_total: format_money(&entry.line_total()),
                })
                .collect(),
            item_count: cart.total_item_count(),
            total: cart.display_total(),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if response.entries.is_empty() {
            println!("Your cart is empty");
        } else {
            println!("Your Order:");
            println!();
            for line in &response.entries {
                println!(
                    "  {:>3} x {:<24} {:>9} {:>10}",
                    line.quantity, line.name, line.unit_price, line.line_total
                );
            }
            println!();
            println!("  {} items, total {}", response.item_count, response.total);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_spec() {
        assert_eq!(parse_add_spec("2").unwrap(), (2, 1));
        assert_eq!(parse_add_spec("2x3").unwrap(), (2, 3));
        assert_eq!(parse_add_spec(" 5 X 10 ").unwrap(), (5, 10));
    }

    #[test]
    fn test_parse_add_spec_rejects_bad_input() {
        assert!(parse_add_spec("").is_err());
        assert!(parse_add_spec("risotto").is_err());
        assert!(parse_add_spec("2x").is_err());
        assert!(parse_add_spec("2x0").is_err());
        assert!(parse_add_spec("-1").is_err());
    }
}
