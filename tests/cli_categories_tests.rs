//! End-to-end tests for `chefmenu categories`.

use serde::Deserialize;

mod fixtures;
use fixtures::*;

#[derive(Debug, Deserialize)]
struct CategoryItem {
    label: String,
    value: String,
    dishes: usize,
}

#[derive(Debug, Deserialize)]
struct ListCategoriesResponse {
    categories: Vec<CategoryItem>,
    count: usize,
}

#[test]
fn test_categories_json_in_strip_order() {
    let ws = Workspace::new();
    let output = ws.run(&["categories", "--json"]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let response: ListCategoriesResponse =
        serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(response.count, 4);

    let labels: Vec<&str> = response
        .categories
        .iter()
        .map(|c| c.label.as_str())
        .collect();
    assert_eq!(labels, vec!["All", "Italian", "Poultry", "Desserts"]);

    let poultry = &response.categories[2];
    assert_eq!(poultry.value, "Chicken");
    assert_eq!(poultry.dishes, 1);

    assert_eq!(response.categories[0].dishes, 3);
    assert_eq!(response.categories[3].dishes, 0);
}

#[test]
fn test_categories_text_output() {
    let ws = Workspace::new();
    let output = ws.run(&["categories"]);

    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.contains("Categories (4):"));
    assert!(text.contains("Poultry"));
    assert!(text.contains("2 dishes"));
}

#[test]
fn test_categories_none_defined() {
    let ws = Workspace::with_catalog("items = []\n");
    let output = ws.run(&["categories"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("No categories defined."));
}
