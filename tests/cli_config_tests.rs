//! End-to-end tests for `chefmenu config` commands.

use std::fs;

mod fixtures;
use fixtures::*;

// ============================================================================
// Show / Path
// ============================================================================

#[test]
fn test_config_show_defaults_when_file_missing() {
    let ws = Workspace::new();
    let value = json(&ws.run_without_catalog(&["config", "show", "--json"]));

    assert!(value["paths"].get("catalog").is_none());
    assert_eq!(value["ui"]["theme"], "auto");
    assert_eq!(value["ui"]["default_sort"], "recommended");
    assert!(value["marquee"]["velocity"].as_f64().unwrap() > 0.0);
    assert!(!ws.config.exists(), "show must not create the config file");
}

#[test]
fn test_config_show_human_readable() {
    let ws = Workspace::new();
    let output = ws.run_without_catalog(&["config", "show"]);

    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.contains("ChefMenu Configuration"));
    assert!(text.contains("Marquee:"));
}

#[test]
fn test_config_path_honours_override() {
    let ws = Workspace::new();
    let output = ws.run_without_catalog(&["config", "path"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output).trim(), ws.config.display().to_string());
}

// ============================================================================
// Set
// ============================================================================

#[test]
fn test_config_set_persists_values() {
    let ws = Workspace::new();
    let output = ws.run_without_catalog(&[
        "config",
        "set",
        "--theme",
        "dark",
        "--sort",
        "rating",
        "--velocity",
        "12.5",
    ]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Configuration updated successfully."));
    assert!(ws.config.exists());

    let value = json(&ws.run_without_catalog(&["config", "show", "--json"]));
    assert_eq!(value["ui"]["theme"], "dark");
    assert_eq!(value["ui"]["default_sort"], "rating");
    assert_eq!(value["marquee"]["velocity"], 12.5);
}

#[test]
fn test_config_set_catalog_path_is_used_by_menu() {
    let ws = Workspace::new();
    let catalog = ws.catalog.to_str().unwrap();

    let set = ws.run_without_catalog(&["config", "set", "--catalog-path", catalog]);
    assert_eq!(set.status.code(), Some(0), "stderr: {}", stderr(&set));

    let value = json(&ws.run_without_catalog(&["menu", "--json"]));
    assert_eq!(value["count"], 3);
}

#[test]
fn test_config_recovers_from_deleted_catalog() {
    let ws = Workspace::new();
    let moved = ws.dir.path().join("menu2.toml");
    fs::copy(&ws.catalog, &moved).unwrap();

    let set = ws.run_without_catalog(&[
        "config",
        "set",
        "--catalog-path",
        moved.to_str().unwrap(),
    ]);
    assert_eq!(set.status.code(), Some(0), "stderr: {}", stderr(&set));
    fs::remove_file(&moved).unwrap();

    let show = ws.run_without_catalog(&["config", "show"]);
    assert_eq!(show.status.code(), Some(0), "stderr: {}", stderr(&show));

    let sort = ws.run_without_catalog(&["config", "set", "--sort", "price"]);
    assert_eq!(sort.status.code(), Some(0), "stderr: {}", stderr(&sort));

    // Built-in menu stands in until the path is repaired
    let menu = ws.run_without_catalog(&["menu"]);
    assert_eq!(menu.status.code(), Some(0), "stderr: {}", stderr(&menu));
    assert!(stderr(&menu).contains("configured catalog not found"));

    let repair = ws.run_without_catalog(&[
        "config",
        "set",
        "--catalog-path",
        ws.catalog.to_str().unwrap(),
    ]);
    assert_eq!(repair.status.code(), Some(0), "stderr: {}", stderr(&repair));

    let value = json(&ws.run_without_catalog(&["config", "show", "--json"]));
    assert_eq!(value["paths"]["catalog"], ws.catalog.display().to_string());
    assert_eq!(value["ui"]["default_sort"], "price");
    assert_eq!(json(&ws.run_without_catalog(&["menu", "--json"]))["count"], 3);
}

#[test]
fn test_config_set_requires_an_option() {
    let ws = Workspace::new();
    let output = ws.run_without_catalog(&["config", "set"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("At least one configuration option"));
}

#[test]
fn test_config_set_rejects_bad_values() {
    let ws = Workspace::new();

    let theme = ws.run_without_catalog(&["config", "set", "--theme", "sepia"]);
    assert_eq!(theme.status.code(), Some(1));

    let velocity = ws.run_without_catalog(&["config", "set", "--velocity", "0"]);
    assert_eq!(velocity.status.code(), Some(1));

    let missing = ws.dir.path().join("nope.toml");
    let catalog = ws.run_without_catalog(&[
        "config",
        "set",
        "--catalog-path",
        missing.to_str().unwrap(),
    ]);
    assert_eq!(catalog.status.code(), Some(1));

    assert!(!ws.config.exists(), "rejected values must not be saved");
}

#[test]
fn test_config_set_rejects_invalid_catalog() {
    let ws = Workspace::with_catalog("[[items]]\nid = \"not a number\"\n");
    let output = ws.run_without_catalog(&[
        "config",
        "set",
        "--catalog-path",
        ws.catalog.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid catalog"));
}

#[test]
fn test_malformed_config_file_is_validation_error() {
    let ws = Workspace::new();
    fs::create_dir_all(ws.config.parent().unwrap()).unwrap();
    fs::write(&ws.config, "[marquee]\nvelocity = \"fast\"\n").unwrap();

    let output = ws.run_without_catalog(&["config", "show"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to load configuration"));
}
