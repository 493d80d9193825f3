//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Three dishes whose recommended order is [2, 1, 3].
pub const SMALL_CATALOG: &str = r#"
[[categories]]
label = "All"
value = "All"

[[categories]]
label = "Italian"
value = "Italian"

[[categories]]
label = "Poultry"
value = "Chicken"

[[categories]]
label = "Desserts"
value = "Dessert"

[[items]]
id = 1
name = "Truffle Risotto"
description = "Arborio rice with black truffle"
price = "28.00"
image_ref = "https://example.com/risotto.jpg"
category = "Italian"
rating = 4.8
prep_time = "35 min"

[[items]]
id = 2
name = "Seared Duck Breast"
description = "Duck with cherry gastrique"
price = "35.00"
image_ref = "https://example.com/duck.jpg"
category = "Chicken"
rating = 4.9
prep_time = "40 min"

[[items]]
id = 3
name = "Lemon Tart"
description = "Shortcrust and lemon curd"
price = "12.50"
image_ref = ""
category = "Italian"
rating = 4.7
prep_time = "20 min"
"#;

/// Isolated workspace: a catalog file and a config path that does not exist
/// yet, both inside a temp directory removed on drop.
pub struct Workspace {
    pub dir: TempDir,
    pub catalog: PathBuf,
    pub config: PathBuf,
}

impl Workspace {
    /// Workspace with [`SMALL_CATALOG`].
    pub fn new() -> Self {
        Self::with_catalog(SMALL_CATALOG)
    }

    /// Workspace with a custom catalog body.
    pub fn with_catalog(content: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let catalog = dir.path().join("menu.toml");
        fs::write(&catalog, content).expect("Failed to write catalog");
        let config = dir.path().join("config").join("config.toml");
        Self {
            dir,
            catalog,
            config,
        }
    }

    /// Runs the binary with `--catalog` and `--config` pointing into the workspace.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(chefmenu_bin())
            .args(args)
            .arg("--catalog")
            .arg(&self.catalog)
            .arg("--config")
            .arg(&self.config)
            .output()
            .expect("Failed to execute command")
    }

    /// Runs the binary with only `--config`, so the catalog comes from the
    /// config file or the built-in menu.
    pub fn run_without_catalog(&self, args: &[&str]) -> Output {
        Command::new(chefmenu_bin())
            .args(args)
            .arg("--config")
            .arg(&self.config)
            .output()
            .expect("Failed to execute command")
    }
}

/// Path to the chefmenu binary (set by cargo at compile time)
pub fn chefmenu_bin() -> &'static str {
    env!("CARGO_BIN_EXE_chefmenu")
}

/// Stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Parses stdout as JSON, failing with stderr when the command did not succeed.
pub fn json(output: &Output) -> serde_json::Value {
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command failed. stderr: {}",
        stderr(output)
    );
    serde_json::from_slice(&output.stdout).expect("Output should be valid JSON")
}
