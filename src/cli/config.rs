//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult, GlobalOptions};
use crate::config::{Config, ThemeMode};
use crate::models::SortKey;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the config file location
    Path,
}

/// Display current configuration
#[derive(Args, Debug, Clone)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Clone)]
pub struct ConfigSetArgs {
    /// Menu catalog file to load instead of the built-in one
    #[arg(long, value_name = "FILE")]
    catalog_path: Option<PathBuf>,

    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Default ordering (recommended, rating, price, or time)
    #[arg(long, value_name = "KEY")]
    sort: Option<SortKey>,

    /// Category strip speed in cells per second
    #[arg(long, value_name = "CELLS")]
    velocity: Option<f64>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    paths: PathsOutput,
    ui: UiOutput,
    marquee: MarqueeOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    catalog: Option<String>,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    default_sort: SortKey,
    show_help_on_startup: bool,
}

#[derive(Serialize, Debug)]
struct MarqueeOutput {
    velocity: f64,
    resume_delay_ms: u64,
    startup_delay_ms: u64,
    frame_interval_ms: u64,
}

fn theme_name(mode: ThemeMode) -> String {
    format!("{mode:?}").to_lowercase()
}

/// Parses a theme mode name.
pub fn parse_theme_mode(value: &str) -> CliResult<ThemeMode> {
    match value.trim().to_lowercase().as_str() {
        "auto" => Ok(ThemeMode::Auto),
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        _ => Err(CliError::validation(
            "Invalid theme mode. Must be 'auto', 'light', or 'dark'",
        )),
    }
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self, global: &GlobalOptions) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(global),
            ConfigCommand::Set(args) => args.execute(global),
            ConfigCommand::Path => {
                println!("{}", global.config_path()?.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, global: &GlobalOptions) -> CliResult<()> {
        let config = global.load_config()?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self, global: &GlobalOptions) -> CliResult<()> {
        if self.catalog_path.is_none()
            && self.theme.is_none()
            && self.sort.is_none()
            && self.velocity.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --catalog-path, --theme, --sort, or --velocity",
            ));
        }

        let path = global.config_path()?;
        let mut config = global.load_config()?;

        if let Some(catalog) = &self.catalog_path {
            if !catalog.exists() {
                return Err(CliError::validation(format!(
                    "Catalog file does not exist: {}",
                    catalog.display()
                )));
            }
            crate::services::Catalog::load(catalog)
                .map_err(|e| CliError::validation(format!("Invalid catalog: {e:#}")))?;
            config.paths.catalog = Some(catalog.clone());
        }

        if let Some(theme) = &self.theme {
            config.ui.theme_mode = parse_theme_mode(theme)?;
        }

        if let Some(sort) = self.sort {
            config.ui.default_sort = sort;
        }

        if let Some(velocity) = self.velocity {
            if !velocity.is_finite() || velocity <= 0.0 {
                return Err(CliError::validation(format!(
                    "--velocity must be a positive number (got {velocity})"
                )));
            }
            config.marquee.velocity = velocity;
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CliError::io(format!(
                    "Failed to create config directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        config
            .save_to(&path)
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        tracing::info!(path = %path.display(), "configuration updated");
        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        paths: PathsOutput {
            catalog: config
                .paths
                .catalog
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        },
        ui: UiOutput {
            theme: theme_name(config.ui.theme_mode),
            default_sort: config.ui.default_sort,
            show_help_on_startup: config.ui.show_help_on_startup,
        },
        marquee: MarqueeOutput {
            velocity: config.marquee.velocity,
            resume_delay_ms: config.marquee.resume_delay_ms,
            startup_delay_ms: config.marquee.startup_delay_ms,
            frame_interval_ms: config.marquee.frame_interval_ms,
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("ChefMenu Configuration");
    println!("======================");
    println!();

    println!("Paths:");
    if let Some(catalog) = &config.paths.catalog {
        println!("  Catalog: {}", catalog.display());
    } else {
        println!("  Catalog: (built-in menu)");
    }
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", theme_name(config.ui.theme_mode));
    println!("  Default Sort: {}", config.ui.default_sort);
    println!("  Help On Startup: {}", config.ui.show_help_on_startup);
    println!();

    println!("Marquee:");
    println!("  Velocity: {} cells/s", config.marquee.velocity);
    println!("  Resume Delay: {} ms", config.marquee.resume_delay_ms);
    println!("  Startup Delay: {} ms", config.marquee.startup_delay_ms);
    println!("  Frame Interval: {} ms", config.marquee.frame_interval_ms);
    println!();
}
