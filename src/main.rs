//! ChefMenu - terminal storefront for a personal chef
//!
//! Without a subcommand this opens the interactive menu. Subcommands print
//! the menu, the categories, or a price quote without starting the UI.

use std::time::Instant;

use anyhow::{Context, Result};
use chefmenu::cli::{
    CategoriesArgs, CliError, CliResult, ConfigArgs, GlobalOptions, MenuArgs, QuoteArgs,
};
use chefmenu::config::Config;
use chefmenu::constants::LOG_FILE_NAME;
use chefmenu::logging::{self, LogTarget};
use chefmenu::tui;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ChefMenu - browse a personal chef's menu and build an order
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Catalog file to load instead of the configured or built-in menu
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the dishes in a category, filtered and ordered
    Menu(MenuArgs),
    /// List the categories on the strip
    Categories(CategoriesArgs),
    /// Price an order without opening the UI
    Quote(QuoteArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self, global: &GlobalOptions) -> CliResult<()> {
        match self {
            Self::Menu(args) => args.execute(global),
            Self::Categories(args) => args.execute(global),
            Self::Quote(args) => args.execute(global),
            Self::Config(args) => args.execute(global),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let global = GlobalOptions {
        catalog: cli.catalog,
        config: cli.config,
    };

    match cli.command {
        Some(command) => {
            // Logging is best effort for headless commands
            if let Err(e) = logging::init(&LogTarget::Stderr, cli.verbose) {
                eprintln!("Warning: {e:#}");
            }
            if let Err(err) = command.execute(&global) {
                exit_with(&err);
            }
            Ok(())
        }
        None => run_interactive(&global, cli.verbose),
    }
}

fn exit_with(err: &CliError) -> ! {
    tracing::debug!(code = err.exit_code(), "command failed");
    eprintln!("Error: {err}");
    std::process::exit(err.exit_code());
}

fn run_interactive(global: &GlobalOptions, verbose: bool) -> Result<()> {
    let log_path = Config::config_dir()?.join(LOG_FILE_NAME);
    logging::init(&LogTarget::File(log_path), verbose)?;

    let config = global.load_config().unwrap_or_else(|err| exit_with(&err));
    let catalog = global.load_catalog().unwrap_or_else(|err| exit_with(&err));
    tracing::info!(
        items = catalog.items().len(),
        categories = catalog.categories().len(),
        "starting storefront"
    );

    let mut app_state = tui::AppState::new(catalog, config, Instant::now());

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    // Check for errors
    result.context("Interactive session failed")
}
