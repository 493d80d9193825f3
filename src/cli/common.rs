//! Shared plumbing for headless commands: error type, exit codes, and the
//! config/catalog resolution every command needs.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::services::Catalog;

/// Process exit codes used by CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Bad input: unknown ids, malformed arguments, invalid files
    Validation = 1,
    /// Reading or writing failed
    Io = 2,
}

/// Error returned by CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process should terminate with
    pub code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Input was rejected.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// An I/O operation failed.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Io,
            message: message.into(),
        }
    }

    /// Numeric exit code.
    pub const fn exit_code(&self) -> i32 {
        self.code as i32
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result alias for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Options shared by every command.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Explicit catalog file (`--catalog`)
    pub catalog: Option<PathBuf>,
    /// Explicit config file (`--config`)
    pub config: Option<PathBuf>,
}

impl GlobalOptions {
    /// Path of the config file in effect.
    pub fn config_path(&self) -> CliResult<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Config::config_file_path()
                .map_err(|e| CliError::io(format!("Failed to locate config file: {e}"))),
        }
    }

    /// Loads the config file in effect, defaulting when it is absent.
    pub fn load_config(&self) -> CliResult<Config> {
        let path = self.config_path()?;
        Config::load_from(&path)
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
    }

    /// Loads the catalog: `--catalog` first, then the configured path, then
    /// the built-in menu.
    ///
    /// A missing `--catalog` file is an I/O error. A configured path that no
    /// longer exists falls back to the built-in menu.
    pub fn load_catalog(&self) -> CliResult<Catalog> {
        if let Some(path) = &self.catalog {
            if !path.exists() {
                return Err(CliError::io(format!(
                    "Catalog file not found: {}",
                    path.display()
                )));
            }
            return Self::read_catalog(Some(path.as_path()));
        }

        let config = self.load_config()?;
        Self::read_catalog(config.catalog_path())
    }

    fn read_catalog(path: Option<&Path>) -> CliResult<Catalog> {
        Catalog::load_or_embedded(path)
            .map_err(|e| CliError::validation(format!("Failed to load catalog: {e:#}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::validation("bad").exit_code(), 1);
        assert_eq!(CliError::io("disk").exit_code(), 2);
        assert_eq!(ExitCode::Success as i32, 0);
    }

    #[test]
    fn test_display_is_message() {
        assert_eq!(CliError::io("disk full").to_string(), "disk full");
    }

    #[test]
    fn test_missing_catalog_is_io_error() {
        let options = GlobalOptions {
            catalog: Some(PathBuf::from("/nonexistent/menu.toml")),
            config: None,
        };
        let err = options.load_catalog().unwrap_err();
        assert_eq!(err.code, ExitCode::Io);
    }

    #[test]
    fn test_stale_configured_catalog_uses_built_in_menu() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            "[paths]\ncatalog = \"/nonexistent/menu.toml\"\n",
        )
        .unwrap();

        let options = GlobalOptions {
            catalog: None,
            config: Some(config_path),
        };
        let catalog = options.load_catalog().unwrap();
        assert_eq!(
            catalog.items().len(),
            Catalog::embedded().unwrap().items().len()
        );
    }
}
