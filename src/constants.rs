//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and version information.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "No Doubt About Dinner";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "chefmenu";

/// Tagline shown under the title.
pub const APP_TAGLINE: &str = "Exquisite personal chef experiences delivered to your door";

/// File name of the TUI log inside the config directory.
pub const LOG_FILE_NAME: &str = "chefmenu.log";
