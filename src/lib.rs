//! ChefMenu Library
//!
//! This library provides the storefront for a personal-chef menu: loading the
//! catalog, filtering and ordering dishes, managing the cart, and driving the
//! autoscrolling category strip of the terminal UI.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod logging;
pub mod marquee;
pub mod models;
pub mod services;
pub mod shortcuts;
pub mod tui;
