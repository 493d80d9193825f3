//! Auto-scrolling category strip.
//!
//! [`StripLayout`] knows which cells the duplicated strip is made of;
//! [`MarqueeController`] decides how far it has scrolled.

pub mod controller;
pub mod strip;

pub use controller::{Interaction, MarqueeController, MarqueePhase, MarqueeSettings};
pub use strip::{StripCell, StripLayout};
