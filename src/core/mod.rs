//! Core engine types: RNG, configuration, errors.
//!
//! These are independent of any rendering surface. Hosts build a
//! `GameConfig`, pick a `GameRng`, and hand both to the engine.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameConfig, DEFAULT_DELAY_MS, DEFAULT_SYMBOLS};
pub use error::{GameError, Result};
pub use rng::GameRng;
