//! # memory-match
//!
//! A memory-matching card game engine: a deck of symbol pairs is shuffled
//! onto a board, cards are flipped two at a time, matches stay face up,
//! mismatches turn back after a delay, and the game is won once every pair
//! is matched.
//!
//! ## Design Principles
//!
//! 1. **Surface-Agnostic**: The engine drives a `Surface` trait. Card
//!    display state lives on the surface, as it does in a DOM class list.
//!
//! 2. **Explicit Sessions**: Every deal is a `Session` with its own
//!    `SessionId`. Restarting replaces it wholesale.
//!
//! 3. **Host-Owned Time**: Delays are returned as `Deferred` actions. The
//!    host runs them later; actions from a replaced session are ignored.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Symbols, markers, deck construction
//! - `surface`: Surface and notifier capabilities, headless surface
//! - `game`: Engine, sessions, timer queue, headless driver
//! - `web`: Browser bindings (feature `web`)

pub mod cards;
pub mod core;
pub mod game;
pub mod surface;

#[cfg(feature = "web")]
pub mod web;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameError, GameRng, Result};

pub use crate::cards::{build_deck, CardState, Marker, Symbol};

pub use crate::surface::{
    CardHandle, HeadlessSurface, Notifier, RecordingNotifier, Surface, TracingNotifier,
};

pub use crate::game::{
    Deferred, DeferredKind, FlippedCard, HeadlessGame, MemoryGame, Session, SessionId, Table,
    TimerQueue,
};
