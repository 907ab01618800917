//! Cards: symbols, display state, and deck construction.
//!
//! ## Key Types
//!
//! - `Symbol`: A card face; every deck holds each symbol exactly twice
//! - `Marker`: State marker stored on the surface (`flipped`, `matched`)
//! - `CardState`: Display state derived from markers
//!
//! `build_deck` duplicates a symbol set and shuffles it with `GameRng`.

pub mod deck;
pub mod symbol;

pub use deck::build_deck;
pub use symbol::{CardState, Marker, Symbol};
