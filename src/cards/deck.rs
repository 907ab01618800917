//! Deck construction.

use crate::core::GameRng;

use super::Symbol;

/// Build a shuffled deck holding every symbol twice.
///
/// The symbol set is duplicated in order and then shuffled, so the deck is
/// always `2 * symbols.len()` long.
pub fn build_deck(symbols: &[Symbol], rng: &mut GameRng) -> Vec<Symbol> {
    let mut deck: Vec<Symbol> = symbols.iter().chain(symbols.iter()).cloned().collect();
    rng.shuffle(&mut deck);
    deck
}
