//! Gameplay integration tests.
//!
//! These tests drive a headless `Table` through full sessions:
//! - Dealing and deck composition
//! - Flipping, matching and mismatching
//! - Flip-back and win delays

use std::time::Duration;

use memory_match::{CardState, GameConfig, Marker, Surface, Symbol, Table};

const DELAY: Duration = Duration::from_millis(1000);

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn started(seed: u64) -> Table {
    init_tracing();
    let mut table = Table::new(GameConfig::default(), seed).unwrap();
    table.start().unwrap();
    table
}

/// Two positions holding different symbols.
fn mismatched_pair(table: &Table) -> (usize, usize) {
    let symbols = table.surface().symbols();
    let other = symbols.iter().position(|s| *s != symbols[0]).unwrap();
    (0, other)
}

/// Match every pair, one symbol after another.
fn match_all(table: &mut Table) {
    let symbols = table.game().config().symbols.clone();
    for symbol in &symbols {
        let positions = table.positions_of(symbol);
        table.click(positions[0]).unwrap();
        table.click(positions[1]).unwrap();
    }
}

// =============================================================================
// Dealing
// =============================================================================

/// Every card is tagged with a symbol and its board position.
#[test]
fn test_cards_carry_symbol_and_index() {
    let table = started(42);
    let surface = table.surface();

    for (i, card) in surface.cards().iter().enumerate() {
        assert!(surface.card_symbol(card).is_some());
        assert_eq!(surface.card_index(card), Some(i));
        assert_eq!(surface.card_state(card), CardState::Hidden);
    }
}

/// The deck holds exactly two of each configured symbol.
#[test]
fn test_deck_composition() {
    let table = started(7);
    let mut symbols = table.surface().symbols();
    symbols.sort();

    let expected: Vec<Symbol> = ["A", "A", "B", "B", "C", "C", "D", "D"]
        .iter()
        .map(|s| Symbol::new(*s))
        .collect();
    assert_eq!(symbols, expected);
}

/// A custom symbol set changes the deck size.
#[test]
fn test_custom_symbol_set() {
    let config = GameConfig::new().with_symbols(["cat", "dog", "owl", "fox", "elk", "yak"]);
    let mut table = Table::new(config, 3).unwrap();
    table.start().unwrap();

    assert_eq!(table.surface().len(), 12);
    for symbol in ["cat", "dog", "owl", "fox", "elk", "yak"] {
        assert_eq!(table.positions_of(&Symbol::new(symbol)).len(), 2);
    }
}

// =============================================================================
// Flipping
// =============================================================================

/// Clicking a hidden card shows its symbol.
#[test]
fn test_click_flips_card() {
    let mut table = started(1);
    let card = table.surface().card_at(0).unwrap();
    let symbol = table.surface().card_symbol(&card).unwrap();

    assert!(!table.surface().has_marker(&card, Marker::Flipped));
    assert_eq!(table.surface().text(&card), "");

    table.click(0).unwrap();

    assert!(table.surface().has_marker(&card, Marker::Flipped));
    assert_eq!(table.surface().text(&card), symbol.as_str());
}

/// Clicking a flipped card again changes nothing.
#[test]
fn test_repeat_click_is_ignored() {
    let mut table = started(1);
    table.click(2).unwrap();
    table.click(2).unwrap();

    assert_eq!(table.game().flipped_count(), 1);
    assert_eq!(table.card_state(2), Some(CardState::Flipped));
    assert_eq!(table.timers().pending(), 0);
}

/// Clicking a matched card changes nothing.
#[test]
fn test_click_on_matched_card_is_ignored() {
    let mut table = started(5);
    let symbol = table.surface().symbols()[0].clone();
    let positions = table.positions_of(&symbol);

    table.click(positions[0]).unwrap();
    table.click(positions[1]).unwrap();
    table.click(positions[0]).unwrap();

    assert_eq!(table.game().flipped_count(), 0);
    assert_eq!(table.game().matched_pairs(), 1);
    assert_eq!(table.card_state(positions[0]), Some(CardState::Matched));
}

// =============================================================================
// Matching
// =============================================================================

/// Two cards with the same symbol end up matched and stay face up.
#[test]
fn test_matching_pair_stays_flipped() {
    let mut table = started(9);
    let cards = table.surface().cards();
    table.surface_mut().set_symbol(&cards[0], "A");
    table.surface_mut().set_symbol(&cards[1], "A");

    table.click(0).unwrap();
    table.click(1).unwrap();

    for card in &cards[..2] {
        assert!(table.surface().has_marker(card, Marker::Flipped));
        assert!(table.surface().has_marker(card, Marker::Matched));
    }
    assert_eq!(table.game().matched_pairs(), 1);

    // Nothing turns them back
    table.advance(DELAY * 5);
    assert_eq!(table.card_state(0), Some(CardState::Matched));
    assert_eq!(table.card_state(1), Some(CardState::Matched));
}

/// Mismatched cards show their symbols, then turn back after the delay.
#[test]
fn test_mismatch_flips_back_after_delay() {
    let mut table = started(9);
    let cards = table.surface().cards();
    table.surface_mut().set_symbol(&cards[0], "A");
    table.surface_mut().set_symbol(&cards[1], "B");

    table.click(0).unwrap();
    assert_eq!(table.card_state(0), Some(CardState::Flipped));
    assert_eq!(table.surface().text(&cards[0]), "A");

    table.click(1).unwrap();
    assert_eq!(table.card_state(1), Some(CardState::Flipped));
    assert_eq!(table.surface().text(&cards[1]), "B");

    // The selection is already empty while both cards are still face up
    assert_eq!(table.game().flipped_count(), 0);

    table.advance(DELAY);

    for card in &cards[..2] {
        assert!(!table.surface().has_marker(card, Marker::Flipped));
        assert_eq!(table.surface().text(card), "");
    }
}

/// A mismatch does not count as a pair.
#[test]
fn test_mismatch_does_not_count() {
    let mut table = started(4);
    let (first, second) = mismatched_pair(&table);

    table.click(first).unwrap();
    table.click(second).unwrap();
    table.advance(DELAY);

    assert_eq!(table.game().matched_pairs(), 0);
    assert_eq!(table.game().flipped_count(), 0);
}

/// Cards waiting to flip back ignore clicks until they do.
#[test]
fn test_pending_flip_back_blocks_clicks() {
    let mut table = started(4);
    let (first, second) = mismatched_pair(&table);

    table.click(first).unwrap();
    table.click(second).unwrap();
    table.click(first).unwrap();
    assert_eq!(table.game().flipped_count(), 0);

    table.advance(DELAY);
    table.click(first).unwrap();
    assert_eq!(table.game().flipped_count(), 1);
}

// =============================================================================
// Winning
// =============================================================================

/// The win message only shows after the last pair and the delay.
#[test]
fn test_win_after_delay() {
    let mut table = started(21);
    let symbols = table.game().config().symbols.clone();

    for (i, symbol) in symbols.iter().enumerate() {
        let positions = table.positions_of(symbol);
        table.click(positions[0]).unwrap();
        table.click(positions[1]).unwrap();

        if i + 1 < symbols.len() {
            table.advance(DELAY * 2);
            assert!(table.notifications().is_empty());
        }
    }

    assert!(table.game().is_won());
    assert!(table.notifications().is_empty());

    table.advance(DELAY - Duration::from_millis(1));
    assert!(table.notifications().is_empty());

    table.advance(Duration::from_millis(1));
    assert_eq!(table.notifications(), &["You win!".to_string()]);
}

/// The configured win message is the one shown.
#[test]
fn test_custom_win_message() {
    let config = GameConfig::new()
        .with_symbols(["x"])
        .with_win_message("Well played")
        .with_win_delay(Duration::from_millis(10));
    let mut table = Table::new(config, 1).unwrap();
    table.start().unwrap();

    table.click(0).unwrap();
    table.click(1).unwrap();
    table.advance(Duration::from_millis(10));

    assert_eq!(table.notifications(), &["Well played".to_string()]);
}

/// After a win every click is ignored.
#[test]
fn test_no_state_change_after_win() {
    let mut table = started(13);
    match_all(&mut table);
    table.advance(DELAY);

    for i in 0..table.surface().len() {
        table.click(i).unwrap();
        assert_eq!(table.card_state(i), Some(CardState::Matched));
    }
    assert_eq!(table.game().matched_pairs(), 4);
    assert_eq!(table.notifications().len(), 1);
}
