//! Restart and session lifecycle tests.
//!
//! These tests verify:
//! - The restart control's enable timing
//! - Fresh sessions on restart
//! - Deferred actions from replaced sessions
//! - A missing board

use std::time::Duration;

use memory_match::{
    CardState, GameConfig, GameError, GameRng, HeadlessSurface, SessionId, Surface, Table,
};

const DELAY: Duration = Duration::from_millis(1000);

fn started(seed: u64) -> Table {
    let mut table = Table::new(GameConfig::default(), seed).unwrap();
    table.start().unwrap();
    table
}

fn mismatched_pair(table: &Table) -> (usize, usize) {
    let symbols = table.surface().symbols();
    let other = symbols.iter().position(|s| *s != symbols[0]).unwrap();
    (0, other)
}

/// The restart control is disabled when a session starts.
#[test]
fn test_restart_disabled_at_start() {
    let table = started(1);
    assert!(!table.surface().restart_enabled());
}

/// One flipped card is not enough to enable restart.
#[test]
fn test_restart_still_disabled_after_first_click() {
    let mut table = started(1);
    table.click(1).unwrap();
    assert!(!table.surface().restart_enabled());
}

/// Restart is enabled once a pair has been compared.
#[test]
fn test_restart_enabled_after_pair() {
    let mut table = started(1);
    let (first, second) = mismatched_pair(&table);

    table.click(first).unwrap();
    table.click(second).unwrap();
    assert!(table.surface().restart_enabled());
}

/// Clicking a disabled restart control does nothing.
#[test]
fn test_disabled_restart_is_ignored() {
    let mut table = started(1);
    table.click(0).unwrap();

    assert_eq!(table.press_restart().unwrap(), None);
    assert_eq!(table.game().session_id(), Some(SessionId(1)));
    assert_eq!(table.card_state(0), Some(CardState::Flipped));
}

/// Restart resets the session and deals again.
#[test]
fn test_restart_resets_session() {
    let mut table = started(2);
    let symbol = table.surface().symbols()[0].clone();
    let positions = table.positions_of(&symbol);
    table.click(positions[0]).unwrap();
    table.click(positions[1]).unwrap();
    assert_eq!(table.game().matched_pairs(), 1);

    let id = table.press_restart().unwrap();

    assert_eq!(id, Some(SessionId(2)));
    assert_eq!(table.game().matched_pairs(), 0);
    assert_eq!(table.game().flipped_count(), 0);
    assert!(!table.surface().restart_enabled());
    assert_eq!(table.surface().len(), 8);
    for i in 0..8 {
        assert_eq!(table.card_state(i), Some(CardState::Hidden));
    }
}

/// Consecutive deals come out in different orders.
#[test]
fn test_deals_are_reshuffled() {
    let mut table = started(99);
    let mut identical = 0;

    for _ in 0..50 {
        let before = table.surface().symbols();
        table.game_mut().initialize().unwrap();
        if table.surface().symbols() == before {
            identical += 1;
        }
    }

    // 8 cards in 4 pairs give 2520 distinct orders
    assert!(identical <= 2, "{identical} of 50 deals repeated the previous order");
}

/// A flip-back scheduled before a restart has no effect on the new deal.
#[test]
fn test_stale_flip_back_is_ignored() {
    let mut table = started(6);
    let (first, second) = mismatched_pair(&table);
    table.click(first).unwrap();
    table.click(second).unwrap();
    assert_eq!(table.timers().pending(), 1);

    table.press_restart().unwrap();
    table.click(first).unwrap();

    assert_eq!(table.advance(DELAY), 0);
    assert_eq!(table.card_state(first), Some(CardState::Flipped));
    assert_eq!(table.game().flipped_count(), 1);
}

/// A win announcement scheduled before a restart is dropped.
#[test]
fn test_stale_win_is_ignored() {
    let config = GameConfig::new().with_symbols(["only"]);
    let mut table = Table::new(config, 1).unwrap();
    table.start().unwrap();
    table.click(0).unwrap();
    table.click(1).unwrap();
    assert!(table.game().is_won());

    table.press_restart().unwrap();
    table.advance(DELAY);

    assert!(table.notifications().is_empty());
}

/// Without a board there is no session.
#[test]
fn test_missing_board() {
    let mut table = Table::with_parts(
        GameConfig::default(),
        GameRng::new(1),
        HeadlessSurface::without_board(),
    )
    .unwrap();

    let err = table.start().unwrap_err();
    assert!(matches!(err, GameError::MissingSurface { ref board_id } if board_id == "gameBoard"));
    assert!(table.game().session().is_none());
    assert!(table.surface().is_empty());
}

/// A board that shows up later can be dealt to.
#[test]
fn test_board_appears_later() {
    let mut table = Table::with_parts(
        GameConfig::default(),
        GameRng::new(1),
        HeadlessSurface::without_board(),
    )
    .unwrap();
    assert!(table.start().is_err());

    table.surface_mut().set_board_present(true);
    assert_eq!(table.start().unwrap(), SessionId(1));
}

/// Old card handles do not reach the new deal.
#[test]
fn test_old_cards_are_detached() {
    let mut table = started(8);
    let (first, second) = mismatched_pair(&table);
    table.click(first).unwrap();
    table.click(second).unwrap();
    let old = table.surface().card_at(0).unwrap();

    table.press_restart().unwrap();

    assert!(!table.surface().is_attached(&old));
    table.game_mut().on_card_click(&old);
    assert_eq!(table.game().flipped_count(), 0);
}
