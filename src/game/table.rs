//! Headless game driver.
//!
//! `Table` plays the role the browser plays for `WebGame`: it delivers
//! clicks and restart activations, and it runs deferred actions once their
//! delay has elapsed on a `TimerQueue`.
//!
//! ```
//! use std::time::Duration;
//! use memory_match::{GameConfig, Table};
//!
//! let mut table = Table::new(GameConfig::default(), 42).unwrap();
//! table.start().unwrap();
//! table.click(0).unwrap();
//! table.advance(Duration::from_secs(1));
//! assert_eq!(table.surface().len(), 8);
//! ```

use std::time::Duration;

use super::engine::MemoryGame;
use super::session::SessionId;
use super::timers::TimerQueue;
use crate::cards::{CardState, Symbol};
use crate::core::{GameConfig, GameRng, Result};
use crate::surface::{HeadlessSurface, RecordingNotifier};

/// Engine type driven by a `Table`.
pub type HeadlessGame = MemoryGame<HeadlessSurface, RecordingNotifier>;

/// A headless game with its own clock.
pub struct Table {
    game: HeadlessGame,
    timers: TimerQueue,
}

impl Table {
    /// Create a table with a seeded shuffle.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_parts(config, GameRng::new(seed), HeadlessSurface::new())
    }

    /// Create a table shuffled from system entropy.
    pub fn from_entropy(config: GameConfig) -> Result<Self> {
        Self::with_parts(config, GameRng::from_entropy(), HeadlessSurface::new())
    }

    /// Create a table around an existing surface.
    pub fn with_parts(config: GameConfig, rng: GameRng, surface: HeadlessSurface) -> Result<Self> {
        Ok(Self {
            game: MemoryGame::new(config, rng, surface, RecordingNotifier::new())?,
            timers: TimerQueue::new(),
        })
    }

    /// Deal the first session, as a page does once its document is ready.
    pub fn start(&mut self) -> Result<SessionId> {
        let id = self.game.initialize()?;
        self.pump();
        Ok(id)
    }

    /// Click the card at a board position.
    pub fn click(&mut self, index: usize) -> Result<()> {
        self.game.click_position(index)?;
        self.pump();
        Ok(())
    }

    /// Click the restart control. Returns `None` if the control was disabled.
    pub fn press_restart(&mut self) -> Result<Option<SessionId>> {
        let id = self.game.restart_clicked()?;
        self.pump();
        Ok(id)
    }

    /// Let time pass and run every deferred action that became due.
    ///
    /// Returns how many of them applied to the current session.
    pub fn advance(&mut self, by: Duration) -> usize {
        let due = self.timers.advance(by);
        let applied = due
            .iter()
            .filter(|action| self.game.run_deferred(action))
            .count();
        self.pump();
        applied
    }

    fn pump(&mut self) {
        for (delay, action) in self.game.take_scheduled() {
            self.timers.schedule(delay, action);
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn game(&self) -> &HeadlessGame {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut HeadlessGame {
        &mut self.game
    }

    #[must_use]
    pub fn surface(&self) -> &HeadlessSurface {
        self.game.surface()
    }

    pub fn surface_mut(&mut self) -> &mut HeadlessSurface {
        self.game.surface_mut()
    }

    #[must_use]
    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    /// Win messages shown so far.
    #[must_use]
    pub fn notifications(&self) -> &[String] {
        self.game.notifier().messages()
    }

    /// Display state of the card at a board position.
    #[must_use]
    pub fn card_state(&self, index: usize) -> Option<CardState> {
        self.game.card_state(index)
    }

    /// Board positions holding `symbol`.
    #[must_use]
    pub fn positions_of(&self, symbol: &Symbol) -> Vec<usize> {
        self.surface()
            .symbols()
            .iter()
            .enumerate()
            .filter(|(_, s)| *s == symbol)
            .map(|(i, _)| i)
            .collect()
    }
}
