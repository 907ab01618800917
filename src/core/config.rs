//! Game configuration.
//!
//! A `GameConfig` fixes everything a session needs before the first deal:
//! - The symbol set (deck size is twice its length)
//! - The flip-back and win announcement delays
//! - The win message
//! - The element ids a browser surface looks up
//!
//! Every field has a default, so a partial JSON document is enough:
//!
//! ```
//! use memory_match::core::GameConfig;
//!
//! let config = GameConfig::from_json(r#"{ "symbols": ["X", "Y"] }"#).unwrap();
//! assert_eq!(config.pair_count(), 2);
//! assert_eq!(config.win_message, "You win!");
//! ```

use std::time::Duration;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use crate::cards::Symbol;

/// Symbols dealt when no configuration is given.
pub const DEFAULT_SYMBOLS: [&str; 4] = ["A", "B", "C", "D"];

/// Delay before mismatched cards are turned back, and before the win message.
pub const DEFAULT_DELAY_MS: u64 = 1000;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Distinct symbols; each one is dealt twice.
    pub symbols: Vec<Symbol>,

    /// Milliseconds a mismatched pair stays face up.
    pub flip_back_delay_ms: u64,

    /// Milliseconds between the last match and the win message.
    pub win_delay_ms: u64,

    /// Message handed to the notifier on a win.
    pub win_message: String,

    /// Id of the board container.
    pub board_id: String,

    /// Id of the restart control.
    pub restart_id: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.iter().map(|s| Symbol::new(*s)).collect(),
            flip_back_delay_ms: DEFAULT_DELAY_MS,
            win_delay_ms: DEFAULT_DELAY_MS,
            win_message: "You win!".to_string(),
            board_id: "gameBoard".to_string(),
            restart_id: "restartButton".to_string(),
        }
    }
}

impl GameConfig {
    /// Create a configuration with the default symbol set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the symbol set.
    #[must_use]
    pub fn with_symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    /// Set the flip-back delay.
    #[must_use]
    pub fn with_flip_back_delay(mut self, delay: Duration) -> Self {
        self.flip_back_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the win announcement delay.
    #[must_use]
    pub fn with_win_delay(mut self, delay: Duration) -> Self {
        self.win_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the win message.
    #[must_use]
    pub fn with_win_message(mut self, message: impl Into<String>) -> Self {
        self.win_message = message.into();
        self
    }

    /// Set the board container id.
    #[must_use]
    pub fn with_board_id(mut self, id: impl Into<String>) -> Self {
        self.board_id = id.into();
        self
    }

    /// Set the restart control id.
    #[must_use]
    pub fn with_restart_id(mut self, id: impl Into<String>) -> Self {
        self.restart_id = id.into();
        self
    }

    #[must_use]
    pub fn flip_back_delay(&self) -> Duration {
        Duration::from_millis(self.flip_back_delay_ms)
    }

    #[must_use]
    pub fn win_delay(&self) -> Duration {
        Duration::from_millis(self.win_delay_ms)
    }

    /// Number of pairs in a full deck.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.symbols.len()
    }

    /// Number of cards in a full deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.symbols.len() * 2
    }

    /// Check the symbol set is non-empty and free of duplicates.
    pub fn validate(&self) -> Result<()> {
        if self.symbols.is_empty() {
            return Err(GameError::config("symbol set is empty"));
        }

        let mut seen = FxHashSet::default();
        for symbol in &self.symbols {
            if !seen.insert(symbol) {
                return Err(GameError::config(format!("duplicate symbol {symbol}")));
            }
        }

        Ok(())
    }
}
