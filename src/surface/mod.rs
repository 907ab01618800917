//! Rendering surface and notification capabilities.
//!
//! The engine never owns the board. It drives whatever the host provides
//! through `Surface`, and reports a win through `Notifier`.
//!
//! ## Implementations
//!
//! - `HeadlessSurface`: in-memory element tree, used by `Table` and tests
//! - `DomSurface` (feature `web`): real DOM elements via `web-sys`

pub mod headless;

pub use headless::{CardHandle, HeadlessSurface};

use tracing::info;

use crate::cards::{CardState, Marker, Symbol};
use crate::core::Result;

/// Capabilities the engine needs from a rendering surface.
///
/// A surface exposes a board container, card elements, and a restart
/// control. Card display state lives on the surface as markers; the engine
/// only keeps the flipped selection and the match count.
///
/// ## Implementation Notes
///
/// - `Card` is a cheap handle (an element reference or an index). Handles to
///   cards removed by `clear_board` must stay safe to use; operations on them
///   simply have no visible effect.
/// - `create_card` tags the card with its symbol and index, but does not
///   attach it. `append_card` attaches it at the end of the board.
/// - `cards` returns the board's children in order.
/// - `card_symbol` and `card_index` return `None` for a card that is no
///   longer on the board. The engine ignores clicks on such cards.
pub trait Surface {
    /// Handle to a card element.
    type Card: Clone + std::fmt::Debug;

    /// Whether the board container can be found.
    fn board_present(&self) -> bool;

    /// Remove every card from the board.
    fn clear_board(&mut self);

    /// Create a card tagged with `symbol` and `index`.
    fn create_card(&mut self, symbol: &Symbol, index: usize) -> Result<Self::Card>;

    /// Append a card to the board.
    fn append_card(&mut self, card: &Self::Card);

    /// Cards currently on the board, in board order.
    fn cards(&self) -> Vec<Self::Card>;

    /// The symbol attribute of a card.
    fn card_symbol(&self, card: &Self::Card) -> Option<Symbol>;

    /// The index attribute of a card.
    fn card_index(&self, card: &Self::Card) -> Option<usize>;

    fn has_marker(&self, card: &Self::Card, marker: Marker) -> bool;

    fn add_marker(&mut self, card: &Self::Card, marker: Marker);

    fn remove_marker(&mut self, card: &Self::Card, marker: Marker);

    /// Visible text of a card.
    fn text(&self, card: &Self::Card) -> String;

    fn set_text(&mut self, card: &Self::Card, text: &str);

    /// Register the card's click listener.
    ///
    /// Called once per card. Only cards get a listener, so clicks that do
    /// not land on a card never reach the engine.
    fn listen_for_clicks(&mut self, card: &Self::Card);

    fn restart_enabled(&self) -> bool;

    fn set_restart_enabled(&mut self, enabled: bool);

    // === Convenience Methods ===

    /// The card at a board position.
    fn card_at(&self, index: usize) -> Option<Self::Card> {
        self.cards().into_iter().nth(index)
    }

    /// The card whose index attribute is `index`.
    fn card_with_index(&self, index: usize) -> Option<Self::Card> {
        self.cards()
            .into_iter()
            .find(|card| self.card_index(card) == Some(index))
    }

    /// Display state derived from the card's markers.
    fn card_state(&self, card: &Self::Card) -> CardState {
        CardState::from_markers(
            self.has_marker(card, Marker::Flipped),
            self.has_marker(card, Marker::Matched),
        )
    }
}

/// Sink for the win message.
///
/// Browsers show it with `alert`; headless hosts record or log it.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Notifier that keeps every message, in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingNotifier {
    messages: Vec<String>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// Notifier that writes the message to the `tracing` log.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, message: &str) {
        info!(%message, "game notification");
    }
}
