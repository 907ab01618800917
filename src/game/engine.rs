//! The memory game engine.

use std::time::Duration;

use tracing::{debug, info};

use super::session::{Deferred, DeferredKind, FlippedCard, Session, SessionId};
use crate::cards::{build_deck, CardState, Marker};
use crate::core::{GameConfig, GameError, GameRng, Result};
use crate::surface::{Notifier, Surface};

/// Memory game engine.
///
/// Owns the current session and drives a `Surface`. The engine is purely
/// reactive: hosts feed it clicks, restart activations, and the deferred
/// actions it asked for.
///
/// ## Lifecycle
///
/// 1. `initialize` deals a new session (on document ready, or on restart)
/// 2. `on_card_click` flips cards and resolves pairs
/// 3. `take_scheduled` hands the host flip-back and win actions with delays
/// 4. `run_deferred` runs them; actions from a replaced session are ignored
pub struct MemoryGame<S: Surface, N: Notifier> {
    config: GameConfig,
    rng: GameRng,
    surface: S,
    notifier: N,
    session: Option<Session<S::Card>>,
    sessions_started: u64,
    scheduled: Vec<(Duration, Deferred)>,
}

impl<S: Surface, N: Notifier> MemoryGame<S, N> {
    /// Create an engine. No session exists until `initialize` is called.
    pub fn new(config: GameConfig, rng: GameRng, surface: S, notifier: N) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            surface,
            notifier,
            session: None,
            sessions_started: 0,
            scheduled: Vec::new(),
        })
    }

    /// Deal a fresh session onto the board.
    ///
    /// Fails with `MissingSurface` when the board container is absent; the
    /// previous session, if any, is left untouched in that case.
    pub fn initialize(&mut self) -> Result<SessionId> {
        if !self.surface.board_present() {
            return Err(GameError::missing_surface(&self.config.board_id));
        }

        self.surface.clear_board();
        self.sessions_started += 1;
        let id = SessionId(self.sessions_started);
        self.session = Some(Session::new(id));
        self.scheduled.clear();
        self.surface.set_restart_enabled(false);

        let deck = build_deck(&self.config.symbols, &mut self.rng);
        for (index, symbol) in deck.iter().enumerate() {
            let card = self.surface.create_card(symbol, index)?;
            self.surface.listen_for_clicks(&card);
            self.surface.append_card(&card);
        }

        info!(session = %id, cards = deck.len(), "dealt new session");
        Ok(id)
    }

    /// Handle a click on a card.
    ///
    /// Clicks on flipped or matched cards are ignored. The second card of a
    /// pair triggers match resolution, and the restart control is enabled
    /// whenever the selection is empty once the click is handled.
    pub fn on_card_click(&mut self, card: &S::Card) {
        let Some(session) = self.session.as_mut() else {
            debug!("click ignored: no session");
            return;
        };

        if self.surface.has_marker(card, Marker::Flipped)
            || self.surface.has_marker(card, Marker::Matched)
        {
            return;
        }

        let (Some(symbol), Some(index)) =
            (self.surface.card_symbol(card), self.surface.card_index(card))
        else {
            debug!("click ignored: target is not a card");
            return;
        };

        self.surface.add_marker(card, Marker::Flipped);
        self.surface.set_text(card, symbol.as_str());
        debug!(session = %session.id(), index, %symbol, "card flipped");

        session.flipped.push(FlippedCard {
            card: card.clone(),
            symbol,
            index,
        });
        let selected = session.flipped.len();

        if selected == 2 {
            self.resolve_match();
        }

        if self.flipped_count() == 0 {
            self.surface.set_restart_enabled(true);
        }
    }

    /// Route a click to the card at a board position.
    pub fn click_position(&mut self, index: usize) -> Result<()> {
        let cards = self.surface.cards();
        let len = cards.len();
        let card = cards
            .into_iter()
            .nth(index)
            .ok_or(GameError::UnknownCard { index, len })?;
        self.on_card_click(&card);
        Ok(())
    }

    /// Handle an activation of the restart control.
    ///
    /// A disabled control ignores the click and returns `Ok(None)`.
    pub fn restart_clicked(&mut self) -> Result<Option<SessionId>> {
        if !self.surface.restart_enabled() {
            debug!("restart ignored: control disabled");
            return Ok(None);
        }
        self.initialize().map(Some)
    }

    /// Run a deferred action whose delay has elapsed.
    ///
    /// Returns `false` when the action belongs to a session that has since
    /// been replaced; such actions have no effect.
    pub fn run_deferred(&mut self, action: &Deferred) -> bool {
        if self.session_id() != Some(action.session) {
            debug!(session = %action.session, "stale deferred action ignored");
            return false;
        }

        match action.kind {
            DeferredKind::FlipBack { first, second } => {
                for index in [first, second] {
                    if let Some(card) = self.surface.card_with_index(index) {
                        self.surface.remove_marker(&card, Marker::Flipped);
                        self.surface.set_text(&card, "");
                    }
                }
                debug!(session = %action.session, first, second, "flipped pair back");
            }
            DeferredKind::AnnounceWin => {
                info!(session = %action.session, "announcing win");
                self.notifier.notify(&self.config.win_message);
            }
        }
        true
    }

    /// Drain the actions scheduled since the last call, with their delays.
    pub fn take_scheduled(&mut self) -> Vec<(Duration, Deferred)> {
        std::mem::take(&mut self.scheduled)
    }

    fn resolve_match(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let id = session.id();
        let pair = std::mem::take(&mut session.flipped);
        let (first, second) = match pair.as_slice() {
            [first, second] => (first, second),
            _ => return,
        };

        if first.symbol == second.symbol {
            self.surface.add_marker(&first.card, Marker::Matched);
            self.surface.add_marker(&second.card, Marker::Matched);
            session.matched_pairs += 1;
            debug!(session = %id, symbol = %first.symbol, "pair matched");
            self.check_win();
        } else {
            let delay = self.config.flip_back_delay();
            debug!(session = %id, first = first.index, second = second.index, "pair mismatched");
            self.schedule(delay, Deferred::flip_back(id, first.index, second.index));
        }
    }

    fn check_win(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        if session.matched_pairs() != self.config.pair_count() {
            return;
        }

        let id = session.id();
        info!(session = %id, pairs = session.matched_pairs(), "all pairs matched");
        let delay = self.config.win_delay();
        self.schedule(delay, Deferred::announce_win(id));
    }

    fn schedule(&mut self, delay: Duration, action: Deferred) {
        self.scheduled.push((delay, action));
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// The current session, if one has been dealt.
    #[must_use]
    pub fn session(&self) -> Option<&Session<S::Card>> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn session_id(&self) -> Option<SessionId> {
        self.session.as_ref().map(Session::id)
    }

    /// Cards in the flipped selection.
    #[must_use]
    pub fn flipped_count(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.flipped().len())
    }

    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.session.as_ref().map_or(0, Session::matched_pairs)
    }

    /// Whether every pair of the current session is matched.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.session.is_some() && self.matched_pairs() == self.config.pair_count()
    }

    /// Display state of the card at a board position.
    #[must_use]
    pub fn card_state(&self, index: usize) -> Option<CardState> {
        self.surface
            .card_at(index)
            .map(|card| self.surface.card_state(&card))
    }
}
