//! Session state and deferred actions.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Symbol;

/// Identifies one deal. Every `initialize` starts a new session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// A face-up card waiting for its partner.
///
/// Symbol and index are read from the card when it is flipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlippedCard<C> {
    pub card: C,
    pub symbol: Symbol,
    pub index: usize,
}

/// State of one deal: the flipped selection and the match count.
///
/// Card display state is not here; it lives on the surface.
#[derive(Clone, Debug)]
pub struct Session<C> {
    id: SessionId,
    pub(crate) flipped: SmallVec<[FlippedCard<C>; 2]>,
    pub(crate) matched_pairs: usize,
}

impl<C> Session<C> {
    /// Create an empty session.
    #[must_use]
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            flipped: SmallVec::new(),
            matched_pairs: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Cards in the flipped selection, in click order.
    #[must_use]
    pub fn flipped(&self) -> &[FlippedCard<C>] {
        &self.flipped
    }

    /// Confirmed pairs so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }
}

/// What a deferred action does when it runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeferredKind {
    /// Turn a mismatched pair face down again. Cards are named by their
    /// index attribute.
    FlipBack { first: usize, second: usize },
    /// Show the win message.
    AnnounceWin,
}

/// An action the engine wants run after a delay.
///
/// The host owns the clock: it takes these from `MemoryGame::take_scheduled`
/// and hands each back to `MemoryGame::run_deferred` once its delay has
/// passed. The session id lets the engine drop actions from a deal that a
/// restart has already replaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deferred {
    pub session: SessionId,
    pub kind: DeferredKind,
}

impl Deferred {
    #[must_use]
    pub fn flip_back(session: SessionId, first: usize, second: usize) -> Self {
        Self {
            session,
            kind: DeferredKind::FlipBack { first, second },
        }
    }

    #[must_use]
    pub fn announce_win(session: SessionId) -> Self {
        Self {
            session,
            kind: DeferredKind::AnnounceWin,
        }
    }
}
