//! Card faces and display state.
//!
//! A card's display state is not stored by the engine. It lives on the
//! surface as a set of `Marker`s, the same way a browser keeps it in an
//! element's class list, and `CardState` is derived from those markers.

use serde::{Deserialize, Serialize};

/// A card face. Two cards in every deck share each symbol.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(pub String);

impl Symbol {
    /// Create a new symbol.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label shown when the card is face up.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Symbol {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// State marker attached to a card element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// Face up.
    Flipped,
    /// Part of a confirmed pair. Matched cards stay flipped as well.
    Matched,
}

impl Marker {
    /// Class name used for this marker on a browser element.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Marker::Flipped => "flipped",
            Marker::Matched => "matched",
        }
    }
}

/// Display state of a card, derived from its markers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    Hidden,
    Flipped,
    Matched,
}

impl CardState {
    /// Derive the display state from marker membership.
    ///
    /// `matched` wins over `flipped`.
    #[must_use]
    pub const fn from_markers(flipped: bool, matched: bool) -> Self {
        if matched {
            CardState::Matched
        } else if flipped {
            CardState::Flipped
        } else {
            CardState::Hidden
        }
    }

    /// Whether a click on a card in this state is ignored.
    #[must_use]
    pub const fn is_revealed(self) -> bool {
        !matches!(self, CardState::Hidden)
    }
}
