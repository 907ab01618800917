//! Error types for the game engine.

use thiserror::Error;

/// Errors raised by the engine and its configuration.
#[derive(Error, Debug)]
pub enum GameError {
    /// The surface has no board container to deal cards into.
    #[error("{board_id} element not found in the DOM!")]
    MissingSurface {
        /// Id the surface looked for.
        board_id: String,
    },

    /// A click was routed to a board position that holds no card.
    #[error("no card at position {index} (board holds {len})")]
    UnknownCard { index: usize, len: usize },

    /// The surface could not carry out an operation.
    #[error("Surface error: {0}")]
    Surface(String),

    /// Configuration rejected by `GameConfig::validate`.
    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, GameError>;

impl GameError {
    /// Create a missing-surface error for the given board id.
    pub fn missing_surface(board_id: impl Into<String>) -> Self {
        Self::MissingSurface {
            board_id: board_id.into(),
        }
    }

    /// Create a surface error.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
