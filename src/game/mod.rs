//! The game engine and its headless driver.
//!
//! - `MemoryGame`: session lifecycle, card clicks, match and win logic
//! - `Session`, `Deferred`: per-deal state and the actions the engine asks
//!   its host to run later
//! - `TimerQueue`, `Table`: a virtual clock and a driver for headless play

pub mod engine;
pub mod session;
pub mod table;
pub mod timers;

pub use engine::MemoryGame;
pub use session::{Deferred, DeferredKind, FlippedCard, Session, SessionId};
pub use table::{HeadlessGame, Table};
pub use timers::TimerQueue;
