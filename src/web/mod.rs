//! Browser bindings for the memory game.
//!
//! Enabled with the `web` feature. Builds the engine on real DOM elements:
//!
//! - `DomSurface`: board, cards and restart button looked up by id
//! - `AlertNotifier`: win message through `window.alert`
//! - `WebGame`: click wiring, `setTimeout` scheduling, document-ready start
//!
//! # Quick Start
//!
//! ```html
//! <div id="gameBoard"></div>
//! <button id="restartButton">Restart</button>
//! <script type="module">
//!   import init from "./pkg/memory_match.js";
//!   await init();
//! </script>
//! ```
//!
//! `init` runs `start`, which deals the first session as soon as the
//! document is ready. A deal that fails once the document has loaded is
//! thrown to the page, so a missing board shows up as an uncaught error.

use wasm_bindgen::prelude::*;

mod app;
mod dom;

pub use app::{DomGame, WebGame};
pub use dom::{AlertNotifier, ClickDispatch, DomSurface};

use crate::core::{GameConfig, GameError};

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Entry point run by the generated JS glue once the module is loaded.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // Forward tracing events to the browser console
    tracing_wasm::set_as_global_default();

    WebGame::mount(GameConfig::default())?.when_ready()
}
