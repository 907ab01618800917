//! Game wiring for the browser.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, Window};

use super::dom::{AlertNotifier, DomSurface};
use crate::core::{GameConfig, GameRng};
use crate::game::{Deferred, MemoryGame};

/// Engine type driven by a `WebGame`.
pub type DomGame = MemoryGame<DomSurface, AlertNotifier>;

/// A memory game mounted on the page.
///
/// Card and restart listeners hold handles to the game, so a mounted game
/// lives as long as the page does.
#[derive(Clone)]
pub struct WebGame {
    inner: Rc<RefCell<DomGame>>,
    window: Window,
}

impl WebGame {
    /// Build the engine on the page's elements and attach the listeners.
    ///
    /// Nothing is dealt yet; call `initialize` or `when_ready`.
    pub fn mount(config: GameConfig) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or("No window object")?;
        let document = window.document().ok_or("No document object")?;

        let surface = DomSurface::new(document, &config);
        let dispatch = surface.dispatcher();
        let restart = surface.restart_button().cloned();
        let notifier = AlertNotifier::new(window.clone());

        let game = MemoryGame::new(config, GameRng::from_entropy(), surface, notifier)?;
        let web = Self {
            inner: Rc::new(RefCell::new(game)),
            window,
        };

        let handle = web.clone();
        dispatch.set(Rc::new(move |card: &Element| handle.card_clicked(card)));

        if let Some(button) = restart {
            let handle = web.clone();
            let listener = Closure::<dyn FnMut(Event)>::new(move |_e: Event| {
                if let Err(err) = handle.restart() {
                    wasm_bindgen::throw_val(err);
                }
            });
            button.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
            listener.forget();
        }

        Ok(web)
    }

    /// Deal a new session.
    pub fn initialize(&self) -> Result<(), JsValue> {
        self.inner.borrow_mut().initialize()?;
        self.flush();
        Ok(())
    }

    /// Deal the first session once the document has finished loading.
    pub fn when_ready(self) -> Result<(), JsValue> {
        let document = self.window.document().ok_or("No document object")?;
        if document.ready_state() != "loading" {
            return self.initialize();
        }

        let on_ready = Closure::once_into_js(move || {
            if let Err(err) = self.initialize() {
                wasm_bindgen::throw_val(err);
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        Ok(())
    }

    /// Borrow the engine.
    pub fn with_game<R>(&self, f: impl FnOnce(&DomGame) -> R) -> R {
        f(&self.inner.borrow())
    }

    fn card_clicked(&self, card: &Element) {
        self.inner.borrow_mut().on_card_click(card);
        self.flush();
    }

    fn restart(&self) -> Result<(), JsValue> {
        self.inner.borrow_mut().restart_clicked()?;
        self.flush();
        Ok(())
    }

    /// Hand every action the engine scheduled to `setTimeout`.
    fn flush(&self) {
        let scheduled = self.inner.borrow_mut().take_scheduled();
        for (delay, action) in scheduled {
            if let Err(err) = self.set_timeout(delay, action) {
                warn!(?err, "could not schedule deferred action");
            }
        }
    }

    fn set_timeout(&self, delay: Duration, action: Deferred) -> Result<(), JsValue> {
        let inner = Rc::clone(&self.inner);
        let callback = Closure::once_into_js(move || {
            inner.borrow_mut().run_deferred(&action);
        });
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis)?;
        Ok(())
    }
}
