//! DOM-backed surface and notifier.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlButtonElement, Window};

use crate::cards::{Marker, Symbol};
use crate::core::{GameConfig, GameError, Result};
use crate::surface::{Notifier, Surface};

/// Callback run when a card element is clicked.
pub type ClickHandler = Rc<dyn Fn(&Element)>;

/// Shared slot card listeners call into.
///
/// Card listeners are created by the surface, before the game that should
/// receive the clicks exists. They all point at this slot, which the game
/// fills once it is built.
#[derive(Clone, Default)]
pub struct ClickDispatch {
    handler: Rc<RefCell<Option<ClickHandler>>>,
}

impl ClickDispatch {
    pub fn set(&self, handler: ClickHandler) {
        *self.handler.borrow_mut() = Some(handler);
    }

    fn dispatch(&self, card: &Element) {
        let handler = self.handler.borrow().clone();
        if let Some(handler) = handler {
            handler(card);
        }
    }
}

/// Surface over the page's board container and restart button.
pub struct DomSurface {
    document: Document,
    board_id: String,
    restart: Option<HtmlButtonElement>,
    dispatch: ClickDispatch,
    /// Listeners of the cards currently dealt. Dropped with the cards.
    listeners: Vec<Closure<dyn FnMut(Event)>>,
}

impl DomSurface {
    /// Bind to the elements named in `config`.
    ///
    /// The board is looked up on every use, so a missing board is reported
    /// by `initialize` rather than here.
    pub fn new(document: Document, config: &GameConfig) -> Self {
        let restart = document
            .get_element_by_id(&config.restart_id)
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());

        Self {
            document,
            board_id: config.board_id.clone(),
            restart,
            dispatch: ClickDispatch::default(),
            listeners: Vec::new(),
        }
    }

    /// The slot card clicks are routed through.
    #[must_use]
    pub fn dispatcher(&self) -> ClickDispatch {
        self.dispatch.clone()
    }

    #[must_use]
    pub fn restart_button(&self) -> Option<&HtmlButtonElement> {
        self.restart.as_ref()
    }

    fn board(&self) -> Option<Element> {
        self.document.get_element_by_id(&self.board_id)
    }

    /// Whether the card is still a child of the board.
    fn on_board(&self, card: &Element) -> bool {
        card.parent_element()
            .is_some_and(|parent| parent.id() == self.board_id)
    }
}

fn warn_on_err(what: &str, result: std::result::Result<(), JsValue>) {
    if let Err(err) = result {
        warn!(?err, "{} failed", what);
    }
}

impl Surface for DomSurface {
    type Card = Element;

    fn board_present(&self) -> bool {
        self.board().is_some()
    }

    fn clear_board(&mut self) {
        if let Some(board) = self.board() {
            board.set_inner_html("");
        }
        self.listeners.clear();
    }

    fn create_card(&mut self, symbol: &Symbol, index: usize) -> Result<Element> {
        let card = self
            .document
            .create_element("div")
            .map_err(|err| GameError::surface(format!("create card: {err:?}")))?;
        card.set_class_name("card");
        card.set_attribute("data-symbol", symbol.as_str())
            .and_then(|()| card.set_attribute("data-index", &index.to_string()))
            .map_err(|err| GameError::surface(format!("tag card: {err:?}")))?;
        Ok(card)
    }

    fn append_card(&mut self, card: &Element) {
        if let Some(board) = self.board() {
            warn_on_err("append card", board.append_child(card).map(|_| ()));
        }
    }

    fn cards(&self) -> Vec<Element> {
        let Some(board) = self.board() else {
            return Vec::new();
        };
        let children = board.children();
        (0..children.length())
            .filter_map(|i| children.item(i))
            .collect()
    }

    fn card_symbol(&self, card: &Element) -> Option<Symbol> {
        if !self.on_board(card) {
            return None;
        }
        card.get_attribute("data-symbol").map(Symbol::from)
    }

    fn card_index(&self, card: &Element) -> Option<usize> {
        if !self.on_board(card) {
            return None;
        }
        card.get_attribute("data-index")
            .and_then(|index| index.parse().ok())
    }

    fn has_marker(&self, card: &Element, marker: Marker) -> bool {
        card.class_list().contains(marker.class_name())
    }

    fn add_marker(&mut self, card: &Element, marker: Marker) {
        warn_on_err("add class", card.class_list().add_1(marker.class_name()));
    }

    fn remove_marker(&mut self, card: &Element, marker: Marker) {
        warn_on_err("remove class", card.class_list().remove_1(marker.class_name()));
    }

    fn text(&self, card: &Element) -> String {
        card.text_content().unwrap_or_default()
    }

    fn set_text(&mut self, card: &Element, text: &str) {
        card.set_text_content(Some(text));
    }

    fn listen_for_clicks(&mut self, card: &Element) {
        let dispatch = self.dispatch.clone();
        let target = card.clone();
        let listener = Closure::<dyn FnMut(Event)>::new(move |_e: Event| {
            dispatch.dispatch(&target);
        });
        warn_on_err(
            "add card listener",
            card.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref()),
        );
        self.listeners.push(listener);
    }

    fn restart_enabled(&self) -> bool {
        self.restart.as_ref().is_some_and(|button| !button.disabled())
    }

    fn set_restart_enabled(&mut self, enabled: bool) {
        if let Some(button) = &self.restart {
            button.set_disabled(!enabled);
        }
    }
}

/// Shows the win message with `window.alert`.
pub struct AlertNotifier {
    window: Window,
}

impl AlertNotifier {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Notifier for AlertNotifier {
    fn notify(&mut self, message: &str) {
        warn_on_err("alert", self.window.alert_with_message(message));
    }
}
