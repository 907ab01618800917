//! In-memory surface.
//!
//! `HeadlessSurface` models the small part of a DOM the engine touches: a
//! board holding card elements, each with `symbol`/`index` attributes, a
//! marker set and text, plus a restart control that can be enabled or
//! disabled.
//!
//! Clearing the board detaches every card. Handles carry the generation
//! they were created in, so a handle kept from an earlier deal reads as an
//! empty element and ignores writes, the way a detached DOM node would.

use rustc_hash::FxHashSet;

use super::Surface;
use crate::cards::{Marker, Symbol};
use crate::core::Result;

/// Handle to a card on a `HeadlessSurface`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CardHandle {
    generation: u32,
    slot: usize,
}

#[derive(Clone, Debug, Default)]
struct CardNode {
    symbol: Option<Symbol>,
    index: Option<usize>,
    markers: FxHashSet<Marker>,
    text: String,
    listening: bool,
}

/// Headless rendering surface.
#[derive(Clone, Debug)]
pub struct HeadlessSurface {
    board_present: bool,
    restart_enabled: bool,
    generation: u32,
    /// Every card created since the last clear, attached or not.
    nodes: Vec<CardNode>,
    /// Slots of attached cards, in board order.
    children: Vec<usize>,
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessSurface {
    /// Create a surface with an empty board and an enabled restart control.
    pub fn new() -> Self {
        Self {
            board_present: true,
            restart_enabled: true,
            generation: 0,
            nodes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a surface whose board container is missing.
    pub fn without_board() -> Self {
        Self {
            board_present: false,
            ..Self::new()
        }
    }

    /// Add or remove the board container.
    pub fn set_board_present(&mut self, present: bool) {
        self.board_present = present;
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Symbols on the board, in board order.
    #[must_use]
    pub fn symbols(&self) -> Vec<Symbol> {
        self.children
            .iter()
            .filter_map(|&slot| self.nodes[slot].symbol.clone())
            .collect()
    }

    /// Overwrite a card's symbol attribute.
    ///
    /// Lets tests stage a known pair without depending on the shuffle.
    pub fn set_symbol(&mut self, card: &CardHandle, symbol: impl Into<Symbol>) {
        if let Some(node) = self.node_mut(card) {
            node.symbol = Some(symbol.into());
        }
    }

    /// Whether the card is attached to the board.
    #[must_use]
    pub fn is_attached(&self, card: &CardHandle) -> bool {
        self.node(card).is_some() && self.children.contains(&card.slot)
    }

    /// Whether a click listener was registered on the card.
    #[must_use]
    pub fn is_listening(&self, card: &CardHandle) -> bool {
        self.node(card).is_some_and(|node| node.listening)
    }

    fn node(&self, card: &CardHandle) -> Option<&CardNode> {
        if card.generation != self.generation {
            return None;
        }
        self.nodes.get(card.slot)
    }

    fn node_mut(&mut self, card: &CardHandle) -> Option<&mut CardNode> {
        if card.generation != self.generation {
            return None;
        }
        self.nodes.get_mut(card.slot)
    }
}

impl Surface for HeadlessSurface {
    type Card = CardHandle;

    fn board_present(&self) -> bool {
        self.board_present
    }

    fn clear_board(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.nodes.clear();
        self.children.clear();
    }

    fn create_card(&mut self, symbol: &Symbol, index: usize) -> Result<CardHandle> {
        let slot = self.nodes.len();
        self.nodes.push(CardNode {
            symbol: Some(symbol.clone()),
            index: Some(index),
            ..CardNode::default()
        });
        Ok(CardHandle {
            generation: self.generation,
            slot,
        })
    }

    fn append_card(&mut self, card: &CardHandle) {
        if self.node(card).is_some() && !self.children.contains(&card.slot) {
            self.children.push(card.slot);
        }
    }

    fn cards(&self) -> Vec<CardHandle> {
        self.children
            .iter()
            .map(|&slot| CardHandle {
                generation: self.generation,
                slot,
            })
            .collect()
    }

    fn card_symbol(&self, card: &CardHandle) -> Option<Symbol> {
        self.node(card).and_then(|node| node.symbol.clone())
    }

    fn card_index(&self, card: &CardHandle) -> Option<usize> {
        self.node(card).and_then(|node| node.index)
    }

    fn has_marker(&self, card: &CardHandle, marker: Marker) -> bool {
        self.node(card).is_some_and(|node| node.markers.contains(&marker))
    }

    fn add_marker(&mut self, card: &CardHandle, marker: Marker) {
        if let Some(node) = self.node_mut(card) {
            node.markers.insert(marker);
        }
    }

    fn remove_marker(&mut self, card: &CardHandle, marker: Marker) {
        if let Some(node) = self.node_mut(card) {
            node.markers.remove(&marker);
        }
    }

    fn text(&self, card: &CardHandle) -> String {
        self.node(card).map(|node| node.text.clone()).unwrap_or_default()
    }

    fn set_text(&mut self, card: &CardHandle, text: &str) {
        if let Some(node) = self.node_mut(card) {
            node.text = text.to_string();
        }
    }

    fn listen_for_clicks(&mut self, card: &CardHandle) {
        if let Some(node) = self.node_mut(card) {
            node.listening = true;
        }
    }

    fn restart_enabled(&self) -> bool {
        self.restart_enabled
    }

    fn set_restart_enabled(&mut self, enabled: bool) {
        self.restart_enabled = enabled;
    }
}
