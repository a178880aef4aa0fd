//! Layout configuration panel component.
//!
//! [`PanelState`] owns the two diagram mappings, the current selection, the
//! live edit buffers, and the bottom-side choice. All mutation flows through
//! [`PanelState::apply`] with an explicit [`PanelEvent`], so the component
//! is fully testable without a terminal.
//!
//! The restart request is deliberately not a `PanelEvent`: it is an
//! edge-triggered signal with consume-once semantics, owned by
//! [`RestartLatch`] and wired up in [`SharedPanel`].

mod shared;

pub use shared::{PanelSnapshot, RestartLatch, SharedPanel};

use crate::{presets, LayoutName, Side};
use std::collections::HashMap;

/// An input event for the panel reducer.
///
/// Events mirror the UI protocol: selection changes repopulate the buffers,
/// input events track live typing, commit events store a buffer into its
/// mapping under the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    /// A new layout was selected; both buffers are overwritten from the
    /// mappings (absent entries yield empty strings).
    Select(LayoutName),
    /// The placement editor content changed (uncommitted).
    PlacementInput(String),
    /// The promotion editor content changed (uncommitted).
    PromotionInput(String),
    /// The placement buffer is committed into the mapping under the
    /// currently selected layout name.
    CommitPlacement,
    /// The promotion buffer is committed into the mapping under the
    /// currently selected layout name.
    CommitPromotion,
    /// The bottom-side selection changed.
    SetSide(Side),
}

/// Panel component state.
///
/// Constructed with built-in presets seeded into both mappings and the
/// initial selection already applied, so the buffers are populated before
/// the first render or driver poll.
#[derive(Debug, Clone)]
pub struct PanelState {
    /// Placement diagram per layout name. Mutated in place by commits,
    /// entries are never removed.
    placements: HashMap<LayoutName, String>,
    /// Promotion diagram per layout name.
    promotions: HashMap<LayoutName, String>,
    /// The currently selected layout name. Commits always target this key.
    selected: LayoutName,
    /// Live placement editor content, committed or not.
    placement_buf: String,
    /// Live promotion editor content, committed or not.
    promotion_buf: String,
    /// Which color renders at the bottom of the board.
    side: Side,
}

impl PanelState {
    /// Creates a panel with built-in presets and applies the initial
    /// selection eagerly.
    pub fn new(initial: LayoutName, side: Side) -> Self {
        let mut state = Self {
            placements: presets::seed_placements(),
            promotions: presets::seed_promotions(),
            selected: initial,
            placement_buf: String::new(),
            promotion_buf: String::new(),
            side,
        };
        state.apply(PanelEvent::Select(initial));
        state
    }

    /// Applies one event. The reducer is total: no event can fail, and
    /// degenerate input (absent mapping keys) degrades to empty strings.
    pub fn apply(&mut self, event: PanelEvent) {
        match event {
            PanelEvent::Select(name) => {
                self.selected = name;
                self.placement_buf = self
                    .placements
                    .get(&name)
                    .cloned()
                    .unwrap_or_default();
                self.promotion_buf = self
                    .promotions
                    .get(&name)
                    .cloned()
                    .unwrap_or_default();
            }
            PanelEvent::PlacementInput(text) => {
                self.placement_buf = text;
            }
            PanelEvent::PromotionInput(text) => {
                self.promotion_buf = text;
            }
            PanelEvent::CommitPlacement => {
                self.placements
                    .insert(self.selected, self.placement_buf.clone());
            }
            PanelEvent::CommitPromotion => {
                self.promotions
                    .insert(self.selected, self.promotion_buf.clone());
            }
            PanelEvent::SetSide(side) => {
                self.side = side;
            }
        }
    }

    /// The currently selected layout name.
    pub fn selected(&self) -> LayoutName {
        self.selected
    }

    /// The live placement buffer: what the editor shows right now,
    /// regardless of whether it has been committed.
    pub fn placement_buf(&self) -> &str {
        &self.placement_buf
    }

    /// The live promotion buffer.
    pub fn promotion_buf(&self) -> &str {
        &self.promotion_buf
    }

    /// The committed placement diagram for a layout name, empty if absent.
    pub fn placement_of(&self, name: LayoutName) -> &str {
        self.placements.get(&name).map(String::as_str).unwrap_or("")
    }

    /// The committed promotion diagram for a layout name, empty if absent.
    pub fn promotion_of(&self, name: LayoutName) -> &str {
        self.promotions.get(&name).map(String::as_str).unwrap_or("")
    }

    /// The current bottom-side selection.
    pub fn side(&self) -> Side {
        self.side
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new(LayoutName::Standard, Side::White)
    }
}

#[cfg(test)]
mod tests;
