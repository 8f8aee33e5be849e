//! # decode-types
//!
//! Shared type definitions for Signal Decode.
//! This crate holds the data model (pads, phases, game state), the action
//! enum that flows through dispatch, and the pure reducers that apply
//! actions to state. It is used by decode-core, decode-audio and decode-ui.

pub mod action;
mod dispatch;
mod pad;
pub mod reduce;
pub mod state;

pub use action::*;
pub use dispatch::{Dispatcher, PatternSource};
pub use pad::{pad, Pad, PADS, PAD_COUNT};
pub use state::*;

/// Identifier of one of the six pads.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct PadId(u8);

impl PadId {
    /// Create a PadId. Returns `None` when `id` is outside the pad table.
    pub fn new(id: u8) -> Option<Self> {
        ((id as usize) < PAD_COUNT).then_some(Self(id))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// All pad ids in table order.
    pub fn all() -> impl Iterator<Item = PadId> {
        (0..PAD_COUNT as u8).map(PadId)
    }
}

impl std::fmt::Display for PadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pad-{}", self.0)
    }
}

/// Ordered sequence of pads the player has to reproduce.
pub type Pattern = Vec<PadId>;
