//! Dispatch abstractions shared by the engine and its front ends.

use crate::{DispatchResult, GameAction, Pattern};

/// Trait for dispatching actions to the state engine.
///
/// The terminal runtime sends every player intent through this trait.
pub trait Dispatcher {
    /// Dispatch an action and return the result.
    fn dispatch(&mut self, action: &GameAction) -> DispatchResult;
}

/// Source of fresh patterns for new rounds.
pub trait PatternSource {
    fn generate(&mut self, length: usize) -> Pattern;
}
