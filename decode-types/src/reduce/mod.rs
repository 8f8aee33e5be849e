//! Pure state-mutation reducers for Signal Decode.
//!
//! These functions are the single source of truth for action → state mutations.
//!
//! Reducers mutate `GameState` only. They do NOT:
//! - Construct DispatchResult (no sound cues, no phase-change reports)
//! - Schedule timing steps
//! - Touch audio or preferences

mod input;
mod playback;
mod round;

use crate::{GameAction, GameState, PatternSource, Phase};

/// Whether `action` is accepted in `phase`. Everything else is a silent no-op.
pub fn is_valid_in(action: &GameAction, phase: Phase) -> bool {
    match action {
        GameAction::StartGame => phase == Phase::Intro,
        GameAction::PlaySignal => phase == Phase::Ready,
        GameAction::PlaybackStep | GameAction::ClearHighlight => phase == Phase::Playing,
        GameAction::SubmitInput(_) => phase == Phase::Input,
        GameAction::Advance => phase == Phase::Success,
        GameAction::Retry => phase == Phase::Fail,
        GameAction::Reset => true,
    }
}

/// Apply an action's state mutations to the given state.
/// Returns true if the action was applied, false if it was ignored because
/// the current phase does not accept it.
pub fn reduce_action(
    action: &GameAction,
    state: &mut GameState,
    patterns: &mut dyn PatternSource,
) -> bool {
    if !is_valid_in(action, state.phase) {
        return false;
    }

    match action {
        GameAction::StartGame => round::start(state, patterns),
        GameAction::PlaySignal => playback::play(state),
        GameAction::PlaybackStep => playback::step(state),
        GameAction::ClearHighlight => state.highlighted_pad = None,
        GameAction::SubmitInput(pad) => input::submit(state, *pad),
        GameAction::Advance => round::advance(state, patterns),
        GameAction::Retry => round::retry(state),
        GameAction::Reset => *state = GameState::default(),
    }
    true
}


#[cfg(test)]
mod tests {
    use super::test_support::{p, Counting};
    use super::*;

    #[test]
    fn invalid_phase_is_a_no_op() {
        let mut state = GameState::default();
        let before = state.clone();
        for action in [
            GameAction::PlaySignal,
            GameAction::PlaybackStep,
            GameAction::ClearHighlight,
            GameAction::SubmitInput(p(0)),
            GameAction::Advance,
            GameAction::Retry,
        ] {
            assert!(!reduce_action(&action, &mut state, &mut Counting));
            assert_eq!(state, before);
        }
    }

    #[test]
    fn reset_is_valid_everywhere() {
        for phase in [
            Phase::Intro,
            Phase::Ready,
            Phase::Playing,
            Phase::Input,
            Phase::Success,
            Phase::Fail,
            Phase::Complete,
        ] {
            assert!(is_valid_in(&GameAction::Reset, phase));
        }
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut state = GameState {
            phase: Phase::Fail,
            round: 4,
            pattern: vec![p(1), p(2), p(3), p(4)],
            user_input: vec![p(1), p(0)],
            playback_cursor: 2,
            is_playing: true,
            highlighted_pad: Some(p(2)),
        };
        assert!(reduce_action(&GameAction::Reset, &mut state, &mut Counting));
        assert_eq!(state, GameState::default());
    }

    #[test]
    fn start_game_twice_keeps_first_pattern() {
        let mut state = GameState::default();
        assert!(reduce_action(&GameAction::StartGame, &mut state, &mut Counting));
        let pattern = state.pattern.clone();
        assert!(!reduce_action(&GameAction::StartGame, &mut state, &mut Counting));
        assert_eq!(state.pattern, pattern);
    }
}
