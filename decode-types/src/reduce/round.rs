use crate::{round_length, GameState, PatternSource, Phase, FINAL_ROUND};

pub(super) fn start(state: &mut GameState, patterns: &mut dyn PatternSource) {
    let round = 1;
    *state = GameState {
        phase: Phase::Ready,
        round,
        pattern: patterns.generate(round_length(round)),
        ..GameState::default()
    };
}

pub(super) fn advance(state: &mut GameState, patterns: &mut dyn PatternSource) {
    if state.round >= FINAL_ROUND {
        state.phase = Phase::Complete;
        return;
    }

    state.round += 1;
    state.pattern = patterns.generate(round_length(state.round));
    state.phase = Phase::Ready;
    clear_progress(state);
}

/// Back to `Ready` with the same pattern.
pub(super) fn retry(state: &mut GameState) {
    state.phase = Phase::Ready;
    clear_progress(state);
}

fn clear_progress(state: &mut GameState) {
    state.user_input.clear();
    state.playback_cursor = 0;
    state.is_playing = false;
    state.highlighted_pad = None;
}
