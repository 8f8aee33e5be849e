use crate::{GameState, Phase};

pub(super) fn play(state: &mut GameState) {
    state.phase = Phase::Playing;
    state.user_input.clear();
    state.playback_cursor = 0;
    state.is_playing = true;
    state.highlighted_pad = None;
}

pub(super) fn step(state: &mut GameState) {
    match state.pattern.get(state.playback_cursor) {
        Some(&pad) => {
            state.highlighted_pad = Some(pad);
            state.playback_cursor += 1;
        }
        None => {
            state.phase = Phase::Input;
            state.playback_cursor = 0;
            state.user_input.clear();
            state.is_playing = false;
            state.highlighted_pad = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::p;
    use super::*;

    fn ready(pattern: Vec<crate::PadId>) -> GameState {
        GameState {
            phase: Phase::Ready,
            round: 1,
            pattern,
            ..Default::default()
        }
    }

    #[test]
    fn steps_walk_the_pattern_then_hand_over() {
        let mut state = ready(vec![p(2), p(0), p(5)]);
        play(&mut state);
        assert!(state.is_playing);

        let mut lit = Vec::new();
        for _ in 0..3 {
            step(&mut state);
            assert_eq!(state.phase, Phase::Playing);
            lit.push(state.highlighted_pad.unwrap());
        }
        assert_eq!(lit, vec![p(2), p(0), p(5)]);
        assert_eq!(state.playback_cursor, 3);

        step(&mut state);
        assert_eq!(state.phase, Phase::Input);
        assert_eq!(state.playback_cursor, 0);
        assert!(!state.is_playing);
        assert!(state.highlighted_pad.is_none());
    }

    #[test]
    fn replay_clears_previous_input() {
        let mut state = ready(vec![p(1), p(1), p(2)]);
        state.user_input = vec![p(1)];
        play(&mut state);
        assert!(state.user_input.is_empty());
        assert_eq!(state.playback_cursor, 0);
    }
}
