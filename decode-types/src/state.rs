//! Game state: phase machine, round counter and the current pattern.

use serde::{Deserialize, Serialize};

use crate::{PadId, Pattern};

/// Last round of a game. Succeeding it completes the game.
pub const FINAL_ROUND: u8 = 6;

/// Discrete state of the round state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Intro,
    Ready,
    Playing,
    Input,
    Success,
    Fail,
    Complete,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Intro => "intro",
            Phase::Ready => "ready",
            Phase::Playing => "playing",
            Phase::Input => "input",
            Phase::Success => "success",
            Phase::Fail => "fail",
            Phase::Complete => "complete",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pattern length for a round: 3 for rounds 1-2, 4 for 3-4, 5 for 5, 6 after.
pub fn round_length(round: u8) -> usize {
    match round {
        0..=2 => 3,
        3..=4 => 4,
        5 => 5,
        _ => 6,
    }
}

/// Snapshot of a game session. Exactly one exists at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    pub phase: Phase,
    pub round: u8,
    pub pattern: Pattern,
    pub user_input: Vec<PadId>,
    pub playback_cursor: usize,
    pub is_playing: bool,
    pub highlighted_pad: Option<PadId>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The pad the player is expected to press next, if any.
    pub fn expected_pad(&self) -> Option<PadId> {
        if self.phase != Phase::Input {
            return None;
        }
        self.pattern.get(self.user_input.len()).copied()
    }

    /// Whether `pad` was entered correctly at some position of the current input.
    pub fn is_correct_entry(&self, pad: PadId) -> bool {
        self.user_input
            .iter()
            .zip(self.pattern.iter())
            .any(|(entered, expected)| *entered == pad && entered == expected)
    }

    /// Most recently pressed pad.
    pub fn last_input(&self) -> Option<PadId> {
        self.user_input.last().copied()
    }

    /// Position where the input diverged from the pattern (only in `Fail`).
    pub fn mismatch_index(&self) -> Option<usize> {
        if self.phase != Phase::Fail {
            return None;
        }
        self.user_input
            .iter()
            .zip(self.pattern.iter())
            .position(|(entered, expected)| entered != expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: u8) -> PadId {
        PadId::new(id).unwrap()
    }

    #[test]
    fn round_length_table() {
        let lengths: Vec<usize> = (1..=6).map(round_length).collect();
        assert_eq!(lengths, [3, 3, 4, 4, 5, 6]);
        assert_eq!(round_length(0), 3);
        assert_eq!(round_length(9), 6);
    }

    #[test]
    fn initial_state_is_intro() {
        let state = GameState::new();
        assert_eq!(state.phase, Phase::Intro);
        assert_eq!(state.round, 0);
        assert!(state.pattern.is_empty());
        assert!(state.user_input.is_empty());
        assert!(state.highlighted_pad.is_none());
    }

    #[test]
    fn expected_pad_follows_input() {
        let mut state = GameState {
            phase: Phase::Input,
            pattern: vec![p(0), p(1), p(2)],
            ..Default::default()
        };
        assert_eq!(state.expected_pad(), Some(p(0)));
        state.user_input.push(p(0));
        assert_eq!(state.expected_pad(), Some(p(1)));
        state.phase = Phase::Ready;
        assert_eq!(state.expected_pad(), None);
    }

    #[test]
    fn mismatch_index_points_at_wrong_entry() {
        let state = GameState {
            phase: Phase::Fail,
            pattern: vec![p(0), p(1), p(2)],
            user_input: vec![p(0), p(4)],
            ..Default::default()
        };
        assert_eq!(state.mismatch_index(), Some(1));
        assert!(state.is_correct_entry(p(0)));
        assert!(!state.is_correct_entry(p(4)));
    }

    #[test]
    fn phase_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Phase::Input).unwrap(), "\"input\"");
    }
}
