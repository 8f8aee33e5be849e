//! Action types for the dispatch system.
//!
//! Actions are either player intents (start, play, input, retry, reset) or
//! timing steps produced by the scheduler (playback step, highlight clear,
//! success auto-advance). Both flow through the same reducer.

use serde::{Deserialize, Serialize};

use crate::{PadId, Phase};

/// Everything that can mutate a `GameState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "pad", rename_all = "snake_case")]
pub enum GameAction {
    StartGame,
    PlaySignal,
    /// Highlight the next pattern element, or hand over to input after the last one.
    PlaybackStep,
    ClearHighlight,
    SubmitInput(PadId),
    /// Leave `Success`: next round, or `Complete` after the final round.
    Advance,
    Retry,
    Reset,
}

impl GameAction {
    /// Player intents, as opposed to timing steps.
    pub fn is_intent(&self) -> bool {
        !matches!(
            self,
            GameAction::PlaybackStep | GameAction::ClearHighlight | GameAction::Advance
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            GameAction::StartGame => "start_game",
            GameAction::PlaySignal => "play_signal",
            GameAction::PlaybackStep => "playback_step",
            GameAction::ClearHighlight => "clear_highlight",
            GameAction::SubmitInput(_) => "submit_input",
            GameAction::Advance => "advance",
            GameAction::Retry => "retry",
            GameAction::Reset => "reset",
        }
    }
}

/// Sounds the game asks the audio layer to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundCue {
    Pad(PadId),
    Click,
    Success,
    Fail,
}

impl SoundCue {
    /// Every cue, pads first.
    pub fn all() -> Vec<SoundCue> {
        let mut cues: Vec<SoundCue> = PadId::all().map(SoundCue::Pad).collect();
        cues.extend([SoundCue::Click, SoundCue::Success, SoundCue::Fail]);
        cues
    }

    /// Stable name, used for exported file names.
    pub fn name(&self) -> String {
        match self {
            SoundCue::Pad(id) => id.to_string(),
            SoundCue::Click => "click".to_string(),
            SoundCue::Success => "success".to_string(),
            SoundCue::Fail => "fail".to_string(),
        }
    }
}

/// A phase change caused by a dispatched action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseChange {
    pub from: Phase,
    pub to: Phase,
}

/// Outcome of dispatching one action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchResult {
    /// False when the action was not valid in the current phase and was ignored.
    pub handled: bool,
    pub phase_change: Option<PhaseChange>,
    pub sounds: Vec<SoundCue>,
}

impl DispatchResult {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn handled() -> Self {
        Self {
            handled: true,
            ..Self::default()
        }
    }

    pub fn entered(&self, phase: Phase) -> bool {
        self.phase_change.is_some_and(|c| c.to == phase)
    }

    pub fn merge(&mut self, other: DispatchResult) {
        self.handled |= other.handled;
        if let Some(change) = other.phase_change {
            self.phase_change = Some(match self.phase_change {
                Some(prev) => PhaseChange { from: prev.from, to: change.to },
                None => change,
            });
        }
        self.sounds.extend(other.sounds);
    }
}
