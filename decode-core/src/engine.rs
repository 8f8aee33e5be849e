//! GameEngine: owns the single game session and drives it through time.
//!
//! Player intents arrive through [`Dispatcher::dispatch`] and scheduler steps
//! through the clock; both run the pure reducer, schedule follow-up steps and
//! report which sounds to play. Time only moves when the caller says so
//! ([`GameEngine::advance_to`], [`GameEngine::fast_forward`]).

use std::time::Duration;

use decode_types::reduce::reduce_action;
use decode_types::{
    DispatchResult, Dispatcher, GameAction, GameState, PadId, PatternSource, Phase, PhaseChange,
    SoundCue,
};

use crate::config::{Config, Timing};
use crate::pattern::PatternGenerator;
use crate::scheduler::Scheduler;
use crate::session_log::SessionLog;

pub struct GameEngine {
    state: GameState,
    patterns: Box<dyn PatternSource>,
    scheduler: Scheduler,
    timing: Timing,
    now: Duration,
    session_log: Option<SessionLog>,
}

impl GameEngine {
    /// Build an engine from config: timing, pad count, resample budget and seed.
    pub fn from_config(config: &Config) -> Self {
        let generator = PatternGenerator::new(
            config.pad_count(),
            config.resample_attempts(),
            config.seed(),
        );
        Self::new(config.timing(), Box::new(generator))
    }

    pub fn new(timing: Timing, patterns: Box<dyn PatternSource>) -> Self {
        Self {
            state: GameState::default(),
            patterns,
            scheduler: Scheduler::new(),
            timing,
            now: Duration::ZERO,
            session_log: None,
        }
    }

    pub fn with_session_log(mut self, log: SessionLog) -> Self {
        self.session_log = Some(log);
        self
    }

    /// Read-only snapshot of the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Engine time of the last applied action or clock advance.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.scheduler.next_due()
    }

    pub fn pending_steps(&self) -> usize {
        self.scheduler.len()
    }

    pub fn start_game(&mut self) -> DispatchResult {
        self.dispatch(&GameAction::StartGame)
    }

    pub fn play_signal(&mut self) -> DispatchResult {
        self.dispatch(&GameAction::PlaySignal)
    }

    pub fn submit_input(&mut self, pad: PadId) -> DispatchResult {
        self.dispatch(&GameAction::SubmitInput(pad))
    }

    pub fn retry(&mut self) -> DispatchResult {
        self.dispatch(&GameAction::Retry)
    }

    pub fn reset(&mut self) -> DispatchResult {
        self.dispatch(&GameAction::Reset)
    }

    /// Move the clock to `now`, firing every step due on the way in order.
    /// Each step runs at its own due time so follow-ups keep an exact cadence.
    pub fn advance_to(&mut self, now: Duration) -> DispatchResult {
        let mut result = DispatchResult::default();
        while let Some(step) = self.scheduler.pop_due(now) {
            self.now = self.now.max(step.due);
            result.merge(self.apply(&step.action));
        }
        self.now = self.now.max(now);
        result
    }

    pub fn advance_by(&mut self, delta: Duration) -> DispatchResult {
        let target = self.now + delta;
        self.advance_to(target)
    }

    /// Fire pending steps until nothing is scheduled. Used by tests and by
    /// front ends that skip animations.
    pub fn fast_forward(&mut self) -> DispatchResult {
        let mut result = DispatchResult::default();
        while let Some(due) = self.scheduler.next_due() {
            result.merge(self.advance_to(due));
        }
        result
    }

    /// Fire pending steps until `phase` is reached or nothing is scheduled.
    pub fn fast_forward_to(&mut self, phase: Phase) -> DispatchResult {
        let mut result = DispatchResult::default();
        while self.state.phase != phase {
            let Some(due) = self.scheduler.next_due() else {
                break;
            };
            let Some(step) = self.scheduler.pop_due(due) else {
                break;
            };
            self.now = self.now.max(step.due);
            result.merge(self.apply(&step.action));
        }
        result
    }

    fn apply(&mut self, action: &GameAction) -> DispatchResult {
        let from = self.state.phase;
        if !reduce_action(action, &mut self.state, self.patterns.as_mut()) {
            log::debug!(target: "game", "ignored {} in {}", action.name(), from);
            return DispatchResult::ignored();
        }

        let mut result = DispatchResult::handled();
        let to = self.state.phase;

        if from != to || *action == GameAction::Reset {
            self.scheduler.invalidate();
        }
        if from != to {
            log::info!(target: "game", "{} -> {} (round {}, {})", from, to, self.state.round, action.name());
            result.phase_change = Some(PhaseChange { from, to });
        }

        match action {
            GameAction::PlaySignal => {
                self.scheduler.schedule(self.now, GameAction::PlaybackStep);
            }
            GameAction::PlaybackStep => {
                if let (Phase::Playing, Some(pad)) = (to, self.state.highlighted_pad) {
                    result.sounds.push(SoundCue::Pad(pad));
                    self.scheduler
                        .schedule(self.now + self.timing.highlight, GameAction::ClearHighlight);
                    self.scheduler
                        .schedule(self.now + self.timing.step_interval(), GameAction::PlaybackStep);
                }
            }
            GameAction::SubmitInput(_) => result.sounds.push(SoundCue::Click),
            _ => {}
        }

        if from != to {
            match to {
                Phase::Success => {
                    result.sounds.push(SoundCue::Success);
                    self.scheduler
                        .schedule(self.now + self.timing.advance, GameAction::Advance);
                }
                Phase::Fail => result.sounds.push(SoundCue::Fail),
                _ => {}
            }
        }

        if let Some(log) = self.session_log.as_mut() {
            log.record(self.now, action, &self.state);
        }

        result
    }
}

impl Dispatcher for GameEngine {
    fn dispatch(&mut self, action: &GameAction) -> DispatchResult {
        self.apply(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decode_types::Pattern;

    /// Always hands out the same pattern, truncated or padded to the length.
    struct Fixed(Vec<PadId>);

    impl PatternSource for Fixed {
        fn generate(&mut self, length: usize) -> Pattern {
            self.0.iter().copied().cycle().take(length).collect()
        }
    }

    fn p(id: u8) -> PadId {
        PadId::new(id).unwrap()
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn engine() -> GameEngine {
        GameEngine::new(Timing::default(), Box::new(Fixed(vec![p(0), p(1), p(2)])))
    }

    #[test]
    fn play_signal_lights_first_pad_immediately() {
        let mut e = engine();
        e.start_game();
        let r = e.play_signal();
        assert_eq!(r.phase_change, Some(PhaseChange { from: Phase::Ready, to: Phase::Playing }));
        assert!(e.state().highlighted_pad.is_none());

        let r = e.advance_to(Duration::ZERO);
        assert_eq!(r.sounds, vec![SoundCue::Pad(p(0))]);
        assert_eq!(e.state().highlighted_pad, Some(p(0)));
        assert_eq!(e.state().playback_cursor, 1);
    }

    #[test]
    fn highlight_clears_before_next_step() {
        let mut e = engine();
        e.start_game();
        e.play_signal();
        e.advance_to(ms(0));
        e.advance_to(ms(449));
        assert_eq!(e.state().highlighted_pad, Some(p(0)));
        e.advance_to(ms(450));
        assert!(e.state().highlighted_pad.is_none());
        e.advance_to(ms(600));
        assert_eq!(e.state().highlighted_pad, Some(p(1)));
    }

    #[test]
    fn input_phase_after_last_step_gap() {
        let mut e = engine();
        e.start_game();
        e.play_signal();
        e.advance_to(ms(1799));
        assert_eq!(e.state().phase, Phase::Playing);
        let r = e.advance_to(ms(1800));
        assert!(r.entered(Phase::Input));
        assert_eq!(e.pending_steps(), 0);
    }

    #[test]
    fn one_big_jump_replays_every_step() {
        let mut e = engine();
        e.start_game();
        e.play_signal();
        let r = e.advance_to(ms(10_000));
        assert_eq!(
            r.sounds,
            vec![SoundCue::Pad(p(0)), SoundCue::Pad(p(1)), SoundCue::Pad(p(2))]
        );
        assert_eq!(e.state().phase, Phase::Input);
    }

    #[test]
    fn inputs_emit_click_and_outcome_cues() {
        let mut e = engine();
        e.start_game();
        e.play_signal();
        e.fast_forward();

        assert_eq!(e.submit_input(p(0)).sounds, vec![SoundCue::Click]);
        let r = e.submit_input(p(3));
        assert_eq!(r.sounds, vec![SoundCue::Click, SoundCue::Fail]);
        assert!(r.entered(Phase::Fail));
    }

    #[test]
    fn success_auto_advances_after_delay() {
        let mut e = engine();
        e.start_game();
        e.play_signal();
        e.fast_forward();
        let entered_at = e.now();
        for id in 0..3 {
            e.submit_input(p(id));
        }
        assert_eq!(e.state().phase, Phase::Success);
        assert_eq!(e.next_due(), Some(entered_at + ms(900)));

        e.advance_to(entered_at + ms(899));
        assert_eq!(e.state().phase, Phase::Success);
        e.advance_to(entered_at + ms(900));
        assert_eq!(e.state().phase, Phase::Ready);
        assert_eq!(e.state().round, 2);
    }

    #[test]
    fn reset_mid_playback_cancels_pending_steps() {
        let mut e = engine();
        e.start_game();
        e.play_signal();
        e.advance_to(ms(700));
        assert!(e.pending_steps() > 0);

        e.reset();
        assert_eq!(e.pending_steps(), 0);
        let r = e.advance_to(ms(60_000));
        assert!(!r.handled);
        assert_eq!(*e.state(), GameState::default());
    }

    #[test]
    fn reset_during_success_cancels_advance() {
        let mut e = engine();
        e.start_game();
        e.play_signal();
        e.fast_forward();
        for id in 0..3 {
            e.submit_input(p(id));
        }
        e.reset();
        e.start_game();
        e.advance_by(ms(5_000));
        assert_eq!(e.state().phase, Phase::Ready);
        assert_eq!(e.state().round, 1);
    }

    #[test]
    fn ignored_intent_reports_unhandled() {
        let mut e = engine();
        let r = e.submit_input(p(0));
        assert!(!r.handled);
        assert!(r.sounds.is_empty());
        assert_eq!(*e.state(), GameState::default());
    }

    #[test]
    fn fast_forward_to_stops_at_phase() {
        let mut e = engine();
        e.start_game();
        e.play_signal();
        e.fast_forward_to(Phase::Input);
        assert_eq!(e.state().phase, Phase::Input);
        assert_eq!(e.now(), ms(1800));
    }
}
