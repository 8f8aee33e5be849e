//! Feedback routing: sound cues and transient visual effects from dispatch results.

use std::time::Duration;

use decode_core::config::Timing;
use decode_types::{DispatchResult, Phase};

use super::AppRuntime;
use crate::screens::Visuals;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Window {
    start: Duration,
    len: Duration,
}

impl Window {
    /// Remaining fraction at `now`, or None once the window has closed.
    fn remaining(&self, now: Duration) -> Option<f32> {
        let end = self.start + self.len;
        if now >= end || self.len.is_zero() {
            return None;
        }
        let left = end - now.max(self.start);
        Some(left.as_secs_f32() / self.len.as_secs_f32())
    }
}

/// Success burst and fail shake, timed on the engine clock.
#[derive(Debug, Default)]
pub(crate) struct Effects {
    burst: Option<Window>,
    shake: Option<Window>,
}

impl Effects {
    pub(crate) fn on_result(&mut self, result: &DispatchResult, now: Duration, timing: &Timing) {
        if result.entered(Phase::Success) {
            self.burst = Some(Window { start: now, len: timing.success_burst });
        }
        if result.entered(Phase::Fail) {
            self.shake = Some(Window { start: now, len: timing.fail_shake });
        }
        if result.entered(Phase::Intro) {
            self.burst = None;
            self.shake = None;
        }
    }

    pub(crate) fn visuals(&self, now: Duration) -> Visuals {
        Visuals {
            burst: self.burst.and_then(|w| w.remaining(now)),
            shake: self.shake.and_then(|w| w.remaining(now)),
        }
    }

    pub(crate) fn is_animating(&self, now: Duration) -> bool {
        self.visuals(now) != Visuals::default()
    }
}

impl AppRuntime {
    /// Move the engine clock forward and route whatever fired.
    pub(crate) fn advance_to(&mut self, now: Duration) {
        let result = self.engine.advance_to(now);
        if result.handled {
            self.apply_result(result);
        }
        if self.effects.is_animating(self.engine.now()) {
            self.render_needed = true;
        }
    }

    pub(crate) fn apply_result(&mut self, result: DispatchResult) {
        if !result.handled {
            return;
        }
        self.sound.play_all(&result.sounds);
        let timing = self.engine.timing();
        self.effects.on_result(&result, self.engine.now(), &timing);
        if let Some(change) = result.phase_change {
            log::debug!(target: "runtime", "phase {} -> {}", change.from, change.to);
        }
        self.render_needed = true;
    }
}
