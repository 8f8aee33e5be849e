//! App runtime coordinator.
//!
//! Splits the event loop into focused pieces:
//! - `input` — event polling, key/mouse resolution, intent dispatch
//! - `feedback` — routing dispatch results to sound and visual effects
//! - `render` — frame throttle and drawing

mod feedback;
mod input;
mod render;

use std::time::{Duration, Instant};

use decode_audio::SoundService;
use decode_core::engine::GameEngine;

use crate::ui::status_bar::StatusBar;
use crate::ui::{Keymap, RatatuiBackend, Rect, ScreenLayout, UiAction};

pub(crate) use feedback::Effects;

/// Top-level runtime that owns the game session and drives the event loop.
pub struct AppRuntime {
    pub(crate) engine: GameEngine,
    pub(crate) sound: SoundService,
    pub(crate) keymap: Keymap,
    pub(crate) help_keys: Vec<(String, String)>,
    pub(crate) status_bar: StatusBar,
    pub(crate) effects: Effects,
    pub(crate) show_help: bool,
    pub(crate) pad_count: usize,
    pub(crate) layout: ScreenLayout,

    // Per-frame state
    pub(crate) clock_origin: Instant,
    pub(crate) render_needed: bool,
    pub(crate) last_render_time: Instant,
}

impl AppRuntime {
    pub fn new(engine: GameEngine, mut sound: SoundService, keymap: Keymap, pad_count: usize) -> Self {
        sound.init();
        let help_keys = help_rows(&keymap, pad_count);
        Self {
            engine,
            sound,
            keymap,
            help_keys,
            status_bar: StatusBar::new(),
            effects: Effects::default(),
            show_help: false,
            pad_count,
            layout: ScreenLayout::compute(Rect::new(0, 0, 80, 24), pad_count),
            clock_origin: Instant::now(),
            render_needed: true,
            last_render_time: Instant::now(),
        }
    }

    /// Engine time corresponding to the wall clock.
    pub(crate) fn wall_time(&self) -> Duration {
        self.clock_origin.elapsed()
    }

    /// Main event loop.
    pub fn run(&mut self, backend: &mut RatatuiBackend) -> std::io::Result<()> {
        loop {
            self.advance_to(self.wall_time());

            if self.process_events(backend)? {
                break;
            }

            self.maybe_render(backend)?;
        }
        log::info!(target: "runtime", "quit in phase {}", self.engine.state().phase);
        Ok(())
    }
}

/// Rows for the help overlay: one per action, the six pads folded into one.
pub(crate) fn help_rows(keymap: &Keymap, pad_count: usize) -> Vec<(String, String)> {
    let describe = |action: UiAction| {
        keymap
            .bindings()
            .iter()
            .find(|b| b.action == action)
            .map(|b| b.description.clone())
            .unwrap_or_default()
    };
    let row = |action: UiAction| {
        let keys = keymap.keys_for(action);
        (!keys.is_empty()).then(|| (keys.join(" / "), describe(action)))
    };

    let mut rows = Vec::new();
    rows.extend(row(UiAction::Confirm));

    let pad_keys: Vec<String> = decode_types::PadId::all()
        .take(pad_count)
        .filter_map(|pad| keymap.keys_for(UiAction::for_pad(pad)).into_iter().next())
        .collect();
    if !pad_keys.is_empty() {
        rows.push((pad_keys.join(" "), "Press a pad".to_string()));
    }

    for action in [UiAction::ToggleSound, UiAction::ToggleHelp, UiAction::Reset, UiAction::Quit] {
        rows.extend(row(action));
    }
    rows
}
