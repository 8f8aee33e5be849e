//! Pure rendering of a game snapshot into a buffer.
//!
//! Nothing here reads clocks or mutates state; the runtime passes in
//! everything a frame needs as a [`View`].

mod game;
mod hud;
mod overlay;
mod start;

use decode_types::{GameState, Phase};

use crate::ui::status_bar::StatusMessage;
use crate::ui::{Color, RenderBuf, ScreenLayout, Style};

/// Transient effects, each as the remaining fraction of its window (1.0 just
/// started, 0.0 over).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Visuals {
    pub burst: Option<f32>,
    pub shake: Option<f32>,
}

impl Visuals {
    /// Horizontal panel offset while the fail shake runs.
    pub fn shake_offset(&self) -> i16 {
        match self.shake {
            Some(left) if left > 0.0 => {
                let tick = ((1.0 - left) * 8.0) as i32;
                if tick % 2 == 0 { 1 } else { -1 }
            }
            _ => 0,
        }
    }
}

pub struct View<'a> {
    pub state: &'a GameState,
    pub layout: &'a ScreenLayout,
    pub sound_enabled: bool,
    pub show_help: bool,
    pub visuals: Visuals,
    pub status: Option<&'a StatusMessage>,
    /// (keys, description) rows for the help overlay.
    pub help_keys: &'a [(String, String)],
}

pub fn chip_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Playing => "PLAYING",
        Phase::Input => "YOUR TURN",
        Phase::Success => "SUCCESS",
        Phase::Fail => "FAIL",
        Phase::Intro | Phase::Ready | Phase::Complete => "READY",
    }
}

pub fn subtitle(phase: Phase) -> &'static str {
    match phase {
        Phase::Playing => "Observe the signal",
        Phase::Input => "Repeat the signal",
        _ => "Ready to play",
    }
}

pub fn render(view: &View, buf: &mut RenderBuf) {
    let layout = view.layout;
    buf.fill(layout.area, Style::new().bg(Color::BACKGROUND));

    hud::render_hud(view, buf);

    if view.state.phase == Phase::Intro {
        start::render_start(view, buf);
    } else {
        game::render_panel(view, buf);
        if view.state.phase == Phase::Complete {
            overlay::render_complete(view, buf);
        }
    }

    hud::render_footer(view, buf);

    if view.show_help {
        overlay::render_help(view, buf);
    }
}
