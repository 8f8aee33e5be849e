//! Input processing: event polling, key/mouse resolution, intent dispatch.

use std::time::{Duration, Instant};

use decode_types::{Dispatcher, GameAction, PadId, Phase};

use super::AppRuntime;
use crate::ui::status_bar::StatusLevel;
use crate::ui::{AppEvent, InputSource, MouseButton, MouseEvent, MouseEventKind, ScreenLayout, UiAction};

/// What a resolved key or click asks the runtime to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    Start,
    PlaySignal,
    Submit(PadId),
    Retry,
    Reset,
    ToggleSound,
    ToggleHelp,
    CloseHelp,
    Quit,
    Nothing,
}

/// Map a UI action to a command given the phase and whether help is open.
/// The help overlay swallows everything except quit, help and sound toggles.
pub(crate) fn resolve(action: UiAction, phase: Phase, show_help: bool) -> Command {
    match action {
        UiAction::Quit => return Command::Quit,
        UiAction::ToggleHelp => return Command::ToggleHelp,
        UiAction::ToggleSound => return Command::ToggleSound,
        _ => {}
    }

    if show_help {
        return match action {
            UiAction::Dismiss | UiAction::Confirm => Command::CloseHelp,
            _ => Command::Nothing,
        };
    }

    match action {
        UiAction::Reset => Command::Reset,
        UiAction::Confirm => match phase {
            Phase::Intro => Command::Start,
            Phase::Ready => Command::PlaySignal,
            Phase::Fail => Command::Retry,
            Phase::Complete => Command::Reset,
            Phase::Playing | Phase::Input | Phase::Success => Command::Nothing,
        },
        UiAction::Dismiss => Command::Nothing,
        pad_action => match (phase, pad_action.pad()) {
            (Phase::Input, Some(pad)) => Command::Submit(pad),
            _ => Command::Nothing,
        },
    }
}

impl AppRuntime {
    /// Process input events. Returns true if the app should quit.
    pub(crate) fn process_events(
        &mut self,
        backend: &mut crate::ui::RatatuiBackend,
    ) -> std::io::Result<bool> {
        let mut events_processed = 0u8;

        loop {
            let timeout = if events_processed == 0 {
                self.poll_timeout()
            } else {
                Duration::ZERO
            };
            let Some(app_event) = backend.poll_event(timeout) else {
                break;
            };
            events_processed += 1;

            let action = match app_event {
                AppEvent::Resize => {
                    self.render_needed = true;
                    None
                }
                AppEvent::Key(event) if event.is_repeat => None,
                AppEvent::Key(event) => self.keymap.lookup(&event),
                AppEvent::Mouse(mouse_event) => self.action_for_mouse(&mouse_event),
            };

            if let Some(action) = action {
                self.advance_to(self.wall_time());
                if self.handle_action(action) {
                    return Ok(true);
                }
            }

            if events_processed >= 16 {
                break;
            }
        }
        Ok(false)
    }

    /// Wait no longer than the next scheduled step or animation frame.
    fn poll_timeout(&self) -> Duration {
        let frame = Duration::from_millis(16);
        match self.engine.next_due() {
            Some(due) => due.saturating_sub(self.wall_time()).min(frame),
            None => frame,
        }
    }

    pub(crate) fn action_for_mouse(&self, event: &MouseEvent) -> Option<UiAction> {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        if self.show_help {
            return Some(UiAction::Dismiss);
        }
        mouse_action(&self.layout, event, self.engine.state().phase, self.pad_count)
    }

    /// Apply one UI action. Returns true when the app should quit.
    pub(crate) fn handle_action(&mut self, action: UiAction) -> bool {
        let phase = self.engine.state().phase;
        let command = resolve(action, phase, self.show_help);
        log::debug!(target: "runtime", "{} in {} -> {:?}", action.as_str(), phase, command);

        let game_action = match command {
            Command::Quit => return true,
            Command::Nothing => return false,
            Command::ToggleHelp => {
                self.show_help = !self.show_help;
                self.render_needed = true;
                return false;
            }
            Command::CloseHelp => {
                self.show_help = false;
                self.render_needed = true;
                return false;
            }
            Command::ToggleSound => {
                match self.sound.toggle() {
                    Ok(enabled) => {
                        let text = if enabled { "Sound on" } else { "Sound off" };
                        self.status_bar.push(text, StatusLevel::Info, Instant::now());
                    }
                    Err(_) => self.status_bar.push(
                        "Could not save sound preference",
                        StatusLevel::Warning,
                        Instant::now(),
                    ),
                }
                self.render_needed = true;
                return false;
            }
            Command::Start => GameAction::StartGame,
            Command::PlaySignal => GameAction::PlaySignal,
            Command::Submit(pad) if pad.index() < self.pad_count => GameAction::SubmitInput(pad),
            Command::Submit(_) => return false,
            Command::Retry => GameAction::Retry,
            Command::Reset => GameAction::Reset,
        };
        let result = self.engine.dispatch(&game_action);
        self.apply_result(result);
        false
    }
}

fn mouse_action(layout: &ScreenLayout, event: &MouseEvent, phase: Phase, pad_count: usize) -> Option<UiAction> {
    let hit = layout.hit_test(
        event.column,
        event.row,
        phase == Phase::Intro,
        phase == Phase::Complete,
    )?;
    let action = hit.action();
    match action.pad() {
        Some(pad) if pad.index() >= pad_count => None,
        _ => Some(action),
    }
}
