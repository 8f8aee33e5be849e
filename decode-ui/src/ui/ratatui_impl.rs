//! Terminal session: crossterm raw mode, alternate screen and mouse capture,
//! with frames drawn through ratatui.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode as CtKeyCode, KeyEvent,
        KeyEventKind, KeyModifiers, MouseButton as CtMouseButton, MouseEvent as CtMouseEvent,
        MouseEventKind as CtMouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, buffer::Buffer, style::Style as RatatuiStyle, Terminal};

use super::style::Color;
use super::{AppEvent, InputEvent, InputSource, KeyCode, Modifiers, MouseButton, MouseEvent, MouseEventKind};

pub struct RatatuiBackend {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl RatatuiBackend {
    /// Open stdout. The terminal is left untouched until [`start`](Self::start).
    pub fn new() -> io::Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self {
            terminal,
            active: false,
        })
    }

    pub fn start(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        self.active = true;
        self.terminal.hide_cursor()?;
        self.terminal.clear()
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn stop(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()
    }

    /// Draw one frame. `paint` receives the full-screen buffer already
    /// filled with the game background.
    pub fn draw(&mut self, paint: impl FnOnce(&mut Buffer)) -> io::Result<()> {
        self.terminal.draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();
            buf.set_style(area, RatatuiStyle::default().bg(Color::BACKGROUND.into()));
            paint(buf);
        })?;
        Ok(())
    }
}

impl Drop for RatatuiBackend {
    fn drop(&mut self) {
        // An error unwinding out of run() must not leave the shell in raw mode
        if let Err(e) = self.stop() {
            log::warn!(target: "ui", "could not restore terminal: {}", e);
        }
    }
}

impl InputSource for RatatuiBackend {
    fn poll_event(&mut self, timeout: Duration) -> Option<AppEvent> {
        let mut wait = timeout;
        while event::poll(wait).ok()? {
            if let Some(app_event) = translate(event::read().ok()?) {
                return Some(app_event);
            }
            // Releases, drags, scrolls and focus changes are drained without waiting
            wait = Duration::ZERO;
        }
        None
    }
}

fn translate(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => translate_key(key).map(AppEvent::Key),
        Event::Mouse(mouse) => translate_mouse(mouse).map(AppEvent::Mouse),
        Event::Resize(_, _) => Some(AppEvent::Resize),
        _ => None,
    }
}

fn translate_key(event: KeyEvent) -> Option<InputEvent> {
    let key = match event.code {
        CtKeyCode::Char(c) => KeyCode::Char(c),
        CtKeyCode::Enter => KeyCode::Enter,
        CtKeyCode::Esc => KeyCode::Escape,
        CtKeyCode::Backspace => KeyCode::Backspace,
        CtKeyCode::Tab => KeyCode::Tab,
        CtKeyCode::Up => KeyCode::Up,
        CtKeyCode::Down => KeyCode::Down,
        CtKeyCode::Left => KeyCode::Left,
        CtKeyCode::Right => KeyCode::Right,
        CtKeyCode::F(n) => KeyCode::F(n),
        _ => return None,
    };
    Some(InputEvent {
        key,
        modifiers: Modifiers {
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            alt: event.modifiers.contains(KeyModifiers::ALT),
        },
        is_repeat: event.kind == KeyEventKind::Repeat,
    })
}

fn translate_mouse(event: CtMouseEvent) -> Option<MouseEvent> {
    let button = |b: CtMouseButton| match b {
        CtMouseButton::Left => MouseButton::Left,
        CtMouseButton::Right => MouseButton::Right,
        CtMouseButton::Middle => MouseButton::Middle,
    };
    let kind = match event.kind {
        CtMouseEventKind::Down(b) => MouseEventKind::Down(button(b)),
        CtMouseEventKind::Up(b) => MouseEventKind::Up(button(b)),
        _ => return None,
    };
    Some(MouseEvent {
        kind,
        column: event.column,
        row: event.row,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: CtKeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent::new_with_kind(code, modifiers, kind))
    }

    fn mouse(kind: CtMouseEventKind) -> Event {
        Event::Mouse(CtMouseEvent {
            kind,
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn key_presses_and_repeats_come_through() {
        let Some(AppEvent::Key(press)) =
            translate(key(CtKeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press))
        else {
            panic!("expected a key event");
        };
        assert_eq!(press.key, KeyCode::Char('c'));
        assert!(press.modifiers.ctrl);
        assert!(!press.is_repeat);

        let Some(AppEvent::Key(repeat)) =
            translate(key(CtKeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Repeat))
        else {
            panic!("expected a key event");
        };
        assert!(repeat.is_repeat);
    }

    #[test]
    fn releases_and_unknown_keys_are_dropped() {
        assert!(translate(key(CtKeyCode::Char('1'), KeyModifiers::NONE, KeyEventKind::Release)).is_none());
        assert!(translate(key(CtKeyCode::Home, KeyModifiers::NONE, KeyEventKind::Press)).is_none());
    }

    #[test]
    fn only_clicks_survive_mouse_translation() {
        let Some(AppEvent::Mouse(down)) = translate(mouse(CtMouseEventKind::Down(CtMouseButton::Left)))
        else {
            panic!("expected a mouse event");
        };
        assert_eq!(down.kind, MouseEventKind::Down(MouseButton::Left));
        assert_eq!((down.column, down.row), (7, 3));

        assert!(translate(mouse(CtMouseEventKind::Moved)).is_none());
        assert!(translate(mouse(CtMouseEventKind::ScrollDown)).is_none());
        assert!(matches!(translate(Event::Resize(80, 24)), Some(AppEvent::Resize)));
    }
}
