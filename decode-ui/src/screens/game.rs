use decode_types::{pad, GameState, PadId, Phase, FINAL_ROUND};

use super::{chip_label, subtitle, View, Visuals};
use crate::ui::style::phase_color;
use crate::ui::{Color, Rect, RenderBuf, Style};

/// How a pad is drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum PadLook {
    Idle,
    Lit(Color),
    Marked,
    Wrong,
}

pub(super) fn pad_look(state: &GameState, id: PadId, visuals: &Visuals) -> PadLook {
    match state.phase {
        Phase::Playing if state.highlighted_pad == Some(id) => PadLook::Lit(Color::SIGNAL),
        Phase::Input if state.last_input() == Some(id) => PadLook::Lit(Color::VIOLET),
        Phase::Input if state.is_correct_entry(id) => PadLook::Marked,
        Phase::Fail => {
            let wrong = state
                .mismatch_index()
                .and_then(|i| state.user_input.get(i).copied());
            if wrong == Some(id) {
                PadLook::Wrong
            } else if state.is_correct_entry(id) {
                PadLook::Marked
            } else {
                PadLook::Idle
            }
        }
        Phase::Success if state.pattern.contains(&id) => match visuals.burst {
            Some(left) if left > 0.0 => PadLook::Lit(Color::PANEL.mix(Color::SUCCESS, 0.4 + 0.6 * left)),
            _ => PadLook::Marked,
        },
        _ => PadLook::Idle,
    }
}

fn shifted(rect: Rect, dx: i16) -> Rect {
    Rect {
        x: (rect.x as i32 + dx as i32).max(0) as u16,
        ..rect
    }
}

/// The central panel: status chip, subtitle, pad grid and action row.
pub(super) fn render_panel(view: &View, buf: &mut RenderBuf) {
    let state = view.state;
    let layout = view.layout;
    let dx = view.visuals.shake_offset();
    let accent = phase_color(state.phase);

    let panel = shifted(layout.panel, dx);
    buf.fill(panel, Style::new().bg(Color::PANEL));
    buf.draw_block(panel, "", Style::new().fg(accent).bg(Color::PANEL));

    let on_panel = |color: Color| Style::new().fg(color).bg(Color::PANEL);

    let chip = format!(" ● {} ", chip_label(state.phase));
    let chip_style = Style::new().fg(Color::BLACK).bg(accent).bold();
    match view.visuals.burst {
        Some(left) if left > 0.0 && state.phase == Phase::Success => {
            let spread = " ".repeat(1 + ((1.0 - left) * 6.0) as usize);
            let spark = on_panel(Color::SUCCESS).bold();
            buf.draw_centered(
                shifted(layout.chip, dx),
                &[
                    ("✦", spark),
                    (&spread, on_panel(Color::SUCCESS)),
                    (&chip, chip_style),
                    (&spread, on_panel(Color::SUCCESS)),
                    ("✦", spark),
                ],
            );
        }
        _ => buf.draw_centered(shifted(layout.chip, dx), &[(&chip, chip_style)]),
    }

    buf.draw_centered(
        shifted(layout.subtitle, dx),
        &[(subtitle(state.phase), on_panel(Color::WHITE))],
    );

    if state.round > 0 {
        let info = format!(
            "Round {} of {}  ·  {} signals",
            state.round,
            FINAL_ROUND,
            state.pattern.len()
        );
        let row = Rect {
            y: layout.subtitle.y + 1,
            ..shifted(layout.subtitle, dx)
        };
        buf.draw_centered(row, &[(&info, on_panel(Color::DARK_GRAY))]);
    }

    for (id, rect) in &layout.pads {
        render_pad(*id, shifted(*rect, dx), pad_look(state, *id, &view.visuals), buf);
    }

    render_action_row(state, shifted(layout.action, dx), buf);
}

fn render_pad(id: PadId, rect: Rect, look: PadLook, buf: &mut RenderBuf) {
    let (border, fill, label_fg, mark) = match look {
        PadLook::Idle => (Color::PAD_IDLE, Color::PANEL, Color::WHITE, None),
        PadLook::Lit(color) => (color, color, Color::BLACK, None),
        PadLook::Marked => (Color::SUCCESS, Color::PANEL, Color::WHITE, Some("✓")),
        PadLook::Wrong => (Color::FAIL, Color::PANEL.mix(Color::FAIL, 0.35), Color::WHITE, Some("✗")),
    };

    buf.fill(rect, Style::new().bg(fill));
    buf.draw_block(rect, "", Style::new().fg(border).bg(fill));

    let label_row = Rect::new(rect.x + 1, rect.y + 1, rect.width.saturating_sub(2), 1);
    buf.draw_centered(label_row, &[(pad(id).label, Style::new().fg(label_fg).bg(fill).bold())]);

    let key = (id.get() + 1).to_string();
    let (hint, hint_style) = match mark {
        Some(m) => (m, Style::new().fg(border).bg(fill).bold()),
        None => (key.as_str(), Style::new().fg(Color::DARK_GRAY).bg(fill)),
    };
    let hint_row = Rect { y: rect.y + 2, ..label_row };
    buf.draw_centered(hint_row, &[(hint, hint_style)]);
}

fn render_action_row(state: &GameState, row: Rect, buf: &mut RenderBuf) {
    let on_panel = |color: Color| Style::new().fg(color).bg(Color::PANEL);
    match state.phase {
        Phase::Ready => buf.draw_centered(row, &[("[ Play Signal ]", on_panel(Color::ACCENT).bold())]),
        Phase::Fail => buf.draw_centered(row, &[("[ Try Again ]", on_panel(Color::FAIL).bold())]),
        Phase::Playing => {
            let done = state.playback_cursor.min(state.pattern.len());
            let progress: String = (0..state.pattern.len())
                .map(|i| if i < done { '▪' } else { '·' })
                .collect();
            buf.draw_centered(row, &[(&progress, on_panel(Color::SIGNAL))]);
        }
        Phase::Input => {
            let progress = format!("{} / {}", state.user_input.len(), state.pattern.len());
            buf.draw_centered(row, &[(&progress, on_panel(Color::VIOLET))]);
        }
        Phase::Success => buf.draw_centered(row, &[("Signal decoded", on_panel(Color::SUCCESS))]),
        Phase::Intro | Phase::Complete => {}
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::draw;
    use super::*;

    fn p(id: u8) -> PadId {
        PadId::new(id).unwrap()
    }

    fn state(phase: Phase, pattern: &[u8], input: &[u8]) -> GameState {
        GameState {
            phase,
            round: 1,
            pattern: pattern.iter().map(|&i| p(i)).collect(),
            user_input: input.iter().map(|&i| p(i)).collect(),
            ..GameState::default()
        }
    }

    #[test]
    fn playback_lights_the_highlighted_pad() {
        let mut s = state(Phase::Playing, &[0, 1, 2], &[]);
        s.highlighted_pad = Some(p(1));
        let v = Visuals::default();
        assert_eq!(pad_look(&s, p(1), &v), PadLook::Lit(Color::SIGNAL));
        assert_eq!(pad_look(&s, p(0), &v), PadLook::Idle);
    }

    #[test]
    fn input_lights_last_press_and_marks_correct_entries() {
        let s = state(Phase::Input, &[0, 1, 2], &[0, 1]);
        let v = Visuals::default();
        assert_eq!(pad_look(&s, p(1), &v), PadLook::Lit(Color::VIOLET));
        assert_eq!(pad_look(&s, p(0), &v), PadLook::Marked);
        assert_eq!(pad_look(&s, p(2), &v), PadLook::Idle);
    }

    #[test]
    fn fail_shows_the_wrong_press() {
        let s = state(Phase::Fail, &[0, 1, 2], &[0, 4]);
        let v = Visuals::default();
        assert_eq!(pad_look(&s, p(4), &v), PadLook::Wrong);
        assert_eq!(pad_look(&s, p(0), &v), PadLook::Marked);
        assert_eq!(pad_look(&s, p(1), &v), PadLook::Idle);
    }

    #[test]
    fn success_glows_during_the_burst() {
        let s = state(Phase::Success, &[0, 1, 2], &[0, 1, 2]);
        let burst = Visuals { burst: Some(1.0), shake: None };
        assert_eq!(pad_look(&s, p(2), &burst), PadLook::Lit(Color::SUCCESS));
        assert_eq!(pad_look(&s, p(2), &Visuals::default()), PadLook::Marked);
        assert_eq!(pad_look(&s, p(5), &burst), PadLook::Idle);
    }

    #[test]
    fn input_panel_text() {
        let text = draw(&state(Phase::Input, &[0, 1, 2], &[0]), false, Visuals::default());
        assert!(text.contains("YOUR TURN"));
        assert!(text.contains("Repeat the signal"));
        assert!(text.contains("1 / 3"));
        assert!(text.contains("Round 1 of 6"));
        for label in ["◉", "◇", "▢", "△", "○", "◆"] {
            assert!(text.contains(label), "missing {}", label);
        }
    }

    #[test]
    fn ready_and_fail_offer_their_action() {
        let text = draw(&state(Phase::Ready, &[0, 1, 2], &[]), false, Visuals::default());
        assert!(text.contains("READY"));
        assert!(text.contains("Play Signal"));
        let shaking = Visuals { burst: None, shake: Some(0.5) };
        let text = draw(&state(Phase::Fail, &[0, 1, 2], &[3]), false, shaking);
        assert!(text.contains("FAIL"));
        assert!(text.contains("Try Again"));
    }

    #[test]
    fn playing_shows_subtitle_and_progress() {
        let mut s = state(Phase::Playing, &[0, 1, 2], &[]);
        s.playback_cursor = 1;
        let text = draw(&s, false, Visuals::default());
        assert!(text.contains("PLAYING"));
        assert!(text.contains("Observe the signal"));
        assert!(text.contains("▪··"));
    }
}
