use decode_types::FINAL_ROUND;

use super::View;
use crate::ui::layout::{HELP_TOGGLE, RESET_BUTTON, SOUND_OFF, SOUND_ON, TITLE};
use crate::ui::status_bar::StatusLevel;
use crate::ui::{Color, RenderBuf, Style};

/// Title, round indicators and the sound/help toggles.
pub(super) fn render_hud(view: &View, buf: &mut RenderBuf) {
    let layout = view.layout;
    buf.fill(layout.hud, Style::new().bg(Color::PANEL));

    buf.draw_line(
        layout.title,
        &[(TITLE, Style::new().fg(Color::SIGNAL).bg(Color::PANEL).bold())],
    );

    let lit = Style::new().fg(Color::ACCENT).bg(Color::PANEL);
    let unlit = Style::new().fg(Color::DARK_GRAY).bg(Color::PANEL);
    let gap = Style::new().bg(Color::PANEL);
    let mut spans = Vec::new();
    for round in 1..=FINAL_ROUND {
        if round > 1 {
            spans.push((" ", gap));
        }
        if round <= view.state.round {
            spans.push(("●", lit));
        } else {
            spans.push(("○", unlit));
        }
    }
    buf.draw_line(layout.rounds, &spans);

    let (label, color) = if view.sound_enabled {
        (SOUND_ON, Color::SIGNAL)
    } else {
        (SOUND_OFF, Color::GRAY)
    };
    buf.draw_line(layout.sound_toggle, &[(label, Style::new().fg(color).bg(Color::PANEL))]);

    let help_color = if view.show_help { Color::SIGNAL } else { Color::GRAY };
    buf.draw_line(
        layout.help_toggle,
        &[(HELP_TOGGLE, Style::new().fg(help_color).bg(Color::PANEL).bold())],
    );
}

/// Status message line and the Reset button.
pub(super) fn render_footer(view: &View, buf: &mut RenderBuf) {
    let layout = view.layout;
    buf.fill(layout.footer, Style::new().bg(Color::PANEL));

    if let Some(msg) = view.status {
        let color = match msg.level {
            StatusLevel::Info => Color::GRAY,
            StatusLevel::Warning => Color::FAIL,
        };
        buf.draw_centered(layout.status, &[(&msg.text, Style::new().fg(color))]);
    }

    buf.draw_line(
        layout.reset_button,
        &[(RESET_BUTTON, Style::new().fg(Color::GRAY).bg(Color::PANEL))],
    );
}
