use super::View;
use crate::ui::layout::{center_rect, AGAIN_BUTTON};
use crate::ui::{Color, Rect, RenderBuf, Style};

const HOW_TO_PLAY: [&str; 3] = [
    "Watch the signal pattern play on the pads.",
    "Then repeat the pattern by tapping the pads in the same order.",
    "Complete 6 rounds to win!",
];

pub(super) fn render_complete(view: &View, buf: &mut RenderBuf) {
    let layout = view.layout;
    let rect = layout.overlay;
    buf.fill(rect, Style::new().bg(Color::PANEL));
    let inner = buf.draw_block(rect, "", Style::new().fg(Color::SUCCESS).bg(Color::PANEL));

    let row = |dy: u16| Rect::new(inner.x, inner.y + dy, inner.width, 1);
    buf.draw_centered(row(1), &[("Complete!", Style::new().fg(Color::SUCCESS).bg(Color::PANEL).bold())]);
    buf.draw_centered(
        row(2),
        &[("You've decoded all signals", Style::new().fg(Color::WHITE).bg(Color::PANEL))],
    );
    buf.draw_line(
        layout.overlay_button,
        &[(AGAIN_BUTTON, Style::new().fg(Color::WHITE).bg(Color::ACCENT).bold())],
    );
}

pub(super) fn render_help(view: &View, buf: &mut RenderBuf) {
    let area = view.layout.area;
    let height = HOW_TO_PLAY.len() as u16 + view.help_keys.len() as u16 + 7;
    let rect = center_rect(area, 68, height);
    buf.fill(rect, Style::new().bg(Color::PANEL));
    let inner = buf.draw_block(rect, " How to Play ", Style::new().fg(Color::SIGNAL).bg(Color::PANEL));

    let text = Style::new().fg(Color::WHITE).bg(Color::PANEL);
    let key_style = Style::new().fg(Color::SIGNAL).bg(Color::PANEL).bold();
    let desc_style = Style::new().fg(Color::GRAY).bg(Color::PANEL);

    let mut y = inner.y + 1;
    for line in HOW_TO_PLAY {
        buf.draw_line(Rect::new(inner.x + 2, y, inner.width.saturating_sub(2), 1), &[(line, text)]);
        y += 1;
    }
    y += 1;

    let bottom = inner.y + inner.height;
    for (keys, desc) in view.help_keys {
        if y + 2 >= bottom {
            break;
        }
        let key_formatted = format!("{:<16}", keys);
        buf.draw_line(
            Rect::new(inner.x + 2, y, inner.width.saturating_sub(2), 1),
            &[(&key_formatted, key_style), (desc, desc_style)],
        );
        y += 1;
    }

    let footer = Rect::new(inner.x, bottom.saturating_sub(1), inner.width, 1);
    buf.draw_centered(footer, &[("[Esc] or click to close", Style::new().fg(Color::DARK_GRAY).bg(Color::PANEL))]);
}

#[cfg(test)]
mod tests {
    use super::super::test_support::draw;
    use super::super::Visuals;
    use decode_types::{GameState, Phase};

    #[test]
    fn complete_overlay_congratulates() {
        let state = GameState {
            phase: Phase::Complete,
            round: 6,
            ..GameState::default()
        };
        let text = draw(&state, false, Visuals::default());
        assert!(text.contains("Complete!"));
        assert!(text.contains("You've decoded all signals"));
        assert!(text.contains("Play Again"));
    }

    #[test]
    fn help_lists_the_rules() {
        let state = GameState {
            phase: Phase::Ready,
            round: 1,
            ..GameState::default()
        };
        let text = draw(&state, true, Visuals::default());
        assert!(text.contains("Watch the signal pattern play on the pads."));
        assert!(text.contains("Then repeat the pattern by tapping the pads in the same order."));
        assert!(text.contains("close"));
    }
}
