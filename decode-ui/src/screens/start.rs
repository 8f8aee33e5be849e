use super::View;
use crate::ui::layout::{START_BUTTON, TITLE};
use crate::ui::{Color, RenderBuf, Style};

pub(super) fn render_start(view: &View, buf: &mut RenderBuf) {
    let layout = view.layout;

    let spaced: String = TITLE
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    buf.draw_centered(layout.start_title, &[(&spaced, Style::new().fg(Color::SIGNAL).bold())]);
    buf.draw_centered(
        layout.start_tagline,
        &[("Observe. Remember. Repeat.", Style::new().fg(Color::GRAY))],
    );
    buf.draw_line(
        layout.start_button,
        &[(START_BUTTON, Style::new().fg(Color::WHITE).bg(Color::ACCENT).bold())],
    );
}
