use ratatui::buffer::Buffer;
use ratatui::layout::Alignment;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

pub use ratatui::layout::Rect;

use super::style::Style;

/// Wraps a ratatui `Buffer` and accepts our `Style`/`Color` types natively.
pub struct RenderBuf<'a> {
    buf: &'a mut Buffer,
}

impl<'a> RenderBuf<'a> {
    pub fn new(buf: &'a mut Buffer) -> Self {
        Self { buf }
    }

    /// Paint every cell of `area` with `style`, clearing its symbols.
    pub fn fill(&mut self, area: Rect, style: Style) {
        let area = area.intersection(self.buf.area);
        let rat_style = ratatui::style::Style::from(style);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = self.buf.cell_mut((x, y)) {
                    cell.set_char(' ').set_style(rat_style);
                }
            }
        }
    }

    /// Draw a rounded bordered block with an optional title. Returns the inner `Rect`.
    pub fn draw_block(&mut self, area: Rect, title: &str, border_style: Style) -> Rect {
        let area = area.intersection(self.buf.area);
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(ratatui::style::Style::from(border_style));
        if !title.is_empty() {
            block = block
                .title(title)
                .title_style(ratatui::style::Style::from(border_style.bold()));
        }
        let inner = block.inner(area);
        block.render(area, self.buf);
        inner
    }

    /// Draw styled spans on a single line within the given area.
    pub fn draw_line(&mut self, area: Rect, spans: &[(&str, Style)]) {
        self.draw_aligned(area, spans, Alignment::Left);
    }

    /// Draw styled spans centered on the first row of `area`.
    pub fn draw_centered(&mut self, area: Rect, spans: &[(&str, Style)]) {
        self.draw_aligned(area, spans, Alignment::Center);
    }

    fn draw_aligned(&mut self, area: Rect, spans: &[(&str, Style)], alignment: Alignment) {
        let area = area.intersection(self.buf.area);
        if area.is_empty() {
            return;
        }
        let rat_spans: Vec<Span> = spans
            .iter()
            .map(|(text, style)| Span::styled(*text, ratatui::style::Style::from(*style)))
            .collect();
        Paragraph::new(Line::from(rat_spans))
            .alignment(alignment)
            .render(Rect { height: 1, ..area }, self.buf);
    }
}

#[cfg(test)]
pub(crate) fn buffer_text(buf: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            if let Some(cell) = buf.cell((x, y)) {
                out.push_str(cell.symbol());
            }
        }
        out.push('\n');
    }
    out
}
