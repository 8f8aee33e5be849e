//! Screen geometry shared by rendering and mouse hit testing.

use decode_types::{PadId, PADS, PAD_COUNT};

use super::action_id::UiAction;
use super::render::Rect;

pub const PAD_W: u16 = 14;
pub const PAD_H: u16 = 4;
const PAD_GAP_X: u16 = 2;
const PAD_GAP_Y: u16 = 1;
const PAD_COLUMNS: usize = 3;

const PANEL_W: u16 = 52;
const PANEL_H: u16 = 17;

pub const TITLE: &str = "SIGNAL DECODE";
pub const HELP_TOGGLE: &str = "[?]";
pub const SOUND_ON: &str = "[Sound on ]";
pub const SOUND_OFF: &str = "[Sound off]";
pub const RESET_BUTTON: &str = "[ Reset ]";
pub const START_BUTTON: &str = "[   Start   ]";
pub const AGAIN_BUTTON: &str = "[ Play Again ]";

/// Center a rect of `width x height` within the given `area`.
/// Clamps dimensions to available space with padding to prevent overflow.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let max_w = area.width.saturating_sub(2);
    let max_h = area.height.saturating_sub(2);
    let w = width.min(max_w);
    let h = height.min(max_h);

    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// A single centered row of `width` cells at `y`.
fn centered_row(area: Rect, y: u16, width: u16) -> Rect {
    let w = width.min(area.width);
    Rect::new(area.x + (area.width - w) / 2, y, w, 1)
}

/// Clickable regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Pad(PadId),
    Title,
    SoundToggle,
    HelpToggle,
    Reset,
    /// Start button, panel action button or completion button.
    Confirm,
}

impl Hit {
    pub fn action(self) -> UiAction {
        match self {
            Hit::Pad(pad) => UiAction::for_pad(pad),
            Hit::Title => UiAction::Reset,
            Hit::SoundToggle => UiAction::ToggleSound,
            Hit::HelpToggle => UiAction::ToggleHelp,
            Hit::Reset => UiAction::Reset,
            Hit::Confirm => UiAction::Confirm,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenLayout {
    pub area: Rect,
    pub hud: Rect,
    pub title: Rect,
    pub rounds: Rect,
    pub sound_toggle: Rect,
    pub help_toggle: Rect,
    pub status: Rect,
    pub footer: Rect,
    pub reset_button: Rect,
    pub panel: Rect,
    pub chip: Rect,
    pub subtitle: Rect,
    pub pads: Vec<(PadId, Rect)>,
    pub action: Rect,
    pub start_title: Rect,
    pub start_tagline: Rect,
    pub start_button: Rect,
    pub overlay: Rect,
    pub overlay_button: Rect,
}

impl ScreenLayout {
    /// Geometry for `area` showing the first `pad_count` pads.
    pub fn compute(area: Rect, pad_count: usize) -> Self {
        let pad_count = pad_count.clamp(1, PAD_COUNT);
        let bottom = area.y + area.height.saturating_sub(1);

        let hud = Rect::new(area.x, area.y, area.width, area.height.min(1));
        let title = Rect::new(area.x + 1, area.y, (TITLE.len() as u16).min(area.width), 1);
        let help_toggle = Rect::new(
            (area.x + area.width).saturating_sub(HELP_TOGGLE.len() as u16 + 1),
            area.y,
            HELP_TOGGLE.len() as u16,
            1,
        );
        let sound_toggle = Rect::new(
            help_toggle.x.saturating_sub(SOUND_ON.len() as u16 + 1),
            area.y,
            SOUND_ON.len() as u16,
            1,
        );
        let rounds = centered_row(area, area.y, 11);

        let footer = Rect::new(area.x, bottom, area.width, 1);
        let reset_button = centered_row(area, bottom, RESET_BUTTON.len() as u16);
        let status = Rect::new(area.x + 1, bottom.saturating_sub(1), area.width.saturating_sub(2), 1);

        let body = Rect::new(area.x, area.y + 1, area.width, area.height.saturating_sub(3));
        let panel = center_rect(body, PANEL_W, PANEL_H);
        let inner = Rect::new(
            panel.x + 1,
            panel.y + 1,
            panel.width.saturating_sub(2),
            panel.height.saturating_sub(2),
        );
        let chip = centered_row(inner, inner.y + 1, inner.width);
        let subtitle = centered_row(inner, inner.y + 2, inner.width);
        let pads = pad_rects(inner, inner.y + 4, pad_count);
        let action = centered_row(inner, inner.y + 14, 20);

        let mid = body.y + body.height / 2;
        let start_title = centered_row(area, mid.saturating_sub(3), area.width);
        let start_tagline = centered_row(area, mid.saturating_sub(1), area.width);
        let start_button = centered_row(area, mid + 2, START_BUTTON.len() as u16);

        let overlay = center_rect(area, 38, 8);
        let overlay_button = centered_row(overlay, overlay.y + overlay.height.saturating_sub(2), AGAIN_BUTTON.len() as u16);

        Self {
            area,
            hud,
            title,
            rounds,
            sound_toggle,
            help_toggle,
            status,
            footer,
            reset_button,
            panel,
            chip,
            subtitle,
            pads,
            action,
            start_title,
            start_tagline,
            start_button,
            overlay,
            overlay_button,
        }
    }

    #[cfg(test)]
    pub fn pad_rect(&self, pad: PadId) -> Option<Rect> {
        self.pads.iter().find(|(id, _)| *id == pad).map(|(_, r)| *r)
    }

    /// What sits under (`column`, `row`). `intro` selects the start screen,
    /// `overlay` the completion box.
    pub fn hit_test(&self, column: u16, row: u16, intro: bool, overlay: bool) -> Option<Hit> {
        let inside = |r: &Rect| {
            column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
        };

        if inside(&self.title) {
            return Some(Hit::Title);
        }
        if inside(&self.sound_toggle) {
            return Some(Hit::SoundToggle);
        }
        if inside(&self.help_toggle) {
            return Some(Hit::HelpToggle);
        }
        if inside(&self.reset_button) {
            return Some(Hit::Reset);
        }
        if intro {
            return inside(&self.start_button).then_some(Hit::Confirm);
        }
        if overlay {
            return inside(&self.overlay_button).then_some(Hit::Confirm);
        }
        if inside(&self.action) {
            return Some(Hit::Confirm);
        }
        self.pads
            .iter()
            .find(|(_, r)| inside(r))
            .map(|(id, _)| Hit::Pad(*id))
    }
}

fn pad_rects(inner: Rect, top: u16, pad_count: usize) -> Vec<(PadId, Rect)> {
    let columns = pad_count.min(PAD_COLUMNS) as u16;
    let grid_w = columns * PAD_W + (columns - 1) * PAD_GAP_X;
    let left = inner.x + inner.width.saturating_sub(grid_w) / 2;

    PADS.iter()
        .take(pad_count)
        .enumerate()
        .map(|(i, pad)| {
            let col = (i % PAD_COLUMNS) as u16;
            let row = (i / PAD_COLUMNS) as u16;
            let rect = Rect::new(
                left + col * (PAD_W + PAD_GAP_X),
                top + row * (PAD_H + PAD_GAP_Y),
                PAD_W,
                PAD_H,
            );
            (pad.id, rect)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ScreenLayout {
        ScreenLayout::compute(Rect::new(0, 0, 80, 24), PAD_COUNT)
    }

    fn p(id: u8) -> PadId {
        PadId::new(id).unwrap()
    }

    #[test]
    fn center_rect_clamps() {
        let r = center_rect(Rect::new(0, 0, 20, 10), 100, 100);
        assert_eq!(r, Rect::new(1, 1, 18, 8));
        let r = center_rect(Rect::new(0, 0, 20, 10), 4, 2);
        assert_eq!(r, Rect::new(8, 4, 4, 2));
    }

    #[test]
    fn pads_form_a_three_by_two_grid() {
        let l = layout();
        assert_eq!(l.pads.len(), 6);
        let a = l.pad_rect(p(0)).unwrap();
        let b = l.pad_rect(p(1)).unwrap();
        let d = l.pad_rect(p(3)).unwrap();
        assert_eq!(a.y, b.y);
        assert_eq!(b.x, a.x + PAD_W + 2);
        assert_eq!(d.x, a.x);
        assert_eq!(d.y, a.y + PAD_H + 1);
    }

    #[test]
    fn pads_stay_inside_the_panel() {
        let l = layout();
        for (_, r) in &l.pads {
            assert!(r.x > l.panel.x && r.right() < l.panel.right());
            assert!(r.y > l.panel.y && r.bottom() < l.panel.bottom());
        }
        assert!(l.action.y < l.panel.bottom() - 1);
    }

    #[test]
    fn reduced_pad_count_shrinks_the_grid() {
        let l = ScreenLayout::compute(Rect::new(0, 0, 80, 24), 2);
        assert_eq!(l.pads.len(), 2);
        assert!(l.pad_rect(p(2)).is_none());
    }

    #[test]
    fn hit_test_finds_pads_and_controls() {
        let l = layout();
        for (id, r) in &l.pads {
            assert_eq!(l.hit_test(r.x + 1, r.y + 1, false, false), Some(Hit::Pad(*id)));
        }
        assert_eq!(l.hit_test(l.title.x, 0, false, false), Some(Hit::Title));
        assert_eq!(l.hit_test(l.sound_toggle.x + 2, 0, false, false), Some(Hit::SoundToggle));
        assert_eq!(l.hit_test(l.help_toggle.x + 1, 0, true, false), Some(Hit::HelpToggle));
        assert_eq!(l.hit_test(l.reset_button.x, 23, false, false), Some(Hit::Reset));
        assert_eq!(l.hit_test(l.action.x, l.action.y, false, false), Some(Hit::Confirm));
        assert_eq!(l.hit_test(0, 12, false, false), None);
    }

    #[test]
    fn start_screen_and_overlay_hide_the_pads() {
        let l = layout();
        let pad = l.pad_rect(p(0)).unwrap();
        assert_eq!(l.hit_test(pad.x, pad.y, true, false), None);
        assert_eq!(l.hit_test(pad.x, pad.y, false, true), None);
        let start = l.start_button;
        assert_eq!(l.hit_test(start.x, start.y, true, false), Some(Hit::Confirm));
        let again = l.overlay_button;
        assert_eq!(l.hit_test(again.x, again.y, false, true), Some(Hit::Confirm));
    }

    #[test]
    fn hits_map_to_actions() {
        assert_eq!(Hit::Pad(p(4)).action(), UiAction::Pad5);
        assert_eq!(Hit::Title.action(), UiAction::Reset);
        assert_eq!(Hit::Confirm.action(), UiAction::Confirm);
    }
}
