use decode_types::Phase;
use ratatui::style::{Color as RatatuiColor, Modifier, Style as RatatuiStyle};

/// RGB color. Construct with `Color::new(r, g, b)` or use the palette
/// constants below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const GRAY: Color = Color::new(148, 163, 184);
    pub const DARK_GRAY: Color = Color::new(71, 85, 105);

    // Game palette
    pub const BACKGROUND: Color = Color::new(10, 10, 26);
    pub const PANEL: Color = Color::new(22, 22, 46);
    pub const SIGNAL: Color = Color::new(0, 212, 255);   // Cyan - playback, title
    pub const VIOLET: Color = Color::new(168, 85, 247);  // Input phase
    pub const SUCCESS: Color = Color::new(16, 185, 129); // Emerald
    pub const FAIL: Color = Color::new(239, 68, 68);     // Red
    pub const ACCENT: Color = Color::new(139, 92, 246);  // Buttons, round dots
    pub const PAD_IDLE: Color = Color::new(51, 65, 85);

    /// Linear blend towards `other`; `t` of 0.0 is `self`.
    pub fn mix(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color::new(lerp(self.r, other.r), lerp(self.g, other.g), lerp(self.b, other.b))
    }
}

/// Status chip color per phase.
pub fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Playing => Color::SIGNAL,
        Phase::Input => Color::VIOLET,
        Phase::Success => Color::SUCCESS,
        Phase::Fail => Color::FAIL,
        Phase::Intro | Phase::Ready | Phase::Complete => Color::GRAY,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            bold: false,
            dim: false,
        }
    }

    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

// --- Conversions to ratatui types ---

impl From<Color> for RatatuiColor {
    fn from(c: Color) -> Self {
        RatatuiColor::Rgb(c.r, c.g, c.b)
    }
}

impl From<Style> for RatatuiStyle {
    fn from(s: Style) -> Self {
        let mut rs = RatatuiStyle::default();
        if let Some(fg) = s.fg {
            rs = rs.fg(RatatuiColor::from(fg));
        }
        if let Some(bg) = s.bg {
            rs = rs.bg(RatatuiColor::from(bg));
        }
        if s.bold {
            rs = rs.add_modifier(Modifier::BOLD);
        }
        if s.dim {
            rs = rs.add_modifier(Modifier::DIM);
        }
        rs
    }
}
