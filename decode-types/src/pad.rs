use crate::PadId;

pub const PAD_COUNT: usize = 6;

/// A player-tappable target with a fixed label and tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pad {
    pub id: PadId,
    pub label: &'static str,
    pub frequency: f32,
}

pub const PADS: [Pad; PAD_COUNT] = [
    Pad { id: PadId(0), label: "◉", frequency: 220.0 },
    Pad { id: PadId(1), label: "◇", frequency: 277.18 },
    Pad { id: PadId(2), label: "▢", frequency: 329.63 },
    Pad { id: PadId(3), label: "△", frequency: 392.0 },
    Pad { id: PadId(4), label: "○", frequency: 493.88 },
    Pad { id: PadId(5), label: "◆", frequency: 587.33 },
];

/// Look up the table entry for a pad id.
pub fn pad(id: PadId) -> &'static Pad {
    &PADS[id.index()]
}
