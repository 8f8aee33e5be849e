//! Typed action identifiers for the keybinding system.

use decode_types::PadId;

/// Generates an action enum with string conversion both ways.
macro_rules! define_action_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident => $str:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant, )*
        }
        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $str, )*
                }
            }
            pub fn from_str(s: &str) -> Option<Self> {
                match s {
                    $( $str => Some($name::$variant), )*
                    _ => None,
                }
            }
        }
    }
}

define_action_enum! {
    /// Everything a key or click can ask of the front end.
    pub enum UiAction {
        Confirm => "confirm",
        Pad1 => "pad_1",
        Pad2 => "pad_2",
        Pad3 => "pad_3",
        Pad4 => "pad_4",
        Pad5 => "pad_5",
        Pad6 => "pad_6",
        ToggleSound => "toggle_sound",
        ToggleHelp => "toggle_help",
        Dismiss => "dismiss",
        Reset => "reset",
        Quit => "quit",
    }
}

impl UiAction {
    /// The pad a `pad_N` action presses.
    pub fn pad(&self) -> Option<PadId> {
        let id = match self {
            UiAction::Pad1 => 0,
            UiAction::Pad2 => 1,
            UiAction::Pad3 => 2,
            UiAction::Pad4 => 3,
            UiAction::Pad5 => 4,
            UiAction::Pad6 => 5,
            _ => return None,
        };
        PadId::new(id)
    }

    pub fn for_pad(pad: PadId) -> Self {
        match pad.get() {
            0 => UiAction::Pad1,
            1 => UiAction::Pad2,
            2 => UiAction::Pad3,
            3 => UiAction::Pad4,
            4 => UiAction::Pad5,
            _ => UiAction::Pad6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for name in ["confirm", "pad_3", "toggle_sound", "quit"] {
            assert_eq!(UiAction::from_str(name).unwrap().as_str(), name);
        }
        assert_eq!(UiAction::from_str("pad_7"), None);
    }

    #[test]
    fn pad_actions_map_to_pads() {
        assert_eq!(UiAction::Pad1.pad(), PadId::new(0));
        assert_eq!(UiAction::Pad6.pad(), PadId::new(5));
        assert_eq!(UiAction::Confirm.pad(), None);
        for pad in PadId::all() {
            assert_eq!(UiAction::for_pad(pad).pad(), Some(pad));
        }
    }
}
