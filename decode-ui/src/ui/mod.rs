pub mod action_id;
pub mod input;
pub mod keybindings;
pub mod layout;
pub mod ratatui_impl;
pub mod render;
pub mod status_bar;
pub mod style;

pub use action_id::UiAction;
pub use input::{AppEvent, InputEvent, InputSource, KeyCode, Modifiers, MouseButton, MouseEvent, MouseEventKind};
pub use keybindings::Keymap;
pub use layout::ScreenLayout;
pub use ratatui_impl::RatatuiBackend;
pub use render::{Rect, RenderBuf};
pub use style::{Color, Style};
