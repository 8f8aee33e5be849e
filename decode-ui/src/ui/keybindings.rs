use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::action_id::UiAction;
use super::{InputEvent, KeyCode};

/// Raw TOML structure for the keybindings file
#[derive(Deserialize)]
struct KeybindingConfig {
    #[allow(dead_code)]
    version: u32,
    bindings: Vec<RawBinding>,
}

/// A single binding entry from TOML
#[derive(Deserialize)]
struct RawBinding {
    key: String,
    action: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPattern {
    Char(char),
    Ctrl(char),
    Key(KeyCode),
}

impl KeyPattern {
    pub fn matches(&self, event: &InputEvent) -> bool {
        let mods = event.modifiers;
        match *self {
            // Shift is folded into the character ('?' is Shift+/)
            KeyPattern::Char(c) => event.key == KeyCode::Char(c) && !mods.ctrl && !mods.alt,
            KeyPattern::Ctrl(c) => event.key == KeyCode::Char(c) && mods.ctrl,
            KeyPattern::Key(k) => event.key == k && !mods.ctrl && !mods.alt,
        }
    }

    /// Human readable form for the help overlay.
    pub fn display(&self) -> String {
        match self {
            KeyPattern::Char(' ') => "Space".to_string(),
            KeyPattern::Char(c) => c.to_string(),
            KeyPattern::Ctrl(c) => format!("Ctrl+{}", c),
            KeyPattern::Key(KeyCode::Enter) => "Enter".to_string(),
            KeyPattern::Key(KeyCode::Escape) => "Esc".to_string(),
            KeyPattern::Key(KeyCode::F(n)) => format!("F{}", n),
            KeyPattern::Key(k) => format!("{:?}", k),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyBinding {
    pub pattern: KeyPattern,
    pub action: UiAction,
    pub description: String,
}

/// Ordered key-to-action table. The first matching binding wins.
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: Vec<KeyBinding>,
}

impl Keymap {
    pub fn from_bindings(bindings: Vec<KeyBinding>) -> Self {
        Self { bindings }
    }

    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }

    pub fn lookup(&self, event: &InputEvent) -> Option<UiAction> {
        self.bindings
            .iter()
            .find(|b| b.pattern.matches(event))
            .map(|b| b.action)
    }

    /// Display strings of every key bound to `action`, in file order.
    pub fn keys_for(&self, action: UiAction) -> Vec<String> {
        self.bindings
            .iter()
            .filter(|b| b.action == action)
            .map(|b| b.pattern.display())
            .collect()
    }
}

/// Parse a key notation string into a KeyPattern.
///
/// Supported formats:
/// - `"q"` → Char('q')
/// - `"Space"` → Char(' ')
/// - `"Enter"` → Key(KeyCode::Enter)
/// - `"Ctrl+c"` → Ctrl('c')
/// - `"F1"` → Key(KeyCode::F(1))
///
/// Returns `None` for unrecognised key names (e.g. from a malformed user config).
fn parse_key(s: &str) -> Option<KeyPattern> {
    if let Some(rest) = s.strip_prefix("Ctrl+") {
        let mut chars = rest.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(KeyPattern::Ctrl(c)),
            _ => None,
        }
    } else if s == "Space" {
        Some(KeyPattern::Char(' '))
    } else {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(KeyPattern::Char(c)),
            _ => parse_named_key(s).map(KeyPattern::Key),
        }
    }
}

/// Parse a named key string (e.g., "Up", "Enter", "F1") into a KeyCode.
fn parse_named_key(s: &str) -> Option<KeyCode> {
    match s {
        "Up" => Some(KeyCode::Up),
        "Down" => Some(KeyCode::Down),
        "Left" => Some(KeyCode::Left),
        "Right" => Some(KeyCode::Right),
        "Enter" => Some(KeyCode::Enter),
        "Escape" | "Esc" => Some(KeyCode::Escape),
        "Backspace" => Some(KeyCode::Backspace),
        "Tab" => Some(KeyCode::Tab),
        _ if s.starts_with('F') => s[1..].parse::<u8>().ok().map(KeyCode::F),
        _ => None,
    }
}

/// Embedded default keybindings TOML
const DEFAULT_KEYBINDINGS: &str = include_str!("../../keybindings.toml");

/// Load keybindings: embedded default, replaced by the user file when one
/// exists and parses.
pub fn load_keybindings() -> Keymap {
    match user_keybindings_path() {
        Some(path) => load_with_override(&path),
        None => embedded_keymap(),
    }
}

pub fn embedded_keymap() -> Keymap {
    let config: KeybindingConfig =
        toml::from_str(DEFAULT_KEYBINDINGS).expect("Failed to parse embedded keybindings.toml");
    build_keymap(&config.bindings)
}

fn load_with_override(path: &Path) -> Keymap {
    if !path.exists() {
        return embedded_keymap();
    }
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            log::warn!(target: "ui::keybindings", "could not read {}: {}", path.display(), e);
            return embedded_keymap();
        }
    };
    match toml::from_str::<KeybindingConfig>(&contents) {
        Ok(user) => {
            let keymap = build_keymap(&user.bindings);
            if keymap.bindings().is_empty() {
                log::warn!(target: "ui::keybindings", "{} has no usable bindings, using defaults", path.display());
                return embedded_keymap();
            }
            log::info!(target: "ui::keybindings", "loaded {} bindings from {}", keymap.bindings().len(), path.display());
            keymap
        }
        Err(e) => {
            log::warn!(target: "ui::keybindings", "ignoring malformed {}: {}", path.display(), e);
            embedded_keymap()
        }
    }
}

fn user_keybindings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("signal-decode").join("keybindings.toml"))
}

fn build_keymap(raw: &[RawBinding]) -> Keymap {
    let bindings = raw
        .iter()
        .filter_map(|b| {
            let pattern = match parse_key(&b.key) {
                Some(p) => p,
                None => {
                    log::warn!(target: "ui::keybindings", "ignoring unknown key '{}' in keybindings", b.key);
                    return None;
                }
            };
            match UiAction::from_str(&b.action) {
                Some(action) => Some(KeyBinding {
                    pattern,
                    action,
                    description: b.description.clone(),
                }),
                None => {
                    log::warn!(target: "ui::keybindings", "ignoring unknown action '{}'", b.action);
                    None
                }
            }
        })
        .collect();
    Keymap::from_bindings(bindings)
}
