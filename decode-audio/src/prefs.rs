//! Sound on/off preference, the only state that survives a restart.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub trait PreferenceStore {
    /// Stored sound preference. Enabled when nothing usable is stored.
    fn load_sound_enabled(&self) -> bool;

    fn save_sound_enabled(&mut self, enabled: bool) -> std::io::Result<()>;
}

#[derive(Serialize, Deserialize, Default)]
struct PreferencesFile {
    sound_enabled: Option<bool>,
}

/// TOML-backed store at `~/.config/signal-decode/preferences.toml`.
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("signal-decode")
            .join("preferences.toml")
    }

    pub fn at_default_path() -> Self {
        Self::new(Self::default_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferences {
    fn load_sound_enabled(&self) -> bool {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return true,
            Err(e) => {
                log::warn!(target: "prefs", "could not read {}: {}", self.path.display(), e);
                return true;
            }
        };
        match toml::from_str::<PreferencesFile>(&contents) {
            Ok(file) => file.sound_enabled.unwrap_or(true),
            Err(e) => {
                log::warn!(target: "prefs", "ignoring malformed {}: {}", self.path.display(), e);
                true
            }
        }
    }

    fn save_sound_enabled(&mut self, enabled: bool) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = PreferencesFile {
            sound_enabled: Some(enabled),
        };
        let contents = toml::to_string(&file)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(&self.path, contents)
    }
}

/// In-process store for tests and `--mute`-style sessions that must not persist.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    pub value: Option<bool>,
    pub saves: usize,
}

impl PreferenceStore for MemoryPreferences {
    fn load_sound_enabled(&self) -> bool {
        self.value.unwrap_or(true)
    }

    fn save_sound_enabled(&mut self, enabled: bool) -> std::io::Result<()> {
        self.value = Some(enabled);
        self.saves += 1;
        Ok(())
    }
}
