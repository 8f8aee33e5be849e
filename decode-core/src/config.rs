use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use decode_types::PAD_COUNT;

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    timing: TimingConfig,
    #[serde(default)]
    game: GameConfig,
    #[serde(default)]
    audio: AudioConfig,
    #[serde(default)]
    runtime: RuntimeConfig,
}

#[derive(Deserialize, Default)]
struct TimingConfig {
    highlight_ms: Option<u64>,
    gap_ms: Option<u64>,
    advance_ms: Option<u64>,
    success_burst_ms: Option<u64>,
    fail_shake_ms: Option<u64>,
}

#[derive(Deserialize, Default)]
struct GameConfig {
    pad_count: Option<usize>,
    resample_attempts: Option<u32>,
    seed: Option<u64>,
}

#[derive(Deserialize, Default)]
struct AudioConfig {
    sample_rate: Option<u32>,
    master_volume: Option<f32>,
}

#[derive(Deserialize, Default)]
struct RuntimeConfig {
    session_log: Option<bool>,
}

/// Delays that drive playback, auto-advance and the transient visual effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub highlight: Duration,
    pub gap: Duration,
    pub advance: Duration,
    pub success_burst: Duration,
    pub fail_shake: Duration,
}

impl Timing {
    /// Time between two playback steps.
    pub fn step_interval(&self) -> Duration {
        self.highlight + self.gap
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            highlight: Duration::from_millis(450),
            gap: Duration::from_millis(150),
            advance: Duration::from_millis(900),
            success_burst: Duration::from_millis(600),
            fail_shake: Duration::from_millis(300),
        }
    }
}

pub struct Config {
    timing: TimingConfig,
    game: GameConfig,
    audio: AudioConfig,
    runtime: RuntimeConfig,
}

impl Config {
    /// Embedded defaults merged with `~/.config/signal-decode/config.toml` if present.
    pub fn load() -> Self {
        match user_config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::embedded(),
        }
    }

    /// Embedded defaults merged with the file at `path`. A missing or malformed
    /// file leaves the defaults untouched.
    pub fn load_from(path: &Path) -> Self {
        let mut config = Self::embedded();
        if !path.exists() {
            return config;
        }
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                Ok(user) => config.merge(user),
                Err(e) => {
                    log::warn!(target: "config", "ignoring malformed config {}: {}", path.display(), e)
                }
            },
            Err(e) => {
                log::warn!(target: "config", "could not read config {}: {}", path.display(), e)
            }
        }
        config
    }

    /// Only the embedded defaults.
    pub fn embedded() -> Self {
        let base: ConfigFile =
            toml::from_str(DEFAULT_CONFIG).expect("Failed to parse embedded config.toml");
        Config {
            timing: base.timing,
            game: base.game,
            audio: base.audio,
            runtime: base.runtime,
        }
    }

    fn merge(&mut self, user: ConfigFile) {
        merge_timing(&mut self.timing, user.timing);
        merge_game(&mut self.game, user.game);
        merge_audio(&mut self.audio, user.audio);
        if user.runtime.session_log.is_some() {
            self.runtime.session_log = user.runtime.session_log;
        }
    }

    pub fn timing(&self) -> Timing {
        let fallback = Timing::default();
        let ms = |v: Option<u64>, d: Duration| v.map(Duration::from_millis).unwrap_or(d);
        Timing {
            highlight: ms(self.timing.highlight_ms, fallback.highlight),
            gap: ms(self.timing.gap_ms, fallback.gap),
            advance: ms(self.timing.advance_ms, fallback.advance),
            success_burst: ms(self.timing.success_burst_ms, fallback.success_burst),
            fail_shake: ms(self.timing.fail_shake_ms, fallback.fail_shake),
        }
    }

    /// Number of pads patterns draw from (clamped to 1..=6).
    pub fn pad_count(&self) -> usize {
        self.game.pad_count.unwrap_or(PAD_COUNT).clamp(1, PAD_COUNT)
    }

    /// Draws per position before a triple repeat is accepted (at least 1).
    pub fn resample_attempts(&self) -> u32 {
        self.game.resample_attempts.unwrap_or(10).max(1)
    }

    pub fn seed(&self) -> Option<u64> {
        self.game.seed
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.game.seed = Some(seed);
    }

    pub fn sample_rate(&self) -> u32 {
        self.audio.sample_rate.unwrap_or(44_100).clamp(8_000, 192_000)
    }

    pub fn master_volume(&self) -> f32 {
        self.audio.master_volume.unwrap_or(1.0).clamp(0.0, 1.0)
    }

    pub fn session_log_enabled(&self) -> bool {
        self.runtime.session_log.unwrap_or(false)
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("signal-decode").join("config.toml"))
}

fn merge_timing(base: &mut TimingConfig, user: TimingConfig) {
    if user.highlight_ms.is_some() {
        base.highlight_ms = user.highlight_ms;
    }
    if user.gap_ms.is_some() {
        base.gap_ms = user.gap_ms;
    }
    if user.advance_ms.is_some() {
        base.advance_ms = user.advance_ms;
    }
    if user.success_burst_ms.is_some() {
        base.success_burst_ms = user.success_burst_ms;
    }
    if user.fail_shake_ms.is_some() {
        base.fail_shake_ms = user.fail_shake_ms;
    }
}

fn merge_game(base: &mut GameConfig, user: GameConfig) {
    if user.pad_count.is_some() {
        base.pad_count = user.pad_count;
    }
    if user.resample_attempts.is_some() {
        base.resample_attempts = user.resample_attempts;
    }
    if user.seed.is_some() {
        base.seed = user.seed;
    }
}

fn merge_audio(base: &mut AudioConfig, user: AudioConfig) {
    if user.sample_rate.is_some() {
        base.sample_rate = user.sample_rate;
    }
    if user.master_volume.is_some() {
        base.master_volume = user.master_volume;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_defaults() {
        let config = Config::embedded();
        let timing = config.timing();
        assert_eq!(timing, Timing::default());
        assert_eq!(timing.step_interval(), Duration::from_millis(600));
        assert_eq!(config.pad_count(), 6);
        assert_eq!(config.resample_attempts(), 10);
        assert_eq!(config.seed(), None);
        assert_eq!(config.sample_rate(), 44_100);
        assert!(!config.session_log_enabled());
    }

    #[test]
    fn user_file_overrides_single_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[timing]\nadvance_ms = 100\n\n[game]\nseed = 7\npad_count = 4").unwrap();

        let config = Config::load_from(file.path());
        let timing = config.timing();
        assert_eq!(timing.advance, Duration::from_millis(100));
        assert_eq!(timing.highlight, Duration::from_millis(450));
        assert_eq!(config.seed(), Some(7));
        assert_eq!(config.pad_count(), 4);
        assert_eq!(config.resample_attempts(), 10);
    }

    #[test]
    fn malformed_user_file_is_ignored() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[timing\nhighlight_ms = ").unwrap();
        let config = Config::load_from(file.path());
        assert_eq!(config.timing(), Timing::default());
    }

    #[test]
    fn missing_user_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml"));
        assert_eq!(config.pad_count(), 6);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[game]\npad_count = 40\nresample_attempts = 0\n\n[audio]\nmaster_volume = 3.0"
        )
        .unwrap();
        let config = Config::load_from(file.path());
        assert_eq!(config.pad_count(), 6);
        assert_eq!(config.resample_attempts(), 1);
        assert_eq!(config.master_volume(), 1.0);
    }
}
