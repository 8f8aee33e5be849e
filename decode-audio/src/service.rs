//! SoundService: the one object the front end talks to for audio.
//!
//! Constructed explicitly at startup and owned by the runtime. Holds the
//! enabled flag (loaded once from the preference store, saved on toggle), the
//! rendered bank, and the output the clips are sent to.

use decode_types::SoundCue;

use crate::bank::SoundBank;
use crate::output::AudioOutput;
use crate::prefs::PreferenceStore;

pub struct SoundService {
    enabled: bool,
    store: Box<dyn PreferenceStore>,
    output: Box<dyn AudioOutput>,
    bank: Option<SoundBank>,
    master_volume: f32,
}

impl SoundService {
    pub fn new(store: Box<dyn PreferenceStore>, output: Box<dyn AudioOutput>) -> Self {
        let enabled = store.load_sound_enabled();
        log::info!(target: "audio", "sound {}", if enabled { "on" } else { "off" });
        Self {
            enabled,
            store,
            output,
            bank: None,
            master_volume: 1.0,
        }
    }

    pub fn with_master_volume(mut self, volume: f32) -> Self {
        self.master_volume = volume.clamp(0.0, 1.0);
        self
    }

    /// Render the bank at the output's rate. Cheap to call repeatedly.
    pub fn init(&mut self) {
        if self.bank.is_none() {
            self.bank = Some(SoundBank::render(self.output.sample_rate()));
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.bank.is_some()
    }

    pub fn bank(&self) -> Option<&SoundBank> {
        self.bank.as_ref()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set and persist the preference. The new value applies to this session
    /// even when the save fails; the error is returned so the caller can tell
    /// the player it will not survive a restart.
    pub fn set_enabled(&mut self, enabled: bool) -> std::io::Result<()> {
        self.enabled = enabled;
        self.store.save_sound_enabled(enabled).map_err(|e| {
            log::warn!(target: "audio", "could not save sound preference: {}", e);
            e
        })
    }

    /// Flip the preference and return the new value.
    pub fn toggle(&mut self) -> std::io::Result<bool> {
        let enabled = !self.enabled;
        self.set_enabled(enabled)?;
        Ok(enabled)
    }

    /// Silence this session without touching the stored preference.
    pub fn mute_session(&mut self) {
        self.enabled = false;
    }

    /// Play a cue. Does nothing while disabled or before `init`.
    pub fn play(&mut self, cue: SoundCue) {
        if !self.enabled {
            return;
        }
        let Some(clip) = self.bank.as_ref().and_then(|b| b.clip(cue)) else {
            return;
        };
        let samples = clip.mixed(self.master_volume);
        self.output.play(samples);
    }

    pub fn play_all(&mut self, cues: &[SoundCue]) {
        for &cue in cues {
            self.play(cue);
        }
    }
}
