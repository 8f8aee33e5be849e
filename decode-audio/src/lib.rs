//! # decode-audio
//!
//! Synthetic sound for Signal Decode: pad tones and feedback cues rendered
//! in process, WAV encoding, the persisted on/off preference, and the
//! `SoundService` the front end plays cues through.
//!
//! Device playback needs the `device-output` feature; without it the game
//! runs silently through [`output::NullOutput`].

pub mod bank;
pub mod output;
pub mod prefs;
pub mod service;
pub mod synth;
pub mod wav;

pub use bank::{Clip, SoundBank};
pub use output::{AudioOutput, NullOutput};
pub use prefs::{FilePreferences, MemoryPreferences, PreferenceStore};
pub use service::SoundService;

/// Open the best available output: the default device when built with
/// `device-output` and one is present, otherwise a silent sink.
pub fn default_output(sample_rate: u32) -> Box<dyn AudioOutput> {
    #[cfg(feature = "device-output")]
    {
        match output::DeviceOutput::open_default() {
            Ok(device) => return Box::new(device),
            Err(e) => log::warn!(target: "audio", "falling back to silent output: {}", e),
        }
    }
    Box::new(NullOutput::new(sample_rate))
}
