//! Pre-rendered clips for every sound cue.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use decode_types::{pad, SoundCue};

use crate::synth;
use crate::wav;

/// A rendered cue at a fixed sample rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Clip {
    pub samples: Vec<i16>,
    pub sample_rate: u32,
    pub volume: f32,
}

impl Clip {
    pub fn duration_secs(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate as f32
    }

    /// Float samples scaled by the clip volume and `gain`.
    pub fn mixed(&self, gain: f32) -> Vec<f32> {
        let scale = self.volume * gain;
        synth::from_pcm16(&self.samples)
            .into_iter()
            .map(|s| s * scale)
            .collect()
    }

    pub fn to_wav(&self) -> Result<Vec<u8>, String> {
        wav::encode_wav(&self.samples, self.sample_rate)
    }
}

/// Playback volume of each cue.
pub fn cue_volume(cue: SoundCue) -> f32 {
    match cue {
        SoundCue::Pad(_) => 0.6,
        SoundCue::Click => 0.4,
        SoundCue::Success => 0.7,
        SoundCue::Fail => 0.6,
    }
}

fn render(cue: SoundCue, sample_rate: u32) -> Vec<f32> {
    match cue {
        SoundCue::Pad(id) => synth::tone(pad(id).frequency, synth::TONE_SECS, sample_rate),
        SoundCue::Click => synth::click(sample_rate),
        SoundCue::Success => synth::success(sample_rate),
        SoundCue::Fail => synth::fail(sample_rate),
    }
}

pub struct SoundBank {
    clips: HashMap<SoundCue, Clip>,
    sample_rate: u32,
}

impl SoundBank {
    /// Render every cue at `sample_rate`.
    pub fn render(sample_rate: u32) -> Self {
        let clips = SoundCue::all()
            .into_iter()
            .map(|cue| {
                let clip = Clip {
                    samples: synth::to_pcm16(&render(cue, sample_rate)),
                    sample_rate,
                    volume: cue_volume(cue),
                };
                (cue, clip)
            })
            .collect();
        log::debug!(target: "audio", "rendered sound bank at {} Hz", sample_rate);
        Self { clips, sample_rate }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn clip(&self, cue: SoundCue) -> Option<&Clip> {
        self.clips.get(&cue)
    }

    /// Write every cue as `<name>.wav` into `dir`, creating it if needed.
    /// Returns the written paths in cue order.
    pub fn export_dir(&self, dir: &Path) -> Result<Vec<PathBuf>, String> {
        std::fs::create_dir_all(dir)
            .map_err(|e| format!("Failed to create {}: {}", dir.display(), e))?;
        let mut written = Vec::new();
        for cue in SoundCue::all() {
            let Some(clip) = self.clip(cue) else {
                continue;
            };
            let path = dir.join(format!("{}.wav", cue.name()));
            wav::write_wav(&path, &clip.samples, clip.sample_rate)?;
            written.push(path);
        }
        log::info!(target: "audio", "exported {} cues to {}", written.len(), dir.display());
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decode_types::PadId;

    #[test]
    fn every_cue_is_rendered() {
        let bank = SoundBank::render(22_050);
        for cue in SoundCue::all() {
            let clip = bank.clip(cue).unwrap();
            assert!(!clip.samples.is_empty());
            assert_eq!(clip.sample_rate, 22_050);
            assert_eq!(clip.volume, cue_volume(cue));
        }
    }

    #[test]
    fn pad_clips_differ_by_pitch() {
        let bank = SoundBank::render(22_050);
        let low = bank.clip(SoundCue::Pad(PadId::new(0).unwrap())).unwrap();
        let high = bank.clip(SoundCue::Pad(PadId::new(5).unwrap())).unwrap();
        assert_eq!(low.samples.len(), high.samples.len());
        assert_ne!(low.samples, high.samples);
        assert!((low.duration_secs() - synth::TONE_SECS).abs() < 0.001);
    }

    #[test]
    fn clip_wav_has_expected_sample_count() {
        let bank = SoundBank::render(44_100);
        let clip = bank.clip(SoundCue::Success).unwrap();
        let (spec, samples) = wav::decode_wav(&clip.to_wav().unwrap()).unwrap();
        assert_eq!(spec.sample_rate, 44_100);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(samples.len(), 17_640);
    }

    #[test]
    fn mixed_applies_volume_and_gain() {
        let clip = Clip {
            samples: vec![16384, -16384],
            sample_rate: 8000,
            volume: 0.5,
        };
        assert_eq!(clip.mixed(0.5), vec![0.125, -0.125]);
    }

    #[test]
    fn export_writes_one_file_per_cue() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("sounds");
        let bank = SoundBank::render(8_000);
        let paths = bank.export_dir(&out).unwrap();
        assert_eq!(paths.len(), SoundCue::all().len());
        assert!(out.join("pad-0.wav").exists());
        assert!(out.join("fail.wav").exists());
    }
}
