//! Synthetic cue generation. All generators return mono samples in -1.0..=1.0
//! with a linear fade-out so clips end silent.

use std::f32::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

pub const TONE_SECS: f32 = 0.15;
pub const CLICK_SECS: f32 = 0.05;
pub const SUCCESS_SECS: f32 = 0.4;
pub const FAIL_SECS: f32 = 0.2;

/// C5 and E5.
const CHIME: (f32, f32) = (523.25, 659.25);

pub fn sample_count(secs: f32, sample_rate: u32) -> usize {
    (sample_rate as f32 * secs).floor() as usize
}

fn fade(i: usize, n: usize) -> f32 {
    1.0 - i as f32 / n as f32
}

/// Pad tone: sine at `frequency`, amplitude 0.3.
pub fn tone(frequency: f32, secs: f32, sample_rate: u32) -> Vec<f32> {
    let n = sample_count(secs, sample_rate);
    (0..n)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            (TAU * frequency * t).sin() * 0.3 * fade(i, n)
        })
        .collect()
}

/// Short burst of positive noise. Seeded so every render is identical.
pub fn click(sample_rate: u32) -> Vec<f32> {
    let n = sample_count(CLICK_SECS, sample_rate);
    let mut rng = StdRng::seed_from_u64(0xC11C);
    (0..n)
        .map(|i| rng.gen::<f32>() * 0.3 * fade(i, n))
        .collect()
}

/// Two-note chime.
pub fn success(sample_rate: u32) -> Vec<f32> {
    let n = sample_count(SUCCESS_SECS, sample_rate);
    (0..n)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            let s = ((TAU * CHIME.0 * t).sin() + (TAU * CHIME.1 * t).sin()) / 2.0;
            s * 0.3 * fade(i, n)
        })
        .collect()
}

/// Low thud sweeping down from 100 Hz.
pub fn fail(sample_rate: u32) -> Vec<f32> {
    let n = sample_count(FAIL_SECS, sample_rate);
    (0..n)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            let frequency = 100.0 * fade(i, n);
            (TAU * frequency * t).sin() * 0.4 * fade(i, n)
        })
        .collect()
}

/// Convert to 16-bit PCM, truncating toward negative infinity and clamping.
pub fn to_pcm16(samples: &[f32]) -> Vec<i16> {
    samples
        .iter()
        .map(|s| (s * 32767.0).floor().clamp(-32768.0, 32767.0) as i16)
        .collect()
}

pub fn from_pcm16(samples: &[i16]) -> Vec<f32> {
    samples.iter().map(|&s| s as f32 / 32768.0).collect()
}
