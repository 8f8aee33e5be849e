//! Where rendered cues go: nowhere, a test recorder, or the default device.

use std::collections::VecDeque;

/// Sink for mono float samples at a fixed rate.
pub trait AudioOutput {
    fn sample_rate(&self) -> u32;

    /// Start playing `samples` on top of whatever is already sounding.
    fn play(&mut self, samples: Vec<f32>);
}

/// Discards everything.
pub struct NullOutput {
    sample_rate: u32,
}

impl NullOutput {
    pub fn new(sample_rate: u32) -> Self {
        Self { sample_rate }
    }
}

impl AudioOutput for NullOutput {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn play(&mut self, _samples: Vec<f32>) {}
}

/// Sums overlapping voices into an interleaved output buffer.
#[derive(Debug, Default)]
pub struct Mixer {
    voices: VecDeque<Voice>,
}

#[derive(Debug)]
struct Voice {
    samples: Vec<f32>,
    pos: usize,
}

/// Upper bound on simultaneously sounding cues; the oldest is dropped first.
const MAX_VOICES: usize = 8;

impl Mixer {
    pub fn push(&mut self, samples: Vec<f32>) {
        if samples.is_empty() {
            return;
        }
        if self.voices.len() == MAX_VOICES {
            self.voices.pop_front();
        }
        self.voices.push_back(Voice { samples, pos: 0 });
    }

    pub fn active_voices(&self) -> usize {
        self.voices.len()
    }

    /// Fill `out` (interleaved, `channels` wide) with the next frames,
    /// the same mono signal on every channel.
    pub fn fill(&mut self, out: &mut [f32], channels: usize) {
        let channels = channels.max(1);
        for frame in out.chunks_mut(channels) {
            let mut sum = 0.0;
            for voice in self.voices.iter_mut() {
                if let Some(&s) = voice.samples.get(voice.pos) {
                    sum += s;
                    voice.pos += 1;
                }
            }
            frame.fill(sum.clamp(-1.0, 1.0));
        }
        self.voices.retain(|v| v.pos < v.samples.len());
    }
}

#[cfg(feature = "device-output")]
pub use device::DeviceOutput;

#[cfg(feature = "device-output")]
mod device {
    use std::sync::{Arc, Mutex};

    use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
    use cpal::{SampleFormat, Stream, StreamConfig};

    use super::{AudioOutput, Mixer};

    /// Plays cues through the default cpal output device.
    pub struct DeviceOutput {
        _stream: Stream,
        mixer: Arc<Mutex<Mixer>>,
        sample_rate: u32,
    }

    impl DeviceOutput {
        pub fn open_default() -> Result<Self, String> {
            let host = cpal::default_host();
            let device = host
                .default_output_device()
                .ok_or_else(|| "No output device available".to_string())?;

            let supported = device
                .default_output_config()
                .map_err(|e| format!("Failed to get output config: {}", e))?;
            if supported.sample_format() != SampleFormat::F32 {
                return Err(format!(
                    "Unsupported output sample format: {:?}",
                    supported.sample_format()
                ));
            }

            let channels = supported.channels() as usize;
            let sample_rate = supported.sample_rate().0;
            let config: StreamConfig = supported.into();

            let mixer = Arc::new(Mutex::new(Mixer::default()));
            let cb_mixer = Arc::clone(&mixer);

            let stream = device
                .build_output_stream(
                    &config,
                    move |data: &mut [f32], _: &cpal::OutputCallbackInfo| match cb_mixer.lock() {
                        Ok(mut m) => m.fill(data, channels),
                        Err(_) => data.fill(0.0),
                    },
                    |err| {
                        log::error!("Audio output error: {}", err);
                    },
                    None,
                )
                .map_err(|e| format!("Failed to build output stream: {}", e))?;

            stream
                .play()
                .map_err(|e| format!("Failed to start output stream: {}", e))?;

            log::info!(target: "audio", "output device open at {} Hz, {} ch", sample_rate, channels);

            Ok(Self {
                _stream: stream,
                mixer,
                sample_rate,
            })
        }
    }

    impl AudioOutput for DeviceOutput {
        fn sample_rate(&self) -> u32 {
            self.sample_rate
        }

        fn play(&mut self, samples: Vec<f32>) {
            if let Ok(mut m) = self.mixer.lock() {
                m.push(samples);
            }
        }
    }
}
