use std::io::Cursor;
use std::path::Path;

fn mono_pcm16(sample_rate: u32) -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    }
}

/// Encode mono 16-bit samples as an in-memory WAV file.
pub fn encode_wav(samples: &[i16], sample_rate: u32) -> Result<Vec<u8>, String> {
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, mono_pcm16(sample_rate))
            .map_err(|e| format!("Failed to create WAV writer: {}", e))?;
        for &sample in samples {
            writer
                .write_sample(sample)
                .map_err(|e| format!("Failed to write sample: {}", e))?;
        }
        writer
            .finalize()
            .map_err(|e| format!("Failed to finalize WAV: {}", e))?;
    }
    Ok(cursor.into_inner())
}

/// Write mono 16-bit samples to a WAV file.
pub fn write_wav(path: &Path, samples: &[i16], sample_rate: u32) -> Result<(), String> {
    let mut writer = hound::WavWriter::create(path, mono_pcm16(sample_rate))
        .map_err(|e| format!("Failed to create {}: {}", path.display(), e))?;
    for &sample in samples {
        writer
            .write_sample(sample)
            .map_err(|e| format!("Failed to write sample: {}", e))?;
    }
    writer
        .finalize()
        .map_err(|e| format!("Failed to finalize WAV: {}", e))
}

/// Decode a 16-bit integer WAV. Returns the spec and the interleaved samples.
pub fn decode_wav(bytes: &[u8]) -> Result<(hound::WavSpec, Vec<i16>), String> {
    let reader = hound::WavReader::new(Cursor::new(bytes))
        .map_err(|e| format!("Failed to read WAV: {}", e))?;
    let spec = reader.spec();
    if spec.sample_format != hound::SampleFormat::Int || spec.bits_per_sample != 16 {
        return Err(format!(
            "Unsupported WAV format: {:?} {} bit",
            spec.sample_format, spec.bits_per_sample
        ));
    }
    let samples = reader
        .into_samples::<i16>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("Failed to decode samples: {}", e))?;
    Ok((spec, samples))
}
