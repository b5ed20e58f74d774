use std::path::Path;

use crate::error::{HelperError, Result};

/// Decoded wav data, with channels mixed down to mono.
pub struct WavSignal {
    pub sample_rate: u32,
    pub channels: u16,
    /// Mono samples in `[-1, 1]`.
    pub samples: Vec<f32>,
}

pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<WavSignal> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader.samples::<f32>().collect::<std::result::Result<_, _>>()?,
        hound::SampleFormat::Int => {
            let scale = 1. / ((1_i64 << (spec.bits_per_sample - 1)) as f32);
            reader
                .samples::<i32>()
                .map(|sample| sample.map(|value| (value as f32) * scale))
                .collect::<std::result::Result<_, _>>()?
        }
    };
    if interleaved.is_empty() {
        return Err(HelperError::EmptyWav);
    }
    let channel_count = spec.channels as usize;
    let samples = interleaved
        .chunks(channel_count)
        .map(|frame| frame.iter().sum::<f32>() / (frame.len() as f32))
        .collect();
    Ok(WavSignal {
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        samples,
    })
}

/// Writes mono samples as 16-bit PCM, clamping to `[-1, 1]`.
pub fn write_wav<P: AsRef<Path>>(path: P, sample_rate: u32, buffer: &[f32]) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    let amplitude = i16::MAX as f32;
    for sample in buffer.iter() {
        writer.write_sample((sample.clamp(-1.0, 1.0) * amplitude) as i16)?;
    }
    writer.finalize()?;
    Ok(())
}

/// Linear interpolation resampling, good enough to feed recordings made at
/// 44.1 or 48 kHz to the estimator.
pub fn resample(samples: &[f32], from_rate: f32, to_rate: f32) -> Vec<f32> {
    if samples.is_empty() || from_rate == to_rate {
        return samples.to_vec();
    }
    let step = from_rate / to_rate;
    let out_len = ((samples.len() - 1) as f32 / step) as usize + 1;
    (0..out_len)
        .map(|i| {
            let position = i as f32 * step;
            let index = position as usize;
            let fraction = position - index as f32;
            let next = samples[(index + 1).min(samples.len() - 1)];
            samples[index] + fraction * (next - samples[index])
        })
        .collect()
}

/// Converts samples in `[-1, 1]` to the unsigned 8-bit scale of the ADC,
/// with silence at 128.
pub fn quantize_u8(samples: &[f32]) -> Vec<u8> {
    samples
        .iter()
        .map(|sample| (127.5 * (sample.clamp(-1.0, 1.0) + 1.0)).round() as u8)
        .collect()
}
