//! Synthetic 8-bit test signals, as endless sample iterators.

use rand::{rngs::StdRng, Rng, SeedableRng};

#[derive(Clone, Copy, Debug)]
pub enum Waveform {
    Saw,
    Square,
    Sine,
}

/// A periodic waveform with a period given in samples. The period may be
/// fractional.
pub struct Oscillator {
    waveform: Waveform,
    period: f32,
    amplitude: f32,
    sample_index: u64,
}

impl Oscillator {
    /// A waveform spanning the full `0..=255` range.
    pub fn new(waveform: Waveform, period: f32) -> Self {
        Oscillator::from_options(waveform, period, 127.5)
    }

    /// A waveform swinging `amplitude` around 127.5.
    pub fn from_options(waveform: Waveform, period: f32, amplitude: f32) -> Self {
        if period <= 1.0 {
            panic!("Period must be greater than one sample")
        }
        Oscillator {
            waveform,
            period,
            amplitude,
            sample_index: 0,
        }
    }

    /// An oscillator at `frequency` Hz for a given sample rate.
    pub fn with_frequency(waveform: Waveform, frequency: f32, sample_rate: f32) -> Self {
        Oscillator::new(waveform, sample_rate / frequency)
    }

    fn value_at(&self, phase: f32) -> f32 {
        match self.waveform {
            Waveform::Saw => 2.0 * phase - 1.0,
            Waveform::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Sine => (2.0 * std::f32::consts::PI * phase).sin(),
        }
    }
}

impl Iterator for Oscillator {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let cycles = self.sample_index as f64 / self.period as f64;
        let phase = cycles.fract() as f32;
        self.sample_index += 1;
        let value = 127.5 + self.amplitude * self.value_at(phase);
        Some(value.round().clamp(0.0, 255.0) as u8)
    }
}

/// Adds uniformly distributed noise to an 8-bit signal.
pub struct Noisy<I> {
    source: I,
    amplitude: i16,
    rng: StdRng,
}

impl<I: Iterator<Item = u8>> Noisy<I> {
    pub fn new(source: I, amplitude: i16, seed: u64) -> Self {
        Noisy {
            source,
            amplitude,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<I: Iterator<Item = u8>> Iterator for Noisy<I> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let sample = self.source.next()? as i16;
        let noise = self.rng.gen_range(-self.amplitude..=self.amplitude);
        Some((sample + noise).clamp(0, 255) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saw() {
        let samples: Vec<u8> = Oscillator::new(Waveform::Saw, 4.0).take(8).collect();
        assert_eq!(samples, vec![0, 64, 128, 191, 0, 64, 128, 191]);
    }

    #[test]
    fn test_square() {
        let samples: Vec<u8> = Oscillator::from_options(Waveform::Square, 4.0, 50.0)
            .take(6)
            .collect();
        assert_eq!(samples, vec![178, 178, 78, 78, 178, 178]);
    }

    #[test]
    fn test_fractional_period_repeats() {
        let samples: Vec<u8> = Oscillator::new(Waveform::Sine, 2.5).take(10).collect();
        assert_eq!(&samples[..5], &samples[5..]);
    }

    #[test]
    fn test_noise_is_bounded() {
        let quiet = Oscillator::from_options(Waveform::Sine, 30.0, 20.0);
        let reference: Vec<u8> = Oscillator::from_options(Waveform::Sine, 30.0, 20.0)
            .take(300)
            .collect();
        let noisy: Vec<u8> = Noisy::new(quiet, 3, 1).take(300).collect();
        for (clean, noisy) in reference.iter().zip(noisy.iter()) {
            assert!((*clean as i16 - *noisy as i16).abs() <= 3);
        }
        let repeated: Vec<u8> = Noisy::new(Oscillator::from_options(Waveform::Sine, 30.0, 20.0), 3, 1)
            .take(300)
            .collect();
        assert_eq!(noisy, repeated);
    }
}
