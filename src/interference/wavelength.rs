use crate::constants::{DEFAULT_WAVELENGTH, SAMPLE_RATE};

/// The estimated fundamental period, in samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Wavelength {
    /// Averaged from detected peaks.
    Measured(f32),
    /// No peaks were found, `DEFAULT_WAVELENGTH` is used instead.
    Default,
}

impl Wavelength {
    /// The wavelength in samples.
    pub fn samples(&self) -> f32 {
        match self {
            Wavelength::Measured(samples) => *samples,
            Wavelength::Default => DEFAULT_WAVELENGTH,
        }
    }

    /// The frequency in Hz corresponding to this wavelength at `SAMPLE_RATE`.
    pub fn frequency(&self) -> f32 {
        frequency_from_wavelength(self.samples())
    }
}

/// Converts a wavelength in samples to a frequency in Hz at `SAMPLE_RATE`.
pub fn frequency_from_wavelength(samples: f32) -> f32 {
    SAMPLE_RATE / samples
}

/// Averages peak shifts into a single wavelength estimate.
///
/// The peak of rank `r` (starting at 1) is assumed to lie at `r` times the
/// fundamental period and is divided by `r` before averaging. If a lower order
/// peak was missed, every following peak is attributed the wrong rank and the
/// estimate is biased towards longer wavelengths.
pub fn average_wavelength(peaks: &[usize]) -> Wavelength {
    if peaks.is_empty() {
        return Wavelength::Default;
    }
    let mut sum: f32 = 0.0;
    for (index, shift) in peaks.iter().enumerate() {
        sum += (*shift as f32) / ((index + 1) as f32);
    }
    Wavelength::Measured(sum / (peaks.len() as f32))
}
