use crate::constants::{NUM_SAMPLES, SMA_WIDTH};

/// Computes the [simple moving average](https://en.wikipedia.org/wiki/Moving_average#Simple_moving_average)
/// of `raw` at `index`, i.e the truncated mean of the `SMA_WIDTH + 1` samples
/// starting at `index`.
///
/// # Panics
///
/// If `raw` does not contain at least `index + SMA_WIDTH + 1` samples.
pub fn sma_at(raw: &[u8], index: usize) -> u8 {
    if index + SMA_WIDTH >= raw.len() {
        panic!(
            "Moving average at index {} needs {} raw samples, got {}",
            index,
            index + SMA_WIDTH + 1,
            raw.len()
        )
    }
    let sum: u16 = raw[index..=index + SMA_WIDTH]
        .iter()
        .map(|sample| *sample as u16)
        .sum();
    (sum / (SMA_WIDTH as u16 + 1)) as u8
}

/// A denoised window of `NUM_SAMPLES` samples.
#[derive(Clone)]
pub struct SmoothedSignal {
    samples: [u8; NUM_SAMPLES],
}

impl SmoothedSignal {
    pub fn new() -> Self {
        SmoothedSignal {
            samples: [0; NUM_SAMPLES],
        }
    }

    /// Smooths a raw window. All samples needed are copied out of `raw`,
    /// so the raw buffer may be refilled as soon as this returns.
    ///
    /// # Panics
    ///
    /// If `raw` is shorter than `RAW_WINDOW_SIZE`.
    pub fn from_raw(raw: &[u8]) -> Self {
        let mut signal = SmoothedSignal::new();
        signal.smooth(raw);
        signal
    }

    /// Overwrites every sample with the moving average of `raw`.
    pub fn smooth(&mut self, raw: &[u8]) {
        for (index, sample) in self.samples.iter_mut().enumerate() {
            *sample = sma_at(raw, index);
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.samples[..]
    }
}

impl Default for SmoothedSignal {
    fn default() -> Self {
        SmoothedSignal::new()
    }
}
