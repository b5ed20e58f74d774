use crate::constants::{INTERFERENCE_MAX, INTERFERENCE_THRESHOLD, NUM_SAMPLES};

/// Controls when the summation in [interference_power] is aborted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EarlyExit {
    /// Return `INTERFERENCE_MAX` as soon as the running sum exceeds the given value.
    Threshold(i32),
    /// Always compute the full sum. Slower, but gives the exact interference
    /// function, which is useful for plotting.
    Disabled,
}

impl Default for EarlyExit {
    fn default() -> Self {
        EarlyExit::Threshold(INTERFERENCE_THRESHOLD)
    }
}

/// Computes the power of `signal` interfered with a copy of itself shifted by `shift`
/// samples, i.e the sum of absolute differences of the overlapping samples.
///
/// The sum is not divided by the number of compared samples, since only
/// low values matter downstream.
///
/// # Panics
///
/// If `shift` is greater than the signal length.
pub fn interference_power(signal: &[u8], shift: usize, early_exit: EarlyExit) -> i32 {
    if shift > signal.len() {
        panic!(
            "Shift {} exceeds the signal length {}",
            shift,
            signal.len()
        )
    }
    let mut power: i32 = 0;
    for (sample, shifted_sample) in signal.iter().zip(signal[shift..].iter()) {
        power += (*sample as i32 - *shifted_sample as i32).abs();
        if let EarlyExit::Threshold(threshold) = early_exit {
            if power > threshold {
                return INTERFERENCE_MAX;
            }
        }
    }
    power
}

/// Interference power for every shift in `0..NUM_SAMPLES`.
#[derive(Clone)]
pub struct InterferenceProfile {
    power: [i32; NUM_SAMPLES],
}

impl InterferenceProfile {
    pub fn new() -> Self {
        InterferenceProfile {
            power: [0; NUM_SAMPLES],
        }
    }

    /// Computes the profile of a smoothed signal of `NUM_SAMPLES` samples.
    pub fn from_signal(signal: &[u8], early_exit: EarlyExit) -> Self {
        let mut profile = InterferenceProfile::new();
        profile.compute(signal, early_exit);
        profile
    }

    /// Overwrites the profile with the interference power of `signal` at every shift.
    ///
    /// # Panics
    ///
    /// If `signal` does not contain exactly `NUM_SAMPLES` samples.
    pub fn compute(&mut self, signal: &[u8], early_exit: EarlyExit) {
        if signal.len() != NUM_SAMPLES {
            panic!(
                "Got a signal of length {}, expected {}",
                signal.len(),
                NUM_SAMPLES
            )
        }
        for (shift, power) in self.power.iter_mut().enumerate() {
            *power = interference_power(signal, shift, early_exit);
        }
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.power[..]
    }
}

impl Default for InterferenceProfile {
    fn default() -> Self {
        InterferenceProfile::new()
    }
}
