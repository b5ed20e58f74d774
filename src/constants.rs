//! Compile-time configuration of the estimator.
//!
//! The values are tuned for an electret microphone with a fixed gain preamp
//! sampled by an 8-bit ADC. A different input chain will likely need a
//! different `INTERFERENCE_THRESHOLD`.

/// The number of smoothed samples the analysis runs on.
pub const NUM_SAMPLES: usize = 1500;

/// The largest phase shift examined by the peak detector. Must be lower than
/// `NUM_SAMPLES`. Shifts close to `NUM_SAMPLES` compare very few samples and
/// tend to produce false minima.
pub const SHIFT_LIMIT: usize = 1250;

/// The number of extra raw samples averaged into each smoothed sample.
/// Each smoothed sample is the mean of `SMA_WIDTH + 1` raw samples.
pub const SMA_WIDTH: usize = 20;

/// The number of raw samples the acquisition side must deliver per window.
pub const RAW_WINDOW_SIZE: usize = NUM_SAMPLES + SMA_WIDTH;

/// The width of the windows scanned for local minima. Minima closer than
/// `2 * PEAK_SEARCH_RANGE` samples are not resolved.
pub const PEAK_SEARCH_RANGE: usize = 15;

/// Maximum number of peaks tracked per analysis.
pub const PEAK_TRACKING_LIMIT: usize = 10;

/// Interference power above this value is never a peak candidate, so the
/// summation for a shift stops as soon as it is exceeded.
pub const INTERFERENCE_THRESHOLD: i32 = 3000;

/// Value stored in the interference profile for shifts that exceeded
/// `INTERFERENCE_THRESHOLD`.
pub const INTERFERENCE_MAX: i32 = i32::MAX;

/// Wavelength, in samples, reported when no peaks were found.
pub const DEFAULT_WAVELENGTH: f32 = 100.0;

/// The ADC sample rate in Hz.
pub const SAMPLE_RATE: f32 = 44000.0;

const _: () = assert!(SHIFT_LIMIT < NUM_SAMPLES);
const _: () = assert!(2 * PEAK_SEARCH_RANGE < SHIFT_LIMIT);
const _: () = assert!(PEAK_SEARCH_RANGE > 0);
const _: () = assert!(PEAK_TRACKING_LIMIT > 0);
// The moving average is accumulated in a u16.
const _: () = assert!((SMA_WIDTH + 1) * (u8::MAX as usize) <= u16::MAX as usize);
// Worst case sum before the threshold check must not overflow.
const _: () = assert!(INTERFERENCE_THRESHOLD < i32::MAX - u8::MAX as i32);
