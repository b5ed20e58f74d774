//! Fundamental frequency estimation by destructive interference.
//!
//! If a signal is periodic with a period of, say, 100 samples, subtracting a
//! copy of the signal shifted by 100, 200, 300 ... samples should cancel it out.
//! The estimator looks for the shifts giving the best cancellation and
//! averages them into an estimate of the fundamental period. Compared to
//! FFT based methods, this gives good frequency resolution for a small,
//! predictable amount of computation and no floating point work apart from
//! the final division.
//!
//! The pipeline has four stages
//! * [smoothing] - a moving average over the raw 8-bit ADC samples
//! * [profile] - the interference power for every shift, with an early exit for shifts that clearly do not cancel the signal
//! * [peaks] - local minima of the interference power
//! * [wavelength] - the average, rank normalized, peak shift and the corresponding frequency
//!
//! No state is kept between windows and no memory is allocated.
//!
//! # Examples
//!
//! ```
//! use micro_tuner::constants::RAW_WINDOW_SIZE;
//! use micro_tuner::interference::Estimator;
//!
//! // A saw tooth wave with a period of 100 samples, i.e 440 Hz at 44 kHz.
//! let mut raw = [0u8; RAW_WINDOW_SIZE];
//! for (i, sample) in raw.iter_mut().enumerate() {
//!     *sample = ((i % 100) * 256 / 100) as u8;
//! }
//!
//! let mut estimator = Estimator::new();
//! let estimate = estimator.process(&raw);
//! assert_eq!(&estimate.scan.peaks.as_slice()[..3], &[100, 200, 300]);
//! assert!((estimate.frequency - 440.0).abs() <= 0.01);
//! ```
//!
//! A signal without a discernible period falls back to `DEFAULT_WAVELENGTH`.
//! ```
//! use micro_tuner::constants::RAW_WINDOW_SIZE;
//! use micro_tuner::interference::Estimator;
//!
//! let raw = [128u8; RAW_WINDOW_SIZE];
//! let estimate = Estimator::new().process(&raw);
//! assert!(estimate.is_fallback());
//! assert_eq!(estimate.frequency, 440.0);
//! ```

pub mod estimator;
pub mod peaks;
pub mod profile;
pub mod smoothing;
pub mod wavelength;

pub use estimator::{estimate_frequency, Estimate, Estimator};
pub use peaks::{
    find_peaks, is_harmonic_artifact, min_in_range, PeakDetector, PeakList, PeakScan, ScanState,
    Termination,
};
pub use profile::{interference_power, EarlyExit, InterferenceProfile};
pub use smoothing::{sma_at, SmoothedSignal};
pub use wavelength::{average_wavelength, frequency_from_wavelength, Wavelength};
