use log::trace;

use crate::constants::RAW_WINDOW_SIZE;
use crate::interference::peaks::{find_peaks, PeakScan};
use crate::interference::profile::{EarlyExit, InterferenceProfile};
use crate::interference::smoothing::SmoothedSignal;
use crate::interference::wavelength::{average_wavelength, Wavelength};

/// The result of analyzing one raw window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Estimate {
    /// The estimated fundamental frequency in Hz.
    pub frequency: f32,
    /// The wavelength the frequency was derived from.
    pub wavelength: Wavelength,
    /// The detected peaks and the reason the peak scan ended.
    pub scan: PeakScan,
}

impl Estimate {
    /// True if no peaks were found and the frequency is derived from
    /// `DEFAULT_WAVELENGTH`.
    pub fn is_fallback(&self) -> bool {
        self.wavelength == Wavelength::Default
    }
}

/// Runs the complete estimation pipeline on raw windows.
///
/// Holds the intermediate smoothed signal and interference profile of the
/// most recent window so they can be inspected. Each call to
/// [process](Estimator::process) overwrites both, so results never depend
/// on previously processed windows.
pub struct Estimator {
    early_exit: EarlyExit,
    smoothed: SmoothedSignal,
    profile: InterferenceProfile,
}

impl Estimator {
    pub fn new() -> Self {
        Estimator::from_options(EarlyExit::default())
    }

    /// Creates an estimator with a custom early exit policy.
    /// `EarlyExit::Disabled` gives the exact interference profile, at a
    /// considerably higher cost.
    pub fn from_options(early_exit: EarlyExit) -> Self {
        Estimator {
            early_exit,
            smoothed: SmoothedSignal::new(),
            profile: InterferenceProfile::new(),
        }
    }

    /// Estimates the fundamental frequency of a raw window.
    ///
    /// `raw` is only read while smoothing, i.e before the (much more expensive)
    /// interference analysis starts.
    ///
    /// # Panics
    ///
    /// If `raw` does not contain exactly `RAW_WINDOW_SIZE` samples.
    pub fn process(&mut self, raw: &[u8]) -> Estimate {
        if raw.len() != RAW_WINDOW_SIZE {
            panic!(
                "Got a raw window of length {}, expected {}",
                raw.len(),
                RAW_WINDOW_SIZE
            )
        }
        self.smoothed.smooth(raw);
        self.profile.compute(self.smoothed.as_slice(), self.early_exit);

        let scan = find_peaks(self.profile.as_slice());
        let wavelength = average_wavelength(scan.peaks.as_slice());
        let frequency = wavelength.frequency();
        trace!(
            "{} peaks ({:?}), wavelength {} samples, {} Hz",
            scan.peaks.len(),
            scan.termination,
            wavelength.samples(),
            frequency
        );

        Estimate {
            frequency,
            wavelength,
            scan,
        }
    }

    pub fn early_exit(&self) -> EarlyExit {
        self.early_exit
    }

    /// The smoothed signal of the most recently processed window.
    pub fn smoothed(&self) -> &SmoothedSignal {
        &self.smoothed
    }

    /// The interference profile of the most recently processed window.
    pub fn profile(&self) -> &InterferenceProfile {
        &self.profile
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Estimator::new()
    }
}

/// Estimates the fundamental frequency of a raw window in Hz.
/// Shorthand for `Estimator::new().process(raw).frequency`.
pub fn estimate_frequency(raw: &[u8]) -> f32 {
    Estimator::new().process(raw).frequency
}
