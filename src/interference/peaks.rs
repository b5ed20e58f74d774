use log::debug;

use crate::constants::{PEAK_SEARCH_RANGE, PEAK_TRACKING_LIMIT, SHIFT_LIMIT};

/// Returns the index of the smallest value in `profile[begin_index..begin_index + range]`.
/// Ties resolve to the lowest index.
///
/// # Panics
///
/// If `range` is 0 or the range extends past the end of `profile`.
pub fn min_in_range(profile: &[i32], begin_index: usize, range: usize) -> usize {
    if range == 0 {
        panic!("Search range must be greater than 0")
    }
    let mut min_index = begin_index;
    for (offset, value) in profile[begin_index..begin_index + range].iter().enumerate() {
        if *value < profile[min_index] {
            min_index = begin_index + offset;
        }
    }
    min_index
}

/// True if the value just before `shift` is lower than the value at `shift`.
pub fn is_harmonic_artifact(profile: &[i32], shift: usize) -> bool {
    shift > 0 && profile[shift - 1] < profile[shift]
}

/// Shifts of detected interference minima, in the order they were found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeakList {
    shifts: [usize; PEAK_TRACKING_LIMIT],
    len: usize,
}

impl PeakList {
    pub fn new() -> Self {
        PeakList {
            shifts: [0; PEAK_TRACKING_LIMIT],
            len: 0,
        }
    }

    /// Appends a peak.
    ///
    /// # Panics
    ///
    /// If the list already holds `PEAK_TRACKING_LIMIT` peaks.
    pub fn push(&mut self, shift: usize) {
        if self.is_full() {
            panic!("Cannot track more than {} peaks", PEAK_TRACKING_LIMIT)
        }
        self.shifts[self.len] = shift;
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == PEAK_TRACKING_LIMIT
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.shifts[..self.len]
    }
}

impl Default for PeakList {
    fn default() -> Self {
        PeakList::new()
    }
}

/// Why a peak scan stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// All windows below `SHIFT_LIMIT` were examined.
    RangeExhausted,
    /// `PEAK_TRACKING_LIMIT` peaks were found.
    CapacityReached,
    /// A candidate at `shift` was preceded by a lower value. Such minima are
    /// typically caused by odd harmonics (the 3rd in particular), and every
    /// minimum after it is considered unreliable.
    HarmonicRejected { shift: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanState {
    Scanning,
    Done(Termination),
}

/// The outcome of a completed scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeakScan {
    pub peaks: PeakList,
    pub termination: Termination,
}

/// Finds local minima of an interference profile.
///
/// The profile is split into consecutive windows of `PEAK_SEARCH_RANGE` shifts.
/// The minimum of a window is a peak if it is strictly lower than the minima
/// of both neighboring windows. Each call to [step](PeakDetector::step)
/// advances by one window.
pub struct PeakDetector<'a> {
    profile: &'a [i32],
    /// Start of the current window.
    window_start: usize,
    prev_min_index: usize,
    current_min_index: usize,
    peaks: PeakList,
    state: ScanState,
}

impl<'a> PeakDetector<'a> {
    /// # Panics
    ///
    /// If `profile` does not cover all shifts below `SHIFT_LIMIT`.
    pub fn new(profile: &'a [i32]) -> Self {
        if profile.len() < SHIFT_LIMIT {
            panic!(
                "Interference profile must contain at least {} values, got {}",
                SHIFT_LIMIT,
                profile.len()
            )
        }
        PeakDetector {
            profile,
            window_start: PEAK_SEARCH_RANGE,
            prev_min_index: min_in_range(profile, 0, PEAK_SEARCH_RANGE),
            current_min_index: min_in_range(profile, PEAK_SEARCH_RANGE, PEAK_SEARCH_RANGE),
            peaks: PeakList::new(),
            state: ScanState::Scanning,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Peaks found so far.
    pub fn peaks(&self) -> &PeakList {
        &self.peaks
    }

    /// Examines the current window and slides forward by one window.
    /// Does nothing once the scan is done.
    pub fn step(&mut self) -> ScanState {
        if self.state != ScanState::Scanning {
            return self.state;
        }
        // The next window of the last step ends below SHIFT_LIMIT.
        if self.window_start >= SHIFT_LIMIT - 2 * PEAK_SEARCH_RANGE {
            self.state = ScanState::Done(Termination::RangeExhausted);
            return self.state;
        }

        let profile = self.profile;
        let next_min_index = min_in_range(
            profile,
            self.window_start + PEAK_SEARCH_RANGE,
            PEAK_SEARCH_RANGE,
        );
        let current = profile[self.current_min_index];

        if profile[self.prev_min_index] > current && profile[next_min_index] > current {
            let shift = self.current_min_index;
            if is_harmonic_artifact(profile, shift) {
                debug!(
                    "Rejected local minimum at {} (value {}), preceded by {}. Ending scan.",
                    shift,
                    current,
                    profile[shift - 1]
                );
                self.state = ScanState::Done(Termination::HarmonicRejected { shift });
                return self.state;
            }

            self.peaks.push(shift);
            debug!(
                "Found local minimum at {} (value {}), peak count {}",
                shift,
                current,
                self.peaks.len()
            );
            if self.peaks.is_full() {
                self.state = ScanState::Done(Termination::CapacityReached);
                return self.state;
            }
        }

        self.prev_min_index = self.current_min_index;
        self.current_min_index = next_min_index;
        self.window_start += PEAK_SEARCH_RANGE;
        self.state
    }

    /// Steps until the scan is done.
    pub fn run(mut self) -> PeakScan {
        loop {
            if let ScanState::Done(termination) = self.step() {
                return PeakScan {
                    peaks: self.peaks,
                    termination,
                };
            }
        }
    }
}

/// Scans `profile` for peaks.
pub fn find_peaks(profile: &[i32]) -> PeakScan {
    PeakDetector::new(profile).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{INTERFERENCE_MAX, NUM_SAMPLES};
    use alloc::vec;
    use alloc::vec::Vec;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    // A flat profile at `level` with a V shaped dip reaching 0 at each of `dips`.
    fn profile_with_dips(level: i32, dips: &[usize]) -> Vec<i32> {
        let mut profile = vec![level; NUM_SAMPLES];
        for dip in dips {
            for offset in 0..5 {
                let value = (offset as i32) * 100;
                if *dip >= offset {
                    profile[dip - offset] = profile[dip - offset].min(value);
                }
                if dip + offset < NUM_SAMPLES {
                    profile[dip + offset] = profile[dip + offset].min(value);
                }
            }
        }
        profile
    }

    #[test]
    fn test_min_in_range() {
        let profile = [5, 3, 4, 3, 9, 1, 1];
        assert_eq!(min_in_range(&profile, 0, 4), 1);
        assert_eq!(min_in_range(&profile, 2, 2), 3);
        assert_eq!(min_in_range(&profile, 4, 3), 5);
        assert_eq!(min_in_range(&profile, 4, 1), 4);
    }

    #[test]
    #[should_panic]
    fn test_min_in_range_out_of_bounds() {
        let profile = [5, 3, 4];
        min_in_range(&profile, 2, 2);
    }

    #[test]
    fn test_peak_list() {
        let mut peaks = PeakList::new();
        assert!(peaks.is_empty());
        for shift in 0..PEAK_TRACKING_LIMIT {
            peaks.push(10 * shift);
        }
        assert!(peaks.is_full());
        assert_eq!(peaks.len(), PEAK_TRACKING_LIMIT);
        assert_eq!(peaks.as_slice()[3], 30);
    }

    #[test]
    #[should_panic]
    fn test_peak_list_overflow() {
        let mut peaks = PeakList::new();
        for shift in 0..=PEAK_TRACKING_LIMIT {
            peaks.push(shift);
        }
    }

    #[test]
    fn test_flat_profile_has_no_peaks() {
        for level in [0, 1234, INTERFERENCE_MAX] {
            let profile = vec![level; NUM_SAMPLES];
            let scan = find_peaks(&profile);
            assert!(scan.peaks.is_empty());
            assert_eq!(scan.termination, Termination::RangeExhausted);
        }
    }

    #[test]
    fn test_single_dip() {
        let profile = profile_with_dips(INTERFERENCE_MAX, &[302]);
        let scan = find_peaks(&profile);
        assert_eq!(scan.peaks.as_slice(), &[302]);
        assert_eq!(scan.termination, Termination::RangeExhausted);
    }

    #[test]
    fn test_peaks_in_scan_order() {
        let profile = profile_with_dips(INTERFERENCE_MAX, &[100, 200, 300, 400]);
        let scan = find_peaks(&profile);
        assert_eq!(scan.peaks.as_slice(), &[100, 200, 300, 400]);
    }

    #[test]
    fn test_capacity_limit() {
        let dips: Vec<usize> = (1..=15).map(|i| 77 * i).collect();
        let profile = profile_with_dips(INTERFERENCE_MAX, &dips);
        let scan = find_peaks(&profile);
        assert_eq!(scan.termination, Termination::CapacityReached);
        assert_eq!(scan.peaks.len(), PEAK_TRACKING_LIMIT);
        assert_eq!(scan.peaks.as_slice(), &dips[..PEAK_TRACKING_LIMIT]);
    }

    #[test]
    fn test_harmonic_artifact() {
        let profile = [9, 4, 6, 6, 2];
        assert!(!is_harmonic_artifact(&profile, 0));
        assert!(!is_harmonic_artifact(&profile, 1));
        assert!(is_harmonic_artifact(&profile, 2));
        assert!(!is_harmonic_artifact(&profile, 3));
        assert!(!is_harmonic_artifact(&profile, 4));
    }

    #[test]
    fn test_window_minima_never_look_like_artifacts() {
        // A candidate is the first minimum of its window and lower than the
        // minimum of the previous window, so the value before it is always higher.
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let profile: Vec<i32> = (0..NUM_SAMPLES).map(|_| rng.gen_range(0..40)).collect();
            let scan = find_peaks(&profile);
            assert!(!matches!(
                scan.termination,
                Termination::HarmonicRejected { .. }
            ));
            for shift in scan.peaks.as_slice() {
                assert!(profile[shift - 1] > profile[*shift]);
            }
        }
    }

    #[test]
    fn test_ties_resolve_to_first_occurrence() {
        let mut profile = vec![INTERFERENCE_MAX; NUM_SAMPLES];
        for shift in 305..310 {
            profile[shift] = 7;
        }
        let scan = find_peaks(&profile);
        assert_eq!(scan.peaks.as_slice(), &[305]);
    }

    #[test]
    fn test_shifts_beyond_limit_are_ignored() {
        let profile = profile_with_dips(INTERFERENCE_MAX, &[1237, 1300, 1400]);
        let scan = find_peaks(&profile);
        assert!(scan.peaks.is_empty());
        assert_eq!(scan.termination, Termination::RangeExhausted);

        // Only the first SHIFT_LIMIT values are needed.
        let profile = profile_with_dips(INTERFERENCE_MAX, &[600]);
        let scan = find_peaks(&profile[..SHIFT_LIMIT]);
        assert_eq!(scan.peaks.as_slice(), &[600]);
    }

    #[test]
    fn test_last_examined_window() {
        // The current window of the last step spans 1215..1230.
        let profile = profile_with_dips(INTERFERENCE_MAX, &[1222]);
        assert_eq!(find_peaks(&profile).peaks.as_slice(), &[1222]);
    }

    #[test]
    fn test_stepping() {
        let profile = profile_with_dips(INTERFERENCE_MAX, &[50]);
        let mut detector = PeakDetector::new(&profile);
        assert_eq!(detector.state(), ScanState::Scanning);
        // Windows 15..30 and 30..45 are flat. The third step has 45..60 as its current window.
        detector.step();
        detector.step();
        assert!(detector.peaks().is_empty());
        detector.step();
        assert_eq!(detector.peaks().as_slice(), &[50]);
        let mut steps = 3;
        while detector.step() == ScanState::Scanning {
            steps += 1;
        }
        // One scanning step per window offset in 15..1220.
        assert_eq!(steps, 81);
        assert_eq!(detector.state(), ScanState::Done(Termination::RangeExhausted));
        // Stepping a finished detector is a no-op.
        assert_eq!(detector.step(), ScanState::Done(Termination::RangeExhausted));
    }

    #[test]
    #[should_panic]
    fn test_short_profile() {
        let profile = [0; SHIFT_LIMIT - 1];
        PeakDetector::new(&profile);
    }
}
