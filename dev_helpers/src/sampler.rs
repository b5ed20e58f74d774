use micro_tuner::constants::RAW_WINDOW_SIZE;

/// One raw acquisition buffer.
pub type RawSampleWindow = [u8; RAW_WINDOW_SIZE];

/// Simulates a free running ADC with double buffered transfers. Every call
/// to [acquire](Sampler::acquire) hands out a freshly filled window by value,
/// so the estimator never shares a buffer with the acquisition side.
pub struct Sampler<I> {
    source: I,
    /// Samples between the end of one window and the start of the next,
    /// i.e samples arriving while the previous window is analyzed.
    gap: usize,
    window_count: usize,
}

impl<I: Iterator<Item = u8>> Sampler<I> {
    pub fn new(source: I) -> Self {
        Sampler::from_options(source, 0)
    }

    pub fn from_options(source: I, gap: usize) -> Self {
        Sampler {
            source,
            gap,
            window_count: 0,
        }
    }

    /// Fills the next window, or returns `None` if the source ran out of
    /// samples before the window was complete.
    pub fn acquire(&mut self) -> Option<Box<RawSampleWindow>> {
        if self.window_count > 0 && self.gap > 0 {
            self.source.nth(self.gap - 1)?;
        }
        let mut window = Box::new([0u8; RAW_WINDOW_SIZE]);
        for sample in window.iter_mut() {
            *sample = self.source.next()?;
        }
        self.window_count += 1;
        Some(window)
    }

    /// The number of windows acquired so far.
    pub fn window_count(&self) -> usize {
        self.window_count
    }
}

impl<I: Iterator<Item = u8>> Iterator for Sampler<I> {
    type Item = Box<RawSampleWindow>;

    fn next(&mut self) -> Option<Self::Item> {
        self.acquire()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter() -> impl Iterator<Item = u8> {
        (0..usize::MAX).map(|i| (i % 251) as u8)
    }

    #[test]
    fn test_consecutive_windows() {
        let mut sampler = Sampler::new(counter());
        let first = sampler.acquire().unwrap();
        let second = sampler.acquire().unwrap();
        assert_eq!(first[0], 0);
        assert_eq!(first[RAW_WINDOW_SIZE - 1], ((RAW_WINDOW_SIZE - 1) % 251) as u8);
        assert_eq!(second[0], (RAW_WINDOW_SIZE % 251) as u8);
        assert_eq!(sampler.window_count(), 2);
    }

    #[test]
    fn test_gap_skips_samples() {
        let mut sampler = Sampler::from_options(counter(), 10);
        let first = sampler.acquire().unwrap();
        let second = sampler.acquire().unwrap();
        assert_eq!(first[0], 0);
        assert_eq!(second[0], ((RAW_WINDOW_SIZE + 10) % 251) as u8);
    }

    #[test]
    fn test_incomplete_window() {
        let source = std::iter::repeat(7u8).take(2 * RAW_WINDOW_SIZE - 1);
        let windows: Vec<_> = Sampler::new(source).collect();
        assert_eq!(windows.len(), 1);
        assert!(windows[0].iter().all(|sample| *sample == 7));
    }
}
