use dev_helpers::{Oscillator, Waveform};
use micro_tuner::constants::RAW_WINDOW_SIZE;
use micro_tuner::interference::{EarlyExit, Estimator};

fn profile(early_exit: EarlyExit, raw: &[u8], loop_count: u128) {
    let mut estimator = Estimator::from_options(early_exit);
    let start = std::time::Instant::now();
    let mut frequency = 0.0;
    for _ in 0..loop_count {
        frequency = estimator.process(raw).frequency;
    }
    let time_us = start.elapsed().as_micros();
    println!(
        "{:?}: {:.2} Hz, completed in {} μs ({} μs/estimate).",
        early_exit,
        frequency,
        time_us,
        time_us / loop_count
    );
}

fn main() {
    let loop_count = 200;
    let raw: Vec<u8> = Oscillator::new(Waveform::Saw, 183.0)
        .take(RAW_WINDOW_SIZE)
        .collect();
    println!("Computing {} estimates of a {} sample window.", loop_count, RAW_WINDOW_SIZE);

    profile(EarlyExit::default(), &raw, loop_count);
    profile(EarlyExit::Disabled, &raw, loop_count);
    println!();
    println!("NOTE: This example is meant for profiling.");
    println!("For performance benchmarks, run 'cargo bench'.");
}
