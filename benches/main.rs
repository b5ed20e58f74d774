use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dev_helpers::{Noisy, Oscillator, Waveform};
use micro_tuner::constants::RAW_WINDOW_SIZE;
use micro_tuner::interference::{find_peaks, EarlyExit, Estimator, InterferenceProfile, SmoothedSignal};

fn saw_window(period: f32) -> Vec<u8> {
    Oscillator::new(Waveform::Saw, period).take(RAW_WINDOW_SIZE).collect()
}

fn run_estimator_benchmark(id: &str, c: &mut Criterion, raw: &[u8], early_exit: EarlyExit) {
    let mut estimator = Estimator::from_options(early_exit);
    c.bench_function(id, |b| {
        b.iter(|| {
            estimator.process(black_box(raw));
        })
    });
}

fn estimator_benchmarks(c: &mut Criterion) {
    let silence = vec![128u8; RAW_WINDOW_SIZE];
    let noisy: Vec<u8> = Noisy::new(Oscillator::new(Waveform::Saw, 183.0), 4, 1)
        .take(RAW_WINDOW_SIZE)
        .collect();
    run_estimator_benchmark("Estimate silence", c, &silence, EarlyExit::default());
    run_estimator_benchmark("Estimate saw 100", c, &saw_window(100.0), EarlyExit::default());
    run_estimator_benchmark("Estimate noisy saw 183", c, &noisy, EarlyExit::default());
    run_estimator_benchmark("Estimate noisy saw 183, no early exit", c, &noisy, EarlyExit::Disabled);
}

fn stage_benchmarks(c: &mut Criterion) {
    let raw = saw_window(183.0);
    let mut smoothed = SmoothedSignal::new();
    c.bench_function("Smoothing", |b| b.iter(|| smoothed.smooth(black_box(&raw))));

    let smoothed = SmoothedSignal::from_raw(&raw);
    let mut profile = InterferenceProfile::new();
    c.bench_function("Interference profile", |b| {
        b.iter(|| profile.compute(black_box(smoothed.as_slice()), EarlyExit::default()))
    });

    let profile = InterferenceProfile::from_signal(smoothed.as_slice(), EarlyExit::default());
    c.bench_function("Peak detection", |b| b.iter(|| find_peaks(black_box(profile.as_slice()))));
}

criterion_group!(benches, estimator_benchmarks, stage_benchmarks);
criterion_main!(benches);
