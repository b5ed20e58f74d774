use dev_helpers::tuner;
use dev_helpers::{frequency_to_string, Noisy, Oscillator, Sampler, Waveform};
use micro_tuner::constants::{RAW_WINDOW_SIZE, SAMPLE_RATE};

fn main() -> dev_helpers::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Open strings of a guitar in standard tuning, slightly detuned.
    let strings = [
        ("E2", 82.41, Waveform::Saw),
        ("A2", 110.3, Waveform::Square),
        ("D3", 146.83, Waveform::Saw),
        ("G3", 195.0, Waveform::Sine),
        ("B3", 246.94, Waveform::Square),
        ("E4", 331.0, Waveform::Saw),
    ];
    let windows_per_string = 3;

    for (name, frequency, waveform) in strings {
        println!("Plucking {} at {} Hz ({:?})", name, frequency, waveform);
        let oscillator = Oscillator::with_frequency(waveform, frequency, SAMPLE_RATE);
        let source = Noisy::new(oscillator, 4, 1).take(windows_per_string * (RAW_WINDOW_SIZE + 200));
        let reports = tuner::run(Sampler::from_options(source, 200))?;
        for report in reports {
            match report.reading {
                Some(reading) => println!(
                    "  {:<2} {:?} | {} | {:.2} Hz",
                    reading.note.name(),
                    reading.indicator,
                    frequency_to_string(report.frequency),
                    report.frequency
                ),
                None => println!("  no note | {:.2} Hz", report.frequency),
            }
        }
    }
    Ok(())
}
