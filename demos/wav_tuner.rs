use std::env;

use dev_helpers::tuner;
use dev_helpers::wav::{quantize_u8, read_wav, resample};
use dev_helpers::{frequency_to_string, Sampler};
use log::info;
use micro_tuner::constants::SAMPLE_RATE;

fn main() -> dev_helpers::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("Usage: wav_tuner <file.wav>");
            return Ok(());
        }
    };

    let signal = read_wav(&path)?;
    info!(
        "Read {} samples at {} Hz from {} ({} channels)",
        signal.samples.len(),
        signal.sample_rate,
        path,
        signal.channels
    );
    let samples = resample(&signal.samples, signal.sample_rate as f32, SAMPLE_RATE);
    let quantized = quantize_u8(&samples);

    let reports = tuner::run(Sampler::new(quantized.into_iter()))?;
    for (i, report) in reports.iter().enumerate() {
        let note = report.reading.map(|reading| reading.note.name()).unwrap_or("-");
        println!(
            "{:4} {:<2} | {} | {:.2} Hz",
            i,
            note,
            frequency_to_string(report.frequency),
            report.frequency
        );
    }
    Ok(())
}
