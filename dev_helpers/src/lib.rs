pub mod error;
pub mod sampler;
pub mod signal;
pub mod tuner;
pub mod wav;

pub use error::{HelperError, Result};
pub use sampler::{RawSampleWindow, Sampler};
pub use signal::{Noisy, Oscillator, Waveform};
pub use tuner::TunerReport;

use micro_tuner::common::freq_to_midi_note;

/// Formats a frequency as the nearest equal tempered note, including its
/// octave, followed by the offset in cents.
pub fn frequency_to_string(frequency: f32) -> String {
    const NOTE_NAMES: [&str; 12] = [
        "A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#",
    ];
    // Midi note 21 is A0.
    let midi_a0 = 21;
    let note_number = freq_to_midi_note(frequency);
    let nearest = (note_number.round() as i32).max(midi_a0);
    let semitones_above_a0 = (nearest - midi_a0) as usize;
    // Octave numbers change at C, names are indexed from A.
    let octave = (semitones_above_a0 + 9) / 12;
    let cents = (100.0 * (note_number - nearest as f32)).round() as i32;
    format!(
        "{:>2}{} {:+03} cents",
        NOTE_NAMES[semitones_above_a0 % 12],
        octave,
        cents
    )
}
