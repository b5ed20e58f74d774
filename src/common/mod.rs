//! Common utilities.

mod midi;

pub use midi::{cents_offset, freq_to_midi_note};
