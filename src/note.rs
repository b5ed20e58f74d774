//! Mapping of estimated frequencies to the chromatic scale, for driving a
//! seven-segment note display and low/in tune/high indicator LEDs.
//!
//! Frequencies are first moved into the octave starting at A3 (220 Hz) by
//! repeated doubling or halving, then matched against quarter tone ranges
//! around each note.

use crate::common::cents_offset;

/// Frequencies closer than this to the reference frequency of a note, in Hz,
/// are considered in tune.
pub const TUNE_PRECISION: f32 = 0.7;

// Range bounds are f64. Frequencies are widened to f64 before comparing.

/// Lower end of the A3 range, a quarter tone below 220 Hz (220 / 1.0293).
pub const A3_BOTTOM: f64 = 213.74;

/// Lower end of the A4 range, a quarter tone below 440 Hz (440 / 1.0293).
pub const A4_BOTTOM: f64 = 427.47;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Note {
    A,
    ASharp,
    B,
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
}

const NOTES: [Note; 12] = [
    Note::A,
    Note::ASharp,
    Note::B,
    Note::C,
    Note::CSharp,
    Note::D,
    Note::DSharp,
    Note::E,
    Note::F,
    Note::FSharp,
    Note::G,
    Note::GSharp,
];

impl Note {
    /// All notes of the octave starting at A.
    pub fn all() -> &'static [Note; 12] {
        &NOTES
    }

    pub fn name(self) -> &'static str {
        match self {
            Note::A => "A",
            Note::ASharp => "A#",
            Note::B => "B",
            Note::C => "C",
            Note::CSharp => "C#",
            Note::D => "D",
            Note::DSharp => "D#",
            Note::E => "E",
            Note::F => "F",
            Note::FSharp => "F#",
            Note::G => "G",
            Note::GSharp => "G#",
        }
    }

    /// Frequency of the note in the octave starting at A3, in Hz.
    pub fn reference_frequency(self) -> f32 {
        match self {
            Note::A => 220.00,
            Note::ASharp => 233.08,
            Note::B => 246.94,
            Note::C => 261.63,
            Note::CSharp => 277.18,
            Note::D => 293.66,
            Note::DSharp => 311.13,
            Note::E => 329.63,
            Note::F => 349.23,
            Note::FSharp => 369.99,
            Note::G => 392.00,
            Note::GSharp => 415.30,
        }
    }

    /// Lower end of the range of frequencies classified as this note.
    /// The range ends where the range of the next note starts.
    pub fn bottom_frequency(self) -> f64 {
        match self {
            Note::A => A3_BOTTOM,
            Note::ASharp => 226.45,
            Note::B => 239.91,
            Note::C => 254.18,
            Note::CSharp => 269.29,
            Note::D => 285.30,
            Note::DSharp => 302.27,
            Note::E => 320.25,
            Note::F => 339.29,
            Note::FSharp => 359.46,
            Note::G => 380.849,
            Note::GSharp => 403.48,
        }
    }

    fn top_frequency(self) -> f64 {
        match self {
            Note::GSharp => A4_BOTTOM,
            note => NOTES[note as usize + 1].bottom_frequency(),
        }
    }

    /// Segment pattern for a common anode seven-segment display.
    /// Bit 7 is segment A, bit 1 is segment G and bit 0 is the dot, which
    /// is lit for sharps. A cleared bit means a lit segment.
    pub fn segments(self) -> u8 {
        match self {
            Note::A => 0b00010001,
            Note::ASharp => 0b00010000,
            Note::B => 0b11000001,
            Note::C => 0b01100011,
            Note::CSharp => 0b01100010,
            Note::D => 0b10000101,
            Note::DSharp => 0b10000100,
            Note::E => 0b01100001,
            Note::F => 0b01110001,
            Note::FSharp => 0b01110000,
            Note::G => 0b01000011,
            Note::GSharp => 0b01000010,
        }
    }
}

/// Doubles `freq` while it is below `A3_BOTTOM`, then halves it while it is
/// above `A4_BOTTOM`. Inputs just above `A4_BOTTOM` end up slightly below
/// `A3_BOTTOM`. Returns `None` for frequencies that are not finite and positive.
pub fn normalize_octave(freq: f32) -> Option<f32> {
    if !freq.is_finite() || freq <= 0.0 {
        return None;
    }
    let mut freq = freq;
    while (freq as f64) < A3_BOTTOM {
        freq *= 2.0;
    }
    while (freq as f64) > A4_BOTTOM {
        freq /= 2.0;
    }
    Some(freq)
}

/// State of the three tuning indicator LEDs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TuneIndicator {
    Low,
    InTune,
    High,
}

impl TuneIndicator {
    /// Classifies a deviation from a reference frequency, in Hz.
    pub fn from_deviation(deviation: f32) -> Self {
        if deviation < -TUNE_PRECISION {
            TuneIndicator::Low
        } else if deviation > TUNE_PRECISION {
            TuneIndicator::High
        } else {
            TuneIndicator::InTune
        }
    }

    /// The states of the low, in tune and high LEDs, in that order.
    pub fn leds(self) -> [bool; 3] {
        match self {
            TuneIndicator::Low => [true, false, false],
            TuneIndicator::InTune => [false, true, false],
            TuneIndicator::High => [false, false, true],
        }
    }
}

/// A frequency matched to a note.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoteReading {
    pub note: Note,
    /// The classified frequency, moved into the octave starting at A3.
    pub frequency: f32,
    pub indicator: TuneIndicator,
}

impl NoteReading {
    /// Difference from the reference frequency of the note, in Hz.
    pub fn deviation(&self) -> f32 {
        self.frequency - self.note.reference_frequency()
    }

    pub fn cents_offset(&self) -> f32 {
        cents_offset(self.frequency, self.note.reference_frequency())
    }
}

/// Finds the note closest to `freq`, in any octave.
///
/// Returns `None` if `freq` is not finite and positive, or if it falls exactly
/// on the boundary between two notes.
pub fn classify(freq: f32) -> Option<NoteReading> {
    let frequency = normalize_octave(freq)?;
    let note = NOTES
        .iter()
        .copied()
        .find(|note| {
            let frequency = frequency as f64;
            frequency > note.bottom_frequency() && frequency < note.top_frequency()
        })?;
    Some(NoteReading {
        note,
        frequency,
        indicator: TuneIndicator::from_deviation(frequency - note.reference_frequency()),
    })
}
