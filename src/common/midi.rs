use micromath::F32Ext;

/// Converts a frequency in Hz to a [MIDI](https://en.wikipedia.org/wiki/MIDI) note number
/// with a fractional part. A4 at 440 Hz is note 69.
pub fn freq_to_midi_note(freq: f32) -> f32 {
    // 69 - 12 * log2(440)
    12.0 * F32Ext::log2(freq) - 36.376316562295926
}

/// The distance from `reference` to `freq` in cents, i.e hundredths of an
/// equal tempered semitone. Positive if `freq` is sharp.
pub fn cents_offset(freq: f32, reference: f32) -> f32 {
    100.0 * (freq_to_midi_note(freq) - freq_to_midi_note(reference))
}
