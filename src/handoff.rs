//! Passing estimates through 32-bit word channels, like the inter-core
//! FIFOs of dual-core microcontrollers.

/// An `f32` frequency reinterpreted as a `u32` word. The conversion is
/// bit-exact in both directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrequencyWord(pub u32);

impl FrequencyWord {
    pub fn frequency(self) -> f32 {
        f32::from_bits(self.0)
    }
}

impl From<f32> for FrequencyWord {
    fn from(frequency: f32) -> Self {
        FrequencyWord(frequency.to_bits())
    }
}

impl From<FrequencyWord> for f32 {
    fn from(word: FrequencyWord) -> Self {
        word.frequency()
    }
}

impl From<FrequencyWord> for u32 {
    fn from(word: FrequencyWord) -> Self {
        word.0
    }
}

impl From<u32> for FrequencyWord {
    fn from(word: u32) -> Self {
        FrequencyWord(word)
    }
}
