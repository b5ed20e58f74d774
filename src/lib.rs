//! Real time estimation of the fundamental frequency of 8-bit audio samples,
//! suitable for microcontrollers.
//!
//! Instead of an FFT, the estimator looks for phase shifts at which a signal
//! cancels out a shifted copy of itself, see [interference]. This gives
//! good frequency resolution at a small and predictable per-sample cost.
//!
//! Features
//! * `no_std`, no allocations. All buffers are fixed size arrays sized by the
//! [constants].
//! * Allocation free note classification for tuner displays, see [note].
//!
//! # Examples
//!
//! ```
//! use micro_tuner::constants::RAW_WINDOW_SIZE;
//! use micro_tuner::interference::Estimator;
//! use micro_tuner::note::{classify, Note};
//!
//! // Square wave with a period of 168 samples, i.e 261.9 Hz at 44 kHz.
//! let mut raw = [0u8; RAW_WINDOW_SIZE];
//! for (i, sample) in raw.iter_mut().enumerate() {
//!     *sample = if i % 168 < 84 { 200 } else { 50 };
//! }
//!
//! let estimate = Estimator::new().process(&raw);
//! let reading = classify(estimate.frequency).unwrap();
//! assert_eq!(reading.note, Note::C);
//! ```

#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate alloc;

pub mod common;
pub mod constants;
pub mod handoff;
pub mod interference;
pub mod note;
