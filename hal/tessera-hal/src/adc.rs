//! Volume input abstraction
//!
//! The volume pot is sampled continuously by hardware (ADC free-running
//! into a single cell, newest sample wins). Consumers never trigger a
//! conversion - they just observe the latest value. Staleness of one
//! sample is immaterial; the only requirement is that a read observes a
//! whole sample (single-word, no tearing).

/// Free-running latest-sample source.
pub trait VolumeSource {
    /// Full-scale raw reading (12-bit ADC = 4095).
    const FULL_SCALE: u16;

    /// Latest raw sample. Never blocks.
    fn latest_raw(&self) -> u16;
}
