//! Hardware driver implementations for the Tessera keypad synthesizer
//!
//! Everything here is generic over the `tessera-hal` traits plus
//! `embedded_hal::delay::DelayNs`, so the protocol logic runs unchanged
//! on the target and under host tests with mock buses.
//!
//! - [`seesaw`] - register-addressed transport over I2C
//! - [`neotrellis`] - device lifecycle, pixel buffer protocol, keypad FIFO
//! - [`synth`] - PWM square-wave synthesizer with coupled color envelope

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod error;
pub mod neotrellis;
pub mod seesaw;
pub mod synth;

mod log;

#[cfg(test)]
pub(crate) mod testing;

pub use error::Error;
pub use neotrellis::{LifecycleState, NeoTrellis, PollReport, TrellisConfig};
pub use seesaw::SeesawBus;
pub use synth::{NoteState, Synth, SynthConfig};
