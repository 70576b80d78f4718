//! Board-agnostic core logic for the Tessera keypad synthesizer
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Key scan-code lookup table and FIFO event decoding
//! - Note frequency tables and timer reload/divider math
//! - Attack/decay envelope math
//! - Color wheel and per-key color tables
//! - LED frame buffer and chunked-write layout
//! - Volume smoothing filter
//! - Display trait definition

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod color;
pub mod display;
pub mod envelope;
pub mod frame;
pub mod keymap;
pub mod notes;
pub mod volume;
