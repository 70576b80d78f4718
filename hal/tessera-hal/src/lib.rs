//! Tessera Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that can be implemented
//! by chip-specific HALs. This keeps the seesaw drivers, the synthesizer
//! and the control loop board-agnostic and host-testable.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (tessera-firmware)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tessera-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tessera-hal-rp2350 (embassy-rp impls)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - raw two-wire byte transfers
//! - [`pwm::TonePwm`] - square-wave tone output (period, divider, level)
//! - [`pwm::RgbLed`] - discrete RGB indicator LED
//! - [`adc::VolumeSource`] - free-running latest-sample volume cell

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod i2c;
pub mod pwm;

// Re-export key traits at crate root for convenience
pub use adc::VolumeSource;
pub use i2c::{BusError, I2cBus};
pub use pwm::{RgbLed, TonePwm};
