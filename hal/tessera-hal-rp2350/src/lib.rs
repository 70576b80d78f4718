//! RP2350-specific HAL for the Tessera firmware
//!
//! Implements the shared `tessera-hal` traits on top of embassy-rp
//! peripherals:
//!
//! - [`i2c::BlockingBus`] - blocking I2C master for the seesaw transport
//! - [`pwm::PwmTone`] - square-wave audio on one PWM channel
//! - [`pwm::PwmRgbLed`] - common-anode RGB LED across two PWM slices
//! - [`adc::SharedVolume`] - latest-sample volume cell fed by the sampler task

#![no_std]

pub mod adc;
pub mod i2c;
pub mod pwm;

pub use adc::SharedVolume;
pub use i2c::BlockingBus;
pub use pwm::{PwmRgbLed, PwmTone};
