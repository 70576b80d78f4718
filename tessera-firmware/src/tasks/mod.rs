//! Embassy async tasks
//!
//! The volume task owns the ADC and publishes samples; the controller
//! task owns the keypad and the synthesizer.

pub mod controller;
pub mod volume;

pub use controller::controller_task;
pub use volume::volume_task;
