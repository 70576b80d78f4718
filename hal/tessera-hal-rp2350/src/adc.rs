//! Latest-sample volume cell
//!
//! The ADC sampler task owns the peripheral and stores each conversion
//! into a static atomic; the control loop observes the newest value
//! through [`SharedVolume`] without ever touching the hardware. A single
//! aligned 16-bit store cannot tear, so `Relaxed` ordering is enough.

use core::sync::atomic::{AtomicU16, Ordering};

use tessera_hal::VolumeSource;

/// Read side of the free-running volume sample cell.
#[derive(Clone, Copy)]
pub struct SharedVolume {
    cell: &'static AtomicU16,
}

impl SharedVolume {
    pub fn new(cell: &'static AtomicU16) -> Self {
        Self { cell }
    }

    /// Publish a new raw sample. Called by the sampler task.
    pub fn store(&self, raw: u16) {
        self.cell.store(raw, Ordering::Relaxed);
    }
}

impl VolumeSource for SharedVolume {
    /// RP2350 ADC is 12-bit.
    const FULL_SCALE: u16 = 4095;

    fn latest_raw(&self) -> u16 {
        self.cell.load(Ordering::Relaxed)
    }
}
