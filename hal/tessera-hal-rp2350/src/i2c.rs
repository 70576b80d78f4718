//! Blocking I2C master over embassy-rp
//!
//! Wraps any `embedded_hal::i2c::I2c` implementation (in practice
//! `embassy_rp::i2c::I2c` in blocking mode) and collapses its error type
//! to the transport-level [`BusError`] the drivers reason about.

use embedded_hal::i2c::{Error as _, ErrorKind, I2c, NoAcknowledgeSource};
use tessera_hal::{BusError, I2cBus};

/// Blocking bus adapter around an `embedded-hal` I2C master.
pub struct BlockingBus<I> {
    inner: I,
}

impl<I> BlockingBus<I> {
    pub fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Consume the adapter and return the wrapped peripheral.
    pub fn release(self) -> I {
        self.inner
    }
}

impl<I: I2c> I2cBus for BlockingBus<I> {
    type Error = BusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), BusError> {
        self.inner.write(address, data).map_err(collapse)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), BusError> {
        self.inner.read(address, buf).map_err(collapse)
    }
}

fn collapse<E: embedded_hal::i2c::Error>(err: E) -> BusError {
    match err.kind() {
        ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)
        | ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data)
        | ErrorKind::NoAcknowledge(NoAcknowledgeSource::Unknown) => BusError::NoAck,
        ErrorKind::Overrun => BusError::ShortTransfer,
        _ => BusError::Timeout,
    }
}
