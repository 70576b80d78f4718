//! Register-addressed seesaw transport
//!
//! A write is a single bus transaction carrying `[module, function,
//! payload...]`. A read is a write of `[module, function]`, a settle
//! delay for the seesaw firmware to stage its response, then a raw read
//! of the requested length.
//!
//! No retries happen at this layer; any error means "not completed" and
//! retry policy belongs to the caller.

pub mod registers;

use embedded_hal::delay::DelayNs;
use tessera_hal::I2cBus;

use registers::SETTLE_DELAY_US;

/// Largest payload a single register write carries: the 2-byte pixel
/// buffer offset plus one data chunk.
pub const MAX_WRITE_PAYLOAD: usize = 2 + tessera_core::frame::MAX_CHUNK_DATA;

/// Seesaw register transport over a raw I2C bus.
pub struct SeesawBus<I2C, D> {
    pub(crate) i2c: I2C,
    pub(crate) delay: D,
    address: u8,
}

impl<I2C, D> SeesawBus<I2C, D>
where
    I2C: I2cBus,
    D: DelayNs,
{
    /// Create a transport for the device at `address`.
    pub fn new(i2c: I2C, delay: D, address: u8) -> Self {
        Self { i2c, delay, address }
    }

    /// Write `[module, function, payload...]` as one transaction.
    ///
    /// `payload` must fit [`MAX_WRITE_PAYLOAD`]; longer writes are the
    /// caller's job to chunk (see `tessera_core::frame`).
    pub fn write(&mut self, module: u8, function: u8, payload: &[u8]) -> Result<(), I2C::Error> {
        debug_assert!(payload.len() <= MAX_WRITE_PAYLOAD);

        let mut buf = [0u8; 2 + MAX_WRITE_PAYLOAD];
        buf[0] = module;
        buf[1] = function;
        let len = payload.len().min(MAX_WRITE_PAYLOAD);
        buf[2..2 + len].copy_from_slice(&payload[..len]);

        self.i2c.write(self.address, &buf[..2 + len])
    }

    /// Write a bare `[module, function]` command with no payload.
    pub fn command(&mut self, module: u8, function: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[module, function])
    }

    /// Select a register, wait the settle delay, then read `buf.len()`
    /// bytes.
    pub fn read(&mut self, module: u8, function: u8, buf: &mut [u8]) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[module, function])?;
        self.delay.delay_us(SETTLE_DELAY_US);
        self.i2c.read(self.address, buf)
    }

    /// Read a single register byte.
    pub fn read_u8(&mut self, module: u8, function: u8) -> Result<u8, I2C::Error> {
        let mut buf = [0u8; 1];
        self.read(module, function, &mut buf)?;
        Ok(buf[0])
    }

    /// Read a big-endian 32-bit register.
    pub fn read_u32(&mut self, module: u8, function: u8) -> Result<u32, I2C::Error> {
        let mut buf = [0u8; 4];
        self.read(module, function, &mut buf)?;
        Ok(u32::from_be_bytes(buf))
    }

    /// Block for `ms` milliseconds on the transport's delay source.
    ///
    /// Protocol sleeps (reset settle, show latch, animation frames) are
    /// part of the timing contract and go through here so host tests can
    /// observe them.
    pub fn pause_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    /// Block for `us` microseconds.
    pub fn pause_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }
}
