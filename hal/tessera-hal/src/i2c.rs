//! I2C bus abstractions
//!
//! Provides traits for raw I2C master operations that can be implemented
//! by chip-specific HALs. The seesaw register protocol is layered on top
//! of these primitives in `tessera-drivers`.

/// Transport-level bus failure.
///
/// Any of these means "the operation did not complete" - callers must not
/// assume partial state changed on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// Device did not acknowledge its address or a data byte
    NoAck,
    /// Transaction exceeded the bounded timeout
    Timeout,
    /// Fewer bytes transferred than requested
    ShortTransfer,
}

/// I2C bus master
///
/// Both operations are synchronous and blocking with a bounded timeout.
/// No retries are performed at this layer; retry policy belongs to callers.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write in a single transaction
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Read data from a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `buf` - Buffer to fill; the whole buffer must be read
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error>;
}

/// I2C configuration
#[derive(Debug, Clone, Copy)]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        // The seesaw runs fine at fast mode and the NeoPixel buffer writes
        // are the longest transactions, so default to 400kHz.
        Self::FAST
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self { frequency: 400_000 };
}
