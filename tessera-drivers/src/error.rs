//! Driver error types

/// Errors surfaced by the NeoTrellis drivers.
///
/// Generic over the transport error so host tests and the target HAL can
/// plug in their own bus error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Transport failure; the operation did not complete and no partial
    /// device state may be assumed
    Bus(E),
    /// Device never reported ready within the bring-up timeout
    LifecycleTimeout,
    /// Unexpected status or hardware-id value
    ProtocolMismatch {
        /// Value the protocol requires
        expected: u8,
        /// Value the device returned
        found: u8,
    },
    /// Cell or key index outside the 4x4 matrix
    OutOfRange,
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Error::Bus(err)
    }
}
