//! Shared mock hardware for host tests

use std::collections::VecDeque;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use tessera_hal::{BusError, I2cBus};

/// Scripted I2C bus: records writes, replays queued read responses.
#[derive(Default)]
pub struct MockBus {
    writes: Vec<Vec<u8>>,
    reads: VecDeque<Result<Vec<u8>, BusError>>,
    /// When set, writes whose first byte equals this module fail
    pub fail_writes_to_module: Option<u8>,
}

impl MockBus {
    /// Queue a successful read response.
    pub fn queue_read(&mut self, bytes: &[u8]) {
        self.reads.push_back(Ok(bytes.to_vec()));
    }

    /// Queue a failing read.
    pub fn queue_read_error(&mut self, err: BusError) {
        self.reads.push_back(Err(err));
    }

    /// All recorded write transactions, oldest first.
    pub fn writes(&self) -> &[Vec<u8>] {
        &self.writes
    }

    /// Recorded writes addressed at a seesaw module.
    pub fn writes_to_module(&self, module: u8) -> Vec<&Vec<u8>> {
        self.writes.iter().filter(|w| w.first() == Some(&module)).collect()
    }
}

impl I2cBus for MockBus {
    type Error = BusError;

    fn write(&mut self, _address: u8, data: &[u8]) -> Result<(), BusError> {
        if let (Some(module), Some(&first)) = (self.fail_writes_to_module, data.first()) {
            if module == first {
                return Err(BusError::NoAck);
            }
        }
        self.writes.push(data.to_vec());
        Ok(())
    }

    fn read(&mut self, _address: u8, buf: &mut [u8]) -> Result<(), BusError> {
        match self.reads.pop_front() {
            Some(Ok(bytes)) => {
                if bytes.len() < buf.len() {
                    return Err(BusError::ShortTransfer);
                }
                buf.copy_from_slice(&bytes[..buf.len()]);
                Ok(())
            }
            Some(Err(err)) => Err(err),
            // Script exhausted: behave like a silent device
            None => Err(BusError::Timeout),
        }
    }
}

/// Delay source that returns immediately but keeps a total, so tests can
/// assert on protocol timing.
#[derive(Default)]
pub struct RecordingDelay {
    pub total_us: u64,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_us += u64::from(ns) / 1_000;
    }
}

/// Delay source that does nothing at all.
pub struct NoopDelay;

impl DelayNs for NoopDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}
