//! NeoTrellis device driver
//!
//! Owns the seesaw transport and the local LED frame shadow, and takes
//! the device through its bring-up state machine:
//!
//! ```text
//! Uninitialized -> Reset -> AwaitingReady -> Configuring -> Ready
//!                     \________________________|
//!                                              v
//!                                           Failed
//! ```
//!
//! `Failed` is absorbing: any step that errors parks the device there and
//! the error is reported to the caller, never silently retried. Reaching
//! `Ready` is a precondition for the pixel and keypad operations in the
//! sibling modules.

mod keypad;
mod pixels;

pub use keypad::{PollReport, MAX_EVENT_BURST};

use embedded_hal::delay::DelayNs;
use tessera_core::frame::LedFrame;
use tessera_core::keymap::KEY_LUT;
use tessera_hal::I2cBus;

use crate::error::Error;
use crate::log;
use crate::seesaw::registers::*;
use crate::seesaw::SeesawBus;

/// Settle time after the software reset before any further transaction
pub const RESET_SETTLE_MS: u32 = 100;
/// Interval between ready polls
pub const READY_POLL_MS: u32 = 5;
/// Default bound on the ready wait
pub const DEFAULT_READY_TIMEOUT_MS: u32 = 300;
/// Settle time after each strip configuration write
pub const CONFIG_STEP_SETTLE_MS: u32 = 200;

/// Bring-up state of the companion controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LifecycleState {
    /// No transaction issued yet
    Uninitialized,
    /// Software reset sent, settle time running
    Reset,
    /// Polling the hardware-id register for the ready code
    AwaitingReady,
    /// Writing strip and keypad configuration
    Configuring,
    /// Fully configured; all operations available
    Ready,
    /// A bring-up step failed; absorbing
    Failed,
}

/// NeoTrellis configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TrellisConfig {
    /// 7-bit I2C address
    pub address: u8,
    /// Seesaw-internal pin driving the NeoPixel strip
    pub neopixel_pin: u8,
    /// Bound on the ready wait during bring-up
    pub ready_timeout_ms: u32,
}

impl Default for TrellisConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            neopixel_pin: 3,
            ready_timeout_ms: DEFAULT_READY_TIMEOUT_MS,
        }
    }
}

/// The NeoTrellis companion controller
///
/// Process-lifetime singleton owned by the control loop; all bus traffic
/// to the device funnels through this handle.
pub struct NeoTrellis<I2C, D> {
    pub(crate) bus: SeesawBus<I2C, D>,
    pub(crate) frame: LedFrame,
    config: TrellisConfig,
    state: LifecycleState,
    hw_id: u8,
    version: u32,
}

impl<I2C, D> NeoTrellis<I2C, D>
where
    I2C: I2cBus,
    D: DelayNs,
{
    /// Create an uninitialized handle. No bus traffic happens until
    /// [`Self::init`].
    pub fn new(i2c: I2C, delay: D, config: TrellisConfig) -> Self {
        Self {
            bus: SeesawBus::new(i2c, delay, config.address),
            frame: LedFrame::new(),
            config,
            state: LifecycleState::Uninitialized,
            hw_id: 0,
            version: 0,
        }
    }

    /// Current bring-up state.
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Last hardware id read during bring-up (diagnostic only).
    pub fn hw_id(&self) -> u8 {
        self.hw_id
    }

    /// Firmware version read during bring-up (diagnostic only).
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Whether bring-up completed.
    pub fn is_ready(&self) -> bool {
        self.state == LifecycleState::Ready
    }

    /// Run the full bring-up sequence: reset, ready wait, configuration.
    ///
    /// On any failure the device is parked in [`LifecycleState::Failed`]
    /// and the step's error is returned.
    pub fn init(&mut self) -> Result<(), Error<I2C::Error>> {
        match self.try_init() {
            Ok(()) => {
                self.state = LifecycleState::Ready;
                Ok(())
            }
            Err(err) => {
                self.state = LifecycleState::Failed;
                Err(err)
            }
        }
    }

    fn try_init(&mut self) -> Result<(), Error<I2C::Error>> {
        self.state = LifecycleState::Reset;
        self.reset()?;

        self.state = LifecycleState::AwaitingReady;
        self.wait_ready(self.config.ready_timeout_ms)?;

        self.state = LifecycleState::Configuring;
        self.configure_pixels(self.config.neopixel_pin)?;
        self.configure_keypad()?;
        Ok(())
    }

    /// Issue a software reset and wait the mandatory settle time.
    pub fn reset(&mut self) -> Result<(), Error<I2C::Error>> {
        self.bus.write(MODULE_STATUS, STATUS_SWRST, &[0xFF])?;
        self.bus.pause_ms(RESET_SETTLE_MS);
        Ok(())
    }

    /// Poll the hardware-id register until it returns the ready code or
    /// the timeout elapses.
    ///
    /// Read errors while the device reboots are expected and count
    /// against the timeout rather than aborting the wait.
    fn wait_ready(&mut self, timeout_ms: u32) -> Result<(), Error<I2C::Error>> {
        let polls = timeout_ms / READY_POLL_MS;
        for _ in 0..=polls {
            if let Ok(id) = self.bus.read_u8(MODULE_STATUS, STATUS_HW_ID) {
                if id == HW_ID_CODE {
                    self.hw_id = id;
                    return Ok(());
                }
            }
            self.bus.pause_ms(READY_POLL_MS);
        }
        Err(Error::LifecycleTimeout)
    }

    /// Configure the pixel strip: buffer length, refresh speed, output pin.
    fn configure_pixels(&mut self, pin: u8) -> Result<(), Error<I2C::Error>> {
        let len = (tessera_core::frame::FRAME_BYTES as u16).to_be_bytes();
        self.bus.write(MODULE_NEOPIXEL, NEOPIXEL_BUF_LENGTH, &len)?;
        self.bus.pause_ms(CONFIG_STEP_SETTLE_MS);

        // 0x01 selects the 800 kHz strip protocol
        self.bus.write(MODULE_NEOPIXEL, NEOPIXEL_SPEED, &[0x01])?;
        self.bus.pause_ms(CONFIG_STEP_SETTLE_MS);

        self.bus.write(MODULE_NEOPIXEL, NEOPIXEL_PIN, &[pin])?;
        self.bus.pause_ms(CONFIG_STEP_SETTLE_MS);
        Ok(())
    }

    /// Enable keypad interrupts and rising+falling reporting for all keys.
    fn configure_keypad(&mut self) -> Result<(), Error<I2C::Error>> {
        self.bus.write(MODULE_KEYPAD, KEYPAD_INTENSET, &[0x01])?;

        for &key in KEY_LUT.iter() {
            self.enable_key_event(key, KEYPAD_EDGE_RISING)?;
            self.enable_key_event(key, KEYPAD_EDGE_FALLING)?;
        }
        Ok(())
    }

    fn enable_key_event(&mut self, key: u8, edge: u8) -> Result<(), Error<I2C::Error>> {
        // Bit 0 activates the entry, bit (edge + 1) selects the edge
        let config = 0x01 | (1u8 << (edge + 1));
        log::debug!("keypad enable: key={} cfg={:02x}", key, config);
        self.bus.write(MODULE_KEYPAD, KEYPAD_EVENT, &[key, config])?;
        Ok(())
    }

    /// Read hardware id and firmware version for diagnostics.
    ///
    /// Fails with [`Error::ProtocolMismatch`] if the id register does not
    /// return the expected code.
    pub fn read_status(&mut self) -> Result<(u8, u32), Error<I2C::Error>> {
        let id = self.bus.read_u8(MODULE_STATUS, STATUS_HW_ID)?;
        if id != HW_ID_CODE {
            return Err(Error::ProtocolMismatch {
                expected: HW_ID_CODE,
                found: id,
            });
        }

        let version = self.bus.read_u32(MODULE_STATUS, STATUS_VERSION)?;
        self.hw_id = id;
        self.version = version;
        Ok((id, version))
    }
}
