//! Seesaw register map and protocol constants
//!
//! The seesaw firmware uses two-byte register addressing: a module byte
//! selecting a functional block, then a function byte selecting a
//! register or command within it. Only the modules the NeoTrellis uses
//! are listed here.

/// Status module (reset, hardware id, version)
pub const MODULE_STATUS: u8 = 0x00;
/// NeoPixel module (pixel buffer and strip configuration)
pub const MODULE_NEOPIXEL: u8 = 0x0E;
/// Keypad module (event configuration and FIFO)
pub const MODULE_KEYPAD: u8 = 0x10;

/// Hardware id register (1 byte)
pub const STATUS_HW_ID: u8 = 0x01;
/// Firmware version register (4 bytes, big-endian)
pub const STATUS_VERSION: u8 = 0x02;
/// Software reset command register
pub const STATUS_SWRST: u8 = 0x7F;

/// NeoPixel output pin register
pub const NEOPIXEL_PIN: u8 = 0x01;
/// NeoPixel strip speed register (0x01 = 800 kHz)
pub const NEOPIXEL_SPEED: u8 = 0x02;
/// Pixel buffer length register (2 bytes, big-endian)
pub const NEOPIXEL_BUF_LENGTH: u8 = 0x03;
/// Pixel buffer write register (2-byte offset then data)
pub const NEOPIXEL_BUF: u8 = 0x04;
/// Latch command: copy the buffer onto the physical strip
pub const NEOPIXEL_SHOW: u8 = 0x05;

/// Per-key event enable register
pub const KEYPAD_EVENT: u8 = 0x01;
/// Keypad interrupt enable register
pub const KEYPAD_INTENSET: u8 = 0x02;
/// Pending event count register
pub const KEYPAD_COUNT: u8 = 0x04;
/// Event FIFO register
pub const KEYPAD_FIFO: u8 = 0x10;

/// Hardware id the SAMD09 seesaw reports when ready
pub const HW_ID_CODE: u8 = 0x55;

/// Default I2C address of the NeoTrellis
pub const DEFAULT_ADDRESS: u8 = 0x2E;

/// Delay between the register-select write and the data read of a read
/// transaction. The seesaw firmware needs this to stage its response.
pub const SETTLE_DELAY_US: u32 = 250;

/// Falling edge selector for keypad event configuration
pub const KEYPAD_EDGE_FALLING: u8 = 2;
/// Rising edge selector for keypad event configuration
pub const KEYPAD_EDGE_RISING: u8 = 3;
