//! Color types and tables
//!
//! The logical API order is (r, g, b) everywhere; only the LED frame
//! buffer in [`crate::frame`] reorders channels for the wire.

/// An RGB color triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// All channels off
    pub const OFF: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Per-key press colors, indexed by logical key.
pub const KEY_COLORS: [Rgb; 16] = [
    Rgb::new(0x20, 0x00, 0x00), // red
    Rgb::new(0x00, 0x20, 0x00), // green
    Rgb::new(0x00, 0x00, 0x20), // blue
    Rgb::new(0x20, 0x20, 0x00), // yellow
    Rgb::new(0x20, 0x00, 0x20), // magenta
    Rgb::new(0x00, 0x20, 0x20), // cyan
    Rgb::new(0x10, 0x10, 0x20), // bluish
    Rgb::new(0x20, 0x10, 0x00), // orange
    Rgb::new(0x10, 0x20, 0x00), // yellow-green
    Rgb::new(0x00, 0x10, 0x20), // teal
    Rgb::new(0x20, 0x00, 0x10), // pink-red
    Rgb::new(0x10, 0x00, 0x20), // violet
    Rgb::new(0x05, 0x20, 0x05), // light green
    Rgb::new(0x20, 0x05, 0x05), // light red
    Rgb::new(0x05, 0x05, 0x20), // light blue
    Rgb::new(0x20, 0x10, 0x20), // lavender
];

/// Hue span of each color wheel segment
const WHEEL_SEGMENT: u8 = 85;

/// Map a hue position 0-255 onto the three-segment color wheel:
/// red to green, green to blue, blue back to red.
pub fn wheel(pos: u8) -> Rgb {
    if pos < WHEEL_SEGMENT {
        Rgb::new(255 - pos * 3, pos * 3, 0)
    } else if pos < 2 * WHEEL_SEGMENT {
        let pos = pos - WHEEL_SEGMENT;
        Rgb::new(0, 255 - pos * 3, pos * 3)
    } else {
        let pos = pos - 2 * WHEEL_SEGMENT;
        Rgb::new(pos * 3, 0, 255 - pos * 3)
    }
}

/// Hue for one cell of one frame of the startup rainbow animation.
pub fn rainbow_hue(cell: usize, step: usize) -> u8 {
    ((cell * 16 + step * 8) & 0xFF) as u8
}

/// Base envelope color for a note frequency: low notes red, mid green,
/// high blue.
pub fn band_color(freq_hz: u16) -> Rgb {
    if freq_hz < 330 {
        Rgb::new(255, 0, 0)
    } else if freq_hz < 440 {
        Rgb::new(0, 255, 0)
    } else {
        Rgb::new(0, 0, 255)
    }
}
