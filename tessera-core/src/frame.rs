//! LED frame buffer and chunked-write layout
//!
//! The NeoTrellis holds a 48-byte remote pixel buffer (16 cells of 3
//! bytes) that is only applied to the physical LEDs after a "show"
//! command. [`LedFrame`] is the local shadow of that buffer.
//!
//! Wire byte order within a cell is G, R, B - distinct from the logical
//! (r, g, b) API order, and handled exclusively here.
//!
//! The bus transport carries at most [`MAX_CHUNK_DATA`] payload bytes per
//! transaction, so a full-frame write is split into sequential chunks,
//! each addressed by a 2-byte big-endian byte offset. [`LedFrame::chunks`]
//! yields them in increasing offset order.

use crate::color::Rgb;

/// Number of LED cells
pub const CELL_COUNT: usize = 16;

/// Bytes per cell on the wire (G, R, B)
pub const BYTES_PER_CELL: usize = 3;

/// Total remote buffer size
pub const FRAME_BYTES: usize = CELL_COUNT * BYTES_PER_CELL;

/// Largest data payload per buffered write transaction
pub const MAX_CHUNK_DATA: usize = 28;

/// Cell index outside 0-15
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndexOutOfRange;

/// Local shadow of the controller's pixel buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedFrame {
    bytes: [u8; FRAME_BYTES],
}

impl Default for LedFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl LedFrame {
    /// A blank (all off) frame
    pub const fn new() -> Self {
        Self {
            bytes: [0; FRAME_BYTES],
        }
    }

    /// Byte offset of a cell within the remote buffer.
    pub fn cell_offset(index: usize) -> u16 {
        (index * BYTES_PER_CELL) as u16
    }

    /// Set one cell. Fails for indices outside 0-15.
    pub fn set(&mut self, index: usize, color: Rgb) -> Result<(), IndexOutOfRange> {
        if index >= CELL_COUNT {
            return Err(IndexOutOfRange);
        }

        let offset = index * BYTES_PER_CELL;
        self.bytes[offset] = color.g;
        self.bytes[offset + 1] = color.r;
        self.bytes[offset + 2] = color.b;
        Ok(())
    }

    /// Read one cell back in logical order.
    pub fn get(&self, index: usize) -> Option<Rgb> {
        if index >= CELL_COUNT {
            return None;
        }

        let offset = index * BYTES_PER_CELL;
        Some(Rgb::new(
            self.bytes[offset + 1],
            self.bytes[offset],
            self.bytes[offset + 2],
        ))
    }

    /// Set every cell to the same color.
    pub fn fill(&mut self, color: Rgb) {
        for index in 0..CELL_COUNT {
            let _ = self.set(index, color);
        }
    }

    /// Blank the whole frame.
    pub fn clear(&mut self) {
        self.bytes = [0; FRAME_BYTES];
    }

    /// The raw wire bytes.
    pub fn as_bytes(&self) -> &[u8; FRAME_BYTES] {
        &self.bytes
    }

    /// Iterate `(offset, data)` chunks of at most [`MAX_CHUNK_DATA`] bytes
    /// in increasing offset order, covering the whole frame.
    pub fn chunks(&self) -> impl Iterator<Item = (u16, &[u8])> {
        self.bytes
            .chunks(MAX_CHUNK_DATA)
            .enumerate()
            .map(|(i, data)| ((i * MAX_CHUNK_DATA) as u16, data))
    }
}
