//! Buffered pixel writes and the show/latch protocol
//!
//! The controller applies its 48-byte pixel buffer to the physical strip
//! only on a "show" command; buffer writes before that are invisible.
//! Writes longer than one transport chunk are split by
//! `LedFrame::chunks`, each chunk prefixed with its 2-byte big-endian
//! byte offset and issued in increasing offset order.

use embedded_hal::delay::DelayNs;
use tessera_core::color::{rainbow_hue, wheel, Rgb};
use tessera_core::frame::{LedFrame, CELL_COUNT, MAX_CHUNK_DATA};
use tessera_hal::I2cBus;

use super::NeoTrellis;
use crate::error::Error;
use crate::seesaw::registers::*;

/// Delay between the last buffer write and the show command
pub const PRE_SHOW_DELAY_US: u32 = 300;
/// Settle time after a show command
pub const SHOW_SETTLE_MS: u32 = 10;
/// Number of animation frames in the startup rainbow
pub const RAINBOW_FRAMES: usize = 32;
/// Delay between rainbow animation frames
pub const RAINBOW_FRAME_MS: u32 = 60;

impl<I2C, D> NeoTrellis<I2C, D>
where
    I2C: I2cBus,
    D: DelayNs,
{
    /// Latch the remote buffer onto the physical strip.
    pub fn show(&mut self) -> Result<(), Error<I2C::Error>> {
        self.bus.command(MODULE_NEOPIXEL, NEOPIXEL_SHOW)?;
        self.bus.pause_ms(SHOW_SETTLE_MS);
        Ok(())
    }

    /// Read-only view of the local frame shadow.
    pub fn led_frame(&self) -> &LedFrame {
        &self.frame
    }

    /// Push the whole local frame to the remote buffer, chunked.
    ///
    /// The full chunk sequence must complete before the next show; an
    /// error aborts the sequence and leaves the remote buffer suspect
    /// (the next `set_one` re-syncs it).
    fn write_frame(&mut self) -> Result<(), Error<I2C::Error>> {
        let mut payload = [0u8; 2 + MAX_CHUNK_DATA];
        for (offset, data) in self.frame.chunks() {
            payload[..2].copy_from_slice(&offset.to_be_bytes());
            payload[2..2 + data.len()].copy_from_slice(data);
            self.bus
                .write(MODULE_NEOPIXEL, NEOPIXEL_BUF, &payload[..2 + data.len()])?;
        }
        Ok(())
    }

    /// Light a single cell, blanking everything else.
    ///
    /// Clears the entire remote buffer first as a defensive re-sync
    /// against partially completed prior writes, then writes the one
    /// cell and latches.
    pub fn set_one(&mut self, index: usize, color: Rgb) -> Result<(), Error<I2C::Error>> {
        if index >= CELL_COUNT {
            return Err(Error::OutOfRange);
        }

        self.frame.clear();
        self.write_frame()?;
        self.show()?;

        self.frame.set(index, color).map_err(|_| Error::OutOfRange)?;

        let offset = LedFrame::cell_offset(index);
        let mut payload = [0u8; 2 + 3];
        payload[..2].copy_from_slice(&offset.to_be_bytes());
        // Wire order within a cell is G, R, B
        payload[2] = color.g;
        payload[3] = color.r;
        payload[4] = color.b;
        self.bus.write(MODULE_NEOPIXEL, NEOPIXEL_BUF, &payload)?;

        self.bus.pause_us(PRE_SHOW_DELAY_US);
        self.show()
    }

    /// Set every cell to one color and latch.
    pub fn fill_all(&mut self, color: Rgb) -> Result<(), Error<I2C::Error>> {
        self.frame.fill(color);
        self.write_frame()?;
        self.bus.pause_us(PRE_SHOW_DELAY_US);
        self.show()
    }

    /// Run the fixed startup rainbow animation, then blank the pad.
    ///
    /// 32 frames; each cell's hue advances 8 positions per frame around
    /// the color wheel, offset 16 positions per cell.
    pub fn rainbow_startup(&mut self) -> Result<(), Error<I2C::Error>> {
        for step in 0..RAINBOW_FRAMES {
            for cell in 0..CELL_COUNT {
                let color = wheel(rainbow_hue(cell, step));
                let _ = self.frame.set(cell, color);
            }

            self.write_frame()?;
            self.bus.pause_us(PRE_SHOW_DELAY_US);
            self.show()?;
            self.bus.pause_ms(RAINBOW_FRAME_MS);
        }

        self.fill_all(Rgb::OFF)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neotrellis::TrellisConfig;
    use crate::testing::{MockBus, NoopDelay, RecordingDelay};
    use tessera_hal::BusError;

    fn trellis() -> NeoTrellis<MockBus, NoopDelay> {
        NeoTrellis::new(MockBus::default(), NoopDelay, TrellisConfig::default())
    }

    fn buf_writes(bus: &MockBus) -> std::vec::Vec<&std::vec::Vec<u8>> {
        bus.writes()
            .iter()
            .filter(|w| w[..2] == [MODULE_NEOPIXEL, NEOPIXEL_BUF])
            .collect()
    }

    #[test]
    fn test_fill_all_chunks_with_offsets_then_shows() {
        let mut trellis = trellis();
        trellis.fill_all(Rgb::new(1, 2, 3)).unwrap();

        let writes = buf_writes(&trellis.bus.i2c);
        assert_eq!(writes.len(), 2);

        // First chunk: offset 0, 28 data bytes
        assert_eq!(&writes[0][2..4], &[0x00, 0x00]);
        assert_eq!(writes[0].len(), 4 + 28);
        // Second chunk: offset 28, remaining 20 bytes
        assert_eq!(&writes[1][2..4], &[0x00, 28]);
        assert_eq!(writes[1].len(), 4 + 20);

        // Cell 0 wire bytes are G, R, B
        assert_eq!(&writes[0][4..7], &[2, 1, 3]);

        // Show is the last transaction
        let last = trellis.bus.i2c.writes().last().unwrap();
        assert_eq!(last[..], [MODULE_NEOPIXEL, NEOPIXEL_SHOW]);
    }

    #[test]
    fn test_set_one_resyncs_then_writes_cell() {
        let mut trellis = trellis();
        trellis.set_one(7, Rgb::new(0x20, 0, 0)).unwrap();

        let writes = buf_writes(&trellis.bus.i2c);
        // Two clearing chunks plus the single-cell write
        assert_eq!(writes.len(), 3);
        assert!(writes[0][4..].iter().all(|&b| b == 0));
        assert!(writes[1][4..].iter().all(|&b| b == 0));

        // Cell 7 lives at byte offset 21
        assert_eq!(&writes[2][2..], &[0x00, 21, 0x00, 0x20, 0x00]);

        // Local shadow tracks the remote buffer
        assert_eq!(trellis.led_frame().get(7), Some(Rgb::new(0x20, 0, 0)));
        for cell in (0..CELL_COUNT).filter(|&c| c != 7) {
            assert_eq!(trellis.led_frame().get(cell), Some(Rgb::OFF));
        }
    }

    #[test]
    fn test_set_one_rejects_out_of_range_index() {
        let mut trellis = trellis();
        assert_eq!(trellis.set_one(16, Rgb::OFF), Err(Error::OutOfRange));
        // No transaction was issued
        assert!(trellis.bus.i2c.writes().is_empty());
    }

    #[test]
    fn test_fill_then_set_one_leaves_single_cell_on_wire() {
        let mut trellis = trellis();
        trellis.fill_all(Rgb::OFF).unwrap();
        trellis.set_one(7, Rgb::new(0x20, 0, 0)).unwrap();

        let writes = buf_writes(&trellis.bus.i2c);
        let cell_write = writes.last().unwrap();
        assert_eq!(&cell_write[2..], &[0x00, 21, 0x00, 0x20, 0x00]);

        let frame = trellis.led_frame();
        let lit: std::vec::Vec<usize> = (0..CELL_COUNT)
            .filter(|&c| frame.get(c) != Some(Rgb::OFF))
            .collect();
        assert_eq!(lit, [7]);
    }

    #[test]
    fn test_write_failure_aborts_before_show() {
        let mut i2c = MockBus::default();
        i2c.fail_writes_to_module = Some(MODULE_NEOPIXEL);
        let mut trellis = NeoTrellis::new(i2c, NoopDelay, TrellisConfig::default());

        assert_eq!(
            trellis.fill_all(Rgb::new(1, 1, 1)),
            Err(Error::Bus(BusError::NoAck))
        );
        assert!(trellis.bus.i2c.writes().is_empty());
    }

    #[test]
    fn test_rainbow_runs_32_frames_and_blanks() {
        let mut trellis =
            NeoTrellis::new(MockBus::default(), RecordingDelay::default(), TrellisConfig::default());
        trellis.rainbow_startup().unwrap();

        let shows = trellis
            .bus
            .i2c
            .writes()
            .iter()
            .filter(|w| w[..] == [MODULE_NEOPIXEL, NEOPIXEL_SHOW])
            .count();
        // One show per animation frame plus the final blank
        assert_eq!(shows, RAINBOW_FRAMES + 1);

        // Inter-frame delays are part of the timing contract
        let frame_delay_us = u64::from(RAINBOW_FRAME_MS) * 1_000 * RAINBOW_FRAMES as u64;
        assert!(trellis.bus.delay.total_us >= frame_delay_us);

        // Terminates blanked
        for cell in 0..CELL_COUNT {
            assert_eq!(trellis.led_frame().get(cell), Some(Rgb::OFF));
        }
    }
}
