//! Keypad FIFO polling and event dispatch
//!
//! One poll reads the pending-event count, drains up to
//! [`MAX_EVENT_BURST`] FIFO bytes and fans each decoded edge out to the
//! LEDs and the status display. The pad is monophonic by design: every
//! edge updates its LED, but the poll report carries only the note left
//! sounding after the burst, processed in FIFO order - the first rising
//! edge claims the note and a later falling edge withdraws it, so a
//! full tap inside one poll ends silent.
//!
//! LED and display failures are logged and never abort the poll; a dark
//! key must not silence the audio path.

use embedded_hal::delay::DelayNs;
use heapless::Vec;
use tessera_core::color::{Rgb, KEY_COLORS};
use tessera_core::display::NoteDisplay;
use tessera_core::keymap::{decode_event, Edge, KeyEvent, FIFO_EMPTY};
use tessera_hal::I2cBus;

use super::NeoTrellis;
use crate::error::Error;
use crate::log;
use crate::seesaw::registers::*;

/// Most events handled per poll, bounding worst-case bus time per tick
pub const MAX_EVENT_BURST: usize = 8;

/// FIFO bytes drained per pending event by [`NeoTrellis::clear_fifo`]
const DRAIN_BYTES_PER_EVENT: usize = 4;

/// Outcome of one keypad poll, folded over the burst in FIFO order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollReport {
    /// Note left sounding after the burst: the first rising edge not
    /// followed by a falling edge
    pub note_on: Option<u8>,
    /// Whether any falling edge was observed
    pub released: bool,
}

impl<I2C, D> NeoTrellis<I2C, D>
where
    I2C: I2cBus,
    D: DelayNs,
{
    /// Read the pending-event count. The FIFO-empty sentinel reads as
    /// zero pending events, not as an error.
    pub fn pending_events(&mut self) -> Result<u8, Error<I2C::Error>> {
        let count = self.bus.read_u8(MODULE_KEYPAD, KEYPAD_COUNT)?;
        if count == FIFO_EMPTY {
            return Ok(0);
        }
        Ok(count)
    }

    /// Drain and decode up to one burst of pending events.
    ///
    /// Individual FIFO read failures and undecodable bytes are skipped;
    /// only the count read can fail the whole poll.
    pub fn read_events(&mut self) -> Result<Vec<KeyEvent, MAX_EVENT_BURST>, Error<I2C::Error>> {
        let mut events = Vec::new();

        let count = (self.pending_events()? as usize).min(MAX_EVENT_BURST);
        for _ in 0..count {
            let byte = match self.bus.read_u8(MODULE_KEYPAD, KEYPAD_FIFO) {
                Ok(byte) => byte,
                Err(_) => {
                    log::warn!("keypad FIFO read failed, skipping event");
                    continue;
                }
            };

            if let Some(event) = decode_event(byte) {
                // Cannot overflow: at most `count` pushes
                let _ = events.push(event);
            }
        }

        Ok(events)
    }

    /// Poll the keypad and dispatch every event to the LEDs and the
    /// display.
    ///
    /// Rising edges light the key in its fixed color; falling edges
    /// blank it. LED and display errors are logged and non-fatal.
    pub fn poll_and_dispatch<N: NoteDisplay>(
        &mut self,
        display: &mut N,
    ) -> Result<PollReport, Error<I2C::Error>> {
        let mut report = PollReport::default();

        for event in self.read_events()? {
            match event.edge {
                Edge::Rising => {
                    let color = KEY_COLORS[event.index as usize];
                    if self.set_one(event.index as usize, color).is_err() {
                        log::warn!("LED update failed for key {}", event.index);
                    }

                    if report.note_on.is_none() {
                        report.note_on = Some(event.index);
                        if display.show_note(event.index).is_err() {
                            log::warn!("display update failed");
                        }
                    }
                }
                Edge::Falling => {
                    if self.set_one(event.index as usize, Rgb::OFF).is_err() {
                        log::warn!("LED update failed for key {}", event.index);
                    }

                    // A release after a press in the same burst withdraws
                    // the note, so the burst resolves as the FIFO ordered it
                    report.note_on = None;
                    report.released = true;
                    if display.clear().is_err() {
                        log::warn!("display clear failed");
                    }
                }
            }
        }

        Ok(report)
    }

    /// Drain all pending events without dispatching.
    ///
    /// Used once at startup to discard spurious events generated during
    /// bring-up. Read failures end the drain quietly.
    pub fn clear_fifo(&mut self) {
        loop {
            let count = match self.bus.read_u8(MODULE_KEYPAD, KEYPAD_COUNT) {
                Ok(count) => count,
                Err(_) => {
                    log::warn!("clear_fifo: count read failed");
                    return;
                }
            };

            if count == 0 || count == FIFO_EMPTY {
                break;
            }

            let count = (count as usize).min(MAX_EVENT_BURST);
            let mut dump = [0u8; DRAIN_BYTES_PER_EVENT * MAX_EVENT_BURST];
            if self
                .bus
                .read(
                    MODULE_KEYPAD,
                    KEYPAD_FIFO,
                    &mut dump[..DRAIN_BYTES_PER_EVENT * count],
                )
                .is_err()
            {
                log::warn!("clear_fifo: FIFO read failed");
                return;
            }
        }

        log::debug!("keypad FIFO cleared");
    }
}
