//! Note status display over the defmt console
//!
//! The board has no text screen; the "display" for the control loop is
//! the defmt log stream on the debug probe.

use core::convert::Infallible;

use defmt::info;
use tessera_core::display::{note_label, NoteDisplay};

/// Display that prints note screens to the defmt console.
pub struct DefmtDisplay;

impl NoteDisplay for DefmtDisplay {
    type Error = Infallible;

    fn show_note(&mut self, index: u8) -> Result<(), Infallible> {
        if let Some((name, freq)) = note_label(index) {
            info!("note {} ({} Hz)", name, freq);
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Infallible> {
        info!("note off");
        Ok(())
    }
}
