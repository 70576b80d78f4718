//! Status display trait
//!
//! The actual text-rendering driver is a separate concern; the control
//! loop only needs "show this note" and "clear". Display failures are
//! advisory - callers log them and carry on.
//!
//! The original firmware's note screen dispatch fell through every case
//! at or below the matched note; here the note/label pairing is a plain
//! table lookup in [`crate::notes`], one note per event.

use crate::notes;

/// Trait for the note status display
pub trait NoteDisplay {
    /// Error type for display operations
    type Error;

    /// Show the note screen for a logical key index.
    fn show_note(&mut self, index: u8) -> Result<(), Self::Error>;

    /// Clear the screen.
    fn clear(&mut self) -> Result<(), Self::Error>;
}

/// Name and frequency for a note screen, or `None` for an out-of-range
/// index. Intended for `NoteDisplay` implementations.
pub fn note_label(index: u8) -> Option<(&'static str, u16)> {
    let name = notes::name_for(index)?;
    let freq = notes::frequency_for(index)?;
    Some((name, freq))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_label_lookup() {
        assert_eq!(note_label(0), Some(("C4", 262)));
        assert_eq!(note_label(15), Some(("D6", 1175)));
        assert_eq!(note_label(16), None);
    }
}
