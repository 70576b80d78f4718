//! Key scan-code lookup and keypad FIFO event decoding
//!
//! The seesaw keypad firmware scans an 8-column grid, so the raw key
//! number of the 4x4 matrix advances by 8 per row: logical key 4 (second
//! row, first column) reports as raw key 8. Application code only ever
//! deals in logical indices 0-15; the mapping lives here and nowhere else.
//!
//! A FIFO event byte packs the raw key number in the upper six bits and
//! the edge type in the lower two.

/// Number of keys on the matrix
pub const KEY_COUNT: usize = 16;

/// Sentinel returned when the event FIFO is empty
pub const FIFO_EMPTY: u8 = 0xFF;

/// Raw scan codes indexed by logical key, row-major on the 4x4 grid.
///
/// Raw code for logical key `i` is `(i / 4) * 8 + (i % 4)`.
pub const KEY_LUT: [u8; KEY_COUNT] = [
    0, 1, 2, 3, //
    8, 9, 10, 11, //
    16, 17, 18, 19, //
    24, 25, 26, 27,
];

/// Edge type of a key event
///
/// The two-bit wire values for steady high (0) and steady low (1) are
/// never enabled for reporting and decode to no event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Key pressed (rising edge, wire value 3)
    Rising,
    /// Key released (falling edge, wire value 2)
    Falling,
}

/// A decoded keypad event
///
/// Ephemeral - produced from one FIFO byte and consumed immediately by
/// the control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    /// Logical key index, 0-15
    pub index: u8,
    /// Press or release
    pub edge: Edge,
    /// Raw scan code as reported by the keypad module
    pub raw: u8,
}

/// Translate a raw scan code to its logical index.
///
/// Returns `None` for scan codes outside the 4x4 matrix - those indicate
/// a spurious or misconfigured event and are dropped by the decoder.
pub fn logical_from_raw(raw: u8) -> Option<u8> {
    KEY_LUT.iter().position(|&k| k == raw).map(|i| i as u8)
}

/// Raw scan code for a logical index, or `None` if out of range.
pub fn raw_for(index: u8) -> Option<u8> {
    KEY_LUT.get(index as usize).copied()
}

/// Decode one keypad FIFO byte.
///
/// Returns `None` for the FIFO-empty sentinel, for edge values that were
/// never enabled for reporting, and for scan codes that do not map onto
/// the matrix.
pub fn decode_event(byte: u8) -> Option<KeyEvent> {
    if byte == FIFO_EMPTY {
        return None;
    }

    let raw = byte >> 2;
    let edge = match byte & 0x03 {
        3 => Edge::Rising,
        2 => Edge::Falling,
        // 0 (steady high) and 1 (steady low) are not configured edges
        _ => return None,
    };

    let index = logical_from_raw(raw)?;
    Some(KeyEvent { index, edge, raw })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn encode(raw: u8, edge_bits: u8) -> u8 {
        (raw << 2) | edge_bits
    }

    #[test]
    fn test_lut_matches_scan_formula() {
        for i in 0..KEY_COUNT {
            let expected = (i / 4) * 8 + (i % 4);
            assert_eq!(KEY_LUT[i], expected as u8);
        }
    }

    #[test]
    fn test_decode_rising_event() {
        let event = decode_event(encode(9, 3)).unwrap();
        assert_eq!(event.index, 5);
        assert_eq!(event.edge, Edge::Rising);
        assert_eq!(event.raw, 9);
    }

    #[test]
    fn test_decode_falling_event() {
        let event = decode_event(encode(24, 2)).unwrap();
        assert_eq!(event.index, 12);
        assert_eq!(event.edge, Edge::Falling);
    }

    #[test]
    fn test_fifo_empty_sentinel_is_no_event() {
        assert_eq!(decode_event(FIFO_EMPTY), None);
    }

    #[test]
    fn test_unconfigured_edges_are_skipped() {
        assert_eq!(decode_event(encode(0, 0)), None);
        assert_eq!(decode_event(encode(0, 1)), None);
    }

    #[test]
    fn test_unmapped_scan_code_is_skipped() {
        // Raw 4-7 sit in the scan gap between rows
        assert_eq!(decode_event(encode(4, 3)), None);
        assert_eq!(decode_event(encode(31, 3)), None);
    }

    proptest! {
        #[test]
        fn prop_raw_logical_round_trip(index in 0u8..16) {
            let raw = raw_for(index).unwrap();
            prop_assert_eq!(logical_from_raw(raw), Some(index));
        }

        #[test]
        fn prop_decoded_index_always_in_range(byte in any::<u8>()) {
            if let Some(event) = decode_event(byte) {
                prop_assert!((event.index as usize) < KEY_COUNT);
                prop_assert_eq!(event.raw, byte >> 2);
            }
        }
    }
}
