//! Note tables and PWM timer math
//!
//! The 16 keys map onto a C major scale spanning two octaves, C4 to D6.
//! A note is produced by letting a 16-bit hardware timer overflow at the
//! note frequency: `frequency = clock / (divider * (reload + 1))`.
//!
//! For low notes the reload value overflows 16 bits at divider 1, so the
//! divider is raised until it fits. The search is monotonic from 1, which
//! keeps the reload (and therefore duty resolution) as large as possible.

/// Number of entries in the note table
pub const NOTE_COUNT: usize = 16;

/// Note frequencies in Hz, C major scale across two octaves.
pub const NOTE_FREQUENCIES_HZ: [u16; NOTE_COUNT] = [
    262, // C4
    294, // D4
    330, // E4
    349, // F4
    392, // G4
    440, // A4
    494, // B4
    523, // C5
    587, // D5
    659, // E5
    698, // F5
    784, // G5
    880, // A5
    988, // B5
    1047, // C6
    1175, // D6
];

/// Display names matching [`NOTE_FREQUENCIES_HZ`].
pub const NOTE_NAMES: [&str; NOTE_COUNT] = [
    "C4", "D4", "E4", "F4", "G4", "A4", "B4", "C5", //
    "D5", "E5", "F5", "G5", "A5", "B5", "C6", "D6",
];

/// Largest reload value the 16-bit timer can hold
pub const MAX_RELOAD: u32 = 0xFFFF;

/// Largest usable clock divider
pub const MAX_DIVIDER: u8 = 255;

/// Frequency for a logical key index, or `None` if out of range.
pub fn frequency_for(index: u8) -> Option<u16> {
    NOTE_FREQUENCIES_HZ.get(index as usize).copied()
}

/// Display name for a logical key index, or `None` if out of range.
pub fn name_for(index: u8) -> Option<&'static str> {
    NOTE_NAMES.get(index as usize).copied()
}

/// A reload/divider pair that makes the timer overflow at a note frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerSetting {
    /// Counter TOP value
    pub reload: u16,
    /// Clock divider, 1-255
    pub divider: u8,
}

impl TimerSetting {
    /// Compare level for a 50% duty square wave.
    pub fn half_duty(&self) -> u16 {
        self.reload / 2
    }
}

/// Find the smallest divider that lets `reload = round(clock / (freq * d)) - 1`
/// fit in 16 bits.
///
/// Returns `None` for frequency 0 and for frequencies no divider can
/// reproduce - such notes are simply silent.
pub fn timer_setting(clock_hz: u32, freq_hz: u16) -> Option<TimerSetting> {
    if freq_hz == 0 {
        return None;
    }

    for divider in 1..=MAX_DIVIDER as u32 {
        let denom = freq_hz as u32 * divider;
        let ticks = (clock_hz + denom / 2) / denom; // round(clock / (freq * d))
        let reload = ticks.checked_sub(1)?;
        if reload <= MAX_RELOAD {
            return Some(TimerSetting {
                reload: reload as u16,
                divider: divider as u8,
            });
        }
    }

    None
}
