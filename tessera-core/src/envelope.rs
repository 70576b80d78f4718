//! Attack/decay envelope math
//!
//! The synthesizer shapes every note with a fixed-step linear ramp: the
//! PWM compare level and the indicator color brightness rise together over
//! the attack, and fall together over the decay. The math here is pure;
//! the actual level writes and inter-step delays live in the synth driver.
//!
//! Step 0 is always exactly zero and step `steps` exactly the target, so
//! a full attack/decay pair returns both audio and color to their precise
//! endpoints.

use crate::color::Rgb;

/// Envelope shape configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EnvelopeConfig {
    /// Number of ramp steps
    pub steps: u16,
    /// Delay between steps in milliseconds
    pub step_ms: u32,
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            steps: 20,
            step_ms: 50,
        }
    }
}

/// PWM level at ramp position `step` of `steps` toward `target`.
pub fn level_at(target: u16, step: u16, steps: u16) -> u16 {
    debug_assert!(steps > 0);
    (target as u32 * step as u32 / steps as u32) as u16
}

/// Color at ramp position `step` of `steps` toward `base`.
pub fn color_at(base: Rgb, step: u16, steps: u16) -> Rgb {
    Rgb::new(
        scale_channel(base.r, step, steps),
        scale_channel(base.g, step, steps),
        scale_channel(base.b, step, steps),
    )
}

fn scale_channel(channel: u8, step: u16, steps: u16) -> u8 {
    (channel as u32 * step as u32 / steps as u32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        assert_eq!(level_at(31806, 0, 20), 0);
        assert_eq!(level_at(31806, 20, 20), 31806);

        let base = Rgb::new(255, 0, 255);
        assert_eq!(color_at(base, 0, 20), Rgb::OFF);
        assert_eq!(color_at(base, 20, 20), base);
    }

    #[test]
    fn test_ramp_is_monotonic() {
        let mut last = 0;
        for step in 0..=20 {
            let level = level_at(40_000, step, 20);
            assert!(level >= last);
            last = level;
        }
        assert_eq!(last, 40_000);
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(level_at(1000, 10, 20), 500);
        assert_eq!(color_at(Rgb::new(200, 100, 0), 10, 20), Rgb::new(100, 50, 0));
    }
}
