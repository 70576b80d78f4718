//! Volume pot smoothing
//!
//! The ADC overwrites a shared cell with raw pot readings in the
//! background; the control loop feeds the latest sample through this
//! filter once per tick. Smoothing is an exponential moving average,
//! followed by a dead zone (so the pot reliably reaches silence at the
//! bottom of its travel) and a squared perceptual curve.
//!
//! The result is a 0-1 multiplier applied to the synthesizer's current
//! output level - after envelope shaping, never instead of it.

/// EMA weight kept from the previous smoothed value
const SMOOTHING: f32 = 0.9;

/// Readings below this scalar are treated as silence
const DEAD_ZONE: f32 = 0.02;

/// Exponential smoothing filter over raw pot samples
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VolumeFilter {
    smoothed: f32,
}

impl VolumeFilter {
    pub const fn new() -> Self {
        Self { smoothed: 0.0 }
    }

    /// Fold in the latest raw sample and return the shaped 0-1 scalar.
    pub fn update(&mut self, raw: u16, full_scale: u16) -> f32 {
        let normalized = raw as f32 / full_scale as f32;
        self.smoothed = SMOOTHING * self.smoothed + (1.0 - SMOOTHING) * normalized;
        self.scalar()
    }

    /// Current shaped scalar without folding in a new sample.
    pub fn scalar(&self) -> f32 {
        let v = self.smoothed;
        if v < DEAD_ZONE {
            return 0.0;
        }
        // Squared curve matches perceived loudness better than linear
        v * v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_SCALE: u16 = 4095;

    #[test]
    fn test_converges_to_full_scale() {
        let mut filter = VolumeFilter::new();
        let mut scalar = 0.0;
        for _ in 0..500 {
            scalar = filter.update(FULL_SCALE, FULL_SCALE);
        }
        assert!(scalar > 0.99);
        assert!(scalar <= 1.0);
    }

    #[test]
    fn test_single_sample_moves_a_tenth() {
        let mut filter = VolumeFilter::new();
        filter.update(FULL_SCALE, FULL_SCALE);
        // One full-scale sample from rest: smoothed = 0.1, shaped = 0.01
        let expected = 0.1f32 * 0.1;
        assert!((filter.scalar() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_dead_zone_yields_exact_silence() {
        let mut filter = VolumeFilter::new();
        // Raw readings near the bottom of travel never escape the dead zone
        for _ in 0..500 {
            assert_eq!(filter.update(40, FULL_SCALE), 0.0);
        }
    }

    #[test]
    fn test_curve_is_squared() {
        let mut filter = VolumeFilter::new();
        let mut scalar = 0.0;
        for _ in 0..500 {
            scalar = filter.update(FULL_SCALE / 2, FULL_SCALE);
        }
        let linear = (FULL_SCALE / 2) as f32 / FULL_SCALE as f32;
        assert!((scalar - linear * linear).abs() < 1e-3);
    }
}
