//! Monophonic square-wave synthesizer with a coupled color envelope
//!
//! A note is a 50% duty square wave on one PWM channel. Starting a note
//! runs a blocking attack ramp: the compare level and the indicator LED
//! brightness rise together in fixed steps. Stopping runs the matching
//! decay ramp down to exact silence.
//!
//! Frequencies the timer cannot reproduce play as silence rather than a
//! wrong pitch.

use embedded_hal::delay::DelayNs;
use tessera_core::color::{band_color, Rgb};
use tessera_core::envelope::{color_at, level_at, EnvelopeConfig};
use tessera_core::notes::{frequency_for, timer_setting};
use tessera_hal::{RgbLed, TonePwm};

use crate::log;

/// Synthesizer configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SynthConfig {
    /// PWM peripheral clock in Hz
    pub clock_hz: u32,
    /// Attack/decay envelope shape
    pub envelope: EnvelopeConfig,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            clock_hz: 150_000_000,
            envelope: EnvelopeConfig::default(),
        }
    }
}

/// The currently sounding note, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoteState {
    /// Frequency in Hz, 0 when silent
    pub frequency_hz: u16,
    /// Timer reload value the note was configured with
    pub reload: u16,
    /// Whether the output is currently enabled
    pub playing: bool,
}

/// Monophonic synthesizer over a tone PWM channel and an RGB indicator.
pub struct Synth<P, L, D> {
    pwm: P,
    led: L,
    delay: D,
    config: SynthConfig,
    note: NoteState,
}

impl<P, L, D> Synth<P, L, D>
where
    P: TonePwm,
    L: RgbLed,
    D: DelayNs,
{
    pub fn new(pwm: P, led: L, delay: D, config: SynthConfig) -> Self {
        Self {
            pwm,
            led,
            delay,
            config,
            note: NoteState::default(),
        }
    }

    /// The currently sounding note.
    pub fn note(&self) -> NoteState {
        self.note
    }

    pub fn is_playing(&self) -> bool {
        self.note.playing
    }

    /// Start the note mapped to a logical key index.
    ///
    /// Out-of-range indices are logged and ignored.
    pub fn play(&mut self, index: u8) {
        match frequency_for(index) {
            Some(freq) => self.play_frequency(freq),
            None => {
                log::warn!("no note for key {}", index);
            }
        }
    }

    /// Start a note at an arbitrary frequency, replacing whatever was
    /// sounding. Frequency 0 and unreproducible frequencies silence the
    /// output instead.
    pub fn play_frequency(&mut self, freq_hz: u16) {
        let setting = match timer_setting(self.config.clock_hz, freq_hz) {
            Some(setting) => setting,
            None => {
                if freq_hz != 0 {
                    log::warn!("{} Hz not reproducible, playing silence", freq_hz);
                }
                self.silence();
                return;
            }
        };

        let target = setting.half_duty();
        let base = band_color(freq_hz);

        self.pwm.set_period(setting.reload, setting.divider);
        self.pwm.set_level(0);
        self.pwm.set_enabled(true);
        self.note = NoteState {
            frequency_hz: freq_hz,
            reload: setting.reload,
            playing: true,
        };

        let EnvelopeConfig { steps, step_ms } = self.config.envelope;
        for step in 1..=steps {
            self.pwm.set_level(level_at(target, step, steps));
            let color = color_at(base, step, steps);
            self.led.set_color(color.r, color.g, color.b);
            self.delay.delay_ms(step_ms);
        }
    }

    /// Ramp the sounding note down and silence the output.
    ///
    /// Idempotent: stopping while silent does nothing.
    pub fn stop(&mut self) {
        if !self.note.playing {
            return;
        }

        let target = self.note.reload / 2;
        let base = band_color(self.note.frequency_hz);

        // steps+1 writes, from the full level down to exactly zero
        let EnvelopeConfig { steps, step_ms } = self.config.envelope;
        for step in (0..=steps).rev() {
            self.pwm.set_level(level_at(target, step, steps));
            let color = color_at(base, step, steps);
            self.led.set_color(color.r, color.g, color.b);
            self.delay.delay_ms(step_ms);
        }

        self.silence();
    }

    /// Scale the sounding note's duty level by a 0.0-1.0 volume scalar.
    ///
    /// A no-op while silent; the envelope ramps always run at full level
    /// and the control loop re-applies volume after them.
    pub fn apply_volume(&mut self, scalar: f32) {
        if !self.note.playing || self.note.reload == 0 {
            return;
        }

        let scalar = scalar.clamp(0.0, 1.0);
        let level = (self.note.reload / 2) as f32 * scalar;
        self.pwm.set_level(level as u16);
    }

    fn silence(&mut self) {
        self.pwm.set_level(0);
        self.pwm.set_enabled(false);
        self.led.off();
        self.note = NoteState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{NoopDelay, RecordingDelay};
    use std::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum PwmOp {
        Period { reload: u16, divider: u8 },
        Level(u16),
        Enable(bool),
    }

    #[derive(Default)]
    struct MockPwm {
        ops: Vec<PwmOp>,
    }

    impl TonePwm for MockPwm {
        fn set_period(&mut self, reload: u16, divider: u8) {
            self.ops.push(PwmOp::Period { reload, divider });
        }

        fn set_level(&mut self, level: u16) {
            self.ops.push(PwmOp::Level(level));
        }

        fn set_enabled(&mut self, enabled: bool) {
            self.ops.push(PwmOp::Enable(enabled));
        }
    }

    #[derive(Default)]
    struct MockLed {
        colors: Vec<(u8, u8, u8)>,
    }

    impl RgbLed for MockLed {
        fn set_color(&mut self, r: u8, g: u8, b: u8) {
            self.colors.push((r, g, b));
        }
    }

    fn synth() -> Synth<MockPwm, MockLed, NoopDelay> {
        Synth::new(
            MockPwm::default(),
            MockLed::default(),
            NoopDelay,
            SynthConfig::default(),
        )
    }

    fn levels(pwm: &MockPwm) -> Vec<u16> {
        pwm.ops
            .iter()
            .filter_map(|op| match op {
                PwmOp::Level(level) => Some(*level),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_play_configures_timer_before_enabling() {
        let mut synth = synth();
        synth.play(0); // C4, 262 Hz

        assert_eq!(
            synth.pwm.ops[..3],
            [
                PwmOp::Period {
                    reload: 63612,
                    divider: 9
                },
                PwmOp::Level(0),
                PwmOp::Enable(true),
            ]
        );
        assert!(synth.is_playing());
        assert_eq!(synth.note().frequency_hz, 262);
    }

    #[test]
    fn test_attack_ramps_to_exact_half_duty() {
        let mut synth = synth();
        synth.play(0);

        let levels = levels(&synth.pwm);
        // Initial zero plus 20 ramp steps
        assert_eq!(levels.len(), 21);
        assert_eq!(*levels.last().unwrap(), 31806);
        assert!(levels.windows(2).all(|w| w[0] <= w[1]));

        // Color ramps with the level, ending at the full band color
        assert_eq!(synth.led.colors.len(), 20);
        assert_eq!(*synth.led.colors.last().unwrap(), (255, 0, 0));
    }

    #[test]
    fn test_attack_timing_follows_envelope_config() {
        let mut synth = Synth::new(
            MockPwm::default(),
            MockLed::default(),
            RecordingDelay::default(),
            SynthConfig::default(),
        );
        synth.play(5); // A4

        assert_eq!(synth.delay.total_us, 20 * 50 * 1_000);
    }

    #[test]
    fn test_stop_decays_to_silence() {
        let mut synth = synth();
        synth.play(0);
        synth.pwm.ops.clear();
        synth.led.colors.clear();

        synth.stop();

        let levels = levels(&synth.pwm);
        // 21 decay writes from the full level down, plus the silence write
        assert_eq!(levels.len(), 22);
        assert_eq!(levels[0], 31806);
        assert!(levels.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(*levels.last().unwrap(), 0);
        assert_eq!(synth.pwm.ops.last(), Some(&PwmOp::Enable(false)));

        assert_eq!(*synth.led.colors.last().unwrap(), (0, 0, 0));
        assert_eq!(synth.note(), NoteState::default());
    }

    #[test]
    fn test_decay_timing_matches_attack_plus_endpoint() {
        let mut synth = Synth::new(
            MockPwm::default(),
            MockLed::default(),
            RecordingDelay::default(),
            SynthConfig::default(),
        );
        synth.play(0);
        let after_attack = synth.delay.total_us;

        synth.stop();
        assert_eq!(synth.delay.total_us - after_attack, 21 * 50 * 1_000);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut synth = synth();
        synth.play(0);
        synth.stop();
        synth.pwm.ops.clear();

        synth.stop();
        assert!(synth.pwm.ops.is_empty());
    }

    #[test]
    fn test_zero_frequency_silences() {
        let mut synth = synth();
        synth.play(0);
        synth.play_frequency(0);

        assert!(!synth.is_playing());
        assert_eq!(synth.pwm.ops.last(), Some(&PwmOp::Enable(false)));
    }

    #[test]
    fn test_unreproducible_frequency_plays_silence() {
        let mut synth = synth();
        synth.play_frequency(1);

        assert!(!synth.is_playing());
        // No envelope ran; the only LED traffic is the off write
        assert_eq!(synth.led.colors, [(0, 0, 0)]);
        assert_eq!(synth.pwm.ops.last(), Some(&PwmOp::Enable(false)));
    }

    #[test]
    fn test_out_of_range_key_is_ignored() {
        let mut synth = synth();
        synth.play(16);

        assert!(synth.pwm.ops.is_empty());
        assert!(!synth.is_playing());
    }

    #[test]
    fn test_apply_volume_scales_half_duty() {
        let mut synth = synth();
        synth.play(0); // reload 63612, half duty 31806
        synth.pwm.ops.clear();

        synth.apply_volume(0.5);
        assert_eq!(synth.pwm.ops, [PwmOp::Level(15903)]);

        synth.apply_volume(2.0); // clamped to full
        assert_eq!(synth.pwm.ops.last(), Some(&PwmOp::Level(31806)));

        synth.apply_volume(-1.0); // clamped to zero
        assert_eq!(synth.pwm.ops.last(), Some(&PwmOp::Level(0)));
    }

    #[test]
    fn test_apply_volume_while_silent_is_a_no_op() {
        let mut synth = synth();
        synth.apply_volume(0.7);
        assert!(synth.pwm.ops.is_empty());
    }
}
