//! PWM output abstractions
//!
//! Two consumers sit on top of these traits: the audio synthesizer, which
//! drives a piezo/speaker pin as a square wave, and the envelope's coupled
//! color ramp, which drives a discrete RGB indicator LED.

/// Square-wave tone output over a single PWM channel.
///
/// The channel counts up to a reload ("TOP") value; the overflow rate sets
/// the audible frequency and the compare level sets the duty cycle.
pub trait TonePwm {
    /// Configure the counter reload value and clock divider.
    ///
    /// `frequency = pwm_clock / (divider * (reload + 1))`
    fn set_period(&mut self, reload: u16, divider: u8);

    /// Set the compare level (0 = silent, `reload / 2` = 50% duty).
    fn set_level(&mut self, level: u16);

    /// Enable or disable the output. Disabling silences the pin
    /// regardless of the configured level.
    fn set_enabled(&mut self, enabled: bool);
}

/// Discrete RGB indicator LED.
///
/// Channel values are 0-255 logical brightness; implementations handle
/// polarity and brightness scaling.
pub trait RgbLed {
    /// Set all three channels at once.
    fn set_color(&mut self, r: u8, g: u8, b: u8);

    /// Turn the LED off.
    fn off(&mut self) {
        self.set_color(0, 0, 0);
    }
}
