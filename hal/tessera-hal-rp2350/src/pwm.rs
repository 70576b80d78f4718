//! PWM tone and RGB LED outputs over embassy-rp
//!
//! RP2350 PWM slices count to a 16-bit TOP at `sysclk / divider`; the
//! tone output reprograms TOP and the divider per note, the LED outputs
//! keep a fixed 8-bit period and only move their compare levels.

use embassy_rp::pwm::{Config, Pwm};
use fixed::traits::ToFixed;
use tessera_hal::{RgbLed, TonePwm};

/// Square-wave tone output on one PWM slice.
///
/// Both compare registers are driven together, so the adapter works
/// regardless of whether the speaker pin is the slice's A or B output.
pub struct PwmTone<'d> {
    pwm: Pwm<'d>,
    config: Config,
}

impl<'d> PwmTone<'d> {
    /// Wrap a configured PWM slice. The output starts disabled and
    /// silent.
    pub fn new(pwm: Pwm<'d>) -> Self {
        let mut config = Config::default();
        config.enable = false;
        config.compare_a = 0;
        config.compare_b = 0;
        let mut tone = Self { pwm, config };
        tone.apply();
        tone
    }

    fn apply(&mut self) {
        self.pwm.set_config(&self.config);
    }
}

impl TonePwm for PwmTone<'_> {
    fn set_period(&mut self, reload: u16, divider: u8) {
        self.config.top = reload;
        self.config.divider = divider.to_fixed();
        self.apply();
    }

    fn set_level(&mut self, level: u16) {
        self.config.compare_a = level;
        self.config.compare_b = level;
        self.apply();
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.config.enable = enabled;
        self.apply();
    }
}

/// PWM period of the LED channels, giving 8-bit color resolution.
const LED_TOP: u16 = 255;

/// Brightness divisor applied to every channel. The indicator LED sits
/// next to the keypad and full drive is blinding.
const LED_BRIGHTNESS_DIVISOR: u16 = 10;

/// Common-anode RGB LED across two PWM slices.
///
/// The red pin sits alone on one slice (B output); green and blue share
/// the next slice's A and B outputs. Common-anode wiring means the pin
/// must be low to light the LED, handled by inverting both outputs.
pub struct PwmRgbLed<'d> {
    red: Pwm<'d>,
    red_config: Config,
    green_blue: Pwm<'d>,
    green_blue_config: Config,
}

impl<'d> PwmRgbLed<'d> {
    pub fn new(red: Pwm<'d>, green_blue: Pwm<'d>) -> Self {
        let mut led = Self {
            red,
            red_config: led_config(),
            green_blue,
            green_blue_config: led_config(),
        };
        led.off();
        led
    }
}

fn led_config() -> Config {
    let mut config = Config::default();
    config.top = LED_TOP;
    config.invert_a = true;
    config.invert_b = true;
    config.enable = true;
    config
}

fn scale(channel: u8) -> u16 {
    u16::from(channel) * LED_TOP / 255 / LED_BRIGHTNESS_DIVISOR
}

impl RgbLed for PwmRgbLed<'_> {
    fn set_color(&mut self, r: u8, g: u8, b: u8) {
        self.red_config.compare_b = scale(r);
        self.green_blue_config.compare_a = scale(g);
        self.green_blue_config.compare_b = scale(b);
        self.red.set_config(&self.red_config);
        self.green_blue.set_config(&self.green_blue_config);
    }
}
