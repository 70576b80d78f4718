//! Tessera - NeoTrellis Keypad Synthesizer Firmware
//!
//! Firmware binary for an RP2350-based monophonic synthesizer: an Adafruit
//! NeoTrellis 4x4 button matrix on I2C, a PWM square-wave speaker with a
//! coupled RGB color envelope, and a potentiometer volume control sampled
//! in the background.
//!
//! Named after the Latin "tessera", the small square tile of a mosaic -
//! one tile per key.

#![no_std]
#![no_main]

use core::sync::atomic::AtomicU16;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::Pull;
use embassy_rp::i2c::{Config as RpI2cConfig, I2c};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

use tessera_drivers::{NeoTrellis, Synth, SynthConfig, TrellisConfig};
use tessera_hal::i2c::I2cConfig;
use tessera_hal_rp2350::{BlockingBus, PwmRgbLed, PwmTone, SharedVolume};

mod display;
mod tasks;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

/// Latest raw pot sample, written by the volume task and read by the
/// control loop.
static VOLUME_RAW: AtomicU16 = AtomicU16::new(0);

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tessera firmware starting...");

    let p = embassy_rp::init(Default::default());

    // I2C0 to the NeoTrellis: SDA on GPIO28, SCL on GPIO29
    let mut i2c_config = RpI2cConfig::default();
    i2c_config.frequency = I2cConfig::default().frequency;
    let bus = BlockingBus::new(I2c::new_blocking(p.I2C0, p.PIN_29, p.PIN_28, i2c_config));
    let mut trellis = NeoTrellis::new(bus, Delay, TrellisConfig::default());

    // Speaker on GPIO15, PWM slice 7 output B
    let tone = PwmTone::new(Pwm::new_output_b(
        p.PWM_SLICE7,
        p.PIN_15,
        PwmConfig::default(),
    ));

    // RGB indicator: red on GPIO37 (slice 10 B), green and blue sharing
    // slice 11 on GPIO38/GPIO39
    let led = PwmRgbLed::new(
        Pwm::new_output_b(p.PWM_SLICE10, p.PIN_37, PwmConfig::default()),
        Pwm::new_output_ab(p.PWM_SLICE11, p.PIN_38, p.PIN_39, PwmConfig::default()),
    );

    let synth = Synth::new(tone, led, Delay, SynthConfig::default());

    // Volume pot on GPIO45
    let adc = Adc::new(p.ADC, Irqs, AdcConfig::default());
    let pot = Channel::new_pin(p.PIN_45, Pull::None);
    let volume = SharedVolume::new(&VOLUME_RAW);

    info!("Peripherals initialized");

    if let Err(err) = trellis.init() {
        error!("NeoTrellis bring-up failed: {}", err);
        // Nothing to play without the keypad; park for the debugger
        loop {
            Timer::after_secs(1).await;
        }
    }

    match trellis.read_status() {
        Ok((id, version)) => info!("NeoTrellis hw id {=u8:#x}, firmware {=u32:#x}", id, version),
        Err(err) => warn!("NeoTrellis status read failed: {}", err),
    }

    if let Err(err) = trellis.rainbow_startup() {
        warn!("startup animation failed: {}", err);
    }

    // Discard any events generated while the pad was being configured
    trellis.clear_fifo();

    spawner.spawn(tasks::volume_task(adc, pot, volume)).unwrap();
    spawner
        .spawn(tasks::controller_task(trellis, synth, volume))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // All work happens in the spawned tasks
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
