//! Main control loop
//!
//! One tick every 10ms: poll the keypad, retrigger or release the
//! synthesizer, fold the latest pot sample into the volume filter and
//! apply it to the sounding note. Releases are handled before presses so
//! a release-then-press burst ends with the new note sounding.

use defmt::{info, warn};
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Delay, Duration, Instant, Ticker};

use tessera_core::volume::VolumeFilter;
use tessera_drivers::{NeoTrellis, Synth};
use tessera_hal::VolumeSource;
use tessera_hal_rp2350::{BlockingBus, PwmRgbLed, PwmTone, SharedVolume};

use crate::display::DefmtDisplay;

/// Control loop tick interval
const TICK_MS: u64 = 10;

/// Interval between "still playing" status lines
const STATUS_INTERVAL: Duration = Duration::from_millis(500);

type Bus = BlockingBus<I2c<'static, I2C0, Blocking>>;
pub type Trellis = NeoTrellis<Bus, Delay>;
pub type SynthDevice = Synth<PwmTone<'static>, PwmRgbLed<'static>, Delay>;

#[embassy_executor::task]
pub async fn controller_task(mut trellis: Trellis, mut synth: SynthDevice, volume: SharedVolume) {
    let mut display = DefmtDisplay;
    let mut filter = VolumeFilter::new();
    let mut ticker = Ticker::every(Duration::from_millis(TICK_MS));
    let mut last_status = Instant::now();

    loop {
        ticker.next().await;

        match trellis.poll_and_dispatch(&mut display) {
            Ok(report) => {
                if report.released {
                    synth.stop();
                }
                if let Some(index) = report.note_on {
                    synth.play(index);
                }
            }
            Err(err) => warn!("keypad poll failed: {}", err),
        }

        filter.update(volume.latest_raw(), SharedVolume::FULL_SCALE);
        synth.apply_volume(filter.scalar());

        if synth.is_playing() && last_status.elapsed() >= STATUS_INTERVAL {
            info!("still playing {=u16} Hz", synth.note().frequency_hz);
            last_status = Instant::now();
        }
    }
}
