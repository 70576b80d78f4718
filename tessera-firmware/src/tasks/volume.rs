//! Volume pot sampler task
//!
//! Owns the ADC and overwrites the shared sample cell continuously.
//! Newest sample wins; nobody waits on this task.

use defmt::warn;
use embassy_rp::adc::{Adc, Async, Channel};
use embassy_time::{Duration, Ticker};
use tessera_hal_rp2350::SharedVolume;

/// Interval between pot samples. The control loop smooths over many
/// samples, so this just needs to stay well ahead of the 10ms tick.
const SAMPLE_INTERVAL_MS: u64 = 2;

#[embassy_executor::task]
pub async fn volume_task(
    mut adc: Adc<'static, Async>,
    mut pot: Channel<'static>,
    volume: SharedVolume,
) {
    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_INTERVAL_MS));

    loop {
        match adc.read(&mut pot).await {
            Ok(raw) => volume.store(raw),
            Err(_) => warn!("volume ADC read failed"),
        }
        ticker.next().await;
    }
}
