//! Sensor sampling task: periodic acquisition, noise gating and fan-out.

use defmt::{info, warn};
use embassy_rp::adc::{Adc, Async, Channel as AdcChannel};
use embassy_time::{Duration, Ticker};

use flood_station::config::SENSOR_PERIOD_MS;
use flood_station::queues::{ReadingSender, fan_out};
use flood_station::reading::{Reading, filter_sample};

/// Reads both analog channels at a fixed 20 Hz, applies the dead-zone filter
/// and publishes the joint reading to both consumer queues.
///
/// Publishing never blocks: a full queue drops the new reading and the
/// consumer continues on the last one it received. This task never exits.
#[embassy_executor::task]
pub async fn sampling_task(
    mut adc: Adc<'static, Async>,
    mut water_channel: AdcChannel<'static>,
    mut rain_channel: AdcChannel<'static>,
    display_tx: ReadingSender,
    alert_tx: ReadingSender,
) {
    info!("Sampling task started");

    let mut ticker = Ticker::every(Duration::from_millis(SENSOR_PERIOD_MS));
    loop {
        let water = read_filtered(&mut adc, &mut water_channel).await;
        let rain = read_filtered(&mut adc, &mut rain_channel).await;

        if let (Some(water_level), Some(rain_volume)) = (water, rain) {
            let reading = Reading {
                water_level,
                rain_volume,
            };
            fan_out(&display_tx, &alert_tx, reading);
        }

        ticker.next().await;
    }
}

/// One dead-zone-filtered sample, or `None` when the conversion fails.
async fn read_filtered(adc: &mut Adc<'static, Async>, channel: &mut AdcChannel<'static>) -> Option<u16> {
    match adc.read(channel).await {
        Ok(raw) => Some(filter_sample(raw)),
        Err(_) => {
            warn!("ADC read error, skipping sample");
            None
        }
    }
}
