//! Status display task: renders one full OLED frame per consumed reading.

use defmt::{info, warn};
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_time::Timer;
use ssd1306::{I2CDisplayInterface, Ssd1306Async, prelude::*};

use flood_station::frame::draw_status_frame;
use flood_station::queues::ReadingReceiver;

/// Blocks on its queue and redraws the status frame for every reading.
///
/// Display latency is not safety-critical, so there is no timeout: the task
/// simply yields until the next reading arrives.
#[embassy_executor::task]
pub async fn display_task(i2c: I2c<'static, I2C1, Async>, rx: ReadingReceiver) {
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306Async::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();

    // Miswired hardware is unrecoverable; park instead of retrying.
    if display.init().await.is_err() {
        warn!("OLED init failed");
        loop {
            Timer::after_secs(10).await;
        }
    }
    info!("Display task started");

    loop {
        let reading = rx.receive().await;

        display.clear_buffer();
        draw_status_frame(&mut display, &reading).ok();

        // Single full-frame update
        if display.flush().await.is_err() {
            warn!("Display flush error");
        }
    }
}
