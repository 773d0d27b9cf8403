//! Flood monitoring station firmware for the Raspberry Pi Pico (RP2040).
//!
//! # Architecture
//!
//! One sampling task reads both analog channels at 20 Hz and fans each joint
//! reading out through two bounded queues to independent consumers:
//!
//! - Display task: blocks on its queue and renders a full status frame per
//!   reading on the SSD1306 OLED.
//! - Alert task: polls its queue with a bounded timeout and drives the RGB
//!   indicator, buzzer pair and LED-matrix warning icon, blinking while the
//!   station is in alert.
//!
//! The boot button bypasses the pipeline entirely and reboots the device into
//! the USB bootloader for firmware updates.
//!
//! # Building
//!
//! ```bash
//! cargo build --release --target thumbv6m-none-eabi --features embedded
//! ```

#![no_std]
#![no_main]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

mod tasks;

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::adc::{
    Adc, Channel as AdcChannel, Config as AdcConfig, InterruptHandler as AdcInterruptHandler,
};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{Config as I2cConfig, I2c, InterruptHandler as I2cInterruptHandler};
use embassy_rp::peripherals::{I2C1, PIO0};
use embassy_rp::pio::{InterruptHandler as PioInterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::pwm::Pwm;
use embassy_sync::channel::Channel;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use flood_station::queues::ReadingChannel;
use tasks::alert::{BuzzerPair, RgbLed};

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
    I2C1_IRQ => I2cInterruptHandler<I2C1>;
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
});

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"flood-station"),
    embassy_rp::binary_info::rp_program_description!(
        c"Flood monitoring station with OLED status, RGB/buzzer alert and LED-matrix icon"
    ),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

/// Fan-out queues from the sampling task. Each consumer task receives exactly
/// one receiver end; the producer holds the two sender ends.
static DISPLAY_QUEUE: ReadingChannel = Channel::new();
static ALERT_QUEUE: ReadingChannel = Channel::new();

/// WS2812 PIO program, loaded once and shared with the matrix driver.
static WS2812_PROGRAM: StaticCell<PioWs2812Program<'static, PIO0>> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("Flood station starting");

    // Boot button (GPIO 6): out-of-band firmware-update trigger, no
    // interaction with the monitoring pipeline.
    let boot_button = Input::new(p.PIN_6, Pull::Up);
    spawner.spawn(tasks::boot::usb_boot_button(boot_button)).unwrap();

    // Sensor inputs: water level on GPIO 26 (ADC0), rain volume on GPIO 27 (ADC1)
    let adc = Adc::new(p.ADC, Irqs, AdcConfig::default());
    let water = AdcChannel::new_pin(p.PIN_26, Pull::None);
    let rain = AdcChannel::new_pin(p.PIN_27, Pull::None);

    // OLED on I2C1 at 400 kHz (SDA=GPIO14, SCL=GPIO15)
    let mut i2c_config = I2cConfig::default();
    i2c_config.frequency = 400_000;
    let i2c = I2c::new_async(p.I2C1, p.PIN_15, p.PIN_14, Irqs, i2c_config);

    // RGB indicator LED on discrete outputs (R=GPIO13, G=GPIO11, B=GPIO12)
    let rgb = RgbLed::new(
        Output::new(p.PIN_13, Level::Low),
        Output::new(p.PIN_11, Level::Low),
        Output::new(p.PIN_12, Level::Low),
    );

    // Buzzer pair: GPIO10 is PWM slice 5 channel A, GPIO21 is slice 2 channel B
    let idle = BuzzerPair::idle_config();
    let buzzer_a = Pwm::new_output_a(p.PWM_SLICE5, p.PIN_10, idle.clone());
    let buzzer_b = Pwm::new_output_b(p.PWM_SLICE2, p.PIN_21, idle);
    let buzzers = BuzzerPair::new(buzzer_a, buzzer_b);

    // 5x5 WS2812 matrix on GPIO 7, driven by PIO0
    let Pio { mut common, sm0, .. } = Pio::new(p.PIO0, Irqs);
    let ws2812_program = WS2812_PROGRAM.init(PioWs2812Program::new(&mut common));
    let matrix = PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_7, ws2812_program);

    // Spawn the pipeline: one producer, two independent consumers
    spawner
        .spawn(tasks::sampling::sampling_task(
            adc,
            water,
            rain,
            DISPLAY_QUEUE.sender(),
            ALERT_QUEUE.sender(),
        ))
        .unwrap();
    spawner
        .spawn(tasks::display::display_task(i2c, DISPLAY_QUEUE.receiver()))
        .unwrap();
    spawner
        .spawn(tasks::alert::alert_task(
            ALERT_QUEUE.receiver(),
            rgb,
            buzzers,
            matrix,
        ))
        .unwrap();

    info!("All tasks spawned");
}
