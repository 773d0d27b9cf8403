//! Alert task: drives the RGB indicator, buzzer pair and LED-matrix icon.
//!
//! The task polls its queue with a bounded timeout so the alert outputs keep
//! being driven from the last known reading even when the producer stalls.
//! While alarmed it runs the blink cadence to completion before re-polling,
//! trading sampling responsiveness for predictable blink timing; a reading
//! arriving mid-pair is picked up at the next iteration (staleness <= 400 ms).

use defmt::{info, trace};
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio_programs::ws2812::PioWs2812;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::{Duration, Timer, with_timeout};

use flood_station::blink::{BlinkCycle, BlinkEvent};
use flood_station::buzzer::{TONE_TOP, Volume, duty_compare};
use flood_station::config::{ALERT_RECV_TIMEOUT_MS, BLINK_HALF_PERIOD_MS};
use flood_station::icon::{MATRIX_SIZE, warning_icon};
use flood_station::queues::ReadingReceiver;
use flood_station::reading::Reading;
use flood_station::risk::{RiskState, classify};

/// Discrete RGB status LED: red while alarmed, blue while calm.
pub struct RgbLed {
    red: Output<'static>,
    green: Output<'static>,
    blue: Output<'static>,
}

impl RgbLed {
    pub fn new(red: Output<'static>, green: Output<'static>, blue: Output<'static>) -> Self {
        Self { red, green, blue }
    }

    pub fn set_warning(&mut self) {
        self.red.set_high();
        self.green.set_low();
        self.blue.set_low();
    }

    pub fn set_calm(&mut self) {
        self.red.set_low();
        self.green.set_low();
        self.blue.set_high();
    }
}

/// Both buzzers, kept on the same 3 kHz tone period and driven in lockstep.
pub struct BuzzerPair {
    primary: Pwm<'static>,
    secondary: Pwm<'static>,
    config: PwmConfig,
}

impl BuzzerPair {
    /// Initial slice configuration: tone period set, quiet divider, silent.
    pub fn idle_config() -> PwmConfig {
        let mut config = PwmConfig::default();
        config.divider = Volume::Quiet.divider().into();
        config.top = TONE_TOP;
        config.compare_a = 0;
        config.compare_b = 0;
        config
    }

    pub fn new(primary: Pwm<'static>, secondary: Pwm<'static>) -> Self {
        Self {
            primary,
            secondary,
            config: Self::idle_config(),
        }
    }

    /// Switch the volume step (clock divider); the tone period is unchanged.
    pub fn set_volume(&mut self, volume: Volume) {
        self.config.divider = volume.divider().into();
        self.apply();
    }

    /// Drive both tone outputs at the given duty percentage.
    pub fn set_duty_percent(&mut self, percent: u8) {
        let level = duty_compare(TONE_TOP, percent);
        self.config.compare_a = level;
        self.config.compare_b = level;
        self.apply();
    }

    fn apply(&mut self) {
        self.primary.set_config(&self.config);
        self.secondary.set_config(&self.config);
    }
}

/// Consumes readings with a bounded timeout and drives the alert outputs.
///
/// Normal: calm color, icon cleared, buzzers silent on the quiet volume step.
/// Alert: warning color, icon per blink flag, one loud/silent tone pair per
/// iteration with the flag flipping once per completed pair.
#[embassy_executor::task]
pub async fn alert_task(
    rx: ReadingReceiver,
    mut rgb: RgbLed,
    mut buzzers: BuzzerPair,
    mut matrix: PioWs2812<'static, PIO0, 0, MATRIX_SIZE>,
) {
    info!("Alert task started");

    let mut last = Reading::default();
    let mut cycle = BlinkCycle::new();
    let mut prev_risk = RiskState::Normal;

    loop {
        // Timeout is expected, not an error: keep re-evaluating the last
        // known reading so the outputs outlive a stalled producer.
        if let Ok(reading) = with_timeout(Duration::from_millis(ALERT_RECV_TIMEOUT_MS), rx.receive()).await {
            last = reading;
        }

        let risk = classify(&last);
        if risk != prev_risk {
            match risk {
                RiskState::Alert => info!("Entering alert state"),
                RiskState::Normal => info!("Returning to normal state"),
            }
            prev_risk = risk;
        }

        match risk {
            RiskState::Alert => {
                rgb.set_warning();
                matrix.write(&warning_icon(cycle.icon_visible())).await;
                buzzers.set_volume(Volume::Loud);

                buzzers.set_duty_percent(cycle.tone_duty_percent());
                Timer::after_millis(BLINK_HALF_PERIOD_MS).await;

                cycle.advance();
                buzzers.set_duty_percent(cycle.tone_duty_percent());
                Timer::after_millis(BLINK_HALF_PERIOD_MS).await;

                if let BlinkEvent::PairCompleted { icon_visible } = cycle.advance() {
                    trace!("Blink pair complete, icon visible: {}", icon_visible);
                }
            }
            RiskState::Normal => {
                rgb.set_calm();
                matrix.write(&warning_icon(false)).await;
                buzzers.set_volume(Volume::Quiet);
                buzzers.set_duty_percent(0);
            }
        }
    }
}
