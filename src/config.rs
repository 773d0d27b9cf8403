//! Fixed configuration constants for the monitoring pipeline.
//!
//! Everything here is a compile-time constant: sampling cadence, dead-zone
//! filtering of the analog inputs, risk thresholds, alert cadence, and the
//! linear scales used to convert raw samples into physical values.

// =============================================================================
// Analog Sampling
// =============================================================================

/// Full scale of the 12-bit ADC.
pub const ADC_MAX: u16 = 4095;

/// Sampling period for both sensor channels (20 Hz).
pub const SENSOR_PERIOD_MS: u64 = 50;

/// Neutral value reported by a centered input device.
pub const SENSOR_NEUTRAL: u16 = 2039;

/// Half-width of the dead zone around [`SENSOR_NEUTRAL`] (ADC counts).
/// Raw values inside the band snap to the neutral value, suppressing
/// idle jitter without smoothing real deviations.
pub const SENSOR_DEAD_ZONE: u16 = 20;

// =============================================================================
// Risk Thresholds
// =============================================================================

/// Water level at which the station enters the alert state (70% of scale).
pub const WATER_ALERT_THRESHOLD: u16 = 2866;

/// Rain volume at which the station enters the alert state (80% of scale).
pub const RAIN_ALERT_THRESHOLD: u16 = 3276;

// =============================================================================
// Alert Cadence
// =============================================================================

/// Bounded receive timeout of the alert loop. The alert outputs keep being
/// driven from the last known reading even when the producer stalls.
pub const ALERT_RECV_TIMEOUT_MS: u64 = 20;

/// Duration of each half of the alert blink pair (tone on, then tone off).
pub const BLINK_HALF_PERIOD_MS: u64 = 200;

/// Buzzer duty during the loud half of the blink pair.
pub const TONE_DUTY_PERCENT: u8 = 90;

// =============================================================================
// Queues
// =============================================================================

/// Capacity of each consumer queue. Sends into a full queue drop the new
/// reading; the consumer continues on the last one it received.
pub const QUEUE_DEPTH: usize = 5;

// =============================================================================
// Physical Conversion
// =============================================================================

/// Water level full scale: the ADC range maps linearly onto 0..50 m.
pub const WATER_FULL_SCALE_M: f32 = 50.0;

/// Rain full scale: the ADC range maps linearly onto 0..200 mm precipitation.
pub const RAIN_FULL_SCALE_MM: f32 = 200.0;

/// Catchment factor for a fixed 100 m2 area: 1 mm of rain = 0.1 m3.
pub const MM_TO_M3: f32 = 0.1;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_threshold_is_70_percent_of_scale() {
        assert_eq!(WATER_ALERT_THRESHOLD, (ADC_MAX as u32 * 70 / 100) as u16);
    }

    #[test]
    fn test_rain_threshold_is_80_percent_of_scale() {
        assert_eq!(RAIN_ALERT_THRESHOLD, (ADC_MAX as u32 * 80 / 100) as u16);
    }

    #[test]
    fn test_dead_zone_inside_scale() {
        assert!(SENSOR_NEUTRAL + SENSOR_DEAD_ZONE < ADC_MAX);
        assert!(SENSOR_NEUTRAL > SENSOR_DEAD_ZONE);
    }

    #[test]
    fn test_alert_cadence() {
        // The alert loop must re-poll faster than the producer publishes.
        assert!(ALERT_RECV_TIMEOUT_MS < SENSOR_PERIOD_MS);
        assert_eq!(BLINK_HALF_PERIOD_MS, 200);
    }
}
