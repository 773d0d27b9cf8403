//! Risk classification shared by both consumer tasks.

use crate::config::{RAIN_ALERT_THRESHOLD, WATER_ALERT_THRESHOLD};
use crate::reading::Reading;

/// Two-valued risk state derived from the latest reading.
///
/// Each consumer task classifies independently from the latest reading it has
/// received; the two may transiently disagree while a reading is in flight.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RiskState {
    /// Both channels below their thresholds.
    #[default]
    Normal,
    /// Either channel at or above its threshold.
    Alert,
}

/// Shared classification predicate. Pure: the result depends only on the
/// reading and the fixed threshold constants.
pub const fn classify(reading: &Reading) -> RiskState {
    if reading.water_level >= WATER_ALERT_THRESHOLD || reading.rain_volume >= RAIN_ALERT_THRESHOLD {
        RiskState::Alert
    } else {
        RiskState::Normal
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(water_level: u16, rain_volume: u16) -> Reading {
        Reading {
            water_level,
            rain_volume,
        }
    }

    #[test]
    fn test_water_threshold_boundary() {
        assert_eq!(classify(&reading(2866, 0)), RiskState::Alert);
        assert_eq!(classify(&reading(2865, 1000)), RiskState::Normal);
    }

    #[test]
    fn test_rain_threshold_boundary() {
        assert_eq!(classify(&reading(0, 3276)), RiskState::Alert);
        assert_eq!(classify(&reading(1000, 3275)), RiskState::Normal);
    }

    #[test]
    fn test_either_channel_triggers_alert() {
        assert_eq!(classify(&reading(4095, 0)), RiskState::Alert);
        assert_eq!(classify(&reading(0, 4095)), RiskState::Alert);
        assert_eq!(classify(&reading(4095, 4095)), RiskState::Alert);
    }

    #[test]
    fn test_classification_is_monotonic() {
        // Raising either channel while holding the other must never drop
        // an alert back to normal.
        for water in (0..=4095u16).step_by(293) {
            for rain in (0..=4095u16).step_by(293) {
                if classify(&reading(water, rain)) == RiskState::Alert {
                    assert_eq!(classify(&reading(water.saturating_add(100), rain)), RiskState::Alert);
                    assert_eq!(classify(&reading(water, rain.saturating_add(100))), RiskState::Alert);
                }
            }
        }
    }

    #[test]
    fn test_state_sequence_follows_injected_readings() {
        let sequence = [reading(1500, 1000), reading(3000, 1000), reading(1500, 1000)];
        let states: Vec<RiskState> = sequence.iter().map(classify).collect();
        assert_eq!(states, [RiskState::Normal, RiskState::Alert, RiskState::Normal]);
    }
}
