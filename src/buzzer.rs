//! PWM register math for the buzzer pair.
//!
//! Both buzzers run at a fixed 3 kHz tone; perceived volume is stepped by
//! switching the PWM clock divider between a quiet and a loud setting while
//! the wrap value (and with it the tone period) stays put.

/// System clock feeding the PWM slices.
pub const SYSTEM_CLOCK_HZ: u32 = 125_000_000;

/// Target tone frequency for both buzzers.
pub const TONE_FREQ_HZ: u32 = 3_000;

/// Counter wrap producing the tone period from the undivided system clock.
pub const TONE_TOP: u16 = (SYSTEM_CLOCK_HZ / TONE_FREQ_HZ - 1) as u16;

/// Volume step of the buzzer pair.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Volume {
    /// Near-inaudible idle configuration.
    Quiet,
    /// Alert configuration.
    Loud,
}

impl Volume {
    /// PWM clock divider for this volume step. The divider is the 8.4-bit
    /// hardware field; the quiet step sits at the integer maximum.
    pub const fn divider(self) -> u8 {
        match self {
            Volume::Quiet => 255,
            Volume::Loud => 30,
        }
    }
}

/// Compare level driving the given duty percentage of the tone period.
pub const fn duty_compare(top: u16, percent: u8) -> u16 {
    ((top as u32 + 1) * percent as u32 / 100) as u16
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_top_matches_3khz_period() {
        assert_eq!(TONE_TOP, 41_665);
        assert_eq!((SYSTEM_CLOCK_HZ / (TONE_TOP as u32 + 1)), TONE_FREQ_HZ);
    }

    #[test]
    fn test_volume_steps_share_the_tone_period() {
        // Only the divider changes between steps, never the wrap.
        assert!(Volume::Loud.divider() < Volume::Quiet.divider());
    }

    #[test]
    fn test_duty_compare_endpoints() {
        assert_eq!(duty_compare(TONE_TOP, 0), 0);
        assert_eq!(duty_compare(TONE_TOP, 100), TONE_TOP + 1);
    }

    #[test]
    fn test_loud_duty_is_90_percent_of_period() {
        let level = duty_compare(TONE_TOP, 90);
        let expected = (TONE_TOP as u32 + 1) as f32 * 0.9;
        assert!((level as f32 - expected).abs() <= 1.0);
    }

    #[test]
    fn test_duty_compare_is_monotonic() {
        let mut prev = 0;
        for percent in 0..=100 {
            let level = duty_compare(TONE_TOP, percent);
            assert!(level >= prev);
            prev = level;
        }
    }
}
