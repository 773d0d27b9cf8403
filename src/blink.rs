//! Alert blink cadence state machine.
//!
//! While the station is in the alert state, the alert task drives a fixed
//! on/off pair: the tone runs loud for one half period, then silent for an
//! equal half, and the warning-icon flag flips once per completed pair. The
//! machine here only sequences phases; the task owns the timers and applies
//! the outputs, so the cadence is observable and testable without hardware.

use crate::config::TONE_DUTY_PERCENT;

/// Half of the blink pair currently in progress.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BlinkPhase {
    /// Tone is driven at the loud duty.
    #[default]
    OnHalf,
    /// Tone is silenced.
    OffHalf,
}

/// Observable transition produced by [`BlinkCycle::advance`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BlinkEvent {
    /// The loud half ended; the silent half begins.
    ToneSilenced,
    /// A full on/off pair completed and the icon flag flipped.
    PairCompleted {
        /// Icon visibility for the next pair.
        icon_visible: bool,
    },
}

/// Blink sequencer owned exclusively by the alert task.
///
/// The icon flag persists across loop iterations and across normal periods;
/// it simply stops toggling while the station is not in alert.
pub struct BlinkCycle {
    phase: BlinkPhase,
    icon_visible: bool,
}

impl BlinkCycle {
    pub const fn new() -> Self {
        Self {
            phase: BlinkPhase::OnHalf,
            icon_visible: false,
        }
    }

    /// Current half of the pair.
    #[inline]
    pub const fn phase(&self) -> BlinkPhase {
        self.phase
    }

    /// Whether the warning icon is shown during the current pair.
    #[inline]
    pub const fn icon_visible(&self) -> bool {
        self.icon_visible
    }

    /// Tone duty for the current phase.
    #[inline]
    pub const fn tone_duty_percent(&self) -> u8 {
        match self.phase {
            BlinkPhase::OnHalf => TONE_DUTY_PERCENT,
            BlinkPhase::OffHalf => 0,
        }
    }

    /// Advance to the next half-period boundary.
    ///
    /// Called by the alert task each time a half-period timer elapses.
    pub fn advance(&mut self) -> BlinkEvent {
        match self.phase {
            BlinkPhase::OnHalf => {
                self.phase = BlinkPhase::OffHalf;
                BlinkEvent::ToneSilenced
            }
            BlinkPhase::OffHalf => {
                self.phase = BlinkPhase::OnHalf;
                self.icon_visible = !self.icon_visible;
                BlinkEvent::PairCompleted {
                    icon_visible: self.icon_visible,
                }
            }
        }
    }
}

impl Default for BlinkCycle {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
