//! Bounded reading queues between the sampling task and its consumers.
//!
//! Two independent fixed-capacity channels carry copies of the same logical
//! reading: one feeds the display task, one feeds the alert task. Exactly one
//! producer writes both queues and exactly one consumer drains each, so the
//! channels are the only synchronization in the pipeline.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

use crate::config::QUEUE_DEPTH;
use crate::reading::Reading;

pub type ReadingChannel = Channel<CriticalSectionRawMutex, Reading, QUEUE_DEPTH>;
pub type ReadingSender = Sender<'static, CriticalSectionRawMutex, Reading, QUEUE_DEPTH>;
pub type ReadingReceiver = Receiver<'static, CriticalSectionRawMutex, Reading, QUEUE_DEPTH>;

/// Non-blocking fan-out publish of one reading to both consumer queues.
///
/// A full queue drops the NEW reading: no backpressure reaches the producer
/// and the lagging consumer keeps operating on the last reading it received.
pub fn fan_out(display_tx: &ReadingSender, alert_tx: &ReadingSender, reading: Reading) {
    display_tx.try_send(reading).ok();
    alert_tx.try_send(reading).ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(water_level: u16) -> Reading {
        Reading {
            water_level,
            rain_volume: 0,
        }
    }

    #[test]
    fn test_full_queue_drops_the_new_reading() {
        static QUEUE: ReadingChannel = Channel::new();

        for i in 0..QUEUE_DEPTH {
            assert!(QUEUE.try_send(reading(i as u16)).is_ok());
        }
        // A slow consumer never blocks the producer; the overflow is dropped.
        assert!(QUEUE.try_send(reading(99)).is_err());

        // The queued readings survive in order, without the dropped one.
        for i in 0..QUEUE_DEPTH {
            assert_eq!(QUEUE.try_receive().unwrap().water_level, i as u16);
        }
        assert!(QUEUE.try_receive().is_err());
    }

    #[test]
    fn test_consumer_observes_next_delivery_after_drain() {
        static QUEUE: ReadingChannel = Channel::new();

        for i in 0..QUEUE_DEPTH {
            QUEUE.try_send(reading(i as u16)).ok();
        }
        assert!(QUEUE.try_send(reading(1000)).is_err());

        while QUEUE.try_receive().is_ok() {}

        // Once the consumer catches up, fresh readings flow again.
        assert!(QUEUE.try_send(reading(2000)).is_ok());
        assert_eq!(QUEUE.try_receive().unwrap().water_level, 2000);
    }

    #[test]
    fn test_fan_out_reaches_both_queues() {
        static DISPLAY: ReadingChannel = Channel::new();
        static ALERT: ReadingChannel = Channel::new();

        fan_out(&DISPLAY.sender(), &ALERT.sender(), reading(1234));

        assert_eq!(DISPLAY.try_receive().unwrap().water_level, 1234);
        assert_eq!(ALERT.try_receive().unwrap().water_level, 1234);
    }

    #[test]
    fn test_fan_out_queues_are_independent() {
        static DISPLAY: ReadingChannel = Channel::new();
        static ALERT: ReadingChannel = Channel::new();

        // One saturated queue must not starve the other consumer.
        for i in 0..=QUEUE_DEPTH {
            fan_out(&DISPLAY.sender(), &ALERT.sender(), reading(i as u16));
            ALERT.try_receive().ok();
        }
        assert!(DISPLAY.try_send(reading(0)).is_err());
        assert!(ALERT.try_send(reading(0)).is_ok());
    }
}
