pub use core::time::Duration;

use minos_syscall::TIMEBASE_FREQ;

use crate::os::minos::syscall;

const NANOS_PER_SEC: u64 = 1_000_000_000;
// 100ns at the 10 MHz mtime timebase
const NANOS_PER_TICK: u64 = NANOS_PER_SEC / TIMEBASE_FREQ;

pub(crate) fn ticks_to_duration(ticks: u64) -> Duration {
    Duration::from_nanos(ticks.saturating_mul(NANOS_PER_TICK))
}

pub(crate) fn duration_to_ticks(dur: Duration) -> usize {
    usize::try_from(dur.as_nanos() / u128::from(NANOS_PER_TICK)).unwrap_or(usize::MAX)
}

/// A moment on the machine timer, in std's `Instant` shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    since_boot: Duration,
}

impl Instant {
    #[must_use]
    pub fn now() -> Self {
        Self {
            since_boot: syscall::uptime(),
        }
    }

    #[must_use]
    pub fn duration_since(&self, earlier: Self) -> Duration {
        self.checked_duration_since(earlier).unwrap_or_default()
    }

    #[must_use]
    pub fn checked_duration_since(&self, earlier: Self) -> Option<Duration> {
        self.since_boot.checked_sub(earlier.since_boot)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        Self::now().duration_since(*self)
    }
}

impl core::ops::Sub for Instant {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Self::Output {
        self.duration_since(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_conversions_use_the_timebase() {
        assert_eq!(ticks_to_duration(TIMEBASE_FREQ), Duration::from_secs(1));
        assert_eq!(ticks_to_duration(1), Duration::from_nanos(100));
        assert_eq!(duration_to_ticks(Duration::from_secs(1)), 10_000_000);
        assert_eq!(duration_to_ticks(Duration::from_millis(1)), 10_000);
        assert_eq!(duration_to_ticks(Duration::ZERO), 0);
    }

    #[test]
    fn sub_nanosecond_sleeps_round_down() {
        assert_eq!(duration_to_ticks(Duration::from_nanos(99)), 0);
        assert_eq!(duration_to_ticks(Duration::from_nanos(100)), 1);
    }

    #[test]
    fn instants_subtract_saturating() {
        let early = Instant {
            since_boot: Duration::from_millis(5),
        };
        let late = Instant {
            since_boot: Duration::from_millis(8),
        };
        assert_eq!(late - early, Duration::from_millis(3));
        assert_eq!(early - late, Duration::ZERO);
        assert_eq!(late.checked_duration_since(early), Some(Duration::from_millis(3)));
        assert_eq!(early.checked_duration_since(late), None);
    }
}
