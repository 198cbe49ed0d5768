use std::time::Duration;

/// Converts elapsed wall-clock time into a whole number of fixed-rate ticks.
///
/// Time that doesn't add up to a full interval is carried over to the next call,
/// so a steady stream of short frames still averages out to the requested rate.
#[derive(Clone, Copy, Debug)]
pub struct Pacer {
    interval: Duration,
    owed: Duration,
}

impl Pacer {
    /// # Arguments
    /// * `hz` ticks per second; 0 is treated as 1
    pub fn new(hz: u32) -> Self {
        Pacer {
            interval: Duration::from_nanos(1_000_000_000 / u64::from(hz.max(1))),
            owed: Duration::from_secs(0),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Adds `elapsed` and returns how many ticks are now due
    pub fn due(&mut self, elapsed: Duration) -> u32 {
        self.owed += elapsed;
        let owed = self.owed.as_nanos();
        let interval = self.interval.as_nanos();
        self.owed = Duration::from_nanos((owed % interval) as u64);
        (owed / interval).min(u128::from(u32::MAX)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_second_at_60hz() {
        let mut pacer = Pacer::new(60);
        assert_eq!(pacer.due(Duration::from_secs(1)), 60);
    }

    #[test]
    fn test_full_second_at_700hz() {
        let mut pacer = Pacer::new(700);
        assert_eq!(pacer.due(Duration::from_secs(1)), 700);
    }

    #[test]
    fn test_carries_remainder() {
        let mut pacer = Pacer::new(100);
        assert_eq!(pacer.due(Duration::from_millis(6)), 0);
        assert_eq!(pacer.due(Duration::from_millis(6)), 1);
        assert_eq!(pacer.due(Duration::from_millis(6)), 0);
        assert_eq!(pacer.due(Duration::from_millis(6)), 1);
    }

    #[test]
    fn test_zero_hz_is_one_hz() {
        let mut pacer = Pacer::new(0);
        assert_eq!(pacer.interval(), Duration::from_secs(1));
        assert_eq!(pacer.due(Duration::from_millis(2500)), 2);
    }
}
