/// Tick counter that rate-limits aggregation.
///
/// The counter is compared with `>` after incrementing, so with interval `I`
/// the cadence fires on ticks `I + 1`, `2I + 2`, `3I + 3`, …  After firing
/// the counter restarts from zero.
#[derive(Debug, Clone)]
pub struct Cadence {
    interval: u32,
    counter:  u32,
}

impl Cadence {
    pub fn new(interval: u32) -> Self {
        Self { interval, counter: 0 }
    }

    /// Advance by one tick.  Returns `true` when aggregation is due.
    pub fn tick(&mut self) -> bool {
        self.counter = self.counter.saturating_add(1);
        if self.counter > self.interval {
            self.counter = 0;
            return true;
        }
        false
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn firing_ticks(interval: u32, ticks: u32) -> Vec<u32> {
        let mut cadence = Cadence::new(interval);
        (1..=ticks).filter(|_| cadence.tick()).collect()
    }

    #[test]
    fn fires_one_tick_after_interval() {
        assert_eq!(firing_ticks(3, 12), vec![4, 8, 12]);
        assert_eq!(firing_ticks(30, 100), vec![31, 62, 93]);
    }

    #[test]
    fn zero_interval_fires_every_tick() {
        assert_eq!(firing_ticks(0, 4), vec![1, 2, 3, 4]);
    }

    #[test]
    fn quiet_until_interval_exceeded() {
        let mut cadence = Cadence::new(5);
        for _ in 0..5 {
            assert!(!cadence.tick());
        }
        assert!(cadence.tick());
    }

    #[test]
    fn max_interval_never_overflows() {
        let mut cadence = Cadence {
            interval: u32::MAX,
            counter:  u32::MAX - 1,
        };
        assert!(!cadence.tick());
        assert!(!cadence.tick());
        assert!(!cadence.tick());
        assert_eq!(cadence.counter, u32::MAX);
    }
}
