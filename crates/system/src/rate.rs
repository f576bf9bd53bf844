/// Turns a cumulative counter (bytes since boot) into a per-interval rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateComputer {
    last: u64,
}

impl RateComputer {
    /// Seed with the counter value read at startup.
    pub fn new(initial: u64) -> Self {
        Self { last: initial }
    }

    /// Change since the previous read; `0` if the counter went backwards
    /// (reset, wrap, or an interface/disk disappearing).
    pub fn delta(&mut self, current: u64) -> u64 {
        let delta = current.saturating_sub(self.last);
        self.last = current;
        delta
    }

    /// Counter units per second over an interval of `interval_secs`.
    pub fn rate(&mut self, current: u64, interval_secs: f64) -> f64 {
        self.delta(current) as f64 / interval_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_from_counter_sequence() {
        let mut counters = [100u64, 150, 150, 200].into_iter();
        let mut rc = RateComputer::new(counters.next().unwrap());
        let rates: Vec<f64> = counters.map(|c| rc.rate(c, 1.0)).collect();
        assert_eq!(rates, vec![50.0, 0.0, 50.0]);
    }

    #[test]
    fn counter_reset_yields_zero_and_rebases() {
        let mut rc = RateComputer::new(1_000);
        assert_eq!(rc.delta(10), 0);
        assert_eq!(rc.delta(30), 20);
    }

    #[test]
    fn rate_scales_with_interval() {
        let mut rc = RateComputer::new(0);
        assert_eq!(rc.rate(500, 0.5), 1_000.0);
    }
}
