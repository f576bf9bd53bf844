use std::collections::VecDeque;

/// Fixed-width rolling history of samples for one graph.
///
/// Always holds exactly `width` values, oldest first. A new series starts
/// out as all zeros, so the graph scrolls in from the right.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSeries {
    samples: VecDeque<f64>,
    scale:   f64,
}

impl MetricSeries {
    /// A zero-filled series `width` samples wide whose full-height value is `scale`.
    pub fn new(width: usize, scale: f64) -> Self {
        Self {
            samples: std::iter::repeat(0.0).take(width).collect(),
            scale,
        }
    }

    /// Push a new sample, evicting the oldest.
    pub fn push(&mut self, value: f64) {
        if self.samples.is_empty() {
            return;
        }
        self.samples.pop_front();
        self.samples.push_back(value);
    }

    /// Samples from oldest to newest.
    pub fn values(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    /// The most recent sample.
    pub fn latest(&self) -> f64 {
        self.samples.back().copied().unwrap_or(0.0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_zeroed_at_full_width() {
        let s = MetricSeries::new(22, 100.0);
        assert_eq!(s.len(), 22);
        assert!(s.values().all(|v| v == 0.0));
        assert_eq!(s.scale(), 100.0);
    }

    #[test]
    fn keeps_last_width_values_in_order() {
        let mut s = MetricSeries::new(4, 100.0);
        for v in 1..=10 {
            s.push(v as f64);
            assert_eq!(s.len(), 4);
        }
        assert_eq!(s.values().collect::<Vec<_>>(), vec![7.0, 8.0, 9.0, 10.0]);
        assert_eq!(s.latest(), 10.0);
    }

    #[test]
    fn partial_fill_keeps_leading_zeros() {
        let mut s = MetricSeries::new(3, 1.0);
        s.push(0.5);
        assert_eq!(s.values().collect::<Vec<_>>(), vec![0.0, 0.0, 0.5]);
    }
}
