use crate::gauge::Gauge;
use hwmon_core::MetricKind;
use hwmon_system::{RateComputer, SystemProbe};
use hwmon_theme::GraphStyle;

/// Combined send + receive throughput in megabits per second.
#[derive(Debug)]
pub struct NetworkWidget {
    gauge:         Gauge,
    counter:       RateComputer,
    interval_secs: f64,
}

impl NetworkWidget {
    /// `scale` is the full-height rate in Mb/s. The byte counter is read
    /// now so the first tick measures one interval, not the uptime.
    pub fn new(width: usize, scale: f64, interval_secs: f64, style: GraphStyle, probe: &mut dyn SystemProbe) -> Self {
        Self {
            gauge: Gauge::new(MetricKind::Network.title(None), width, scale, style),
            counter: RateComputer::new(probe.network_bytes()),
            interval_secs,
        }
    }

    pub fn sample(&mut self, probe: &mut dyn SystemProbe) {
        let bytes_per_sec = self.counter.rate(probe.network_bytes(), self.interval_secs);
        let mbps = bytes_per_sec * 8.0 / 1.0e6;
        self.gauge.record(mbps, format!("Network: {mbps:.1} Mb/s"));
    }

    pub fn gauges(&self) -> &[Gauge] {
        std::slice::from_ref(&self.gauge)
    }
}
