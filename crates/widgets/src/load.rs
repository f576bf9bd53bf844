use crate::gauge::Gauge;
use hwmon_core::MetricKind;
use hwmon_system::{LoadAverage, SystemProbe};
use hwmon_theme::GraphStyle;

/// Graphs the 1-minute load average.
///
/// Full scale is the logical CPU count plus two, so a saturated machine
/// sits near the top without pinning it.
#[derive(Debug)]
pub struct LoadWidget {
    gauge: Gauge,
    scale: usize,
}

impl LoadWidget {
    pub fn new(width: usize, cpu_count: usize, style: GraphStyle) -> Self {
        let scale = cpu_count.max(1) + 2;
        Self {
            gauge: Gauge::new(MetricKind::Load.title(None), width, scale as f64, style),
            scale,
        }
    }

    pub fn sample(&mut self, probe: &mut dyn SystemProbe) {
        let (value, load) = match probe.load_average() {
            Some(load) => (load.one.clamp(0.0, self.scale as f64), load),
            None => {
                tracing::debug!("load average unavailable; repeating previous sample");
                (self.gauge.series().latest(), LoadAverage::default())
            }
        };

        let tooltip = format!(
            "Load avg: {:.2} (1m), {:.2} (5m), {:.2} (15m)  |  scale 0..{}",
            load.one, load.five, load.fifteen, self.scale
        );
        self.gauge.record(value, tooltip);
    }

    pub fn gauges(&self) -> &[Gauge] {
        std::slice::from_ref(&self.gauge)
    }
}
