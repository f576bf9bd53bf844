use crate::{gauge::Gauge, memory::usage_tooltip};
use hwmon_core::MetricKind;
use hwmon_system::SystemProbe;
use hwmon_theme::GraphStyle;

/// Graphs used swap.
///
/// Hidden when the system has no swap configured; it reappears as soon as
/// swap is added.
#[derive(Debug)]
pub struct SwapWidget {
    gauge:   Gauge,
    percent: bool,
}

impl SwapWidget {
    pub fn new(width: usize, percent: bool, style: GraphStyle) -> Self {
        Self {
            gauge: Gauge::new(MetricKind::Swap.title(None), width, 100.0, style),
            percent,
        }
    }

    pub fn sample(&mut self, probe: &mut dyn SystemProbe) {
        let swap = probe.swap();
        let available = swap.total > 0;

        if self.gauge.set_visible(available) {
            tracing::info!(visible = available, "swap icon visibility changed");
        }

        if available {
            self.gauge.record(swap.used_percent(), usage_tooltip("Swap", &swap, self.percent));
        } else {
            self.gauge.push(0.0);
        }
    }

    pub fn gauges(&self) -> &[Gauge] {
        std::slice::from_ref(&self.gauge)
    }
}
