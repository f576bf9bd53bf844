use crate::gauge::Gauge;
use hwmon_core::MetricKind;
use hwmon_system::{bytes2human, MemoryReading, SystemProbe};
use hwmon_theme::GraphStyle;

/// Graphs used RAM as a percentage of total.
#[derive(Debug)]
pub struct MemoryWidget {
    gauge:   Gauge,
    percent: bool,
}

impl MemoryWidget {
    /// `percent` selects a percentage tooltip instead of absolute bytes.
    pub fn new(width: usize, percent: bool, style: GraphStyle) -> Self {
        Self {
            gauge: Gauge::new(MetricKind::Memory.title(None), width, 100.0, style),
            percent,
        }
    }

    pub fn sample(&mut self, probe: &mut dyn SystemProbe) {
        let mem = probe.memory();
        self.gauge.record(mem.used_percent(), usage_tooltip("Memory", &mem, self.percent));
    }

    pub fn gauges(&self) -> &[Gauge] {
        std::slice::from_ref(&self.gauge)
    }
}

/// `"Memory: 42% used of 15.5 GB"` or `"Memory: 6.5 GB used of 15.5 GB"`.
pub(crate) fn usage_tooltip(label: &str, reading: &MemoryReading, percent: bool) -> String {
    let total = bytes2human(reading.total);
    if percent {
        format!("{label}: {}% used of {total}", reading.used_percent() as u32)
    } else {
        format!("{label}: {} used of {total}", bytes2human(reading.used))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hwmon_system::FakeProbe;
    use hwmon_theme::Color;

    const GIB: u64 = 1 << 30;

    fn style() -> GraphStyle {
        GraphStyle { background: Color::TRANSPARENT, foreground: Color::TRANSPARENT }
    }

    #[test]
    fn absolute_tooltip() {
        let mut probe = FakeProbe::default();
        probe.memory = MemoryReading { total: 16 * GIB, used: 4 * GIB };

        let mut w = MemoryWidget::new(4, false, style());
        w.sample(&mut probe);

        let g = &w.gauges()[0];
        assert_eq!(g.series().latest(), 25.0);
        assert_eq!(g.describe(), Some("Memory: 4.0 GB used of 16.0 GB"));
    }

    #[test]
    fn percent_tooltip_truncates() {
        let mut probe = FakeProbe::default();
        probe.memory = MemoryReading { total: 3 * GIB, used: 2 * GIB };

        let mut w = MemoryWidget::new(4, true, style());
        w.sample(&mut probe);

        assert_eq!(w.gauges()[0].describe(), Some("Memory: 66% used of 3.0 GB"));
    }
}
