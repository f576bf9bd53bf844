use crate::gauge::Gauge;
use hwmon_core::{CpuMode, MetricKind};
use hwmon_system::SystemProbe;
use hwmon_theme::GraphStyle;

/// CPU utilisation, merged or one icon per logical core.
#[derive(Debug)]
pub struct CpuWidget {
    gauges: Vec<Gauge>,
    mode:   CpuMode,
}

impl CpuWidget {
    /// Reads the probe once: this primes the usage counters and, in per-core
    /// mode, fixes the number of icons.
    pub fn new(width: usize, mode: CpuMode, style: GraphStyle, probe: &mut dyn SystemProbe) -> Self {
        let initial = probe.cpu_usage(mode);
        let gauges = match mode {
            CpuMode::Merged => vec![Gauge::new(MetricKind::Cpu.title(None), width, 100.0, style)],
            CpuMode::PerCore => (1..=initial.len().max(1))
                .map(|i| Gauge::new(MetricKind::Cpu.title(Some(i)), width, 100.0, style))
                .collect(),
        };
        Self { gauges, mode }
    }

    pub fn sample(&mut self, probe: &mut dyn SystemProbe) {
        let readings = probe.cpu_usage(self.mode);
        if readings.len() != self.gauges.len() {
            tracing::debug!(
                expected = self.gauges.len(),
                got = readings.len(),
                "CPU count changed since startup"
            );
        }

        for (i, (gauge, value)) in self.gauges.iter_mut().zip(readings).enumerate() {
            let label = match self.mode {
                CpuMode::Merged  => String::new(),
                CpuMode::PerCore => format!(" {}", i + 1),
            };
            gauge.record(f64::from(value), format!("CPU{label}: {value:.1}%"));
        }
    }

    pub fn gauges(&self) -> &[Gauge] {
        &self.gauges
    }
}
