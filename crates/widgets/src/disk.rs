use crate::gauge::Gauge;
use hwmon_core::MetricKind;
use hwmon_system::{bytes2human, RateComputer, SystemProbe};
use hwmon_theme::GraphStyle;
use std::io;

/// Disk throughput in MB/s, with per-filesystem space usage in the tooltip.
#[derive(Debug)]
pub struct DiskWidget {
    gauge:         Gauge,
    counter:       RateComputer,
    interval_secs: f64,
}

impl DiskWidget {
    pub fn new(width: usize, scale: f64, interval_secs: f64, style: GraphStyle, probe: &mut dyn SystemProbe) -> Self {
        Self {
            gauge: Gauge::new(MetricKind::DiskIo.title(None), width, scale, style),
            counter: RateComputer::new(probe.disk_io_bytes()),
            interval_secs,
        }
    }

    pub fn sample(&mut self, probe: &mut dyn SystemProbe) {
        let mbs = self.counter.rate(probe.disk_io_bytes(), self.interval_secs) / 1.0e6;

        let mut tooltip = format!("Disk I/O: {mbs:.1} MB/s");
        for line in partition_lines(probe) {
            tooltip.push('\n');
            tooltip.push_str(&line);
        }
        self.gauge.record(mbs, tooltip);
    }

    pub fn gauges(&self) -> &[Gauge] {
        std::slice::from_ref(&self.gauge)
    }
}

/// `"/home 42% of 931.5 GB (ext4)"` for every listed partition we may stat.
fn partition_lines(probe: &mut dyn SystemProbe) -> Vec<String> {
    let mut lines = Vec::new();
    for part in probe.partitions().into_iter().filter(|p| p.is_listed()) {
        let usage = match probe.space_usage(&part.mount_point) {
            Ok(usage) => usage,
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => continue,
            Err(e) => {
                tracing::debug!("skipping '{}': {e}", part.mount_point.display());
                continue;
            }
        };
        lines.push(format!(
            "{} {}% of {} ({})",
            part.mount_point.display(),
            usage.used_percent() as u32,
            bytes2human(usage.total),
            part.fs_type,
        ));
    }
    lines
}
