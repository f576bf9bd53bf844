use crate::{cli::Cli, schema::{ColorConfig, HwmonConfig}};
use hwmon_core::{CpuMode, HwmonError, MetricKind, Result};
use std::time::Duration;

/// Resolved, immutable runtime settings.
///
/// Built once at startup from the config file and the command line, then
/// handed by reference to the monitor and every sampler.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Enabled metrics in display order (already inverted if requested).
    pub metrics: Vec<MetricKind>,
    pub cpu_mode: CpuMode,
    /// Icon width and height in pixels.
    pub size: u32,
    pub interval: Duration,
    pub mem_percent: bool,
    pub swap_percent: bool,
    /// Network graph full scale, Mb/s.
    pub net_scale: f64,
    /// Disk I/O graph full scale, MB/s.
    pub io_scale: f64,
    pub colors: ColorConfig,
    pub task_manager: Option<String>,
}

impl Settings {
    /// Merge `file` with `cli`: flags OR together, values given on the
    /// command line win.
    pub fn resolve(file: HwmonConfig, cli: &Cli) -> Result<Self> {
        let mut metrics = file.metrics;
        metrics.load    |= cli.load;
        metrics.cpu     |= cli.cpu;
        metrics.core    |= cli.core;
        metrics.memory  |= cli.mem;
        metrics.swap    |= cli.swap;
        metrics.network |= cli.net;
        metrics.disk_io |= cli.io;

        let cpu_mode = if metrics.core {
            CpuMode::PerCore
        } else {
            CpuMode::Merged
        };
        // Nothing requested: show everything, CPU merged.
        let enabled = |kind: MetricKind| -> bool {
            if !metrics.any() {
                return true;
            }
            match kind {
                MetricKind::Load    => metrics.load,
                MetricKind::Cpu     => metrics.cpu || metrics.core,
                MetricKind::Memory  => metrics.memory,
                MetricKind::Swap    => metrics.swap,
                MetricKind::Network => metrics.network,
                MetricKind::DiskIo  => metrics.disk_io,
            }
        };

        let invert = file.graph.invert || cli.invert;
        let mut order: Vec<MetricKind> = MetricKind::ALL.into_iter().filter(|k| enabled(*k)).collect();
        if invert {
            order.reverse();
        }

        let size = cli.size.unwrap_or(file.graph.size);
        if size == 0 {
            return Err(HwmonError::Config("icon size must be at least 1 pixel".into()));
        }

        let net_scale = cli.net_scale.unwrap_or(file.graph.net_scale);
        let io_scale  = cli.io_scale.unwrap_or(file.graph.io_scale);
        if net_scale == 0 || io_scale == 0 {
            return Err(HwmonError::Config("graph scales must be greater than zero".into()));
        }

        let interval_ms = cli.interval.unwrap_or(file.graph.interval_ms).max(1);

        let mut colors = file.colors;
        let overrides = [
            (&cli.bg,      &mut colors.background),
            (&cli.fg_load, &mut colors.load),
            (&cli.fg_cpu,  &mut colors.cpu),
            (&cli.fg_mem,  &mut colors.memory),
            (&cli.fg_swap, &mut colors.swap),
            (&cli.fg_net,  &mut colors.network),
            (&cli.fg_io,   &mut colors.disk_io),
        ];
        for (flag, slot) in overrides {
            if let Some(value) = flag {
                *slot = value.clone();
            }
        }

        let task_manager = cli
            .task_manager
            .clone()
            .or(file.task_manager)
            .filter(|cmd| !cmd.trim().is_empty());

        Ok(Self {
            metrics: order,
            cpu_mode,
            size,
            interval: Duration::from_millis(interval_ms),
            mem_percent: file.tooltip.mem_percent || cli.mem_percent,
            swap_percent: file.tooltip.swap_percent || cli.swap_percent,
            net_scale: f64::from(net_scale),
            io_scale: f64::from(io_scale),
            colors,
            task_manager,
        })
    }

    /// Interval in seconds used for every rate computation (never below 1 ms).
    #[must_use]
    pub fn interval_secs(&self) -> f64 {
        (self.interval.as_millis() as f64 / 1000.0).max(0.001)
    }
}
