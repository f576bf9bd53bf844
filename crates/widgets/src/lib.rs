//! Samplers for each metric kind, wrapped in the [`Metric`] tagged variant.
//!
//! A `Metric` owns one [`Gauge`] per tray icon (several for per-core CPU)
//! and refreshes them from a [`SystemProbe`] once per tick.

pub mod cpu;
pub mod disk;
pub mod gauge;
pub mod load;
pub mod memory;
pub mod network;
pub mod swap;

pub use cpu::CpuWidget;
pub use disk::DiskWidget;
pub use gauge::Gauge;
pub use load::LoadWidget;
pub use memory::MemoryWidget;
pub use network::NetworkWidget;
pub use swap::SwapWidget;

use hwmon_config::Settings;
use hwmon_core::MetricKind;
use hwmon_system::SystemProbe;
use hwmon_theme::Palette;

/// An enabled metric.  Disabled metrics simply have no `Metric`.
#[derive(Debug)]
pub enum Metric {
    Load(LoadWidget),
    Cpu(CpuWidget),
    Memory(MemoryWidget),
    Swap(SwapWidget),
    Network(NetworkWidget),
    DiskIo(DiskWidget),
}

impl Metric {
    /// Build the sampler for `kind`, taking any initial readings it needs.
    pub fn build(kind: MetricKind, settings: &Settings, palette: &Palette, probe: &mut dyn SystemProbe) -> Self {
        let width = settings.size as usize;
        let style = palette.style_for(kind);
        let secs  = settings.interval_secs();

        match kind {
            MetricKind::Load => Self::Load(LoadWidget::new(width, probe.cpu_count(), style)),
            MetricKind::Cpu => Self::Cpu(CpuWidget::new(width, settings.cpu_mode, style, probe)),
            MetricKind::Memory => Self::Memory(MemoryWidget::new(width, settings.mem_percent, style)),
            MetricKind::Swap => Self::Swap(SwapWidget::new(width, settings.swap_percent, style)),
            MetricKind::Network => {
                Self::Network(NetworkWidget::new(width, settings.net_scale, secs, style, probe))
            }
            MetricKind::DiskIo => {
                Self::DiskIo(DiskWidget::new(width, settings.io_scale, secs, style, probe))
            }
        }
    }

    pub fn kind(&self) -> MetricKind {
        match self {
            Self::Load(_)    => MetricKind::Load,
            Self::Cpu(_)     => MetricKind::Cpu,
            Self::Memory(_)  => MetricKind::Memory,
            Self::Swap(_)    => MetricKind::Swap,
            Self::Network(_) => MetricKind::Network,
            Self::DiskIo(_)  => MetricKind::DiskIo,
        }
    }

    /// Take a fresh reading and push it into every gauge.
    pub fn sample(&mut self, probe: &mut dyn SystemProbe) {
        match self {
            Self::Load(w)    => w.sample(probe),
            Self::Cpu(w)     => w.sample(probe),
            Self::Memory(w)  => w.sample(probe),
            Self::Swap(w)    => w.sample(probe),
            Self::Network(w) => w.sample(probe),
            Self::DiskIo(w)  => w.sample(probe),
        }
    }

    /// One gauge per tray icon, in display order.
    pub fn gauges(&self) -> &[Gauge] {
        match self {
            Self::Load(w)    => w.gauges(),
            Self::Cpu(w)     => w.gauges(),
            Self::Memory(w)  => w.gauges(),
            Self::Swap(w)    => w.gauges(),
            Self::Network(w) => w.gauges(),
            Self::DiskIo(w)  => w.gauges(),
        }
    }
}
