pub mod disk;
pub mod fake;
pub mod memory;
pub mod probe;
pub mod rate;
pub mod series;

pub use disk::{Partition, SpaceUsage};
pub use fake::FakeProbe;
pub use memory::{bytes2human, MemoryReading};
pub use probe::SysinfoProbe;
pub use rate::RateComputer;
pub use series::MetricSeries;

use hwmon_core::CpuMode;
use std::io;
use std::path::Path;

/// 1, 5 and 15 minute system load averages.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoadAverage {
    pub one:     f64,
    pub five:    f64,
    pub fifteen: f64,
}

/// Source of raw OS readings.
///
/// Every call is a fresh read; implementations must stay cheap enough to be
/// called several times per tick.
pub trait SystemProbe {
    /// Number of logical CPUs (at least 1).
    fn cpu_count(&self) -> usize;

    /// `None` when the platform has no load average.
    fn load_average(&mut self) -> Option<LoadAverage>;

    /// CPU utilisation in `[0, 100]` since the previous call: one value for
    /// [`CpuMode::Merged`], one per logical core otherwise.
    fn cpu_usage(&mut self, mode: CpuMode) -> Vec<f32>;

    fn memory(&mut self) -> MemoryReading;

    fn swap(&mut self) -> MemoryReading;

    /// Cumulative bytes sent plus received on all interfaces.
    fn network_bytes(&mut self) -> u64;

    /// Cumulative bytes read plus written on all disks.
    fn disk_io_bytes(&mut self) -> u64;

    /// Mounted filesystems.
    fn partitions(&mut self) -> Vec<Partition>;

    /// Space usage of the filesystem mounted at `mount_point`.
    fn space_usage(&mut self, mount_point: &Path) -> io::Result<SpaceUsage>;
}
