use crate::{LoadAverage, MemoryReading, Partition, SpaceUsage, SystemProbe};
use hwmon_core::CpuMode;
use std::io;
use std::path::{Path, PathBuf};

/// Scriptable [`SystemProbe`] for tests: every reading is a public field
/// that the test sets before the next tick.
#[derive(Debug, Clone)]
pub struct FakeProbe {
    pub cpu_count:     usize,
    pub load:          Option<LoadAverage>,
    /// Per-core utilisation; the merged reading is their mean.
    pub cores:         Vec<f32>,
    pub memory:        MemoryReading,
    pub swap:          MemoryReading,
    pub network_bytes: u64,
    pub disk_io_bytes: u64,
    /// Mounted filesystems with the result of querying their usage.
    pub partitions:    Vec<(Partition, Result<SpaceUsage, io::ErrorKind>)>,
}

impl Default for FakeProbe {
    fn default() -> Self {
        Self {
            cpu_count:     2,
            load:          Some(LoadAverage::default()),
            cores:         vec![0.0, 0.0],
            memory:        MemoryReading::default(),
            swap:          MemoryReading::default(),
            network_bytes: 0,
            disk_io_bytes: 0,
            partitions:    Vec::new(),
        }
    }
}

impl FakeProbe {
    /// Add a mounted partition whose usage query returns `usage`.
    pub fn mount(
        &mut self,
        mount_point: impl Into<PathBuf>,
        fs_type: &str,
        usage: Result<SpaceUsage, io::ErrorKind>,
    ) -> &mut Self {
        let partition = Partition {
            mount_point: mount_point.into(),
            fs_type:     fs_type.to_string(),
            options:     Vec::new(),
        };
        self.partitions.push((partition, usage));
        self
    }
}

impl SystemProbe for FakeProbe {
    fn cpu_count(&self) -> usize {
        self.cpu_count.max(1)
    }

    fn load_average(&mut self) -> Option<LoadAverage> {
        self.load
    }

    fn cpu_usage(&mut self, mode: CpuMode) -> Vec<f32> {
        match mode {
            CpuMode::PerCore => self.cores.clone(),
            CpuMode::Merged if self.cores.is_empty() => vec![0.0],
            CpuMode::Merged => {
                vec![self.cores.iter().sum::<f32>() / self.cores.len() as f32]
            }
        }
    }

    fn memory(&mut self) -> MemoryReading {
        self.memory
    }

    fn swap(&mut self) -> MemoryReading {
        self.swap
    }

    fn network_bytes(&mut self) -> u64 {
        self.network_bytes
    }

    fn disk_io_bytes(&mut self) -> u64 {
        self.disk_io_bytes
    }

    fn partitions(&mut self) -> Vec<Partition> {
        self.partitions.iter().map(|(p, _)| p.clone()).collect()
    }

    fn space_usage(&mut self, mount_point: &Path) -> io::Result<SpaceUsage> {
        match self.partitions.iter().find(|(p, _)| p.mount_point == mount_point) {
            Some((_, Ok(usage))) => Ok(*usage),
            Some((_, Err(kind))) => Err(io::Error::from(*kind)),
            None => Err(io::Error::from(io::ErrorKind::NotFound)),
        }
    }
}
