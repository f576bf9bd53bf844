use crate::{LoadAverage, MemoryReading, Partition, SpaceUsage, SystemProbe};
use hwmon_core::CpuMode;
use std::collections::HashSet;
use std::io;
use std::path::Path;
use sysinfo::{CpuRefreshKind, Disks, MemoryRefreshKind, Networks, RefreshKind, System};

/// [`SystemProbe`] backed by `sysinfo`.
///
/// Keeps the `System`, `Networks` and `Disks` handles alive between ticks so
/// CPU usage and counters are measured against the previous refresh.
pub struct SysinfoProbe {
    sys:      System,
    networks: Networks,
    disks:    Disks,
}

impl SysinfoProbe {
    pub fn new() -> Self {
        // The initial CPU refresh is the baseline the first tick measures against.
        let mut sys = System::new_with_specifics(
            RefreshKind::nothing()
                .with_cpu(CpuRefreshKind::nothing().with_cpu_usage())
                .with_memory(MemoryRefreshKind::everything()),
        );
        sys.refresh_cpu_usage();

        let networks = Networks::new_with_refreshed_list();
        let disks    = Disks::new_with_refreshed_list();

        tracing::debug!(
            cpus = sys.cpus().len(),
            interfaces = networks.list().len(),
            disks = disks.list().len(),
            "system probe ready"
        );

        Self { sys, networks, disks }
    }
}

impl Default for SysinfoProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemProbe for SysinfoProbe {
    fn cpu_count(&self) -> usize {
        self.sys.cpus().len().max(1)
    }

    fn load_average(&mut self) -> Option<LoadAverage> {
        if cfg!(target_os = "windows") {
            return None;
        }
        let load = System::load_average();
        Some(LoadAverage {
            one:     load.one,
            five:    load.five,
            fifteen: load.fifteen,
        })
    }

    fn cpu_usage(&mut self, mode: CpuMode) -> Vec<f32> {
        self.sys.refresh_cpu_usage();
        match mode {
            CpuMode::Merged  => vec![self.sys.global_cpu_usage()],
            CpuMode::PerCore => self.sys.cpus().iter().map(|c| c.cpu_usage()).collect(),
        }
    }

    fn memory(&mut self) -> MemoryReading {
        self.sys.refresh_memory();
        MemoryReading {
            total: self.sys.total_memory(),
            used:  self.sys.used_memory(),
        }
    }

    fn swap(&mut self) -> MemoryReading {
        self.sys.refresh_memory();
        MemoryReading {
            total: self.sys.total_swap(),
            used:  self.sys.used_swap(),
        }
    }

    fn network_bytes(&mut self) -> u64 {
        self.networks.refresh(true);
        self.networks
            .list()
            .values()
            .map(|data| data.total_received() + data.total_transmitted())
            .sum()
    }

    fn disk_io_bytes(&mut self) -> u64 {
        self.disks.refresh(true);
        // A device mounted twice (bind mounts, btrfs subvolumes) is counted once.
        let mut seen = HashSet::new();
        self.disks
            .list()
            .iter()
            .filter(|disk| seen.insert(disk.name().to_os_string()))
            .map(|disk| {
                let usage = disk.usage();
                usage.total_read_bytes + usage.total_written_bytes
            })
            .sum()
    }

    fn partitions(&mut self) -> Vec<Partition> {
        self.disks.refresh(true);
        self.disks
            .list()
            .iter()
            .map(|disk| Partition {
                mount_point: disk.mount_point().to_path_buf(),
                fs_type:     disk.file_system().to_string_lossy().into_owned(),
                options:     Vec::new(),
            })
            .collect()
    }

    fn space_usage(&mut self, mount_point: &Path) -> io::Result<SpaceUsage> {
        self.disks
            .list()
            .iter()
            .find(|disk| disk.mount_point() == mount_point)
            .map(|disk| SpaceUsage {
                total:     disk.total_space(),
                available: disk.available_space(),
            })
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("'{}' is not mounted", mount_point.display()),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_without_nan() {
        let mut probe = SysinfoProbe::new();
        assert!(probe.cpu_count() >= 1);

        let merged = probe.cpu_usage(CpuMode::Merged);
        assert_eq!(merged.len(), 1);
        assert!(merged[0].is_finite(), "CPU percent should always be finite");

        let mem = probe.memory();
        assert!(mem.used_percent().is_finite());
        assert!(mem.used <= mem.total);
    }

    #[test]
    fn counters_do_not_go_backwards_immediately() {
        let mut probe = SysinfoProbe::new();
        let first = probe.network_bytes();
        let second = probe.network_bytes();
        assert!(second >= first);
    }
}
