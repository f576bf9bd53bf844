use std::fmt;

/// The six metric families that can be shown in the tray.
///
/// The declaration order is the normal display order; `ordinal()` is part
/// of the icon title, which some tray hosts sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetricKind {
    Load,
    Cpu,
    Memory,
    Swap,
    Network,
    DiskIo,
}

impl MetricKind {
    pub const ALL: [MetricKind; 6] = [
        MetricKind::Load,
        MetricKind::Cpu,
        MetricKind::Memory,
        MetricKind::Swap,
        MetricKind::Network,
        MetricKind::DiskIo,
    ];

    #[must_use]
    pub fn ordinal(self) -> u8 {
        match self {
            Self::Load    => 0,
            Self::Cpu     => 1,
            Self::Memory  => 2,
            Self::Swap    => 3,
            Self::Network => 4,
            Self::DiskIo  => 5,
        }
    }

    /// Name used in icon titles.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Load    => "load",
            Self::Cpu     => "cpu",
            Self::Memory  => "memory",
            Self::Swap    => "swap",
            Self::Network => "network",
            Self::DiskIo  => "disk i/o",
        }
    }

    /// Stable icon title, e.g. `"hwmon 4 network"` or `"hwmon 1 cpu 3"`.
    ///
    /// `index` is the 1-based core number for per-core CPU icons.
    #[must_use]
    pub fn title(self, index: Option<usize>) -> String {
        match index {
            Some(i) => format!("hwmon {} {self} {i}", self.ordinal()),
            None    => format!("hwmon {} {self}", self.ordinal()),
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How CPU utilisation is broken down into icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CpuMode {
    /// One icon for the aggregate of all logical cores.
    #[default]
    Merged,
    /// One icon per logical core.
    PerCore,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_are_stable() {
        assert_eq!(MetricKind::Load.title(None), "hwmon 0 load");
        assert_eq!(MetricKind::Cpu.title(None), "hwmon 1 cpu");
        assert_eq!(MetricKind::Cpu.title(Some(3)), "hwmon 1 cpu 3");
        assert_eq!(MetricKind::Memory.title(None), "hwmon 2 memory");
        assert_eq!(MetricKind::Swap.title(None), "hwmon 3 swap");
        assert_eq!(MetricKind::Network.title(None), "hwmon 4 network");
        assert_eq!(MetricKind::DiskIo.title(None), "hwmon 5 disk i/o");
    }

    #[test]
    fn ordinals_follow_declaration_order() {
        let ordinals: Vec<u8> = MetricKind::ALL.iter().map(|k| k.ordinal()).collect();
        assert_eq!(ordinals, vec![0, 1, 2, 3, 4, 5]);
    }
}
