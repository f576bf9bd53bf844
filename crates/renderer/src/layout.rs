use hwmon_core::{CpuMode, MetricKind};

/// One tray icon: its position, the metric it shows and its title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSlot {
    pub index: usize,
    pub kind:  MetricKind,
    /// 1-based core number for per-core CPU icons.
    pub core:  Option<usize>,
    pub title: String,
}

/// Ordered list of icon slots for the enabled metrics.
///
/// Slots are numbered left to right in display order. A per-core CPU metric
/// expands into `cores` consecutive slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricLayout {
    slots: Vec<IconSlot>,
}

impl MetricLayout {
    /// Lay out `order` (already inverted if requested).  `cores` is only
    /// consulted for [`CpuMode::PerCore`] and never drops below one icon.
    pub fn new(order: &[MetricKind], cpu_mode: CpuMode, cores: usize) -> Self {
        let mut slots = Vec::new();
        for &kind in order {
            let cores: Vec<Option<usize>> = match (kind, cpu_mode) {
                (MetricKind::Cpu, CpuMode::PerCore) => (1..=cores.max(1)).map(Some).collect(),
                _ => vec![None],
            };
            for core in cores {
                slots.push(IconSlot {
                    index: slots.len(),
                    kind,
                    core,
                    title: kind.title(core),
                });
            }
        }
        Self { slots }
    }

    pub fn slots(&self) -> &[IconSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Titles indexed by slot.
    pub fn titles(&self) -> Vec<String> {
        self.slots.iter().map(|s| s.title.clone()).collect()
    }
}
