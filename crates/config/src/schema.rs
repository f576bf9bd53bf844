use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `hwmon.toml`.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HwmonConfig {
    /// Command launched on left click, e.g. `"gnome-system-monitor"`.
    pub task_manager: Option<String>,
    /// Which metrics get an icon.
    pub metrics: MetricsConfig,
    /// Tooltip verbosity.
    pub tooltip: TooltipConfig,
    /// Icon geometry, refresh rate and graph scales.
    pub graph: GraphConfig,
    /// Graph colours.
    pub colors: ColorConfig,
}

/// Metric enable flags.  When all are `false` every metric is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub load: bool,
    pub cpu: bool,
    /// One CPU icon per logical core (implies `cpu`).
    pub core: bool,
    pub memory: bool,
    pub swap: bool,
    pub network: bool,
    pub disk_io: bool,
}

impl MetricsConfig {
    /// `true` when at least one metric was asked for explicitly.
    #[must_use]
    pub fn any(&self) -> bool {
        self.load || self.cpu || self.core || self.memory || self.swap || self.network || self.disk_io
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    /// Show used memory as a percentage instead of bytes.
    pub mem_percent: bool,
    /// Show used swap as a percentage instead of bytes.
    pub swap_percent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Icon width and height in pixels.
    pub size: u32,
    /// Refresh interval in milliseconds.
    pub interval_ms: u64,
    /// Reverse the order of the icons.
    pub invert: bool,
    /// Full-scale value of the network graph, in Mb/s.
    pub net_scale: u32,
    /// Full-scale value of the disk I/O graph, in MB/s.
    pub io_scale: u32,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            size:        22,
            interval_ms: 1_000,
            invert:      false,
            net_scale:   40,
            io_scale:    100,
        }
    }
}

/// RGBA hex colours (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub background: String,
    pub load:       String,
    pub cpu:        String,
    pub memory:     String,
    pub swap:       String,
    pub network:    String,
    pub disk_io:    String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: "#00000077".to_string(),
            load:       "#f93".to_string(),
            cpu:        "#3f3".to_string(),
            memory:     "#ff3".to_string(),
            swap:       "#419CFF".to_string(),
            network:    "#33f".to_string(),
            disk_io:    "#3cf".to_string(),
        }
    }
}
