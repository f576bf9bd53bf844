pub mod colors;
pub mod style;

pub use colors::{normalize_hex, Color};
pub use style::GraphStyle;

use hwmon_config::ColorConfig;
use hwmon_core::{MetricKind, Result};

/// Compiled palette derived from [`ColorConfig`].
///
/// All colours are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Unlike a UI theme there is no fallback: a malformed colour is a
/// configuration error and the monitor refuses to start.
#[derive(Debug, Clone)]
pub struct Palette {
    pub background: Color,
    pub load:       Color,
    pub cpu:        Color,
    pub memory:     Color,
    pub swap:       Color,
    pub network:    Color,
    pub disk_io:    Color,
}

impl Palette {
    /// Build a [`Palette`] from the `[colors]` settings.
    pub fn from_config(cfg: &ColorConfig) -> Result<Self> {
        Ok(Self {
            background: Color::from_hex(&cfg.background)?,
            load:       Color::from_hex(&cfg.load)?,
            cpu:        Color::from_hex(&cfg.cpu)?,
            memory:     Color::from_hex(&cfg.memory)?,
            swap:       Color::from_hex(&cfg.swap)?,
            network:    Color::from_hex(&cfg.network)?,
            disk_io:    Color::from_hex(&cfg.disk_io)?,
        })
    }

    #[must_use]
    pub fn foreground(&self, kind: MetricKind) -> Color {
        match kind {
            MetricKind::Load    => self.load,
            MetricKind::Cpu     => self.cpu,
            MetricKind::Memory  => self.memory,
            MetricKind::Swap    => self.swap,
            MetricKind::Network => self.network,
            MetricKind::DiskIo  => self.disk_io,
        }
    }

    /// Background plus the foreground of `kind`.
    #[must_use]
    pub fn style_for(&self, kind: MetricKind) -> GraphStyle {
        GraphStyle {
            background: self.background,
            foreground: self.foreground(kind),
        }
    }
}
