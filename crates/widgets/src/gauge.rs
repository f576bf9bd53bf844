use hwmon_system::MetricSeries;
use hwmon_theme::GraphStyle;

/// One tray icon's worth of state: its history, colours and tooltip.
#[derive(Debug, Clone)]
pub struct Gauge {
    title:   String,
    series:  MetricSeries,
    style:   GraphStyle,
    tooltip: Option<String>,
    visible: bool,
}

impl Gauge {
    pub fn new(title: String, width: usize, scale: f64, style: GraphStyle) -> Self {
        Self {
            title,
            series: MetricSeries::new(width, scale),
            style,
            tooltip: None,
            visible: true,
        }
    }

    /// Push a sample and replace the tooltip.
    pub fn record(&mut self, value: f64, tooltip: String) {
        self.series.push(value);
        self.tooltip = Some(tooltip);
    }

    /// Push a sample, keeping whatever tooltip was shown before.
    pub fn push(&mut self, value: f64) {
        self.series.push(value);
    }

    /// Returns `true` if visibility actually changed.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        let changed = self.visible != visible;
        self.visible = visible;
        changed
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn series(&self) -> &MetricSeries {
        &self.series
    }

    pub fn style(&self) -> &GraphStyle {
        &self.style
    }

    /// Current tooltip text; `None` until the first sample.
    pub fn describe(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
