use hwmon_config::Settings;
use hwmon_core::{IconFrame, IconSink, MetricKind, Result, TrayCommand};
use hwmon_renderer::MetricLayout;
use hwmon_system::SystemProbe;
use hwmon_theme::Palette;
use hwmon_widgets::Metric;
use tracing::{debug, info};

/// Owns every enabled metric and drives the sample → render → publish cycle.
///
/// Icons are numbered by the [`MetricLayout`] slot; per-core CPU icons take
/// consecutive slots.
pub struct Monitor<P> {
    settings: Settings,
    probe:    P,
    metrics:  Vec<Metric>,
    layout:   MetricLayout,
}

impl<P: SystemProbe> Monitor<P> {
    /// Build the samplers for every enabled metric.
    ///
    /// Fails only on configuration errors (malformed colours).
    pub fn new(settings: Settings, mut probe: P) -> Result<Self> {
        let palette = Palette::from_config(&settings.colors)?;
        let metrics: Vec<Metric> = settings
            .metrics
            .iter()
            .map(|&kind| Metric::build(kind, &settings, &palette, &mut probe))
            .collect();

        // The CPU sampler fixes the per-core icon count from its first reading.
        let cores = metrics
            .iter()
            .find(|m| m.kind() == MetricKind::Cpu)
            .map_or(1, |m| m.gauges().len());
        let layout = MetricLayout::new(&settings.metrics, settings.cpu_mode, cores);

        info!(metrics = ?settings.metrics, icons = layout.len(), "monitor ready");

        Ok(Self { settings, probe, metrics, layout })
    }

    pub fn layout(&self) -> &MetricLayout {
        &self.layout
    }

    /// Publish the initial (empty) graphs before the first tick.
    pub fn start(&self, sink: &mut impl IconSink) {
        self.publish(sink);
    }

    /// One refresh cycle: sample, render and publish every metric.
    pub fn tick(&mut self, sink: &mut impl IconSink) {
        for metric in &mut self.metrics {
            metric.sample(&mut self.probe);
        }
        self.publish(sink);
    }

    /// Left click on the icon in `slot`.
    pub fn on_activate(&self, slot: usize) -> Option<TrayCommand> {
        debug!(slot, "icon activated");
        self.settings.task_manager.clone().map(TrayCommand::Launch)
    }

    #[cfg(test)]
    fn probe_mut(&mut self) -> &mut P {
        &mut self.probe
    }

    fn publish(&self, sink: &mut impl IconSink) {
        let gauges = self.metrics.iter().flat_map(Metric::gauges);
        for (slot, gauge) in self.layout.slots().iter().zip(gauges) {
            sink.update(IconFrame {
                slot:    slot.index,
                title:   slot.title.clone(),
                bitmap:  hwmon_renderer::render(gauge.series(), gauge.style(), self.settings.size),
                tooltip: gauge.describe().map(str::to_owned),
                visible: gauge.is_visible(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hwmon_config::{Cli, HwmonConfig};
    use hwmon_core::{Bitmap, HwmonError};
    use hwmon_system::{FakeProbe, MemoryReading};

    fn settings(args: Cli) -> Settings {
        Settings::resolve(HwmonConfig::default(), &args).unwrap()
    }

    fn fg_rows(bmp: &Bitmap, x: u32, fg: [u8; 4]) -> u32 {
        (0..bmp.height()).filter(|&y| bmp.pixel(x, y) == Some(fg)).count() as u32
    }

    #[test]
    fn start_paints_blank_icons_in_order() {
        let monitor = Monitor::new(settings(Cli::default()), FakeProbe::default()).unwrap();
        let mut frames: Vec<IconFrame> = Vec::new();
        monitor.start(&mut frames);

        let titles: Vec<&str> = frames.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "hwmon 0 load",
                "hwmon 1 cpu",
                "hwmon 2 memory",
                "hwmon 3 swap",
                "hwmon 4 network",
                "hwmon 5 disk i/o",
            ]
        );
        let blank = Bitmap::filled(22, 22, [0, 0, 0, 0x77]);
        for (slot, frame) in frames.iter().enumerate() {
            assert_eq!(frame.slot, slot);
            assert_eq!(frame.bitmap, blank);
            assert!(frame.tooltip.is_none());
        }
    }

    #[test]
    fn network_end_to_end() {
        let cli = Cli { net: true, interval: Some(1000), net_scale: Some(40), ..Cli::default() };
        let mut monitor = Monitor::new(settings(cli), FakeProbe::default()).unwrap();

        monitor.probe_mut().network_bytes = 1_250_000;
        let mut frames: Vec<IconFrame> = Vec::new();
        monitor.tick(&mut frames);

        assert_eq!(frames.len(), 1);
        let frame = &frames[0];
        assert_eq!(frame.title, "hwmon 4 network");
        assert_eq!(frame.tooltip.as_deref(), Some("Network: 10.0 Mb/s"));

        // round(10 / 40 * 22) = 6 rows of #33f in the newest column only.
        let fg = [0x33, 0x33, 0xff, 0xff];
        assert_eq!(fg_rows(&frame.bitmap, 21, fg), 6);
        assert_eq!(fg_rows(&frame.bitmap, 20, fg), 0);
    }

    #[test]
    fn inverted_order_and_per_core_slots() {
        let cli = Cli { core: true, mem: true, invert: true, ..Cli::default() };
        let probe = FakeProbe { cores: vec![50.0, 100.0], ..FakeProbe::default() };
        let mut monitor = Monitor::new(settings(cli), probe).unwrap();

        assert_eq!(
            monitor.layout().titles(),
            vec!["hwmon 2 memory", "hwmon 1 cpu 1", "hwmon 1 cpu 2"]
        );
        // Gauge titles and layout titles agree slot for slot.
        let gauge_titles: Vec<&str> = monitor.metrics.iter().flat_map(Metric::gauges).map(|g| g.title()).collect();
        assert_eq!(gauge_titles, monitor.layout().titles());

        let mut frames: Vec<IconFrame> = Vec::new();
        monitor.tick(&mut frames);
        let slots: Vec<usize> = frames.iter().map(|f| f.slot).collect();
        assert_eq!(slots, vec![0, 1, 2]);
        assert_eq!(frames[2].tooltip.as_deref(), Some("CPU 2: 100.0%"));
    }

    #[test]
    fn swap_without_swap_is_hidden() {
        let cli = Cli { swap: true, mem: true, ..Cli::default() };
        let mut probe = FakeProbe::default();
        probe.memory = MemoryReading { total: 4096, used: 1024 };
        let mut monitor = Monitor::new(settings(cli), probe).unwrap();

        let mut frames: Vec<IconFrame> = Vec::new();
        monitor.tick(&mut frames);

        assert!(frames[0].visible);
        assert_eq!(frames[0].tooltip.as_deref(), Some("Memory: 1.0 KB used of 4.0 KB"));
        assert!(!frames[1].visible);
        assert_eq!(frames[1].title, "hwmon 3 swap");
    }

    #[test]
    fn every_tick_publishes_every_icon() {
        let mut monitor = Monitor::new(settings(Cli::default()), FakeProbe::default()).unwrap();
        let mut frames: Vec<IconFrame> = Vec::new();
        for _ in 0..3 {
            monitor.tick(&mut frames);
        }
        assert_eq!(frames.len(), 3 * 6);
        assert!(frames.iter().all(|f| f.tooltip.is_some() || f.title == "hwmon 3 swap"));
    }

    #[test]
    fn activation_launches_task_manager_when_configured() {
        let monitor = Monitor::new(settings(Cli::default()), FakeProbe::default()).unwrap();
        assert_eq!(monitor.on_activate(0), None);

        let cli = Cli { task_manager: Some("htop".into()), ..Cli::default() };
        let monitor = Monitor::new(settings(cli), FakeProbe::default()).unwrap();
        assert_eq!(monitor.on_activate(3), Some(TrayCommand::Launch("htop".into())));
    }

    #[test]
    fn bad_colour_refuses_to_start() {
        let cli = Cli { fg_net: Some("#12".into()), ..Cli::default() };
        let err = Monitor::new(settings(cli), FakeProbe::default()).err().unwrap();
        assert!(matches!(err, HwmonError::Config(_)));
    }
}
