//! Minimal StatusNotifierItem host: one D-Bus connection per icon.
//!
//! Only what the monitor needs is exposed: title, pixmap, tooltip and
//! visibility (`Status`), plus `Activate` for left clicks.

use hwmon_core::{Bitmap, HwmonError, IconFrame, IconSink, Result, TrayEvent};
use hwmon_renderer::MetricLayout;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{info, warn};
use zbus::{object_server::SignalEmitter, Connection};

const ITEM_PATH:    &str = "/StatusNotifierItem";
const WATCHER_NAME: &str = "org.kde.StatusNotifierWatcher";
const WATCHER_PATH: &str = "/StatusNotifierWatcher";

type Pixmap = (i32, i32, Vec<u8>);

/// D-Bus object behind one tray icon.
struct StatusNotifierItem {
    slot:    usize,
    title:   String,
    pixmap:  Option<Pixmap>,
    tooltip: String,
    visible: bool,
    events:  UnboundedSender<TrayEvent>,
}

#[zbus::interface(name = "org.kde.StatusNotifierItem")]
impl StatusNotifierItem {
    #[zbus(property)]
    fn category(&self) -> String {
        "Hardware".to_string()
    }

    #[zbus(property)]
    fn id(&self) -> String {
        self.title.clone()
    }

    #[zbus(property)]
    fn title(&self) -> String {
        self.title.clone()
    }

    #[zbus(property)]
    fn status(&self) -> String {
        status_name(self.visible).to_string()
    }

    #[zbus(property)]
    fn icon_name(&self) -> String {
        String::new()
    }

    #[zbus(property)]
    fn icon_pixmap(&self) -> Vec<Pixmap> {
        self.pixmap.iter().cloned().collect()
    }

    #[zbus(property)]
    fn tool_tip(&self) -> (String, Vec<Pixmap>, String, String) {
        (String::new(), Vec::new(), self.title.clone(), self.tooltip.clone())
    }

    #[zbus(property)]
    fn item_is_menu(&self) -> bool {
        false
    }

    fn activate(&self, _x: i32, _y: i32) {
        let _ = self.events.send(TrayEvent::Activated { slot: self.slot });
    }

    fn secondary_activate(&self, _x: i32, _y: i32) {}

    fn context_menu(&self, _x: i32, _y: i32) {}

    fn scroll(&self, _delta: i32, _orientation: String) {}

    #[zbus(signal)]
    async fn new_icon(emitter: &SignalEmitter<'_>) -> zbus::Result<()>;

    #[zbus(signal)]
    async fn new_tool_tip(emitter: &SignalEmitter<'_>) -> zbus::Result<()>;

    #[zbus(signal)]
    async fn new_status(emitter: &SignalEmitter<'_>, status: &str) -> zbus::Result<()>;
}

fn status_name(visible: bool) -> &'static str {
    if visible { "Active" } else { "Passive" }
}

fn pixmap(bitmap: &Bitmap) -> Pixmap {
    (bitmap.width() as i32, bitmap.height() as i32, bitmap.to_argb32_be())
}

fn tray_error(e: zbus::Error) -> HwmonError {
    HwmonError::Tray(e.to_string())
}

/// [`IconSink`] that publishes frames as StatusNotifierItems.
///
/// `update` only queues; [`SniTray::flush`] pushes the queue over D-Bus.
pub struct SniTray {
    icons:   Vec<Connection>,
    pending: Vec<IconFrame>,
}

impl SniTray {
    /// Create and register one item per layout slot, in slot order.
    pub async fn register(layout: &MetricLayout, events: UnboundedSender<TrayEvent>) -> Result<Self> {
        let mut icons = Vec::with_capacity(layout.len());
        for slot in layout.slots() {
            let name = format!("org.kde.StatusNotifierItem-{}-{}", std::process::id(), slot.index);
            let title = &slot.title;
            let item = StatusNotifierItem {
                slot:    slot.index,
                title:   title.clone(),
                pixmap:  None,
                tooltip: String::new(),
                visible: true,
                events:  events.clone(),
            };

            let conn = zbus::connection::Builder::session()
                .map_err(tray_error)?
                .name(name.as_str())
                .map_err(tray_error)?
                .serve_at(ITEM_PATH, item)
                .map_err(tray_error)?
                .build()
                .await
                .map_err(tray_error)?;

            conn.call_method(
                Some(WATCHER_NAME),
                WATCHER_PATH,
                Some(WATCHER_NAME),
                "RegisterStatusNotifierItem",
                &(name.as_str(),),
            )
            .await
            .map_err(|e| {
                HwmonError::Tray(format!("no status notifier host is running ({e})"))
            })?;

            info!("Registered tray icon '{title}' as {name}");
            icons.push(conn);
        }
        Ok(Self { icons, pending: Vec::new() })
    }

    /// Publish every queued frame.  A failing icon is logged and skipped.
    pub async fn flush(&mut self) {
        for frame in std::mem::take(&mut self.pending) {
            let Some(conn) = self.icons.get(frame.slot) else {
                warn!(slot = frame.slot, "frame for unknown tray icon");
                continue;
            };
            if let Err(e) = publish(conn, frame).await {
                warn!("Tray update failed: {e}");
            }
        }
    }
}

impl IconSink for SniTray {
    fn update(&mut self, frame: IconFrame) {
        self.pending.push(frame);
    }
}

async fn publish(conn: &Connection, frame: IconFrame) -> zbus::Result<()> {
    let iface = conn
        .object_server()
        .interface::<_, StatusNotifierItem>(ITEM_PATH)
        .await?;

    let (tooltip_changed, status_changed) = {
        let mut item = iface.get_mut().await;
        item.pixmap = Some(pixmap(&frame.bitmap));

        let tooltip_changed = match frame.tooltip {
            Some(text) if text != item.tooltip => {
                item.tooltip = text;
                true
            }
            _ => false,
        };
        let status_changed = item.visible != frame.visible;
        item.visible = frame.visible;
        (tooltip_changed, status_changed)
    };

    let emitter = iface.signal_emitter();
    StatusNotifierItem::new_icon(emitter).await?;
    if tooltip_changed {
        StatusNotifierItem::new_tool_tip(emitter).await?;
    }
    if status_changed {
        StatusNotifierItem::new_status(emitter, status_name(frame.visible)).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixmap_is_argb_network_order() {
        let bmp = Bitmap::filled(2, 2, [0x10, 0x20, 0x30, 0x40]);
        let (w, h, data) = pixmap(&bmp);
        assert_eq!((w, h), (2, 2));
        assert_eq!(&data[..4], &[0x40, 0x10, 0x20, 0x30]);
        assert_eq!(data.len(), 16);
    }

    #[test]
    fn hidden_icons_are_passive() {
        assert_eq!(status_name(true), "Active");
        assert_eq!(status_name(false), "Passive");
    }

    fn frame(slot: usize) -> IconFrame {
        IconFrame {
            slot,
            title:   format!("hwmon {slot}"),
            bitmap:  Bitmap::filled(2, 2, [0, 0, 0, 0]),
            tooltip: Some("x".into()),
            visible: true,
        }
    }

    #[tokio::test]
    async fn unknown_slots_are_skipped_without_stopping_the_flush() {
        let mut tray = SniTray { icons: Vec::new(), pending: Vec::new() };
        tray.update(frame(5));
        tray.update(frame(0));
        tray.update(frame(7));

        tray.flush().await;
        assert!(tray.pending.is_empty());

        // The queue is usable again after a failed flush.
        tray.update(frame(1));
        assert_eq!(tray.pending.len(), 1);
    }
}
