use crate::bitmap::Bitmap;

/// Everything a tray host needs to repaint one icon.
#[derive(Debug, Clone, PartialEq)]
pub struct IconFrame {
    /// Position of the icon in display order.
    pub slot: usize,
    /// Stable title, e.g. `"hwmon 2 memory"`.
    pub title: String,
    pub bitmap: Bitmap,
    /// `None` leaves the previous tooltip in place.
    pub tooltip: Option<String>,
    pub visible: bool,
}

/// Receiver of rendered icons, implemented by the tray host.
///
/// Implementations must not block: `update` is called from inside the tick.
/// Failures are the sink's own business and are never reported back.
pub trait IconSink {
    fn update(&mut self, frame: IconFrame);
}

/// Collects frames in order; handy for batching and in tests.
impl IconSink for Vec<IconFrame> {
    fn update(&mut self, frame: IconFrame) {
        self.push(frame);
    }
}
