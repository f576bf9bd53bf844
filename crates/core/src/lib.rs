pub mod bitmap;
pub mod error;
pub mod event;
pub mod metric;
pub mod sink;

pub use bitmap::Bitmap;
pub use error::{HwmonError, Result};
pub use event::{TrayCommand, TrayEvent};
pub use metric::{CpuMode, MetricKind};
pub use sink::{IconFrame, IconSink};
