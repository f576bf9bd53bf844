//! Bar-chart rasterizer and icon layout for tray icons.
//!
//! Each icon is a `size × size` bitmap: one column per sample, newest on the
//! right, bars growing up from the bottom edge.

pub mod layout;
pub mod raster;

pub use layout::{IconSlot, MetricLayout};
pub use raster::{bar_height, render};
