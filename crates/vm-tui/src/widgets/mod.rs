//! Custom widgets for the viewer

mod map;
mod status;

pub use map::{MapWidget, viewport_origin};
pub use status::StatusWidget;
