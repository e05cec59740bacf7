//! Window-side collaborators of the menu driver

mod input;
mod surface;

pub use input::{collect_events, map_key};
pub use surface::{EguiSurface, ROW_X, ROW_Y};
