//! Catalog list menu
//!
//! - [`Navigator`] - selection/scroll state machine over an owned item list
//! - [`FramePacer`] - fixed-rate repaint gate
//! - [`MenuDriver`] - per-frame loop step tying input, data arrival and painting together

mod driver;
mod frame;
mod state;


pub use driver::{InputSource, ListSurface, MenuDriver, MenuItem, MenuOutcome, fit_label};
pub use frame::{DEFAULT_FRAME_RATE, FramePacer};
pub use state::{MenuPhase, NavEvent, Navigator};
