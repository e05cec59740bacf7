//! RomM Handheld Launcher
//!
//! The on-device catalog browser: an eframe window that lists the server's
//! platforms, then the ROMs of the chosen one, and reports where the chosen
//! ROM belongs on the device.
//!
//! All catalog and navigation logic lives in `romm-core`; this crate only
//! supplies the window, keyboard input and text rendering.

pub mod app;
pub mod ui;
