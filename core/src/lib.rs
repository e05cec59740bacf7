//! RomM Core - Catalog client and menu engine
//!
//! This crate talks to a RomM server and drives the on-device list menus
//! independently of any particular windowing backend.
//!
//! # Architecture
//!
//! - [`net`] - Response accumulation, Basic-Auth and the catalog client
//! - [`catalog`] - Lenient JSON decoding of platforms, firmware and ROMs
//! - [`menu`] - Navigation state machine and the paced render loop
//! - [`config`] - Persistent settings (server, network, display, storage)

pub mod catalog;
pub mod config;
pub mod error;
#[cfg(test)]
mod integration;
pub mod menu;
pub mod net;

pub use catalog::{console_path, decode_platforms, decode_roms, rom_destination};
pub use config::Config;
pub use error::CatalogError;
pub use menu::{
    FramePacer, InputSource, ListSurface, MenuDriver, MenuItem, MenuOutcome, MenuPhase, NavEvent,
    Navigator,
};
pub use net::{
    CatalogClient, PendingFetch, ResponseBuffer, basic_authorization, fetch_platforms,
    fetch_platforms_blocking,
};

// Re-export the shared model so binaries only need one import path
pub use romm_shared::{Catalog, Firmware, Platform, Rom};
