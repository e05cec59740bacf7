//! Shared types for the RomM handheld client.
//!
//! - [`catalog`] - Platform, firmware and ROM records plus their owning container
//! - [`constants`] - API paths and protocol literals
//! - [`ids`] - Path-safety checks for server-provided names

pub mod catalog;
pub mod constants;
pub mod ids;

pub use catalog::{Catalog, Firmware, Platform, Rom};
pub use constants::*;
pub use ids::is_safe_path_component;
