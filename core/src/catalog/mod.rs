//! Catalog decoding
//!
//! Pure transforms from accumulated response bodies to domain records, plus
//! on-device path resolution for decoded entries. No network or file I/O.

mod decode;
mod fields;
mod paths;


pub use decode::{decode_platforms, decode_roms};
pub use paths::{console_path, rom_destination};
