//! Centralized constants for the RomM catalog API.
//!
//! Single source of truth for endpoint paths and protocol literals used by
//! the fetch client and the launcher.

/// Path of the platform listing endpoint, appended to the server base URL.
pub const PLATFORMS_PATH: &str = "/api/platforms";

/// Path of the ROM listing endpoint, appended to the server base URL.
///
/// Filtered per platform with a `platform_id` query parameter.
pub const ROMS_PATH: &str = "/api/roms";

/// Scheme prefix for Basic Authorization header values.
///
/// ```ignore
/// let header = format!("{}{}", BASIC_PREFIX, encoded_credentials);
/// ```
pub const BASIC_PREFIX: &str = "Basic ";

/// Directory ROMs are placed under on the device when no other root is
/// configured.
pub const DEFAULT_ROM_ROOT: &str = "/Roms";
