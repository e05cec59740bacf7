//! On-device locations for catalog entries.

use std::path::{Path, PathBuf};

use romm_shared::{Platform, Rom, is_safe_path_component};

/// Directory holding ROMs of the platform with `platform_slug`.
///
/// Returns a freshly owned path on every call. `None` if the slug cannot be
/// used as a single path component.
pub fn console_path(rom_root: &Path, platform_slug: &str) -> Option<PathBuf> {
    if !is_safe_path_component(platform_slug) {
        tracing::warn!("Refusing unsafe platform slug {:?}", platform_slug);
        return None;
    }
    Some(rom_root.join(platform_slug))
}

/// Where `rom` would be stored on the device.
pub fn rom_destination(rom_root: &Path, platform: &Platform, rom: &Rom) -> Option<PathBuf> {
    let slug = if platform.fs_slug.is_empty() {
        &platform.slug
    } else {
        &platform.fs_slug
    };
    let dir = console_path(rom_root, slug)?;
    if !is_safe_path_component(&rom.file_name) {
        tracing::warn!("Refusing unsafe ROM file name {:?}", rom.file_name);
        return None;
    }
    Some(dir.join(&rom.file_name))
}
