//! Catalog domain model.
//!
//! Records in this module are built once by the catalog decoder and never
//! mutated afterwards. Ownership is strictly hierarchical: a [`Catalog`] owns
//! its records, a [`Platform`] owns its [`Firmware`], and a [`Rom`] owns its
//! file descriptors.

use serde_json::Value;

/// A firmware/BIOS file attached to a platform.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Firmware {
    /// Server-side firmware identifier.
    pub id: i64,
    /// File name as stored on the server.
    pub file_name: String,
    /// File name with region/revision tags stripped.
    pub file_name_no_tags: String,
    /// File name without its extension.
    pub file_name_no_ext: String,
    /// Extension without the leading dot.
    pub file_extension: String,
    /// Directory of the file relative to the server library root.
    pub file_path: String,
    /// Size of the file in bytes.
    pub file_size_bytes: i64,
    /// `file_path` joined with `file_name`.
    pub full_path: String,
    /// Whether the hashes matched a known-good dump.
    pub is_verified: bool,
    /// CRC32 of the file, if the server computed one.
    pub crc_hash: Option<String>,
    /// MD5 of the file, if the server computed one.
    pub md5_hash: Option<String>,
    /// SHA-1 of the file, if the server computed one.
    pub sha1_hash: Option<String>,
    /// ISO 8601 timestamp when the record was created.
    pub created_at: String,
    /// ISO 8601 timestamp when the record was last updated.
    pub updated_at: String,
}

/// A console/platform known to the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Platform {
    /// Server-side platform identifier.
    pub id: i64,
    /// Canonical slug (e.g., "nes").
    pub slug: String,
    /// Slug of the platform directory on the server filesystem.
    pub fs_slug: String,
    /// Display name (e.g., "Nintendo Entertainment System").
    pub name: String,
    /// Number of ROMs the server has for this platform.
    pub rom_count: i64,
    /// Path of the platform logo on the server.
    pub logo_path: String,
    /// Firmware files owned by this platform.
    pub firmware: Vec<Firmware>,
    /// ISO 8601 timestamp when the record was created.
    pub created_at: String,
    /// ISO 8601 timestamp when the record was last updated.
    pub updated_at: String,
    /// IGDB identifier. `None` when the server does not know it or sends
    /// something other than a non-negative integer.
    pub igdb_id: Option<u64>,
    /// SteamGridDB identifier. `None` when the server does not know it.
    pub sgdb_id: Option<u64>,
    /// MobyGames identifier. `None` when the server does not know it.
    pub moby_id: Option<u64>,
}

/// A ROM entry belonging to one platform.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rom {
    /// Server-side ROM identifier.
    pub id: i64,
    /// Identifier of the owning platform.
    pub platform_id: i64,
    /// Slug of the owning platform.
    pub platform_slug: String,
    /// Display name of the owning platform.
    pub platform_name: String,
    /// File name as stored on the server.
    pub file_name: String,
    /// File name with region/revision tags stripped.
    pub file_name_no_tags: String,
    /// File name without its extension.
    pub file_name_no_ext: String,
    /// Extension without the leading dot.
    pub file_extension: String,
    /// Directory of the file relative to the server library root.
    pub file_path: String,
    /// Size of the ROM in bytes.
    pub file_size_bytes: u64,
    /// Display name of the game.
    pub name: String,
    /// URL-safe game slug.
    pub slug: String,
    /// Short description of the game.
    pub summary: String,
    /// Path of the small cover image.
    pub path_cover_s: String,
    /// Path of the large cover image.
    pub path_cover_l: String,
    /// Whether any cover image exists.
    pub has_cover: bool,
    /// Remote URL the cover was fetched from.
    pub url_cover: String,
    /// Dump revision string.
    pub revision: String,
    /// Whether the ROM spans several files.
    pub multi: bool,
    /// Per-file descriptors. Their shape depends on the server version, so
    /// they are kept as raw JSON.
    pub files: Vec<Value>,
    /// `file_path` joined with `file_name`.
    pub full_path: String,
    /// ISO 8601 timestamp when the record was created.
    pub created_at: String,
    /// ISO 8601 timestamp when the record was last updated.
    pub updated_at: String,
    /// First release date as a Unix timestamp, if known.
    pub first_release_date: Option<i64>,
    /// IGDB identifier, if known.
    pub igdb_id: Option<u64>,
    /// SteamGridDB identifier, if known.
    pub sgdb_id: Option<u64>,
    /// MobyGames identifier, if known.
    pub moby_id: Option<u64>,
}

/// Exclusive owner of one fetched record sequence.
///
/// Teardown is a single operation: [`Catalog::release`] drops every record
/// (and, through ownership, every nested firmware or file descriptor) exactly
/// once. Releasing an already released catalog does nothing, so every exit
/// path may call it.
#[derive(Debug)]
pub struct Catalog<T> {
    items: Vec<T>,
    released: bool,
}

impl<T> Catalog<T> {
    /// Takes ownership of a freshly decoded sequence.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            released: false,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Drops every record. Idempotent.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        let count = self.items.len();
        drop(std::mem::take(&mut self.items));
        self.released = true;
        tracing::debug!("Released catalog of {} records", count);
    }

    /// Hands the records to a new owner.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}
