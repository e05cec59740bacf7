//! JSON catalog documents to domain records.

use serde_json::Value;

use romm_shared::{Firmware, Platform, Rom};

use super::fields::{self, Record};
use crate::error::CatalogError;

/// Keys under which an object-shaped platform document carries its array.
const PLATFORM_ARRAY_KEYS: &[&str] = &["platforms"];

/// Keys under which an object-shaped ROM document carries its array.
/// `items` is the paginated listing shape.
const ROM_ARRAY_KEYS: &[&str] = &["items", "roms"];

/// Decodes a platform listing.
///
/// The canonical document is a bare top-level array; an object with a
/// `"platforms"` array is also accepted. Anything else is a
/// [`CatalogError::MalformedDocument`]. Individual records never fail: missing
/// fields take their defaults.
pub fn decode_platforms(json: &[u8]) -> Result<Vec<Platform>, CatalogError> {
    let document = parse(json)?;
    let records = record_array(&document, PLATFORM_ARRAY_KEYS)?;
    Ok(records.iter().map(decode_platform).collect())
}

/// Decodes a ROM listing.
///
/// Accepts a bare top-level array, or an object with an `"items"` or
/// `"roms"` array.
pub fn decode_roms(json: &[u8]) -> Result<Vec<Rom>, CatalogError> {
    let document = parse(json)?;
    let records = record_array(&document, ROM_ARRAY_KEYS)?;
    Ok(records.iter().map(decode_rom).collect())
}

fn parse(json: &[u8]) -> Result<Value, CatalogError> {
    serde_json::from_slice(json).map_err(|e| CatalogError::MalformedDocument(e.to_string()))
}

fn record_array<'a>(document: &'a Value, keys: &[&str]) -> Result<&'a [Value], CatalogError> {
    match document {
        Value::Array(records) => Ok(records),
        Value::Object(map) => keys
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_array))
            .map(Vec::as_slice)
            .ok_or_else(|| {
                CatalogError::MalformedDocument(format!(
                    "expected a top-level array or an object with one of {:?}",
                    keys
                ))
            }),
        other => Err(CatalogError::MalformedDocument(format!(
            "expected a top-level array, found {}",
            json_kind(other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Non-object array elements decode as an all-default record.
fn as_record(value: &Value) -> Option<&Record> {
    let record = value.as_object();
    if record.is_none() {
        tracing::debug!("Catalog element is {}, using defaults", json_kind(value));
    }
    record
}

fn decode_platform(value: &Value) -> Platform {
    let Some(r) = as_record(value) else {
        return Platform::default();
    };

    Platform {
        id: fields::int(r, "id"),
        slug: fields::string(r, "slug"),
        fs_slug: fields::string(r, "fs_slug"),
        name: fields::string(r, "name"),
        rom_count: fields::int(r, "rom_count"),
        logo_path: fields::string(r, "logo_path"),
        firmware: fields::array(r, "firmware")
            .iter()
            .map(decode_firmware)
            .collect(),
        created_at: fields::string(r, "created_at"),
        updated_at: fields::string(r, "updated_at"),
        igdb_id: fields::opt_uint(r, "igdb_id"),
        sgdb_id: fields::opt_uint(r, "sgdb_id"),
        moby_id: fields::opt_uint(r, "moby_id"),
    }
}

fn decode_firmware(value: &Value) -> Firmware {
    let Some(r) = as_record(value) else {
        return Firmware::default();
    };

    Firmware {
        id: fields::int(r, "id"),
        file_name: fields::string(r, "file_name"),
        file_name_no_tags: fields::string(r, "file_name_no_tags"),
        file_name_no_ext: fields::string(r, "file_name_no_ext"),
        file_extension: fields::string(r, "file_extension"),
        file_path: fields::string(r, "file_path"),
        file_size_bytes: fields::int(r, "file_size_bytes"),
        full_path: fields::string(r, "full_path"),
        is_verified: fields::boolean(r, "is_verified"),
        crc_hash: fields::opt_string(r, "crc_hash"),
        md5_hash: fields::opt_string(r, "md5_hash"),
        sha1_hash: fields::opt_string(r, "sha1_hash"),
        created_at: fields::string(r, "created_at"),
        updated_at: fields::string(r, "updated_at"),
    }
}

fn decode_rom(value: &Value) -> Rom {
    let Some(r) = as_record(value) else {
        return Rom::default();
    };

    Rom {
        id: fields::int(r, "id"),
        platform_id: fields::int(r, "platform_id"),
        platform_slug: fields::string(r, "platform_slug"),
        platform_name: fields::string(r, "platform_name"),
        file_name: fields::string(r, "file_name"),
        file_name_no_tags: fields::string(r, "file_name_no_tags"),
        file_name_no_ext: fields::string(r, "file_name_no_ext"),
        file_extension: fields::string(r, "file_extension"),
        file_path: fields::string(r, "file_path"),
        file_size_bytes: fields::uint(r, "file_size_bytes"),
        name: fields::string(r, "name"),
        slug: fields::string(r, "slug"),
        summary: fields::string(r, "summary"),
        path_cover_s: fields::string(r, "path_cover_s"),
        path_cover_l: fields::string(r, "path_cover_l"),
        has_cover: fields::boolean(r, "has_cover"),
        url_cover: fields::string(r, "url_cover"),
        revision: fields::string(r, "revision"),
        multi: fields::boolean(r, "multi"),
        files: fields::array(r, "files").to_vec(),
        full_path: fields::string(r, "full_path"),
        created_at: fields::string(r, "created_at"),
        updated_at: fields::string(r, "updated_at"),
        first_release_date: fields::opt_int(r, "first_release_date"),
        igdb_id: fields::opt_uint(r, "igdb_id"),
        sgdb_id: fields::opt_uint(r, "sgdb_id"),
        moby_id: fields::opt_uint(r, "moby_id"),
    }
}
