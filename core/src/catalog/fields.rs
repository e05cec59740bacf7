//! Lenient field extraction from JSON records.
//!
//! Each helper absorbs missing or wrong-typed values into the documented
//! default instead of failing the record.

use serde_json::{Map, Value};

pub(super) type Record = Map<String, Value>;

/// String field; missing, null or non-string becomes `""`.
pub(super) fn string(record: &Record, key: &str) -> String {
    record
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Nullable string field; missing, null or non-string becomes `None`.
pub(super) fn opt_string(record: &Record, key: &str) -> Option<String> {
    record.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Integer field; missing or non-integer becomes `0`.
pub(super) fn int(record: &Record, key: &str) -> i64 {
    opt_int(record, key).unwrap_or(0)
}

/// Unsigned integer field; missing, negative or non-integer becomes `0`.
pub(super) fn uint(record: &Record, key: &str) -> u64 {
    record.get(key).and_then(Value::as_u64).unwrap_or(0)
}

/// Nullable integer field.
///
/// `null`, a missing key, or a value that is not an integer all become
/// `None`, never `0`.
pub(super) fn opt_int(record: &Record, key: &str) -> Option<i64> {
    record.get(key).and_then(Value::as_i64)
}

/// Nullable unsigned field for external catalog ids.
///
/// Anything `as_u64` rejects (negatives, fractions, strings) becomes `None`,
/// so ids above `i64::MAX` survive.
pub(super) fn opt_uint(record: &Record, key: &str) -> Option<u64> {
    record.get(key).and_then(Value::as_u64)
}

/// Boolean field; missing or non-boolean becomes `false`.
pub(super) fn boolean(record: &Record, key: &str) -> bool {
    record.get(key).and_then(Value::as_bool).unwrap_or(false)
}

/// Array field; missing, null or non-array becomes an empty slice.
pub(super) fn array<'a>(record: &'a Record, key: &str) -> &'a [Value] {
    record
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
