//! Growable accumulator for streamed HTTP response bodies.
//!
//! The transport hands over the body in arbitrarily sized chunks. Each chunk
//! is copied to the end of the buffer; capacity starts at
//! [`INITIAL_CAPACITY`] and doubles until the content plus one reserved
//! terminator byte fits.

use thiserror::Error;

/// Capacity of a fresh buffer in bytes.
pub const INITIAL_CAPACITY: usize = 4096;

/// Growing the buffer failed.
///
/// Fatal to the fetch that owns the buffer, not to the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("out of memory growing response buffer to {requested} bytes")]
pub struct OutOfMemory {
    /// Capacity the buffer tried to reach.
    pub requested: usize,
}

/// Response body accumulator.
///
/// Invariants after every call:
/// - `size() < capacity()` (one byte stays reserved for a terminator)
/// - `capacity()` is `INITIAL_CAPACITY` times a power of two
/// - `content()` is exactly the concatenation of every appended chunk
#[derive(Debug, Clone)]
pub struct ResponseBuffer {
    data: Vec<u8>,
    capacity: usize,
}

impl ResponseBuffer {
    /// Creates an empty buffer with [`INITIAL_CAPACITY`] bytes reserved.
    pub fn new() -> Result<Self, OutOfMemory> {
        let mut data = Vec::new();
        data.try_reserve_exact(INITIAL_CAPACITY)
            .map_err(|_| OutOfMemory {
                requested: INITIAL_CAPACITY,
            })?;
        Ok(Self {
            data,
            capacity: INITIAL_CAPACITY,
        })
    }

    /// Appends a chunk to the end of the content.
    ///
    /// On failure the buffer is left exactly as it was before the call.
    pub fn append(&mut self, bytes: &[u8]) -> Result<(), OutOfMemory> {
        self.ensure_capacity(bytes.len())?;
        self.data.extend_from_slice(bytes);
        Ok(())
    }

    /// Bytes appended so far. Readable at any time, including mid-stream.
    pub fn content(&self) -> &[u8] {
        &self.data
    }

    /// Number of bytes appended so far.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Logical capacity under the doubling policy.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Content as UTF-8 text, for diagnostics.
    pub fn as_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }

    fn ensure_capacity(&mut self, additional: usize) -> Result<(), OutOfMemory> {
        let needed = self
            .data
            .len()
            .checked_add(additional)
            .and_then(|n| n.checked_add(1))
            .ok_or(OutOfMemory {
                requested: usize::MAX,
            })?;

        if needed <= self.capacity {
            return Ok(());
        }

        let mut new_capacity = self.capacity;
        while new_capacity < needed {
            new_capacity = new_capacity.checked_mul(2).ok_or(OutOfMemory {
                requested: usize::MAX,
            })?;
        }

        self.data
            .try_reserve_exact(new_capacity - self.data.len())
            .map_err(|_| OutOfMemory {
                requested: new_capacity,
            })?;
        tracing::trace!(
            "Response buffer grew {} -> {} bytes",
            self.capacity,
            new_capacity
        );
        self.capacity = new_capacity;
        Ok(())
    }
}
