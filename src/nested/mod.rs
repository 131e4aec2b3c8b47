//! Heuristic carving of nested "DAT" blobs
//!
//! Some payloads start with the ASCII marker `DAT` and are suspected to hold
//! further records. No trustworthy length field is known at this layer, so
//! the scan is deliberately coarse: a marker found at offset `n` carves a
//! record running from `n` to the end of the buffer, and scanning stops
//! there. A marker-prefixed buffer therefore always yields exactly one record
//! covering all of it.
//!
//! Going deeper, [`children`] rescans a carved record starting one byte
//! past its own marker, so each level is strictly shorter than its parent
//! and every walk terminates.
//!
//! ```
//! use bndl_rs::nested::{scan, children};
//! use bytes::Bytes;
//!
//! let data = Bytes::from_static(b"DAT header DAT inner");
//! let top = scan(&data);
//! assert_eq!(top.len(), 1);
//! assert_eq!(top[0].len(), data.len());
//!
//! let inner = children(&top[0]);
//! assert_eq!(inner.len(), 1);
//! assert_eq!(&inner[0].data[..], b"DAT inner");
//! ```

mod walk;

pub use walk::NestedWalk;

use bytes::Bytes;

/// Leading bytes of a nested container
pub const MARKER: &[u8; 3] = b"DAT";

/// A pseudo sub-record carved out of a payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarvedRecord {
    /// Offset from the start of the payload that was first scanned
    pub offset: usize,
    /// 0 for records carved from the payload itself
    pub depth: usize,
    pub data: Bytes,
}

impl CarvedRecord {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn label(&self) -> String {
        format!("DAT@0x{:X}", self.offset)
    }

    pub fn is_nested(&self) -> bool {
        is_nested_container(&self.data)
    }
}

pub fn is_nested_container(data: &[u8]) -> bool {
    data.starts_with(MARKER)
}

/// Carve the top-level records of `data`. Empty unless `data` starts with
/// the marker.
pub fn scan(data: &Bytes) -> Vec<CarvedRecord> {
    if !is_nested_container(data) {
        return Vec::new();
    }
    carve(data, 0, 0, 0)
}

/// Carve the records nested inside `record`, skipping its own marker.
pub fn children(record: &CarvedRecord) -> Vec<CarvedRecord> {
    if !record.is_nested() {
        return Vec::new();
    }
    carve(&record.data, 1, record.offset, record.depth + 1)
}

/// Every record reachable from `data`, depth-first.
pub fn walk(data: &Bytes) -> NestedWalk {
    NestedWalk::new(data)
}

fn carve(data: &Bytes, from: usize, base: usize, depth: usize) -> Vec<CarvedRecord> {
    let mut records = Vec::new();
    let mut index = from;

    while index + MARKER.len() <= data.len() {
        if data[index..].starts_with(MARKER) {
            let length = data.len() - index;
            log::trace!(
                "carved nested record at {:#x} (+{:#x}), {} bytes, depth {}",
                base + index,
                index,
                length,
                depth
            );
            records.push(CarvedRecord {
                offset: base + index,
                depth,
                data: data.slice(index..),
            });
            index += length;
        } else {
            index += 1;
        }
    }

    records
}
