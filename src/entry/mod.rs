//! Entry table model
//!
//! An [`Entry`] is one record of the container's entry table. It names a
//! resource and points at up to two payload [`Segment`]s, one in each data
//! block. [`EntryRecord`] is the raw on-disk form.

mod record;

pub use record::EntryRecord;

use crate::classify::{self, ContentKind, SignatureTable};
use crate::decompress::PayloadStatus;
use crate::names;
use crate::nested;
use crate::types::{ResourceId, SegmentNumber};
use bytes::Bytes;
use smallvec::SmallVec;

/// Where a segment lives and how big it is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SegmentLayout {
    /// Size after stripping the flag bits from the raw size field
    pub decompressed_size: i32,
    pub compressed_size: i32,
    /// Offset relative to the owning block's start
    pub position: i32,
}

impl SegmentLayout {
    /// Whether the decoder reads bytes for this segment at all
    pub fn is_present(&self) -> bool {
        self.decompressed_size > 0 && self.position >= 0 && self.compressed_size > 0
    }

    /// Block-relative `[start, end)` byte range, if present
    pub fn span(&self) -> Option<(u64, u64)> {
        if !self.is_present() {
            return None;
        }
        let start = self.position as u64;
        Some((start, start + self.compressed_size as u64))
    }
}

/// One decoded payload of an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub number: SegmentNumber,
    pub layout: SegmentLayout,
    pub data: Bytes,
    pub status: PayloadStatus,
}

impl Segment {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn classify(&self) -> ContentKind {
        classify::classify(&self.data)
    }

    pub fn classify_with(&self, table: &SignatureTable) -> ContentKind {
        table.classify(&self.data)
    }

    /// Whether the payload looks like a nested DAT container
    pub fn is_nested(&self) -> bool {
        nested::is_nested_container(&self.data)
    }
}

/// A named, classified segment ready for display or extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainedFile {
    pub name: String,
    pub number: SegmentNumber,
    pub kind: ContentKind,
    pub data: Bytes,
}

/// One record of the entry table with its decoded payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Position in the entry table
    pub index: usize,
    pub name: ResourceId,
    pub type_id: ResourceId,
    pub block_count: u8,
    pub count: u8,
    pub layouts: [SegmentLayout; 2],
    pub segments: [Option<Segment>; 2],
}

impl Entry {
    pub fn segment(&self, number: SegmentNumber) -> Option<&Segment> {
        self.segments[number.index()].as_ref()
    }

    pub fn segment1(&self) -> Option<&Segment> {
        self.segment(SegmentNumber::First)
    }

    pub fn segment2(&self) -> Option<&Segment> {
        self.segment(SegmentNumber::Second)
    }

    pub fn layout(&self, number: SegmentNumber) -> &SegmentLayout {
        &self.layouts[number.index()]
    }

    /// Friendly resource type, e.g. `Texture`, or `Unknown (0x..)`
    pub fn type_name(&self) -> String {
        names::describe_resource_type(self.type_id.as_u32_le())
    }

    /// Entry name with the block-count/count suffixes applied.
    pub fn base_name(&self) -> String {
        let mut name = self.name.to_string();
        if self.block_count != 0 {
            name.push_str(&format!("_{}", self.block_count));
            if self.count != 0 {
                name.push_str(&format!("_{}", self.count));
            }
        } else if self.count != 0 {
            name.push_str(&format!("_0_{}", self.count));
        }
        name
    }

    /// `<name>[_<blockCount>][_<count>]_<segment><extension>`
    pub fn display_name(&self, number: SegmentNumber, kind: ContentKind) -> String {
        format!("{}_{}{}", self.base_name(), number, kind.extension())
    }

    /// Non-empty segments, named and classified against the global table.
    pub fn contained_files(&self) -> SmallVec<[ContainedFile; 2]> {
        let table = SignatureTable::global().read();
        self.contained_files_with(&table)
    }

    pub fn contained_files_with(&self, table: &SignatureTable) -> SmallVec<[ContainedFile; 2]> {
        self.segments
            .iter()
            .flatten()
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                let kind = segment.classify_with(table);
                ContainedFile {
                    name: self.display_name(segment.number, kind),
                    number: segment.number,
                    kind,
                    data: segment.data.clone(),
                }
            })
            .collect()
    }
}
