// src/entry/record.rs
use crate::error::Result;
use crate::types::{adjust_size, ResourceId, SegmentNumber};
use super::SegmentLayout;
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Read, Seek, SeekFrom};

/// One fixed-stride record of the entry table, as stored on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRecord {
    pub name: ResourceId,
    pub block_count: u8,
    pub count: u8,
    pub raw_sizes: [i32; 2],
    pub compressed_sizes: [i32; 2],
    pub positions: [i32; 2],
    pub type_id: ResourceId,
}

impl EntryRecord {
    /// Distance between consecutive records
    pub const STRIDE: u64 = 0x48;
    /// Bytes actually consumed from each record
    pub const READ_LEN: u64 = 0x42;

    /// Absolute offset of record `index`
    pub fn offset(ids_table_start: u64, index: usize) -> u64 {
        ids_table_start + index as u64 * Self::STRIDE
    }

    /// Seek to record `index` and read it.
    pub fn read_at<R: Read + Seek>(reader: &mut R, ids_table_start: u64, index: usize) -> Result<Self> {
        reader.seek(SeekFrom::Start(Self::offset(ids_table_start, index)))?;
        Self::read(reader)
    }

    /// Read a record from the current position.
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let name = read_id(reader)?;
        let block_count = reader.read_u8()?;
        let _ = reader.read_u8()?;
        let count = reader.read_u8()?;
        let _ = reader.read_u8()?;

        let raw_sizes = [
            reader.read_i32::<LittleEndian>()?,
            reader.read_i32::<LittleEndian>()?,
        ];
        skip(reader, 8)?;

        let compressed_sizes = [
            reader.read_i32::<LittleEndian>()?,
            reader.read_i32::<LittleEndian>()?,
        ];
        skip(reader, 8)?;

        let positions = [
            reader.read_i32::<LittleEndian>()?,
            reader.read_i32::<LittleEndian>()?,
        ];
        skip(reader, 8)?;

        // called block
        skip(reader, 4)?;
        let type_id = read_id(reader)?;
        // internal id count
        skip(reader, 2)?;

        Ok(EntryRecord {
            name,
            block_count,
            count,
            raw_sizes,
            compressed_sizes,
            positions,
            type_id,
        })
    }

    pub fn layout(&self, number: SegmentNumber) -> SegmentLayout {
        let i = number.index();
        SegmentLayout {
            decompressed_size: adjust_size(self.raw_sizes[i]),
            compressed_size: self.compressed_sizes[i],
            position: self.positions[i],
        }
    }
}

fn read_id<R: Read>(reader: &mut R) -> Result<ResourceId> {
    let mut bytes = [0u8; 4];
    reader.read_exact(&mut bytes)?;
    Ok(ResourceId::new(bytes))
}

fn skip<R: Read>(reader: &mut R, count: usize) -> Result<()> {
    let mut scratch = [0u8; 8];
    reader.read_exact(&mut scratch[..count])?;
    Ok(())
}
