// src/header/header.rs
use crate::error::{BndlError, Result};
use crate::types::CompressionFlag;
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Read, Seek, SeekFrom};

/// Fixed header at the start of every bnd2 container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    pub entry_count: i32,
    pub ids_table_start: i32,
    pub block1_start: i32,
    pub block2_start: i32,
    pub block3_start: i32,
    pub total_size: i32,
    pub compression_flag: i32,
}

impl ContainerHeader {
    pub const MAGIC: &'static [u8; 4] = b"bnd2";
    pub const VERSION: (u8, u8) = (1, 0);
    pub const FIELDS_OFFSET: u64 = 0x0C;
    pub const SIZE: usize = 0x28;

    /// Parse the header, leaving the stream positioned just past it.
    pub fn read<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if &magic != Self::MAGIC {
            return Err(BndlError::InvalidMagic {
                found: String::from_utf8_lossy(&magic).to_string(),
            });
        }

        let mut reserved = [0u8; 2];
        reader.read_exact(&mut reserved)?;

        let major = reader.read_u8()?;
        let minor = reader.read_u8()?;
        if (major, minor) != Self::VERSION {
            return Err(BndlError::UnsupportedVersion { major, minor });
        }

        reader.seek(SeekFrom::Start(Self::FIELDS_OFFSET))?;
        let header = ContainerHeader {
            entry_count: reader.read_i32::<LittleEndian>()?,
            ids_table_start: reader.read_i32::<LittleEndian>()?,
            block1_start: reader.read_i32::<LittleEndian>()?,
            block2_start: reader.read_i32::<LittleEndian>()?,
            block3_start: reader.read_i32::<LittleEndian>()?,
            total_size: reader.read_i32::<LittleEndian>()?,
            compression_flag: reader.read_i32::<LittleEndian>()?,
        };

        log::debug!(
            "bnd2 header: {} entries, ids table at {:#x}, blocks at {:#x}/{:#x}/{:#x}, total {:#x}, compression flag {}",
            header.entry_count,
            header.ids_table_start,
            header.block1_start,
            header.block2_start,
            header.block3_start,
            header.total_size,
            header.compression_flag,
        );

        Ok(header)
    }

    pub fn compression(&self) -> Result<CompressionFlag> {
        CompressionFlag::try_from(self.compression_flag)
    }

    pub fn entry_count(&self) -> Result<usize> {
        non_negative("entry_count", self.entry_count).map(|v| v as usize)
    }

    pub fn ids_table_offset(&self) -> Result<u64> {
        non_negative("ids_table_start", self.ids_table_start)
    }

    pub fn block1_offset(&self) -> Result<u64> {
        non_negative("block1_start", self.block1_start)
    }

    pub fn block2_offset(&self) -> Result<u64> {
        non_negative("block2_start", self.block2_start)
    }

    /// Ordering violations among the section offsets, empty when well formed.
    pub fn check_layout(&self) -> Vec<String> {
        let chain = [
            ("ids_table_start", self.ids_table_start),
            ("block1_start", self.block1_start),
            ("block2_start", self.block2_start),
            ("block3_start", self.block3_start),
            ("total_size", self.total_size),
        ];

        chain
            .windows(2)
            .filter(|pair| pair[0].1 > pair[1].1)
            .map(|pair| {
                format!(
                    "{} ({:#x}) exceeds {} ({:#x})",
                    pair[0].0, pair[0].1, pair[1].0, pair[1].1
                )
            })
            .collect()
    }
}

fn non_negative(field: &'static str, value: i32) -> Result<u64> {
    u64::try_from(value).map_err(|_| BndlError::InvalidHeader {
        field,
        value: value as i64,
    })
}
