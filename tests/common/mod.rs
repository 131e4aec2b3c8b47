// tests/common/mod.rs
#![allow(dead_code)]

use std::fs;
use std::path::Path;

pub const HEADER_LEN: usize = 0x28;
pub const STRIDE: usize = 0x48;

/// Header fields in on-disk order, starting at 0x0C
#[derive(Debug, Clone, Copy)]
pub struct HeaderFields {
    pub entry_count: i32,
    pub ids_table_start: i32,
    pub block1_start: i32,
    pub block2_start: i32,
    pub block3_start: i32,
    pub total_size: i32,
    pub compression_flag: i32,
}

pub fn header(magic: &[u8; 4], version: [u8; 2], fields: HeaderFields) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_LEN);
    buf.extend_from_slice(magic);
    buf.extend_from_slice(&[0, 0]);
    buf.extend_from_slice(&version);
    buf.extend_from_slice(&[0; 4]);
    for field in [
        fields.entry_count,
        fields.ids_table_start,
        fields.block1_start,
        fields.block2_start,
        fields.block3_start,
        fields.total_size,
        fields.compression_flag,
    ] {
        buf.extend_from_slice(&field.to_le_bytes());
    }
    buf
}

/// Raw fields of one entry record
#[derive(Debug, Clone, Default)]
pub struct Record {
    pub name: [u8; 4],
    pub type_id: [u8; 4],
    pub block_count: u8,
    pub count: u8,
    pub raw_sizes: [i32; 2],
    pub compressed_sizes: [i32; 2],
    pub positions: [i32; 2],
}

impl Record {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut raw = vec![0u8; STRIDE];
        raw[0x00..0x04].copy_from_slice(&self.name);
        raw[0x04] = self.block_count;
        raw[0x06] = self.count;
        for slot in 0..2 {
            raw[0x08 + slot * 4..0x0C + slot * 4].copy_from_slice(&self.raw_sizes[slot].to_le_bytes());
            raw[0x18 + slot * 4..0x1C + slot * 4].copy_from_slice(&self.compressed_sizes[slot].to_le_bytes());
            raw[0x28 + slot * 4..0x2C + slot * 4].copy_from_slice(&self.positions[slot].to_le_bytes());
        }
        raw[0x3C..0x40].copy_from_slice(&self.type_id);
        raw
    }
}

/// Container builder: records go right after the header, block 1 after
/// the table, block 2 after block 1, then an optional trailer.
pub struct ContainerBuilder {
    pub flag: i32,
    pub records: Vec<Record>,
    pub block1: Vec<u8>,
    pub block2: Vec<u8>,
    pub trailer: Vec<u8>,
}

impl ContainerBuilder {
    pub fn new(flag: i32) -> Self {
        ContainerBuilder {
            flag,
            records: Vec::new(),
            block1: Vec::new(),
            block2: Vec::new(),
            trailer: Vec::new(),
        }
    }

    /// Append a record whose segments are stored as given (already
    /// compressed if the flag calls for it). `decompressed` are the sizes
    /// written to the raw size fields.
    pub fn entry(
        mut self,
        name: [u8; 4],
        segment1: Option<(&[u8], i32)>,
        segment2: Option<(&[u8], i32)>,
    ) -> Self {
        let mut record = Record {
            name,
            type_id: [0x01, 0, 0, 0],
            ..Record::default()
        };
        if let Some((bytes, raw_size)) = segment1 {
            record.raw_sizes[0] = raw_size;
            record.compressed_sizes[0] = bytes.len() as i32;
            record.positions[0] = self.block1.len() as i32;
            self.block1.extend_from_slice(bytes);
        }
        if let Some((bytes, raw_size)) = segment2 {
            record.raw_sizes[1] = raw_size;
            record.compressed_sizes[1] = bytes.len() as i32;
            record.positions[1] = self.block2.len() as i32;
            self.block2.extend_from_slice(bytes);
        }
        self.records.push(record);
        self
    }

    pub fn record(mut self, record: Record) -> Self {
        self.records.push(record);
        self
    }

    pub fn trailer(mut self, bytes: &[u8]) -> Self {
        self.trailer = bytes.to_vec();
        self
    }

    pub fn fields(&self) -> HeaderFields {
        let ids_table_start = HEADER_LEN as i32;
        let block1_start = ids_table_start + (self.records.len() * STRIDE) as i32;
        let block2_start = block1_start + self.block1.len() as i32;
        let block3_start = block2_start + self.block2.len() as i32;
        HeaderFields {
            entry_count: self.records.len() as i32,
            ids_table_start,
            block1_start,
            block2_start,
            block3_start,
            total_size: block3_start,
            compression_flag: self.flag,
        }
    }

    pub fn build(&self) -> Vec<u8> {
        self.build_with(self.fields())
    }

    pub fn build_with(&self, fields: HeaderFields) -> Vec<u8> {
        let mut buf = header(b"bnd2", [1, 0], fields);
        for record in &self.records {
            buf.extend_from_slice(&record.to_bytes());
        }
        buf.extend_from_slice(&self.block1);
        buf.extend_from_slice(&self.block2);
        buf.extend_from_slice(&self.trailer);
        buf
    }

    pub fn write_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, self.build()).unwrap();
    }
}

pub fn deflate(data: &[u8]) -> Vec<u8> {
    use flate2::write::DeflateEncoder;
    use flate2::Compression;
    use std::io::Write;

    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// `[2 bytes] + deflate(data) + [4 bytes]`
pub fn enveloped(data: &[u8]) -> Vec<u8> {
    let mut out = vec![0x78, 0x9C];
    out.extend_from_slice(&deflate(data));
    out.extend_from_slice(&[0x11, 0x22, 0x33, 0x44]);
    out
}
