// src/reader/container.rs
use crate::entry::{ContainedFile, Entry};
use crate::error::Result;
use crate::header::ContainerHeader;
use crate::reader::{DecodeOptions, Diagnostic, EntryTable};
use crate::types::{CompressionFlag, ResourceId};
use bytes::Bytes;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek, SeekFrom};
use std::path::Path;

#[cfg(feature = "mmap")]
use memmap2::Mmap;

const MAX_PREALLOCATED_ENTRIES: usize = 1024;

/// Trait alias for Read + Seek
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}

/// A fully decoded bnd2 container
///
/// Built by a single decode pass and never mutated afterwards. A decode
/// either yields every entry or fails with no entries at all.
#[derive(Debug, Clone)]
pub struct Container {
    source: String,
    header: ContainerHeader,
    compression: CompressionFlag,
    entries: Vec<Entry>,
    ids_table: Bytes,
    resource_string_table: Bytes,
    diagnostics: Vec<Diagnostic>,
}

/// Constructors for standard file I/O
impl Container {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, &DecodeOptions::default())
    }

    pub fn open_with(path: impl AsRef<Path>, options: &DecodeOptions) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mut reader = BufReader::with_capacity(options.buffer_capacity, file);
        Self::decode(&mut reader, path.display().to_string(), options)
    }

    /// Decode a container held in memory
    pub fn from_bytes(data: impl AsRef<[u8]>) -> Result<Self> {
        Self::from_bytes_with(data, &DecodeOptions::default())
    }

    pub fn from_bytes_with(data: impl AsRef<[u8]>, options: &DecodeOptions) -> Result<Self> {
        let mut cursor = Cursor::new(data.as_ref());
        Self::decode(&mut cursor, "<memory>", options)
    }
}

/// Constructor for memory-mapped file I/O (requires "mmap" feature)
#[cfg(feature = "mmap")]
impl Container {
    pub fn open_mmap(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        let mut cursor = Cursor::new(&mmap[..]);
        Self::decode(&mut cursor, path.display().to_string(), &DecodeOptions::default())
    }
}

impl Container {
    /// Run a full decode pass over `reader`.
    pub fn decode<R: ReadSeek>(
        reader: &mut R,
        source: impl Into<String>,
        options: &DecodeOptions,
    ) -> Result<Self> {
        let source = source.into();
        reader.seek(SeekFrom::Start(0))?;
        let header = ContainerHeader::read(reader)?;
        header.compression()?;

        // Leaves the stream at block 1 when the table is empty.
        let ids_table = read_ids_table(reader, &header)?;

        let mut table = EntryTable::new(reader, header, options)?;
        let compression = table.compression();

        // `entry_count` is untrusted; truncated tables fail on the record read.
        let mut entries = Vec::with_capacity(table.len().min(MAX_PREALLOCATED_ENTRIES));
        for entry in table.by_ref() {
            entries.push(entry?);
        }
        let mut diagnostics = table.take_diagnostics();
        let reader = table.into_reader();

        let resource_string_table = read_remaining(reader)?;

        log::debug!(
            "decoded {}: {} entries, {} diagnostic(s)",
            source,
            entries.len(),
            diagnostics.len()
        );
        diagnostics.shrink_to_fit();

        Ok(Container {
            source,
            header,
            compression,
            entries,
            ids_table,
            resource_string_table,
            diagnostics,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn header(&self) -> &ContainerHeader {
        &self.header
    }

    pub fn compression(&self) -> CompressionFlag {
        self.compression
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn entry(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Entries whose rendered name matches; names are not unique.
    pub fn find_by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Entry> + 'a {
        self.entries
            .iter()
            .filter(move |entry| entry.name.to_string().eq_ignore_ascii_case(name))
    }

    pub fn entries_of_type(&self, type_id: ResourceId) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter().filter(move |entry| entry.type_id == type_id)
    }

    /// Every non-empty segment of every entry, named for display
    pub fn contained_files(&self) -> Vec<ContainedFile> {
        self.entries
            .iter()
            .flat_map(|entry| entry.contained_files())
            .collect()
    }

    /// Raw bytes from the ids-table start up to block 1
    pub fn ids_table(&self) -> &Bytes {
        &self.ids_table
    }

    /// Unparsed bytes left after the last entry was decoded
    pub fn resource_string_table(&self) -> &Bytes {
        &self.resource_string_table
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn read_remaining<R: ReadSeek>(reader: &mut R) -> Result<Bytes> {
    let mut rest = Vec::new();
    reader.read_to_end(&mut rest)?;
    Ok(Bytes::from(rest))
}

fn read_ids_table<R: ReadSeek>(reader: &mut R, header: &ContainerHeader) -> Result<Bytes> {
    let Ok(start) = header.ids_table_offset() else {
        return Ok(Bytes::new());
    };
    let len = (header.block1_start as i64 - header.ids_table_start as i64).max(0);

    reader.seek(SeekFrom::Start(start))?;
    let mut table = Vec::new();
    reader.take(len as u64).read_to_end(&mut table)?;
    Ok(Bytes::from(table))
}
