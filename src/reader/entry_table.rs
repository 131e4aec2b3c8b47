// src/reader/entry_table.rs
use crate::decompress::{PayloadDecompressor, PayloadStatus};
use crate::entry::{Entry, EntryRecord, Segment, SegmentLayout};
use crate::error::{BndlError, Result};
use crate::header::ContainerHeader;
use crate::reader::{DecodeOptions, Diagnostic};
use crate::types::{CompressionFlag, SegmentNumber};
use std::io::{Read, Seek, SeekFrom};

/// Lazy, restartable enumeration of a container's entries
///
/// Each call to `next` seeks to one record, reads it and pulls its segments
/// through the decompressor. Nothing is cached between calls, so callers can
/// stop early, [`reset`](EntryTable::reset), or jump with
/// [`read_entry`](EntryTable::read_entry).
///
/// # Example
///
/// ```no_run
/// use bndl_rs::reader::{DecodeOptions, EntryTable};
/// use std::fs::File;
/// use std::io::BufReader;
///
/// let mut file = BufReader::new(File::open("VEHICLES/VEH_0001.BNDL").unwrap());
/// let table = EntryTable::open(&mut file, &DecodeOptions::default()).unwrap();
///
/// for entry in table.take(3) {
///     let entry = entry.unwrap();
///     println!("{} ({})", entry.name, entry.type_name());
/// }
/// ```
pub struct EntryTable<'a, R: Read + Seek> {
    reader: &'a mut R,
    header: ContainerHeader,
    compression: CompressionFlag,
    ids_table_start: u64,
    block_starts: [u64; 2],
    block_spans: [i64; 2],
    strict_bounds: bool,
    load_payloads: bool,
    len: usize,
    next_index: usize,
    diagnostics: Vec<Diagnostic>,
}

impl<'a, R: Read + Seek> EntryTable<'a, R> {
    /// Read the header from the start of `reader` and prepare the table.
    pub fn open(reader: &'a mut R, options: &DecodeOptions) -> Result<Self> {
        reader.seek(SeekFrom::Start(0))?;
        let header = ContainerHeader::read(reader)?;
        Self::new(reader, header, options)
    }

    /// Prepare the table for an already parsed header.
    ///
    /// Fails on an unsupported compression flag before touching any record.
    pub fn new(reader: &'a mut R, header: ContainerHeader, options: &DecodeOptions) -> Result<Self> {
        let compression = header.compression()?;
        let len = header.entry_count()?;
        let ids_table_start = header.ids_table_offset()?;
        let block_starts = [header.block1_offset()?, header.block2_offset()?];
        let block_spans = [
            header.block2_start as i64 - header.block1_start as i64,
            header.block3_start as i64 - header.block2_start as i64,
        ];

        let mut diagnostics = Vec::new();
        for violation in header.check_layout() {
            if options.strict_bounds {
                return Err(BndlError::Bounds(violation));
            }
            log::warn!("bnd2 header layout: {}", violation);
            diagnostics.push(Diagnostic::layout(None, None, violation));
        }

        Ok(EntryTable {
            reader,
            header,
            compression,
            ids_table_start,
            block_starts,
            block_spans,
            strict_bounds: options.strict_bounds,
            load_payloads: options.load_payloads,
            len,
            next_index: 0,
            diagnostics,
        })
    }

    pub fn header(&self) -> &ContainerHeader {
        &self.header
    }

    pub fn compression(&self) -> CompressionFlag {
        self.compression
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the entry the iterator yields next
    pub fn position(&self) -> usize {
        self.next_index
    }

    /// Restart enumeration from the first entry
    pub fn reset(&mut self) {
        self.next_index = 0;
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Give the stream back, e.g. to read whatever follows the last entry
    pub fn into_reader(self) -> &'a mut R {
        self.reader
    }

    /// Decode entry `index` without moving the iterator.
    pub fn read_entry(&mut self, index: usize) -> Result<Entry> {
        let record = EntryRecord::read_at(self.reader, self.ids_table_start, index)?;
        let layouts = [
            record.layout(SegmentNumber::First),
            record.layout(SegmentNumber::Second),
        ];

        let mut entry = Entry {
            index,
            name: record.name,
            type_id: record.type_id,
            block_count: record.block_count,
            count: record.count,
            layouts,
            segments: [None, None],
        };

        for number in SegmentNumber::ALL {
            entry.segments[number.index()] = self.read_segment(index, number, layouts[number.index()])?;
        }

        log::debug!(
            "entry {}: {} type {} ({} segment(s))",
            index,
            entry.name,
            entry.type_id,
            entry.segments.iter().flatten().count()
        );

        Ok(entry)
    }

    fn read_segment(
        &mut self,
        index: usize,
        number: SegmentNumber,
        layout: SegmentLayout,
    ) -> Result<Option<Segment>> {
        let Some((start, end)) = layout.span() else {
            return Ok(None);
        };

        let block = number.index();
        if end as i64 > self.block_spans[block] {
            let message = format!(
                "segment [{:#x}, {:#x}) overruns block {} span of {:#x} bytes",
                start, end, number, self.block_spans[block]
            );
            if self.strict_bounds {
                return Err(BndlError::Bounds(format!("entry {}: {}", index, message)));
            }
            log::warn!("entry {} segment {}: {}", index, number, message);
            self.diagnostics.push(Diagnostic::layout(Some(index), Some(number), message));
        }
        if !self.load_payloads {
            return Ok(None);
        }

        self.reader.seek(SeekFrom::Start(self.block_starts[block] + start))?;
        let wanted = layout.compressed_size as u64;
        let mut raw = Vec::new();
        (&mut *self.reader).take(wanted).read_to_end(&mut raw)?;
        if (raw.len() as u64) < wanted {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                format!(
                    "entry {} segment {}: wanted {} bytes, stream ended after {}",
                    index,
                    number,
                    wanted,
                    raw.len()
                ),
            )
            .into());
        }

        let payload = PayloadDecompressor::decompress(self.compression, raw);
        if let PayloadStatus::Failed(reason) = &payload.status {
            self.diagnostics.push(Diagnostic::decompression(index, number, reason.clone()));
        }

        Ok(Some(Segment {
            number,
            layout,
            data: payload.data,
            status: payload.status,
        }))
    }
}

impl<'a, R: Read + Seek> Iterator for EntryTable<'a, R> {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_index >= self.len {
            return None;
        }
        let index = self.next_index;
        self.next_index += 1;
        Some(self.read_entry(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len.saturating_sub(self.next_index);
        (remaining, Some(remaining))
    }
}
