// src/reader/diagnostic.rs
use crate::types::SegmentNumber;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A segment failed to inflate and was left empty
    Decompression,
    /// Header sections out of order, or a segment overruns its block
    Layout,
}

/// A non-fatal problem found while decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub entry: Option<usize>,
    pub segment: Option<SegmentNumber>,
    pub message: String,
}

impl Diagnostic {
    pub fn layout(entry: Option<usize>, segment: Option<SegmentNumber>, message: String) -> Self {
        Diagnostic { kind: DiagnosticKind::Layout, entry, segment, message }
    }

    pub fn decompression(entry: usize, segment: SegmentNumber, message: String) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Decompression,
            entry: Some(entry),
            segment: Some(segment),
            message,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.entry, self.segment) {
            (Some(entry), Some(segment)) => {
                write!(f, "entry {} segment {}: {}", entry, segment, self.message)
            }
            (Some(entry), None) => write!(f, "entry {}: {}", entry, self.message),
            _ => f.write_str(&self.message),
        }
    }
}
