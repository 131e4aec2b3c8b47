mod container;
mod diagnostic;
mod entry_table;
mod options;

#[cfg(feature = "async")]
mod async_reader;

pub use container::{Container, ReadSeek};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use entry_table::EntryTable;
pub use options::DecodeOptions;
