// src/lib.rs
//! # bndl-rs
//!
//! A read-only decoder for "bnd2" (BNDL) game-asset containers.
//!
//! ## Features
//!
//! - 📦 **Complete Entry Tables**: every record with both payload segments,
//!   sizes recovered from their flagged raw form
//! - 🗜️ **Container-wide Compression**: stored, enveloped raw deflate, and
//!   pass-through for the unverified scheme
//! - 🏷️ **Signature Classification**: extensible 4-byte signature table
//! - 🔎 **Nested Blobs**: coarse carving of `DAT`-prefixed payloads with a
//!   bounded, stack-driven walk
//! - 🌲 **Lazy Browsing**: folder → container → entry → record tree expanded
//!   on demand
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bndl_rs::*;
//!
//! fn main() -> Result<()> {
//!     let container = Container::open("VEHICLES/VEH_CARBRWDS_GR.BNDL")?;
//!
//!     for entry in container.entries() {
//!         println!("{} [{}]", entry.name, entry.type_name());
//!         for file in entry.contained_files() {
//!             println!("  {} ({} bytes)", file.name, file.data.len());
//!         }
//!     }
//!
//!     for diagnostic in container.diagnostics() {
//!         eprintln!("warning: {}", diagnostic);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ### Lazy Enumeration
//!
//! ```rust,no_run
//! use bndl_rs::*;
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! fn main() -> Result<()> {
//!     let mut file = BufReader::new(File::open("TRK_UNIT0_GR.BNDL")?);
//!     let mut table = EntryTable::open(&mut file, &DecodeOptions::default())?;
//!
//!     if let Some(first) = table.next() {
//!         println!("first entry: {}", first?.name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ### Async Loading
//!
//! ```rust,no_run
//! # #[cfg(feature = "async")]
//! use bndl_rs::*;
//!
//! # #[cfg(feature = "async")]
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let container = Container::open_async("WORLDTEX.BIN").await?;
//!     println!("{} entries", container.len());
//!     Ok(())
//! }
//! ```

// Modules
pub mod error;
pub mod types;
pub mod header;
pub mod entry;
pub mod decompress;
pub mod classify;
pub mod nested;
pub mod names;
pub mod reader;
pub mod browse;
pub mod utils;

// Re-export commonly used types at the crate root for convenience
pub use error::{BndlError, Result};

// Type exports
pub use types::{
    adjust_size,
    CompressionFlag,
    ResourceId,
    SegmentNumber,
    SIZE_FLAG_THRESHOLDS,
};

pub use header::ContainerHeader;

pub use entry::{
    ContainedFile,
    Entry,
    EntryRecord,
    Segment,
    SegmentLayout,
};

pub use decompress::{
    decompress_payload,
    DecodedPayload,
    PayloadDecompressor,
    PayloadStatus,
};

pub use classify::{
    classify,
    ContentKind,
    SignatureTable,
};

pub use nested::CarvedRecord;

// Reader exports
pub use reader::{
    Container,
    DecodeOptions,
    Diagnostic,
    DiagnosticKind,
    EntryTable,
};

pub use browse::Node;

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use bndl_rs::prelude::*;
    //! ```

    pub use crate::classify::{ContentKind, SignatureTable};
    pub use crate::entry::{Entry, Segment};
    pub use crate::error::{BndlError, Result};
    pub use crate::reader::{Container, DecodeOptions, EntryTable};
    pub use crate::types::{CompressionFlag, SegmentNumber};
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
