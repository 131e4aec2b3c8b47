// src/error.rs
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BndlError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid BNDL magic: expected \"bnd2\", found {found:?}")]
    InvalidMagic { found: String },

    #[error("Unsupported BNDL version {major}.{minor} (only 1.0 is supported)")]
    UnsupportedVersion { major: u8, minor: u8 },

    #[error("Unsupported compression flag: {0}")]
    UnsupportedCompression(i32),

    #[error("Invalid header field {field}: {value}")]
    InvalidHeader { field: &'static str, value: i64 },

    #[error("Layout violation: {0}")]
    Bounds(String),
}

pub type Result<T> = std::result::Result<T, BndlError>;
