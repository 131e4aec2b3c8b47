//! Payload decompression
//!
//! Every segment in a container is stored with the same scheme, selected by
//! the header's compression flag:
//!
//! - flag `2` stores bytes verbatim
//! - flag `1` wraps a raw deflate stream between a 2-byte prefix and a
//!   4-byte suffix
//! - flag `9` is an unknown scheme; bytes are passed through and marked
//!   [`PayloadStatus::Unverified`]
//!
//! Any other flag is rejected with [`BndlError::UnsupportedCompression`].
//!
//! ```
//! use bndl_rs::decompress::{decompress_payload, PayloadStatus};
//!
//! let payload = decompress_payload(2, b"raw bytes").unwrap();
//! assert_eq!(&payload.data[..], b"raw bytes");
//! assert_eq!(payload.status, PayloadStatus::Verified);
//! ```
//!
//! [`BndlError::UnsupportedCompression`]: crate::error::BndlError::UnsupportedCompression

mod inflate;

pub use inflate::{inflate_enveloped, ENVELOPE_PREFIX, ENVELOPE_SUFFIX};

use crate::error::Result;
use crate::types::CompressionFlag;
use bytes::Bytes;

/// How much trust the decoded bytes deserve
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadStatus {
    Verified,
    /// Passed through under a scheme nobody has verified
    Unverified,
    /// Inflate failed; the payload is empty
    Failed(String),
}

impl PayloadStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, PayloadStatus::Failed(_))
    }
}

/// Output of [`PayloadDecompressor`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPayload {
    pub data: Bytes,
    pub status: PayloadStatus,
}

/// Applies a container's compression scheme to segment bytes
pub struct PayloadDecompressor;

impl PayloadDecompressor {
    /// Decode one segment. Inflate failures are folded into the returned
    /// status rather than surfaced as an error.
    pub fn decompress(flag: CompressionFlag, raw: Vec<u8>) -> DecodedPayload {
        match flag {
            CompressionFlag::Stored => DecodedPayload {
                data: Bytes::from(raw),
                status: PayloadStatus::Verified,
            },
            CompressionFlag::Unverified => DecodedPayload {
                data: Bytes::from(raw),
                status: PayloadStatus::Unverified,
            },
            CompressionFlag::Deflate => match inflate_enveloped(&raw) {
                Ok(data) => DecodedPayload {
                    data: Bytes::from(data),
                    status: PayloadStatus::Verified,
                },
                Err(e) => {
                    log::warn!("Decompression failed: {}", e);
                    DecodedPayload {
                        data: Bytes::new(),
                        status: PayloadStatus::Failed(e.to_string()),
                    }
                }
            },
        }
    }
}

/// Decode `raw` under the raw header flag value.
pub fn decompress_payload(flag: i32, raw: &[u8]) -> Result<DecodedPayload> {
    let flag = CompressionFlag::try_from(flag)?;
    Ok(PayloadDecompressor::decompress(flag, raw.to_vec()))
}
