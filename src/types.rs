// src/types.rs
use crate::error::{BndlError, Result};
use std::fmt;

/// Container-wide compression scheme, stored at header offset 0x24
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum CompressionFlag {
    /// Raw deflate wrapped in a 2-byte prefix and a 4-byte suffix
    Deflate = 1,
    /// Stored verbatim
    Stored = 2,
    /// Scheme never verified against real data; bytes pass through untouched
    Unverified = 9,
}

impl CompressionFlag {
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            1 => Some(CompressionFlag::Deflate),
            2 => Some(CompressionFlag::Stored),
            9 => Some(CompressionFlag::Unverified),
            _ => None,
        }
    }

    pub fn value(&self) -> i32 {
        *self as i32
    }

    pub fn name(&self) -> &'static str {
        match self {
            CompressionFlag::Deflate => "deflate",
            CompressionFlag::Stored => "stored",
            CompressionFlag::Unverified => "unverified",
        }
    }
}

impl TryFrom<i32> for CompressionFlag {
    type Error = BndlError;

    fn try_from(value: i32) -> Result<Self> {
        CompressionFlag::from_i32(value).ok_or(BndlError::UnsupportedCompression(value))
    }
}

/// Width of the window each size flag owns in the raw size field
pub const SIZE_FLAG_WINDOW: u32 = 1 << 28;

/// `flag << 28` for flags 1..=9, in 32-bit wrapping arithmetic.
///
/// Flags 8 and 9 land on negative `i32` values.
pub const SIZE_FLAG_THRESHOLDS: [i32; 9] = {
    let mut table = [0i32; 9];
    let mut i = 0;
    while i < 9 {
        table[i] = ((i as u32 + 1) << 28) as i32;
        i += 1;
    }
    table
};

/// Find the first size flag (ascending) whose window contains `raw`.
///
/// Returns the flag value (1..=9) and the stripped size.
pub fn split_size_flag(raw: i32) -> Option<(u8, i32)> {
    SIZE_FLAG_THRESHOLDS
        .iter()
        .enumerate()
        .find_map(|(idx, &threshold)| {
            let stripped = raw.wrapping_sub(threshold);
            if (stripped as u32) < SIZE_FLAG_WINDOW {
                Some((idx as u8 + 1, stripped))
            } else {
                None
            }
        })
}

/// Recover the true decompressed size from a raw size field.
///
/// ```
/// use bndl_rs::types::adjust_size;
///
/// assert_eq!(adjust_size(0x1234), 0x1234);
/// assert_eq!(adjust_size((3 << 28) + 0x40), 0x40);
/// ```
pub fn adjust_size(raw: i32) -> i32 {
    split_size_flag(raw).map(|(_, size)| size).unwrap_or(raw)
}

/// Four raw bytes identifying a resource name or resource type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ResourceId(pub [u8; 4]);

impl ResourceId {
    pub fn new(bytes: [u8; 4]) -> Self {
        ResourceId(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    pub fn as_u32_le(&self) -> u32 {
        u32::from_le_bytes(self.0)
    }
}

/// Uppercase hex bytes joined by underscores, e.g. `0A_1B_2C_3D`
impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{:02X}_{:02X}_{:02X}_{:02X}", a, b, c, d)
    }
}

/// Which of the two payload slots a segment occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SegmentNumber {
    First = 1,
    Second = 2,
}

impl SegmentNumber {
    pub const ALL: [SegmentNumber; 2] = [SegmentNumber::First, SegmentNumber::Second];

    pub fn index(&self) -> usize {
        match self {
            SegmentNumber::First => 0,
            SegmentNumber::Second => 1,
        }
    }

    pub fn value(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for SegmentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
