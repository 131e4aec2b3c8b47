// src/classify/table.rs
use super::ContentKind;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Signature length in bytes
pub const SIGNATURE_LEN: usize = 4;

/// Maps leading 4-byte signatures to content kinds
#[derive(Debug, Clone, Default)]
pub struct SignatureTable {
    entries: HashMap<[u8; SIGNATURE_LEN], ContentKind>,
}

impl SignatureTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide table used by [`crate::classify::classify`]. Starts empty.
    pub fn global() -> &'static RwLock<SignatureTable> {
        static GLOBAL: OnceLock<RwLock<SignatureTable>> = OnceLock::new();
        GLOBAL.get_or_init(|| RwLock::new(SignatureTable::new()))
    }

    pub fn register(&mut self, signature: [u8; SIGNATURE_LEN], kind: ContentKind) {
        self.entries.insert(signature, kind);
    }

    /// Register a signature written as 8 hex digits, e.g. `"44415400"`.
    ///
    /// Returns `false` and leaves the table untouched if `hex` is malformed.
    pub fn register_hex(&mut self, hex: &str, kind: ContentKind) -> bool {
        match parse_hex_signature(hex) {
            Some(signature) => {
                self.register(signature, kind);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, signature: &[u8; SIGNATURE_LEN]) -> Option<ContentKind> {
        self.entries.remove(signature)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lookup(&self, signature: &[u8; SIGNATURE_LEN]) -> ContentKind {
        self.entries
            .get(signature)
            .copied()
            .unwrap_or(ContentKind::Unknown)
    }

    pub fn classify(&self, data: &[u8]) -> ContentKind {
        match data.get(..SIGNATURE_LEN) {
            Some(head) => {
                let mut signature = [0u8; SIGNATURE_LEN];
                signature.copy_from_slice(head);
                self.lookup(&signature)
            }
            None => ContentKind::Unknown,
        }
    }
}

impl FromIterator<([u8; SIGNATURE_LEN], ContentKind)> for SignatureTable {
    fn from_iter<I: IntoIterator<Item = ([u8; SIGNATURE_LEN], ContentKind)>>(iter: I) -> Self {
        SignatureTable {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<([u8; SIGNATURE_LEN], ContentKind)> for SignatureTable {
    fn extend<I: IntoIterator<Item = ([u8; SIGNATURE_LEN], ContentKind)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

fn parse_hex_signature(hex: &str) -> Option<[u8; SIGNATURE_LEN]> {
    let hex: String = hex.chars().filter(|c| !matches!(c, '-' | '_' | ' ')).collect();
    if hex.len() != SIGNATURE_LEN * 2 || !hex.is_ascii() {
        return None;
    }

    let mut signature = [0u8; SIGNATURE_LEN];
    for (i, byte) in signature.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).ok()?;
    }
    Some(signature)
}
