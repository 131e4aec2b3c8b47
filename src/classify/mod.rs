//! Signature-based content classification
//!
//! The first four bytes of a payload are looked up in a [`SignatureTable`].
//! The result is advisory only; decoding never depends on it.

mod table;

pub use table::SignatureTable;

use std::fmt;

/// Closed set of content kinds a payload can be classified as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Model,
    Texture,
    VehicleConfig,
    ResourceDescriptor,
    Unknown,
}

impl ContentKind {
    pub const KNOWN: [ContentKind; 4] = [
        ContentKind::Model,
        ContentKind::Texture,
        ContentKind::VehicleConfig,
        ContentKind::ResourceDescriptor,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Model => "Model (.mdl)",
            ContentKind::Texture => "Texture (.tex)",
            ContentKind::VehicleConfig => "Vehicle Config (.veh)",
            ContentKind::ResourceDescriptor => "Resource Descriptor (.resd)",
            ContentKind::Unknown => "unknown",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ContentKind::Model => ".mdl.dat",
            ContentKind::Texture => ".tex.dat",
            ContentKind::VehicleConfig => ".veh.dat",
            ContentKind::ResourceDescriptor => ".resd.dat",
            ContentKind::Unknown => ".unknown.dat",
        }
    }

    /// Reverse lookup by label; unrecognised labels map to `Unknown`.
    pub fn from_label(label: &str) -> Self {
        Self::KNOWN
            .iter()
            .copied()
            .find(|kind| kind.label() == label)
            .unwrap_or(ContentKind::Unknown)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify against the process-wide table.
pub fn classify(data: &[u8]) -> ContentKind {
    SignatureTable::global().read().classify(data)
}

/// Register a signature in the process-wide table.
pub fn register_signature(signature: [u8; 4], kind: ContentKind) {
    SignatureTable::global().write().register(signature, kind);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_and_extensions() {
        assert_eq!(ContentKind::Model.extension(), ".mdl.dat");
        assert_eq!(ContentKind::Texture.extension(), ".tex.dat");
        assert_eq!(ContentKind::VehicleConfig.extension(), ".veh.dat");
        assert_eq!(ContentKind::ResourceDescriptor.extension(), ".resd.dat");
        assert_eq!(ContentKind::Unknown.label(), "unknown");
        assert_eq!(ContentKind::Unknown.extension(), ".unknown.dat");
    }

    #[test]
    fn test_label_round_trip() {
        for kind in ContentKind::KNOWN {
            assert_eq!(ContentKind::from_label(kind.label()), kind);
        }
        assert_eq!(ContentKind::from_label("Sound"), ContentKind::Unknown);
    }

    #[test]
    fn test_global_classification_defaults_to_unknown() {
        assert_eq!(classify(&[0x01, 0x02, 0x03, 0x04, 0x05]), ContentKind::Unknown);
        assert_eq!(classify(&[]), ContentKind::Unknown);
    }

    #[test]
    fn test_global_registration() {
        register_signature(*b"\xF0\x0D\xCA\xFE", ContentKind::Texture);
        assert_eq!(classify(b"\xF0\x0D\xCA\xFE\x00\x00"), ContentKind::Texture);
    }
}
