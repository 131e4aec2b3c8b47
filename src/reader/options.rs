// src/reader/options.rs

/// Knobs for a decode pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Turn section-ordering and segment-span violations into errors instead
    /// of diagnostics
    pub strict_bounds: bool,
    /// Capacity of the `BufReader` wrapped around opened files
    pub buffer_capacity: usize,
    /// When false only record layouts are read; every segment stays `None`
    pub load_payloads: bool,
}

impl DecodeOptions {
    pub const DEFAULT_BUFFER_CAPACITY: usize = 65536;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strict_bounds(mut self, strict: bool) -> Self {
        self.strict_bounds = strict;
        self
    }

    pub fn with_load_payloads(mut self, load: bool) -> Self {
        self.load_payloads = load;
        self
    }

    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity.max(1);
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            strict_bounds: false,
            buffer_capacity: Self::DEFAULT_BUFFER_CAPACITY,
            load_payloads: true,
        }
    }
}
