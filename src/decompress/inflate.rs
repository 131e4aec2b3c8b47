// src/decompress/inflate.rs
use flate2::bufread::DeflateDecoder;
use std::io::{self, Read};

/// Bytes preceding the deflate stream
pub const ENVELOPE_PREFIX: usize = 2;
/// Bytes following the deflate stream
pub const ENVELOPE_SUFFIX: usize = 4;

/// Inflate the raw deflate stream sitting between the envelope bytes.
pub fn inflate_enveloped(raw: &[u8]) -> io::Result<Vec<u8>> {
    if raw.len() < ENVELOPE_PREFIX + ENVELOPE_SUFFIX {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!(
                "payload of {} bytes is shorter than the {}-byte envelope",
                raw.len(),
                ENVELOPE_PREFIX + ENVELOPE_SUFFIX
            ),
        ));
    }

    let stream = &raw[ENVELOPE_PREFIX..raw.len() - ENVELOPE_SUFFIX];
    let mut decoder = DeflateDecoder::new(stream);
    let mut output = Vec::with_capacity(stream.len() * 2);
    decoder.read_to_end(&mut output)?;
    Ok(output)
}
