//! Instruction word assembly
//!
//! Groups a flat program image into 16-bit little-endian instruction words.

use crate::DisassemblyError;

/// What to do with an unpaired byte at the end of a program image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingBytePolicy {
    /// Fail with [`DisassemblyError::TruncatedStream`].
    #[default]
    Reject,

    /// Drop the byte and decode the complete words before it.
    Ignore,
}

/// Lazy iterator over the instruction words of a program image.
///
/// Clone it before consuming to walk the image a second time.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    chunks: std::slice::ChunksExact<'a, u8>,
}

impl Iterator for Words<'_> {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        self.chunks
            .next()
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Words<'_> {}

/// Split `bytes` into instruction words.
///
/// Each word is `bytes[2i] | (bytes[2i + 1] << 8)`. An odd-length image is
/// rejected or trimmed according to `policy`.
///
/// # Examples
///
/// ```
/// use libavr::{words, TrailingBytePolicy};
///
/// let image = [0x00, 0x24, 0xA0, 0xE0];
/// let decoded: Vec<u16> = words(&image, TrailingBytePolicy::Reject).unwrap().collect();
/// assert_eq!(decoded, vec![0x2400, 0xE0A0]);
///
/// assert!(words(&image[..3], TrailingBytePolicy::Reject).is_err());
/// assert_eq!(words(&image[..3], TrailingBytePolicy::Ignore).unwrap().len(), 1);
/// ```
pub fn words(bytes: &[u8], policy: TrailingBytePolicy) -> Result<Words<'_>, DisassemblyError> {
    let chunks = bytes.chunks_exact(2);

    if let &[trailing_byte] = chunks.remainder() {
        match policy {
            TrailingBytePolicy::Reject => {
                return Err(DisassemblyError::TruncatedStream {
                    length: bytes.len(),
                    trailing_byte,
                });
            }
            TrailingBytePolicy::Ignore => {
                log::warn!(
                    "ignoring trailing byte 0x{:02X} at offset {}",
                    trailing_byte,
                    bytes.len() - 1
                );
            }
        }
    }

    Ok(Words { chunks })
}
