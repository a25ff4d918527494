//! DCL explode (decompression)
//!
//! The IS3 payload format is PKWare DCL "implode" data: a one-byte literal
//! coding mode and a one-byte dictionary size, followed by a bitstream of
//! flagged literal/match units. Matches resolve against a 4 KB sliding
//! window; a decoded copy length of 519 terminates the stream.
//!
//! Decompression only. The extractor never writes archives back.

mod bits;
mod decoder;
mod huffman;
mod window;

pub use bits::BitReader;
pub use decoder::Decoder;
pub use huffman::HuffmanTable;
pub use window::SlidingWindow;

use crate::Result;

/// Convenience function to decompress one stream in memory
pub fn explode_bytes(data: &[u8]) -> Result<Vec<u8>> {
    Decoder::new(data)?.decompress()
}
