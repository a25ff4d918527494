//! Common types and constants shared by the IS3 container parser and the
//! DCL explode decoder.

use thiserror::Error;

/// Literal coding mode stored in the first byte of a compressed stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    /// Binary mode - literals are stored as 8 raw bits
    Binary = 0,
    /// ASCII mode - literals are Huffman coded
    ASCII = 1,
}

impl CompressionMode {
    /// Create a CompressionMode from the stream header byte
    pub fn from_u8(value: u8) -> Result<Self> {
        match value {
            0 => Ok(CompressionMode::Binary),
            1 => Ok(CompressionMode::ASCII),
            _ => Err(Is3Error::InvalidCompressionMode(value)),
        }
    }
}

/// Dictionary size stored in the second byte of a compressed stream
///
/// The value only controls how many raw bits follow a distance code; the
/// decode window is always [`WINDOW_SIZE`] bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionarySize {
    /// 1024 bytes (4 distance bits)
    Size1K = 1024,
    /// 2048 bytes (5 distance bits)
    Size2K = 2048,
    /// 4096 bytes (6 distance bits)
    Size4K = 4096,
}

impl DictionarySize {
    /// Number of raw distance bits for this dictionary size
    pub fn bits(&self) -> u8 {
        match self {
            DictionarySize::Size1K => 4,
            DictionarySize::Size2K => 5,
            DictionarySize::Size4K => 6,
        }
    }

    /// Create a DictionarySize from the stream header byte
    pub fn from_bits(bits: u8) -> Result<Self> {
        match bits {
            4 => Ok(DictionarySize::Size1K),
            5 => Ok(DictionarySize::Size2K),
            6 => Ok(DictionarySize::Size4K),
            _ => Err(Is3Error::InvalidDictionaryBits(bits)),
        }
    }
}

/// Error type for IS3 extraction operations
#[derive(Debug, Error)]
pub enum Is3Error {
    /// Invalid compression mode byte in a stream header
    #[error("Invalid compression mode: {0}")]
    InvalidCompressionMode(u8),

    /// Invalid dictionary size bits in a stream header
    #[error("Invalid dictionary bits: {0} (expected 4, 5, or 6)")]
    InvalidDictionaryBits(u8),

    /// Bit pattern matches no symbol in the Huffman table
    #[error("Invalid Huffman code")]
    InvalidHuffmanCode,

    /// Compressed bitstream ended before the end-of-stream code
    #[error("Unexpected end of input")]
    UnexpectedEof,

    /// Back-reference points before the start of decoded history
    #[error("Back-reference distance {distance} exceeds available history {available}")]
    DistanceTooFar {
        /// Requested back-reference distance
        distance: u32,
        /// Bytes of history available at that point
        available: u32,
    },

    /// Archive table record extends past the end of the input buffer
    #[error("File table truncated at offset {0:#x}")]
    TruncatedTable(u64),

    /// No archive signature found anywhere in the input
    #[error("No InstallShield 3.x archives found in input")]
    NoArchives,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Is3Error {
    /// True for errors that condemn a single compressed stream rather than
    /// the whole run; the extractor converts these into per-file failures.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Is3Error::InvalidCompressionMode(_)
                | Is3Error::InvalidDictionaryBits(_)
                | Is3Error::InvalidHuffmanCode
                | Is3Error::UnexpectedEof
                | Is3Error::DistanceTooFar { .. }
        )
    }
}

/// Result type alias for IS3 operations
pub type Result<T> = std::result::Result<T, Is3Error>;

/// Maximum Huffman code length in bits
pub const MAX_BITS: usize = 13;

/// Sliding window size for decompression
pub const WINDOW_SIZE: usize = 4096;

/// Decoded length value that terminates a compressed stream
pub const END_OF_STREAM: u32 = 519;
