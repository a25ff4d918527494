//! The explode decode loop
//!
//! A decoder owns one bit reader, one sliding window, and the Huffman
//! tables for a single compressed stream. Nothing is shared between
//! decodes, so distinct files can be decoded independently.

use log::debug;

use super::bits::BitReader;
use super::huffman::HuffmanTable;
use super::window::SlidingWindow;
use crate::common::END_OF_STREAM;
use crate::tables::{DISTLEN, LEN_BASE, LEN_EXTRA, LENLEN, LITLEN};
use crate::{CompressionMode, DictionarySize, Result};

/// Single-stream explode decoder
#[derive(Debug)]
pub struct Decoder<'a> {
    reader: BitReader<'a>,
    window: SlidingWindow,
    dict_bits: u32,
    /// Literal table; present only in ASCII mode
    literals: Option<HuffmanTable>,
    lengths: HuffmanTable,
    distances: HuffmanTable,
}

impl<'a> Decoder<'a> {
    /// Parse the two-byte stream header and build the decode tables
    ///
    /// The first byte selects the literal coding mode, the second the
    /// dictionary bits. The literal table exists only in ASCII mode; the
    /// length and distance tables are always built.
    pub fn new(data: &'a [u8]) -> Result<Self> {
        let mut reader = BitReader::new(data);

        let mode = CompressionMode::from_u8(reader.bits(8)? as u8)?;
        let dict = DictionarySize::from_bits(reader.bits(8)? as u8)?;

        let literals = match mode {
            CompressionMode::ASCII => Some(HuffmanTable::new(&LITLEN)),
            CompressionMode::Binary => None,
        };

        Ok(Self {
            reader,
            window: SlidingWindow::new(),
            dict_bits: dict.bits() as u32,
            literals,
            lengths: HuffmanTable::new(&LENLEN),
            distances: HuffmanTable::new(&DISTLEN),
        })
    }

    /// Run the decode loop to the end-of-stream code
    pub fn decompress(mut self) -> Result<Vec<u8>> {
        let mut output = Vec::new();

        loop {
            if self.reader.bits(1)? == 1 {
                // Length/distance pair
                let symbol = self.lengths.decode(&mut self.reader)? as usize;
                let length = LEN_BASE[symbol] + self.reader.bits(LEN_EXTRA[symbol])?;

                if length == END_OF_STREAM {
                    break;
                }

                // Two-byte copies always carry 2 extra distance bits; the
                // dictionary size applies to everything longer.
                let extra = if length == 2 { 2 } else { self.dict_bits };
                let mut distance = (self.distances.decode(&mut self.reader)? as u32) << extra;
                distance += self.reader.bits(extra)?;
                distance += 1;

                // Byte-at-a-time so distances shorter than the length
                // re-read bytes written by this same copy.
                for _ in 0..length {
                    let byte = self.window.read_back(distance)?;
                    self.window.push(byte);
                    output.push(byte);
                }
            } else {
                let byte = match &self.literals {
                    Some(table) => table.decode(&mut self.reader)? as u8,
                    None => self.reader.bits(8)? as u8,
                };
                self.window.push(byte);
                output.push(byte);
            }
        }

        debug!("explode: {} bytes decoded", output.len());
        Ok(output)
    }
}
