//! Signature scan over an arbitrary binary blob
//!
//! IS3 installers embed one or more archives at unpredictable positions
//! inside the stub executable, so the whole input is swept for the 4-byte
//! signature. Every occurrence with a full header behind it becomes an
//! [`ArchiveHeader`]; short-tailed occurrences are coincidental byte
//! patterns and are skipped silently.

use log::debug;

use super::structures::{ArchiveHeader, SIGNATURE};

/// Lazy iterator over every archive header in `data`, in ascending
/// offset order
#[derive(Debug, Clone)]
pub struct Archives<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Archives<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl Iterator for Archives<'_> {
    type Item = ArchiveHeader;

    fn next(&mut self) -> Option<ArchiveHeader> {
        while self.pos + SIGNATURE.len() <= self.data.len() {
            if self.data[self.pos..self.pos + SIGNATURE.len()] != SIGNATURE {
                self.pos += 1;
                continue;
            }

            // Step past the signature, not the whole archive, so
            // back-to-back or overlapping archives are all found.
            let offset = self.pos;
            self.pos += SIGNATURE.len();

            if let Some(header) = ArchiveHeader::from_bytes(self.data, offset) {
                debug!(
                    "archive at {:#x}: {} files, {} dirs",
                    offset, header.file_count, header.dir_count
                );
                return Some(header);
            }
        }
        None
    }
}

/// Scan `data` for every embedded IS3 archive
pub fn scan(data: &[u8]) -> Archives<'_> {
    Archives::new(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::structures::HEADER_SPAN;

    fn minimal_archive(offset: usize, total: usize) -> Vec<u8> {
        let mut data = vec![0u8; total];
        data[offset..offset + 4].copy_from_slice(&SIGNATURE);
        data
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(scan(&[]).count(), 0);
    }

    #[test]
    fn test_signature_mid_buffer() {
        let data = minimal_archive(10, 10 + HEADER_SPAN);
        let headers: Vec<_> = scan(&data).collect();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[0].offset, 10);
    }

    #[test]
    fn test_truncated_header_skipped() {
        // Signature present but fewer than 0x33 bytes behind it
        let data = minimal_archive(0, HEADER_SPAN - 1);
        assert_eq!(scan(&data).count(), 0);
    }

    #[test]
    fn test_restartable() {
        let data = minimal_archive(0, HEADER_SPAN);
        let archives = scan(&data);
        assert_eq!(archives.clone().count(), 1);
        assert_eq!(archives.count(), 1);
    }
}
