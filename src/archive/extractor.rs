//! Batch extraction of one archive to disk
//!
//! Each file's payload is sliced out of the source buffer, exploded, and
//! written under the output root with its directory structure preserved.
//! A file that fails to decode is counted and skipped - corrupt payloads
//! are common in damaged installers and must not abort the batch. Nothing
//! is written for a failed file.

use log::warn;
use std::fs;
use std::path::Path;

use super::parser::parse_file_table;
use super::structures::ArchiveHeader;
use crate::explode::explode_bytes;
use crate::Result;

/// Outcome of extracting one archive
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Files decoded and written
    pub extracted: usize,
    /// Files whose payload failed to decode
    pub failed: usize,
}

/// Extract every file of `header`'s archive into `output_root`
///
/// Decode failures are tallied in the summary; only I/O errors (and thus
/// nothing about the archive contents themselves) abort the batch.
pub fn extract_archive(
    data: &[u8],
    header: &ArchiveHeader,
    output_root: &Path,
) -> Result<ExtractSummary> {
    extract_archive_with(data, header, output_root, |_, _| {})
}

/// Extract with a per-file callback reporting the path and, for files
/// that decoded, the output size
pub fn extract_archive_with<F>(
    data: &[u8],
    header: &ArchiveHeader,
    output_root: &Path,
    mut report: F,
) -> Result<ExtractSummary>
where
    F: FnMut(&str, Option<usize>),
{
    let table = parse_file_table(data, header);
    fs::create_dir_all(output_root)?;

    let mut summary = ExtractSummary::default();

    for file in &table.files {
        let start = (file.compressed_offset as usize).min(data.len());
        let end = (start + file.compressed_size as usize).min(data.len());
        let payload = &data[start..end];

        match explode_bytes(payload) {
            Ok(contents) => {
                let target = output_root.join(&file.path);
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&target, &contents)?;
                report(&file.path, Some(contents.len()));
                summary.extracted += 1;
            }
            Err(e) if e.is_decode_error() => {
                warn!("{}: {e}", file.path);
                report(&file.path, None);
                summary.failed += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(summary)
}
