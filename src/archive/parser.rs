//! Directory and file table parsing
//!
//! The table begins `name_offset` bytes after the archive signature:
//! first `dir_count` directory records, then `file_count` file records.
//! Records are strided by their own `block_len` field, so unknown trailing
//! bytes inside a record are tolerated. The source buffer is legacy,
//! corruption-exposed data - every field read is bounds-checked, and a
//! record that would run past the buffer ends the pass early with the
//! records parsed so far.

use byteorder::{LittleEndian, ReadBytesExt};
use log::{debug, warn};
use std::io::Cursor;

use super::structures::{ArchiveHeader, DirectoryEntry, FileRecord, FileTable, TABLE_SIZE};
use crate::{Is3Error, Result};

/// Minimum size of a file record before its name bytes
const FILE_RECORD_MIN: usize = 0x1E;

/// Parse the directory and file tables of one archive
///
/// Truncated tables yield partial results rather than an error; the
/// records successfully parsed before the truncation are returned.
pub fn parse_file_table(data: &[u8], header: &ArchiveHeader) -> FileTable {
    let base = header.offset as usize;
    let mut pos = base + header.name_offset as usize;

    let mut directories = Vec::with_capacity(header.dir_count as usize);
    for _ in 0..header.dir_count {
        match read_directory_record(data, pos) {
            Ok((entry, next)) => {
                directories.push(entry);
                pos = next;
            }
            Err(e) => {
                warn!("directory table cut short: {e}");
                break;
            }
        }
    }

    // Directories claim runs of file records in declaration order; flatten
    // that into a per-file-index name lookup.
    let mut dir_for_file = Vec::with_capacity(header.file_count as usize);
    for dir in &directories {
        for _ in 0..dir.file_count {
            dir_for_file.push(dir.name.as_str());
        }
    }

    let mut files = Vec::with_capacity(header.file_count as usize);
    for index in 0..header.file_count as usize {
        match read_file_record(data, pos, dir_for_file.get(index).copied()) {
            Ok((record, next)) => {
                files.push(record);
                pos = next;
            }
            Err(e) => {
                warn!("file table cut short: {e}");
                break;
            }
        }
    }

    // Payloads are packed back to back after the fixed-size table header.
    let mut offset = header.offset + TABLE_SIZE;
    for file in &mut files {
        file.compressed_offset = offset;
        offset += file.compressed_size as u64;
    }

    debug!(
        "archive at {:#x}: parsed {} directories, {} files",
        header.offset,
        directories.len(),
        files.len()
    );

    FileTable { files, directories }
}

/// Read one directory record at `pos`, returning it and the next record's
/// position
fn read_directory_record(data: &[u8], pos: usize) -> Result<(DirectoryEntry, usize)> {
    if pos + 6 > data.len() {
        return Err(Is3Error::TruncatedTable(pos as u64));
    }

    let mut cursor = Cursor::new(&data[pos..pos + 6]);
    let file_count = cursor.read_u16::<LittleEndian>()?;
    let block_len = cursor.read_u16::<LittleEndian>()? as usize;
    let name_len = cursor.read_u16::<LittleEndian>()? as usize;

    // A zero stride would re-read this record for the rest of the count.
    if block_len == 0 || pos + 6 + name_len > data.len() {
        return Err(Is3Error::TruncatedTable(pos as u64));
    }

    // Name bytes may be padded beyond name_len; block_len is the stride.
    let name = ascii_name(&data[pos + 6..pos + 6 + name_len]);

    Ok((DirectoryEntry { name, file_count }, pos + block_len))
}

/// Read one file record at `pos`, prefixing `directory` onto its name
fn read_file_record(
    data: &[u8],
    pos: usize,
    directory: Option<&str>,
) -> Result<(FileRecord, usize)> {
    if pos + FILE_RECORD_MIN > data.len() {
        return Err(Is3Error::TruncatedTable(pos as u64));
    }

    let record = &data[pos..pos + FILE_RECORD_MIN];
    let mut cursor = Cursor::new(record);

    cursor.set_position(0x07);
    let compressed_size = cursor.read_u32::<LittleEndian>()?;
    cursor.set_position(0x0F);
    let date = cursor.read_u16::<LittleEndian>()?;
    let time = cursor.read_u16::<LittleEndian>()?;
    cursor.set_position(0x17);
    let block_len = cursor.read_u16::<LittleEndian>()? as usize;
    let name_len = record[0x1D] as usize;

    if block_len == 0 || pos + FILE_RECORD_MIN + name_len > data.len() {
        return Err(Is3Error::TruncatedTable(pos as u64));
    }

    let name = ascii_name(&data[pos + FILE_RECORD_MIN..pos + FILE_RECORD_MIN + name_len]);
    let path = match directory {
        Some(dir) if !dir.is_empty() => format!("{dir}/{name}"),
        _ => name,
    };

    Ok((
        FileRecord {
            path,
            compressed_size,
            date,
            time,
            compressed_offset: 0, // assigned by the offset pass
        },
        pos + block_len,
    ))
}

/// Decode ASCII name bytes, dropping NUL padding
fn ascii_name(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .trim_end_matches('\0')
        .to_string()
}
