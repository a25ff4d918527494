//! IS3 archive container parsing and extraction
//!
//! InstallShield 3.x installers embed one or more archives inside the
//! setup executable, each announced by a 4-byte signature. The module is
//! split the same way the container work divides:
//!
//! - [`structures`]: header and table record types
//! - [`scanner`]: signature sweep producing [`ArchiveHeader`]s
//! - [`parser`]: directory/file table parsing with payload offsets
//! - [`extractor`]: per-file explode-and-write with failure isolation
//!
//! Data flows strictly downward: raw bytes are scanned for headers, a
//! header keys the file table, and the table drives extraction.

mod extractor;
mod parser;
mod scanner;
mod structures;

pub use extractor::{extract_archive, extract_archive_with, ExtractSummary};
pub use parser::parse_file_table;
pub use scanner::{scan, Archives};
pub use structures::{
    ArchiveHeader, DirectoryEntry, FileRecord, FileTable, HEADER_SPAN, SIGNATURE, TABLE_SIZE,
};
