//! IS3Lib - Rust extractor for InstallShield 3.x installers
//!
//! This crate recovers the original files stored inside InstallShield 3.x
//! self-extracting installers and standalone `.Z` archives (1990s DOS/Win16
//! era). An installer may carry several embedded archives; each is located
//! by signature scan, its directory/file table parsed, and every payload
//! decompressed with the PKWare DCL "explode" algorithm (canonical Huffman
//! coding over a 4 KB sliding dictionary).
//!
//! # Features
//!
//! - Signature scan finds every embedded archive, including back-to-back
//!   archives behind stub code
//! - Directory structure recovered from the archive's directory table
//! - Binary and ASCII literal coding modes, dictionary sizes 1/2/4 KB
//! - Corrupt payloads fail per file, never aborting a batch
//!
//! # Example
//!
//! ```no_run
//! use is3lib::{extract_archive, scan};
//! use std::path::Path;
//!
//! let data = std::fs::read("SETUP.EXE")?;
//! for header in scan(&data) {
//!     let summary = extract_archive(&data, &header, Path::new("out"))?;
//!     println!("{} extracted, {} failed", summary.extracted, summary.failed);
//! }
//! # Ok::<(), is3lib::Is3Error>(())
//! ```
//!
//! # Example - listing without extraction
//!
//! ```no_run
//! use is3lib::{parse_file_table, scan};
//!
//! let data = std::fs::read("SETUP.EXE")?;
//! for header in scan(&data) {
//!     let table = parse_file_table(&data, &header);
//!     for file in &table.files {
//!         println!("{} ({} bytes compressed)", file.path, file.compressed_size);
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

// Public modules
pub mod archive;
pub mod common;
pub mod error;
pub mod explode;
pub mod tables;

// Re-export commonly used types
pub use archive::{
    extract_archive, extract_archive_with, parse_file_table, scan, ArchiveHeader, Archives,
    DirectoryEntry, ExtractSummary, FileRecord, FileTable,
};
pub use common::{
    CompressionMode, DictionarySize, Is3Error, Result, END_OF_STREAM, MAX_BITS, WINDOW_SIZE,
};
pub use explode::explode_bytes;
