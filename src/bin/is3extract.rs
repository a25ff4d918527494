//! is3extract - Command-line extractor for InstallShield 3.x installers
//!
//! Scans a setup executable (or standalone Z archive) for embedded IS3
//! archives and extracts their contents, preserving directory structure.

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use is3lib::{
    extract_archive_with, parse_file_table, scan, ArchiveHeader, ExtractSummary, Is3Error,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "is3extract")]
#[command(about = "Extract files from InstallShield 3.x installers and Z archives")]
#[command(version)]
#[command(after_help = "Examples:\n  \
  is3extract SETUP.EXE out/          extract every embedded archive\n  \
  is3extract SETUP.EXE --list        list archives and files only\n  \
  is3extract DATA.Z out/ --archive 0 extract just the first archive")]
struct Cli {
    /// Installer or archive file to read
    input: PathBuf,

    /// Directory to extract into
    #[arg(required_unless_present = "list")]
    output_dir: Option<PathBuf>,

    /// List archives and files without extracting
    #[arg(long)]
    list: bool,

    /// Extract only archive N (0-based index)
    #[arg(long, value_name = "N")]
    archive: Option<usize>,

    /// Quiet mode (suppress per-file output)
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file '{}' does not exist", cli.input.display()).into());
    }

    let data = fs::read(&cli.input)?;

    if !cli.quiet {
        println!("Input: {} ({} bytes)", cli.input.display(), data.len());
    }

    let archives: Vec<ArchiveHeader> = scan(&data).collect();
    if archives.is_empty() {
        return Err(Is3Error::NoArchives.into());
    }

    if !cli.quiet {
        println!("Found {} archive(s):", archives.len());
        for (i, header) in archives.iter().enumerate() {
            println!(
                "  [{}] Offset {:#x}: {} files, {} bytes",
                i, header.offset, header.file_count, header.archive_len
            );
        }
    }

    if cli.list {
        list_archives(&data, &archives);
        return Ok(());
    }

    // required_unless_present guarantees this is set outside --list
    let output_root = cli
        .output_dir
        .as_deref()
        .ok_or("Output directory is required unless --list is given")?;

    let mut extracted = 0;
    let mut failed = 0;

    for (i, header) in archives.iter().enumerate() {
        if cli.archive.is_some_and(|n| n != i) {
            continue;
        }

        // With several archives landing in one root, give each its own
        // subdirectory so identical paths cannot collide.
        let target = if archives.len() > 1 && cli.archive.is_none() {
            output_root.join(format!("archive_{i}"))
        } else {
            output_root.to_path_buf()
        };

        if !cli.quiet {
            println!("Archive [{}] -> {}/", i, target.display());
        }

        let summary = extract_one(&data, header, &target, cli.quiet)?;
        extracted += summary.extracted;
        failed += summary.failed;
    }

    if failed > 0 {
        println!("Extracted {} files ({} failed)", extracted, failed);
    } else {
        println!("Extracted {} files", extracted);
    }

    Ok(())
}

fn list_archives(data: &[u8], archives: &[ArchiveHeader]) {
    for header in archives {
        let table = parse_file_table(data, header);
        for dir in &table.directories {
            if !dir.name.is_empty() {
                println!("       Directory: {}/", dir.name);
            }
        }
        for file in &table.files {
            println!(
                "       - {} ({} bytes compressed)",
                file.path, file.compressed_size
            );
        }
    }
}

fn extract_one(
    data: &[u8],
    header: &ArchiveHeader,
    target: &Path,
    quiet: bool,
) -> Result<ExtractSummary, Is3Error> {
    let progress = if quiet || header.file_count == 0 {
        None
    } else {
        let pb = ProgressBar::new(header.file_count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40.cyan/blue} {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    };

    let summary = extract_archive_with(data, header, target, |path, outcome| {
        if let Some(ref pb) = progress {
            pb.inc(1);
            match outcome {
                Some(size) => pb.set_message(format!("{path} ({size} bytes)")),
                None => pb.set_message(format!("{path} FAILED")),
            }
        }
    })?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    Ok(summary)
}
