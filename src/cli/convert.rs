//! Convert command implementation.
//!
//! Reads stat-block files (or scans directories for them), runs the
//! parser, and writes pretty-printed JSON records.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::scan_directory;
use crate::error::{MtfError, Result};
use crate::output::{plural, Printer};
use crate::parser::parse_mech;

/// Convert MTF stat blocks to structured JSON
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input .mtf files or directories to scan
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Output directory
    #[arg(long, short, default_value = "out")]
    pub output: PathBuf,

    /// Print JSON to stdout instead of writing files
    #[arg(long)]
    pub stdout: bool,
}

pub fn run(args: ConvertArgs) -> Result<()> {
    let printer = Printer::new();
    let files = collect_files(&args.paths);

    if files.is_empty() {
        printer.warning("Skipping", "no .mtf files found");
        return Ok(());
    }

    if !args.stdout && !args.output.exists() {
        fs::create_dir_all(&args.output).map_err(|e| MtfError::Io {
            path: args.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    for file in &files {
        convert_file(file, &args, &printer)?;
    }

    if !args.stdout {
        println!(
            "Converted {} to {}",
            plural(files.len(), "file", "files"),
            args.output.display()
        );
    }

    Ok(())
}

/// Expand the argument list: directories are scanned recursively for
/// `.mtf` files, explicit file paths are taken as-is.
fn collect_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            files.extend(scan_directory(path));
        } else {
            files.push(path.clone());
        }
    }

    files
}

/// Parse one stat-block file and emit its JSON record.
fn convert_file(path: &Path, args: &ConvertArgs, printer: &Printer) -> Result<()> {
    let source = fs::read_to_string(path).map_err(|e| MtfError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })?;

    let mech = parse_mech(&source);
    let json = serde_json::to_string_pretty(&mech)?;

    if args.stdout {
        println!("{}", json);
        return Ok(());
    }

    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unnamed.mtf");
    let output_path = args.output.join(json_filename(filename));

    fs::write(&output_path, json).map_err(|e| MtfError::Io {
        path: output_path.clone(),
        message: format!("Failed to write file: {}", e),
    })?;
    printer.status("Converting", &format!("{} -> {}", filename, output_path.display()));

    Ok(())
}

/// Derive the output filename from the input filename.
///
/// Every non-word character becomes `_`, then the first `_mtf` becomes
/// `.json`: `Atlas AS7-D.mtf` → `Atlas_AS7_D.json`.
pub fn json_filename(filename: &str) -> String {
    let safe: String = filename
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    safe.replacen("_mtf", ".json", 1)
}
