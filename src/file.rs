// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::core::net;
use crate::csv::{rows_to_string, write_row};

/// Read the CSV text from a local path or a plain http:// URL.
pub fn read_source(source: &str) -> Result<String, Box<dyn std::error::Error>> {
    let source = source.trim();
    if source.is_empty() {
        return Err("No source given".into());
    }
    if net::is_http(source) {
        logf!("Source: GET {}", source);
        return net::http_get(source);
    }
    let path = PathBuf::from(normalize_separators(source));
    fs::read_to_string(&path)
        .map_err(|e| format!("Could not read {}: {}", path.display(), e).into())
}

/// Write the filtered rows as CSV/TSV, to `export.out_path` or stdout.
/// Returns the path written, if any.
pub fn write_export(
    export: &ExportOptions,
    headers: &[String],
    rows: &[Vec<String>],
) -> Result<Option<PathBuf>, Box<dyn std::error::Error>> {
    let sep = export.format.delim().ok_or("Export format has no delimiter")?;
    let headers = export.include_headers.then_some(headers);

    match &export.out_path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    ensure_directory(parent)?;
                }
            }
            let mut out = BufWriter::new(File::create(path)?); // truncate/overwrite
            if let Some(h) = headers {
                write_row(&mut out, h, sep)?;
            }
            for row in rows {
                write_row(&mut out, row, sep)?;
            }
            out.flush()?;
            Ok(Some(path.clone()))
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(rows_to_string(headers, rows, sep).as_bytes())?;
            lock.flush()?;
            Ok(None)
        }
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
