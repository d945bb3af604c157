// src/file.rs

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::CARD_HEADERS;
use crate::config::options::ExportOptions;
use crate::csv::rows_to_string;
use crate::engine::GroupedResult;

/// Export string for the grouped cards (headers per options, CSV/TSV quoting).
pub fn cards_export_string(export: &ExportOptions, grouped: &GroupedResult) -> String {
    let headers = owned!(CARD_HEADERS);
    let rows: Vec<Vec<String>> = grouped
        .iter()
        .flat_map(|g| g.cards.iter().map(|c| c.to_row()))
        .collect();
    let headers = export.include_headers.then_some(headers.as_slice());
    rows_to_string(headers, &rows, export.delim())
}

/// Write the grouped cards to `export.out_path()`. Returns the path written.
pub fn write_cards_export(
    export: &ExportOptions,
    grouped: &GroupedResult,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = export.out_path();
    write_text(&path, &cards_export_string(export, grouped))?;
    Ok(path)
}

/// Create parent directories as needed, then write (truncate) `path`.
pub fn write_text(path: &Path, contents: &str) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
