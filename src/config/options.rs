// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::engine::sort::SortDirection;
use crate::model::RawFilters;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub filters: RawFilters,
    /// Board columns to extract. Empty means "nothing selected".
    pub selected_columns: Vec<String>,
    pub export: ExportOptions,
    pub sort: SortOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    /// Board snapshots (saved HTML of the board page).
    pub snapshots: Vec<PathBuf>,
    /// Prefix for rebuilt work item links; the numeric id is appended.
    pub link_base: String,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            snapshots: Vec::new(),
            link_base: s!(DEFAULT_LINK_BASE),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortOptions {
    /// Direction a column is assumed to be in before its first click.
    /// Clicking toggles away from it.
    pub resting: SortDirection,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self { resting: SortDirection::Descending }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Tsv,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// Final file path. A user-typed extension wins over the format's.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        let stem = self.out_path.file_stem.to_string_lossy();
        let ext = match &self.out_path.ext {
            Some(e) => e.to_string_lossy().into_owned(),
            None => s!(self.format.ext()),
        };
        path.push(join!(&*stem, ".", &ext));
        path
    }

    /// Parse a user path into dir + stem (+ explicit extension, if typed).
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.ext = p.extension().map(|e| e.to_os_string());
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString,
    ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}
