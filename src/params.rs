// src/params.rs
use crate::config::options::AppOptions;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    pub options: AppOptions,     // snapshots, filters, export settings
    pub columns_given: bool,     // --columns seen; otherwise every column present is extracted
    pub list_columns: bool,      // print board columns then exit
    pub assignees: Option<Vec<String>>, // insights sub-filter; None = everyone present
    pub insights: bool,          // print count tables instead of cards
    pub write_file: bool,        // --out given: export to file instead of stdout
    pub last_filters: bool,      // start from .store/last_filters.csv
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }
}
