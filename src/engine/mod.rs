// src/engine/mod.rs
//! # Card pipeline
//!
//! Pure functions from already-read card records to what the frontends show.
//! Nothing in here does I/O or logs; every call runs to completion on the
//! caller's thread and returns fresh values.
//!
//! ```text
//! RecordSource → [CardRecord] ─ extract(criteria, columns) → GroupedResult → tables / copy
//!                                     │
//!                                     └─ aggregate(assignees) → Insights → charts / count tables
//! ```
//!
//! - `status`: fixed board column order (unknown columns last, stable).
//! - `date`: DD/MM/YYYY parsing with lenient roll-over.
//! - `filter`: one card vs. the filter criteria.
//! - `group`: column gate + filter + status grouping.
//! - `aggregate`: tallies for the insights window.
//! - `sort`: click-to-sort comparator and the active-column state.

pub mod aggregate;
pub mod date;
pub mod filter;
pub mod group;
pub mod sort;
pub mod status;

pub use aggregate::{aggregate, CountTable, DayCounts, Insights};
pub use date::{parse_date, BoardDate};
pub use filter::matches;
pub use group::{column_names, extract, group, known_assignees, GroupedResult, StatusGroup};
pub use sort::{compare_cells, sort_cards, sort_cards_by, ColumnSort, SortDirection};
pub use status::{cmp_status, sort_statuses, status_rank};
