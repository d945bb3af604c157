// src/specs/mod.rs
//! # Record sources
//!
//! Everything that knows how cards look *on the page* lives here; the engine
//! only ever sees finished `CardRecord` values.
//!
//! ## What lives here
//! - **Page-specific extraction** for the board (`board`): which element is a
//!   card, where its column, id, labelled fields, assignee and tags live, and
//!   how the work item link is rebuilt.
//! - **Tolerant scanning** on top of `core::html` (class matching, nesting-aware
//!   element ends, entity/whitespace cleanup).
//!
//! ## What does **not** live here
//! - Filtering, grouping, sorting or aggregation (`engine`).
//! - Caching (`store`) and presentation (`gui`, `runner`).
//!
//! ## Conventions
//! - Missing fields read as `""`; a missing assignee is `"Não Atribuído"`, an
//!   unresolvable link is `"#"`. Extraction never fails on a malformed card;
//!   a card without a column label is skipped.
//! - Specs are testable offline against inline HTML fixtures.
pub mod board;

use crate::engine;
use crate::model::CardRecord;

/// Anything that can hand over already-read cards.
pub trait RecordSource {
    fn cards(&self) -> &[CardRecord];

    /// Board columns present, in status order.
    fn column_names(&self) -> Vec<String> {
        engine::column_names(self.cards())
    }
}

impl RecordSource for Vec<CardRecord> {
    fn cards(&self) -> &[CardRecord] {
        self
    }
}

pub use board::BoardSnapshot;
