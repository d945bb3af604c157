// src/clipboard.rs
//
// Text put on the clipboard for spreadsheet paste. Plain tab-separated, no
// quoting: whitespace inside a cell is collapsed instead, so every card
// stays on one row.

use crate::core::sanitize::clean_cell;
use crate::engine::{CountTable, GroupedResult};
use crate::model::CardColumn;

/// All cards, group by group, one line each:
/// id, title, client, status, created, team, escalation. No header, no trailing newline.
pub fn grouped_to_tsv(grouped: &GroupedResult) -> String {
    grouped
        .iter()
        .flat_map(|g| g.cards.iter())
        .map(|card| {
            CardColumn::ALL
                .iter()
                .map(|&c| clean_cell(card.cell(c)))
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A two-column count table: header line, then `key\tcount` per entry,
/// highest count first. Every line ends with '\n'.
pub fn counts_to_tsv(key_header: &str, count_header: &str, table: &CountTable) -> String {
    let mut out = format!("{}\t{}\n", clean_cell(key_header), clean_cell(count_header));
    for (key, n) in table.sorted_by_count_desc() {
        out.push_str(&format!("{}\t{}\n", clean_cell(&key), n));
    }
    out
}
