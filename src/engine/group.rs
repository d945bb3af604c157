// src/engine/group.rs
//
// Status grouping: the extraction pass of the board.
//
// Input is the flat card list from a RecordSource. Output is one group per
// board column, in status order, each holding its cards in encounter order.
// Empty groups never appear.

use std::collections::HashMap;

use super::filter::matches;
use super::status::{sort_statuses, status_rank};
use crate::model::{CardRecord, FilterCriteria};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusGroup {
    pub status: String,
    pub cards: Vec<CardRecord>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupedResult {
    groups: Vec<StatusGroup>,
}

impl GroupedResult {
    pub fn groups(&self) -> &[StatusGroup] { &self.groups }
    pub fn iter(&self) -> std::slice::Iter<'_, StatusGroup> { self.groups.iter() }
    pub fn is_empty(&self) -> bool { self.groups.is_empty() }

    /// Number of non-empty groups.
    pub fn len(&self) -> usize { self.groups.len() }

    pub fn card_count(&self) -> usize {
        self.groups.iter().map(|g| g.cards.len()).sum()
    }

    pub fn statuses(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.status.as_str()).collect()
    }

    pub fn get(&self, status: &str) -> Option<&[CardRecord]> {
        self.groups
            .iter()
            .find(|g| g.status == status)
            .map(|g| g.cards.as_slice())
    }

    /// All cards, group by group.
    pub fn all_cards(&self) -> Vec<CardRecord> {
        self.groups.iter().flat_map(|g| g.cards.iter().cloned()).collect()
    }
}

impl<'a> IntoIterator for &'a GroupedResult {
    type Item = &'a StatusGroup;
    type IntoIter = std::slice::Iter<'a, StatusGroup>;
    fn into_iter(self) -> Self::IntoIter { self.groups.iter() }
}

/// Group `cards` by status, keeping only statuses in `selected`.
pub fn group<S: AsRef<str>>(cards: &[CardRecord], selected: &[S]) -> GroupedResult {
    group_where(cards, selected, |_| true)
}

/// Filter + column gate + group, in one pass.
pub fn extract<S: AsRef<str>>(
    cards: &[CardRecord],
    criteria: &FilterCriteria,
    selected: &[S],
) -> GroupedResult {
    group_where(cards, selected, |c| matches(c, criteria))
}

fn group_where<S, F>(cards: &[CardRecord], selected: &[S], keep: F) -> GroupedResult
where
    S: AsRef<str>,
    F: Fn(&CardRecord) -> bool,
{
    let mut groups: Vec<StatusGroup> = Vec::new();
    let mut slot: HashMap<&str, usize> = HashMap::new();

    for card in cards {
        if !selected.iter().any(|s| s.as_ref() == card.status) || !keep(card) {
            continue;
        }
        let ix = *slot.entry(card.status.as_str()).or_insert_with(|| {
            groups.push(StatusGroup { status: card.status.clone(), cards: Vec::new() });
            groups.len() - 1
        });
        groups[ix].cards.push(card.clone());
    }

    // Stable: unknown statuses stay in encounter order.
    groups.sort_by_key(|g| status_rank(&g.status));
    GroupedResult { groups }
}

/// Distinct statuses present on the board, in status order.
pub fn column_names(cards: &[CardRecord]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for card in cards {
        if !card.status.is_empty() && !names.contains(&card.status) {
            names.push(card.status.clone());
        }
    }
    sort_statuses(&mut names);
    names
}

/// Distinct assignees, sorted. The default assignee sub-filter.
pub fn known_assignees(cards: &[CardRecord]) -> Vec<String> {
    let mut names: Vec<String> = cards.iter().map(|c| c.assigned_to.clone()).collect();
    names.sort();
    names.dedup();
    names
}
