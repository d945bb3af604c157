// src/engine/aggregate.rs
//
// Insights over an extraction: tallies by status, assignee, client and day.
//
// Everything here is recomputed from scratch for each assignee sub-filter;
// nothing is patched in place.

use std::collections::HashSet;

use super::date::parse_date;
use super::status::status_rank;
use crate::config::consts::{CLIENT_NOT_INFORMED, ESCALATED_STATUS};
use crate::model::CardRecord;

/// Ordered `key -> count` tally. Keys appear in first-seen order unless the
/// owner reorders them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountTable {
    entries: Vec<(String, usize)>,
}

impl CountTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, n)) => *n += 1,
            None => self.entries.push((s!(key), 1)),
        }
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, n)| *n)
    }

    pub fn entries(&self) -> &[(String, usize)] { &self.entries }
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|(k, _)| k.as_str()).collect()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Highest count first; equal counts keep their current order.
    pub fn sorted_by_count_desc(&self) -> Vec<(String, usize)> {
        let mut v = self.entries.clone();
        v.sort_by(|a, b| b.1.cmp(&a.1));
        v
    }

    /// Stable reorder by a key rank.
    fn sort_by_rank<K: Ord>(&mut self, rank: impl Fn(&str) -> K) {
        self.entries.sort_by_key(|(k, _)| rank(k.as_str()));
    }
}

/// Per-day tally. `days` holds only keys that parse as dates, oldest first;
/// non-empty keys that don't parse are counted in `undated`, in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DayCounts {
    pub days: CountTable,
    pub undated: CountTable,
}

impl DayCounts {
    fn from_keys<'a>(keys: impl Iterator<Item = &'a str>) -> Self {
        let mut days = CountTable::new();
        let mut undated = CountTable::new();
        for key in keys.filter(|k| !k.is_empty()) {
            if parse_date(key).is_some() {
                days.add(key);
            } else {
                undated.add(key);
            }
        }
        // Every key in `days` parses, so the fallback rank is never used.
        days.sort_by_rank(|k| parse_date(k).map(|d| d.days()).unwrap_or(i64::MAX));
        Self { days, undated }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty() && self.undated.is_empty()
    }
}

/// The aggregate views behind the insights window.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Insights {
    /// Cards that passed the assignee sub-filter.
    pub card_count: usize,
    pub status_counts: CountTable,
    pub assignee_counts: CountTable,
    pub client_counts: CountTable,
    pub created_by_day: DayCounts,
    pub escalated_by_day: DayCounts,
}

impl Insights {
    /// Nothing to chart: the caller shows an empty-state message instead.
    pub fn is_empty(&self) -> bool {
        self.card_count == 0
    }

    /// "Top responsible parties": assignees by count, highest first.
    pub fn top_assignees(&self) -> Vec<(String, usize)> {
        self.assignee_counts.sorted_by_count_desc()
    }
}

/// Build every aggregate view for the cards assigned to someone in `assignees`.
pub fn aggregate<S: AsRef<str>>(cards: &[CardRecord], assignees: &[S]) -> Insights {
    let picked: Vec<&CardRecord> = {
        let wanted: HashSet<&str> = assignees.iter().map(|a| a.as_ref()).collect();
        cards
            .iter()
            .filter(|c| wanted.contains(c.assigned_to.as_str()))
            .collect()
    };

    let mut out = Insights { card_count: picked.len(), ..Insights::default() };
    if picked.is_empty() {
        return out;
    }

    for card in &picked {
        out.status_counts.add(&card.status);
        out.assignee_counts.add(&card.assigned_to);
        let client = if card.client.is_empty() { CLIENT_NOT_INFORMED } else { card.client.as_str() };
        out.client_counts.add(client);
    }
    out.status_counts.sort_by_rank(status_rank);

    out.created_by_day = DayCounts::from_keys(picked.iter().map(|c| c.created_date.as_str()));
    out.escalated_by_day = DayCounts::from_keys(
        picked
            .iter()
            .filter(|c| c.status == ESCALATED_STATUS)
            .map(|c| c.escalation_date.as_str()),
    );

    out
}
