// src/engine/filter.rs
use crate::model::{CardRecord, FilterCriteria};

/// Does `card` satisfy every set criterion?
///
/// Text criteria are case-insensitive substring tests; `tags` needs every
/// token to be one of the card's tags (exact, case-insensitive). An empty
/// card field never contains a non-empty needle.
pub fn matches(card: &CardRecord, criteria: &FilterCriteria) -> bool {
    contains_ci(&card.assigned_to, criteria.name.as_deref())
        && contains_ci(&card.client, criteria.client.as_deref())
        && contains_ci(&card.id, criteria.id.as_deref())
        && contains_ci(&card.effort, criteria.effort.as_deref())
        && has_all_tags(&card.tags, &criteria.tags)
}

/// `needle` is already lower-cased (see `FilterCriteria::from_raw`).
fn contains_ci(field: &str, needle: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(n) => field.to_lowercase().contains(n),
    }
}

fn has_all_tags(card_tags: &[String], wanted: &[String]) -> bool {
    if wanted.is_empty() {
        return true;
    }
    let have: Vec<String> = card_tags.iter().map(|t| t.trim().to_lowercase()).collect();
    wanted.iter().all(|w| have.iter().any(|h| h == w))
}
