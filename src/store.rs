// src/store.rs
//
// Small CSV cache under `.store/`: the last filter inputs and the last
// extraction. Both are best-effort; a missing file loads as "nothing saved".
use std::{error::Error, fs, path::Path};

use crate::config::consts::{CARDS_FILE, FILTERS_FILE, STORE_DIR, STORE_SEP, TAG_SEP};
use crate::csv::{parse_rows, rows_to_string, write_row};
use crate::file::write_text;
use crate::model::{CardRecord, RawFilters};

const CARD_FIELDS: usize = 11;

/* ---------------- Filters ---------------- */

pub fn save_filters(filters: &RawFilters) -> Result<(), Box<dyn Error>> {
    save_filters_in(Path::new(STORE_DIR), filters)
}

pub fn load_filters() -> Option<RawFilters> {
    load_filters_in(Path::new(STORE_DIR))
}

/// `key,value` per field, all five fields, even when empty.
pub fn save_filters_in(dir: &Path, filters: &RawFilters) -> Result<(), Box<dyn Error>> {
    let rows: Vec<Vec<String>> = filters
        .pairs()
        .iter()
        .map(|(k, v)| vec![s!(*k), s!(*v)])
        .collect();
    write_text(&dir.join(FILTERS_FILE), &rows_to_string(None, &rows, STORE_SEP))?;
    logd!("Store: saved filters to {}", dir.display());
    Ok(())
}

pub fn load_filters_in(dir: &Path) -> Option<RawFilters> {
    let text = fs::read_to_string(dir.join(FILTERS_FILE)).ok()?;
    let mut filters = RawFilters::default();
    for row in parse_rows(&text, STORE_SEP) {
        if let [key, value, ..] = row.as_slice() {
            filters.set(key, value);
        }
    }
    Some(filters)
}

/* ---------------- Last extraction ---------------- */

pub fn save_cards(cards: &[CardRecord]) -> Result<(), Box<dyn Error>> {
    save_cards_in(Path::new(STORE_DIR), cards)
}

pub fn load_cards() -> Result<Vec<CardRecord>, Box<dyn Error>> {
    load_cards_in(Path::new(STORE_DIR))
}

pub fn save_cards_in(dir: &Path, cards: &[CardRecord]) -> Result<(), Box<dyn Error>> {
    let rows: Vec<Vec<String>> = cards.iter().map(card_to_row).collect();
    write_text(&dir.join(CARDS_FILE), &rows_to_string(None, &rows, STORE_SEP))?;
    logd!("Store: saved {} card(s) to {}", cards.len(), dir.display());
    Ok(())
}

/// Nothing saved yet → empty list. Rows with too few fields are skipped.
pub fn load_cards_in(dir: &Path) -> Result<Vec<CardRecord>, Box<dyn Error>> {
    let path = dir.join(CARDS_FILE);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let text = fs::read_to_string(&path)?;
    let rows = parse_rows(&text, STORE_SEP);
    let total = rows.len();
    let cards: Vec<CardRecord> = rows.into_iter().filter_map(row_to_card).collect();
    if cards.len() != total {
        loge!("Store: skipped {} malformed row(s) in {}", total - cards.len(), path.display());
    }
    Ok(cards)
}

fn card_to_row(c: &CardRecord) -> Vec<String> {
    vec![
        c.id.clone(),
        c.title.clone(),
        c.link.clone(),
        c.client.clone(),
        c.status.clone(),
        c.created_date.clone(),
        c.team.clone(),
        c.assigned_to.clone(),
        c.escalation_date.clone(),
        c.effort.clone(),
        encode_tags(&c.tags),
    ]
}

fn row_to_card(row: Vec<String>) -> Option<CardRecord> {
    if row.len() < CARD_FIELDS {
        return None;
    }
    let mut it = row.into_iter();
    let mut next = || it.next().unwrap_or_default();
    Some(CardRecord {
        id: next(),
        title: next(),
        link: next(),
        client: next(),
        status: next(),
        created_date: next(),
        team: next(),
        assigned_to: next(),
        escalation_date: next(),
        effort: next(),
        tags: decode_tags(&next()),
    })
}

// Tags share one cache field: `;`-separated, quoted like any CSV field.
fn encode_tags(tags: &[String]) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_row(&mut buf, tags, TAG_SEP);
    let mut text = String::from_utf8_lossy(&buf).into_owned();
    if text.ends_with('\n') {
        text.pop();
    }
    text
}

fn decode_tags(field: &str) -> Vec<String> {
    parse_rows(field, TAG_SEP)
        .into_iter()
        .next()
        .unwrap_or_default()
        .into_iter()
        .map(|t| s!(t.trim()))
        .filter(|t| !t.is_empty())
        .collect()
}
