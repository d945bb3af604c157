// src/specs/board.rs
//
// Azure DevOps board page (saved HTML) → CardRecord list.
//
// Shape of a card on the page (only what we read):
//   <div class="wit-card ..." aria-label="..., Column Em progresso">
//     <span class="font-weight-semibold selectable-text">1234</span>
//     <a class="bolt-link" href=".../_workitems/edit/1234">..</a>
//     <div class="title-text word-break">Title</div>
//     <div class="field-container">
//       <div class="label text-ellipsis">Cliente</div>
//       <div><span class="text-ellipsis">ACME</span></div>
//     </div>
//     <div class="card-assigned-to"><div class="identity-display-name"><span>Ana</span></div></div>
//     <div class="tags-list"><div class="bolt-pill-content">urgente</div>..</div>
//   </div>

use std::error::Error;
use std::fs;
use std::path::Path;

use super::RecordSource;
use crate::config::consts::*;
use crate::core::html::{self, find_all_by_classes, find_by_classes, find_by_tag, inner_text};
use crate::core::sanitize::trailing_digits;
use crate::model::CardRecord;

const CARD_CLASS: &[&str] = &["wit-card"];
const ID_CLASSES: &[&str] = &["font-weight-semibold", "selectable-text"];
const TITLE_CLASSES: &[&str] = &["title-text", "word-break"];
const LABEL_CLASSES: &[&str] = &["label", "text-ellipsis"];
const VALUE_CLASSES: &[&str] = &["text-ellipsis"];
const FIELD_CLASSES: &[&str] = &["field-container"];
const ASSIGNED_CLASSES: &[&str] = &["card-assigned-to"];
const IDENTITY_CLASSES: &[&str] = &["identity-display-name"];
const TAGS_CLASSES: &[&str] = &["tags-list"];
const TAG_PILL_CLASSES: &[&str] = &["bolt-pill-content"];
const LINK_CLASSES: &[&str] = &["bolt-link"];
const COLUMN_MARK: &str = ", Column ";

/// One parsed board page.
#[derive(Clone, Debug, Default)]
pub struct BoardSnapshot {
    cards: Vec<CardRecord>,
}

impl BoardSnapshot {
    /// Parse a board page. Cards without a column label are skipped.
    pub fn parse(html_doc: &str, link_base: &str) -> Self {
        let cards = find_all_by_classes(html_doc, CARD_CLASS)
            .into_iter()
            .filter_map(|(s, e)| parse_card(&html_doc[s..e], link_base))
            .collect();
        Self { cards }
    }

    pub fn load(path: &Path, link_base: &str) -> Result<Self, Box<dyn Error>> {
        let bytes = fs::read(path)?;
        let doc = String::from_utf8_lossy(&bytes);
        if !doc.contains("wit-card") {
            return Err(format!("No board cards found in {}", path.display()).into());
        }
        Ok(Self::parse(&doc, link_base))
    }

    pub fn into_cards(self) -> Vec<CardRecord> {
        self.cards
    }
}

impl RecordSource for BoardSnapshot {
    fn cards(&self) -> &[CardRecord] {
        &self.cards
    }
}

fn parse_card(block: &str, link_base: &str) -> Option<CardRecord> {
    let (_, open_end) = html::next_open_tag(block, 0)?;
    let status = column_name(&block[..open_end])?;

    Some(CardRecord {
        id: text_of(block, ID_CLASSES),
        title: text_of(block, TITLE_CLASSES),
        link: card_link(block, link_base),
        client: field_value(block, LABEL_CLIENT),
        status,
        created_date: field_value(block, LABEL_CREATED),
        team: field_value(block, LABEL_TEAM),
        assigned_to: assigned_to(block),
        escalation_date: field_value(block, LABEL_ESCALATION),
        effort: field_value(block, LABEL_EFFORT),
        tags: tags(block),
    })
}

/// Column from the card's aria-label: "..., Column <name>".
pub fn column_name(open_tag: &str) -> Option<String> {
    let label = html::attr_value(open_tag, "aria-label")?;
    let at = label.find(COLUMN_MARK)?;
    let name = label[at + COLUMN_MARK.len()..].trim();
    if name.is_empty() { None } else { Some(s!(name)) }
}

fn text_of(block: &str, classes: &[&str]) -> String {
    find_by_classes(block, 0, classes)
        .map(|(s, e)| inner_text(&block[s..e]))
        .unwrap_or_default()
}

/// Value of a labelled field: the first `.text-ellipsis` after a label whose
/// text starts with `label` (case-insensitive). Missing → "".
pub fn field_value(block: &str, label: &str) -> String {
    let want = label.to_lowercase();
    for (fs, fe) in find_all_by_classes(block, FIELD_CLASSES) {
        let field = &block[fs..fe];
        let Some((ls, le)) = find_by_classes(field, 0, LABEL_CLASSES) else { continue };
        if !inner_text(&field[ls..le]).to_lowercase().starts_with(&want) {
            continue;
        }
        return find_by_classes(field, le, VALUE_CLASSES)
            .map(|(vs, ve)| inner_text(&field[vs..ve]))
            .unwrap_or_default();
    }
    s!()
}

fn assigned_to(block: &str) -> String {
    let name = find_by_classes(block, 0, ASSIGNED_CLASSES)
        .map(|(s, e)| &block[s..e])
        .and_then(|assigned| {
            let (is, ie) = find_by_classes(assigned, 0, IDENTITY_CLASSES)?;
            let identity = &assigned[is..ie];
            // Skip the identity element's own opening tag.
            let (_, open_end) = html::next_open_tag(identity, 0)?;
            let (ss, se) = find_by_tag(identity, open_end, "span")?;
            Some(inner_text(&identity[ss..se]))
        })
        .unwrap_or_default();
    if name.is_empty() { s!(UNASSIGNED) } else { name }
}

fn tags(block: &str) -> Vec<String> {
    let Some((ts, te)) = find_by_classes(block, 0, TAGS_CLASSES) else { return Vec::new() };
    let list = &block[ts..te];
    find_all_by_classes(list, TAG_PILL_CLASSES)
        .into_iter()
        .map(|(s, e)| inner_text(&list[s..e]))
        .filter(|t| !t.is_empty())
        .collect()
}

/// Work item link rebuilt from the trailing id in the first `a.bolt-link`.
fn card_link(block: &str, link_base: &str) -> String {
    let mut pos = 0usize;
    while let Some((s, e)) = find_by_classes(block, pos, LINK_CLASSES) {
        let (_, open_end) = html::next_open_tag(&block[s..e], 0).unwrap_or((0, e - s));
        let open_tag = &block[s..s + open_end];
        if html::tag_name(open_tag) == "a" {
            return html::attr_value(open_tag, "href")
                .as_deref()
                .and_then(trailing_digits)
                .map(|id| join!(link_base, id))
                .unwrap_or_else(|| s!(NO_LINK));
        }
        pos = e.max(s + 1);
    }
    s!(NO_LINK)
}
