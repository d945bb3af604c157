// src/model.rs
//
// Card records as read off the board, plus the filter inputs that select them.
//
// - CardRecord: one board card. Built once by a RecordSource, never mutated.
// - RawFilters: the five filter text boxes exactly as typed (persisted as-is).
// - FilterCriteria: RawFilters normalized once (trimmed, lower-cased, tags split).

use crate::config::consts::{CARD_HEADERS, NO_LINK, UNASSIGNED};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardRecord {
    pub id: String,
    pub title: String,
    /// Absolute work item URL, or "#" when it could not be resolved.
    pub link: String,
    pub client: String,
    /// Board column at read time; the grouping key.
    pub status: String,
    /// DD/MM/YYYY or empty.
    pub created_date: String,
    pub team: String,
    /// Display name, or "Não Atribuído".
    pub assigned_to: String,
    /// DD/MM/YYYY or empty.
    pub escalation_date: String,
    /// Estimated effort field; only used for filtering.
    pub effort: String,
    /// Tag pills on the card; only used for filtering.
    pub tags: Vec<String>,
}

impl Default for CardRecord {
    fn default() -> Self {
        Self {
            id: s!(),
            title: s!(),
            link: s!(NO_LINK),
            client: s!(),
            status: s!(),
            created_date: s!(),
            team: s!(),
            assigned_to: s!(UNASSIGNED),
            escalation_date: s!(),
            effort: s!(),
            tags: Vec::new(),
        }
    }
}

impl CardRecord {
    /// Shorthand for tests and fixtures.
    pub fn new(id: &str, status: &str) -> Self {
        Self { id: s!(id), status: s!(status), ..Self::default() }
    }

    pub fn has_link(&self) -> bool {
        !self.link.is_empty() && self.link != NO_LINK
    }

    pub fn cell(&self, col: CardColumn) -> &str {
        match col {
            CardColumn::Id => &self.id,
            CardColumn::Title => &self.title,
            CardColumn::Client => &self.client,
            CardColumn::Status => &self.status,
            CardColumn::CreatedDate => &self.created_date,
            CardColumn::Team => &self.team,
            CardColumn::EscalationDate => &self.escalation_date,
        }
    }

    /// The card as a table/copy row, in `CardColumn::ALL` order.
    pub fn to_row(&self) -> Vec<String> {
        CardColumn::ALL.iter().map(|&c| s!(self.cell(c))).collect()
    }
}

/// The visible table columns. Order is fixed: spreadsheet paste relies on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardColumn {
    Id,
    Title,
    Client,
    Status,
    CreatedDate,
    Team,
    EscalationDate,
}

impl CardColumn {
    pub const ALL: [CardColumn; 7] = [
        CardColumn::Id,
        CardColumn::Title,
        CardColumn::Client,
        CardColumn::Status,
        CardColumn::CreatedDate,
        CardColumn::Team,
        CardColumn::EscalationDate,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&c| c == self).unwrap_or(0)
    }

    pub fn header(self) -> &'static str {
        CARD_HEADERS[self.index()]
    }
}

/// Filter text boxes, untouched. Empty string = unset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawFilters {
    pub name: String,
    pub client: String,
    pub id: String,
    pub tags: String,
    pub effort: String,
}

impl RawFilters {
    /// Field name/value pairs, in persistence order.
    pub fn pairs(&self) -> [(&'static str, &str); 5] {
        [
            ("name", &self.name),
            ("client", &self.client),
            ("id", &self.id),
            ("tags", &self.tags),
            ("effort", &self.effort),
        ]
    }

    /// Set a field by its persisted name. Unknown names are ignored.
    pub fn set(&mut self, key: &str, value: &str) {
        let slot = match key {
            "name" => &mut self.name,
            "client" => &mut self.client,
            "id" => &mut self.id,
            "tags" => &mut self.tags,
            "effort" => &mut self.effort,
            _ => return,
        };
        *slot = s!(value);
    }
}

/// Normalized filter criteria. `None` / empty `tags` means unset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub name: Option<String>,
    pub client: Option<String>,
    pub id: Option<String>,
    pub effort: Option<String>,
    /// Lower-cased, trimmed, non-empty tokens. All must be present.
    pub tags: Vec<String>,
}

impl FilterCriteria {
    pub fn from_raw(raw: &RawFilters) -> Self {
        Self {
            name: needle(&raw.name),
            client: needle(&raw.client),
            id: needle(&raw.id),
            effort: needle(&raw.effort),
            tags: raw
                .tags
                .split(',')
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    pub fn is_unset(&self) -> bool {
        self.name.is_none()
            && self.client.is_none()
            && self.id.is_none()
            && self.effort.is_none()
            && self.tags.is_empty()
    }
}

impl From<&RawFilters> for FilterCriteria {
    fn from(raw: &RawFilters) -> Self {
        Self::from_raw(raw)
    }
}

fn needle(s: &str) -> Option<String> {
    let t = s.trim();
    if t.is_empty() { None } else { Some(t.to_lowercase()) }
}
