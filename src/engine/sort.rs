// src/engine/sort.rs
//
// Click-to-sort for the card tables.
//
// Each cell is classed once, by the first rule it satisfies:
//   1. a DD/MM/YYYY date      -> chronological
//   2. starts with a number   -> numeric ("1,5" reads as 1.5)
//   3. anything else          -> natural text order (digit runs by value,
//                                accents and case only break ties)
// Cells of the same class compare by value. Across classes, dates come before
// numbers and numbers before text, so a mixed column still sorts totally.

use std::cmp::Ordering;

use super::date::{parse_date, BoardDate};
use crate::model::{CardColumn, CardRecord};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }

    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum CellKey<'a> {
    Date(BoardDate),
    Number(f64),
    Text(&'a str),
}

impl<'a> CellKey<'a> {
    fn of(cell: &'a str) -> Self {
        let cell = cell.trim();
        if let Some(d) = parse_date(cell) {
            CellKey::Date(d)
        } else if let Some(n) = parse_number(cell) {
            CellKey::Number(n)
        } else {
            CellKey::Text(cell)
        }
    }

    fn rank(&self) -> u8 {
        match self {
            CellKey::Date(_) => 0,
            CellKey::Number(_) => 1,
            CellKey::Text(_) => 2,
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CellKey::Date(a), CellKey::Date(b)) => a.cmp(b),
            (CellKey::Number(a), CellKey::Number(b)) => a.total_cmp(b),
            (CellKey::Text(a), CellKey::Text(b)) => natural_cmp(a, b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Compare two displayed cell values.
pub fn compare_cells(a: &str, b: &str, dir: SortDirection) -> Ordering {
    dir.apply(CellKey::of(a).compare(&CellKey::of(b)))
}

/// Stable sort of a card table by one column.
pub fn sort_cards(cards: &mut [CardRecord], col: CardColumn, dir: SortDirection) {
    sort_cards_by(cards, col, dir, |c| c);
}

/// `sort_cards` for rows that carry a card alongside other data.
pub fn sort_cards_by<T, F>(rows: &mut [T], col: CardColumn, dir: SortDirection, card: F)
where
    F: Fn(&T) -> &CardRecord,
{
    rows.sort_by(|x, y| compare_cells(card(x).cell(col), card(y).cell(col), dir));
}

/// Stable sort of plain text rows by column index. Missing cells read as "".
pub fn sort_rows(rows: &mut [Vec<String>], col: usize, dir: SortDirection) {
    rows.sort_by(|x, y| {
        let a = x.get(col).map(String::as_str).unwrap_or("");
        let b = y.get(col).map(String::as_str).unwrap_or("");
        compare_cells(a, b, dir)
    });
}

/// Which column of one table is sorted, and how.
///
/// Only one column is active at a time. Clicking a column flips it away from
/// its current direction; a column that isn't active is taken to be in the
/// resting direction, so with the default (`Descending`) the first click
/// sorts ascending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColumnSort {
    active: Option<(usize, SortDirection)>,
    resting: SortDirection,
}

impl ColumnSort {
    pub fn new(resting: SortDirection) -> Self {
        Self { active: None, resting }
    }

    /// Register a header click; returns the direction to sort by.
    pub fn click(&mut self, col: usize) -> SortDirection {
        let current = match self.active {
            Some((c, d)) if c == col => d,
            _ => self.resting,
        };
        let next = current.toggled();
        self.active = Some((col, next));
        next
    }

    /// Direction shown on `col`'s header, if it's the active one.
    pub fn indicator(&self, col: usize) -> Option<SortDirection> {
        match self.active {
            Some((c, d)) if c == col => Some(d),
            _ => None,
        }
    }

    pub fn active(&self) -> Option<(usize, SortDirection)> {
        self.active
    }

    pub fn reset(&mut self) {
        self.active = None;
    }
}

/// Leading decimal number, after turning the first ',' into '.'.
/// Trailing junk is ignored ("12 dias" reads as 12); no leading digits → None.
pub fn parse_number(s: &str) -> Option<f64> {
    let s = s.replacen(',', ".", 1);
    let t = s.trim_start();
    let b = t.as_bytes();
    let mut i = 0;

    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }
    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;
    let mut frac_digits = 0;
    if i < b.len() && b[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        frac_digits = j - frac_start;
        if frac_digits > 0 {
            i = j;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }
    // Optional exponent, only if it has digits.
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    // "-.5" / ".5": give the mantissa an integer part before parsing.
    let num = &t[..i];
    let sign_len = int_start;
    if int_digits == 0 {
        join!(&num[..sign_len], "0", &num[sign_len..]).parse::<f64>().ok()
    } else {
        num.parse::<f64>().ok()
    }
}

/// Natural order: digit runs compare by value, text compares accent- and
/// case-insensitively first; accents, then case, then raw text break ties.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let primary = cmp_chunks(a, b, |c| fold_accent(c).to_lowercase().next().unwrap_or(c));
    if primary != Ordering::Equal {
        return primary;
    }
    // Unaccented before accented.
    let accents = cmp_chunks(a, b, |c| c.to_lowercase().next().unwrap_or(c));
    if accents != Ordering::Equal {
        return accents;
    }
    // Lowercase before uppercase.
    let case = cmp_chunks(a, b, swap_case);
    if case != Ordering::Equal {
        return case;
    }
    a.cmp(b)
}

fn cmp_chunks(a: &str, b: &str, key: impl Fn(char) -> char) -> Ordering {
    let mut ia = a.chars().peekable();
    let mut ib = b.chars().peekable();
    loop {
        match (ia.peek().copied(), ib.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ca), Some(cb)) if ca.is_ascii_digit() && cb.is_ascii_digit() => {
                let na = take_digits(&mut ia);
                let nb = take_digits(&mut ib);
                let ord = cmp_digit_runs(&na, &nb);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(ca), Some(cb)) => {
                ia.next();
                ib.next();
                let ord = char_class(ca)
                    .cmp(&char_class(cb))
                    .then_with(|| key(ca).cmp(&key(cb)));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

fn take_digits(it: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut out = s!();
    while let Some(&c) = it.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        out.push(c);
        it.next();
    }
    out
}

fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let ta = a.trim_start_matches('0');
    let tb = b.trim_start_matches('0');
    ta.len()
        .cmp(&tb.len())
        .then_with(|| ta.cmp(tb))
        .then_with(|| a.len().cmp(&b.len()))
}

// Collation buckets: whitespace < punctuation/symbols < digits < letters.
fn char_class(c: char) -> u8 {
    if c.is_whitespace() {
        0
    } else if c.is_ascii_digit() {
        2
    } else if c.is_alphabetic() {
        3
    } else {
        1
    }
}

fn swap_case(c: char) -> char {
    if c.is_lowercase() {
        c.to_uppercase().next().unwrap_or(c)
    } else {
        c.to_lowercase().next().unwrap_or(c)
    }
}

/// Strip the diacritics used in Portuguese/Spanish names and words.
fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'ç' => 'c',
        'Ç' => 'C',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'ý' | 'ÿ' => 'y',
        'Ý' => 'Y',
        _ => c,
    }
}
