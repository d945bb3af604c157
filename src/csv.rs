// src/csv.rs
//
// CSV/TSV for exports and the .store cache. Fields holding the separator,
// a quote or a line break are quoted; quotes inside are doubled.
use std::borrow::Cow;
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Reading ---------------- */

#[derive(Default)]
struct Rows {
    done: Vec<Vec<String>>,
    row: Vec<String>,
    field: String,
}

impl Rows {
    fn end_field(&mut self) {
        self.row.push(take(&mut self.field));
    }

    // A line holding a single empty field is a blank line, not a row.
    fn end_row(&mut self) {
        self.end_field();
        let row = take(&mut self.row);
        if !(row.len() == 1 && row[0].is_empty()) {
            self.done.push(row);
        }
    }
}

/// Quote-aware split into rows and fields. Accepts LF, CRLF and lone CR;
/// an unterminated quote runs to the end of the text.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut acc = Rows::default();
    let mut quoted = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if quoted {
            match ch {
                '"' if chars.next_if_eq(&'"').is_some() => acc.field.push('"'),
                '"' => quoted = false,
                _ => acc.field.push(ch),
            }
            continue;
        }
        match ch {
            '"' => quoted = true,
            '\r' => {
                chars.next_if_eq(&'\n');
                acc.end_row();
            }
            '\n' => acc.end_row(),
            c if c == sep => acc.end_field(),
            _ => acc.field.push(ch),
        }
    }

    if !acc.field.is_empty() || !acc.row.is_empty() {
        acc.end_row();
    }
    acc.done
}

/* ---------------- Writing ---------------- */

fn quote(field: &str, sep: char) -> Cow<'_, str> {
    if field.contains([sep, '"', '\n', '\r']) {
        Cow::Owned(join!("\"", &field.replace('"', "\"\""), "\""))
    } else {
        Cow::Borrowed(field)
    }
}

/// One row, newline-terminated.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{sep}")?;
        }
        w.write_all(quote(cell.as_ref(), sep).as_bytes())?;
    }
    writeln!(w)
}

/// Optional header row, then every row, as one string.
pub fn rows_to_string(headers: Option<&[String]>, rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    // Writing into a Vec cannot fail.
    for row in headers.into_iter().chain(rows.iter().map(Vec::as_slice)) {
        let _ = write_row(&mut buf, row, sep);
    }
    String::from_utf8(buf).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}
