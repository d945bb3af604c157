// src/engine/date.rs
//
// Board dates are plain text in DD/MM/YYYY. Only that exact shape parses.
// Day and month are not range-checked: they roll over like a lenient
// calendar constructor would (32/13/2024 -> 01/02/2025, 00/01/2024 -> 31/12/2023).

use std::fmt;

/// A parsed board date: days since 1970-01-01.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardDate(i64);

impl BoardDate {
    pub fn days(self) -> i64 {
        self.0
    }

    /// Normalized (year, month 1..=12, day 1..=31).
    pub fn ymd(self) -> (i64, u32, u32) {
        civil_from_days(self.0)
    }
}

impl fmt::Display for BoardDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{d:02}/{m:02}/{y:04}")
    }
}

/// `Some` only for two ASCII digits, '/', two ASCII digits, '/', four ASCII digits.
pub fn parse_date(s: &str) -> Option<BoardDate> {
    let b = s.as_bytes();
    if b.len() != 10 || b[2] != b'/' || b[5] != b'/' {
        return None;
    }
    let day = digits(&b[0..2])?;
    let month = digits(&b[3..5])?;
    let year = digits(&b[6..10])?;

    // Month 0 and 13+ spill into the neighbouring years.
    let months = year * 12 + (month - 1);
    let (y, m0) = (months.div_euclid(12), months.rem_euclid(12));
    let first_of_month = days_from_civil(y, m0 as u32 + 1, 1);
    Some(BoardDate(first_of_month + day - 1))
}

pub fn is_date(s: &str) -> bool {
    parse_date(s).is_some()
}

fn digits(b: &[u8]) -> Option<i64> {
    b.iter().try_fold(0i64, |acc, &c| {
        c.is_ascii_digit().then(|| acc * 10 + i64::from(c - b'0'))
    })
}

// Proleptic Gregorian day counts (H. Hinnant's civil algorithms).
fn days_from_civil(y: i64, m: u32, d: u32) -> i64 {
    let y = if m <= 2 { y - 1 } else { y };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (i64::from(m) + 9) % 12;
    let doy = (153 * mp + 2) / 5 + i64::from(d) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let m = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    let y = yoe + era * 400;
    (if m <= 2 { y + 1 } else { y }, m, d)
}
