// tests/dates_and_sort.rs
//
// Date parsing, the cell comparator and header click state.
//
use board_cards::engine::date::is_date;
use board_cards::engine::sort::{natural_cmp, parse_number, sort_rows};
use board_cards::engine::{compare_cells, parse_date, sort_cards, ColumnSort, SortDirection};
use board_cards::model::{CardColumn, CardRecord};
use std::cmp::Ordering;

use SortDirection::{Ascending, Descending};

fn sorted(values: &[&str], dir: SortDirection) -> Vec<String> {
    let mut rows: Vec<Vec<String>> = values.iter().map(|v| vec![v.to_string()]).collect();
    sort_rows(&mut rows, 0, dir);
    rows.into_iter().map(|mut r| r.remove(0)).collect()
}

#[test]
fn parses_day_month_year() {
    let d = parse_date("05/03/2024").unwrap();
    assert_eq!(d.ymd(), (2024, 3, 5));
    assert_eq!(d.to_string(), "05/03/2024");
}

#[test]
fn rejects_other_shapes() {
    for s in ["", "2024-03-05", "5/3/2024", "05/03/24", "05-03-2024", "ab/cd/efgh", " 05/03/2024"] {
        assert!(parse_date(s).is_none(), "{s:?} should not parse");
    }
    assert!(is_date("31/12/1999"));
}

#[test]
fn out_of_range_parts_roll_over() {
    assert_eq!(parse_date("32/13/2024").unwrap().ymd(), (2025, 2, 1));
    assert_eq!(parse_date("00/01/2024").unwrap().ymd(), (2023, 12, 31));
    assert_eq!(parse_date("29/02/2023").unwrap().ymd(), (2023, 3, 1));
    assert_eq!(parse_date("29/02/2024").unwrap().ymd(), (2024, 2, 29));
}

#[test]
fn dates_order_chronologically() {
    let a = parse_date("31/12/2023").unwrap();
    let b = parse_date("01/01/2024").unwrap();
    assert!(a < b);
    assert_eq!(b.days() - a.days(), 1);
}

#[test]
fn numbers_before_text_ascending() {
    assert_eq!(sorted(&["10", "2", "abc"], Ascending), vec!["2", "10", "abc"]);
    assert_eq!(sorted(&["10", "2", "abc"], Descending), vec!["abc", "10", "2"]);
}

#[test]
fn dates_sort_by_calendar_not_text() {
    let v = sorted(&["02/01/2024", "15/12/2023", "01/01/2024"], Ascending);
    assert_eq!(v, vec!["15/12/2023", "01/01/2024", "02/01/2024"]);
}

#[test]
fn decimal_comma_and_prefixes() {
    assert_eq!(parse_number("1,5"), Some(1.5));
    assert_eq!(parse_number("12 dias"), Some(12.0));
    assert_eq!(parse_number(".5"), Some(0.5));
    assert_eq!(parse_number("-3"), Some(-3.0));
    assert_eq!(parse_number("abc"), None);
    assert_eq!(parse_number(""), None);
    assert_eq!(compare_cells("1,25", "1,5", Ascending), Ordering::Less);
}

#[test]
fn natural_text_order() {
    assert_eq!(natural_cmp("item2", "item10"), Ordering::Less);
    assert_eq!(natural_cmp("Eduardo", "Élia"), Ordering::Less);
    assert_eq!(natural_cmp("ana", "Bruno"), Ordering::Less);
    // Accents and case only break ties.
    assert_eq!(natural_cmp("e", "é"), Ordering::Less);
    assert_eq!(natural_cmp("a", "A"), Ordering::Less);
    assert_eq!(natural_cmp("same", "same"), Ordering::Equal);
}

#[test]
fn sort_cards_by_column_is_stable() {
    let mut cards: Vec<CardRecord> = [("1", "02/01/2024"), ("2", "01/01/2024"), ("3", "02/01/2024")]
        .iter()
        .map(|(id, created)| CardRecord { created_date: created.to_string(), ..CardRecord::new(id, "Novo") })
        .collect();

    sort_cards(&mut cards, CardColumn::CreatedDate, Ascending);
    let ids: Vec<&str> = cards.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "1", "3"]);

    sort_cards(&mut cards, CardColumn::CreatedDate, Descending);
    let ids: Vec<&str> = cards.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3", "2"]);
}

#[test]
fn first_click_sorts_ascending_then_toggles() {
    let mut s = ColumnSort::new(Descending);
    assert_eq!(s.active(), None);

    assert_eq!(s.click(2), Ascending);
    assert_eq!(s.indicator(2), Some(Ascending));
    assert_eq!(s.click(2), Descending);
    assert_eq!(s.click(2), Ascending);

    // Another column starts from rest; the old one loses its arrow.
    assert_eq!(s.click(0), Ascending);
    assert_eq!(s.indicator(2), None);
    assert_eq!(s.active(), Some((0, Ascending)));

    s.reset();
    assert_eq!(s.active(), None);
    assert_eq!(s.click(0), Ascending);
}

#[test]
fn resting_direction_is_configurable() {
    let mut s = ColumnSort::new(Ascending);
    assert_eq!(s.click(1), Descending);
    assert_eq!(Descending.arrow(), "▼");
    assert_eq!(Ascending.toggled(), Descending);
}

#[test]
fn mixed_cells_keep_dates_then_numbers_then_text() {
    let v = sorted(&["x", "3", "01/04/2024", "05/03/2024", "12/01/2024 10:30"], Ascending);
    assert_eq!(v, vec!["05/03/2024", "01/04/2024", "3", "12/01/2024 10:30", "x"]);
    assert_eq!(compare_cells("05/03/2024", "3", Ascending), Ordering::Less);
}

#[test]
fn mixed_column_comparator_is_transitive() {
    let mut cells: Vec<String> = Vec::new();
    for i in 0..400u32 {
        cells.push(match i % 5 {
            0 => format!("{:02}/{:02}/2024", i % 28 + 1, i % 12 + 1),
            1 => format!("{}", i % 37),
            2 => format!("{:02}/{:02}/2024 {:02}:00", i % 28 + 1, i % 12 + 1, i % 24),
            3 => format!("{},5 dias", i % 11),
            _ => format!("card {}", i % 13),
        });
    }

    let sample = &cells[..60];
    for a in sample {
        for b in sample {
            let ab = compare_cells(a, b, Ascending);
            assert_eq!(ab, compare_cells(b, a, Ascending).reverse(), "{a:?} vs {b:?}");
            for c in sample {
                if ab == Ordering::Less && compare_cells(b, c, Ascending) == Ordering::Less {
                    assert_eq!(compare_cells(a, c, Ascending), Ordering::Less, "{a:?} < {b:?} < {c:?}");
                }
            }
        }
    }

    let mut cards: Vec<CardRecord> = cells
        .iter()
        .enumerate()
        .map(|(i, created)| CardRecord { created_date: created.clone(), ..CardRecord::new(&i.to_string(), "Novo") })
        .collect();
    sort_cards(&mut cards, CardColumn::CreatedDate, Ascending);
    for pair in cards.windows(2) {
        assert_ne!(
            compare_cells(&pair[0].created_date, &pair[1].created_date, Ascending),
            Ordering::Greater
        );
    }
    sort_cards(&mut cards, CardColumn::CreatedDate, Descending);
    assert_eq!(cards.len(), 400);
}
