// tests/export_streams.rs
//
// Clipboard text, CSV/TSV export and the .store cache, without UI.
//
use std::fs;
use std::path::PathBuf;

use board_cards::clipboard::{counts_to_tsv, grouped_to_tsv};
use board_cards::config::options::{AppOptions, ExportFormat};
use board_cards::csv::{parse_rows, rows_to_string};
use board_cards::engine::{group, matches, CountTable};
use board_cards::file;
use board_cards::model::{CardRecord, FilterCriteria, RawFilters};
use board_cards::store;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("board_cards_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn full(id: &str, status: &str) -> CardRecord {
    CardRecord {
        title: format!("Title {id}"),
        client: "ACME".into(),
        created_date: "01/02/2024".into(),
        team: "N2".into(),
        escalation_date: "".into(),
        ..CardRecord::new(id, status)
    }
}

#[test]
fn copy_lines_in_group_order_without_trailing_newline() {
    let cards = vec![full("2", "Aberto"), full("1", "Novo")];
    let grouped = group(&cards, &["Aberto", "Novo"]);
    let txt = grouped_to_tsv(&grouped);
    assert_eq!(
        txt,
        "1\tTitle 1\tACME\tNovo\t01/02/2024\tN2\t\n2\tTitle 2\tACME\tAberto\t01/02/2024\tN2\t"
    );
}

#[test]
fn copy_collapses_breaks_inside_cells() {
    let mut c = full("1", "Novo");
    c.title = "line one\nline\ttwo".into();
    let txt = grouped_to_tsv(&group(&[c], &["Novo"]));
    assert_eq!(txt.lines().count(), 1);
    assert!(txt.contains("line one line two"));
}

#[test]
fn count_table_copy_sorted_by_count() {
    let mut t = CountTable::new();
    for k in ["B", "A", "A", "C", "A", "C"] {
        t.add(k);
    }
    assert_eq!(
        counts_to_tsv("Cliente", "Quantidade", &t),
        "Cliente\tQuantidade\nA\t3\nC\t2\nB\t1\n"
    );
}

#[test]
fn csv_quotes_and_parses_back() {
    let rows = vec![vec!["a,b".to_string(), "say \"hi\"".to_string(), "plain".to_string()]];
    let txt = rows_to_string(None, &rows, ',');
    assert_eq!(txt, "\"a,b\",\"say \"\"hi\"\"\",plain\n");
    assert_eq!(parse_rows(&txt, ','), rows);
}

#[test]
fn export_writes_headers_and_respects_user_extension() {
    let dir = tmp_dir("export");
    let mut opts = AppOptions::default();
    opts.export.format = ExportFormat::Csv;
    opts.export.set_path(dir.join("cards.txt").to_str().unwrap());
    assert!(opts.export.out_path().to_string_lossy().ends_with("cards.txt"));

    let cards = vec![full("1", "Novo")];
    let path = file::write_cards_export(&opts.export, &group(&cards, &["Novo"])).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("ID,Título,Cliente,Status N2,Data/hora de Criação,Equipe responsável,Data/hora de escalonamento")
    );
    assert_eq!(lines.next(), Some("1,Title 1,ACME,Novo,01/02/2024,N2,"));
    assert_eq!(lines.next(), None);
}

#[test]
fn export_default_extension_follows_format() {
    let dir = tmp_dir("export_ext");
    let mut opts = AppOptions::default();
    opts.export.set_path(dir.join("out").to_str().unwrap());
    opts.export.format = ExportFormat::Tsv;
    assert!(opts.export.out_path().to_string_lossy().ends_with("out.tsv"));
    opts.export.format = ExportFormat::Csv;
    assert!(opts.export.out_path().to_string_lossy().ends_with("out.csv"));

    opts.export.include_headers = false;
    let path = file::write_cards_export(&opts.export, &group(&[full("9", "Novo")], &["Novo"])).unwrap();
    assert_eq!(fs::read_to_string(path).unwrap(), "9,Title 9,ACME,Novo,01/02/2024,N2,\n");
}

#[test]
fn filters_round_trip_through_store() {
    let dir = tmp_dir("store_filters");
    assert!(store::load_filters_in(&dir).is_none());

    let filters = RawFilters {
        name: "Ana".into(),
        client: "ACME, Ltda".into(),
        id: "".into(),
        tags: "a, b".into(),
        effort: "8".into(),
    };
    store::save_filters_in(&dir, &filters).unwrap();
    assert_eq!(store::load_filters_in(&dir), Some(filters));
}

#[test]
fn cards_round_trip_through_store() {
    let dir = tmp_dir("store_cards");
    assert!(store::load_cards_in(&dir).unwrap().is_empty());

    let mut a = full("1", "Novo");
    a.title = "Quebra, \"aspas\"\ne linha".into();
    a.tags = vec!["urgente".into(), "vip".into()];
    a.link = "https://example.test/1".into();
    let b = CardRecord::new("2", "Fechado");

    store::save_cards_in(&dir, &[a.clone(), b.clone()]).unwrap();
    assert_eq!(store::load_cards_in(&dir).unwrap(), vec![a, b]);
}

#[test]
fn tags_with_separators_survive_the_store() {
    let dir = tmp_dir("store_tags");
    let mut a = full("1", "Novo");
    a.tags = vec!["cliente;vip".into(), "\"beta\"".into(), "n2".into()];
    let b = full("2", "Novo");

    store::save_cards_in(&dir, &[a.clone(), b.clone()]).unwrap();
    let loaded = store::load_cards_in(&dir).unwrap();
    assert_eq!(loaded, vec![a, b]);

    let wanted = FilterCriteria::from_raw(&RawFilters { tags: "cliente;vip".into(), ..RawFilters::default() });
    assert!(matches(&loaded[0], &wanted));
    assert!(!matches(&loaded[1], &wanted));
}
