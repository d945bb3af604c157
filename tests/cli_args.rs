// tests/cli_args.rs
//
// Flag parsing and the headless runner end to end.
//
use std::fs;
use std::path::PathBuf;

use board_cards::cli::{parse_args, Command};
use board_cards::config::options::ExportFormat;
use board_cards::params::Params;
use board_cards::progress::Progress;
use board_cards::runner::{overlay_filters, run_in, read_snapshots};
use board_cards::model::RawFilters;
use board_cards::store;

const BOARD: &str = r#"<div>
<div class="wit-card" aria-label="Card 1, Column Fechado">
  <span class="font-weight-semibold selectable-text">1</span>
  <div class="field-container"><div class="label text-ellipsis">Cliente</div><span class="text-ellipsis">ACME</span></div>
  <div class="card-assigned-to"><div class="identity-display-name"><span>Ana</span></div></div>
</div>
<div class="wit-card" aria-label="Card 2, Column Novo">
  <span class="font-weight-semibold selectable-text">2</span>
  <div class="field-container"><div class="label text-ellipsis">Cliente</div><span class="text-ellipsis">Globex</span></div>
</div>
<div class="wit-card" aria-label="Card 3, Column Novo">
  <span class="font-weight-semibold selectable-text">3</span>
  <div class="field-container"><div class="label text-ellipsis">Cliente</div><span class="text-ellipsis">ACME</span></div>
</div>
</div>"#;

fn args(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

fn parse(v: &[&str]) -> Params {
    match parse_args(args(v)).unwrap() {
        Command::Run(p) => p,
        Command::Help => panic!("unexpected help"),
    }
}

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("board_cards_cli_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn write_board(dir: &PathBuf) -> String {
    let path = dir.join("board.html");
    fs::write(&path, BOARD).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn parses_sources_filters_and_output() {
    let p = parse(&[
        "-i", "a.html", "--input", "b.html",
        "--columns", "Novo, Fechado,",
        "--client", "acme", "--tags", "x,y",
        "--format", "CSV", "--include-headers",
        "-o", "out/report.csv",
    ]);
    assert_eq!(p.options.source.snapshots, vec![PathBuf::from("a.html"), PathBuf::from("b.html")]);
    assert!(p.columns_given);
    assert_eq!(p.options.selected_columns, vec!["Novo", "Fechado"]);
    assert_eq!(p.options.filters.client, "acme");
    assert_eq!(p.options.filters.tags, "x,y");
    assert_eq!(p.options.export.format, ExportFormat::Csv);
    assert!(p.options.export.include_headers);
    assert!(p.write_file);
    assert!(p.options.export.out_path().ends_with("report.csv"));
}

#[test]
fn defaults_and_repeatable_assignees() {
    let p = parse(&["--insights", "--assignee", "Ana", "--assignee", " Bruno "]);
    assert!(p.insights);
    assert!(!p.columns_given);
    assert!(!p.options.export.include_headers);
    assert_eq!(p.assignees, Some(vec!["Ana".to_string(), "Bruno".to_string()]));
}

#[test]
fn bad_arguments_are_errors() {
    assert!(parse_args(args(&["--nope"])).is_err());
    assert!(parse_args(args(&["--input"])).is_err());
    assert!(parse_args(args(&["--format", "xlsx"])).is_err());
    assert!(parse_args(args(&["--insights", "-o", "x.tsv"])).is_err());
    assert!(matches!(parse_args(args(&["-h"])).unwrap(), Command::Help));
}

#[test]
fn typed_filters_override_saved_ones() {
    let saved = RawFilters { name: "Ana".into(), client: "ACME".into(), ..RawFilters::default() };
    let typed = RawFilters { client: "Globex".into(), ..RawFilters::default() };
    let merged = overlay_filters(saved, &typed);
    assert_eq!(merged.name, "Ana");
    assert_eq!(merged.client, "Globex");
}

#[test]
fn runner_lists_columns_in_status_order() {
    let dir = tmp_dir("list");
    let board = write_board(&dir);
    let p = parse(&["-i", board.as_str(), "--list-columns"]);

    let mut out = Vec::new();
    let summary = run_in(&dir.join(".store"), &p, &mut out, None).unwrap();
    assert_eq!(summary.cards_read, 3);
    assert_eq!(String::from_utf8(out).unwrap(), "Novo\nFechado\n");
}

#[test]
fn runner_prints_filtered_cards_and_remembers_filters() {
    let dir = tmp_dir("cards");
    let store_dir = dir.join(".store");
    let board = write_board(&dir);
    let p = parse(&["-i", board.as_str(), "--client", "acme"]);

    let mut out = Vec::new();
    let summary = run_in(&store_dir, &p, &mut out, None).unwrap();
    assert_eq!(summary.cards_extracted, 2);
    let text = String::from_utf8(out).unwrap();
    let ids: Vec<&str> = text.lines().map(|l| l.split('\t').next().unwrap()).collect();
    assert_eq!(ids, vec!["3", "1"]);

    let saved = store::load_filters_in(&store_dir).unwrap();
    assert_eq!(saved.client, "acme");

    // No --input: the cached extraction is reused, with the saved filters.
    let p = parse(&["--last-filters", "--columns", "Novo"]);
    let mut out = Vec::new();
    let summary = run_in(&store_dir, &p, &mut out, None).unwrap();
    assert_eq!(summary.cards_read, 3);
    assert_eq!(summary.cards_extracted, 1);
}

#[test]
fn runner_prints_insights() {
    let dir = tmp_dir("insights");
    let board = write_board(&dir);
    let p = parse(&["-i", board.as_str(), "--insights"]);

    let mut out = Vec::new();
    run_in(&dir.join(".store"), &p, &mut out, None).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Cards\t3\n"));
    assert!(text.contains("Cliente\tQuantidade\nACME\t2\nGlobex\t1\n"));
    assert!(text.contains("Status\tQuantidade\nNovo\t2\nFechado\t1\n"));
}

#[test]
fn runner_without_input_or_cache_fails() {
    let dir = tmp_dir("empty");
    let p = parse(&[]);
    let mut out = Vec::new();
    assert!(run_in(&dir.join(".store"), &p, &mut out, None).is_err());
}

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) {
        self.events.push(format!("begin {total}"));
    }
    fn log(&mut self, msg: &str) {
        self.events.push(msg.to_string());
    }
    fn item_done(&mut self, _source: &str, cards: usize) {
        self.events.push(format!("done {cards}"));
    }
    fn finish(&mut self) {
        self.events.push("finish".to_string());
    }
}

#[test]
fn runner_reports_progress_and_names_the_export_file() {
    let dir = tmp_dir("progress");
    let store_dir = dir.join(".store");
    let board = write_board(&dir);
    let out_path = dir.join("out").join("report");
    let out_text = out_path.to_string_lossy().into_owned();
    let p = parse(&["-i", board.as_str(), "--format", "csv", "-o", out_text.as_str()]);

    let mut rec = Recorder::default();
    let mut out = Vec::new();
    let summary = run_in(&store_dir, &p, &mut out, Some(&mut rec)).unwrap();
    assert_eq!(rec.events, vec!["begin 1", "done 3", "finish"]);
    assert_eq!(summary.files_written, vec![out_path.with_extension("csv")]);
    assert!(summary.files_written[0].exists());

    // Cached run: the progress sink is borrowed again after the cache read.
    let p = parse(&["--columns", "Novo"]);
    let mut rec = Recorder::default();
    let mut out = Vec::new();
    run_in(&store_dir, &p, &mut out, Some(&mut rec)).unwrap();
    assert_eq!(rec.events, vec!["Using last extraction: 3 card(s)", "finish"]);

    let mut rec = Recorder::default();
    let cards = read_snapshots(&p.options.source, Some(&mut rec)).unwrap();
    assert!(cards.is_empty());
    assert_eq!(rec.events, vec!["begin 0"]);
}
