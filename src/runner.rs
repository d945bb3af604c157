// src/runner.rs
use std::error::Error;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{
    clipboard::counts_to_tsv,
    config::{
        consts::{COUNT_HEADER, STORE_DIR},
        options::SourceOptions,
        state::ViewState,
    },
    engine::{self, CountTable, DayCounts, Insights},
    file::{cards_export_string, write_cards_export},
    model::{CardRecord, FilterCriteria, RawFilters},
    params::Params,
    progress::Progress,
    specs::BoardSnapshot,
    store,
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub cards_read: usize,
    pub cards_extracted: usize,
    pub files_written: Vec<PathBuf>,
}

/// Headless pipeline with the default `.store/` cache.
pub fn run(
    params: &Params,
    out: &mut dyn Write,
    progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary, Box<dyn Error>> {
    run_in(Path::new(STORE_DIR), params, out, progress)
}

/// Read → (list columns | extract → cards or insights). Text goes to `out`
/// unless an export file was requested.
pub fn run_in(
    store_dir: &Path,
    params: &Params,
    out: &mut dyn Write,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary, Box<dyn Error>> {
    let mut options = params.options.clone();
    if params.last_filters {
        match store::load_filters_in(store_dir) {
            Some(saved) => options.filters = overlay_filters(saved, &options.filters),
            None => logf!("Runner: no saved filters in {}", store_dir.display()),
        }
    }

    let cards = if options.source.snapshots.is_empty() {
        let cached = store::load_cards_in(store_dir)?;
        if cached.is_empty() {
            return Err("No snapshot given (--input) and no previous extraction saved".into());
        }
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Using last extraction: {} card(s)", cached.len()));
        }
        cached
    } else {
        let read = read_snapshots(&options.source, progress.as_deref_mut())?;
        if let Err(e) = store::save_cards_in(store_dir, &read) {
            loge!("Runner: could not cache cards: {e}");
        }
        read
    };

    let mut summary = RunSummary { cards_read: cards.len(), ..RunSummary::default() };

    if params.list_columns {
        for name in engine::column_names(&cards) {
            writeln!(out, "{name}")?;
        }
        return Ok(summary);
    }

    let selected = if params.columns_given {
        options.selected_columns.clone()
    } else {
        engine::column_names(&cards)
    };
    let view = extract_view(&cards, &options.filters, &selected);
    summary.cards_extracted = view.cards().len();
    logf!(
        "Runner: extracted {} of {} card(s) in {} group(s)",
        summary.cards_extracted,
        summary.cards_read,
        view.grouped().len()
    );

    if let Err(e) = store::save_filters_in(store_dir, &options.filters) {
        loge!("Runner: could not save filters: {e}");
    }

    if params.insights {
        let assignees = params
            .assignees
            .clone()
            .unwrap_or_else(|| view.assignees().to_vec());
        let view = view.with_insights(assignees);
        if let Some(insights) = view.insights() {
            write_insights(out, insights)?;
        }
    } else if params.write_file {
        let path = write_cards_export(&options.export, view.grouped())?;
        logf!("Runner: wrote {}", path.display());
        summary.files_written.push(path);
    } else {
        write!(out, "{}", cards_export_string(&options.export, view.grouped()))?;
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(summary)
}

/// Read every snapshot in order and concatenate their cards.
pub fn read_snapshots(
    source: &SourceOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Vec<CardRecord>, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(source.snapshots.len());
    }
    let mut cards = Vec::new();
    for path in &source.snapshots {
        let snapshot = BoardSnapshot::load(path, &source.link_base).inspect_err(|e| {
            loge!("Runner: failed to read {}: {e}", path.display());
        })?;
        let read = snapshot.into_cards();
        logf!("Runner: {} card(s) from {}", read.len(), path.display());
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&path.display().to_string(), read.len());
        }
        cards.extend(read);
    }
    Ok(cards)
}

/// Filters + column selection → fresh view (no insights yet).
pub fn extract_view<S: AsRef<str>>(
    cards: &[CardRecord],
    filters: &RawFilters,
    selected: &[S],
) -> ViewState {
    let criteria = FilterCriteria::from_raw(filters);
    ViewState::from_extraction(engine::extract(cards, &criteria, selected))
}

/// Saved filters with every non-empty typed field taking precedence.
pub fn overlay_filters(saved: RawFilters, typed: &RawFilters) -> RawFilters {
    let mut merged = saved;
    for (key, value) in typed.pairs() {
        if !value.trim().is_empty() {
            merged.set(key, value);
        }
    }
    merged
}

/* ---------------- Insights output ---------------- */

fn write_insights(out: &mut dyn Write, insights: &Insights) -> Result<(), Box<dyn Error>> {
    writeln!(out, "Cards\t{}", insights.card_count)?;
    if insights.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    write_ordered(out, "Status", &insights.status_counts)?;
    writeln!(out)?;
    write!(out, "{}", counts_to_tsv("Responsável", COUNT_HEADER, &insights.assignee_counts))?;
    writeln!(out)?;
    write!(out, "{}", counts_to_tsv("Cliente", COUNT_HEADER, &insights.client_counts))?;
    writeln!(out)?;
    write_days(out, "Criados por dia", &insights.created_by_day)?;
    writeln!(out)?;
    write_days(out, "Escalonados por dia", &insights.escalated_by_day)?;
    Ok(())
}

fn write_ordered(out: &mut dyn Write, key_header: &str, table: &CountTable) -> Result<(), Box<dyn Error>> {
    writeln!(out, "{key_header}\t{COUNT_HEADER}")?;
    for (key, n) in table.entries() {
        writeln!(out, "{key}\t{n}")?;
    }
    Ok(())
}

fn write_days(out: &mut dyn Write, key_header: &str, days: &DayCounts) -> Result<(), Box<dyn Error>> {
    write_ordered(out, key_header, &days.days)?;
    if !days.undated.is_empty() {
        writeln!(out, "# sem data válida: {}", days.undated.total())?;
    }
    Ok(())
}
