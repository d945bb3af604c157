// src/gui/actions/load.rs
use std::path::PathBuf;

use crate::{
    engine,
    gui::{app::App, progress::GuiProgress},
    model::CardRecord,
    progress::Progress,
    runner, store,
};

/// Read the snapshot(s) named in the source field (';' separated).
pub fn load_snapshots(app: &mut App) {
    let paths: Vec<PathBuf> = app
        .snapshot_text
        .split(';')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .collect();
    if paths.is_empty() {
        app.status("Pick a board snapshot first");
        logd!("Load: Clicked, but no snapshot path given");
        return;
    }
    app.state.options.source.snapshots = paths;

    logf!("Load: Begin snapshots={:?}", app.state.options.source.snapshots);
    let mut prog = GuiProgress::new(app.status.clone());

    // → This is where the board is read ←
    match runner::read_snapshots(&app.state.options.source, Some(&mut prog)) {
        Ok(cards) => {
            prog.finish();
            match store::save_cards(&cards) {
                Ok(()) => logf!("Cache: saved {} card(s)", cards.len()),
                Err(e) => loge!("Cache: save failed: {}", e),
            }
            replace_cards(app, cards);
        }
        Err(e) => {
            loge!("Load: Error: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}

/// Reuse the extraction cached by the previous run.
pub fn load_last(app: &mut App) {
    match store::load_cards() {
        Ok(cards) if cards.is_empty() => app.status("No saved extraction"),
        Ok(cards) => {
            app.status(format!("Loaded {} saved card(s)", cards.len()));
            replace_cards(app, cards);
        }
        Err(e) => {
            loge!("Load: cache read failed: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}

/// New card set: refresh the column pills, keep selections that still exist.
fn replace_cards(app: &mut App, cards: Vec<CardRecord>) {
    let columns = engine::column_names(&cards);
    let selected = &mut app.state.options.selected_columns;
    selected.retain(|c| columns.contains(c));
    if selected.is_empty() {
        *selected = columns.clone();
    }
    logf!("Load: OK cards={} columns={:?}", cards.len(), columns);
    app.cards = cards;
    app.columns = columns;
}
