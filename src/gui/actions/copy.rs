// src/gui/actions/copy.rs
use eframe::egui;
use crate::{
    clipboard,
    config::consts::COUNT_HEADER,
    engine::CountTable,
    gui::app::App,
};

pub fn copy_cards(app: &App, ui_ctx: &egui::Context) {
    let grouped = app.state.view.grouped();
    if grouped.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let txt = clipboard::grouped_to_tsv(grouped);
    logf!("Copy: cards={}, groups={}", grouped.card_count(), grouped.len());

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}

/// Count table as `key\tQuantidade` lines.
pub fn copy_counts(app: &App, ui_ctx: &egui::Context, key_header: &str, table: &CountTable) {
    if table.is_empty() {
        app.status("Nothing to copy");
        return;
    }
    ui_ctx.copy_text(clipboard::counts_to_tsv(key_header, COUNT_HEADER, table));
    logf!("Copy: {} table, rows={}", key_header, table.len());
    app.status(format!("Copied {} table", key_header.to_lowercase()));
}
