// src/gui/components/action_bar.rs

use eframe::egui;
use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App, ctx: &egui::Context) {
    let has_rows = !app.state.view.grouped().is_empty();

    ui.horizontal(|ui| {
        if ui.add_enabled(has_rows, egui::Button::new("Copy")).clicked() {
            actions::copy_cards(app, ctx);
        }

        let n = app.checked.len();
        if ui
            .add_enabled(n > 0, egui::Button::new(format!("Open selected ({n})")))
            .clicked()
        {
            actions::open_selected(app, ctx);
        }

        if ui.add_enabled(has_rows, egui::Button::new("Insights")).clicked() {
            app.show_insights = true;
            actions::refresh_insights(app);
        }
    });

    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = export.format;
        ui.label("Format:");
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }

        if ui.checkbox(&mut export.include_headers, "Include headers").changed() {
            logf!("UI: Include_headers → {}", export.include_headers);
        }

        ui.separator();

        // --- Output field ---
        ui.label("Output:");
        let resp = ui.add(egui::TextEdit::singleline(&mut app.out_path_text).desired_width(280.0));
        if resp.changed() {
            app.out_path_dirty = true;
        }

        if ui.add_enabled(has_rows, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }
    });
}
