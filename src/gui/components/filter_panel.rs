// src/gui/components/filter_panel.rs
//
// Column pills and the five filter inputs. Nothing recomputes until Extract.

use eframe::egui;
use crate::{
    engine::sort_statuses,
    gui::{actions, app::App},
    model::RawFilters,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Columns");

    ui.horizontal(|ui| {
        if ui.button("All").clicked() {
            app.state.options.selected_columns = app.columns.clone();
        }
        if ui.button("None").clicked() {
            app.state.options.selected_columns.clear();
        }
    });

    if app.columns.is_empty() {
        ui.weak("No board loaded");
    }

    ui.horizontal_wrapped(|ui| {
        let selected = &mut app.state.options.selected_columns;
        for col in &app.columns {
            let on = selected.contains(col);
            if ui.selectable_label(on, col).clicked() {
                if on {
                    selected.retain(|c| c != col);
                } else {
                    selected.push(col.clone());
                    sort_statuses(selected.as_mut_slice());
                }
                logd!("UI: columns → {:?}", selected);
            }
        }
    });

    ui.separator();
    ui.heading("Filters");

    let mut submit = false;
    egui::Grid::new("filters_grid")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            let f = &mut app.state.options.filters;
            submit |= field(ui, "Responsável", &mut f.name, "");
            submit |= field(ui, "Cliente", &mut f.client, "");
            submit |= field(ui, "ID", &mut f.id, "");
            submit |= field(ui, "Tags", &mut f.tags, "tag1, tag2");
            submit |= field(ui, "Esforço", &mut f.effort, "");
        });

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui.button("Extract").clicked() || submit {
            actions::extract(app);
        }
        if ui.button("Clear").clicked() {
            app.state.options.filters = RawFilters::default();
            logd!("UI: filters cleared");
        }
    });
}

/// One labelled input row. True when Enter was pressed in it.
fn field(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) -> bool {
    ui.label(label);
    let resp = ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(160.0),
    );
    ui.end_row();
    resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}
