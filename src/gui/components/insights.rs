// src/gui/components/insights.rs
//
// Insights window: assignee sub-filter, bar charts and the client table.

use eframe::egui::{self, CursorIcon, RichText, Sense};
use egui_extras::{Column, TableBuilder};

use super::chart;
use crate::{
    config::consts::COUNT_HEADER,
    engine::{self, sort::sort_rows, DayCounts},
    gui::{actions, app::App},
};

pub fn window(ctx: &egui::Context, app: &mut App) {
    if !app.show_insights {
        return;
    }
    let mut open = true;
    egui::Window::new("Insights")
        .open(&mut open)
        .default_size([560.0, 640.0])
        .vscroll(true)
        .show(ctx, |ui| body(ui, app, ctx));
    if !open {
        app.show_insights = false;
    }
}

fn body(ui: &mut egui::Ui, app: &mut App, ctx: &egui::Context) {
    assignee_picker(ui, app);
    ui.separator();

    let Some(insights) = app.state.view.insights().cloned() else {
        ui.weak("No insights yet");
        return;
    };
    if insights.is_empty() {
        ui.weak("No cards for the selected assignees");
        return;
    }

    ui.label(format!("{} card(s)", insights.card_count));
    ui.add_space(6.0);

    chart::bars(ui, "Status", insights.status_counts.entries());
    chart::bars(ui, "Top responsáveis", &insights.top_assignees());
    day_chart(ui, "Criados por dia", &insights.created_by_day);
    day_chart(ui, "Escalonados por dia", &insights.escalated_by_day);

    ui.separator();
    ui.horizontal(|ui| {
        ui.label(RichText::new("Clientes").strong());
        if ui.button("Copy").clicked() {
            actions::copy_counts(app, ctx, "Cliente", &insights.client_counts);
        }
    });
    client_table(ui, app, insights.client_counts.sorted_by_count_desc());
}

fn assignee_picker(ui: &mut egui::Ui, app: &mut App) {
    let known = engine::known_assignees(app.state.view.cards());
    egui::CollapsingHeader::new(format!(
        "Responsáveis ({}/{})",
        app.assignee_pick.len(),
        known.len()
    ))
    .id_salt("assignee_picker")
    .show(ui, |ui| {
        ui.horizontal(|ui| {
            if ui.button("All").clicked() {
                app.assignee_pick = known.iter().cloned().collect();
            }
            if ui.button("None").clicked() {
                app.assignee_pick.clear();
            }
        });
        ui.horizontal_wrapped(|ui| {
            for name in &known {
                let mut on = app.assignee_pick.contains(name);
                if ui.checkbox(&mut on, name).changed() {
                    if on { app.assignee_pick.insert(name.clone()); } else { app.assignee_pick.remove(name); }
                }
            }
        });
        if ui.button("Apply").clicked() {
            actions::refresh_insights(app);
        }
    });
}

fn day_chart(ui: &mut egui::Ui, title: &str, days: &DayCounts) {
    chart::bars(ui, title, days.days.entries());
    if !days.undated.is_empty() {
        ui.weak(format!("{} card(s) with an unreadable date", days.undated.total()));
    }
}

fn client_table(ui: &mut egui::Ui, app: &mut App, entries: Vec<(String, usize)>) {
    let mut rows: Vec<Vec<String>> = entries
        .into_iter()
        .map(|(k, n)| vec![k, n.to_string()])
        .collect();
    if let Some((col, dir)) = app.client_sort.active() {
        sort_rows(&mut rows, col, dir);
    }

    let headers = ["Cliente", COUNT_HEADER];
    let mut clicked: Option<usize> = None;

    TableBuilder::new(ui)
        .id_salt("client_table")
        .striped(true)
        .vscroll(false)
        .column(Column::initial(260.0).resizable(true).clip(true))
        .column(Column::initial(90.0))
        .header(22.0, |mut header| {
            for (ci, h) in headers.iter().enumerate() {
                header.col(|ui| {
                    let arrow = app.client_sort.indicator(ci).map(|d| d.arrow()).unwrap_or("");
                    let resp = ui
                        .add(egui::Label::new(RichText::new(join!(*h, " ", arrow)).strong())
                            .sense(Sense::click())
                            .selectable(false))
                        .on_hover_cursor(CursorIcon::PointingHand);
                    if resp.clicked() {
                        clicked = Some(ci);
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let Some(r) = rows.get(row.index()) else { return };
                for cell in r {
                    row.col(|ui| { ui.label(cell); });
                }
            });
        });

    if let Some(ci) = clicked {
        app.client_sort.click(ci);
    }
}
