// src/gui/components/results.rs
//
// One collapsible, sortable table per status group. Header click sorts that
// table only; the tick column feeds "Open selected".

use eframe::egui::{self, CursorIcon, RichText, Sense, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{gui::app::App, model::CardColumn};

// ID, Título, Cliente, Status, Criação, Equipe, Escalonamento
const WIDTHS: [f32; 7] = [70.0, 320.0, 140.0, 130.0, 110.0, 150.0, 110.0];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.tables.is_empty() {
        ui.weak(if app.cards.is_empty() {
            "Load a board snapshot to start"
        } else {
            "Pick columns and filters, then Extract"
        });
        return;
    }

    egui::ScrollArea::both()
        .id_salt("results_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for ti in 0..app.tables.len() {
                let title = format!("{} ({})", app.tables[ti].status, app.tables[ti].rows.len());
                egui::CollapsingHeader::new(RichText::new(title).strong())
                    .id_salt(("group", ti))
                    .default_open(true)
                    .show(ui, |ui| table(ui, app, ti));
            }
        });
}

fn table(ui: &mut egui::Ui, app: &mut App, ti: usize) {
    let App { tables, checked, .. } = app;
    let Some(t) = tables.get_mut(ti) else { return };
    let mut clicked: Option<usize> = None;

    let mut builder = TableBuilder::new(ui)
        .id_salt(("status_table", ti))
        .striped(true)
        .vscroll(false)
        .column(Column::exact(24.0));
    for w in WIDTHS {
        builder = builder.column(Column::initial(w).resizable(true).clip(true).at_least(40.0));
    }

    builder
        .header(22.0, |mut header| {
            header.col(|ui| {
                // Tick/untick the whole group.
                let all = !t.rows.is_empty() && t.rows.iter().all(|r| checked.contains(&r.key));
                let mut on = all;
                if ui.checkbox(&mut on, "").changed() {
                    for r in &t.rows {
                        if on { checked.insert(r.key); } else { checked.remove(&r.key); }
                    }
                }
            });
            for col in CardColumn::ALL {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    let arrow = t.sort.indicator(col.index()).map(|d| d.arrow()).unwrap_or("");
                    let text = RichText::new(join!(col.header(), " ", arrow)).strong();
                    let resp = ui
                        .add(egui::Label::new(text).sense(Sense::click()).selectable(false))
                        .on_hover_cursor(CursorIcon::PointingHand);
                    if resp.clicked() {
                        clicked = Some(col.index());
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, t.rows.len(), |mut row| {
                let Some(r) = t.rows.get(row.index()) else { return };
                let card = &r.card;
                row.col(|ui| {
                    let mut on = checked.contains(&r.key);
                    if ui.checkbox(&mut on, "").changed() {
                        if on { checked.insert(r.key); } else { checked.remove(&r.key); }
                    }
                });
                for col in CardColumn::ALL {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        let cell = card.cell(col);
                        if col == CardColumn::Id && card.has_link() {
                            ui.hyperlink_to(cell, &card.link);
                        } else {
                            ui.label(cell);
                        }
                    });
                }
            });
        });

    if let Some(ci) = clicked {
        let dir = t.click_header(ci);
        logd!("UI: sort '{}' by {} {:?}", t.status, CardColumn::ALL[ci].header(), dir);
    }
}
