// src/gui/components/confirm_open.rs

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn window(ctx: &egui::Context, app: &mut App) {
    let Some(n) = app.pending_open.as_ref().map(|l| l.len()) else { return };

    let mut decision: Option<bool> = None;
    egui::Window::new("Open cards")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(format!("Open {n} cards in the browser?"));
            ui.horizontal(|ui| {
                if ui.button("Open all").clicked() { decision = Some(true); }
                if ui.button("Cancel").clicked() { decision = Some(false); }
            });
        });

    match decision {
        Some(true) => {
            if let Some(links) = app.pending_open.take() {
                actions::open_links(app, ctx, links);
            }
        }
        Some(false) => {
            app.pending_open = None;
            logd!("Open: cancelled ({n} links)");
            app.status("Open cancelled");
        }
        None => {}
    }
}
