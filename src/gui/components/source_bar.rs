// src/gui/components/source_bar.rs
//
// Snapshot path(s), load buttons and the link base for rebuilt card links.

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Snapshot:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.snapshot_text)
                .hint_text("board.html; other-board.html")
                .desired_width(420.0),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Load").clicked() || enter {
            actions::load_snapshots(app);
        }
        if ui.button("Load last").clicked() {
            actions::load_last(app);
        }

        ui.separator();

        ui.label("Links:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.options.source.link_base)
                .desired_width(360.0),
        );
        if resp.lost_focus() {
            logf!("UI: link base → {}", app.state.options.source.link_base);
        }
    });
}
