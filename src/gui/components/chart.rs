// src/gui/components/chart.rs
//
// Horizontal bar rows painted by hand: label, bar scaled to the max, count.

use eframe::egui::{self, RichText, Sense};

const LABEL_W: f32 = 170.0;
const BAR_W: f32 = 240.0;
const ROW_H: f32 = 16.0;

pub fn bars(ui: &mut egui::Ui, title: &str, entries: &[(String, usize)]) {
    ui.label(RichText::new(title).strong());
    if entries.is_empty() {
        ui.weak("No data");
        return;
    }

    let max = entries.iter().map(|(_, n)| *n).max().unwrap_or(1).max(1);
    let fill = ui.visuals().selection.bg_fill;

    for (key, n) in entries {
        ui.horizontal(|ui| {
            ui.add_sized([LABEL_W, ROW_H], egui::Label::new(key.as_str()).truncate());
            let (rect, _) = ui.allocate_exact_size(egui::vec2(BAR_W, ROW_H), Sense::hover());
            let w = (BAR_W * (*n as f32 / max as f32)).max(1.0);
            let bar = egui::Rect::from_min_size(rect.min, egui::vec2(w, ROW_H));
            ui.painter().rect_filled(bar, 2.0, fill);
            ui.label(n.to_string());
        });
    }
    ui.add_space(8.0);
}
