// src/gui/actions/open.rs
use eframe::egui;
use crate::{
    config::consts::OPEN_CONFIRM_THRESHOLD,
    gui::app::{selected_links, App},
};

/// Open every ticked card with a link. Many at once waits for confirmation.
pub fn open_selected(app: &mut App, ui_ctx: &egui::Context) {
    let links = selected_links(&app.tables, &app.checked);

    if links.is_empty() {
        app.status("No selected card has a link");
        logd!("Open: Clicked, nothing to open (checked={})", app.checked.len());
        return;
    }
    if links.len() > OPEN_CONFIRM_THRESHOLD {
        logd!("Open: {} links, asking first", links.len());
        app.pending_open = Some(links);
        return;
    }
    open_links(app, ui_ctx, links);
}

pub fn open_links(app: &mut App, ui_ctx: &egui::Context, links: Vec<String>) {
    let n = links.len();
    for url in links {
        ui_ctx.open_url(egui::OpenUrl::new_tab(url));
    }
    logf!("Open: {} card(s)", n);
    app.status(format!("Opened {n} card(s)"));
}
