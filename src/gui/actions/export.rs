// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_dirty = false;
    }

    let grouped = app.state.view.grouped();
    let status_msg = if grouped.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        s!("Nothing to export")
    } else {
        logf!(
            "Export: Begin cards={}, format={:?}, headers={}",
            grouped.card_count(),
            app.state.options.export.format,
            app.state.options.export.include_headers
        );
        match file::write_cards_export(&app.state.options.export, grouped) {
            Ok(path) => {
                logf!("Export: OK {}", path.display());
                format!("Exported to {}", path.display())
            }
            Err(e) => {
                loge!("Export: Error: {}", e);
                format!("Export error: {e}")
            }
        }
    };
    app.status(status_msg);
}
