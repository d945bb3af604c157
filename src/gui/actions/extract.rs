// src/gui/actions/extract.rs
use crate::{gui::app::App, runner, store};

pub fn extract(app: &mut App) {
    if app.cards.is_empty() {
        app.status("Nothing loaded yet");
        logd!("Extract: Clicked, but no cards are loaded");
        return;
    }

    let options = &app.state.options;
    let view = runner::extract_view(&app.cards, &options.filters, &options.selected_columns);
    logf!(
        "Extract: columns={:?} filters={:?} → {} card(s)",
        options.selected_columns,
        options.filters,
        view.cards().len()
    );
    if let Err(e) = store::save_filters(&options.filters) {
        loge!("Cache: could not save filters: {}", e);
    }

    let msg = if view.grouped().is_empty() {
        s!("No cards match the selected columns and filters")
    } else {
        format!("{} card(s) in {} column(s)", view.cards().len(), view.grouped().len())
    };

    app.state.view = view;
    app.rebuild_tables();
    if app.show_insights {
        super::refresh_insights(app);
    }
    app.status(msg);
}
