// src/gui/actions/insights.rs
use crate::gui::app::App;

/// Recompute insights for the ticked assignees, keeping their sorted order.
pub fn refresh_insights(app: &mut App) {
    let picked: Vec<String> = crate::engine::known_assignees(app.state.view.cards())
        .into_iter()
        .filter(|a| app.assignee_pick.contains(a))
        .collect();
    logf!("Insights: assignees={}", picked.len());
    app.state.view = app.state.view.with_insights(picked);
    app.client_sort.reset();
}
