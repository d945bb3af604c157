// src/config/state.rs
//
// The single mutable "current view" a frontend owns. The engine stays pure:
// every recomputation builds a fresh ViewState and the frontend swaps it in.

use super::options::AppOptions;
use crate::engine::{self, GroupedResult, Insights};
use crate::model::CardRecord;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Every card of the last extraction, flattened in group order.
    cards: Vec<CardRecord>,
    grouped: GroupedResult,
    /// Assignee sub-filter behind `insights`.
    assignees: Vec<String>,
    insights: Option<Insights>,
}

impl ViewState {
    /// Fresh view for a new extraction. No insights yet; the assignee
    /// sub-filter defaults to everyone present.
    pub fn from_extraction(grouped: GroupedResult) -> Self {
        let cards = grouped.all_cards();
        let assignees = engine::known_assignees(&cards);
        Self { cards, grouped, assignees, insights: None }
    }

    /// New view with insights computed for `assignees`.
    pub fn with_insights(&self, assignees: Vec<String>) -> Self {
        let insights = engine::aggregate(&self.cards, &assignees);
        Self {
            cards: self.cards.clone(),
            grouped: self.grouped.clone(),
            assignees,
            insights: Some(insights),
        }
    }

    pub fn cards(&self) -> &[CardRecord] { &self.cards }
    pub fn grouped(&self) -> &GroupedResult { &self.grouped }
    pub fn assignees(&self) -> &[String] { &self.assignees }
    pub fn insights(&self) -> Option<&Insights> { self.insights.as_ref() }
    pub fn has_cards(&self) -> bool { !self.cards.is_empty() }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub view: ViewState,
}
