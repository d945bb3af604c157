// src/gui/app.rs
use std::{
    collections::HashSet,
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    engine::{self, sort_cards_by, ColumnSort, GroupedResult, SortDirection},
    model::{CardColumn, CardRecord},
    store,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Board Cards",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

/// A displayed card plus the key its tick box is stored under.
/// Keys are unique per extraction, even when ids repeat or are empty.
pub struct TableRow {
    pub key: usize,
    pub card: CardRecord,
}

/// One status table as displayed: its own row order and sort state.
pub struct StatusTable {
    pub status: String,
    pub rows: Vec<TableRow>,
    pub sort: ColumnSort,
}

impl StatusTable {
    /// Header click on column `ci`: flip its direction and re-sort the rows.
    pub fn click_header(&mut self, ci: usize) -> SortDirection {
        let dir = self.sort.click(ci);
        if let Some(&col) = CardColumn::ALL.get(ci) {
            sort_cards_by(&mut self.rows, col, dir, |r| &r.card);
        }
        dir
    }
}

/// One table per group. Row keys count up across groups in display order.
pub fn build_tables(grouped: &GroupedResult, resting: SortDirection) -> Vec<StatusTable> {
    let mut key = 0;
    grouped
        .iter()
        .map(|g| StatusTable {
            status: g.status.clone(),
            rows: g
                .cards
                .iter()
                .map(|card| {
                    key += 1;
                    TableRow { key: key - 1, card: card.clone() }
                })
                .collect(),
            sort: ColumnSort::new(resting),
        })
        .collect()
}

/// Links of the ticked rows that have one, in display order.
pub fn selected_links(tables: &[StatusTable], checked: &HashSet<usize>) -> Vec<String> {
    tables
        .iter()
        .flat_map(|t| &t.rows)
        .filter(|r| checked.contains(&r.key) && r.card.has_link())
        .map(|r| r.card.link.clone())
        .collect()
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // every card of the last load, before filters
    pub cards: Vec<CardRecord>,
    // board columns present in `cards`, status order
    pub columns: Vec<String>,

    // text fields mapped <-> options
    pub snapshot_text: String,
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // displayed tables, re-sorted independently of the view
    pub tables: Vec<StatusTable>,
    // row keys ticked for "open selected"
    pub checked: HashSet<usize>,
    // links waiting for the open-many confirmation
    pub pending_open: Option<Vec<String>>,

    // insights window
    pub show_insights: bool,
    pub assignee_pick: HashSet<String>,
    pub client_sort: ColumnSort,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        let mut status = s!("Idle");

        if let Some(filters) = store::load_filters() {
            logf!("Cache: loaded last filters");
            state.options.filters = filters;
        }

        let cards = match store::load_cards() {
            Ok(cards) if !cards.is_empty() => {
                logf!("Cache: loaded {} card(s)", cards.len());
                status = format!("Loaded {} card(s) from the last extraction", cards.len());
                cards
            }
            Ok(_) => Vec::new(),
            Err(e) => {
                loge!("Cache: could not read last cards: {}", e);
                Vec::new()
            }
        };
        let columns = engine::column_names(&cards);
        state.options.selected_columns = columns.clone();

        let out_path_text = state.options.export.out_path().to_string_lossy().into();
        let client_sort = ColumnSort::new(state.options.sort.resting);

        logf!("Init: cards={}, columns={}", cards.len(), columns.len());

        Self {
            state,
            cards,
            columns,
            snapshot_text: s!(),
            out_path_text,
            out_path_dirty: false,
            tables: Vec::new(),
            checked: HashSet::new(),
            pending_open: None,
            show_insights: false,
            assignee_pick: HashSet::new(),
            client_sort,
            status: Arc::new(Mutex::new(status)),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Rebuild the displayed tables from the current view. Sort state and
    /// ticks reset, since row keys only hold within one extraction.
    pub fn rebuild_tables(&mut self) {
        self.tables = build_tables(self.state.view.grouped(), self.state.options.sort.resting);
        self.checked.clear();
        self.assignee_pick = self.state.view.assignees().iter().cloned().collect();
        self.client_sort.reset();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("source").show(ctx, |ui| {
            super::components::source_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status_text());
        });

        egui::SidePanel::left("filters")
            .resizable(false)
            .show(ctx, |ui| {
                super::components::filter_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::action_bar::draw(ui, self, ctx);

            ui.separator();

            super::components::results::draw(ui, self);
        });

        super::components::insights::window(ctx, self);
        super::components::confirm_open::window(ctx, self);
    }
}
