// src/gui/components/mod.rs
pub mod action_bar;
pub mod chart;
pub mod confirm_open;
pub mod filter_panel;
pub mod insights;
pub mod results;
pub mod source_bar;
