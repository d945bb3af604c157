// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{load,extract,copy,open,export,insights}.

mod copy;     // src/gui/actions/copy.rs
mod export;   // src/gui/actions/export.rs
mod extract;  // src/gui/actions/extract.rs
mod insights; // src/gui/actions/insights.rs
mod load;     // src/gui/actions/load.rs
mod open;     // src/gui/actions/open.rs

pub use copy::{copy_cards, copy_counts};
pub use export::export;
pub use extract::extract;
pub use insights::refresh_insights;
pub use load::{load_last, load_snapshots};
pub use open::{open_links, open_selected};
