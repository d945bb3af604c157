// src/progress.rs
/// Lightweight progress reporting used while reading board snapshots.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of snapshots to read.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one snapshot has been parsed, with the cards it yielded.
    fn item_done(&mut self, _source: &str, _cards: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Writes progress lines to stderr (CLI).
#[derive(Default)]
pub struct StderrProgress {
    done: usize,
    total: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, source: &str, cards: usize) {
        self.done += 1;
        eprintln!("Read {source}: {cards} card(s) ({}/{})", self.done, self.total);
    }
}
