// src/engine/status.rs
use std::cmp::Ordering;

use crate::config::consts::STATUS_ORDER;

/// Position of `status` in the board's fixed order.
/// Unknown statuses all share the rank after the last known one.
pub fn status_rank(status: &str) -> usize {
    STATUS_ORDER
        .iter()
        .position(|&s| s == status)
        .unwrap_or(STATUS_ORDER.len())
}

pub fn cmp_status(a: &str, b: &str) -> Ordering {
    status_rank(a).cmp(&status_rank(b))
}

/// Stable: unknown statuses keep their relative order.
pub fn sort_statuses<S: AsRef<str>>(statuses: &mut [S]) {
    statuses.sort_by(|a, b| cmp_status(a.as_ref(), b.as_ref()));
}
