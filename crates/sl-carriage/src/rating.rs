//! Candidate rating, selection, and commit sizing.

use crate::Candidate;

/// Score every candidate:
///
/// ```text
/// rating = 2 + stored / max_stored − distance / max_distance
/// ```
///
/// Maxima are taken over `candidates` as given.  A term whose maximum is 0
/// counts as 0 (all candidates equally empty, or all at distance 0).
pub fn rate_candidates(candidates: &mut [Candidate]) {
    let max_stored   = candidates.iter().map(|c| c.stored).max().unwrap_or(0);
    let max_distance = candidates.iter().map(|c| c.distance).max().unwrap_or(0);
    for c in candidates.iter_mut() {
        let stock_term = if max_stored == 0 { 0.0 } else { c.stored as f64 / max_stored as f64 };
        let dist_term  = if max_distance == 0 { 0.0 } else { c.distance as f64 / max_distance as f64 };
        c.rating = 2.0 + stock_term - dist_term;
    }
}

/// Index of the highest-rated candidate.  The first one wins ties.
pub fn select_best(candidates: &[Candidate]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, c) in candidates.iter().enumerate() {
        if best.is_none_or(|(_, r)| c.rating > r) {
            best = Some((i, c.rating));
        }
    }
    best.map(|(i, _)| i)
}

/// Units to commit to: source stock, capped by what the carriage can carry
/// and what the consumer has room for.  0 means the pickup is not viable.
#[inline]
pub fn commit_amount(stock: u32, carriage_capacity: u32, consumer_free: u32) -> u32 {
    stock.min(carriage_capacity).min(consumer_free)
}
