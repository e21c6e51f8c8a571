use std::collections::HashMap;
use serde::Serialize;
use crate::candidates;
use crate::models::{Candidate, Category};

/// One leaderboard row: a candidate and their ledger-derived count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Standing {
    pub candidate: Candidate,
    pub count: u32,
}

/// Count ledger rows per candidate id. Row order is irrelevant.
pub fn tally<I, S>(rows: I) -> HashMap<String, u32>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = HashMap::new();
    for row in rows {
        *counts.entry(row.as_ref().to_string()).or_insert(0) += 1;
    }
    counts
}

/// Ranked standings for one category, descending by count. Candidates with
/// no ledger rows rank at zero; withdrawn candidates never appear.
///
/// Ties keep roster order: the sort is stable and `candidates` is expected
/// in roster order. Deterministic for a fixed roster, nothing stronger.
pub fn leaderboard(
    candidates: &[Candidate],
    counts: &HashMap<String, u32>,
    category: Category,
) -> Vec<Standing> {
    let mut standings: Vec<Standing> = candidates
        .iter()
        .filter(|c| c.category == category)
        .filter(|c| !candidates::is_withdrawn(c.id))
        .map(|c| Standing {
            candidate: *c,
            count: counts.get(c.id).copied().unwrap_or(0),
        })
        .collect();

    standings.sort_by(|a, b| b.count.cmp(&a.count));
    standings
}
