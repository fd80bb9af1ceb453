use std::collections::HashSet;

use rand::Rng;

use crate::engine::models::Assignments;

/// Participants a giver may still draw, in roster order.
///
/// Excludes the giver and every name that is already somebody's receiver.
pub fn eligible_receivers<'a>(
    giver: &str,
    participants: &'a [String],
    existing: &Assignments,
) -> Vec<&'a str> {
    let taken: HashSet<&str> = existing.values().map(String::as_str).collect();
    participants
        .iter()
        .map(String::as_str)
        .filter(|name| *name != giver && !taken.contains(name))
        .collect()
}

/// Draw one receiver for `giver` from the eligible pool.
///
/// Returns `None` when the pool is empty. The caller records the pair; an
/// already-assigned giver is not checked here.
pub fn generate_single_assignment<R: Rng + ?Sized>(
    giver: &str,
    participants: &[String],
    existing: &Assignments,
    rng: &mut R,
) -> Option<String> {
    let pool = eligible_receivers(giver, participants, existing);
    if pool.is_empty() {
        tracing::debug!(giver, "no eligible receiver left");
        return None;
    }

    let pick = pool[rng.gen_range(0..pool.len())];
    Some(pick.to_string())
}
