//! Structural checks over an assignment mapping.

use std::collections::HashSet;

use crate::engine::models::Assignments;

/// Every participant gives exactly once, receives exactly once, and never to themselves.
pub fn is_derangement(participants: &[String], assignments: &Assignments) -> bool {
    if assignments.len() != participants.len() {
        return false;
    }
    let people: HashSet<&str> = participants.iter().map(String::as_str).collect();
    if people.len() != participants.len() {
        return false;
    }

    let mut received = HashSet::new();
    for (giver, receiver) in assignments {
        if giver == receiver || !people.contains(giver.as_str()) || !people.contains(receiver.as_str()) {
            return false;
        }
        if !received.insert(receiver.as_str()) {
            return false;
        }
    }
    true
}

/// Number of disjoint gifting cycles, or `None` if the mapping is not a
/// permutation of its own givers.
pub fn cycle_count(assignments: &Assignments) -> Option<usize> {
    let receivers: HashSet<&str> = assignments.values().map(String::as_str).collect();
    if receivers.len() != assignments.len()
        || receivers.iter().any(|r| !assignments.contains_key(*r))
    {
        return None;
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut cycles = 0;
    for start in assignments.keys() {
        if visited.contains(start.as_str()) {
            continue;
        }
        cycles += 1;
        let mut current = start.as_str();
        while visited.insert(current) {
            current = assignments.get(current)?.as_str();
        }
    }
    Some(cycles)
}

/// A derangement that links the whole group into one ring.
pub fn is_single_cycle(participants: &[String], assignments: &Assignments) -> bool {
    participants.len() >= 2
        && is_derangement(participants, assignments)
        && cycle_count(assignments) == Some(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn assigned(pairs: &[(&str, &str)]) -> Assignments {
        pairs
            .iter()
            .map(|(g, r)| (g.to_string(), r.to_string()))
            .collect()
    }

    #[test]
    fn two_swaps_are_two_cycles() {
        let people = names(&["A", "B", "C", "D"]);
        let map = assigned(&[("A", "B"), ("B", "A"), ("C", "D"), ("D", "C")]);
        assert!(is_derangement(&people, &map));
        assert_eq!(cycle_count(&map), Some(2));
        assert!(!is_single_cycle(&people, &map));
    }

    #[test]
    fn ring_is_single_cycle() {
        let people = names(&["A", "B", "C"]);
        let map = assigned(&[("A", "C"), ("C", "B"), ("B", "A")]);
        assert!(is_single_cycle(&people, &map));
    }

    #[test]
    fn self_loop_is_rejected() {
        let people = names(&["A", "B"]);
        let map = assigned(&[("A", "A"), ("B", "B")]);
        assert!(!is_derangement(&people, &map));
        assert_eq!(cycle_count(&map), Some(2));
    }

    #[test]
    fn partial_or_foreign_mappings_are_rejected() {
        let people = names(&["A", "B", "C"]);
        assert!(!is_derangement(&people, &assigned(&[("A", "B")])));
        assert!(!is_derangement(&people, &assigned(&[("A", "B"), ("B", "Z"), ("C", "A")])));
        assert_eq!(cycle_count(&assigned(&[("A", "B")])), None);
        assert_eq!(cycle_count(&assigned(&[("A", "B"), ("C", "B")])), None);
    }
}
