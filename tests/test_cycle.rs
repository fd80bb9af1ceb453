use std::collections::HashSet;

use buddy_capture::engine::verify::{cycle_count, is_derangement, is_single_cycle};
use buddy_capture::engine::{generate_all_assignments, Assignments};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Walk the chain from `start` and return the names in visiting order.
fn walk(start: &str, assignments: &Assignments) -> Vec<String> {
    let mut order = vec![start.to_string()];
    let mut current = assignments[start].as_str();
    while current != start {
        order.push(current.to_string());
        current = assignments[current].as_str();
        assert!(order.len() <= assignments.len(), "chain does not return to {start}");
    }
    order
}

#[test]
fn alice_bob_carol_form_one_ring() {
    let people = names(&["Alice", "Bob", "Carol"]);
    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let map = generate_all_assignments(&people, &mut rng);
        assert_eq!(map.len(), 3);
        assert!(map.iter().all(|(giver, receiver)| giver != receiver));
        assert_eq!(walk("Alice", &map).len(), 3);
        assert_eq!(cycle_count(&map), Some(1));
    }
}

#[test]
fn small_groups_get_nothing() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert!(generate_all_assignments(&[], &mut rng).is_empty());
    assert!(generate_all_assignments(&names(&["Only"]), &mut rng).is_empty());
}

#[test]
fn repeated_deals_vary() {
    let people = names(&["A", "B", "C", "D", "E", "F"]);
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    let deals: HashSet<Vec<(String, String)>> = (0..40)
        .map(|_| generate_all_assignments(&people, &mut rng).into_iter().collect())
        .collect();
    // 5! = 120 possible rings
    assert!(deals.len() > 20, "only {} distinct deals", deals.len());
}

#[test]
fn every_three_person_ring_is_reachable() {
    let people = names(&["A", "B", "C"]);
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut who_a_gives_to = HashSet::new();
    for _ in 0..200 {
        let map = generate_all_assignments(&people, &mut rng);
        who_a_gives_to.insert(map["A"].clone());
    }
    assert_eq!(who_a_gives_to.len(), 2);
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn full_cycle_is_single_ring(
        set in prop::collection::hash_set("[A-Za-z]{1,8}", 2..24),
        seed in any::<u64>(),
    ) {
        let people: Vec<String> = set.into_iter().collect();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let map = generate_all_assignments(&people, &mut rng);

        prop_assert!(is_derangement(&people, &map));
        prop_assert!(is_single_cycle(&people, &map));
        let visited: HashSet<String> = walk(&people[0], &map).into_iter().collect();
        prop_assert_eq!(visited.len(), people.len());
    }

    #[test]
    fn input_order_is_not_modified(
        set in prop::collection::hash_set("[a-z]{1,6}", 0..12),
        seed in any::<u64>(),
    ) {
        let people: Vec<String> = set.into_iter().collect();
        let before = people.clone();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let _ = generate_all_assignments(&people, &mut rng);
        prop_assert_eq!(people, before);
    }
}
