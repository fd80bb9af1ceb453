use std::collections::HashSet;

use buddy_capture::engine::{eligible_receivers, generate_single_assignment, Assignments};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn third_giver_is_stranded_after_a_swap() {
    let people = names(&["A", "B", "C"]);
    let mut existing = Assignments::new();
    existing.insert("A".into(), "B".into());
    existing.insert("B".into(), "A".into());

    assert!(eligible_receivers("C", &people, &existing).is_empty());
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(generate_single_assignment("C", &people, &existing, &mut rng), None);
}

#[test]
fn draws_are_spread_over_the_pool() {
    let people = names(&["A", "B", "C", "D"]);
    let mut rng = ChaCha8Rng::seed_from_u64(12);
    let seen: HashSet<String> = (0..200)
        .filter_map(|_| generate_single_assignment("A", &people, &Assignments::new(), &mut rng))
        .collect();
    let expected: HashSet<String> = names(&["B", "C", "D"]).into_iter().collect();
    assert_eq!(seen, expected);
}

/// Everyone reveals in turn; collect who got stranded.
fn reveal_all(people: &[String], seed: u64) -> (Assignments, Vec<String>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut assignments = Assignments::new();
    let mut stranded = Vec::new();
    for giver in people {
        match generate_single_assignment(giver, people, &assignments, &mut rng) {
            Some(receiver) => {
                assignments.insert(giver.clone(), receiver);
            }
            None => stranded.push(giver.clone()),
        }
    }
    (assignments, stranded)
}

#[test]
fn full_round_only_strands_the_last_giver() {
    let people = names(&["A", "B", "C", "D", "E"]);
    for seed in 0..100 {
        let (assignments, stranded) = reveal_all(&people, seed);
        // only the final giver can hit an empty pool, and only when
        // they are the single name left untaken
        assert!(stranded.len() <= 1);
        if let Some(last) = stranded.first() {
            assert_eq!(last, "E");
            assert!(!assignments.values().any(|r| r == "E"));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn drawn_receiver_is_valid(
        set in prop::collection::hash_set("[a-z]{1,6}", 2..16),
        prior in 0usize..16,
        seed in any::<u64>(),
    ) {
        let people: Vec<String> = set.into_iter().collect();
        let (mut assignments, _) = reveal_all(&people[..prior.min(people.len() - 1)], seed);
        // the partial reveal only used a prefix of the roster as its pool
        assignments.retain(|g, r| people.contains(g) && people.contains(r));

        let giver = people
            .iter()
            .find(|p| !assignments.contains_key(*p))
            .cloned()
            .unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(seed ^ 0x5eed);
        if let Some(receiver) = generate_single_assignment(&giver, &people, &assignments, &mut rng) {
            prop_assert!(people.contains(&receiver));
            prop_assert_ne!(&receiver, &giver);
            prop_assert!(!assignments.values().any(|r| *r == receiver));
        } else {
            prop_assert!(eligible_receivers(&giver, &people, &assignments).is_empty());
        }
    }
}
