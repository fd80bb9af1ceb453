use rand::Rng;

use crate::engine::models::Assignments;
use crate::engine::shuffle::shuffled;

/// Deal every participant a receiver in one pass.
///
/// The participants are shuffled and then linked as a ring, each one giving
/// to the next and the last giving to the first. For two or more names this
/// is always a single cycle with no self-assignment. Fewer than two names
/// yield an empty mapping.
pub fn generate_all_assignments<R: Rng + ?Sized>(
    participants: &[String],
    rng: &mut R,
) -> Assignments {
    let mut assignments = Assignments::new();
    if participants.len() < 2 {
        return assignments;
    }

    let ring = shuffled(participants, rng);
    for (i, giver) in ring.iter().enumerate() {
        let receiver = &ring[(i + 1) % ring.len()];
        assignments.insert(giver.clone(), receiver.clone());
    }

    tracing::debug!(participants = ring.len(), "dealt full assignment ring");
    assignments
}
