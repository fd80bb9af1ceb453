use crate::engine::models::Assignments;

/// Receiver already recorded for `person`, if any.
pub fn buddy_for<'a>(person: &str, assignments: &'a Assignments) -> Option<&'a str> {
    assignments.get(person).map(String::as_str)
}
