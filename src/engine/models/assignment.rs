use std::collections::BTreeMap;

/// Giver name to receiver name.
pub type Assignments = BTreeMap<String, String>;

/// Outcome of a single reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    pub giver: String,
    pub receiver: String,
    /// `false` when the pair was already recorded by an earlier reveal.
    pub fresh: bool,
    /// The whole mapping was redealt to produce this pair.
    pub regenerated: bool,
}
