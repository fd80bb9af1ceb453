use std::fmt;

/// How a reveal behaves when the giver has no assignment yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPolicy {
    /// Draw one receiver from the eligible pool; a stranded giver is an error.
    #[default]
    Incremental,
    /// Draw one receiver; if the giver is stranded, redeal the whole ring.
    Fallback,
    /// Deal the complete ring on the first reveal, then look up.
    FullCycle,
}

impl fmt::Display for RevealPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RevealPolicy::Incremental => "incremental",
            RevealPolicy::Fallback => "fallback",
            RevealPolicy::FullCycle => "full-cycle",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExchangeConfig {
    pub seed: Option<u64>,
    pub policy: RevealPolicy,
}
