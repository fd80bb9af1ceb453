use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::engine::cycle::generate_all_assignments;
use crate::engine::incremental::generate_single_assignment;
use crate::engine::lookup::buddy_for;
use crate::engine::models::{Assignments, ExchangeConfig, Reveal, RevealPolicy, Roster};
use crate::storage::AppState;

#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("Participant name cannot be empty")]
    EmptyName,
    #[error("Participant {0:?} is already on the list")]
    DuplicateName(String),
    #[error("{0:?} is not a participant")]
    UnknownParticipant(String),
    #[error("At least 2 participants are needed, found {count}")]
    InsufficientParticipants { count: usize },
    #[error("No buddy left to assign to {0:?}")]
    NoEligibleReceiver(String),
}

pub struct Exchange {
    pub seed: u64,
    rng: ChaCha8Rng,
    policy: RevealPolicy,
    roster: Roster,
    assignments: Assignments,
}

impl Exchange {
    pub fn new(config: ExchangeConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Exchange {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            policy: config.policy,
            roster: Roster::new(),
            assignments: Assignments::new(),
        }
    }

    /// Rebuild from a stored record.
    ///
    /// Loading never fails. Blank and repeated names are skipped. Names are
    /// matched after trimming. An entry is dropped if it is a self-loop,
    /// names a non-participant, repeats a giver, or repeats a receiver.
    pub fn from_state(state: AppState, config: ExchangeConfig) -> Self {
        let mut exchange = Exchange::new(config);
        exchange.roster = Roster::from_stored(&state.participants);

        let mut received: HashSet<String> = HashSet::new();
        for (giver, receiver) in state.assignments {
            let (giver, receiver) = (giver.trim(), receiver.trim());
            let keep = giver != receiver
                && exchange.roster.is_name_taken(giver)
                && exchange.roster.is_name_taken(receiver)
                && !exchange.assignments.contains_key(giver)
                && !received.contains(receiver);
            if !keep {
                tracing::warn!(giver, receiver, "discarding stored assignment");
                continue;
            }
            received.insert(receiver.to_string());
            exchange
                .assignments
                .insert(giver.to_string(), receiver.to_string());
        }

        exchange
    }

    pub fn to_state(&self) -> AppState {
        AppState {
            participants: self.roster.names().to_vec(),
            assignments: self.assignments.clone(),
        }
    }

    pub fn participants(&self) -> &[String] {
        self.roster.names()
    }

    pub fn assignments(&self) -> &Assignments {
        &self.assignments
    }

    pub fn policy(&self) -> RevealPolicy {
        self.policy
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn revealed_count(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_complete(&self) -> bool {
        self.roster.len() >= 2
            && self
                .roster
                .names()
                .iter()
                .all(|name| self.assignments.contains_key(name))
    }

    /// Install a new participant list. Existing assignments are discarded.
    pub fn replace_participants<I, S>(&mut self, names: I) -> Result<(), ExchangeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.roster = Roster::from_names(names)?;
        self.assignments.clear();
        tracing::info!(participants = self.roster.len(), "participants replaced");
        Ok(())
    }

    pub fn clear(&mut self) {
        self.roster.clear();
        self.assignments.clear();
        tracing::info!("exchange cleared");
    }

    pub fn reset_assignments(&mut self) {
        self.assignments.clear();
        tracing::info!("assignments reset");
    }

    /// Replace the mapping with a fresh single ring over everybody.
    pub fn deal_all(&mut self) -> Result<&Assignments, ExchangeError> {
        self.ensure_enough_participants()?;
        self.assignments = generate_all_assignments(self.roster.names(), &mut self.rng);
        Ok(&self.assignments)
    }

    /// Reveal `giver`'s buddy, drawing one if none is recorded yet.
    pub fn reveal(&mut self, giver: &str) -> Result<Reveal, ExchangeError> {
        if !self.roster.is_name_taken(giver) {
            return Err(ExchangeError::UnknownParticipant(giver.to_string()));
        }
        self.ensure_enough_participants()?;

        if let Some(receiver) = buddy_for(giver, &self.assignments) {
            return Ok(Reveal {
                giver: giver.to_string(),
                receiver: receiver.to_string(),
                fresh: false,
                regenerated: false,
            });
        }

        match self.policy {
            RevealPolicy::Incremental => self.reveal_incremental(giver),
            RevealPolicy::Fallback => match self.reveal_incremental(giver) {
                Err(ExchangeError::NoEligibleReceiver(_)) => {
                    tracing::warn!(giver, revealed = self.assignments.len(), "giver stranded, redealing full ring");
                    self.deal_all()?;
                    self.lookup_dealt(giver, true)
                }
                other => other,
            },
            RevealPolicy::FullCycle => {
                let regenerated = !self.assignments.is_empty();
                self.deal_all()?;
                self.lookup_dealt(giver, regenerated)
            }
        }
    }

    fn reveal_incremental(&mut self, giver: &str) -> Result<Reveal, ExchangeError> {
        let receiver = generate_single_assignment(
            giver,
            self.roster.names(),
            &self.assignments,
            &mut self.rng,
        )
        .ok_or_else(|| ExchangeError::NoEligibleReceiver(giver.to_string()))?;

        self.assignments.insert(giver.to_string(), receiver.clone());
        tracing::info!(revealed = self.assignments.len(), total = self.roster.len(), "buddy drawn");
        Ok(Reveal {
            giver: giver.to_string(),
            receiver,
            fresh: true,
            regenerated: false,
        })
    }

    fn lookup_dealt(&self, giver: &str, regenerated: bool) -> Result<Reveal, ExchangeError> {
        let receiver = buddy_for(giver, &self.assignments)
            .ok_or_else(|| ExchangeError::NoEligibleReceiver(giver.to_string()))?;
        Ok(Reveal {
            giver: giver.to_string(),
            receiver: receiver.to_string(),
            fresh: true,
            regenerated,
        })
    }

    fn ensure_enough_participants(&self) -> Result<(), ExchangeError> {
        let count = self.roster.len();
        if count < 2 {
            return Err(ExchangeError::InsufficientParticipants { count });
        }
        Ok(())
    }
}
