use thiserror::Error;

use crate::engine::models::{Assignments, ExchangeConfig, Reveal};
use crate::engine::{Exchange, ExchangeError};
use crate::storage::{StateStore, StorageError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Exchange(#[from] ExchangeError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// An exchange bound to the store it is saved in.
///
/// Every mutating call writes the new state through before returning.
pub struct Session<S: StateStore> {
    exchange: Exchange,
    store: S,
}

impl<S: StateStore> Session<S> {
    /// Resume from the store, or start empty if nothing was saved.
    pub fn open(store: S, config: ExchangeConfig) -> Result<Self, SessionError> {
        let exchange = match store.load()? {
            Some(state) => {
                tracing::info!(
                    participants = state.participants.len(),
                    assignments = state.assignments.len(),
                    "resuming saved exchange"
                );
                Exchange::from_state(state, config)
            }
            None => Exchange::new(config),
        };
        tracing::debug!(seed = exchange.seed, policy = %exchange.policy(), "session opened");
        Ok(Self { exchange, store })
    }

    pub fn exchange(&self) -> &Exchange {
        &self.exchange
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn reveal(&mut self, giver: &str) -> Result<Reveal, SessionError> {
        let reveal = self.exchange.reveal(giver)?;
        if reveal.fresh {
            self.persist()?;
        }
        Ok(reveal)
    }

    pub fn replace_participants<I, T>(&mut self, names: I) -> Result<(), SessionError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.exchange.replace_participants(names)?;
        self.persist()
    }

    pub fn reset_assignments(&mut self) -> Result<(), SessionError> {
        self.exchange.reset_assignments();
        self.persist()
    }

    pub fn deal_all(&mut self) -> Result<&Assignments, SessionError> {
        self.exchange.deal_all()?;
        self.persist()?;
        Ok(self.exchange.assignments())
    }

    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.exchange.clear();
        self.store.clear()?;
        Ok(())
    }

    fn persist(&mut self) -> Result<(), SessionError> {
        self.store.save(&self.exchange.to_state())?;
        Ok(())
    }
}
