use crate::engine::state::ExchangeError;

/// Ordered list of unique, trimmed participant names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    pub fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// Build a roster from stored names, rejecting empties and duplicates.
    pub fn from_names<I, S>(names: I) -> Result<Self, ExchangeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roster = Roster::new();
        for name in names {
            roster.add(name.as_ref())?;
        }
        Ok(roster)
    }

    /// Build a roster from a saved record, skipping blank and repeated names.
    pub fn from_stored<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roster = Roster::new();
        for name in names {
            let name = name.as_ref();
            if let Err(e) = roster.add(name) {
                tracing::warn!(name, error = %e, "skipping stored participant");
            }
        }
        roster
    }

    pub fn is_name_taken(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Add a participant and return the trimmed name that was stored.
    pub fn add(&mut self, name: &str) -> Result<&str, ExchangeError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ExchangeError::EmptyName);
        }
        if self.is_name_taken(trimmed) {
            return Err(ExchangeError::DuplicateName(trimmed.to_string()));
        }
        self.names.push(trimmed.to_string());
        Ok(self.names[self.names.len() - 1].as_str())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.names.iter().position(|n| n == name)?;
        Some(self.names.remove(index))
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
