pub mod assignment;
pub mod config;
pub mod roster;

pub use assignment::{Assignments, Reveal};
pub use config::{ExchangeConfig, RevealPolicy};
pub use roster::Roster;
