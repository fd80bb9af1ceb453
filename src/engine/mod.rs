pub mod cycle;
pub mod incremental;
pub mod lookup;
pub mod models;
pub mod shuffle;
pub mod state;
pub mod verify;

pub use cycle::generate_all_assignments;
pub use incremental::{eligible_receivers, generate_single_assignment};
pub use lookup::buddy_for;
pub use models::{Assignments, ExchangeConfig, Reveal, RevealPolicy, Roster};
pub use state::{Exchange, ExchangeError};
