use buddy_capture::engine::verify::{is_derangement, is_single_cycle};
use buddy_capture::engine::{ExchangeConfig, ExchangeError, RevealPolicy};
use buddy_capture::session::{Session, SessionError};
use buddy_capture::storage::{AppState, FileStore, MemoryStore, StateStore};

fn config(policy: RevealPolicy) -> ExchangeConfig {
    ExchangeConfig { seed: Some(2025), policy }
}

#[test]
fn reveals_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();

    let first = {
        let store = FileStore::open(dir.path()).unwrap();
        let mut session = Session::open(store, config(RevealPolicy::Incremental)).unwrap();
        session.replace_participants(["Alice", "Bob", "Carol"]).unwrap();
        session.reveal("Bob").unwrap()
    };

    let store = FileStore::open(dir.path()).unwrap();
    let mut session = Session::open(store, config(RevealPolicy::Incremental)).unwrap();
    assert_eq!(session.exchange().participants(), ["Alice", "Bob", "Carol"].map(String::from));

    let again = session.reveal("Bob").unwrap();
    assert!(!again.fresh);
    assert_eq!(again.receiver, first.receiver);
}

#[test]
fn full_cycle_session_deals_everyone_at_once() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    let mut session = Session::open(store, config(RevealPolicy::FullCycle)).unwrap();
    session.replace_participants(["Ann", "Ben", "Cid", "Dee"]).unwrap();

    session.reveal("Cid").unwrap();

    let saved = session.store().load().unwrap().unwrap();
    assert!(is_single_cycle(&saved.participants, &saved.assignments));
}

#[test]
fn strict_and_fallback_policies_differ_on_a_stranded_giver() {
    // A and B drew each other, C is left without a buddy
    let state = AppState {
        participants: vec!["A".into(), "B".into(), "C".into()],
        assignments: [("A", "B"), ("B", "A")]
            .into_iter()
            .map(|(g, r)| (g.to_string(), r.to_string()))
            .collect(),
    };

    let mut strict = Session::open(
        MemoryStore::with_state(state.clone()),
        config(RevealPolicy::Incremental),
    )
    .unwrap();
    assert!(matches!(
        strict.reveal("C"),
        Err(SessionError::Exchange(ExchangeError::NoEligibleReceiver(_)))
    ));
    assert_eq!(strict.store().saves(), 0);

    let mut fallback =
        Session::open(MemoryStore::with_state(state), config(RevealPolicy::Fallback)).unwrap();
    let reveal = fallback.reveal("C").unwrap();
    assert!(reveal.regenerated);
    assert!(is_derangement(fallback.exchange().participants(), fallback.exchange().assignments()));
    assert_eq!(fallback.store().load().unwrap().unwrap().assignments.len(), 3);
}

#[test]
fn clear_wipes_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    let path = store.path().to_path_buf();
    let mut session = Session::open(store, config(RevealPolicy::Incremental)).unwrap();
    session.replace_participants(["A", "B"]).unwrap();
    assert!(path.exists());

    session.clear().unwrap();
    assert!(!path.exists());
    assert!(session.exchange().participants().is_empty());
}

#[test]
fn corrupt_file_starts_fresh() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    std::fs::write(store.path(), "participants=oops").unwrap();

    let session = Session::open(store, config(RevealPolicy::Incremental)).unwrap();
    assert!(session.exchange().participants().is_empty());
}
