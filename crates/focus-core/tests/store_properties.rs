//! Store and state machine properties, exercised through the public API.

use chrono::{Duration, TimeZone, Utc};
use focus_core::session_ops::record_drift;
use focus_core::{FocusPaths, Session, SessionError, SessionStatus, SessionStore};
use tempfile::TempDir;

fn store() -> (SessionStore, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = SessionStore::new(FocusPaths::at(dir.path().join(".focus")));
    (store, dir)
}

fn session(task: &str, minutes: i64) -> Session {
    let start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap() + Duration::minutes(minutes);
    Session::new(task, "1h", format!("focus/{}", task), start)
}

fn active_count(store: &SessionStore) -> usize {
    store
        .list_sessions()
        .unwrap()
        .sessions
        .iter()
        .filter(|s| s.status == SessionStatus::Active)
        .count()
}

#[test]
fn at_most_one_active_across_pause_and_activate() {
    let (store, _dir) = store();
    let mut sessions: Vec<Session> = ["alpha", "beta", "gamma"]
        .iter()
        .enumerate()
        .map(|(i, t)| session(t, i as i64))
        .collect();

    // Deterministic interleaving of pause/activate over three sessions.
    let script: &[(usize, bool)] = &[
        (0, true),
        (1, true),
        (1, true),
        (0, false),
        (2, true),
        (0, true),
        (2, false),
        (1, true),
        (1, false),
        (2, true),
    ];
    for &(index, activate) in script {
        if activate {
            store.activate(&mut sessions[index]).unwrap();
        } else {
            store.pause(&mut sessions[index]).unwrap();
        }
        assert!(active_count(&store) <= 1, "after step {:?}", (index, activate));
    }
}

#[test]
fn activate_demotes_previous_active() {
    let (store, _dir) = store();
    let mut a = session("alpha", 0);
    let mut b = session("beta", 1);
    store.activate(&mut a).unwrap();

    store.activate(&mut b).unwrap();

    assert_eq!(
        store.load_by_id(a.id.as_str()).unwrap().status,
        SessionStatus::Paused
    );
    assert_eq!(b.status, SessionStatus::Active);
    assert_eq!(store.load().unwrap().id, b.id);
}

#[test]
fn drift_round_trip_preserves_order_and_content() {
    let (store, _dir) = store();
    let mut s = session("alpha", 0);
    let base = s.start_time;
    s.add_drift("Email", None, base + Duration::minutes(5));
    s.add_drift("Fixing CI", Some("red build".to_string()), base + Duration::minutes(9));
    s.add_drift("Slack", Some("   ".to_string()), base + Duration::minutes(12));
    store.activate(&mut s).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.drifts(), s.drifts());
    let descriptions: Vec<&str> = loaded
        .drifts()
        .iter()
        .map(|d| d.description.as_str())
        .collect();
    assert_eq!(descriptions, vec!["Email", "Fixing CI", "Slack"]);
    assert_eq!(loaded.drifts()[2].reason, None);
}

#[test]
fn deleting_active_session_makes_load_fail() {
    let (store, _dir) = store();
    let mut s = session("alpha", 0);
    store.activate(&mut s).unwrap();

    store.delete(&s).unwrap();

    assert!(matches!(store.load(), Err(SessionError::NoActiveSession)));
    assert!(!store.exists());
}

#[test]
fn list_paused_returns_exactly_the_paused_ones() {
    let (store, _dir) = store();
    let mut older = session("older", 0);
    let mut newer = session("newer", 30);
    let mut current = session("current", 10);

    // Insert out of chronological order.
    store.activate(&mut newer).unwrap();
    store.pause(&mut newer).unwrap();
    store.activate(&mut older).unwrap();
    store.activate(&mut current).unwrap();

    let listing = store.list_paused().unwrap();
    let tasks: Vec<&str> = listing.sessions.iter().map(|s| s.task.as_str()).collect();
    assert_eq!(tasks, vec!["newer", "older"]);
    assert_eq!(listing.skipped, 0);
}

#[test]
fn corrupt_records_are_counted_not_fatal() {
    let (store, _dir) = store();
    let mut paused = session("alpha", 0);
    store.activate(&mut paused).unwrap();
    store.pause(&mut paused).unwrap();

    let sessions_dir = store.paths().sessions_dir();
    std::fs::write(sessions_dir.join("broken.json"), "{ not json").unwrap();
    std::fs::write(sessions_dir.join("half.json"), r#"{"id": "half"}"#).unwrap();

    let listing = store.list_paused().unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing.skipped, 2);
}

#[test]
fn deleting_paused_session_keeps_pointer() {
    let (store, _dir) = store();
    let mut paused = session("alpha", 0);
    let mut active = session("beta", 1);
    store.activate(&mut paused).unwrap();
    store.activate(&mut active).unwrap();

    store.delete(&store.load_by_id(paused.id.as_str()).unwrap()).unwrap();

    assert_eq!(store.load().unwrap().id, active.id);
}

#[test]
fn stale_active_copy_cannot_reclaim_the_pointer() {
    let (store, _dir) = store();
    let mut alpha = session("alpha", 0);
    store.activate(&mut alpha).unwrap();
    // Another process resumes beta while this one still holds alpha.
    let mut stale_alpha = alpha.clone();
    let mut beta = session("beta", 1);
    store.activate(&mut beta).unwrap();

    let result = record_drift(&store, &mut stale_alpha, "email", None);

    assert!(matches!(result, Err(SessionError::NotActive { .. })));
    assert_eq!(active_count(&store), 1);
    assert_eq!(store.load().unwrap().id, beta.id);
    assert!(
        store
            .load_by_id(alpha.id.as_str())
            .unwrap()
            .drifts()
            .is_empty()
    );
}

#[test]
fn active_copy_is_rejected_while_another_session_holds_the_pointer() {
    let (store, _dir) = store();
    let mut beta = session("beta", 1);
    store.activate(&mut beta).unwrap();

    // Never stored, but claims to be active.
    let intruder = session("gamma", 2);

    assert!(matches!(
        store.save(&intruder),
        Err(SessionError::NotActive { .. })
    ));
    assert_eq!(active_count(&store), 1);
    assert_eq!(store.load().unwrap().id, beta.id);
}
