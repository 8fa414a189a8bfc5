//! File-backed session store.
//!
//! One pretty-printed JSON record per session under `sessions/<id>.json`,
//! plus an `active` file naming the active session. Records and the pointer
//! are replaced atomically; pointer updates are serialized by an advisory
//! lock so concurrent `activate` calls cannot leave two active sessions.

use std::path::Path;

use tracing::{debug, info, warn};

use super::errors::SessionError;
use super::lock::StoreLock;
use super::types::{Session, SessionId, SessionStatus};
use crate::atomic::write_atomic;
use crate::paths::FocusPaths;

/// Result of a best-effort scan: the records that parsed plus a count of
/// the ones that did not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionListing {
    pub sessions: Vec<Session>,
    pub skipped: usize,
}

impl SessionListing {
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    paths: FocusPaths,
}

impl SessionStore {
    pub fn new(paths: FocusPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &FocusPaths {
        &self.paths
    }

    /// Load the session named by the active pointer.
    ///
    /// Returns the record regardless of its status; a paused record stays
    /// reachable through a stale pointer until another session activates.
    /// Missing pointer, missing record and corrupt record all surface as
    /// `NoActiveSession`.
    pub fn load(&self) -> Result<Session, SessionError> {
        let id = self.read_active_id().ok_or(SessionError::NoActiveSession)?;
        self.load_by_id(id.as_str()).map_err(|e| {
            debug!(
                event = "core.session.active_pointer_unresolved",
                session_id = %id,
                error = %e
            );
            SessionError::NoActiveSession
        })
    }

    /// Load a specific record regardless of status.
    pub fn load_by_id(&self, id: &str) -> Result<Session, SessionError> {
        if !is_valid_id(id) {
            return Err(SessionError::InvalidId { id: id.to_string() });
        }
        let path = self.paths.session_file(id);
        let not_found = || SessionError::NotFound { id: id.to_string() };

        let content = std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(
                    event = "core.session.read_failed",
                    path = %path.display(),
                    error = %e
                );
            }
            not_found()
        })?;

        serde_json::from_str(&content).map_err(|e| {
            warn!(
                event = "core.session.parse_failed",
                path = %path.display(),
                error = %e
            );
            not_found()
        })
    }

    /// The session named by the pointer, only if it is actually active.
    pub fn active_session(&self) -> Option<Session> {
        self.load().ok().filter(Session::is_active)
    }

    /// Persist `session` under its id.
    ///
    /// Saving an active session also points the active pointer at it. A
    /// copy that was demoted, or that another session has since replaced
    /// as active, is rejected with `NotActive` instead of being written.
    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        if session.is_active() {
            let _lock = StoreLock::acquire(&self.paths.lock_file())?;
            self.ensure_still_active(session)?;
            self.write_record(session)?;
            self.write_active_id(&session.id)?;
        } else {
            self.write_record(session)?;
        }

        info!(
            event = "core.session.saved",
            session_id = %session.id,
            status = %session.status,
            drift_count = session.drifts().len()
        );
        Ok(())
    }

    /// Remove the record permanently. The active pointer is left alone;
    /// terminal transitions clear it first (see `clear_active_if`).
    pub fn delete(&self, session: &Session) -> Result<(), SessionError> {
        let path = self.paths.session_file(session.id.as_str());
        std::fs::remove_file(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => SessionError::NotFound {
                id: session.id.to_string(),
            },
            _ => SessionError::IoError { source: e },
        })?;

        info!(event = "core.session.deleted", session_id = %session.id);
        Ok(())
    }

    /// Every readable record, newest first.
    pub fn list_sessions(&self) -> Result<SessionListing, SessionError> {
        let dir = self.paths.sessions_dir();
        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(SessionListing::default());
            }
            Err(e) => return Err(e.into()),
        };

        let mut listing = SessionListing::default();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(event = "core.session.list_entry_failed", error = %e);
                    listing.skipped += 1;
                    continue;
                }
            };
            let Some(id) = session_id_from_path(&entry.path()) else {
                continue;
            };
            match self.load_by_id(&id) {
                Ok(session) => listing.sessions.push(session),
                Err(_) => listing.skipped += 1,
            }
        }

        listing
            .sessions
            .sort_by(|a, b| b.start_time.cmp(&a.start_time));

        debug!(
            event = "core.session.list_completed",
            count = listing.sessions.len(),
            skipped = listing.skipped
        );
        Ok(listing)
    }

    /// Paused records, newest first. Corrupt records are counted in
    /// `skipped` rather than failing the scan.
    pub fn list_paused(&self) -> Result<SessionListing, SessionError> {
        let mut listing = self.list_sessions()?;
        listing
            .sessions
            .retain(|s| s.status == SessionStatus::Paused);
        Ok(listing)
    }

    /// True iff the active pointer resolves to a readable record.
    pub fn exists(&self) -> bool {
        self.load().is_ok()
    }

    /// Pause whatever the pointer names. Returns the paused session, or
    /// `None` when there was nothing to pause.
    pub fn pause_active(&self) -> Result<Option<Session>, SessionError> {
        let _lock = StoreLock::acquire(&self.paths.lock_file())?;
        self.pause_active_locked(None)
    }

    /// Mark `session` paused and persist it. The pointer is not touched.
    pub fn pause(&self, session: &mut Session) -> Result<(), SessionError> {
        session.status = SessionStatus::Paused;
        self.save(session)
    }

    /// Make `session` the single active session.
    ///
    /// Under the store lock: the currently active session (if any, and if
    /// it is a different one) is paused, then `session` is written as
    /// active and the pointer moved to it. If either write fails the
    /// demoted session is restored.
    pub fn activate(&self, session: &mut Session) -> Result<(), SessionError> {
        let _lock = StoreLock::acquire(&self.paths.lock_file())?;

        let prior = self.load_by_id(session.id.as_str()).ok();
        let demoted = self.pause_active_locked(Some(&session.id))?;

        let previous = session.status;
        session.status = SessionStatus::Active;
        if let Err(e) = self.write_active_locked(session) {
            session.status = previous;
            self.rollback_activation(prior, &session.id, demoted.as_ref());
            return Err(e);
        }

        info!(
            event = "core.session.activated",
            session_id = %session.id,
            demoted = ?demoted.as_ref().map(|s| s.id.as_str())
        );
        Ok(())
    }

    /// Remove the active pointer if it names `id`.
    pub fn clear_active_if(&self, id: &SessionId) -> Result<(), SessionError> {
        let _lock = StoreLock::acquire(&self.paths.lock_file())?;
        if self.read_active_id().as_ref() != Some(id) {
            return Ok(());
        }
        match std::fs::remove_file(self.paths.active_file()) {
            Ok(()) => {
                info!(event = "core.session.active_cleared", session_id = %id);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_active_locked(&self, session: &Session) -> Result<(), SessionError> {
        self.write_record(session)?;
        self.write_active_id(&session.id)
    }

    /// Put back the records an interrupted `activate` may have touched:
    /// the activated session as it was before (or nothing, if it was new)
    /// and the demoted session as active behind the pointer.
    fn rollback_activation(
        &self,
        prior: Option<Session>,
        id: &SessionId,
        demoted: Option<&Session>,
    ) {
        let reverted = match prior {
            Some(prior) => self.write_record(&prior),
            None => match std::fs::remove_file(self.paths.session_file(id.as_str())) {
                Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
                _ => Ok(()),
            },
        };
        if let Err(e) = reverted {
            warn!(event = "core.session.rollback_failed", session_id = %id, error = %e);
        }

        let Some(demoted) = demoted else {
            return;
        };
        let mut restored = demoted.clone();
        restored.status = SessionStatus::Active;
        match self
            .write_record(&restored)
            .and_then(|()| self.write_active_id(&restored.id))
        {
            Ok(()) => info!(
                event = "core.session.activation_rolled_back",
                session_id = %id,
                restored = %restored.id
            ),
            Err(e) => warn!(
                event = "core.session.rollback_failed",
                session_id = %restored.id,
                error = %e
            ),
        }
    }

    /// Reject an active copy that is no longer the active session on disk.
    fn ensure_still_active(&self, session: &Session) -> Result<(), SessionError> {
        let superseded = || SessionError::NotActive {
            id: session.id.clone(),
        };

        if let Some(pointed) = self.read_active_id() {
            let replaced = pointed != session.id
                && self
                    .load_by_id(pointed.as_str())
                    .is_ok_and(|current| current.is_active());
            if replaced {
                warn!(
                    event = "core.session.save_superseded",
                    session_id = %session.id,
                    active = %pointed
                );
                return Err(superseded());
            }
        }

        if self
            .load_by_id(session.id.as_str())
            .is_ok_and(|stored| stored.status == SessionStatus::Paused)
        {
            warn!(event = "core.session.save_superseded", session_id = %session.id);
            return Err(superseded());
        }
        Ok(())
    }

    fn pause_active_locked(
        &self,
        keep: Option<&SessionId>,
    ) -> Result<Option<Session>, SessionError> {
        let mut current = match self.load() {
            Ok(session) => session,
            Err(SessionError::NoActiveSession) => return Ok(None),
            Err(e) => return Err(e),
        };
        if !current.is_active() || keep == Some(&current.id) {
            return Ok(None);
        }

        current.status = SessionStatus::Paused;
        self.write_record(&current)?;
        info!(event = "core.session.paused", session_id = %current.id);
        Ok(Some(current))
    }

    fn write_record(&self, session: &Session) -> Result<(), SessionError> {
        let json =
            serde_json::to_string_pretty(session).map_err(|e| SessionError::SerializeFailed {
                message: e.to_string(),
            })?;
        write_atomic(&self.paths.session_file(session.id.as_str()), json.as_bytes())?;
        Ok(())
    }

    fn read_active_id(&self) -> Option<SessionId> {
        let content = std::fs::read_to_string(self.paths.active_file()).ok()?;
        let id = content.trim();
        if id.is_empty() {
            return None;
        }
        Some(SessionId::new(id))
    }

    fn write_active_id(&self, id: &SessionId) -> Result<(), SessionError> {
        write_atomic(&self.paths.active_file(), id.as_str().as_bytes())?;
        debug!(event = "core.session.active_pointer_updated", session_id = %id);
        Ok(())
    }
}

/// Ids become file names under `sessions/`, so path separators and parent
/// references are refused.
fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && !id.contains(['/', '\\']) && !id.contains("..")
}

fn session_id_from_path(path: &Path) -> Option<String> {
    if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
        return None;
    }
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use tempfile::TempDir;

    fn store() -> (SessionStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::new(FocusPaths::at(temp_dir.path().join(".focus")));
        (store, temp_dir)
    }

    fn session(task: &str, minutes_ago: i64) -> Session {
        Session::new(
            task,
            "1h",
            format!("focus/{}", task),
            Utc::now() - Duration::minutes(minutes_ago),
        )
    }

    #[test]
    fn test_load_without_pointer_is_no_active_session() {
        let (store, _dir) = store();
        assert!(matches!(store.load(), Err(SessionError::NoActiveSession)));
        assert!(!store.exists());
    }

    #[test]
    fn test_save_active_updates_pointer() {
        let (store, _dir) = store();
        let s = session("alpha", 0);
        store.save(&s).unwrap();

        assert_eq!(store.load().unwrap(), s);
        assert!(store.exists());
    }

    #[test]
    fn test_save_paused_does_not_move_pointer() {
        let (store, _dir) = store();
        let a = session("alpha", 10);
        store.save(&a).unwrap();

        let mut b = session("beta", 5);
        b.status = SessionStatus::Paused;
        store.save(&b).unwrap();

        assert_eq!(store.load().unwrap().id, a.id);
    }

    #[test]
    fn test_load_by_id_missing_and_corrupt() {
        let (store, _dir) = store();
        assert!(matches!(
            store.load_by_id("nope"),
            Err(SessionError::NotFound { .. })
        ));

        let path = store.paths().session_file("broken");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            store.load_by_id("broken"),
            Err(SessionError::NotFound { .. })
        ));
    }

    #[test]
    fn test_corrupt_pointed_record_is_no_active_session() {
        let (store, _dir) = store();
        let s = session("alpha", 0);
        store.save(&s).unwrap();
        std::fs::write(store.paths().session_file(s.id.as_str()), "garbage").unwrap();

        assert!(matches!(store.load(), Err(SessionError::NoActiveSession)));
    }

    #[test]
    fn test_delete_missing_record_is_not_found() {
        let (store, _dir) = store();
        let s = session("alpha", 0);
        assert!(matches!(
            store.delete(&s),
            Err(SessionError::NotFound { .. })
        ));
    }

    #[test]
    fn test_pause_active_without_session_is_noop() {
        let (store, _dir) = store();
        assert!(store.pause_active().unwrap().is_none());
    }

    #[test]
    fn test_pause_active_pauses_pointed_session() {
        let (store, _dir) = store();
        let s = session("alpha", 0);
        store.save(&s).unwrap();

        let paused = store.pause_active().unwrap().unwrap();
        assert_eq!(paused.id, s.id);
        assert_eq!(store.load().unwrap().status, SessionStatus::Paused);
        assert!(store.active_session().is_none());
    }

    #[test]
    fn test_activate_same_session_is_idempotent() {
        let (store, _dir) = store();
        let mut s = session("alpha", 0);
        store.activate(&mut s).unwrap();
        store.activate(&mut s).unwrap();

        let listing = store.list_sessions().unwrap();
        let active: Vec<_> = listing.sessions.iter().filter(|s| s.is_active()).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(store.load().unwrap().id, s.id);
    }

    #[test]
    fn test_clear_active_if_only_clears_matching_pointer() {
        let (store, _dir) = store();
        let a = session("alpha", 0);
        store.save(&a).unwrap();

        let other = session("beta", 0);
        store.clear_active_if(&other.id).unwrap();
        assert!(store.exists());

        store.clear_active_if(&a.id).unwrap();
        assert!(!store.exists());
        assert!(store.load_by_id(a.id.as_str()).is_ok(), "record must remain");
    }

    #[test]
    fn test_failed_activation_restores_previous_active() {
        let (store, _dir) = store();
        let mut a = session("alpha", 10);
        store.activate(&mut a).unwrap();

        let mut b = session("beta", 0);
        b.status = SessionStatus::Paused;
        // A directory in place of the record makes the write fail.
        let blocked = store.paths().session_file(b.id.as_str());
        std::fs::create_dir_all(blocked.join("occupied")).unwrap();

        assert!(store.activate(&mut b).is_err());

        assert_eq!(b.status, SessionStatus::Paused);
        let current = store.load().unwrap();
        assert_eq!(current.id, a.id);
        assert!(current.is_active());
        assert_eq!(store.active_session().map(|s| s.id), Some(a.id));
    }

    #[test]
    fn test_save_rejects_copy_demoted_by_later_activation() {
        let (store, _dir) = store();
        let mut a = session("alpha", 10);
        store.activate(&mut a).unwrap();
        let stale = a.clone();

        let mut b = session("beta", 0);
        store.activate(&mut b).unwrap();

        assert!(matches!(
            store.save(&stale),
            Err(SessionError::NotActive { .. })
        ));
        assert_eq!(store.load().unwrap().id, b.id);
        assert_eq!(
            store.load_by_id(a.id.as_str()).unwrap().status,
            SessionStatus::Paused
        );
    }

    #[test]
    fn test_load_by_id_rejects_path_like_ids() {
        let (store, dir) = store();
        std::fs::write(dir.path().join("outside.json"), "{}").unwrap();

        for id in ["../outside", "a/b", "..", ""] {
            assert!(
                matches!(store.load_by_id(id), Err(SessionError::InvalidId { .. })),
                "{id:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_list_ignores_non_json_files() {
        let (store, _dir) = store();
        let mut s = session("alpha", 0);
        s.status = SessionStatus::Paused;
        store.save(&s).unwrap();
        std::fs::write(store.paths().sessions_dir().join("notes.txt"), "hi").unwrap();

        let listing = store.list_paused().unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing.skipped, 0);
    }

    #[test]
    fn test_list_on_fresh_store_is_empty() {
        let (store, _dir) = store();
        let listing = store.list_paused().unwrap();
        assert!(listing.is_empty());
        assert_eq!(listing.skipped, 0);
    }
}
