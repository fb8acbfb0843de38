use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use parking_lot::Mutex;
use uuid::Uuid;

use super::guards::SessionId;
use firespot_core::entities::session::SessionState;

/// Sessions that have not been accessed for this long are discarded.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(12 * 60 * 60);

struct Entry {
    state: SessionState,
    last_access: Instant,
}

/// In-memory state of all sessions.
///
/// Handlers work on a copy of the state and write it back
/// afterwards, i.e. the last write wins.
/// Idle sessions are swept whenever a session is written.
pub struct SessionStore {
    initial: SessionState,
    idle_timeout: Duration,
    sessions: Mutex<HashMap<Uuid, Entry>>,
}

impl SessionStore {
    pub fn new(initial: SessionState) -> Self {
        Self::with_idle_timeout(initial, DEFAULT_IDLE_TIMEOUT)
    }

    pub fn with_idle_timeout(initial: SessionState, idle_timeout: Duration) -> Self {
        Self {
            initial,
            idle_timeout,
            sessions: Default::default(),
        }
    }

    pub fn load(&self, id: SessionId) -> SessionState {
        self.load_at(id, Instant::now())
    }

    pub fn store(&self, id: SessionId, state: SessionState) {
        self.update_at(id, Instant::now(), |current| *current = state);
    }

    /// Modify the state of a session while no other handler can write it.
    pub fn update<T>(&self, id: SessionId, f: impl FnOnce(&mut SessionState) -> T) -> T {
        self.update_at(id, Instant::now(), f)
    }

    fn is_idle(&self, entry: &Entry, now: Instant) -> bool {
        now.saturating_duration_since(entry.last_access) > self.idle_timeout
    }

    fn load_at(&self, id: SessionId, now: Instant) -> SessionState {
        let mut sessions = self.sessions.lock();
        match sessions.get_mut(&id.0) {
            Some(entry) if !self.is_idle(entry, now) => {
                entry.last_access = now;
                entry.state.clone()
            }
            Some(_) => {
                sessions.remove(&id.0);
                self.initial.clone()
            }
            None => self.initial.clone(),
        }
    }

    fn update_at<T>(
        &self,
        id: SessionId,
        now: Instant,
        f: impl FnOnce(&mut SessionState) -> T,
    ) -> T {
        let mut sessions = self.sessions.lock();
        let before = sessions.len();
        sessions.retain(|_, entry| !self.is_idle(entry, now));
        if sessions.len() < before {
            debug!("Discarded {} idle sessions", before - sessions.len());
        }
        let entry = sessions.entry(id.0).or_insert_with(|| Entry {
            state: self.initial.clone(),
            last_access: now,
        });
        entry.last_access = now;
        f(&mut entry.state)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.sessions.lock().len()
    }
}
