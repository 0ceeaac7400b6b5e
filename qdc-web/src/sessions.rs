//! Game session registry
//!
//! In-memory map from session id to the target class the player was asked
//! to draw. Entries expire after a fixed TTL. Lookups do not consume the
//! record, so a drawing can be resubmitted against the same session until
//! it expires. State is process-local and lost on restart.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tracing::debug;
use uuid::Uuid;

/// Age after which a session is considered expired.
pub const SESSION_TTL: Duration = Duration::from_secs(300);

/// Default period of the background eviction task.
pub const EVICTION_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
struct Session {
    target_class: String,
    created: Instant,
}

/// Concurrency-safe session store shared across request handlers.
pub struct SessionRegistry {
    ttl: Duration,
    sessions: Mutex<HashMap<Uuid, Session>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::with_ttl(SESSION_TTL)
    }

    /// Registry with a custom TTL. Tests use short TTLs to exercise expiry.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Create a session for `target_class` and return its id.
    pub fn start(&self, target_class: &str) -> Uuid {
        let id = Uuid::new_v4();
        let session = Session {
            target_class: target_class.to_string(),
            created: Instant::now(),
        };
        self.sessions.lock().unwrap().insert(id, session);
        id
    }

    /// Target class for a live session, or `None` if the id is unknown or
    /// the session has expired. Expired entries found here are removed;
    /// live entries are left in place.
    pub fn lookup(&self, id: &Uuid) -> Option<String> {
        let mut sessions = self.sessions.lock().unwrap();
        match sessions.get(id) {
            Some(s) if s.created.elapsed() <= self.ttl => Some(s.target_class.clone()),
            Some(_) => {
                sessions.remove(id);
                None
            }
            None => None,
        }
    }

    /// Remove every expired session, returning how many were dropped.
    pub fn sweep(&self) -> usize {
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|_, s| s.created.elapsed() <= self.ttl);
        before - sessions.len()
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().unwrap().is_empty()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawn the periodic eviction task. Runs for the life of the process.
pub fn spawn_eviction_task(registry: Arc<SessionRegistry>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.tick().await; // first tick fires immediately
        loop {
            interval.tick().await;
            let removed = registry.sweep();
            if removed > 0 {
                debug!("Evicted {} expired game sessions", removed);
            }
        }
    })
}
