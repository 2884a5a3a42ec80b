//! In-memory session store and its TTL eviction sweeper.
//!
//! The store is the single source of truth for variant sessions: the
//! orchestrator inserts, task runners write slot transitions through
//! [`SessionStore::update_variant`], and the poll endpoint reads snapshots.
//! All access goes through one `RwLock` around the session map, so a write
//! to one slot can never race another slot's write on the same session.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use menugen_core::error::CoreError;
use menugen_core::session::{Session, Variant};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Thread-safe store of all in-flight and completed sessions.
///
/// Designed to be wrapped in `Arc` and shared across the application.
/// Sessions are only removed by the eviction sweeper; there is no delete
/// endpoint.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl SessionStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Insert a session. The session is visible to polling as soon as this
    /// returns.
    pub async fn insert(&self, session: Session) {
        self.sessions.write().await.insert(session.id, session);
    }

    /// Snapshot a session by id.
    pub async fn get(&self, id: Uuid) -> Option<Session> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Apply a guarded transition to one slot of one session.
    ///
    /// The closure runs under the store's write lock, so the
    /// read-modify-write is atomic and later reads observe it. Returns
    /// `NotFound` if the session is unknown or already evicted.
    pub async fn update_variant<F>(&self, id: Uuid, slot: u8, apply: F) -> Result<(), CoreError>
    where
        F: FnOnce(&mut Variant) -> Result<(), CoreError>,
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| CoreError::NotFound {
            entity: "Session",
            id: id.to_string(),
        })?;
        apply(session.variant_mut(slot)?)
    }

    /// Current number of stored sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Whether the store holds no sessions.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Remove every session older than `ttl`. Returns how many were evicted.
    pub async fn evict_expired(&self, ttl: Duration) -> usize {
        let cutoff = chrono::Utc::now()
            - chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::zero());
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.created_at > cutoff);
        before - sessions.len()
    }
}

/// Run the session eviction loop until the cancellation token is triggered.
///
/// Sweeps on a fixed interval, removing sessions older than `ttl`. A
/// session evicted mid-pipeline makes its remaining runner writes land as
/// `NotFound`, which the runners tolerate.
pub async fn run_eviction(
    store: Arc<SessionStore>,
    ttl: Duration,
    sweep_interval: Duration,
    cancel: CancellationToken,
) {
    tracing::info!(
        ttl_secs = ttl.as_secs(),
        sweep_interval_secs = sweep_interval.as_secs(),
        "Session eviction sweeper started",
    );

    let mut interval = tokio::time::interval(sweep_interval);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Session eviction sweeper stopping");
                break;
            }
            _ = interval.tick() => {
                let evicted = store.evict_expired(ttl).await;
                if evicted > 0 {
                    tracing::info!(evicted, "Evicted expired sessions");
                } else {
                    tracing::debug!("No expired sessions to evict");
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
