use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use kalite_taxonomy::TaxonomySet;
use kalite_wizard::controller::WizardController;
use kalite_wizard::submit::SubmitHandler;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use uuid::Uuid;

/// One open wizard. Locked per session so a slow submit never blocks
/// other sessions.
pub type Session = Arc<Mutex<WizardController>>;

struct Entry {
    session: Session,
    touched: Instant,
}

/// Open wizard sessions, keyed by session id.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Entry>>>,
}

impl SessionStore {
    pub async fn open(&self, wizard: WizardController) -> Uuid {
        let id = Uuid::new_v4();
        let entry = Entry {
            session: Arc::new(Mutex::new(wizard)),
            touched: Instant::now(),
        };
        self.sessions.write().await.insert(id, entry);
        id
    }

    /// Look up a session and mark it as used.
    pub async fn get(&self, id: Uuid) -> Option<Session> {
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(&id)?;
        entry.touched = Instant::now();
        Some(Arc::clone(&entry.session))
    }

    /// Drop a session. Returns false when it was not open.
    pub async fn close(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    /// Drop every session untouched for at least `max_idle`. Returns how
    /// many were dropped.
    pub async fn sweep(&self, max_idle: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| entry.touched.elapsed() < max_idle);
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// Periodically discard abandoned drafts.
pub fn spawn_sweeper(sessions: SessionStore, max_idle: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(max_idle.max(Duration::from_secs(1)) / 4);
        loop {
            ticker.tick().await;
            let dropped = sessions.sweep(max_idle).await;
            if dropped > 0 {
                tracing::info!(dropped, "idle wizard sessions discarded");
            }
        }
    })
}

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub taxonomies: Arc<TaxonomySet>,
    pub sessions: SessionStore,
    pub submitter: Arc<dyn SubmitHandler>,
}

impl AppState {
    pub fn new(taxonomies: TaxonomySet, submitter: Arc<dyn SubmitHandler>) -> Self {
        Self {
            taxonomies: Arc::new(taxonomies),
            sessions: SessionStore::default(),
            submitter,
        }
    }
}
