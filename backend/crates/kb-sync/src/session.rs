//! Lifecycle of the shared store client.
//!
//! A `Session` exists only while an identity is known. The `StoreProvider`
//! creates it when identity is established and drops it when identity is
//! lost. Consumers receive a `Session` by explicit parameter passing.

use crate::BoardStore;

use std::fmt;
use std::sync::Arc;

use log::info;
use tokio::sync::RwLock;

/// Caller identity as issued by the external identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    pub user_id: String,
}

impl Identity {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.user_id)
    }
}

/// An identity paired with the store client created for it.
#[derive(Clone)]
pub struct Session {
    identity: Identity,
    store: Arc<dyn BoardStore>,
}

impl Session {
    pub fn new(identity: Identity, store: Arc<dyn BoardStore>) -> Self {
        Self { identity, store }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn user_id(&self) -> &str {
        &self.identity.user_id
    }

    pub fn store(&self) -> &dyn BoardStore {
        self.store.as_ref()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

/// Process-wide holder of the current session.
#[derive(Default)]
pub struct StoreProvider {
    current: RwLock<Option<Session>>,
}

impl StoreProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the session for a newly established identity, replacing any
    /// previous one.
    pub async fn establish(&self, identity: Identity, store: Arc<dyn BoardStore>) -> Session {
        let session = Session::new(identity, store);
        let mut current = self.current.write().await;
        if let Some(previous) = current.replace(session.clone()) {
            info!("Replacing store session for {}", previous.identity());
        } else {
            info!("Store session established for {}", session.identity());
        }
        session
    }

    /// Drop the session on identity loss. Returns true if one existed.
    pub async fn teardown(&self) -> bool {
        let mut current = self.current.write().await;
        match current.take() {
            Some(session) => {
                info!("Store session for {} torn down", session.identity());
                true
            }
            None => false,
        }
    }

    pub async fn session(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    pub async fn is_established(&self) -> bool {
        self.current.read().await.is_some()
    }
}
