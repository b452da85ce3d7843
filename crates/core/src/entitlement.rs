//! Owned-item entitlements for the signed-in user

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::session::Session;

/// Remote origin of the user's purchase record.
#[async_trait::async_trait]
pub trait EntitlementSource: Send + Sync {
    async fn fetch_owned(&self, session: &Session) -> Result<Vec<String>, FetchError>;
}

/// The signed-in user's owned-item set.
///
/// Fail-closed: logged out, or any fetch failure, yields the empty set. A
/// transient network failure must never leave stale ownership in place, so
/// every refresh replaces the set wholesale rather than merging.
pub struct EntitlementStore {
    source: Arc<dyn EntitlementSource>,
    owned: RwLock<HashSet<String>>,
}

impl EntitlementStore {
    pub fn new(source: Arc<dyn EntitlementSource>) -> Self {
        Self {
            source,
            owned: RwLock::new(HashSet::new()),
        }
    }

    /// Replaces the owned set from the server and returns it.
    ///
    /// `None` (logged out) returns empty without issuing a request.
    pub async fn refresh(&self, session: Option<&Session>) -> HashSet<String> {
        let owned = match session {
            None => HashSet::new(),
            Some(session) => match self.source.fetch_owned(session).await {
                Ok(ids) => ids.into_iter().collect(),
                Err(err) => {
                    warn!(%err, "entitlement fetch failed, treating as unowned");
                    HashSet::new()
                }
            },
        };
        debug!(count = owned.len(), "entitlements refreshed");

        *self.owned.write().await = owned.clone();
        owned
    }

    /// Current owned set.
    pub async fn owned(&self) -> HashSet<String> {
        self.owned.read().await.clone()
    }
}
