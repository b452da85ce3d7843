//! Entitlement-gated content access with an offline fallback

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::{CatalogItem, CatalogStore};
use crate::entitlement::EntitlementStore;
use crate::error::{EngineError, FetchError};
use crate::session::Session;

/// Which content variant the caller is after. Only consulted on the fallback
/// path; the server decides what the primary path returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentRequest {
    Preview,
    Full,
}

/// Content as shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentView {
    pub title: String,
    pub content: String,
    pub has_access: bool,
}

/// Remote origin of gated content.
#[async_trait::async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch_content(
        &self,
        id: &str,
        session: Option<&Session>,
    ) -> Result<ContentView, FetchError>;
}

/// Builds the fallback view from the local snapshot.
///
/// Access is asserted only by the entitlement set, never inferred from the
/// fallback data itself: previews always come back unauthenticated, and full
/// content is served only when the set says owned. The fallback exists for
/// availability in degraded scenarios, not for access escalation.
pub fn fallback_view(
    item: &CatalogItem,
    owned: &HashSet<String>,
    request: ContentRequest,
) -> ContentView {
    match request {
        ContentRequest::Preview => ContentView {
            title: item.title.clone(),
            content: item.preview_content.clone(),
            has_access: false,
        },
        ContentRequest::Full => {
            let has_access = owned.contains(&item.id);
            ContentView {
                title: item.title.clone(),
                content: if has_access {
                    item.full_content.clone()
                } else {
                    item.preview_content.clone()
                },
                has_access,
            }
        }
    }
}

/// Server-authoritative content fetch with the local-snapshot fallback.
pub struct ContentGateway {
    source: Arc<dyn ContentSource>,
}

impl ContentGateway {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    /// Fetches content for an item, gated server-side by the credential.
    ///
    /// Any failure falls back to the catalog snapshot via [`fallback_view`].
    /// An id unknown to both paths is an [`EngineError::UnknownItem`].
    pub async fn fetch(
        &self,
        catalog: &CatalogStore,
        entitlements: &EntitlementStore,
        item_id: &str,
        session: Option<&Session>,
        request: ContentRequest,
    ) -> Result<ContentView, EngineError> {
        match self.source.fetch_content(item_id, session).await {
            Ok(view) => Ok(view),
            Err(err) => {
                warn!(%err, item = item_id, "content fetch failed, serving local snapshot");
                let item = catalog
                    .find(item_id)
                    .await
                    .ok_or_else(|| EngineError::UnknownItem(item_id.to_string()))?;
                let owned = entitlements.owned().await;
                Ok(fallback_view(&item, &owned, request))
            }
        }
    }
}
