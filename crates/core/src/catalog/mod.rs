//! Catalog item model and the in-memory catalog store

pub mod fallback;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::FetchError;

/// Availability of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Available,
    /// Announced but not yet published. No purchase affordance is ever
    /// offered for these, regardless of entitlement.
    ComingSoon,
}

/// A single purchasable content unit with preview and full variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Stable key, unique across the catalog's lifetime.
    pub id: String,
    pub title: String,
    /// Display glyph for cards; renderers substitute a default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Short tagline shown under the title.
    #[serde(default)]
    pub doctrine: String,
    #[serde(default)]
    pub preview_content: String,
    #[serde(default)]
    pub full_content: String,
    /// Non-negative, currency-agnostic units.
    pub price: f64,
    pub status: ItemStatus,
    /// Display order; items without one sort last.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
}

/// Stable sort by `order_index` ascending, absent values last.
///
/// Ties, and all absent values, keep their fetch order.
pub fn sort_catalog(items: &mut [CatalogItem]) {
    items.sort_by_key(|item| item.order_index.unwrap_or(i64::MAX));
}

/// Remote origin of the authoritative catalog.
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogItem>, FetchError>;
}

/// In-memory catalog snapshot with a degraded fallback path.
///
/// `refresh` never raises: any fetch failure substitutes the embedded
/// snapshot. Each refresh replaces the snapshot wholesale, so when two
/// refreshes overlap the later-completing one wins.
pub struct CatalogStore {
    source: Arc<dyn CatalogSource>,
    state: RwLock<CatalogState>,
}

#[derive(Default)]
struct CatalogState {
    items: Vec<CatalogItem>,
    degraded: bool,
}

impl CatalogStore {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            state: RwLock::new(CatalogState::default()),
        }
    }

    /// Fetches and replaces the snapshot, returning the new ordered items.
    pub async fn refresh(&self) -> Vec<CatalogItem> {
        self.refresh_with_degraded().await.0
    }

    /// Like [`refresh`](Self::refresh), but pairs the snapshot with its own
    /// degraded flag so callers don't re-read state an overlapping refresh
    /// may have replaced.
    pub(crate) async fn refresh_with_degraded(&self) -> (Vec<CatalogItem>, bool) {
        let (mut items, degraded) = fallback::resolve(self.source.fetch_catalog().await);
        sort_catalog(&mut items);
        debug!(count = items.len(), degraded, "catalog refreshed");

        let mut state = self.state.write().await;
        state.items = items.clone();
        state.degraded = degraded;
        (items, degraded)
    }

    /// Current snapshot, ordered. Empty before the first refresh.
    pub async fn items(&self) -> Vec<CatalogItem> {
        self.state.read().await.items.clone()
    }

    /// True when the current snapshot came from the embedded fallback.
    pub async fn is_degraded(&self) -> bool {
        self.state.read().await.degraded
    }

    /// Looks up a single item in the current snapshot.
    pub async fn find(&self, id: &str) -> Option<CatalogItem> {
        self.state
            .read()
            .await
            .items
            .iter()
            .find(|item| item.id == id)
            .cloned()
    }
}
