//! Embedded catalog snapshot served when the remote source is unreachable
//!
//! The snapshot ships inside the binary so a degraded storefront still shows
//! the library. It can never assert entitlements; access always comes from
//! the entitlement store or the server.

use std::sync::LazyLock;

use serde::Deserialize;
use tracing::warn;

use super::CatalogItem;
use crate::error::FetchError;

static EMBEDDED: &str = include_str!("fallback_catalog.json");

#[derive(Deserialize)]
struct Snapshot {
    revision: String,
    items: Vec<CatalogItem>,
}

static SNAPSHOT: LazyLock<Snapshot> =
    LazyLock::new(|| serde_json::from_str(EMBEDDED).expect("embedded fallback catalog is valid"));

/// Revision marker of the embedded snapshot.
pub fn revision() -> &'static str {
    &SNAPSHOT.revision
}

/// The embedded items, in asset order.
pub fn snapshot() -> Vec<CatalogItem> {
    SNAPSHOT.items.clone()
}

/// Fallback selection: fetched items on success, the embedded snapshot on
/// any failure. The second element reports the degraded path.
pub fn resolve(fetched: Result<Vec<CatalogItem>, FetchError>) -> (Vec<CatalogItem>, bool) {
    match fetched {
        Ok(items) => (items, false),
        Err(err) => {
            warn!(%err, revision = revision(), "catalog fetch failed, serving embedded snapshot");
            (snapshot(), true)
        }
    }
}
