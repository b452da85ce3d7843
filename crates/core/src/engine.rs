//! Storefront reconciliation: stores, view assembly, and purchase flow

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::access::{self, Access};
use crate::api::{ApiClient, PurchaseReceipt};
use crate::bundle::{self, Bundle, BundleQuote};
use crate::catalog::{CatalogItem, CatalogStore};
use crate::config::StorefrontConfig;
use crate::content::{ContentGateway, ContentRequest, ContentView};
use crate::entitlement::EntitlementStore;
use crate::error::{EngineError, FetchError, SubmitError};
use crate::session::Session;

/// One catalog item with its resolved affordance.
#[derive(Debug, Clone, Serialize)]
pub struct ItemView {
    pub item: CatalogItem,
    pub access: Access,
}

/// One bundle with derived pricing and parsed display name.
#[derive(Debug, Clone, Serialize)]
pub struct BundleView {
    pub bundle: Bundle,
    pub quote: BundleQuote,
    pub icon: String,
    pub display_name: String,
}

/// Everything the rendering layer needs for one settled reconciliation.
#[derive(Debug, Clone, Serialize)]
pub struct StorefrontView {
    pub items: Vec<ItemView>,
    pub bundles: Vec<BundleView>,
    /// True when the items came from the embedded fallback snapshot.
    pub degraded: bool,
}

/// Assembles the view model from settled snapshots.
///
/// Pure so the decision logic stays independently testable: access per item,
/// quote and display name per bundle.
pub fn assemble_view(
    items: Vec<CatalogItem>,
    owned: &HashSet<String>,
    bundles: Vec<Bundle>,
    degraded: bool,
) -> StorefrontView {
    let bundles = bundles
        .into_iter()
        .map(|b| {
            let quote = bundle::quote(&b, &items);
            let (icon, display_name) = bundle::display_name(&b.name);
            BundleView {
                bundle: b,
                quote,
                icon,
                display_name,
            }
        })
        .collect();

    let items = items
        .into_iter()
        .map(|item| {
            let access = access::resolve(&item, owned);
            ItemView { item, access }
        })
        .collect();

    StorefrontView {
        items,
        bundles,
        degraded,
    }
}

/// The reconciliation engine: owns the stores and the content gateway.
///
/// All state lives inside the stores; overlapping refreshes are tolerated
/// with last-completing-write-wins snapshots.
pub struct Storefront {
    api: Arc<ApiClient>,
    pub catalog: CatalogStore,
    pub entitlements: EntitlementStore,
    content: ContentGateway,
}

impl Storefront {
    pub fn new(config: &StorefrontConfig) -> Result<Self, FetchError> {
        let api = Arc::new(ApiClient::new(config)?);
        Ok(Self {
            catalog: CatalogStore::new(api.clone()),
            entitlements: EntitlementStore::new(api.clone()),
            content: ContentGateway::new(api.clone()),
            api,
        })
    }

    /// Direct access to the API client for pass-through endpoints.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Full reconciliation: catalog, entitlements and bundles settle together
    /// before the view is assembled — never a partial render of fresh items
    /// against stale access state.
    pub async fn reconcile(&self, session: Option<&Session>) -> StorefrontView {
        let ((items, degraded), owned, bundles) = tokio::join!(
            self.catalog.refresh_with_degraded(),
            self.entitlements.refresh(session),
            self.fetch_bundles(),
        );
        assemble_view(items, &owned, bundles, degraded)
    }

    async fn fetch_bundles(&self) -> Vec<Bundle> {
        match self.api.bundles().await {
            Ok(bundles) => bundles,
            Err(err) => {
                warn!(%err, "bundle fetch failed, omitting bundles");
                Vec::new()
            }
        }
    }

    /// Entitlement-gated content fetch. Callers should reconcile first so the
    /// fallback path sees current snapshots.
    pub async fn fetch_content(
        &self,
        item_id: &str,
        session: Option<&Session>,
        request: ContentRequest,
    ) -> Result<ContentView, EngineError> {
        self.content
            .fetch(&self.catalog, &self.entitlements, item_id, session, request)
            .await
    }

    /// Purchases a single item, then re-runs full reconciliation so ownership
    /// comes from the server, never from the click.
    pub async fn purchase_item(
        &self,
        id: &str,
        session: &Session,
    ) -> Result<(PurchaseReceipt, StorefrontView), SubmitError> {
        let receipt = self.api.purchase_item(id, session).await?;
        let view = self.reconcile(Some(session)).await;
        Ok((receipt, view))
    }

    /// Purchases a bundle, with the same reconciliation contract as
    /// [`purchase_item`](Self::purchase_item).
    pub async fn purchase_bundle(
        &self,
        id: &str,
        session: &Session,
    ) -> Result<(PurchaseReceipt, StorefrontView), SubmitError> {
        let receipt = self.api.purchase_bundle(id, session).await?;
        let view = self.reconcile(Some(session)).await;
        Ok((receipt, view))
    }
}
