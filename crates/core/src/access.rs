//! Access resolution for catalog items

use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::{CatalogItem, ItemStatus};

/// Resolved UI affordance for an item given the viewer's entitlements.
///
/// Derived per render, never stored. `Locked → Owned` happens only through a
/// completed entitlement refresh after a reported-successful purchase, and is
/// terminal client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    /// Purchasable, not owned: preview and unlock affordances.
    Locked,
    /// Owned: full content affordance.
    Owned,
    /// Not yet published: no purchase affordance, ownership irrelevant.
    ComingSoon,
}

/// Pure decision: status first, then entitlement membership.
pub fn resolve(item: &CatalogItem, owned: &HashSet<String>) -> Access {
    if item.status == ItemStatus::ComingSoon {
        Access::ComingSoon
    } else if owned.contains(&item.id) {
        Access::Owned
    } else {
        Access::Locked
    }
}
