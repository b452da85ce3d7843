//! Bundle model, pricing, and display-name parsing

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogItem;

/// Icon substituted when a bundle name carries no leading glyph.
pub const DEFAULT_BUNDLE_ICON: &str = "✦";

/// A priced grouping of catalog items, or a subscription when the item set is
/// empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bundle {
    pub id: String,
    /// Raw name; may embed a leading glyph token (see [`display_name`]).
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub discount_percent: u8,
    /// Referenced item ids. Empty is the subscription sentinel, not an empty
    /// bundle.
    #[serde(default)]
    pub metaphor_ids: Vec<String>,
}

/// Derived pricing for a bundle against a catalog snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BundleQuote {
    pub is_subscription: bool,
    /// Sum of the referenced items' prices. Ids missing from the snapshot
    /// contribute zero, so a bundle referencing a retired item understates
    /// this rather than erroring. Deliberate policy, not a defect.
    pub original_price: f64,
    pub final_price: f64,
    pub discount_percent: u8,
    /// Whether a struck-through original price is worth showing.
    pub shows_savings: bool,
}

/// Computes pricing for a bundle against the given snapshot.
pub fn quote(bundle: &Bundle, catalog: &[CatalogItem]) -> BundleQuote {
    let is_subscription = bundle.metaphor_ids.is_empty();
    let original_price = if is_subscription {
        0.0
    } else {
        bundle
            .metaphor_ids
            .iter()
            .filter_map(|id| catalog.iter().find(|item| &item.id == id))
            .map(|item| item.price)
            .sum()
    };

    BundleQuote {
        is_subscription,
        original_price,
        final_price: bundle.price,
        discount_percent: bundle.discount_percent,
        shows_savings: !is_subscription && original_price > bundle.price,
    }
}

/// Splits a raw bundle name into `(icon, clean_name)`.
///
/// A name starting with a glyph token, a separator (whitespace or `.`), and
/// remaining text yields that glyph and the remainder. Anything else, plain
/// names included, falls back to [`DEFAULT_BUNDLE_ICON`] with the name
/// unchanged. Never fails.
pub fn display_name(raw: &str) -> (String, String) {
    let mut chars = raw.chars();
    if let Some(first) = chars.next() {
        if !first.is_alphanumeric() && !first.is_whitespace() {
            let rest = chars.as_str();
            let trimmed = rest.trim_start_matches(|c: char| c.is_whitespace() || c == '.');
            if trimmed.len() < rest.len() && !trimmed.is_empty() {
                return (first.to_string(), trimmed.to_string());
            }
        }
    }
    (DEFAULT_BUNDLE_ICON.to_string(), raw.to_string())
}
