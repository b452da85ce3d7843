//! JSON output formatting

use anyhow::Result;
use psyche_core::StorefrontView;

/// Serializes the storefront view for machine consumers.
pub fn render_view(view: &StorefrontView) -> Result<String> {
    Ok(serde_json::to_string_pretty(view)?)
}
