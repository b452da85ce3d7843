//! Preview and read commands

use anyhow::Result;
use psyche_core::{ContentRequest, Storefront, StorefrontConfig};

use crate::account;
use crate::output;
use crate::OutputFormat;

pub async fn run(
    config: &StorefrontConfig,
    id: &str,
    full: bool,
    format: Option<OutputFormat>,
) -> Result<()> {
    let storefront = Storefront::new(config)?;
    let session = account::load_session();

    // Settle the stores first so a degraded content fetch falls back to
    // current snapshots.
    storefront.reconcile(session.as_ref()).await;

    let request = if full {
        ContentRequest::Full
    } else {
        ContentRequest::Preview
    };
    let view = storefront.fetch_content(id, session.as_ref(), request).await?;

    match format {
        Some(OutputFormat::Json) => println!("{}", serde_json::to_string_pretty(&view)?),
        _ => output::terminal::render_content(&view, full),
    }
    Ok(())
}
