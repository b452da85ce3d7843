//! Browse command — render the catalog and bundles

use anyhow::Result;
use psyche_core::{Storefront, StorefrontConfig};

use crate::account;
use crate::output;
use crate::OutputFormat;

pub async fn run(config: &StorefrontConfig, format: Option<OutputFormat>) -> Result<()> {
    let storefront = Storefront::new(config)?;
    let session = account::load_session();
    let view = storefront.reconcile(session.as_ref()).await;

    match format {
        Some(OutputFormat::Json) => println!("{}", output::json::render_view(&view)?),
        _ => output::terminal::render_view(&view),
    }
    Ok(())
}
