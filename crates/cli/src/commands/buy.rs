//! Buy command — first-party purchase or hosted checkout link

use anyhow::Result;
use colored::Colorize;
use psyche_core::{checkout_url, Access, FetchError, Storefront, StorefrontConfig, SubmitError};

use crate::account;

pub async fn run(config: &StorefrontConfig, id: &str, bundle: bool, link: bool) -> Result<()> {
    if link {
        return run_link(config, id);
    }

    let Some(session) = account::load_session() else {
        eprintln!(
            "  {} Sign in first: {}",
            "\u{26a1}".yellow(),
            "psyche auth --token <ID_TOKEN>".bold()
        );
        return Ok(());
    };

    let storefront = Storefront::new(config)?;
    eprint!("  Purchasing {}... ", id.bold());

    let result = if bundle {
        storefront.purchase_bundle(id, &session).await
    } else {
        storefront.purchase_item(id, &session).await
    };

    match result {
        Ok((receipt, view)) => {
            eprintln!("{}", "done".green());
            if !receipt.granted_items.is_empty() {
                eprintln!("  Unlocked: {}", receipt.granted_items.join(", ").bold());
            }
            let owned = view
                .items
                .iter()
                .filter(|i| i.access == Access::Owned)
                .count();
            eprintln!("  You now own {owned} of {} lenses.", view.items.len());
        }
        Err(SubmitError::Rejected(message)) => {
            eprintln!("{}", "declined".red());
            eprintln!("  {message}");
        }
        Err(SubmitError::Fetch(err)) => {
            eprintln!("{}", "failed".red());
            eprintln!("  {err}");
            if matches!(err, FetchError::AuthExpired) {
                account::purge();
                eprintln!("  Session expired — sign in again.");
            }
        }
    }
    Ok(())
}

fn run_link(config: &StorefrontConfig, id: &str) -> Result<()> {
    let user_id = account::load_user().map(|u| u.id);
    if user_id.is_none() {
        eprintln!(
            "  {} Not signed in — payment cannot be auto-attributed to an account.",
            "\u{26a1}".yellow()
        );
    }
    println!("{}", checkout_url(&config.checkout_url, user_id.as_deref(), Some(id)));
    Ok(())
}
