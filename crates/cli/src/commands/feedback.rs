//! Suggestion and newsletter commands

use anyhow::Result;
use colored::Colorize;
use psyche_core::{ApiClient, StorefrontConfig, SubmitError, Suggestion};

pub async fn suggest(
    config: &StorefrontConfig,
    name: &str,
    email: &str,
    suggestion: &str,
    reason: &str,
) -> Result<()> {
    let api = ApiClient::new(config)?;
    let body = Suggestion {
        name: name.to_string(),
        email: email.to_string(),
        suggestion: suggestion.to_string(),
        reason: reason.to_string(),
    };

    eprint!("  Sending suggestion... ");
    report(api.suggest(&body).await, "Thank you! We review every suggestion.");
    Ok(())
}

pub async fn subscribe(config: &StorefrontConfig, email: &str) -> Result<()> {
    let api = ApiClient::new(config)?;

    eprint!("  Subscribing {}... ", email.bold());
    report(api.subscribe(email).await, "Successfully subscribed!");
    Ok(())
}

fn report(result: Result<(), SubmitError>, success: &str) {
    match result {
        Ok(()) => {
            eprintln!("{}", "done".green());
            eprintln!("  {success}");
        }
        Err(SubmitError::Rejected(message)) => {
            eprintln!("{}", "declined".red());
            eprintln!("  {message}");
        }
        Err(SubmitError::Fetch(err)) => {
            eprintln!("{}", "failed".red());
            eprintln!("  {err}");
        }
    }
}
