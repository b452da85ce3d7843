//! Auth command — manage the stored session

use anyhow::Result;
use colored::Colorize;
use psyche_core::{ApiClient, FetchError, StorefrontConfig, User};

use crate::account;

/// Runs `psyche auth` with the given action.
///
/// - `--token <ID_TOKEN>`: exchange the provider token for a session
/// - `status`: show the signed-in user (refreshes the stored profile)
/// - `logout`: best-effort server sign-out, then purge stored files
/// - no args: explain how to obtain a token
pub async fn run(
    config: &StorefrontConfig,
    action: Option<&AuthAction>,
    token: Option<&str>,
    provider: &str,
) -> Result<()> {
    if let Some(token) = token {
        return run_sign_in(config, provider, token).await;
    }

    match action {
        Some(AuthAction::Status) => run_status(config).await,
        Some(AuthAction::Logout) => run_logout(config).await,
        None => run_help(),
    }
}

#[derive(Debug, Clone, clap::Subcommand)]
pub enum AuthAction {
    /// Show the current signed-in user
    Status,
    /// Sign out and remove stored credentials
    Logout,
}

fn run_help() -> Result<()> {
    eprintln!("{}", "  Sign in with your identity provider token:".bold());
    eprintln!();
    eprintln!("    {}", "psyche auth --token <ID_TOKEN>".bold());
    eprintln!();
    eprintln!("  Get the token from the provider's sign-in page for Psyche.");
    Ok(())
}

async fn run_sign_in(config: &StorefrontConfig, provider: &str, token: &str) -> Result<()> {
    let api = ApiClient::new(config)?;

    eprint!("  Signing in via {}... ", provider.bold());
    match api.sign_in(provider, token).await {
        Ok(auth) => {
            account::save(&auth.user, &auth.session)?;
            eprintln!("{}", "done".green());
            eprintln!();
            print_user(&auth.user);
        }
        Err(err) => {
            eprintln!("{}", "failed".red());
            eprintln!("  {err}");
        }
    }
    Ok(())
}

async fn run_status(config: &StorefrontConfig) -> Result<()> {
    let Some(session) = account::load_session() else {
        eprintln!("  Not signed in.");
        return Ok(());
    };

    let api = ApiClient::new(config)?;
    match api.me(&session).await {
        Ok(user) => {
            account::save(&user, &session)?;
            print_user(&user);
        }
        Err(FetchError::AuthExpired) => {
            account::purge();
            eprintln!("  Session expired — sign in again.");
        }
        Err(err) => {
            // Offline: show the stored profile instead.
            eprintln!("  {} ({err})", "Using stored profile (API unreachable)".yellow());
            match account::load_user() {
                Some(user) => print_user(&user),
                None => eprintln!("  Not signed in."),
            }
        }
    }
    Ok(())
}

async fn run_logout(config: &StorefrontConfig) -> Result<()> {
    if let Some(session) = account::load_session() {
        // Best-effort; a failing server call must not block local sign-out.
        let api = ApiClient::new(config)?;
        let _ = api.logout(&session).await;
    }
    account::purge();
    eprintln!("  {} Signed out.", "\u{2713}".green());
    Ok(())
}

fn print_user(user: &User) {
    let name = user.name.as_deref().unwrap_or("Account");
    eprintln!("  {}: {}", "Signed in as".bold(), name.cyan());
    eprintln!("  {}: {}", "Email".bold(), user.email);
    eprintln!("  {}: {}", "VIP".bold(), user.vip_level.to_uppercase());
    eprintln!();
}
