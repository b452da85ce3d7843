//! Stored account state for the CLI
//!
//! The engine stays credential-source-agnostic; only this module touches
//! disk. Files live next to the config under `~/.config/psyche/`.

pub mod store;

pub use store::{load_session, load_user, purge, save};

use psyche_core::{Session, User};

/// Current signed-in state for command handlers.
///
/// Flow:
/// 1. Read stored session — absent or expired (purged on read) means logged out
/// 2. Profile comes from the stored copy; `auth status` refreshes it
pub fn current() -> Option<(User, Session)> {
    let session = store::load_session()?;
    let user = store::load_user()?;
    Some((user, session))
}
