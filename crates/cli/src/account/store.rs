//! Credential files under ~/.config/psyche/

use anyhow::Result;
use psyche_core::config::config_dir;
use psyche_core::{Session, User};
use std::path::PathBuf;

const USER_FILENAME: &str = "user.json";
const SESSION_FILENAME: &str = "session.json";

/// Reads the stored session, purging it once the expiry has elapsed.
pub fn load_session() -> Option<Session> {
    let session: Session = read_json(SESSION_FILENAME)?;
    if session.is_expired() {
        purge();
        return None;
    }
    Some(session)
}

/// Reads the stored user profile.
pub fn load_user() -> Option<User> {
    read_json(USER_FILENAME)
}

/// Saves profile and credential after sign-in.
pub fn save(user: &User, session: &Session) -> Result<()> {
    write_json(USER_FILENAME, user)?;
    write_json(SESSION_FILENAME, session)?;
    Ok(())
}

/// Removes both stored files.
pub fn purge() {
    if let Some(dir) = config_dir() {
        let _ = std::fs::remove_file(dir.join(USER_FILENAME));
        let _ = std::fs::remove_file(dir.join(SESSION_FILENAME));
    }
}

fn path(filename: &str) -> Option<PathBuf> {
    Some(config_dir()?.join(filename))
}

fn read_json<T: serde::de::DeserializeOwned>(filename: &str) -> Option<T> {
    let content = std::fs::read_to_string(path(filename)?).ok()?;
    serde_json::from_str(&content).ok()
}

fn write_json<T: serde::Serialize>(filename: &str, value: &T) -> Result<()> {
    let dir =
        config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(dir.join(filename), json)?;
    Ok(())
}
