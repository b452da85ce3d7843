//! Tests for stored-credential semantics

use chrono::{Duration, Utc};
use psyche_core::{Session, User};

fn make_user() -> User {
    serde_json::from_str(
        r#"{"id": "u1", "name": "Ada", "email": "ada@example.com", "vip_level": "gold"}"#,
    )
    .unwrap()
}

#[test]
fn session_file_roundtrip() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("session.json");

    let session = Session {
        token: "tok-123".to_string(),
        expires_at: Utc::now() + Duration::hours(1),
    };
    std::fs::write(&path, serde_json::to_string_pretty(&session).unwrap()).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let loaded: Session = serde_json::from_str(&content).unwrap();
    assert_eq!(loaded.token, "tok-123");
    assert!(!loaded.is_expired());
}

#[test]
fn expired_session_is_detected_on_load() {
    let session = Session {
        token: "tok".to_string(),
        expires_at: Utc::now() - Duration::hours(1),
    };
    let json = serde_json::to_string(&session).unwrap();
    let loaded: Session = serde_json::from_str(&json).unwrap();
    assert!(loaded.is_expired(), "stale credential must be treated as logged out");
}

#[test]
fn user_file_roundtrip() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("user.json");

    std::fs::write(&path, serde_json::to_string_pretty(&make_user()).unwrap()).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let loaded: User = serde_json::from_str(&content).unwrap();
    assert_eq!(loaded.id, "u1");
    assert_eq!(loaded.vip_level, "gold");
}

#[test]
fn corrupt_session_file_fails_to_parse() {
    let result: Result<Session, _> = serde_json::from_str("not json");
    assert!(result.is_err());
}

#[test]
fn purge_removes_both_files() {
    let tmp = tempfile::tempdir().unwrap();
    let user_path = tmp.path().join("user.json");
    let session_path = tmp.path().join("session.json");

    std::fs::write(&user_path, "{}").unwrap();
    std::fs::write(&session_path, "{}").unwrap();

    let _ = std::fs::remove_file(&user_path);
    let _ = std::fs::remove_file(&session_path);

    assert!(!user_path.exists());
    assert!(!session_path.exists());
}
