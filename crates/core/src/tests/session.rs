use std::sync::Arc;

use crate::session::USERNAME_KEY;
use crate::{CoreError, CoreResult, FileStore, KeyValueStore, MemoryStore, Session};

/// Store whose writes always fail
struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> CoreResult<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> CoreResult<()> {
        Err(CoreError::io_error("read-only"))
    }

    fn remove(&self, _key: &str) -> CoreResult<()> {
        Err(CoreError::io_error("read-only"))
    }
}

#[test]
fn test_new_session_is_unauthenticated() {
    let session = Session::in_memory();
    assert_eq!(session.access_token(), None);
    assert_eq!(session.username(), None);
    assert!(!session.is_authenticated());
}

#[test]
fn test_set_and_read_token() {
    let session = Session::in_memory();
    session.set_access_token("abc");
    assert_eq!(session.access_token().as_deref(), Some("abc"));
    session.set_access_token("def");
    assert_eq!(session.access_token().as_deref(), Some("def"));
    assert!(session.is_authenticated());
}

#[test]
fn test_establish_persists_username() {
    let storage = Arc::new(MemoryStore::new());
    let session = Session::new(storage.clone());

    session.establish("tok", "alice").unwrap();

    assert_eq!(session.access_token().as_deref(), Some("tok"));
    assert_eq!(session.username().as_deref(), Some("alice"));
    assert_eq!(storage.get(USERNAME_KEY).unwrap().as_deref(), Some("alice"));
}

#[test]
fn test_clear_tokens_removes_username() {
    let storage = Arc::new(MemoryStore::new());
    let session = Session::new(storage.clone());
    session.establish("tok", "alice").unwrap();

    session.clear_tokens();

    assert_eq!(session.access_token(), None);
    assert_eq!(session.username(), None);
    assert_eq!(storage.get(USERNAME_KEY).unwrap(), None);
}

#[test]
fn test_username_without_token_is_not_authenticated() {
    let storage = Arc::new(MemoryStore::new());
    storage.set(USERNAME_KEY, "alice").unwrap();

    let session = Session::new(storage);
    assert_eq!(session.username().as_deref(), Some("alice"));
    assert!(!session.is_authenticated());
}

#[test]
fn test_username_survives_restart_but_token_does_not() {
    let dir = tempfile::tempdir().unwrap();

    let first = Session::new(Arc::new(FileStore::in_dir(dir.path())));
    first.establish("tok", "alice").unwrap();
    drop(first);

    let second = Session::new(Arc::new(FileStore::in_dir(dir.path())));
    assert_eq!(second.username().as_deref(), Some("alice"));
    assert_eq!(second.access_token(), None);
}

#[test]
fn test_establish_fails_without_storing_token() {
    let session = Session::new(Arc::new(ReadOnlyStore));

    let result = session.establish("tok", "alice");

    assert!(matches!(result, Err(CoreError::Io { .. })));
    assert!(!session.is_authenticated());
    assert_eq!(session.username(), None);
}

#[test]
fn test_login_recovers_from_truncated_storage_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::in_dir(dir.path());
    std::fs::write(store.path(), r#"{"username": "al"#).unwrap();
    let session = Session::new(Arc::new(store));

    session.establish("tok", "alice").unwrap();
    assert_eq!(session.username().as_deref(), Some("alice"));

    session.clear_tokens();
    assert_eq!(session.username(), None);

    session.establish("tok2", "bob").unwrap();
    assert_eq!(session.username().as_deref(), Some("bob"));
}

#[test]
fn test_debug_output_hides_token() {
    let session = Session::in_memory();
    session.set_access_token("super-secret");
    let printed = format!("{session:?}");
    assert!(!printed.contains("super-secret"));
    assert!(printed.contains("authenticated: true"));
}
