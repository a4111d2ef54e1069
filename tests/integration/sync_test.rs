//! Integration tests for push gating and fetch behavior.

use std::time::Duration;

use filestree_core::error::ErrorKind;
use filestree_core::events::{EventPayload, SyncEvent};
use filestree_core::types::AuthState;
use filestree_entity::{Entry, EntryType};
use filestree_service::{StartOutcome, decode_rows, encode_entries};
use filestree_storage::providers::MemoryRowRemote;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_session_start_loads_remote_table() {
    let docs = Entry::create(None, EntryType::Directory, "docs");
    let notes = Entry::create(Some(docs.id), EntryType::File, "notes");
    let app = TestApp::with_remote(MemoryRowRemote::with_rows(encode_entries(&[
        docs.clone(),
        notes.clone(),
    ])));

    let outcome = app.sync.start().await.unwrap();

    assert_eq!(outcome, StartOutcome::Fetched { count: 2 });
    assert_eq!(app.sync.children_of(None).await.unwrap(), vec![docs.clone()]);
    assert_eq!(app.sync.children_of(Some(docs.id)).await.unwrap(), vec![notes]);
    assert_eq!(app.sync.start().await.unwrap(), StartOutcome::AlreadyLoaded { count: 2 });
    assert_eq!(app.remote.fetch_count(), 1);
}

#[tokio::test]
async fn test_blank_sheet_loads_as_empty_store() {
    let app = TestApp::new();
    assert_eq!(
        app.sync.start().await.unwrap(),
        StartOutcome::Fetched { count: 0 }
    );
    assert!(app.sync.snapshot().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_rows_are_skipped_on_load() {
    let ok = Entry::create(None, EntryType::Directory, "ok");
    let mut rows = vec![vec![
        "not-a-uuid".to_string(),
        String::new(),
        "f".to_string(),
        "x".to_string(),
    ]];
    rows.extend(encode_entries(&[ok.clone()]));
    let app = TestApp::with_remote(MemoryRowRemote::with_rows(rows));

    app.sync.start().await.unwrap();

    assert_eq!(app.sync.snapshot().await.unwrap(), vec![ok]);
}

#[tokio::test]
async fn test_no_writes_until_authorized_then_one_per_mutation() {
    let app = TestApp::new();
    app.sync.start().await.unwrap();

    let dir = app
        .sync
        .add_entry(EntryType::Directory, None)
        .await
        .unwrap();
    app.sync.add_entry(EntryType::File, Some(dir.id)).await.unwrap();
    app.sync.flush().await.unwrap();
    assert_eq!(app.remote.write_count().await, 0);

    app.sign_in().await;
    assert_eq!(app.remote.write_count().await, 1);

    app.sync.add_entry(EntryType::File, None).await.unwrap();
    app.sync.flush().await.unwrap();
    assert_eq!(app.remote.write_count().await, 2);

    app.sync.delete_entry(dir.id).await.unwrap();
    app.sync.flush().await.unwrap();

    let writes = app.remote.writes().await;
    assert_eq!(writes.len(), 3);
    let snapshot = app.sync.snapshot().await.unwrap();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(decode_rows(&writes[2]), snapshot);
}

#[tokio::test]
async fn test_failed_fetch_then_reload() {
    let entry = Entry::create(None, EntryType::File, "kept");
    let remote = MemoryRowRemote::with_rows(encode_entries(&[entry.clone()]));
    remote.fail_next_fetch();
    let app = TestApp::with_remote(remote);

    let err = app.sync.start().await.unwrap_err();
    assert!(err.is(ErrorKind::RemoteFetch));
    assert!(app.sync.snapshot().await.unwrap().is_empty());

    assert_eq!(app.sync.reload().await.unwrap(), 1);
    assert_eq!(app.sync.snapshot().await.unwrap(), vec![entry]);
}

#[tokio::test]
async fn test_write_failure_reaches_listeners() {
    let app = TestApp::new();
    app.remote.set_fail_writes(true);
    let mut events = app.sync.subscribe();

    let err = app
        .sync
        .set_auth_state(AuthState::Authorized)
        .await
        .unwrap_err();

    assert!(err.is(ErrorKind::RemoteWrite));
    let changed = events.recv().await.unwrap();
    assert_eq!(
        changed.payload,
        EventPayload::Sync(SyncEvent::AuthorizationChanged {
            state: AuthState::Authorized
        })
    );
    let failed = events.recv().await.unwrap();
    assert!(matches!(
        failed.payload,
        EventPayload::Sync(SyncEvent::PushFailed { .. })
    ));

    app.remote.set_fail_writes(false);
    app.sync.add_entry(EntryType::File, None).await.unwrap();
    app.sync.flush().await.unwrap();
    assert_eq!(app.remote.rows().await.len(), 1);
}

#[tokio::test]
async fn test_concurrent_callers_are_serialized() {
    let app = TestApp::with_remote(MemoryRowRemote::new().with_latency(Duration::from_millis(2)));
    app.sign_in().await;

    let mut handles = Vec::new();
    for _ in 0..10 {
        let sync = app.sync.clone();
        handles.push(tokio::spawn(async move {
            sync.add_entry(EntryType::Directory, None).await
        }));
    }
    let mut names = Vec::new();
    for handle in handles {
        names.push(handle.await.unwrap().unwrap().name);
    }
    app.sync.flush().await.unwrap();

    names.sort();
    names.dedup();
    assert_eq!(names.len(), 10);
    assert_eq!(app.remote.max_in_flight(), 1);
    assert_eq!(app.remote.write_count().await, 11);
}
