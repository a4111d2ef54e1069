//! Integration tests for sessions backed by the local JSON table file.

use filestree_core::types::AuthState;
use filestree_entity::EntryType;
use filestree_service::StartOutcome;

use crate::helpers::LocalApp;

#[tokio::test]
async fn test_entries_survive_a_new_session() {
    let app = LocalApp::new();

    let (sync, _) = app.session().await;
    assert_eq!(sync.start().await.unwrap(), StartOutcome::Fetched { count: 0 });
    sync.set_auth_state(AuthState::Authorized).await.unwrap();
    let dir = sync.add_entry(EntryType::Directory, None).await.unwrap();
    let file = sync.add_entry(EntryType::File, Some(dir.id)).await.unwrap();
    sync.flush().await.unwrap();
    let before = sync.snapshot().await.unwrap();
    drop(sync);

    let (sync, _) = app.session().await;
    assert_eq!(sync.start().await.unwrap(), StartOutcome::Fetched { count: 2 });
    assert_eq!(sync.snapshot().await.unwrap(), before);
    assert_eq!(sync.children_of(Some(dir.id)).await.unwrap(), vec![file]);
}

#[tokio::test]
async fn test_unauthorized_session_leaves_file_untouched() {
    let app = LocalApp::new();

    let (sync, remote) = app.session().await;
    sync.add_entry(EntryType::File, None).await.unwrap();
    sync.flush().await.unwrap();

    assert!(!app.dir.path().join("entries.json").exists());
    assert_eq!(remote.fetch_rows().await.unwrap(), vec![Vec::<String>::new()]);
}
