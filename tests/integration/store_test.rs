//! Integration tests for store queries through the controller.

use filestree_entity::EntryType;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_default_names_follow_config() {
    let app = TestApp::new();
    let label = app.config.store.default_name.clone();

    let first = app.sync.add_entry(EntryType::File, None).await.unwrap();
    let second = app.sync.add_entry(EntryType::File, None).await.unwrap();
    let third = app.sync.add_entry(EntryType::File, None).await.unwrap();
    let dir = app.sync.add_entry(EntryType::Directory, None).await.unwrap();

    assert_eq!(first.name, label);
    assert_eq!(second.name, format!("{label} 1"));
    assert_eq!(third.name, format!("{label} 2"));
    assert_eq!(dir.name, label);
}

#[tokio::test]
async fn test_tree_reflects_cascade_delete() {
    let app = TestApp::new();
    let top = app
        .sync
        .add_entry(EntryType::Directory, None)
        .await
        .unwrap();
    let inner = app
        .sync
        .add_entry(EntryType::Directory, Some(top.id))
        .await
        .unwrap();
    app.sync
        .add_entry(EntryType::File, Some(inner.id))
        .await
        .unwrap();
    let loose = app.sync.add_entry(EntryType::File, None).await.unwrap();

    let tree = app.sync.tree().await.unwrap();
    assert_eq!(tree.total_entries, 4);
    assert_eq!(tree.roots[0].descendant_count(), 2);

    let removed = app.sync.delete_entry(top.id).await.unwrap();
    assert_eq!(removed.len(), 3);

    let tree = app.sync.tree().await.unwrap();
    assert_eq!(tree.total_entries, 1);
    assert_eq!(tree.roots[0].id, loose.id);
}
