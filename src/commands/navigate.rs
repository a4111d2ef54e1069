//! Listing and directory navigation commands.

use serde::Serialize;
use tabled::Tabled;

use filestree_core::result::AppResult;
use filestree_service::navigation::view::ROOT_TITLE;

use super::Browser;
use crate::output::{self, OutputFormat};

/// Entry display row
#[derive(Debug, Serialize, Tabled)]
struct EntryRow {
    /// Listing position
    #[tabled(rename = "#")]
    position: usize,
    /// File or directory
    #[tabled(rename = "Type")]
    entry_type: String,
    /// Name
    #[tabled(rename = "Name")]
    name: String,
    /// Entry ID
    #[tabled(rename = "ID")]
    id: String,
}

/// Current path display
#[derive(Debug, Serialize)]
struct PathInfo<'a> {
    /// Titles from the root down
    path: Vec<&'a str>,
    /// Directories below the root
    depth: usize,
    /// Current directory ID (null at the root)
    scope: Option<String>,
}

/// `ls`: the current directory in display order.
pub async fn list(browser: &Browser) -> AppResult<()> {
    let view = browser.view().await?;
    let rows: Vec<EntryRow> = view
        .entries
        .iter()
        .enumerate()
        .map(|(i, e)| EntryRow {
            position: i + 1,
            entry_type: e.entry_type.to_string(),
            name: e.name.clone(),
            id: e.id.to_string(),
        })
        .collect();

    output::print_list(&rows, browser.format, "(empty directory)");
    Ok(())
}

/// `cd`: descend by position or name, `..` to go up, `/` for the root.
pub async fn change_dir(browser: &mut Browser, target: &str) -> AppResult<()> {
    match target {
        ".." => {
            browser.nav.pop();
        }
        "/" => browser.nav.reset(),
        _ => {
            let entry = browser.resolve(target).await?;
            browser.nav.push(&entry)?;
        }
    }
    Ok(())
}

/// `pwd`: breadcrumbs from the root.
pub fn print_path(browser: &Browser) {
    let info = PathInfo {
        path: browser.nav.breadcrumbs(),
        depth: browser.nav.depth(),
        scope: browser.nav.scope().map(|id| id.to_string()),
    };

    match browser.format {
        OutputFormat::Table => {
            output::print_kv("Path", &info.path.join(" / "));
            output::print_kv("Depth", &info.depth.to_string());
            output::print_kv("Scope", info.scope.as_deref().unwrap_or(ROOT_TITLE));
        }
        OutputFormat::Json => output::print_json(&info, "{}"),
    }
}

/// `tree`: every entry reachable from the root.
pub async fn print_tree(browser: &Browser) -> AppResult<()> {
    let tree = browser.sync.tree().await?;
    output::print_tree(&tree, browser.format);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use filestree_core::error::ErrorKind;
    use filestree_entity::EntryType;
    use filestree_storage::providers::MemoryRowRemote;

    use crate::commands::tests::browser_with;

    #[tokio::test]
    async fn test_cd_by_position_follows_display_order() {
        let mut browser = browser_with(Arc::new(MemoryRowRemote::new()));
        browser.sync.add_entry(EntryType::File, None).await.unwrap();
        let dir = browser
            .sync
            .add_entry(EntryType::Directory, None)
            .await
            .unwrap();

        change_dir(&mut browser, "1").await.unwrap();

        assert_eq!(browser.nav.scope(), Some(dir.id));
        change_dir(&mut browser, "/").await.unwrap();
        assert_eq!(browser.nav.scope(), None);
    }

    #[tokio::test]
    async fn test_cd_into_file_fails() {
        let mut browser = browser_with(Arc::new(MemoryRowRemote::new()));
        browser.sync.add_entry(EntryType::File, None).await.unwrap();

        let err = change_dir(&mut browser, "Untitled").await.unwrap_err();

        assert!(err.is(ErrorKind::Validation));
        assert_eq!(browser.nav.depth(), 0);
    }
}
