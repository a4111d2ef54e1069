//! Entry creation and deletion commands.

use filestree_core::result::AppResult;
use filestree_entity::EntryType;

use super::Browser;
use crate::output;

/// `mkdir`: a new directory in the current scope.
pub async fn make_dir(browser: &Browser) -> AppResult<()> {
    create(browser, EntryType::Directory).await
}

/// `touch`: a new file in the current scope.
pub async fn make_file(browser: &Browser) -> AppResult<()> {
    create(browser, EntryType::File).await
}

async fn create(browser: &Browser, entry_type: EntryType) -> AppResult<()> {
    let entry = browser
        .sync
        .add_entry(entry_type, browser.nav.scope())
        .await?;
    output::print_success(&format!("Created {} '{}'", entry.entry_type, entry.name));
    Ok(())
}

/// `rm`: delete an entry, and for directories everything beneath it.
pub async fn remove(browser: &mut Browser, target: &str) -> AppResult<()> {
    let entry = browser.resolve(target).await?;
    let removed = browser.sync.delete_entry(entry.id).await?;

    if removed.len() > 1 {
        output::print_success(&format!(
            "Deleted '{}' and {} entries inside it",
            entry.name,
            removed.len() - 1
        ));
    } else {
        output::print_success(&format!("Deleted '{}'", entry.name));
    }

    browser.refresh_scope().await
}
