//! Sign-in state and explicit sync commands.

use filestree_core::result::AppResult;
use filestree_core::types::AuthState;
use filestree_service::PushOutcome;

use super::Browser;
use crate::output;

/// `login`: authorize and push the current entries.
pub async fn login(browser: &Browser) -> AppResult<()> {
    let outcome = browser.sync.set_auth_state(AuthState::Authorized).await?;
    match outcome {
        PushOutcome::Pushed { rows } => {
            output::print_success(&format!("Signed in, pushed {rows} rows"));
        }
        PushOutcome::Skipped => output::print_warning("Already signed in"),
    }
    Ok(())
}

/// `logout`: stop pushing; the entries stay as they are.
pub async fn logout(browser: &Browser) -> AppResult<()> {
    if !browser.sync.is_authorized() {
        output::print_warning("Not signed in");
        return Ok(());
    }
    browser
        .sync
        .set_auth_state(AuthState::Unauthorized)
        .await?;
    output::print_success("Signed out, changes now stay local");
    Ok(())
}

/// `push`: resend the whole table.
pub async fn push(browser: &Browser) -> AppResult<()> {
    match browser.sync.push().await? {
        PushOutcome::Pushed { rows } => output::print_success(&format!("Pushed {rows} rows")),
        PushOutcome::Skipped => output::print_warning("Not signed in, nothing pushed"),
    }
    Ok(())
}

/// `reload`: replace the entries with the remote table.
pub async fn reload(browser: &mut Browser) -> AppResult<()> {
    let count = browser.sync.reload().await?;
    output::print_success(&format!("Reloaded {count} entries"));
    browser.refresh_scope().await
}
