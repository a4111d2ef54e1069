//! Browser command definitions and dispatch.

pub mod edit;
pub mod navigate;
pub mod session;

use clap::{Parser, Subcommand};

use filestree_core::error::AppError;
use filestree_core::result::AppResult;
use filestree_entity::Entry;
use filestree_service::{DirectoryView, NavigationStack, SyncController};

use crate::output::{self, OutputFormat};

/// One line typed at the browser prompt.
#[derive(Debug, Parser)]
#[command(name = "filestree", no_binary_name = true, disable_version_flag = true)]
pub struct BrowserLine {
    /// Command to execute
    #[command(subcommand)]
    pub command: BrowserCommand,
}

/// Browser commands
#[derive(Debug, Subcommand)]
pub enum BrowserCommand {
    /// List the current directory
    Ls,
    /// Enter a directory by position or name; `..` goes up, `/` to the root
    Cd {
        /// Listing position, name, `..` or `/`
        #[arg(required = true, num_args = 1..)]
        target: Vec<String>,
    },
    /// Show the path to the current directory
    Pwd,
    /// Show every entry as a tree
    Tree,
    /// Create a directory here
    Mkdir,
    /// Create a file here
    Touch,
    /// Delete an entry and everything inside it
    Rm {
        /// Listing position or name
        #[arg(required = true, num_args = 1..)]
        target: Vec<String>,
    },
    /// Sign in; the current entries replace the remote table
    Login,
    /// Sign out; later changes stay local
    Logout,
    /// Send the current entries to the remote table
    Push,
    /// Replace the current entries with the remote table
    Reload,
    /// Leave the browser
    #[command(alias = "exit")]
    Quit,
}

/// Whether the prompt loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line
    Continue,
    /// Stop the browser
    Quit,
}

/// Interactive state: the sync controller and where the user is.
#[derive(Debug)]
pub struct Browser {
    sync: SyncController,
    nav: NavigationStack,
    format: OutputFormat,
}

impl Browser {
    /// Create a browser positioned at the root.
    pub fn new(sync: SyncController, format: OutputFormat) -> Self {
        Self {
            sync,
            nav: NavigationStack::new(),
            format,
        }
    }

    /// Prompt text for the current scope.
    pub fn prompt(&self) -> String {
        format!("{}> ", self.nav.title())
    }

    /// Parse and execute one input line, reporting errors to the user.
    pub async fn execute_line(&mut self, line: &str) -> Flow {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Flow::Continue;
        }

        let parsed = match BrowserLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(e) => {
                let _ = e.print();
                return Flow::Continue;
            }
        };

        match self.execute(parsed.command).await {
            Ok(flow) => flow,
            Err(e) => {
                output::print_error(&e.to_string());
                Flow::Continue
            }
        }
    }

    /// Execute a parsed command
    pub async fn execute(&mut self, command: BrowserCommand) -> AppResult<Flow> {
        match command {
            BrowserCommand::Ls => navigate::list(self).await?,
            BrowserCommand::Cd { target } => navigate::change_dir(self, &target.join(" ")).await?,
            BrowserCommand::Pwd => navigate::print_path(self),
            BrowserCommand::Tree => navigate::print_tree(self).await?,
            BrowserCommand::Mkdir => edit::make_dir(self).await?,
            BrowserCommand::Touch => edit::make_file(self).await?,
            BrowserCommand::Rm { target } => edit::remove(self, &target.join(" ")).await?,
            BrowserCommand::Login => session::login(self).await?,
            BrowserCommand::Logout => session::logout(self).await?,
            BrowserCommand::Push => session::push(self).await?,
            BrowserCommand::Reload => session::reload(self).await?,
            BrowserCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// The current directory, freshly derived from the store.
    pub async fn view(&self) -> AppResult<DirectoryView> {
        let scope = self.nav.scope();
        let entries = self.sync.children_of(scope).await?;
        Ok(DirectoryView::new(scope, self.nav.title(), entries))
    }

    /// Resolve a listing position or name in the current directory.
    pub async fn resolve(&self, target: &str) -> AppResult<Entry> {
        self.view()
            .await?
            .resolve(target)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("No entry '{target}' here")))
    }

    /// Leave directories that no longer exist, e.g. after a reload.
    pub async fn refresh_scope(&mut self) -> AppResult<()> {
        let snapshot = self.sync.snapshot().await?;
        if self.nav.retain_existing(&snapshot) {
            output::print_warning(&format!(
                "Current directory no longer exists, moved to '{}'",
                self.nav.title()
            ));
        }
        Ok(())
    }
}
