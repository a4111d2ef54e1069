//! Session authorization state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether the session currently holds credentials for remote writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthState {
    /// Signed in; mutations are pushed to the remote table.
    Authorized,
    /// Signed out; mutations stay local.
    #[default]
    Unauthorized,
}

impl AuthState {
    /// Returns `true` for [`AuthState::Authorized`].
    pub fn is_authorized(self) -> bool {
        matches!(self, Self::Authorized)
    }
}

impl From<bool> for AuthState {
    fn from(authorized: bool) -> Self {
        if authorized {
            Self::Authorized
        } else {
            Self::Unauthorized
        }
    }
}

impl fmt::Display for AuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authorized => write!(f, "authorized"),
            Self::Unauthorized => write!(f, "unauthorized"),
        }
    }
}
