//! Newtype wrappers around [`uuid::Uuid`] for domain identifiers.
//!
//! Using distinct types keeps entry identifiers from being mixed up with
//! event or other identifiers. Identifiers are rendered in the canonical
//! upper-case hyphenated form used by the row table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, ErrorKind};

/// Length of the canonical `8-4-4-4-12` hyphenated form.
const HYPHENATED_LEN: usize = 36;

/// Macro to define a newtype ID wrapper around `Uuid`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:X}", self.0.hyphenated())
            }
        }

        impl FromStr for $name {
            type Err = AppError;

            /// Parses the hyphenated form only, in either case. Simple,
            /// braced, URN and padded forms are rejected.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.len() != HYPHENATED_LEN {
                    return Err(AppError::validation(format!(
                        "Not a hyphenated identifier: '{s}'"
                    )));
                }
                Uuid::try_parse(s).map(Self).map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Validation,
                        format!("Not a hyphenated identifier: '{s}'"),
                        e,
                    )
                })
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for a file or directory entry.
    EntryId
);

define_id!(
    /// Unique identifier for an emitted sync event.
    EventId
);
