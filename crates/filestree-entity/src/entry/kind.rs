//! Entry type enumeration and its row type codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Row type code for files.
pub const FILE_CODE: &str = "f";

/// Row type code written for directories.
pub const DIRECTORY_CODE: &str = "d";

/// Whether an entry is a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// A leaf item.
    File,
    /// A container other entries can name as their parent.
    Directory,
}

impl EntryType {
    /// Map a row type code to an entry type.
    ///
    /// Only `"f"` denotes a file; every other code, the empty one included,
    /// is read as a directory.
    pub fn from_code(code: &str) -> Self {
        if code == FILE_CODE {
            Self::File
        } else {
            Self::Directory
        }
    }

    /// The single-character row type code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::File => FILE_CODE,
            Self::Directory => DIRECTORY_CODE,
        }
    }

    /// Check whether entries of this type can contain children.
    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory)
    }

    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
        }
    }

    /// Sort rank: directories list before files.
    pub(crate) fn display_rank(&self) -> u8 {
        match self {
            Self::Directory => 0,
            Self::File => 1,
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
