//! Dictionary storage and lookup.
//!
//! `SystemDictionary` stores surface → entries mappings in a serialized trie,
//! together with the unknown-word model and the `ConnectionMatrix` used for
//! path scoring. `UserDictionary` holds plain-text user words. `Dictionary`
//! layers the two behind one prefix lookup.

mod connection;
mod connection_io;
mod entry;
mod layered;
mod pos;
mod system;
mod system_io;
#[cfg(test)]
mod tests;
mod unknown;
mod user;

pub use connection::ConnectionMatrix;
pub use entry::{DictionaryEntry, Expression};
pub use layered::{load_dictionary, Dictionary};
pub use pos::{PosTag, PosType};
pub use system::{DictionaryStats, SystemDictionary};
pub use unknown::{CategoryDefinition, UnknownClass, UnknownDictionary};
pub use user::{UserDictionary, UserEntryIds};

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Error raised while loading, building or saving dictionaries.
///
/// Format-level variants describe what is wrong with the data; `System` and
/// `User` wrap them with the file that failed at the `Dictionary::load` level.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected NRDX or NRCX)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("checksum mismatch (stored {expected:08x}, computed {actual:08x})")]
    Checksum { expected: u32, actual: u32 },

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error("corrupt dictionary: {0}")]
    Corrupt(String),

    #[error("cannot build dictionary: {0}")]
    Build(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("line {line}: {reason}")]
    UserDictionary { line: usize, reason: String },

    #[error("system dictionary {}: {source}", .path.display())]
    System {
        path: PathBuf,
        #[source]
        source: Box<LoadError>,
    },

    #[error("user dictionary {}: {source}", .path.display())]
    User {
        path: PathBuf,
        #[source]
        source: Box<LoadError>,
    },
}

impl LoadError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        LoadError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Which layer produced an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Origin {
    System,
    User,
}

/// Precedence between user and system entries at the same position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverridePolicy {
    /// System entries no longer than a matching user entry are hidden.
    #[default]
    Override,
    /// User and system entries compete on cost.
    Additive,
}

/// All entries sharing a surface that is a prefix of the searched text.
#[derive(Debug, Clone, Copy)]
pub struct PrefixMatch<'a> {
    pub char_len: usize,
    pub entries: &'a [DictionaryEntry],
}

/// A dictionary entry matched at some position of the input.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub entry: &'a DictionaryEntry,
    pub char_len: usize,
    pub origin: Origin,
}

/// A source of dictionary entries keyed by surface.
pub trait EntrySource: Send + Sync {
    fn origin(&self) -> Origin;

    /// Entries whose surface equals `surface`.
    fn lookup(&self, surface: &str) -> &[DictionaryEntry];

    /// Every surface that is a prefix of `input`, shortest first.
    fn common_prefix_search(&self, input: &[char]) -> Vec<PrefixMatch<'_>>;
}
