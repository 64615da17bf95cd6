//! Key-value storage medium contracts and implementations.
//!
//! # Responsibility
//! - Define the string-keyed, string-valued medium the recipe store writes to.
//! - Keep SQLite details behind a single trait seam.
//!
//! # Invariants
//! - Reading an absent key yields `Ok(None)`, never an error.
//! - Removing an absent key succeeds without effect.
//! - Values are opaque; the medium never interprets document contents.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryKeyValueStore;
pub use sqlite::SqliteKeyValueStore;

pub type KvResult<T> = Result<T, KvError>;

/// Failure reported by a key-value medium.
#[derive(Debug)]
pub enum KvError {
    Db(DbError),
    /// The medium could not serve the request, e.g. a poisoned lock or an
    /// injected test failure.
    Unavailable(String),
}

impl Display for KvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Unavailable(message) => write!(f, "storage unavailable: {message}"),
        }
    }
}

impl Error for KvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for KvError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for KvError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable string-keyed medium, shaped after a mobile async-storage API.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> KvResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> KvResult<()>;
    fn remove_item(&self, key: &str) -> KvResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get_item(&self, key: &str) -> KvResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> KvResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> KvResult<()> {
        (**self).remove_item(key)
    }
}
