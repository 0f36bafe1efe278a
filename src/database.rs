//! # Database Module
//!
//! This module provides the high-level Database API for AVLDB, combining
//! the tree and storage layers into the surface the collaborator calls.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │        Public API (Database)        │
//! │  create / find / delete / edit      │
//! │  export / clear / open / save       │
//! ├─────────────────────────────────────┤
//! │       Balanced Ordered Map          │
//! │        (tree::AvlTree)              │
//! ├─────────────────────────────────────┤
//! │        Snapshot Codec + File        │
//! │     (storage::persist/restore)      │
//! └─────────────────────────────────────┘
//! ```
//!
//! ## Error Boundary
//!
//! Map-level errors never escape this module. `create`, `delete`, and
//! `edit` report plain success flags; `find` distinguishes "found" from
//! "absent" with an `Option`. Rejected operations are logged at debug
//! level and leave the tree untouched. Only the lifecycle operations
//! (`open`, `save`) surface real errors, because a failed load or save is
//! something the caller must know about.
//!
//! ## Lifecycle
//!
//! `open` restores the snapshot at the given path (or starts empty if none
//! exists) — the load hook. `save` persists the live tree back to the same
//! path, overwriting it — the save hook. The collaborator calls `open`
//! once at startup and `save` once at shutdown.
//!
//! ## Usage Example
//!
//! ```ignore
//! use avldb::Database;
//!
//! let mut db = Database::open("./data.avldb")?;
//! db.create(1, "Alice");
//! if let Some(hit) = db.find(1) {
//!     println!("{} ({} comparisons)", hit.value, hit.comparisons);
//! }
//! db.save()?;
//! ```

use std::path::{Path, PathBuf};

use eyre::Result;
use tracing::debug;

use crate::storage;
use crate::tree::{AvlTree, SearchResult};

/// One exported record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: i64,
    pub value: String,
}

/// The record store: one live tree plus the snapshot path it loads from
/// and saves to.
#[derive(Debug)]
pub struct Database {
    tree: AvlTree,
    path: PathBuf,
}

impl Database {
    /// Opens the database backed by the snapshot at `path`. A missing or
    /// empty snapshot starts an empty store; a malformed one is an error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let tree = storage::restore(&path)?;
        debug!(?path, records = tree.len(), "database opened");
        Ok(Self { tree, path })
    }

    /// Snapshot path this database loads from and saves to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Inserts a new record. Returns false if the key is already used.
    pub fn create(&mut self, key: i64, value: &str) -> bool {
        match self.tree.insert(key, value.to_string()) {
            Ok(()) => true,
            Err(e) => {
                debug!(key, %e, "create rejected");
                false
            }
        }
    }

    /// Looks up a record, reporting its value and the comparisons spent.
    pub fn find(&self, key: i64) -> Option<SearchResult> {
        match self.tree.search(key) {
            Ok(result) => Some(result),
            Err(e) => {
                debug!(key, %e, "find missed");
                None
            }
        }
    }

    /// Removes a record. Returns false if the key is absent.
    pub fn delete(&mut self, key: i64) -> bool {
        match self.tree.delete(key) {
            Ok(()) => true,
            Err(e) => {
                debug!(key, %e, "delete rejected");
                false
            }
        }
    }

    /// Replaces a record's value. Returns false if the key is absent.
    pub fn edit(&mut self, key: i64, value: &str) -> bool {
        match self.tree.update(key, value.to_string()) {
            Ok(()) => true,
            Err(e) => {
                debug!(key, %e, "edit rejected");
                false
            }
        }
    }

    /// All records in key-set order, each key resolved through the tree.
    pub fn export(&self) -> Vec<Record> {
        self.tree
            .used_keys()
            .iter()
            .filter_map(|&key| {
                self.tree.search(key).ok().map(|result| Record {
                    key,
                    value: result.value,
                })
            })
            .collect()
    }

    /// Replaces the live tree with a fresh empty one. Nothing is persisted
    /// until the next save.
    pub fn clear(&mut self) {
        debug!(records = self.tree.len(), "clearing live tree");
        self.tree = AvlTree::new();
    }

    /// Persists the live tree to the snapshot path, overwriting it.
    pub fn save(&self) -> Result<()> {
        storage::persist(&self.tree, &self.path)?;
        debug!(path = ?self.path, records = self.tree.len(), "database saved");
        Ok(())
    }
}
