//! # AVLDB - Embedded AVL-Tree Record Store
//!
//! AVLDB is a small embedded record store mapping integer keys to string
//! values. Records live in a self-balancing AVL tree; the whole tree —
//! shape, cached heights and all — is persisted as a single snapshot file
//! and restored on startup.
//!
//! ## Quick Start
//!
//! ```ignore
//! use avldb::Database;
//!
//! let mut db = Database::open("./data.avldb")?;
//!
//! db.create(1, "Alice");
//! db.create(2, "Bob");
//!
//! if let Some(hit) = db.find(2) {
//!     println!("{} ({} comparisons)", hit.value, hit.comparisons);
//! }
//!
//! db.save()?;
//! ```
//!
//! ## Architecture
//!
//! AVLDB uses a layered architecture:
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │      CLI (REPL, bin/avldb)          │
//! ├─────────────────────────────────────┤
//! │      Public API (Database)          │
//! ├─────────────────────────────────────┤
//! │   Balanced Ordered Map (AvlTree)    │
//! ├─────────────────────────────────────┤
//! │  Snapshot Codec + File Persistence  │
//! └─────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Lifecycle
//!
//! The store loads its snapshot once when opened and saves it back on
//! shutdown (the CLI also exposes an explicit `save`). Saving serializes
//! the exact node graph; loading rehydrates it verbatim, cached heights
//! included, so a save/load round trip reproduces the tree bit for bit.
//!
//! ## Module Overview
//!
//! - [`tree`]: AVL tree — nodes, rotations, insert/delete/search/update
//! - [`storage`]: snapshot codec, file header, persist/restore
//! - [`database`]: the boundary that turns tree errors into plain signals
//! - [`config`]: snapshot format constants
//! - [`cli`]: interactive REPL

pub mod cli;
pub mod config;
pub mod database;
pub mod storage;
pub mod tree;

pub use database::{Database, Record};
pub use tree::{AvlTree, SearchResult, TreeError};
