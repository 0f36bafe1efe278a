//! # AVLDB CLI Module
//!
//! This module provides the interactive command-line interface for AVLDB —
//! the collaborator that drives the record store. It supports:
//!
//! - Interactive record commands with persistent history
//! - ASCII table-formatted record listing
//! - Load-on-start and save-on-exit snapshot lifecycle
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      CLI Entry Point                        │
//! │                      (bin/avldb.rs)                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │                         REPL Loop                           │
//! │  - Reads input via rustyline                                │
//! │  - Dispatches to the command handler                        │
//! │  - Saves the snapshot on every exit path                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │     Commands          │    Table Formatter    │   History   │
//! │  (create, find, edit, │  ASCII box drawing    │  Persistent │
//! │   delete, list, ...)  │  for record listings  │  ~/.avldb_* │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Commands
//!
//! | Command                | Description                              |
//! |------------------------|------------------------------------------|
//! | `create <key> <value>` | Insert a new record                      |
//! | `find <key>`           | Show a record and the comparison count   |
//! | `edit <key> <value>`   | Replace an existing record's value       |
//! | `delete <key>`         | Remove a record                          |
//! | `list`                 | Show all records as an ASCII table       |
//! | `clear`                | Drop every record from the live tree     |
//! | `save`                 | Persist the snapshot immediately         |
//! | `help`                 | Show available commands                  |
//! | `quit` / `exit`        | Save and exit                            |
//!
//! ## History
//!
//! Command history is persisted to `~/.avldb_history` by default. This can
//! be overridden with the `AVLDB_HISTORY` environment variable.
//!
//! ## Module Organization
//!
//! - `repl`: read-eval-print loop with rustyline integration
//! - `commands`: command parsing and execution
//! - `table`: ASCII table formatter for record listings
//! - `history`: history file path resolution

pub mod commands;
pub mod history;
pub mod repl;
pub mod table;

pub use repl::Repl;
