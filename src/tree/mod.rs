//! # Balanced Ordered Map
//!
//! This module implements the core data structure of AVLDB: an AVL tree
//! mapping unique `i64` keys to `String` values, with the key set tracked
//! alongside the node graph.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                  AvlTree                      │
//! │  root: Option<Box<TreeNode>>                  │
//! │  used_keys: Vec<i64>        (key-set order)   │
//! │  key_index: HashSet<i64>    (existence check) │
//! ├───────────────────────────────────────────────┤
//! │ insert / delete / search / update             │
//! │   recursive descent + rotation rebalancing    │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! Every operation first consults the key index, then walks the node graph.
//! The two views are updated in lockstep so they always describe the same
//! key set.
//!
//! ## Module Organization
//!
//! - [`node`]: `TreeNode` and the owned `Link` type, height caching
//! - [`avl`]: `AvlTree` operations, rotations, typed errors

pub mod avl;
pub mod node;

pub use avl::{AvlTree, SearchResult, TreeError};
pub use node::{Link, TreeNode};
