//! # Tree Node
//!
//! One stored record: an `i64` key, its `String` payload, the cached
//! subtree height, and exclusively-owned child links.
//!
//! ## Height Caching
//!
//! Every node caches the height of the subtree rooted at it: 1 for a leaf,
//! `1 + max(height(left), height(right))` for an interior node, and 0 for
//! an absent subtree (see [`height`]). The cache must be refreshed with
//! [`TreeNode::update_height`] after any structural change below the node;
//! the rebalancing logic in `tree::avl` reads balance factors from it.
//!
//! ## Ownership
//!
//! Children are `Option<Box<TreeNode>>`. Subtrees are never shared or
//! aliased, so plain exclusive ownership is enough; rotations move boxes
//! between links with `Option::take`.

/// An exclusively-owned, possibly absent subtree.
pub type Link = Option<Box<TreeNode>>;

/// A single record in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub(crate) key: i64,
    pub(crate) value: String,
    pub(crate) height: u32,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl TreeNode {
    /// Creates a fresh leaf node with height 1.
    pub fn new(key: i64, value: String) -> Self {
        Self {
            key,
            value,
            height: 1,
            left: None,
            right: None,
        }
    }

    pub fn key(&self) -> i64 {
        self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cached height of the subtree rooted at this node.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn left(&self) -> Option<&TreeNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&TreeNode> {
        self.right.as_deref()
    }

    /// Recomputes the cached height from the children's cached heights.
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// Balance factor: `height(left) - height(right)`.
    pub(crate) fn balance(&self) -> i64 {
        i64::from(height(&self.left)) - i64::from(height(&self.right))
    }
}

/// Height of a possibly absent subtree; 0 for `None`.
pub(crate) fn height(link: &Link) -> u32 {
    link.as_deref().map_or(0, TreeNode::height)
}
