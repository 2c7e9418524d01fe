//! The red-black tree engine.
//!
//! [`RbTree`] holds nothing but the root handle. Every node lives in storage
//! owned by the caller and is reached through a [`LinkStore`]; mutating
//! operations borrow that store for their duration and only rewrite links.
//!
//! # Invariants
//!
//! Between public operations the tree satisfies:
//! 1. The root, if present, is black
//! 2. A red node never has a red child
//! 3. Every path from a node to an absent child crosses the same number of
//!    black nodes
//! 4. An in-order walk visits nodes in the order chosen by the caller's
//!    comparator
//!
//! Parent and child links always agree: a non-root node is exactly one of its
//! parent's two children.
//!
//! # Time Complexity
//!
//! | Operation              | Complexity |
//! |------------------------|------------|
//! | `insert` / `insert_at` | O(log N)   |
//! | `remove`               | O(log N)   |
//! | `search`               | O(log N)   |
//! | `search_nearest`       | O(log N)   |
//! | `first` / `last`       | O(log N)   |
//! | `successor` step       | O(1) amortized, O(log N) worst |
//! | `clear`                | O(N)       |
//! | `validate`             | O(N)       |
//!
//! # Checked Builds
//!
//! With `debug_assertions` or the `strict-links` feature, every parent lookup
//! cross-checks the parent's child slots, and `insert_at`/`remove` verify
//! that the nodes they are given belong to this tree.

mod balance;
mod insert;
mod iter;
mod remove;
mod search;
mod validate;

pub use iter::{Iter, Walker};
pub use search::{maximum, minimum, predecessor, successor};

use crate::link::Direction;
use crate::store::LinkStore;
use std::fmt;

/// Whether the O(1) parent/child cross-checks and the O(log N) membership
/// checks run.
pub(crate) const CHECK_LINKS: bool = cfg!(any(debug_assertions, feature = "strict-links"));

// =============================================================================
// RbTree Definition
// =============================================================================

/// An intrusive red-black tree over nodes addressed by handles of type `H`.
///
/// The tree does not own, allocate or free nodes. A node may belong to at most
/// one tree at a time, and must stay in the store while linked.
///
/// `RbTree` is not `Clone`: a copied root would share its links with the
/// original.
///
/// # Examples
///
/// ```rust
/// use intrusive_rbtree::{Link, RbTree};
/// use std::cmp::Ordering;
///
/// let keys = [30, 10, 20];
/// let mut links = vec![Link::new(); keys.len()];
/// let mut tree = RbTree::new();
///
/// for handle in 0..keys.len() {
///     tree.insert(&mut links, handle, |_, candidate, existing| {
///         keys[candidate] < keys[existing]
///     });
/// }
///
/// let ordered: Vec<i32> = tree.iter(&links).map(|handle| keys[handle]).collect();
/// assert_eq!(ordered, vec![10, 20, 30]);
///
/// let hit = tree.search(&links, |_, handle| keys[handle].cmp(&20));
/// assert_eq!(hit, Some(2));
/// tree.validate(&links);
/// ```
#[derive(Debug)]
pub struct RbTree<H> {
    root: Option<H>,
}

impl<H> RbTree<H> {
    /// Creates an empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intrusive_rbtree::RbTree;
    ///
    /// let tree: RbTree<usize> = RbTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` if the tree has no nodes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

impl<H: Copy + Eq + fmt::Debug> RbTree<H> {
    /// Returns the root handle, or `None` if the tree is empty.
    #[inline]
    pub const fn root(&self) -> Option<H> {
        self.root
    }

    /// Returns `true` if `node` is linked into this tree.
    ///
    /// Climbs parent links to the top and compares with the root, so it is
    /// O(log N) and never looks at any comparator.
    pub fn contains_node<S>(&self, store: &S, node: H) -> bool
    where
        S: LinkStore<Handle = H> + ?Sized,
    {
        let mut current = node;
        while let Some(parent) = store.link(current).parent() {
            current = parent;
        }
        self.root == Some(current)
    }

    /// Returns the smallest node, or `None` if the tree is empty.
    pub fn first<S>(&self, store: &S) -> Option<H>
    where
        S: LinkStore<Handle = H> + ?Sized,
    {
        self.root.map(|root| minimum(store, root))
    }

    /// Returns the largest node, or `None` if the tree is empty.
    pub fn last<S>(&self, store: &S) -> Option<H>
    where
        S: LinkStore<Handle = H> + ?Sized,
    {
        self.root.map(|root| maximum(store, root))
    }

    /// Returns a lazy in-order iterator over node handles.
    ///
    /// The iterator is double-ended: `.rev()` walks from the largest node
    /// down. It borrows the store, so the tree cannot change while it lives;
    /// use [`walker`](Self::walker) to remove nodes during a walk.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intrusive_rbtree::{Link, RbTree};
    ///
    /// let keys = [2, 1, 3];
    /// let mut links = vec![Link::new(); 3];
    /// let mut tree = RbTree::new();
    /// for handle in 0..3 {
    ///     tree.insert(&mut links, handle, |_, a, b| keys[a] < keys[b]);
    /// }
    ///
    /// let backwards: Vec<i32> = tree.iter(&links).rev().map(|h| keys[h]).collect();
    /// assert_eq!(backwards, vec![3, 2, 1]);
    /// ```
    pub fn iter<'a, S>(&self, store: &'a S) -> Iter<'a, S>
    where
        S: LinkStore<Handle = H> + ?Sized,
    {
        Iter::new(store, self.first(store), self.last(store))
    }

    /// Returns a detached forward walker starting at the smallest node.
    ///
    /// The walker fetches each node's successor before handing the node out,
    /// so the node just returned may be removed before the next step.
    pub fn walker<S>(&self, store: &S) -> Walker<H>
    where
        S: LinkStore<Handle = H> + ?Sized,
    {
        Walker::new(self.first(store), Direction::Right)
    }

    /// Returns a detached backward walker starting at the largest node.
    pub fn walker_rev<S>(&self, store: &S) -> Walker<H>
    where
        S: LinkStore<Handle = H> + ?Sized,
    {
        Walker::new(self.last(store), Direction::Left)
    }
}

impl<H> Default for RbTree<H> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Compile-time Assertions
// =============================================================================

static_assertions::assert_impl_all!(RbTree<usize>: Send, Sync, Default, fmt::Debug);
static_assertions::assert_not_impl_any!(RbTree<usize>: Clone, Copy);

// =============================================================================
// Tests
// =============================================================================
