//! Ordered lookups and in-order neighbours.
//!
//! Lookups descend from the root steered by a caller-supplied comparison that
//! reports how a node orders relative to the probe, the same convention as
//! [`slice::binary_search_by`]. Neighbour walks need no comparator: they
//! follow links only, so they are free functions over a store.

use super::RbTree;
use crate::link::Direction;
use crate::store::LinkStore;
use std::cmp::Ordering;
use std::fmt;

/// Outcome of one root-to-leaf descent.
enum Descent<H> {
    /// A node comparing equal to the probe.
    Hit(H),
    /// No equal node; carries the last node visited, if any.
    Miss(Option<H>),
}

impl<H: Copy + Eq + fmt::Debug> RbTree<H> {
    fn descend<S, F>(&self, store: &S, mut compare: F) -> Descent<H>
    where
        S: LinkStore<Handle = H> + ?Sized,
        F: FnMut(&S, H) -> Ordering,
    {
        let mut last = None;
        let mut current = self.root;
        while let Some(node) = current {
            last = Some(node);
            current = match compare(store, node) {
                Ordering::Less => store.link(node).right(),
                Ordering::Greater => store.link(node).left(),
                Ordering::Equal => return Descent::Hit(node),
            };
        }
        Descent::Miss(last)
    }

    /// Finds a node equal to the probe.
    ///
    /// `compare(store, node)` returns how `node` orders relative to the probe:
    /// `Less` if the node is smaller, `Greater` if it is larger. When several
    /// nodes compare equal, whichever the descent meets first is returned.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intrusive_rbtree::{Link, RbTree};
    ///
    /// let keys = [8, 3, 5];
    /// let mut links = vec![Link::new(); 3];
    /// let mut tree = RbTree::new();
    /// for handle in 0..3 {
    ///     tree.insert(&mut links, handle, |_, a, b| keys[a] < keys[b]);
    /// }
    ///
    /// assert_eq!(tree.search(&links, |_, node| keys[node].cmp(&5)), Some(2));
    /// assert_eq!(tree.search(&links, |_, node| keys[node].cmp(&4)), None);
    /// ```
    pub fn search<S, F>(&self, store: &S, compare: F) -> Option<H>
    where
        S: LinkStore<Handle = H> + ?Sized,
        F: FnMut(&S, H) -> Ordering,
    {
        match self.descend(store, compare) {
            Descent::Hit(node) => Some(node),
            Descent::Miss(_) => None,
        }
    }

    /// Finds a node equal to the probe, or else the node next to where the
    /// probe would sit.
    ///
    /// On a miss the result is the last node visited before falling off the
    /// tree, which is the probe's in-order predecessor or successor. Compare
    /// it with the probe to tell which. Returns `None` only for an empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intrusive_rbtree::{Link, RbTree};
    ///
    /// let keys = [10, 20, 30];
    /// let mut links = vec![Link::new(); 3];
    /// let mut tree = RbTree::new();
    /// for handle in 0..3 {
    ///     tree.insert(&mut links, handle, |_, a, b| keys[a] < keys[b]);
    /// }
    ///
    /// let near = tree.search_nearest(&links, |_, node| keys[node].cmp(&25)).unwrap();
    /// assert!(keys[near] == 20 || keys[near] == 30);
    /// ```
    pub fn search_nearest<S, F>(&self, store: &S, compare: F) -> Option<H>
    where
        S: LinkStore<Handle = H> + ?Sized,
        F: FnMut(&S, H) -> Ordering,
    {
        match self.descend(store, compare) {
            Descent::Hit(node) | Descent::Miss(Some(node)) => Some(node),
            Descent::Miss(None) => None,
        }
    }
}

// =============================================================================
// Neighbour Walks
// =============================================================================

fn extreme<S>(store: &S, node: S::Handle, direction: Direction) -> S::Handle
where
    S: LinkStore + ?Sized,
{
    let mut current = node;
    while let Some(child) = store.link(current).child(direction) {
        current = child;
    }
    current
}

/// The in-order neighbour of `node` in `direction`.
pub(super) fn neighbour<S>(store: &S, node: S::Handle, direction: Direction) -> Option<S::Handle>
where
    S: LinkStore + ?Sized,
{
    if let Some(child) = store.link(node).child(direction) {
        return Some(extreme(store, child, direction.opposite()));
    }

    let mut current = node;
    while let Some(parent) = store.link(current).parent() {
        if store.link(parent).child(direction.opposite()) == Some(current) {
            return Some(parent);
        }
        current = parent;
    }
    None
}

/// Returns the smallest node of the subtree rooted at `node`.
pub fn minimum<S>(store: &S, node: S::Handle) -> S::Handle
where
    S: LinkStore + ?Sized,
{
    extreme(store, node, Direction::Left)
}

/// Returns the largest node of the subtree rooted at `node`.
pub fn maximum<S>(store: &S, node: S::Handle) -> S::Handle
where
    S: LinkStore + ?Sized,
{
    extreme(store, node, Direction::Right)
}

/// Returns the node following `node` in order, or `None` if it is the last.
///
/// O(1) amortized over a full walk, O(log N) for a single step.
pub fn successor<S>(store: &S, node: S::Handle) -> Option<S::Handle>
where
    S: LinkStore + ?Sized,
{
    neighbour(store, node, Direction::Right)
}

/// Returns the node preceding `node` in order, or `None` if it is the first.
pub fn predecessor<S>(store: &S, node: S::Handle) -> Option<S::Handle>
where
    S: LinkStore + ?Sized,
{
    neighbour(store, node, Direction::Left)
}
