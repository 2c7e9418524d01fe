//! In-order traversal.
//!
//! [`Iter`] borrows the store and yields handles lazily from both ends.
//! [`Walker`] holds no borrow at all, so the tree can be mutated between
//! steps.

use super::search::neighbour;
use crate::link::Direction;
use crate::store::LinkStore;
use std::fmt;
use std::iter::FusedIterator;

// =============================================================================
// Iter
// =============================================================================

/// A double-ended in-order iterator over the handles of an [`RbTree`].
///
/// Created by [`RbTree::iter`]. Each step follows links from the previous
/// node, so a full walk is O(N) and needs no allocation.
///
/// [`RbTree`]: super::RbTree
/// [`RbTree::iter`]: super::RbTree::iter
pub struct Iter<'a, S: LinkStore + ?Sized> {
    store: &'a S,
    front: Option<S::Handle>,
    back: Option<S::Handle>,
}

impl<'a, S: LinkStore + ?Sized> Iter<'a, S> {
    pub(super) const fn new(
        store: &'a S,
        front: Option<S::Handle>,
        back: Option<S::Handle>,
    ) -> Self {
        Self { store, front, back }
    }

    /// Yields `node` and moves the front or back cursor past it.
    fn advance(&mut self, node: S::Handle, direction: Direction) -> S::Handle {
        if self.front == self.back {
            self.front = None;
            self.back = None;
        } else {
            let next = neighbour(self.store, node, direction);
            match direction {
                Direction::Right => self.front = next,
                Direction::Left => self.back = next,
            }
        }
        node
    }
}

impl<S: LinkStore + ?Sized> Iterator for Iter<'_, S> {
    type Item = S::Handle;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.front?;
        Some(self.advance(node, Direction::Right))
    }
}

impl<S: LinkStore + ?Sized> DoubleEndedIterator for Iter<'_, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let node = self.back?;
        Some(self.advance(node, Direction::Left))
    }
}

impl<S: LinkStore + ?Sized> FusedIterator for Iter<'_, S> {}

impl<S: LinkStore + ?Sized> Clone for Iter<'_, S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store,
            front: self.front,
            back: self.back,
        }
    }
}

impl<S: LinkStore + ?Sized> fmt::Debug for Iter<'_, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Iter")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Walker
// =============================================================================

/// A detached in-order cursor that tolerates removal of the node it just
/// returned.
///
/// A `Walker` stores handles only. Each call to [`next`](Self::next) borrows
/// the store briefly, hands out the current node and remembers that node's
/// neighbour, so the returned node may then be removed from the tree. Removing
/// any *other* node, or inserting, while a walk is in progress may make the
/// walker skip or repeat nodes.
///
/// # Examples
///
/// ```rust
/// use intrusive_rbtree::{Link, RbTree};
///
/// let keys = [5, 1, 4, 2, 3];
/// let mut links = vec![Link::new(); keys.len()];
/// let mut tree = RbTree::new();
/// for handle in 0..keys.len() {
///     tree.insert(&mut links, handle, |_, a, b| keys[a] < keys[b]);
/// }
///
/// let mut walker = tree.walker(&links);
/// while let Some(handle) = walker.next(&links) {
///     if keys[handle] % 2 == 0 {
///         tree.remove(&mut links, handle);
///     }
/// }
///
/// let odd: Vec<i32> = tree.iter(&links).map(|h| keys[h]).collect();
/// assert_eq!(odd, vec![1, 3, 5]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walker<H> {
    next: Option<H>,
    direction: Direction,
}

impl<H: Copy + Eq + fmt::Debug> Walker<H> {
    pub(super) const fn new(start: Option<H>, direction: Direction) -> Self {
        Self {
            next: start,
            direction,
        }
    }

    /// Returns the current node and steps past it.
    #[allow(clippy::should_implement_trait)]
    pub fn next<S>(&mut self, store: &S) -> Option<H>
    where
        S: LinkStore<Handle = H> + ?Sized,
    {
        let node = self.next?;
        self.next = neighbour(store, node, self.direction);
        Some(node)
    }

    /// The node the next call to [`next`](Self::next) will return.
    #[inline]
    pub const fn peek(&self) -> Option<H> {
        self.next
    }
}
