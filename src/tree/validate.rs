//! Whole-tree invariant checking.

use super::RbTree;
use crate::error::ValidationError;
use crate::link::Direction;
use crate::store::LinkStore;
use smallvec::SmallVec;
use std::fmt;

/// Depth of the explicit stack before it spills to the heap. A balanced tree
/// of this depth already holds more nodes than any address space.
const INLINE_DEPTH: usize = 64;

impl<H: Copy + Eq + fmt::Debug> RbTree<H> {
    /// Checks every red-black and linkage invariant.
    ///
    /// On success returns the number of black nodes on each path from the
    /// root down to an absent child, root included; an empty tree yields `0`.
    /// On failure reports the first violation found in a depth-first walk.
    ///
    /// Each node is visited once and its child links are checked against the
    /// child's parent field before descending, so corrupted links that form
    /// a cycle are reported instead of looping.
    ///
    /// # Complexity
    ///
    /// O(N) time. Memory is proportional to the tree height.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intrusive_rbtree::{Link, RbTree};
    ///
    /// let mut links = vec![Link::new(); 3];
    /// let mut tree = RbTree::new();
    /// for handle in 0..3 {
    ///     tree.insert(&mut links, handle, |_, a, b| a < b);
    /// }
    /// assert_eq!(tree.try_validate(&links), Ok(1));
    /// ```
    pub fn try_validate<S>(&self, store: &S) -> Result<usize, ValidationError<H>>
    where
        S: LinkStore<Handle = H> + ?Sized,
    {
        let Some(root) = self.root else {
            return Ok(0);
        };

        let root_link = store.link(root);
        if root_link.is_red() {
            return Err(ValidationError::RedRoot { root });
        }
        if let Some(parent) = root_link.parent() {
            return Err(ValidationError::RootHasParent { root, parent });
        }

        // Reference count, taken at the first absent child reached. Children
        // are popped left first, so that is the end of the leftmost path.
        let mut expected = None;
        let mut pending: SmallVec<[(H, usize); INLINE_DEPTH]> = SmallVec::new();
        pending.push((root, 1));
        while let Some((node, blacks)) = pending.pop() {
            let link = store.link(node);
            let mut children = [None; 2];
            for (slot, direction) in [Direction::Left, Direction::Right].into_iter().enumerate() {
                let Some(child) = link.child(direction) else {
                    let expected = *expected.get_or_insert(blacks);
                    if blacks != expected {
                        return Err(ValidationError::BlackHeightMismatch {
                            node,
                            expected,
                            found: blacks,
                        });
                    }
                    continue;
                };

                let child_link = store.link(child);
                if child_link.parent() != Some(node) {
                    return Err(ValidationError::BrokenParentLink {
                        parent: node,
                        child,
                        recorded: child_link.parent(),
                    });
                }
                if link.is_red() && child_link.is_red() {
                    return Err(ValidationError::RedRedViolation {
                        parent: node,
                        child,
                    });
                }
                children[slot] = Some((child, blacks + usize::from(child_link.is_black())));
            }
            pending.extend(children.into_iter().rev().flatten());
        }

        Ok(expected.unwrap_or_default())
    }

    /// Asserts every invariant checked by [`try_validate`](Self::try_validate).
    ///
    /// Intended for tests and debugging; the violation is also emitted as a
    /// `tracing` error event before the panic.
    ///
    /// # Panics
    ///
    /// Panics with the violation's message if the tree is invalid.
    pub fn validate<S>(&self, store: &S)
    where
        S: LinkStore<Handle = H> + ?Sized,
    {
        if let Err(error) = self.try_validate(store) {
            tracing::error!(%error, "red-black tree failed validation");
            panic!("invalid red-black tree: {error}");
        }
    }
}
