//! Removal: unlink a node, splicing in its successor when it has two
//! children, then repair any black-height deficit.

use super::balance::Balancer;
use super::{CHECK_LINKS, RbTree};
use crate::link::Direction;
use crate::store::LinkStore;
use std::fmt;

impl<H: Copy + Eq + fmt::Debug> RbTree<H> {
    /// Unlinks `node` from the tree and rebalances.
    ///
    /// The relative order of the remaining nodes is unchanged. On return the
    /// removed node's link is reset to the unlinked state, so the node can be
    /// inserted again, here or in another tree.
    ///
    /// # Complexity
    ///
    /// O(log N), at most three rotations.
    ///
    /// # Panics
    ///
    /// In checked builds, panics if `node` is not linked into this tree.
    /// Otherwise removing a foreign node corrupts both trees.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intrusive_rbtree::{Link, RbTree};
    ///
    /// let keys = [1, 2, 3];
    /// let mut links = vec![Link::new(); 3];
    /// let mut tree = RbTree::new();
    /// for handle in 0..3 {
    ///     tree.insert(&mut links, handle, |_, a, b| keys[a] < keys[b]);
    /// }
    ///
    /// tree.remove(&mut links, 1);
    /// let remaining: Vec<usize> = tree.iter(&links).collect();
    /// assert_eq!(remaining, vec![0, 2]);
    /// assert_eq!(links[1], Link::new());
    /// ```
    pub fn remove<S>(&mut self, store: &mut S, node: H)
    where
        S: LinkStore<Handle = H> + ?Sized,
    {
        tracing::trace!(?node, "unlinking node");
        if CHECK_LINKS {
            assert!(
                self.contains_node(store, node),
                "node {node:?} is not linked into this tree"
            );
        }

        Balancer::new(&mut self.root, store).detach(node);
    }

    /// Unlinks every node, resetting each link, and returns how many there
    /// were.
    ///
    /// Runs in O(N) without rebalancing or allocating: nodes are unlinked
    /// leaves-first.
    pub fn clear<S>(&mut self, store: &mut S) -> usize
    where
        S: LinkStore<Handle = H> + ?Sized,
    {
        let mut unlinked = 0;
        let mut current = self.root.take();
        while let Some(node) = current {
            let link = store.link(node);
            if let Some(child) = link.left().or_else(|| link.right()) {
                current = Some(child);
                continue;
            }

            let parent = link.parent();
            store.link_mut(node).reset();
            unlinked += 1;
            if let Some(parent) = parent {
                let parent_link = store.link_mut(parent);
                let side = if parent_link.left() == Some(node) {
                    Direction::Left
                } else {
                    Direction::Right
                };
                parent_link.set_child(side, None);
            }
            current = parent;
        }

        tracing::trace!(unlinked, "cleared tree");
        unlinked
    }
}

impl<S: LinkStore + ?Sized> Balancer<'_, S> {
    /// Takes `node` out of the tree.
    fn detach(&mut self, node: S::Handle) {
        let mut removed_black = self.link(node).is_black();

        // `hole` ends up where a node was taken away; it may be absent, so its
        // parent is tracked separately.
        let (hole, hole_parent) = match (
            self.child(node, Direction::Left),
            self.child(node, Direction::Right),
        ) {
            (None, only) | (only, None) => {
                let parent = self.parent_of(node);
                self.splice(node, only);
                (only, parent)
            }
            (Some(left), Some(right)) => {
                let successor = self.extreme(right, Direction::Left);
                removed_black = self.link(successor).is_black();
                let orphan = self.child(successor, Direction::Right);

                let orphan_parent = match self.parent_of(successor) {
                    Some(parent) if parent == node => successor,
                    Some(parent) => {
                        self.splice(successor, orphan);
                        self.set_child(successor, Direction::Right, Some(right));
                        self.set_parent(right, Some(successor));
                        parent
                    }
                    None => unreachable!("successor {successor:?} lies below {node:?}"),
                };

                debug_assert!(self.child(successor, Direction::Left).is_none());
                self.splice(node, Some(successor));
                self.set_child(successor, Direction::Left, Some(left));
                self.set_parent(left, Some(successor));
                self.copy_color(successor, node);
                (orphan, Some(orphan_parent))
            }
        };

        self.link_mut(node).reset();

        if removed_black {
            self.remove_fixup(hole, hole_parent);
        }
    }

    /// Repairs the missing black on the path through `hole`.
    ///
    /// The deficit either moves one level up (black sibling with black
    /// children) or is absorbed by rotations around the parent, which ends the
    /// loop.
    fn remove_fixup(&mut self, hole: Option<S::Handle>, hole_parent: Option<S::Handle>) {
        let mut hole = hole;
        let mut hole_parent = hole_parent;

        while hole != self.root() && self.is_black(hole) {
            let Some(parent) = hole_parent else {
                unreachable!("only the root has no parent");
            };
            let side = self.side_of(parent, hole);
            let mut sibling = self.sibling(parent, side);

            if self.is_red(Some(sibling)) {
                self.set_black(sibling);
                self.set_red(parent);
                self.rotate(parent, side);
                sibling = self.sibling(parent, side);
            }

            let near = self.child(sibling, side);
            let far = self.child(sibling, side.opposite());
            if self.is_black(near) && self.is_black(far) {
                self.set_red(sibling);
                hole = Some(parent);
            } else {
                if self.is_black(far) {
                    if let Some(near) = near {
                        self.set_black(near);
                    }
                    self.set_red(sibling);
                    self.rotate(sibling, side.opposite());
                    sibling = self.sibling(parent, side);
                }

                self.copy_color(sibling, parent);
                self.set_black(parent);
                if let Some(far) = self.child(sibling, side.opposite()) {
                    self.set_black(far);
                }
                self.rotate(parent, side);
                hole = self.root();
            }

            hole_parent = hole.and_then(|hole| self.parent_of(hole));
        }

        if let Some(hole) = hole {
            self.set_black(hole);
        }
    }

    /// The child of `parent` opposite to `side`; present whenever the path
    /// through `side` is short one black node.
    fn sibling(&self, parent: S::Handle, side: Direction) -> S::Handle {
        let Some(sibling) = self.child(parent, side.opposite()) else {
            unreachable!("{parent:?} has a black-height deficit but no sibling subtree");
        };
        sibling
    }
}
