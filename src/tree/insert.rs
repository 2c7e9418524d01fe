//! Insertion: link a node as a leaf, then repair red-red violations.

use super::balance::Balancer;
use super::{CHECK_LINKS, RbTree};
use crate::link::Direction;
use crate::store::LinkStore;
use std::fmt;

impl<H: Copy + Eq + fmt::Debug> RbTree<H> {
    /// Finds where `node` would be linked by [`insert`](Self::insert).
    ///
    /// Walks down from the root asking `belongs_left(store, node, existing)`
    /// at each node and returns the last node visited with the empty slot
    /// below it. Returns `(None, _)` for an empty tree.
    ///
    /// # Arguments
    ///
    /// * `store` - The store holding the tree's links
    /// * `node` - The node about to be inserted; its link is not read
    /// * `belongs_left` - `true` if the candidate sorts before `existing`
    pub fn insert_position<S, F>(
        &self,
        store: &S,
        node: H,
        mut belongs_left: F,
    ) -> (Option<H>, Direction)
    where
        S: LinkStore<Handle = H> + ?Sized,
        F: FnMut(&S, H, H) -> bool,
    {
        let mut parent = None;
        let mut direction = Direction::Right;
        let mut current = self.root;
        while let Some(existing) = current {
            parent = Some(existing);
            direction = Direction::from_left(belongs_left(store, node, existing));
            current = store.link(existing).child(direction);
        }
        (parent, direction)
    }

    /// Inserts `node` in comparator order.
    ///
    /// `belongs_left(store, candidate, existing)` decides, at each node on the
    /// way down, whether the candidate goes to its left. Among equal keys the
    /// answer is a placement policy: returning `false` for equals puts the new
    /// node after every equal node already present, so equal keys iterate in
    /// insertion order. The tree itself promises nothing beyond what the
    /// comparator chooses.
    ///
    /// # Complexity
    ///
    /// O(log N) comparisons, at most two rotations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intrusive_rbtree::{Link, RbTree};
    ///
    /// let keys = [5, 5, 1];
    /// let mut links = vec![Link::new(); 3];
    /// let mut tree = RbTree::new();
    /// for handle in 0..3 {
    ///     tree.insert(&mut links, handle, |_, a, b| keys[a] < keys[b]);
    /// }
    /// let handles: Vec<usize> = tree.iter(&links).collect();
    /// assert_eq!(handles, vec![2, 0, 1]);
    /// ```
    pub fn insert<S, F>(&mut self, store: &mut S, node: H, belongs_left: F)
    where
        S: LinkStore<Handle = H> + ?Sized,
        F: FnMut(&S, H, H) -> bool,
    {
        let (parent, direction) = self.insert_position(store, node, belongs_left);
        self.insert_at(store, parent, node, direction);
    }

    /// Links `node` as the `direction` child of `parent`, or as the root when
    /// `parent` is `None`, then rebalances.
    ///
    /// The caller is responsible for the position keeping the tree ordered;
    /// [`insert_position`](Self::insert_position) computes one. Whatever
    /// `node`'s link held before is discarded.
    ///
    /// # Panics
    ///
    /// Panics if the chosen slot is occupied, or if `parent` is `None` while
    /// the tree is not empty. In checked builds, also panics if `node` is
    /// already linked into this tree or `parent` is not.
    pub fn insert_at<S>(
        &mut self,
        store: &mut S,
        parent: Option<H>,
        node: H,
        direction: Direction,
    ) where
        S: LinkStore<Handle = H> + ?Sized,
    {
        tracing::trace!(?node, ?parent, ?direction, "linking node");
        if CHECK_LINKS {
            assert!(
                !self.contains_node(store, node),
                "node {node:?} is already linked into this tree"
            );
            if let Some(parent) = parent {
                assert!(
                    self.contains_node(store, parent),
                    "insertion parent {parent:?} is not linked into this tree"
                );
            }
        }

        store.link_mut(node).reset();
        Balancer::new(&mut self.root, store).attach(parent, node, direction);
    }
}

impl<S: LinkStore + ?Sized> Balancer<'_, S> {
    /// Hangs a fresh red `node` in the given slot and restores the invariants.
    fn attach(&mut self, parent: Option<S::Handle>, node: S::Handle, direction: Direction) {
        let Some(parent) = parent else {
            assert!(
                self.root().is_none(),
                "cannot link {node:?} as root: tree already has root {:?}",
                self.root()
            );
            self.set_root(Some(node));
            self.set_black(node);
            return;
        };

        assert!(
            self.child(parent, direction).is_none(),
            "{direction:?} slot of {parent:?} is occupied"
        );
        self.set_child(parent, direction, Some(node));
        self.set_parent(node, Some(parent));
        self.insert_fixup(node);
    }

    /// Pushes a red-red violation up the tree until it disappears.
    ///
    /// Each step looks at the parent's sibling (the uncle). A red uncle means
    /// recoloring and moving two levels up; a black uncle means at most two
    /// rotations, after which the loop ends.
    fn insert_fixup(&mut self, node: S::Handle) {
        let mut node = node;
        while let Some(mut parent) = self.parent_of(node)
            && self.is_red(Some(parent))
        {
            let Some(grandparent) = self.parent_of(parent) else {
                unreachable!("red node {parent:?} cannot be the root");
            };
            let side = self.side_of(grandparent, Some(parent));
            let uncle = self.child(grandparent, side.opposite());

            if let Some(uncle) = uncle.filter(|&uncle| self.is_red(Some(uncle))) {
                self.set_black(parent);
                self.set_black(uncle);
                self.set_red(grandparent);
                node = grandparent;
                continue;
            }

            // inner grandchild: rotate it to the outside first
            if self.child(parent, side.opposite()) == Some(node) {
                node = parent;
                self.rotate(node, side);
                let Some(new_parent) = self.parent_of(node) else {
                    unreachable!("rotation keeps {node:?} below the grandparent");
                };
                parent = new_parent;
            }

            self.set_black(parent);
            self.set_red(grandparent);
            self.rotate(grandparent, side.opposite());
        }

        if let Some(root) = self.root() {
            self.set_black(root);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::{Color, Link};
    use rstest::rstest;

    fn insert_keys(keys: &[i32]) -> (RbTree<usize>, Vec<Link<usize>>) {
        let mut links = vec![Link::new(); keys.len()];
        let mut tree = RbTree::new();
        for handle in 0..keys.len() {
            tree.insert(&mut links, handle, |_, a, b| keys[a] < keys[b]);
            tree.validate(&links);
        }
        (tree, links)
    }

    #[rstest]
    fn test_first_insert_becomes_black_root() {
        let (tree, links) = insert_keys(&[42]);
        assert_eq!(tree.root(), Some(0));
        assert_eq!(links[0].color(), Color::Black);
        assert_eq!(links[0].parent(), None);
    }

    #[rstest]
    fn test_second_insert_is_red_leaf() {
        let (tree, links) = insert_keys(&[2, 1]);
        assert_eq!(tree.root(), Some(0));
        assert_eq!(links[0].left(), Some(1));
        assert_eq!(links[1].color(), Color::Red);
    }

    #[rstest]
    #[case(&[1, 2, 3], 1)]
    #[case(&[3, 2, 1], 1)]
    #[case(&[1, 3, 2], 2)]
    #[case(&[3, 1, 2], 2)]
    fn test_three_keys_balance_around_middle(#[case] keys: &[i32], #[case] middle: usize) {
        let (tree, links) = insert_keys(keys);
        assert_eq!(tree.root(), Some(middle));
        assert!(links[middle].is_black());
        for handle in (0..3).filter(|&handle| handle != middle) {
            assert!(links[handle].is_red());
            assert_eq!(links[handle].parent(), Some(middle));
        }
    }

    #[rstest]
    fn test_red_uncle_recolors_without_rotation() {
        // 2 is the root with red children 1 and 3; inserting 4 recolors
        let (tree, links) = insert_keys(&[2, 1, 3, 4]);
        assert_eq!(tree.root(), Some(0));
        assert!(links[1].is_black());
        assert!(links[2].is_black());
        assert!(links[3].is_red());
        assert_eq!(links[3].parent(), Some(2));
    }

    #[rstest]
    fn test_ascending_run_stays_balanced() {
        let keys: Vec<i32> = (0..1024).collect();
        let (tree, links) = insert_keys(&keys);
        let black_height = tree.try_validate(&links).unwrap();
        // n nodes need at least 2^bh - 1 of them for black height bh
        assert!(black_height <= 10);
        assert_eq!(tree.iter(&links).count(), 1024);
    }

    #[rstest]
    fn test_insert_position_reports_slot() {
        let keys = [10, 5, 15, 12];
        let (tree, links) = insert_keys(&keys[..3]);
        let probe = [10, 5, 15, 12];
        let position = tree.insert_position(&links, 3, |_, a, b| probe[a] < probe[b]);
        assert_eq!(position, (Some(2), Direction::Left));
    }

    #[rstest]
    fn test_insert_at_resets_stale_link() {
        let mut links = vec![Link::new(); 2];
        links[1].set_parent(Some(0));
        links[1].set_child(Direction::Left, Some(0));
        let mut tree = RbTree::new();
        tree.insert_at(&mut links, None, 1, Direction::Left);
        assert_eq!(links[1].parent(), None);
        assert_eq!(links[1].left(), None);
        tree.validate(&links);
    }

    #[rstest]
    #[should_panic(expected = "is occupied")]
    fn test_insert_at_occupied_slot_panics() {
        let mut links = vec![Link::new(); 3];
        let mut tree = RbTree::new();
        tree.insert_at(&mut links, None, 0, Direction::Left);
        tree.insert_at(&mut links, Some(0), 1, Direction::Left);
        tree.insert_at(&mut links, Some(0), 2, Direction::Left);
    }

    #[cfg(any(debug_assertions, feature = "strict-links"))]
    #[rstest]
    #[case::leaf(2, Some(0))]
    #[case::root(1, Some(0))]
    #[should_panic(expected = "is already linked into this tree")]
    fn test_insert_at_linked_node_panics(#[case] node: usize, #[case] parent: Option<usize>) {
        let (mut tree, mut links) = insert_keys(&[1, 2, 3]);
        tree.insert_at(&mut links, parent, node, Direction::Left);
    }

    #[cfg(any(debug_assertions, feature = "strict-links"))]
    #[rstest]
    #[should_panic(expected = "insertion parent 3 is not linked into this tree")]
    fn test_insert_at_foreign_parent_panics() {
        let (mut tree, mut links) = insert_keys(&[1, 2, 3]);
        links.extend([Link::new(), Link::new()]);
        tree.insert_at(&mut links, Some(3), 4, Direction::Left);
    }

    #[rstest]
    #[should_panic(expected = "tree already has root")]
    fn test_insert_at_second_root_panics() {
        let mut links = vec![Link::new(); 2];
        let mut tree = RbTree::new();
        tree.insert_at(&mut links, None, 0, Direction::Left);
        tree.insert_at(&mut links, None, 1, Direction::Right);
    }
}
