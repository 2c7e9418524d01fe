//! Structural primitives shared by insertion and removal.
//!
//! A [`Balancer`] pairs the tree's root slot with a mutable borrow of the
//! caller's store for the duration of one mutating operation. It provides the
//! color and parent helpers, [`splice`](Balancer::splice) and
//! [`rotate`](Balancer::rotate). The insertion and removal fixups live next
//! to their entry points in `insert.rs` and `remove.rs`.

use super::CHECK_LINKS;
use crate::link::{Color, Direction, Link, is_black, is_red};
use crate::store::LinkStore;

/// Mutable view of one tree: its root slot and the store holding its links.
pub(super) struct Balancer<'a, S: LinkStore + ?Sized> {
    root: &'a mut Option<S::Handle>,
    store: &'a mut S,
}

impl<'a, S: LinkStore + ?Sized> Balancer<'a, S> {
    pub(super) const fn new(root: &'a mut Option<S::Handle>, store: &'a mut S) -> Self {
        Self { root, store }
    }

    // =========================================================================
    // Link Access
    // =========================================================================

    #[inline]
    pub(super) fn root(&self) -> Option<S::Handle> {
        *self.root
    }

    #[inline]
    pub(super) fn set_root(&mut self, root: Option<S::Handle>) {
        *self.root = root;
    }

    #[inline]
    pub(super) fn link(&self, node: S::Handle) -> &Link<S::Handle> {
        self.store.link(node)
    }

    #[inline]
    pub(super) fn link_mut(&mut self, node: S::Handle) -> &mut Link<S::Handle> {
        self.store.link_mut(node)
    }

    #[inline]
    pub(super) fn child(&self, node: S::Handle, direction: Direction) -> Option<S::Handle> {
        self.link(node).child(direction)
    }

    #[inline]
    pub(super) fn set_child(
        &mut self,
        node: S::Handle,
        direction: Direction,
        child: Option<S::Handle>,
    ) {
        self.link_mut(node).set_child(direction, child);
    }

    /// Returns the parent of `node`.
    ///
    /// With link checks enabled, asserts that the parent really has `node` as
    /// one of its children.
    pub(super) fn parent_of(&self, node: S::Handle) -> Option<S::Handle> {
        let parent = self.link(node).parent();
        if CHECK_LINKS && let Some(parent) = parent {
            let parent_link = self.link(parent);
            assert!(
                parent_link.left() == Some(node) || parent_link.right() == Some(node),
                "node {node:?} is not a child of its recorded parent {parent:?}"
            );
        }
        parent
    }

    #[inline]
    pub(super) fn set_parent(&mut self, node: S::Handle, parent: Option<S::Handle>) {
        self.link_mut(node).set_parent(parent);
    }

    /// Which child slot of `parent` holds `child` (which may be absent).
    pub(super) fn side_of(&self, parent: S::Handle, child: Option<S::Handle>) -> Direction {
        let parent_link = self.link(parent);
        if parent_link.left() == child {
            Direction::Left
        } else {
            assert!(
                parent_link.right() == child,
                "{child:?} is not a child of {parent:?}"
            );
            Direction::Right
        }
    }

    // =========================================================================
    // Colors
    // =========================================================================

    #[inline]
    pub(super) fn is_black(&self, node: Option<S::Handle>) -> bool {
        is_black(node.map(|node| self.link(node)))
    }

    #[inline]
    pub(super) fn is_red(&self, node: Option<S::Handle>) -> bool {
        is_red(node.map(|node| self.link(node)))
    }

    #[inline]
    pub(super) fn set_black(&mut self, node: S::Handle) {
        self.link_mut(node).set_color(Color::Black);
    }

    #[inline]
    pub(super) fn set_red(&mut self, node: S::Handle) {
        self.link_mut(node).set_color(Color::Red);
    }

    #[inline]
    pub(super) fn copy_color(&mut self, destination: S::Handle, source: S::Handle) {
        let color = self.link(source).color();
        self.link_mut(destination).set_color(color);
    }

    // =========================================================================
    // Shape
    // =========================================================================

    /// Descends from `node` in `direction` until the slot is empty.
    pub(super) fn extreme(&self, node: S::Handle, direction: Direction) -> S::Handle {
        let mut current = node;
        while let Some(child) = self.child(current, direction) {
            current = child;
        }
        current
    }

    /// Puts `new` where `old` hangs: the root slot or `old`'s slot in its
    /// parent. `new` inherits `old`'s parent. `old`'s own fields are left as
    /// they are.
    pub(super) fn splice(&mut self, old: S::Handle, new: Option<S::Handle>) {
        let parent = self.parent_of(old);
        match parent {
            None => {
                assert!(
                    *self.root == Some(old),
                    "node {old:?} has no parent but is not the root"
                );
                *self.root = new;
            }
            Some(parent) => {
                let side = self.side_of(parent, Some(old));
                self.set_child(parent, side, new);
            }
        }
        if let Some(new) = new {
            self.set_parent(new, parent);
        }
    }

    /// Rotates `node` down in `direction`.
    ///
    /// `Direction::Left` is the classic left rotation: the right child takes
    /// `node`'s place and `node` becomes its left child. The in-order sequence
    /// is unchanged and colors are not touched.
    ///
    /// # Panics
    ///
    /// Panics if `node` has no child on the side opposite to `direction`.
    pub(super) fn rotate(&mut self, node: S::Handle, direction: Direction) {
        let rising = direction.opposite();
        let Some(pivot) = self.child(node, rising) else {
            panic!("cannot rotate {node:?} {direction:?}: no {rising:?} child");
        };

        let inner = self.child(pivot, direction);
        self.set_child(node, rising, inner);
        if let Some(inner) = inner {
            self.set_parent(inner, Some(node));
        }

        self.splice(node, Some(pivot));
        self.set_child(pivot, direction, Some(node));
        self.set_parent(node, Some(pivot));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Builds `x` with children `a` and `y`, where `y` has children `b` and
    /// `c`, all hanging from an outer parent `p`:
    ///
    /// ```text
    ///     p(0)
    ///     |
    ///     x(1)
    ///    /   \
    ///  a(2)  y(3)
    ///       /  \
    ///     b(4) c(5)
    /// ```
    fn right_leaning() -> (Option<usize>, Vec<Link<usize>>) {
        let mut links = vec![Link::new(); 6];
        links[0].set_child(Direction::Left, Some(1));
        links[1].set_parent(Some(0));
        links[1].set_child(Direction::Left, Some(2));
        links[1].set_child(Direction::Right, Some(3));
        links[2].set_parent(Some(1));
        links[3].set_parent(Some(1));
        links[3].set_child(Direction::Left, Some(4));
        links[3].set_child(Direction::Right, Some(5));
        links[4].set_parent(Some(3));
        links[5].set_parent(Some(3));
        (Some(0), links)
    }

    #[rstest]
    fn test_rotate_left_lifts_right_child() {
        let (mut root, mut links) = right_leaning();
        Balancer::new(&mut root, &mut links).rotate(1, Direction::Left);

        assert_eq!(root, Some(0));
        assert_eq!(links[0].left(), Some(3));
        assert_eq!(links[3].parent(), Some(0));
        assert_eq!(links[3].left(), Some(1));
        assert_eq!(links[3].right(), Some(5));
        assert_eq!(links[1].parent(), Some(3));
        assert_eq!(links[1].left(), Some(2));
        assert_eq!(links[1].right(), Some(4));
        assert_eq!(links[4].parent(), Some(1));
    }

    #[rstest]
    fn test_rotate_right_undoes_rotate_left() {
        let (mut root, mut links) = right_leaning();
        let original = links.clone();
        {
            let mut balancer = Balancer::new(&mut root, &mut links);
            balancer.rotate(1, Direction::Left);
            balancer.rotate(3, Direction::Right);
        }
        assert_eq!(links, original);
    }

    #[rstest]
    fn test_rotate_at_root_moves_root() {
        let mut links = vec![Link::new(); 2];
        links[0].set_child(Direction::Left, Some(1));
        links[1].set_parent(Some(0));
        let mut root = Some(0);

        Balancer::new(&mut root, &mut links).rotate(0, Direction::Right);

        assert_eq!(root, Some(1));
        assert_eq!(links[1].parent(), None);
        assert_eq!(links[1].right(), Some(0));
        assert_eq!(links[0].parent(), Some(1));
        assert_eq!(links[0].left(), None);
    }

    #[rstest]
    #[should_panic(expected = "cannot rotate")]
    fn test_rotate_without_child_panics() {
        let mut links = vec![Link::<usize>::new()];
        let mut root = Some(0);
        Balancer::new(&mut root, &mut links).rotate(0, Direction::Left);
    }

    #[rstest]
    fn test_splice_absent_clears_slot() {
        let (mut root, mut links) = right_leaning();
        Balancer::new(&mut root, &mut links).splice(3, None);
        assert_eq!(links[1].right(), None);
        // the spliced-out node keeps its own fields
        assert_eq!(links[3].parent(), Some(1));
    }

    #[rstest]
    fn test_splice_root_replaces_root() {
        let (mut root, mut links) = right_leaning();
        Balancer::new(&mut root, &mut links).splice(0, Some(1));
        assert_eq!(root, Some(1));
        assert_eq!(links[1].parent(), None);
    }

    #[rstest]
    fn test_copy_color_keeps_parent() {
        let (mut root, mut links) = right_leaning();
        links[0].set_color(Color::Black);
        Balancer::new(&mut root, &mut links).copy_color(3, 0);
        assert!(links[3].is_black());
        assert_eq!(links[3].parent(), Some(1));
    }

    #[cfg(any(debug_assertions, feature = "strict-links"))]
    #[rstest]
    #[should_panic(expected = "is not a child of its recorded parent")]
    fn test_parent_of_detects_broken_back_link() {
        let (mut root, mut links) = right_leaning();
        links[2].set_parent(Some(3));
        let _ = Balancer::new(&mut root, &mut links).parent_of(2);
    }

    #[rstest]
    fn test_extreme_follows_direction() {
        let (mut root, mut links) = right_leaning();
        let balancer = Balancer::new(&mut root, &mut links);
        assert_eq!(balancer.extreme(1, Direction::Left), 2);
        assert_eq!(balancer.extreme(1, Direction::Right), 5);
        assert!(balancer.is_black(None));
        assert!(!balancer.is_red(None));
        assert_eq!(balancer.root(), Some(0));
    }
}
