//! How the tree reaches a node's [`Link`] from a handle.
//!
//! The tree never owns its elements. Each operation borrows the caller's
//! storage as a [`LinkStore`] and resolves handles through it. Any storage that
//! can map a copyable handle to a `Link` works: a slice of elements embedding a
//! link, a parallel `Vec<Link<usize>>`, a slab keyed by generation-tagged ids.
//!
//! Element types that embed exactly one `Link<usize>` implement [`Linked`]
//! (usually through `#[derive(Linked)]`), which makes slices, vectors and
//! deques of them usable as stores with `usize` handles.
//!
//! # Examples
//!
//! ```rust
//! use intrusive_rbtree::{Link, Linked, LinkStore};
//!
//! struct Job {
//!     priority: u32,
//!     link: Link<usize>,
//! }
//!
//! impl Linked for Job {
//!     fn link(&self) -> &Link<usize> {
//!         &self.link
//!     }
//!
//!     fn link_mut(&mut self) -> &mut Link<usize> {
//!         &mut self.link
//!     }
//! }
//!
//! let jobs = vec![Job { priority: 3, link: Link::new() }];
//! assert_eq!(LinkStore::link(&jobs, 0).parent(), None);
//! ```

use crate::link::Link;
use std::collections::VecDeque;
use std::fmt;

/// Storage that resolves handles to links.
///
/// Implementations must be consistent: between two calls that do not mutate
/// the store, the same handle resolves to the same link. Resolving a handle
/// that does not belong to the store may panic.
pub trait LinkStore {
    /// The caller's name for a node.
    type Handle: Copy + Eq + fmt::Debug;

    /// Returns the link of `handle`.
    fn link(&self, handle: Self::Handle) -> &Link<Self::Handle>;

    /// Returns the link of `handle` for rewriting.
    fn link_mut(&mut self, handle: Self::Handle) -> &mut Link<Self::Handle>;
}

/// An element type that embeds one `Link<usize>`.
///
/// The element hands out its link and the store addresses elements by index,
/// so the tree never needs to get from a link back to its element.
pub trait Linked {
    /// Returns the embedded link.
    fn link(&self) -> &Link<usize>;

    /// Returns the embedded link for rewriting.
    fn link_mut(&mut self) -> &mut Link<usize>;
}

impl Linked for Link<usize> {
    #[inline]
    fn link(&self) -> &Link<usize> {
        self
    }

    #[inline]
    fn link_mut(&mut self) -> &mut Link<usize> {
        self
    }
}

impl<T: Linked> LinkStore for [T] {
    type Handle = usize;

    #[inline]
    fn link(&self, handle: usize) -> &Link<usize> {
        self[handle].link()
    }

    #[inline]
    fn link_mut(&mut self, handle: usize) -> &mut Link<usize> {
        self[handle].link_mut()
    }
}

impl<T: Linked> LinkStore for Vec<T> {
    type Handle = usize;

    #[inline]
    fn link(&self, handle: usize) -> &Link<usize> {
        self[handle].link()
    }

    #[inline]
    fn link_mut(&mut self, handle: usize) -> &mut Link<usize> {
        self[handle].link_mut()
    }
}

impl<T: Linked> LinkStore for VecDeque<T> {
    type Handle = usize;

    #[inline]
    fn link(&self, handle: usize) -> &Link<usize> {
        self[handle].link()
    }

    #[inline]
    fn link_mut(&mut self, handle: usize) -> &mut Link<usize> {
        self[handle].link_mut()
    }
}

impl<T: Linked, const N: usize> LinkStore for [T; N] {
    type Handle = usize;

    #[inline]
    fn link(&self, handle: usize) -> &Link<usize> {
        self[handle].link()
    }

    #[inline]
    fn link_mut(&mut self, handle: usize) -> &mut Link<usize> {
        self[handle].link_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::Direction;
    use rstest::rstest;

    struct Entry {
        link: Link<usize>,
    }

    impl Linked for Entry {
        fn link(&self) -> &Link<usize> {
            &self.link
        }

        fn link_mut(&mut self) -> &mut Link<usize> {
            &mut self.link
        }
    }

    #[rstest]
    fn test_vec_resolves_by_index() {
        let mut entries: Vec<Entry> = (0..3).map(|_| Entry { link: Link::new() }).collect();
        LinkStore::link_mut(&mut entries, 1).set_parent(Some(2));
        assert_eq!(LinkStore::link(&entries, 1).parent(), Some(2));
        assert_eq!(LinkStore::link(&entries, 0).parent(), None);
    }

    #[rstest]
    fn test_bare_links_form_a_store() {
        let mut links = [Link::<usize>::new(); 4];
        links.link_mut(3).set_child(Direction::Right, Some(0));
        assert_eq!(links.link(3).right(), Some(0));
    }

    #[rstest]
    fn test_slice_and_deque_agree() {
        let mut deque: VecDeque<Link<usize>> = VecDeque::from(vec![Link::new(); 2]);
        deque.link_mut(0).set_parent(Some(1));
        let slice: &mut [Link<usize>] = &mut [Link::new(), Link::new()];
        slice.link_mut(0).set_parent(Some(1));
        assert_eq!(deque.link(0), slice.link(0));
    }

    #[rstest]
    #[should_panic(expected = "index out of bounds")]
    fn test_unknown_handle_panics() {
        let links: Vec<Link<usize>> = vec![Link::new()];
        let _ = links.link(5);
    }
}
