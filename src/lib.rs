//! # intrusive-rbtree
//!
//! An intrusive red-black tree: a self-balancing ordered index over elements
//! whose storage the caller owns.
//!
//! ## Overview
//!
//! The tree never allocates, copies or frees elements. Each element carries a
//! [`Link`] (parent, two children, color), and the tree works purely by
//! rewriting those links. Elements are named by copyable handles, typically
//! indices into a `Vec`, and resolved through a [`LinkStore`] that every
//! operation borrows.
//!
//! - **Ordering is the caller's**: insertion takes a "goes left of" predicate
//!   and lookups take a three-way comparison, so one element type can be
//!   indexed by different keys in different trees
//! - **Balancing**: insertion and removal restore the red-black invariants
//!   with O(1) rotations, keeping every operation O(log N)
//! - **Traversal**: lazy double-ended iteration, plus a detached
//!   [`Walker`] that allows removing the visited node mid-walk
//! - **Validation**: [`RbTree::try_validate`] checks every invariant and
//!   reports the first violation as a [`ValidationError`]
//!
//! ## Feature Flags
//!
//! - `derive` (default): `#[derive(Linked)]` for element types embedding a
//!   `Link<usize>`
//! - `strict-links`: keep the parent/child cross-checks and membership
//!   assertions in release builds
//!
//! ## Example
//!
//! ```rust
//! use intrusive_rbtree::prelude::*;
//!
//! #[derive(Linked)]
//! struct Timer {
//!     deadline: u64,
//!     link: Link<usize>,
//! }
//!
//! let mut timers: Vec<Timer> = [30, 10, 20]
//!     .into_iter()
//!     .map(|deadline| Timer { deadline, link: Link::new() })
//!     .collect();
//!
//! let mut queue = RbTree::new();
//! for handle in 0..timers.len() {
//!     queue.insert(&mut timers, handle, |timers: &Vec<Timer>, a, b| {
//!         timers[a].deadline < timers[b].deadline
//!     });
//! }
//!
//! let next = queue.first(&timers).unwrap();
//! assert_eq!(timers[next].deadline, 10);
//!
//! queue.remove(&mut timers, next);
//! let rest: Vec<u64> = queue.iter(&timers).map(|h| timers[h].deadline).collect();
//! assert_eq!(rest, vec![20, 30]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the tree, its linkage types and the store traits.
///
/// # Usage
///
/// ```rust
/// use intrusive_rbtree::prelude::*;
///
/// let tree: RbTree<usize> = RbTree::new();
/// assert!(tree.is_empty());
/// ```
pub mod prelude {
    pub use crate::error::ValidationError;
    pub use crate::link::{Color, Direction, Link};
    pub use crate::store::{LinkStore, Linked};
    pub use crate::tree::RbTree;

    #[cfg(feature = "derive")]
    pub use intrusive_rbtree_derive::Linked;
}

pub mod error;
pub mod link;
pub mod store;
pub mod tree;

pub use error::ValidationError;
pub use link::{Color, Direction, Link};
pub use store::{LinkStore, Linked};
pub use tree::{Iter, RbTree, Walker, maximum, minimum, predecessor, successor};

/// Derives [`Linked`](trait@Linked) for a struct embedding one `Link<usize>`.
///
/// The link field is the one marked `#[tree_link]`, or else the only field whose
/// type is written `Link<usize>`.
///
/// ```rust
/// use intrusive_rbtree::{Link, Linked, RbTree};
///
/// #[derive(Linked)]
/// struct Entry {
///     key: u32,
///     #[tree_link]
///     by_key: Link<usize>,
/// }
///
/// let mut entries = vec![
///     Entry { key: 2, by_key: Link::new() },
///     Entry { key: 1, by_key: Link::new() },
/// ];
/// let mut tree = RbTree::new();
/// for handle in 0..entries.len() {
///     tree.insert(&mut entries, handle, |entries: &Vec<Entry>, a, b| {
///         entries[a].key < entries[b].key
///     });
/// }
/// assert_eq!(tree.first(&entries), Some(1));
/// ```
#[cfg(feature = "derive")]
pub use intrusive_rbtree_derive::Linked;
