//! The embeddable linkage record and its color/direction vocabulary.
//!
//! A [`Link`] is the only thing the tree knows about an element. The caller
//! embeds one in each element (directly, or by storing a `Link` array next to
//! its data) and hands the tree copyable handles that resolve to those links
//! through a [`LinkStore`](crate::LinkStore).
//!
//! # Representation
//!
//! The color lives in its own field rather than in the low bit of the parent
//! reference. Handles are plain values (typically indices), so there is no
//! spare bit to borrow and nothing to mask when chasing parents.
//!
//! # Examples
//!
//! ```rust
//! use intrusive_rbtree::{Color, Direction, Link};
//!
//! let link: Link<usize> = Link::new();
//! assert_eq!(link.color(), Color::Red);
//! assert_eq!(link.parent(), None);
//! assert_eq!(link.child(Direction::Left), None);
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//! ```

// =============================================================================
// Color Definition
// =============================================================================

/// The color of a linked node.
///
/// Absent children are conventionally black.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    /// A red node. Freshly inserted nodes start red.
    Red,
    /// A black node.
    Black,
}

// =============================================================================
// Direction Definition
// =============================================================================

/// Which child slot of a node is meant.
///
/// Every left/right mirror case in the balancing code is written once in terms
/// of a `Direction` and its [`opposite`](Self::opposite).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    /// The left child slot (smaller keys).
    Left,
    /// The right child slot (larger keys).
    Right,
}

impl Direction {
    /// Returns the mirror-image direction.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Maps an "insert to the left" flag onto a direction.
    #[inline]
    #[must_use]
    pub const fn from_left(insert_left: bool) -> Self {
        if insert_left { Self::Left } else { Self::Right }
    }
}

// =============================================================================
// Link Definition
// =============================================================================

/// Parent/child linkage of one node, addressed by handles of type `H`.
///
/// The engine is the only writer of these fields. Callers may read them, for
/// example to walk the tree shape in a debugger or a custom traversal.
///
/// After a node is removed its link is reset to the unlinked state returned by
/// [`Link::new`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Link<H> {
    parent: Option<H>,
    left: Option<H>,
    right: Option<H>,
    color: Color,
}

impl<H> Link<H> {
    /// Creates an unlinked record: no parent, no children, colored red.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            parent: None,
            left: None,
            right: None,
            color: Color::Red,
        }
    }

    /// Returns the color of this node.
    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Returns `true` if this node is red.
    #[inline]
    pub const fn is_red(&self) -> bool {
        matches!(self.color, Color::Red)
    }

    /// Returns `true` if this node is black.
    #[inline]
    pub const fn is_black(&self) -> bool {
        matches!(self.color, Color::Black)
    }

    #[inline]
    pub(crate) const fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    #[inline]
    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }
}

impl<H: Copy> Link<H> {
    /// Returns the parent handle, or `None` for the root and unlinked nodes.
    #[inline]
    pub const fn parent(&self) -> Option<H> {
        self.parent
    }

    /// Returns the left child handle.
    #[inline]
    pub const fn left(&self) -> Option<H> {
        self.left
    }

    /// Returns the right child handle.
    #[inline]
    pub const fn right(&self) -> Option<H> {
        self.right
    }

    /// Returns the child in the given direction.
    #[inline]
    pub const fn child(&self, direction: Direction) -> Option<H> {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Rewrites the parent handle; the color is untouched.
    #[inline]
    pub(crate) fn set_parent(&mut self, parent: Option<H>) {
        self.parent = parent;
    }

    #[inline]
    pub(crate) fn set_child(&mut self, direction: Direction, child: Option<H>) {
        match direction {
            Direction::Left => self.left = child,
            Direction::Right => self.right = child,
        }
    }
}

impl<H> Default for Link<H> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Color test for a possibly absent node: absent nodes are black.
#[inline]
pub(crate) fn is_black<H>(link: Option<&Link<H>>) -> bool {
    link.is_none_or(Link::is_black)
}

/// Color test for a possibly absent node: absent nodes are never red.
#[inline]
pub(crate) fn is_red<H>(link: Option<&Link<H>>) -> bool {
    link.is_some_and(Link::is_red)
}

// =============================================================================
// Compile-time Assertions
// =============================================================================

static_assertions::assert_impl_all!(Link<usize>: Copy, Send, Sync, Default);
static_assertions::assert_impl_all!(Link<u32>: Copy, Send, Sync, Default);

// =============================================================================
// Tests
// =============================================================================
