//! Error types reported by tree validation.
//!
//! The engine itself has no recoverable errors: precondition violations
//! panic, and a search miss is an ordinary `None`. Validation is the one
//! place where a caller may want to inspect a failure instead of aborting, so
//! [`RbTree::try_validate`](crate::RbTree::try_validate) reports it as a
//! [`ValidationError`].

use std::fmt;

/// A broken red-black or linkage invariant found by validation.
///
/// Handles are reported as the caller's own handle values.
///
/// # Examples
///
/// ```rust
/// use intrusive_rbtree::ValidationError;
///
/// let error: ValidationError<usize> = ValidationError::RedRoot { root: 4 };
/// assert_eq!(format!("{error}"), "root node 4 is red");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError<H> {
    /// The root node is red.
    RedRoot {
        /// The root handle.
        root: H,
    },
    /// The root node records a parent.
    RootHasParent {
        /// The root handle.
        root: H,
        /// The parent it claims to have.
        parent: H,
    },
    /// A child does not point back at the node that links to it.
    BrokenParentLink {
        /// The node holding the child link.
        parent: H,
        /// The child whose parent field disagrees.
        child: H,
        /// What the child's parent field holds instead.
        recorded: Option<H>,
    },
    /// A red node has a red child.
    RedRedViolation {
        /// The red parent.
        parent: H,
        /// The red child.
        child: H,
    },
    /// A path to an absent child crosses a different number of black nodes
    /// than the leftmost path from the root.
    BlackHeightMismatch {
        /// The node whose absent child ends the offending path.
        node: H,
        /// Black nodes on the leftmost path.
        expected: usize,
        /// Black nodes on this path.
        found: usize,
    },
}

impl<H: fmt::Debug> fmt::Display for ValidationError<H> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RedRoot { root } => write!(formatter, "root node {root:?} is red"),
            Self::RootHasParent { root, parent } => {
                write!(formatter, "root node {root:?} records parent {parent:?}")
            }
            Self::BrokenParentLink {
                parent,
                child,
                recorded,
            } => write!(
                formatter,
                "node {child:?} is a child of {parent:?} but records parent {recorded:?}"
            ),
            Self::RedRedViolation { parent, child } => {
                write!(formatter, "red node {parent:?} has red child {child:?}")
            }
            Self::BlackHeightMismatch {
                node,
                expected,
                found,
            } => write!(
                formatter,
                "path ending below node {node:?} crosses {found} black nodes, expected {expected}"
            ),
        }
    }
}

impl<H: fmt::Debug> std::error::Error for ValidationError<H> {}
