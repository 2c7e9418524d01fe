//! Derive macro for intrusive-rbtree element types.
//!
//! This crate provides `#[derive(Linked)]`, which implements
//! `intrusive_rbtree::Linked` for a struct embedding a `Link<usize>`. Slices,
//! vectors and deques of such a struct can then be handed to an `RbTree` as
//! its link store.
//!
//! Use it through the `intrusive-rbtree` crate (default `derive` feature)
//! rather than depending on this crate directly.
//!
//! # Example
//!
//! ```rust,ignore
//! use intrusive_rbtree::{Link, Linked};
//!
//! #[derive(Linked)]
//! struct Session {
//!     expires_at: u64,
//!     link: Link<usize>,
//! }
//!
//! // Generated:
//! // impl Linked for Session {
//! //     fn link(&self) -> &Link<usize> { &self.link }
//! //     fn link_mut(&mut self) -> &mut Link<usize> { &mut self.link }
//! // }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod linked;

use proc_macro::TokenStream;

/// Derive macro implementing `Linked` for a struct with named fields.
///
/// # Choosing the Link Field
///
/// - A field marked `#[tree_link]` is used. At most one field may carry it.
/// - Otherwise, the one field whose type is written `Link<..>` (by any path
///   ending in `Link`) is used.
///
/// An element held in several trees embeds one link per tree. The derive
/// covers one of them; the others go through a custom
/// `LinkStore` implementation.
///
/// # Errors
///
/// Compile errors are reported for enums, unions, tuple and unit structs,
/// several `#[tree_link]` fields, and structs where no field (or more than one
/// field) qualifies.
///
/// # Example
///
/// ```rust,ignore
/// use intrusive_rbtree::{Link, Linked};
///
/// #[derive(Linked)]
/// struct Route {
///     prefix: u32,
///     #[tree_link]
///     by_prefix: Link<usize>,
///     spare: Link<usize>,
/// }
/// ```
#[proc_macro_derive(Linked, attributes(tree_link))]
pub fn derive_linked(input: TokenStream) -> TokenStream {
    linked::derive_linked_impl(input)
}
