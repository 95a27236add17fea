//! Implements persistent n-ary trees and a zipper cursor to navigate and edit them.
//!
//! # Overview
//! Rootstock provides [`Tree`], an immutable tree in which every node carries a payload, whether it is a leaf or a branch, and [`Zipper`], a cursor which focuses one subtree of such a tree and remembers how to rebuild everything around it.
//!
//! Trees are *values*: every operation which looks like a mutation, such as [`replacing_tree_through`] or [`inserting`], returns a new tree and leaves the original untouched. The children of a branch are kept behind a reference-counted shared slice, which means that an edit only rebuilds the nodes on the path from the root to the edited node; every other subtree is shared between the old and the new tree. An edit therefore costs time proportional to the depth of the edited node multiplied by the branching factor along the way, not to the size of the whole tree.
//!
//! When several edits are made around the same area of a tree, addressing the nodes from the root over and over is wasteful. The zipper solves that: descending into a child records a *breadcrumb* holding the parent's payload and the siblings on both sides, and ascending splices the focus back between them. [`Zipper::top`] ascends all the way, "unzipping" the tree.
//!
//! ```rust
//! use rootstock::{Tree, Zipper};
//!
//! let tree = Tree::branch(0, vec![
//!     Tree::leaf(1),
//!     Tree::from_leaves(0, vec![2, 3, 4]),
//!     Tree::leaf(5),
//! ]);
//!
//! // Edit by path...
//! let by_path = tree.inserting(Tree::leaf(9), &[1], 3).unwrap();
//! assert_eq!(by_path.leaves(), [1, 2, 3, 4, 9, 5]);
//!
//! // ...or by walking there with a zipper.
//! let zipped = Zipper::new(tree.clone())
//!     .move_to(1).unwrap()
//!     .move_to(1).unwrap()
//!     .update(|x| x * 10)
//!     .top();
//! assert_eq!(zipped.tree().leaves(), [1, 2, 30, 4, 5]);
//!
//! // The original is still there, unchanged.
//! assert_eq!(tree.leaves(), [1, 2, 3, 4, 5]);
//! ```
//!
//! # Feature flags
//! - `std` (**enabled by default**) — enables the full standard library, disabling `no_std` for the crate. Currently, this only adds [`Error`] trait implementations for some types. The crate always requires a global allocator.
//! - `arc` — shares subtrees and breadcrumbs through [`Arc`] instead of [`Rc`], making trees and zippers `Send` and `Sync` whenever their payload is. Atomic reference counting is slightly slower, which is why this is disabled by default.
//!
//! # Public dependencies
//! - `smallvec` (**required**) — `^1.4`, used for [`IndexPath`]
//!
//! [`replacing_tree_through`]: tree/enum.Tree.html#method.replacing_tree_through " "
//! [`inserting`]: tree/enum.Tree.html#method.inserting " "
//! [`Zipper::top`]: zipper/struct.Zipper.html#method.top " "
//! [`IndexPath`]: type.IndexPath.html " "
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [`Rc`]: https://doc.rust-lang.org/std/rc/struct.Rc.html " "
//! [`Arc`]: https://doc.rust-lang.org/std/sync/struct.Arc.html " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::fn_params_excessive_bools,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::invalid_upcast_comparisons,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wild_err_arm,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::same_functions_in_if_condition,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::string_add_assign,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unicode_not_nfc,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)] // FIXME reenable when it gets fixed
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

pub mod tree;
pub use tree::{Tree, LeavesIter};

pub mod zipper;
pub use zipper::{Zipper, Crumb, Breadcrumbs, Siblings};

pub mod traversal;
pub use traversal::{Visitor, Traversable};

/// A prelude for using Rootstock, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{
        tree::Tree as PersistentTree,
        zipper::{Zipper as TreeZipper, Crumb as TreeCrumb},
        IndexPath as TreeIndexPath,
        TreeError,
    };
}

pub(crate) mod util;

use core::fmt::{self, Formatter, Display};

/// The pointer type through which trees share their children and zippers share their breadcrumbs.
///
/// This is [`Rc`] by default and [`Arc`] if the `arc` feature is enabled.
///
/// [`Rc`]: https://doc.rust-lang.org/std/rc/struct.Rc.html " "
/// [`Arc`]: https://doc.rust-lang.org/std/sync/struct.Arc.html " "
#[cfg(not(feature = "arc"))]
pub type Shared<T> = alloc::rc::Rc<T>;
/// The pointer type through which trees share their children and zippers share their breadcrumbs.
///
/// This is [`Arc`] because the `arc` feature is enabled.
///
/// [`Arc`]: https://doc.rust-lang.org/std/sync/struct.Arc.html " "
#[cfg(feature = "arc")]
pub type Shared<T> = alloc::sync::Arc<T>;

/// An owned index path: a sequence of child indices, each relative to the node reached by the ones before it.
///
/// Most operations accept paths as plain `&[usize]` slices; this type is what they hand back. Paths up to 8 levels deep are stored inline.
pub type IndexPath = smallvec::SmallVec<[usize; 8]>;

/// The payload of a node of a tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeValue<B, L = B> {
    /// The payload of a branch node, i.e. a node with children. Those are also sometimes referred to as internal nodes or inodes.
    Branch(B),
    /// The payload of a leaf node, i.e. a node without any children.
    Leaf(L),
}
impl<B, L> NodeValue<B, L> {
    /// Converts from `&NodeValue<B, L>` to `NodeValue<&B, &L>`.
    #[inline]
    pub const fn as_ref(&self) -> NodeValue<&B, &L> {
        match self {
            Self::Branch(x) => NodeValue::Branch(x),
            Self::Leaf(x) => NodeValue::Leaf(x),
        }
    }
    /// Returns `true` if the payload belongs to a leaf node, `false` otherwise.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(..))
    }
}
impl<T> NodeValue<T, T> {
    /// Extracts the value, discarding information about whether the node was a leaf or branch. *Available only if the leaf and branch payloads are the same type.*
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)]
    pub fn into_inner(self) -> T {
        match self {
              NodeValue::Branch(x)
            | NodeValue::Leaf(x)
            => x,
        }
    }
}
impl<T> AsRef<T> for NodeValue<T, T> {
    #[inline(always)]
    fn as_ref(&self) -> &T {
        self.as_ref().into_inner()
    }
}

/// The error type returned by fallible operations on trees and zippers.
///
/// All of those are programmer errors: none of them can go away by simply retrying the same operation on the same tree.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum TreeError {
    /// An index was outside of the children of the node it was applied to.
    ///
    /// Produced by direct child accessors, such as [`child`] and [`replacing_tree_at`], as opposed to operations which walk an index path.
    ///
    /// [`child`]: tree/enum.Tree.html#method.child " "
    /// [`replacing_tree_at`]: tree/enum.Tree.html#method.replacing_tree_at " "
    IndexOutOfBounds,
    /// An operation which requires children was performed on a leaf node, which cannot have children by definition.
    BranchOperationPerformedOnLeaf,
    /// An index path, or the insertion index at its end, did not address an existing position in the tree.
    IllFormedIndexPath,
}
impl Display for TreeError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::IndexOutOfBounds => "child index out of bounds",
            Self::BranchOperationPerformedOnLeaf => "expected a branch node, found leaf",
            Self::IllFormedIndexPath => "index path does not address a node in the tree",
        })
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for TreeError {}
