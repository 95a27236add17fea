//! Persistent n-ary trees, in which both leaf and branch nodes carry a payload.
//!
//! A [`Tree`] is either a [`Leaf`] holding a value or a [`Branch`] holding a value and an ordered list of child trees. Trees are immutable: methods which "modify" a tree return a new one, and the old one stays valid and unchanged.
//!
//! The children of a branch are stored in a [`Shared`] slice. Cloning a tree only copies the payload of its root and bumps a reference count, and every path-based edit rebuilds only the child lists on the way from the root to the edited node, reusing all the others.
//!
//! # Example
//! ```rust
//! use rootstock::{Tree, TreeError};
//!
//! // Branch payloads are not leaves, only the values of leaf nodes are.
//! let tree = Tree::branch("root", vec![
//!     Tree::leaf("a"),
//!     Tree::from_leaves("inner", vec!["b", "c"]),
//! ]);
//! assert_eq!(tree.leaves(), ["a", "b", "c"]);
//!
//! // Replace the "c" leaf, which is the second child of the second child of the root:
//! let edited = tree.replacing_tree_through(&[1, 1], Tree::leaf("z")).unwrap();
//! assert_eq!(edited.leaves(), ["a", "b", "z"]);
//! assert_eq!(tree.leaves(), ["a", "b", "c"]);
//!
//! // Leaves cannot have children:
//! assert_eq!(
//!     Tree::leaf("x").replacing_tree_at(0, Tree::leaf("y")),
//!     Err(TreeError::BranchOperationPerformedOnLeaf),
//! );
//! ```
//!
//! [`Tree`]: enum.Tree.html " "
//! [`Leaf`]: enum.Tree.html#variant.Leaf " "
//! [`Branch`]: enum.Tree.html#variant.Branch " "
//! [`Shared`]: ../type.Shared.html " "

use core::{
    fmt::{self, Formatter, Display},
    mem::{self, ManuallyDrop},
    ptr,
};
use alloc::vec::Vec;
use crate::{NodeValue, Shared, TreeError};

mod edit;
mod iter;
mod impl_traversable;
#[cfg(test)]
mod tests;

pub use iter::LeavesIter;

/// A persistent n-ary tree.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tree<T> {
    /// A node without children.
    Leaf(T),
    /// A node with its own payload and an ordered list of children, which may be leaves or branches themselves.
    ///
    /// A branch may have zero children, in which case it contributes nothing to [`leaves`].
    ///
    /// [`leaves`]: #method.leaves " "
    Branch(T, Shared<[Tree<T>]>),
}
impl<T> Tree<T> {
    /// Creates a leaf node with the specified payload.
    #[inline(always)]
    pub const fn leaf(value: T) -> Self {
        Self::Leaf(value)
    }
    /// Creates a branch node with the specified payload and children.
    #[inline]
    pub fn branch(value: T, children: impl IntoIterator<Item = Tree<T>>) -> Self {
        Self::Branch(value, children.into_iter().collect())
    }
    /// Creates a branch node whose children are all leaves, made from the specified payloads in order.
    ///
    /// # Example
    /// ```rust
    /// # use rootstock::Tree;
    /// let tree = Tree::from_leaves(0, 1..=3);
    /// assert_eq!(tree, Tree::branch(0, vec![Tree::leaf(1), Tree::leaf(2), Tree::leaf(3)]));
    /// ```
    #[inline]
    pub fn from_leaves(value: T, payloads: impl IntoIterator<Item = T>) -> Self {
        Self::branch(value, payloads.into_iter().map(Tree::Leaf))
    }

    /// Returns a reference to the payload of the node.
    #[inline]
    pub const fn value(&self) -> &T {
        match self {
              Self::Leaf(value)
            | Self::Branch(value, _)
            => value,
        }
    }
    /// Consumes the tree and returns the payload of its root node, dropping the children.
    #[inline]
    pub fn into_value(self) -> T {
        let mut this = ManuallyDrop::new(self);
        // SAFETY: `this` is never used or dropped afterwards, so each field is read out exactly once
        unsafe {
            match &mut *this {
                Self::Leaf(value) => ptr::read(value),
                Self::Branch(value, children) => {
                    let value = ptr::read(value);
                    drop(ptr::read(children));
                    value
                }
            }
        }
    }
    /// Returns a reference to the payload of the node, tagged with the kind of the node.
    #[inline]
    pub const fn node_value(&self) -> NodeValue<&T> {
        match self {
            Self::Leaf(value) => NodeValue::Leaf(value),
            Self::Branch(value, _) => NodeValue::Branch(value),
        }
    }
    /// Returns `true` if the node is a *leaf*, `false` otherwise.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(..))
    }
    /// Returns `true` if the node is a *branch*, `false` otherwise. Note that a branch can have zero children.
    #[inline]
    pub const fn is_branch(&self) -> bool {
        matches!(self, Self::Branch(..))
    }
    /// Returns the children of the node, which is an empty slice for leaves.
    #[inline]
    pub fn children(&self) -> &[Tree<T>] {
        match self {
            Self::Leaf(..) => &[],
            Self::Branch(_, children) => &children[..],
        }
    }
    /// Returns the direct child at the specified index.
    ///
    /// # Errors
    /// - `BranchOperationPerformedOnLeaf` if the node is a leaf.
    /// - `IndexOutOfBounds` if the node has no child at `index`.
    #[inline]
    pub fn child(&self, index: usize) -> Result<&Tree<T>, TreeError> {
        match self {
            Self::Leaf(..) => Err(TreeError::BranchOperationPerformedOnLeaf),
            Self::Branch(_, children) => children.get(index).ok_or(TreeError::IndexOutOfBounds),
        }
    }
    /// Returns the node addressed by the specified index path, starting from this node. The empty path addresses the node itself.
    ///
    /// # Errors
    /// Fails with `IllFormedIndexPath` if any index does not point to an existing child, including when the path goes through a leaf.
    ///
    /// # Example
    /// ```rust
    /// # use rootstock::{Tree, TreeError};
    /// let tree = Tree::branch(0, vec![Tree::leaf(1), Tree::from_leaves(2, vec![3, 4])]);
    /// assert_eq!(tree.subtree(&[1, 0]), Ok(&Tree::leaf(3)));
    /// assert_eq!(tree.subtree(&[]), Ok(&tree));
    /// assert_eq!(tree.subtree(&[0, 0]), Err(TreeError::IllFormedIndexPath));
    /// ```
    pub fn subtree(&self, path: &[usize]) -> Result<&Tree<T>, TreeError> {
        path.iter().try_fold(self, |node, &index| {
            node.children().get(index).ok_or(TreeError::IllFormedIndexPath)
        })
    }
    /// Returns the total number of nodes in the tree, both leaves and branches, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Tree::node_count).sum::<usize>()
    }
    /// Returns the length of the longest path from this node down to one of its descendants. Leaves and branches without children have a depth of zero.
    pub fn depth(&self) -> usize {
        self.children()
            .iter()
            .map(Tree::depth)
            .max()
            .map_or(0, |deepest| deepest + 1)
    }

    /// Returns an iterator over references to the payloads of all leaves of the tree, from left to right.
    #[inline]
    pub fn iter_leaves(&self) -> LeavesIter<'_, T> {
        LeavesIter::new(self)
    }
    /// Collects the payloads of all leaves of the tree, from left to right.
    ///
    /// This visits every node once. If the tree itself is a leaf, its own payload is the only leaf.
    #[inline]
    pub fn leaves(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter_leaves().cloned().collect()
    }

    /// Returns a tree with the same shape in which every payload has been transformed by the specified closure.
    ///
    /// The closure is called on every node in depth-first order, parents before their children.
    ///
    /// # Example
    /// ```rust
    /// # use rootstock::Tree;
    /// let tree = Tree::from_leaves(1, vec![2, 3]);
    /// let strings = tree.map(|x| x.to_string());
    /// assert_eq!(strings.value(), "1");
    /// assert_eq!(strings.leaves(), ["2", "3"]);
    /// ```
    pub fn map<U, F>(&self, mut transform: F) -> Tree<U>
    where
        F: FnMut(&T) -> U,
    {
        fn map_node<T, U>(tree: &Tree<T>, transform: &mut impl FnMut(&T) -> U) -> Tree<U> {
            match tree {
                Tree::Leaf(value) => Tree::Leaf(transform(value)),
                Tree::Branch(value, children) => {
                    let value = transform(value);
                    Tree::Branch(
                        value,
                        children.iter().map(|child| map_node(child, transform)).collect(),
                    )
                }
            }
        }
        map_node(self, &mut transform)
    }
    /// Returns a copy of the node with its payload replaced. Whether the node is a leaf or a branch stays the same, and so do its children, which are shared with `self`.
    #[inline]
    pub fn updating(&self, value: T) -> Self {
        match self {
            Self::Leaf(..) => Self::Leaf(value),
            Self::Branch(_, children) => Self::Branch(value, Shared::clone(children)),
        }
    }
}
/// Dismantles the tree level by level, so that dropping a deep tree does not recurse once per level.
impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        let children = match self {
            Self::Branch(_, children) => children,
            Self::Leaf(..) => return,
        };
        if children.iter().all(|child| child.children().is_empty()) {
            return;
        }
        let empty: Shared<[Tree<T>]> = Shared::new([]);
        let mut pending = Vec::new();
        pending.push(mem::replace(children, Shared::clone(&empty)));
        while let Some(mut children) = pending.pop() {
            // Subtrees still shared with another tree are left for their last owner to dismantle.
            if let Some(children) = Shared::get_mut(&mut children) {
                for child in children.iter_mut() {
                    if let Self::Branch(_, grandchildren) = child {
                        if !grandchildren.is_empty() {
                            pending.push(mem::replace(grandchildren, Shared::clone(&empty)));
                        }
                    }
                }
            }
        }
    }
}
impl<T> From<T> for Tree<T> {
    #[inline(always)]
    fn from(value: T) -> Self {
        Self::Leaf(value)
    }
}

/// Writes the tree one node per line in depth-first order, indenting each level by two spaces.
impl<T: Display> Display for Tree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fn write_node<T: Display>(
            f: &mut Formatter<'_>,
            tree: &Tree<T>,
            indentation: usize,
        ) -> fmt::Result {
            for _ in 0..indentation {
                f.write_str("  ")?;
            }
            write!(f, "{}", tree.value())?;
            for child in tree.children() {
                f.write_str("\n")?;
                write_node(f, child, indentation + 1)?;
            }
            Ok(())
        }
        write_node(f, self, 0)
    }
}
