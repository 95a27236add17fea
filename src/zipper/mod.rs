//! Zippers, immutable cursors which focus one subtree of a [`Tree`] and remember how to rebuild the rest of it.
//!
//! Moving down into a child pushes a [`Crumb`] onto the zipper's breadcrumb stack: the payload of the branch that was left and the siblings on both sides of the child. Moving up pops the latest crumb and rebuilds that branch by splicing the focus back between its siblings. Editing the focus and then going back to the top therefore produces a tree which differs from the original only at the edited position, without ever addressing it by a path from the root.
//!
//! Zippers are values just like trees: every method returns a new zipper and leaves `self` untouched. The breadcrumb stack is a persistent list, so a zipper shares all of its outer breadcrumbs with the zipper it descended from.
//!
//! # Example
//! ```rust
//! use rootstock::{Tree, Zipper, TreeError};
//!
//! let tree = Tree::branch(-1, vec![
//!     Tree::leaf(1),
//!     Tree::from_leaves(-1, vec![2, 3, 4]),
//!     Tree::leaf(5),
//! ]);
//!
//! let three = Zipper::new(tree.clone()).move_through(&[1, 1]).unwrap();
//! assert_eq!(three.tree(), &Tree::leaf(3));
//! assert_eq!(three.depth(), 2);
//!
//! // Leaves cannot be entered.
//! assert_eq!(three.move_to(0), Err(TreeError::BranchOperationPerformedOnLeaf));
//!
//! // Going back up without edits restores the exact same tree...
//! assert_eq!(three.top().tree(), &tree);
//! // ...and with an edit, only the focused node changes.
//! let doubled = three.update(|x| x * 2).top();
//! assert_eq!(doubled.tree().leaves(), [1, 2, 6, 4, 5]);
//! ```
//!
//! [`Tree`]: ../tree/enum.Tree.html " "
//! [`Crumb`]: struct.Crumb.html " "

use core::{
    iter::{Chain, FusedIterator},
    slice,
};
use alloc::vec::Vec;
use crate::{util, IndexPath, Shared, Tree, TreeError};


/// The context of one level of descent: the payload of the branch which was left, and its other children on both sides of the one in focus.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Crumb<T> {
    value: T,
    left: Vec<Tree<T>>,
    right: Vec<Tree<T>>,
}
impl<T> Crumb<T> {
    /// Returns the payload of the parent branch.
    #[inline(always)]
    pub const fn value(&self) -> &T {
        &self.value
    }
    /// Returns the siblings which come before the focused child, in order.
    #[inline(always)]
    pub fn left(&self) -> &[Tree<T>] {
        &self.left
    }
    /// Returns the siblings which come after the focused child, in order.
    #[inline(always)]
    pub fn right(&self) -> &[Tree<T>] {
        &self.right
    }
    /// Returns the index of the focused child among the children of the parent branch.
    #[inline(always)]
    pub fn index(&self) -> usize {
        self.left.len()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct CrumbNode<T> {
    crumb: Crumb<T>,
    next: Option<Shared<CrumbNode<T>>>,
}

impl<T> Drop for CrumbNode<T> {
    fn drop(&mut self) {
        // Unlinks the list one node at a time instead of recursing through it.
        let mut next = self.next.take();
        while let Some(node) = next {
            next = Shared::try_unwrap(node).ok().and_then(|mut node| node.next.take());
        }
    }
}

/// A cursor over a persistent tree.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Zipper<T> {
    tree: Tree<T>,
    breadcrumbs: Option<Shared<CrumbNode<T>>>,
    depth: usize,
}
impl<T> Zipper<T> {
    /// Creates a zipper focused on the root of the specified tree, with no breadcrumbs.
    #[inline]
    pub const fn new(tree: Tree<T>) -> Self {
        Self {
            tree,
            breadcrumbs: None,
            depth: 0,
        }
    }
    /// Returns the subtree in focus.
    #[inline(always)]
    pub const fn tree(&self) -> &Tree<T> {
        &self.tree
    }
    /// Consumes the zipper and returns the subtree in focus, discarding the breadcrumbs. Use [`top`] first to get the whole tree.
    ///
    /// [`top`]: #method.top " "
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)] // const fn cannot evaluate drop
    pub fn into_tree(self) -> Tree<T> {
        self.tree
    }
    /// Returns the payload of the node in focus.
    #[inline(always)]
    pub const fn value(&self) -> &T {
        self.tree.value()
    }
    /// Returns the children of the node in focus, which is an empty slice if it's a leaf.
    #[inline(always)]
    pub fn children(&self) -> &[Tree<T>] {
        self.tree.children()
    }
    /// Returns an iterator over the siblings of the node in focus, excluding the node itself. At the top, there are none.
    #[inline]
    pub fn siblings(&self) -> Siblings<'_, T> {
        let (left, right): (&[Tree<T>], &[Tree<T>]) = match self.breadcrumbs().next() {
            Some(crumb) => (crumb.left(), crumb.right()),
            None => (&[], &[]),
        };
        left.iter().chain(right.iter())
    }
    /// Returns an iterator over the breadcrumbs, starting with the latest one, i.e. the one for the parent of the node in focus.
    #[inline]
    pub fn breadcrumbs(&self) -> Breadcrumbs<'_, T> {
        Breadcrumbs {
            node: self.breadcrumbs.as_deref(),
            remaining: self.depth,
        }
    }
    /// Returns the number of breadcrumbs, i.e. how many times the zipper has to go up to reach the top.
    #[inline(always)]
    pub const fn depth(&self) -> usize {
        self.depth
    }
    /// Returns `true` if the zipper has no breadcrumbs and thus is focused on the root, `false` otherwise.
    #[inline(always)]
    pub const fn is_top(&self) -> bool {
        self.depth == 0
    }
    /// Returns the index path leading from the root to the node in focus.
    ///
    /// Passing it to [`move_through`] on a zipper created from the root yields a zipper focused on the same node.
    ///
    /// [`move_through`]: #method.move_through " "
    pub fn path(&self) -> IndexPath {
        let mut path = self.breadcrumbs().map(Crumb::index).collect::<IndexPath>();
        path.reverse();
        path
    }

    /// Returns a zipper with the payload of the node in focus transformed by the specified closure. Whether the node is a leaf or a branch, its children and the breadcrumbs stay the same.
    #[inline]
    pub fn update(&self, transform: impl FnOnce(&T) -> T) -> Self {
        self.replacing(self.tree.updating(transform(self.tree.value())))
    }
    /// Returns a zipper with the payload of the node in focus replaced by `value`.
    #[inline]
    pub fn update_value(&self, value: T) -> Self {
        self.update(|_| value)
    }
    /// Returns a zipper with the entire subtree in focus replaced by `tree`, keeping the breadcrumbs.
    #[inline]
    pub fn replacing(&self, tree: Tree<T>) -> Self {
        Self {
            tree,
            breadcrumbs: self.breadcrumbs.clone(),
            depth: self.depth,
        }
    }
}
impl<T: Clone> Zipper<T> {
    /// Returns a zipper focused on the child of the current node at the specified index.
    ///
    /// # Errors
    /// - `BranchOperationPerformedOnLeaf` if the node in focus is a leaf, which has no children to move into.
    /// - `IllFormedIndexPath` if there is no child at `index`.
    pub fn move_to(&self, index: usize) -> Result<Self, TreeError> {
        match &self.tree {
            Tree::Leaf(..) => Err(TreeError::BranchOperationPerformedOnLeaf),
            Tree::Branch(value, children) => {
                let (left, child, right) =
                    util::split_around(children, index).ok_or(TreeError::IllFormedIndexPath)?;
                let crumb = Crumb {
                    value: value.clone(),
                    left,
                    right,
                };
                Ok(Self {
                    tree: child,
                    breadcrumbs: Some(Shared::new(CrumbNode {
                        crumb,
                        next: self.breadcrumbs.clone(),
                    })),
                    depth: self.depth + 1,
                })
            }
        }
    }
    /// Moves down through every index of the path in order. The empty path produces a zipper equal to `self`.
    ///
    /// # Errors
    /// Fails with the error of the first [`move_to`] which fails.
    ///
    /// [`move_to`]: #method.move_to " "
    pub fn move_through(&self, path: &[usize]) -> Result<Self, TreeError> {
        path.iter()
            .try_fold(self.clone(), |zipper, &index| zipper.move_to(index))
    }
    /// Returns a zipper focused on the parent of the current node, rebuilt from the latest breadcrumb. At the top, this returns an equal zipper instead of failing.
    pub fn up(&self) -> Self {
        let node = match &self.breadcrumbs {
            Some(node) => node,
            None => return self.clone(),
        };
        let Crumb { value, left, right } = &node.crumb;
        let children = util::spliced(left, self.tree.clone(), right);
        debug_assert_eq!(children.len(), left.len() + right.len() + 1);
        Self {
            tree: Tree::Branch(value.clone(), children.into()),
            breadcrumbs: node.next.clone(),
            depth: self.depth - 1,
        }
    }
    /// Returns a zipper focused on the root, reached by going up until no breadcrumbs are left.
    pub fn top(&self) -> Self {
        let mut zipper = self.clone();
        while !zipper.is_top() {
            zipper = zipper.up();
        }
        zipper
    }
    /// Goes up to the root and returns the whole tree, with every edit made along the way.
    #[inline]
    pub fn unzip(&self) -> Tree<T> {
        self.top().into_tree()
    }
}
impl<T> From<Tree<T>> for Zipper<T> {
    #[inline(always)]
    fn from(tree: Tree<T>) -> Self {
        Self::new(tree)
    }
}

/// An iterator over the siblings of the node in focus of a zipper, created by [`Zipper::siblings`].
///
/// [`Zipper::siblings`]: struct.Zipper.html#method.siblings " "
pub type Siblings<'a, T> = Chain<slice::Iter<'a, Tree<T>>, slice::Iter<'a, Tree<T>>>;

/// An iterator over the breadcrumbs of a zipper, from the latest to the earliest. Created by [`Zipper::breadcrumbs`].
///
/// [`Zipper::breadcrumbs`]: struct.Zipper.html#method.breadcrumbs " "
#[derive(Debug)]
pub struct Breadcrumbs<'a, T> {
    node: Option<&'a CrumbNode<T>>,
    remaining: usize,
}
impl<'a, T> Iterator for Breadcrumbs<'a, T> {
    type Item = &'a Crumb<T>;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node.take()?;
        self.node = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.crumb)
    }
    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
impl<T> ExactSizeIterator for Breadcrumbs<'_, T> {}
impl<T> FusedIterator for Breadcrumbs<'_, T> {}
impl<T> Clone for Breadcrumbs<'_, T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            node: self.node,
            remaining: self.remaining,
        }
    }
}
