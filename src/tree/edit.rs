//! Path-based transformations.
//!
//! Every operation here walks down an index path, applies its edit at the end and then rebuilds the child list of every branch on the way back up, with the one modified child swapped in. Sibling subtrees are carried over by cloning their shared handles, so the work done is proportional to the depth of the edit times the number of children along the path.

use crate::{util, TreeError};
use super::Tree;

impl<T: Clone> Tree<T> {
    /// Returns a copy of the branch with its direct child at `index` replaced by `tree`.
    ///
    /// # Errors
    /// - `BranchOperationPerformedOnLeaf` if the node is a leaf, since leaves have no children to replace.
    /// - `IndexOutOfBounds` if there is no child at `index`.
    ///
    /// # Example
    /// ```rust
    /// # use rootstock::Tree;
    /// let tree = Tree::from_leaves(-1, vec![1, 2, 3]);
    /// let replaced = tree.replacing_tree_at(1, Tree::leaf(0)).unwrap();
    /// assert_eq!(replaced.leaves(), [1, 0, 3]);
    /// ```
    pub fn replacing_tree_at(&self, index: usize, tree: Tree<T>) -> Result<Self, TreeError> {
        match self {
            Self::Leaf(..) => Err(TreeError::BranchOperationPerformedOnLeaf),
            Self::Branch(value, children) => {
                let children =
                    util::replaced(children, index, tree).ok_or(TreeError::IndexOutOfBounds)?;
                Ok(Self::Branch(value.clone(), children.into()))
            }
        }
    }
    /// Returns a copy of the tree in which the node addressed by `path` is replaced by `tree`.
    ///
    /// All indices but the last one are used to reach the parent of the node, and the last one selects which of its children gets replaced. The path thus has to be non-empty: replacing the root is done by simply using the new tree instead.
    ///
    /// # Errors
    /// - `BranchOperationPerformedOnLeaf` if the node itself is a leaf, which has no children to replace.
    /// - `IllFormedIndexPath` if the path is empty, if any of its indices does not point to an existing child, or if it leads into a leaf before running out.
    ///
    /// # Example
    /// ```rust
    /// # use rootstock::{Tree, TreeError};
    /// let tree = Tree::branch(0, vec![
    ///     Tree::leaf(1),
    ///     Tree::from_leaves(0, vec![2, 3]),
    /// ]);
    /// let replaced = tree.replacing_tree_through(&[1, 0], Tree::from_leaves(0, vec![7, 8])).unwrap();
    /// assert_eq!(replaced.leaves(), [1, 7, 8, 3]);
    ///
    /// assert_eq!(
    ///     tree.replacing_tree_through(&[0, 0], Tree::leaf(9)),
    ///     Err(TreeError::IllFormedIndexPath),
    /// );
    /// ```
    pub fn replacing_tree_through(&self, path: &[usize], tree: Tree<T>) -> Result<Self, TreeError> {
        match self {
            Self::Leaf(..) => Err(TreeError::BranchOperationPerformedOnLeaf),
            Self::Branch(value, children) => {
                let (&index, remaining_path) =
                    path.split_first().ok_or(TreeError::IllFormedIndexPath)?;
                let subtree = children.get(index).ok_or(TreeError::IllFormedIndexPath)?;
                let replacement = if remaining_path.is_empty() {
                    tree
                } else if subtree.is_leaf() {
                    // The rest of the path points below a leaf.
                    return Err(TreeError::IllFormedIndexPath);
                } else {
                    subtree.replacing_tree_through(remaining_path, tree)?
                };
                let children = util::replaced(children, index, replacement)
                    .ok_or(TreeError::IllFormedIndexPath)?;
                Ok(Self::Branch(value.clone(), children.into()))
            }
        }
    }
    /// Returns a copy of the tree with `tree` inserted as a new child of the branch addressed by `path`, placed at position `index` among that branch's existing children.
    ///
    /// Children at `index` and after it are shifted to the right. Inserting at an `index` equal to the number of children appends the new child after all of them. The empty path addresses the node itself.
    ///
    /// # Errors
    /// - `BranchOperationPerformedOnLeaf` if the path leads into or through a leaf.
    /// - `IllFormedIndexPath` if any index in the path does not point to an existing child, or if `index` is greater than the number of children of the addressed branch.
    ///
    /// # Example
    /// ```rust
    /// # use rootstock::{Tree, TreeError};
    /// let tree = Tree::from_leaves(0, vec![1, 2, 3]);
    ///
    /// let prepended = tree.inserting(Tree::from_leaves(0, vec![-2, -1]), &[], 0).unwrap();
    /// assert_eq!(prepended.leaves(), [-2, -1, 1, 2, 3]);
    ///
    /// let appended = tree.inserting(Tree::leaf(4), &[], 3).unwrap();
    /// assert_eq!(appended.leaves(), [1, 2, 3, 4]);
    ///
    /// assert_eq!(tree.inserting(Tree::leaf(5), &[], 4), Err(TreeError::IllFormedIndexPath));
    /// assert_eq!(
    ///     tree.inserting(Tree::leaf(5), &[0], 0),
    ///     Err(TreeError::BranchOperationPerformedOnLeaf),
    /// );
    /// ```
    pub fn inserting(&self, tree: Tree<T>, path: &[usize], index: usize) -> Result<Self, TreeError> {
        match self {
            Self::Leaf(..) => Err(TreeError::BranchOperationPerformedOnLeaf),
            Self::Branch(value, children) => {
                let children = match path.split_first() {
                    None => util::inserted(children, index, tree),
                    Some((&head, tail)) => {
                        let subtree = children.get(head).ok_or(TreeError::IllFormedIndexPath)?;
                        let modified = subtree.inserting(tree, tail, index)?;
                        util::replaced(children, head, modified)
                    }
                }
                .ok_or(TreeError::IllFormedIndexPath)?;
                Ok(Self::Branch(value.clone(), children.into()))
            }
        }
    }
}
