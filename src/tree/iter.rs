use core::{iter::FusedIterator, slice};
use alloc::vec::Vec;
use super::Tree;

/// An iterator over references to the leaf payloads of a tree, from left to right.
///
/// Created by [`Tree::iter_leaves`]. Keeps one slice iterator per level of the branch it is currently in, so memory usage is proportional to the depth of the tree rather than its size.
///
/// [`Tree::iter_leaves`]: enum.Tree.html#method.iter_leaves " "
#[derive(Clone, Debug)]
pub struct LeavesIter<'a, T> {
    root: Option<&'a Tree<T>>,
    stack: Vec<slice::Iter<'a, Tree<T>>>,
}
impl<'a, T> LeavesIter<'a, T> {
    #[inline]
    pub(super) fn new(root: &'a Tree<T>) -> Self {
        Self {
            root: Some(root),
            stack: Vec::new(),
        }
    }
}
impl<'a, T> Iterator for LeavesIter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            match root {
                Tree::Leaf(value) => return Some(value),
                Tree::Branch(_, children) => self.stack.push(children.iter()),
            }
        }
        loop {
            let level = self.stack.last_mut()?;
            match level.next() {
                Some(Tree::Leaf(value)) => return Some(value),
                Some(Tree::Branch(_, children)) => self.stack.push(children.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
impl<T> FusedIterator for LeavesIter<'_, T> {}
