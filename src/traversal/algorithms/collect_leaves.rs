use core::{
    fmt::{self, Formatter, Debug},
    mem,
};
use alloc::vec::Vec;
use crate::NodeValue;
use super::super::{Visitor, Traversable, VisitorDirection, CursorResult};

/// A `Visitor` which collects the payloads of all leaves below its starting node, from left to right.
///
/// Works with any [`Traversable`], only relying on its cursor movements. For [`Tree`], the result is the same as the one of [`Tree::leaves`].
///
/// # Example
/// ```rust
/// use rootstock::{Tree, Traversable, traversal::algorithms::CollectLeaves};
///
/// let tree = Tree::branch(0, vec![
///     Tree::from_leaves(0, vec![1, 2]),
///     Tree::leaf(3),
/// ]);
/// assert_eq!(tree.traverse(CollectLeaves::new()), [1, 2, 3]);
/// ```
///
/// [`Traversable`]: ../trait.Traversable.html " "
/// [`Tree`]: ../../tree/enum.Tree.html " "
/// [`Tree::leaves`]: ../../tree/enum.Tree.html#method.leaves " "
pub struct CollectLeaves<Tr: Traversable> {
    leaves: Vec<Tr::Leaf>,
    start: Option<Tr::Cursor>,
    ascending: bool,
    finished: bool,
}
impl<Tr: Traversable> CollectLeaves<Tr> {
    /// Creates the visitor. The node at which traversal starts is the one whose leaves are collected.
    #[inline]
    pub fn new() -> Self {
        Self {
            leaves: Vec::new(),
            start: None,
            ascending: false,
            finished: false,
        }
    }
    fn next_sibling_or_stop(
        &mut self,
        cursor: &Tr::Cursor,
    ) -> VisitorDirection<Tr::Cursor, Vec<Tr::Leaf>> {
        if self.start.as_ref() == Some(cursor) {
            self.finished = true;
            VisitorDirection::Stop(mem::take(&mut self.leaves))
        } else {
            VisitorDirection::NextSibling
        }
    }
}
impl<Tr: Traversable> Default for CollectLeaves<Tr> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
impl<Tr> Visitor for CollectLeaves<Tr>
where
    Tr: Traversable,
    Tr::Leaf: Clone,
{
    type Target = Tr;
    type Output = Vec<Tr::Leaf>;

    fn visit(
        &mut self,
        traversable: &Tr,
        cursor: CursorResult<Tr::Cursor>,
    ) -> VisitorDirection<Tr::Cursor, Self::Output> {
        assert!(!self.finished, "visitor was called after it stopped");
        let cursor = match cursor {
            Ok(cursor) => cursor,
            Err(error) => {
                // Ran out of siblings, so the parent is done as well.
                self.ascending = true;
                debug_assert!(self.start.as_ref() != Some(&error.previous_state));
                return VisitorDirection::Parent;
            }
        };
        if self.start.is_none() {
            self.start = Some(cursor.clone());
        }
        if self.ascending {
            self.ascending = false;
            return self.next_sibling_or_stop(&cursor);
        }
        match traversable.value_of(&cursor) {
            NodeValue::Leaf(value) => {
                self.leaves.push(value.clone());
                self.next_sibling_or_stop(&cursor)
            }
            NodeValue::Branch(..) => {
                if traversable.num_children_of(&cursor) == 0 {
                    self.next_sibling_or_stop(&cursor)
                } else {
                    VisitorDirection::Child(0)
                }
            }
        }
    }
}
impl<Tr> Debug for CollectLeaves<Tr>
where
    Tr: Traversable,
    Tr::Leaf: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectLeaves")
            .field("leaves", &self.leaves)
            .field("start", &self.start)
            .field("ascending", &self.ascending)
            .field("finished", &self.finished)
            .finish()
    }
}
