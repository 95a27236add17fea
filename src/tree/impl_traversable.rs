use crate::{
    traversal::{Traversable, VisitorDirection, CursorResult, CursorDirectionError},
    IndexPath,
    NodeValue,
};
use super::Tree;

impl<T> Tree<T> {
    #[track_caller]
    fn node_at(&self, cursor: &IndexPath) -> &Self {
        self.subtree(cursor)
            .unwrap_or_else(|_| panic!("invalid cursor: {:?}", cursor))
    }
}
/// Trees are traversed with index paths from the root as cursors.
///
/// # Panics
/// All methods taking a cursor by reference panic if it does not address a node of the tree. Cursors produced by `advance_cursor` are always valid for the tree that produced them.
impl<T> Traversable for Tree<T> {
    type Leaf = T;
    type Branch = T;
    type Cursor = IndexPath;

    fn advance_cursor<V>(
        &self,
        cursor: Self::Cursor,
        direction: VisitorDirection<Self::Cursor, V>,
    ) -> CursorResult<Self::Cursor> {
        // Create the error in advance to avoid duplication
        let error = CursorDirectionError {
            previous_state: cursor.clone(),
        };
        let next = match direction {
            VisitorDirection::Parent => {
                let mut next = cursor;
                return next.pop().map(|_| next).ok_or(error);
            }
            VisitorDirection::NextSibling => {
                let mut next = cursor;
                match next.last_mut() {
                    Some(index) => *index += 1,
                    None => return Err(error),
                }
                next
            }
            VisitorDirection::Child(num) => {
                let mut next = cursor;
                next.push(num);
                next
            }
            VisitorDirection::SetTo(new_cursor) => new_cursor,
            VisitorDirection::Stop(..) => return Err(error),
        };
        if self.subtree(&next).is_ok() {
            Ok(next)
        } else {
            // Do not allow returning invalid cursors, as those will cause panicking
            Err(error)
        }
    }
    #[inline(always)]
    fn cursor_to_root(&self) -> Self::Cursor {
        IndexPath::new()
    }
    #[inline]
    #[track_caller]
    fn value_of(&self, cursor: &Self::Cursor) -> NodeValue<&'_ T, &'_ T> {
        self.node_at(cursor).node_value()
    }
    #[inline]
    #[track_caller]
    fn parent_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        let _ = self.node_at(cursor); // panics on invalid cursors
        cursor
            .split_last()
            .map(|(_, parent)| IndexPath::from_slice(parent))
    }
    #[inline]
    #[track_caller]
    fn num_children_of(&self, cursor: &Self::Cursor) -> usize {
        self.node_at(cursor).children().len()
    }
    #[inline]
    #[track_caller]
    fn nth_child_of(&self, cursor: &Self::Cursor, child_num: usize) -> Option<Self::Cursor> {
        if child_num < self.num_children_of(cursor) {
            let mut child = cursor.clone();
            child.push(child_num);
            Some(child)
        } else {
            None
        }
    }
}
