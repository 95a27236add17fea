use core::{
    fmt::{self, Formatter, Debug},
    iter::FusedIterator,
};
use super::{Visitor, Traversable, Step, CursorResult, CursorOf};

/// Runs a [`Visitor`] over a [`Traversable`] one step per call to `next`.
///
/// Every step yields `Some(None)` until the visitor stops, at which point its result is yielded as `Some(Some(result))`. The iterator is exhausted afterwards.
///
/// [`Visitor`]: trait.Visitor.html " "
/// [`Traversable`]: trait.Traversable.html " "
pub struct TraverseIter<'t, V: Visitor> {
    visitor: V,
    traversable: &'t V::Target,
    cursor: Option<CursorResult<CursorOf<V>>>,
    finished: bool,
}
impl<'t, V: Visitor> TraverseIter<'t, V> {
    /// Prepares a traversal of `traversable` by `visitor`, starting at the root.
    #[inline(always)]
    pub fn new(visitor: V, traversable: &'t V::Target) -> Self {
        Self {
            visitor,
            traversable,
            cursor: None,
            finished: false,
        }
    }
}
impl<V: Visitor> Iterator for TraverseIter<'_, V> {
    type Item = Option<V::Output>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let traversable = self.traversable;
        let cursor = self
            .cursor
            .take()
            .unwrap_or_else(|| Ok(traversable.cursor_to_root()));
        Some(match traversable.step(&mut self.visitor, cursor) {
            Step::NextCursor(next) => {
                self.cursor = Some(next);
                None
            }
            Step::End(output) => {
                self.finished = true;
                Some(output)
            }
        })
    }
}
impl<V: Visitor> FusedIterator for TraverseIter<'_, V> {}
impl<V> Debug for TraverseIter<'_, V>
where
    V: Visitor + Debug,
    V::Target: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraverseIter")
            .field("visitor", &self.visitor)
            .field("traversable", &self.traversable)
            .field("cursor", &self.cursor)
            .field("finished", &self.finished)
            .finish()
    }
}
