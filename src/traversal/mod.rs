//! Cursor-driven traversal of trees by stateful algorithms.
//!
//! A traversal is a conversation between two parties. The [`Traversable`] owns the data and a notion of *cursor*, a handle which addresses one of its nodes; for [`Tree`], cursors are index paths from the root. The [`Visitor`] owns the state of an algorithm: it is shown one node at a time and answers with a [`VisitorDirection`], saying where the cursor should go next or that it is done and has a result.
//!
//! When a direction cannot be followed, for example when asking for the next sibling of the last child, the cursor stays where it was and the visitor is shown a [`CursorDirectionError`] carrying that position instead. Algorithms use this to notice that they ran off the end of a list of children.
//!
//! Trees never change after being built, so visitors only ever read. Algorithms which need a modified tree gather what they need and build it through the path-based operations of [`Tree`] or a [`Zipper`].
//!
//! Ready-made visitors live in the [`algorithms`] module. [`TraverseIter`] runs a traversal one step per iteration.
//!
//! [`algorithms`]: algorithms/index.html " "
//! [`Visitor`]: trait.Visitor.html " "
//! [`Traversable`]: trait.Traversable.html " "
//! [`TraverseIter`]: struct.TraverseIter.html " "
//! [`VisitorDirection`]: enum.VisitorDirection.html " "
//! [`CursorDirectionError`]: struct.CursorDirectionError.html " "
//! [`Tree`]: ../tree/enum.Tree.html " "
//! [`Zipper`]: ../zipper/struct.Zipper.html " "

pub mod algorithms;

mod iter;
pub use iter::TraverseIter;

use core::fmt::{self, Formatter, Debug, Display};
use crate::NodeValue;

/// Shorthand for the cursor type of a visitor's target.
type CursorOf<V> = <<V as Visitor>::Target as Traversable>::Cursor;

/// A stateful algorithm which walks a [`Traversable`] by steering its cursor.
///
/// [`Traversable`]: trait.Traversable.html " "
pub trait Visitor {
    /// The structure this visitor knows how to walk.
    type Target: Traversable;
    /// What the visitor produces once it stops.
    type Output;
    /// Looks at the node under the cursor and decides where to go next.
    ///
    /// `cursor` is `Err` if the previous direction could not be followed. The error holds the cursor which stayed in place, and the node it addresses has already been visited.
    ///
    /// # Panics
    /// Implementations must panic if called again after returning `Stop`.
    fn visit(
        &mut self,
        traversable: &Self::Target,
        cursor: CursorResult<CursorOf<Self>>,
    ) -> VisitorDirection<CursorOf<Self>, Self::Output>;
}
impl<V: Visitor> Visitor for &mut V {
    type Target = V::Target;
    type Output = V::Output;
    #[inline(always)]
    fn visit(
        &mut self,
        traversable: &Self::Target,
        cursor: CursorResult<CursorOf<Self>>,
    ) -> VisitorDirection<CursorOf<Self>, Self::Output> {
        (**self).visit(traversable, cursor)
    }
}

/// Where a [`Visitor`] wants the cursor to go after visiting a node.
///
/// [`Visitor`]: trait.Visitor.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VisitorDirection<C, V> {
    /// Go to the parent of the visited node.
    Parent,
    /// Go to the sibling right after the visited node.
    NextSibling,
    /// Go to the child of the visited node at the given index.
    Child(usize),
    /// Jump to an arbitrary cursor.
    SetTo(C),
    /// End the traversal with a result.
    Stop(V),
}

/// Tree-like structures whose nodes can be addressed by cursors and walked by a [`Visitor`].
///
/// Only [`advance_cursor`] decides which moves are legal; the provided [`traverse`] and [`step`] drive a visitor with it.
///
/// [`Visitor`]: trait.Visitor.html " "
/// [`advance_cursor`]: #tymethod.advance_cursor " "
/// [`traverse`]: #method.traverse " "
/// [`step`]: #method.step " "
pub trait Traversable: Sized {
    /// Payload type of leaf nodes.
    type Leaf;
    /// Payload type of branch nodes.
    type Branch;
    /// A handle addressing one node. Cloned on every step, so it should be cheap to clone.
    type Cursor: Clone + Debug + Eq;

    /// Moves a cursor in the specified direction.
    ///
    /// # Errors
    /// Fails with a `CursorDirectionError` holding the unchanged cursor if the target node does not exist or if the direction is `Stop`.
    fn advance_cursor<V>(
        &self,
        cursor: Self::Cursor,
        direction: VisitorDirection<Self::Cursor, V>,
    ) -> CursorResult<Self::Cursor>;
    /// Returns a cursor addressing the root.
    fn cursor_to_root(&self) -> Self::Cursor;
    /// Returns the payload of the node under the cursor, tagged with whether it's a leaf or a branch.
    fn value_of(&self, cursor: &Self::Cursor) -> NodeValue<&'_ Self::Branch, &'_ Self::Leaf>;
    /// Returns a cursor addressing the parent of the node under the cursor, or `None` for the root.
    fn parent_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor>;
    /// Returns how many children the node under the cursor has.
    fn num_children_of(&self, cursor: &Self::Cursor) -> usize;
    /// Returns a cursor addressing the child at `child_num` of the node under the cursor, or `None` if there is no such child.
    fn nth_child_of(&self, cursor: &Self::Cursor, child_num: usize) -> Option<Self::Cursor>;

    /// Shows the visitor one node and follows its answer.
    ///
    /// If `cursor` is an error, the cursor it holds is where the next move starts from.
    fn step<V>(&self, mut visitor: V, cursor: CursorResult<Self::Cursor>) -> Step<Self::Cursor, V::Output>
    where
        V: Visitor<Target = Self>,
    {
        let direction = visitor.visit(self, cursor.clone());
        if let VisitorDirection::Stop(output) = direction {
            return Step::End(output);
        }
        let from = cursor.unwrap_or_else(CursorDirectionError::recover);
        Step::NextCursor(self.advance_cursor(from, direction))
    }
    /// Runs the visitor from the root until it stops, returning its result.
    #[inline(always)]
    fn traverse<V>(&self, visitor: V) -> V::Output
    where
        V: Visitor<Target = Self>,
    {
        self.traverse_from(self.cursor_to_root(), visitor)
    }
    /// Runs the visitor from the specified node until it stops, returning its result.
    fn traverse_from<V>(&self, start: Self::Cursor, mut visitor: V) -> V::Output
    where
        V: Visitor<Target = Self>,
    {
        let mut cursor = Ok(start);
        loop {
            cursor = match self.step(&mut visitor, cursor) {
                Step::NextCursor(next) => next,
                Step::End(output) => break output,
            };
        }
    }
}

/// The outcome of [`Traversable::step`].
///
/// [`Traversable::step`]: trait.Traversable.html#method.step " "
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step<C, V> {
    /// The visitor wants more; this is the cursor, or the refusal, to show it next.
    NextCursor(CursorResult<C>),
    /// The visitor stopped with this result.
    End(V),
}

/// A direction given by a visitor could not be followed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CursorDirectionError<C> {
    /// Where the cursor was when the move was refused. It is left there.
    pub previous_state: C,
}
/// A cursor, or the refusal to move it.
pub type CursorResult<C> = Result<C, CursorDirectionError<C>>;
impl<C> CursorDirectionError<C> {
    /// Returns the cursor which was refused to move.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)] // const fn cannot evaluate drop
    pub fn recover(self) -> C {
        self.previous_state
    }
}
impl<C> Display for CursorDirectionError<C> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("no node in the requested direction")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl<C: Debug> std::error::Error for CursorDirectionError<C> {}
