use crate::Node;

/// Which child slot of a node an element belongs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The slot holding smaller elements.
    Left,
    /// The slot holding larger elements.
    Right,
}

/// The outcome of descending a non-empty tree looking for an element. See
/// [`OrderedTree::search`](crate::OrderedTree::search).
pub enum Search<'a, T> {
    /// A node holding an equal element.
    Found(&'a Node<T>),
    /// The element is absent. It would be inserted as the `side` child of `parent`,
    /// which currently has nothing in that slot.
    Vacant {
        /// The would-be parent of the element.
        parent: &'a Node<T>,
        /// The empty slot of `parent` the element would occupy.
        side: Side,
    },
}

impl<'a, T> Search<'a, T> {
    /// The node the descent stopped at: either the match or the insertion point.
    pub fn node(&self) -> &'a Node<T> {
        match *self {
            Self::Found(node) => node,
            Self::Vacant { parent, .. } => parent,
        }
    }

    /// Whether the element was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

// Hand-written so `T` doesn't need to be `Clone`.
impl<T> Clone for Search<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Search<'_, T> {}
