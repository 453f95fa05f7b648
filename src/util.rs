use std::ptr::NonNull;

use crate::tree::Node;
use crate::Side;

/// Where a descent for some element ended, as raw pointers so callers holding
/// `&mut OrderedTree` can relink from there.
pub(crate) enum Descent<T> {
    /// This node holds an equal element.
    Found(NonNull<Node<T>>),
    /// The element is absent and belongs in the given (empty) slot of this node.
    Vacant(NonNull<Node<T>>, Side),
}
