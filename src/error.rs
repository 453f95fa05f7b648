/// Errors surfaced by [`OrderedTree`](crate::OrderedTree) lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// A lookup was made on a tree with no root.
    #[error("empty tree")]
    EmptyTree,
}

/// Shorthand for results carrying a [`TreeError`].
pub type Result<T> = std::result::Result<T, TreeError>;
