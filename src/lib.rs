//! This crate exposes an unbalanced Binary Search Tree (BST) that keeps a
//! parent pointer on every node.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored elements. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the element that
//! was inserted and will sometimes have child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    element less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    element greater than its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`. [`OrderedTree`] does not rebalance so inserting
//! sorted input produces a tree whose height equals its size. Every walk over the
//! tree (search, traversal, teardown) is a loop rather than recursion, so such
//! degenerate trees are slow but never overflow the stack.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{Order, OrderedTree, TreeError};
//!
//! let mut tree = OrderedTree::new();
//! assert_eq!(tree.find(&1).unwrap_err(), TreeError::EmptyTree);
//!
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//!
//! assert_eq!(tree.size(), 3);
//! assert_eq!(tree.rendered(Order::Pre).to_string(), "2 1 3");
//!
//! assert_eq!(tree.remove(&2), Some(2));
//! assert_eq!(tree.in_order(), vec![&1, &3]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod search;
#[cfg(test)]
mod test;
mod traversal;
mod tree;
mod util;

pub use error::{Result, TreeError};
pub use search::{Search, Side};
pub use traversal::{Order, Rendered};
pub use tree::{Node, OrderedTree};
