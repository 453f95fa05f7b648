//! Depth-first walks over a tree. All of them run off an explicit stack so a
//! degenerate (linked-list shaped) tree can't blow the call stack.

use std::fmt;

use crate::Node;

/// The order in which a depth-first traversal visits a node relative to its
/// subtrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Left subtree, node, right subtree. Yields elements in sorted order.
    In,
    /// Node, left subtree, right subtree.
    Pre,
    /// Left subtree, right subtree, node.
    Post,
}

pub(crate) fn walk<T>(root: Option<&Node<T>>, order: Order) -> Vec<&T> {
    match order {
        Order::In => in_order(root),
        Order::Pre => pre_order(root),
        Order::Post => post_order(root),
    }
}

fn in_order<T>(root: Option<&Node<T>>) -> Vec<&T> {
    let mut elems = Vec::new();
    let mut stack = Vec::new();
    let mut current = root;
    loop {
        while let Some(node) = current {
            stack.push(node);
            current = node.left();
        }
        let Some(node) = stack.pop() else {
            return elems;
        };
        elems.push(node.elem());
        current = node.right();
    }
}

fn pre_order<T>(root: Option<&Node<T>>) -> Vec<&T> {
    let mut elems = Vec::new();
    let mut stack: Vec<_> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        elems.push(node.elem());
        // Right goes on first so left is popped first.
        stack.extend(node.right());
        stack.extend(node.left());
    }
    elems
}

fn post_order<T>(root: Option<&Node<T>>) -> Vec<&T> {
    // Node-right-left reversed is left-right-node.
    let mut elems = Vec::new();
    let mut stack: Vec<_> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        elems.push(node.elem());
        stack.extend(node.left());
        stack.extend(node.right());
    }
    elems.reverse();
    elems
}

/// A traversal rendered as its elements separated by single spaces. Created by
/// [`OrderedTree::rendered`](crate::OrderedTree::rendered).
///
/// This is meant for debugging and tests. It's not a stable format.
pub struct Rendered<'a, T> {
    root: Option<&'a Node<T>>,
    order: Order,
}

impl<'a, T> Rendered<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, order: Order) -> Self {
        Self { root, order }
    }
}

impl<T> fmt::Display for Rendered<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, elem) in walk(self.root, self.order).into_iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", elem)?;
        }
        Ok(())
    }
}
