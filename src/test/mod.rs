
use crate::{Node, OrderedTree};

/// Walks the whole tree asserting that it's ordered, that every child points back at its
/// parent, and that `size` agrees with what's reachable.
pub(crate) fn assert_invariants<T>(tree: &OrderedTree<T>)
where
    T: Ord,
{
    let mut reachable = 0;
    let mut stack: Vec<&Node<T>> = tree.root().into_iter().collect();
    if let Some(root) = tree.root() {
        assert!(root.parent().is_none(), "root has a parent");
    }

    while let Some(node) = stack.pop() {
        reachable += 1;
        if let Some(left) = node.left() {
            assert!(left.elem() < node.elem(), "left child out of order");
            assert!(std::ptr::eq(left.parent().unwrap(), node), "bad left parent");
            stack.push(left);
        }
        if let Some(right) = node.right() {
            assert!(right.elem() > node.elem(), "right child out of order");
            assert!(std::ptr::eq(right.parent().unwrap(), node), "bad right parent");
            stack.push(right);
        }
    }

    let in_order = tree.in_order();
    assert!(in_order.windows(2).all(|w| w[0] < w[1]), "in-order not sorted");
    assert_eq!(in_order.len(), reachable);
    assert_eq!(tree.size(), reachable);
    assert_eq!(tree.is_empty(), reachable == 0);
}
