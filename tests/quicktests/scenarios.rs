use ordered_tree::{Order, OrderedTree, TreeError};

#[test]
fn find_on_new_tree_fails() {
    let tree: OrderedTree<i32> = OrderedTree::new();

    assert_eq!(tree.find(&1).unwrap_err(), TreeError::EmptyTree);
}

#[test]
fn three_node_tree_shape() {
    let mut tree = OrderedTree::new();
    for elem in [2, 1, 3] {
        tree.insert(elem);
    }

    let root = tree.root().unwrap();
    assert_eq!(root.elem(), &2);
    assert_eq!(root.left().map(|n| n.elem()), Some(&1));
    assert_eq!(root.right().map(|n| n.elem()), Some(&3));
    assert_eq!(tree.size(), 3);
}

#[test]
fn remove_node_with_two_children() {
    let mut tree = OrderedTree::new();
    for elem in [8, 5, 6, 3] {
        tree.insert(elem);
    }
    assert_eq!(tree.size(), 4);

    tree.remove(&5);
    assert_eq!(tree.size(), 3);
    assert_eq!(tree.rendered(Order::In).to_string(), "3 6 8");
}

#[test]
fn remove_node_with_right_child() {
    let mut tree = OrderedTree::new();
    for elem in [1, 2, 3] {
        tree.insert(elem);
    }

    tree.remove(&2);
    assert_eq!(tree.size(), 2);
    assert_eq!(tree.in_order(), vec![&1, &3]);
}

#[test]
fn removing_only_element_empties_tree() {
    let mut tree = OrderedTree::new();
    tree.insert("only");

    assert_eq!(tree.remove(&"only"), Some("only"));
    assert!(tree.is_empty());
    assert_eq!(tree.find(&"only").unwrap_err(), TreeError::EmptyTree);
}

#[test]
fn find_missing_returns_insertion_point() {
    let mut tree = OrderedTree::new();
    tree.insert(2);

    assert_eq!(tree.find(&1).map(|n| *n.elem()), Ok(2));
}

#[test]
fn strings_render_in_every_order() {
    let mut tree = OrderedTree::new();
    for word in ["m", "c", "x", "a", "e"] {
        tree.insert(word.to_string());
    }

    assert_eq!(tree.rendered(Order::In).to_string(), "a c e m x");
    assert_eq!(tree.rendered(Order::Pre).to_string(), "m c a e x");
    assert_eq!(tree.rendered(Order::Post).to_string(), "a e c x m");
}
