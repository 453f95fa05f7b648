use ordered_tree::{OrderedTree, TreeError};

use std::collections::BTreeSet;

fn tree_of(xs: &[i8]) -> OrderedTree<i8> {
    let mut tree = OrderedTree::new();
    for x in xs {
        tree.insert(*x);
    }
    tree
}

quickcheck::quickcheck! {
    fn size_is_distinct_count(xs: Vec<i8>) -> bool {
        let tree = tree_of(&xs);
        let distinct: BTreeSet<_> = xs.iter().collect();

        tree.size() == distinct.len() && tree.is_empty() == xs.is_empty()
    }
}

quickcheck::quickcheck! {
    fn find_returns_inserted(xs: Vec<i8>) -> bool {
        let tree = tree_of(&xs);

        xs.iter().all(|x| tree.find(x).map(|n| n.elem()) == Ok(x))
    }
}

quickcheck::quickcheck! {
    fn find_misses_land_on_a_free_slot(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = tree_of(&xs);
        let added: BTreeSet<_> = xs.into_iter().collect();
        let nots: BTreeSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| match tree.find(x) {
            // The insertion point must have an empty slot on the side `x` would go.
            Ok(node) => if x < node.elem() { node.left().is_none() } else { node.right().is_none() },
            Err(TreeError::EmptyTree) => added.is_empty(),
        })
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = tree_of(&xs);
        for delete in &deletes {
            tree.remove(delete);
        }

        let mut still_present: BTreeSet<_> = xs.into_iter().collect();
        for delete in &deletes {
            still_present.remove(delete);
        }

        deletes.iter().all(|x| !tree.contains(x))
            && tree.in_order().into_iter().eq(still_present.iter())
            && tree.size() == still_present.len()
    }
}

quickcheck::quickcheck! {
    fn removing_missing_keeps_size(xs: Vec<i8>, missing: i8) -> bool {
        let mut tree = tree_of(&xs);
        tree.remove(&missing);
        let size = tree.size();

        tree.remove(&missing).is_none() && tree.size() == size
    }
}

quickcheck::quickcheck! {
    fn traversals_cover_every_element(xs: Vec<i8>) -> bool {
        fn sorted(mut v: Vec<&i8>) -> Vec<&i8> {
            v.sort();
            v
        }

        let tree = tree_of(&xs);

        let in_order = tree.in_order();
        in_order.windows(2).all(|w| w[0] < w[1])
            && sorted(tree.pre_order()) == in_order
            && sorted(tree.post_order()) == in_order
            && tree.pre_order().first().copied() == tree.root().map(|n| n.elem())
            && tree.post_order().last().copied() == tree.root().map(|n| n.elem())
    }
}
