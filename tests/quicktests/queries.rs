use linked_bst::Tree;
use quickcheck_macros::quickcheck;

use crate::sorted;

#[quickcheck]
fn range_find_matches_filter(xs: Vec<i8>, low: i8, high: i8) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let model = sorted(&xs);

    let expected = if model.iter().all(|x| *x < low) || model.iter().all(|x| *x > high) {
        None
    } else {
        Some(
            model
                .iter()
                .filter(|x| low <= **x && **x <= high)
                .collect::<Vec<_>>(),
        )
    };
    tree.range_find(&low, &high) == expected
}

#[quickcheck]
fn successor_is_next_greater(xs: Vec<i8>, item: i8) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let model = sorted(&xs);

    tree.successor(&item) == model.iter().find(|x| **x > item)
}

#[quickcheck]
fn predecessor_is_next_smaller(xs: Vec<i8>, item: i8) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let model = sorted(&xs);

    tree.predecessor(&item) == model.iter().rev().find(|x| **x < item)
}

#[quickcheck]
fn queries_survive_rebalance(xs: Vec<i8>, item: i8) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let successor = tree.successor(&item).copied();
    let predecessor = tree.predecessor(&item).copied();
    let found = tree.find(&item).copied();

    tree.rebalance();
    tree.successor(&item).copied() == successor
        && tree.predecessor(&item).copied() == predecessor
        && tree.find(&item).copied() == found
}

#[quickcheck]
fn min_and_max(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    tree.min() == xs.iter().min() && tree.max() == xs.iter().max()
}
