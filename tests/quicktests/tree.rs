use linked_bst::{Tree, TreeError};
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

use crate::sorted;

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find(x) == Some(x)) && tree.len() == xs.len()
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn inorder_is_sorted(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    tree.inorder().copied().eq(sorted(&xs))
}

#[quickcheck]
fn preorder_visits_everything(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let mut visited: Vec<_> = tree.iter().copied().collect();
    visited.sort();

    visited == sorted(&xs) && xs.first() == tree.iter().next()
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let mut still_present = xs;
    for delete in &deletes {
        let expected = match still_present.iter().position(|x| x == delete) {
            Some(pos) => Ok(still_present.swap_remove(pos)),
            None => Err(TreeError::KeyNotFound),
        };
        if tree.remove(delete) != expected {
            return false;
        }
    }

    tree.len() == still_present.len() && tree.inorder().copied().eq(sorted(&still_present))
}

#[quickcheck]
fn remove_all_empties_tree(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for x in &xs {
        if tree.remove(x).is_err() {
            return false;
        }
    }

    tree.is_empty() && tree.remove(&0) == Err(TreeError::KeyNotFound)
}

#[quickcheck]
fn rebalance_round_trips(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let before: Vec<_> = tree.inorder().copied().collect();
    let height_before = tree.height();

    tree.rebalance();
    tree.inorder().copied().eq(before)
        && tree.len() == xs.len()
        && tree.height() <= height_before
}

#[quickcheck]
fn rebalanced_height_is_minimal(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    tree.rebalance();

    let expected = match xs.len() {
        0 => 0,
        len => (len + 1).next_power_of_two().trailing_zeros() as usize - 1,
    };
    tree.height() == expected
}
