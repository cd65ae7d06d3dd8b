//! Property tests for `linked_bst::Tree`, checked against a sorted `Vec` holding the same values.

mod queries;
mod tree;

/// Sorts `xs` the way the tree's in-order traversal should see them.
pub(crate) fn sorted(xs: &[i8]) -> Vec<i8> {
    let mut xs = xs.to_vec();
    xs.sort();
    xs
}
