//! This crate exposes a link-based Binary Search Tree (BST): an ordered container of values
//! supporting lookup, insertion, deletion, range queries, successor/predecessor queries and
//! on-demand rebalancing.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The invariants this tree keeps are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value less
//!    than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    greater than or equal to its own value. Equal values are allowed and are
//!    inserted to the right.
//!
//! > Deleting or rebalancing around duplicates can leave an equal value on the
//! > left of a `Node` too. Searches are unaffected.
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the
//! longest path from the root `Node` to a leaf `Node`). This [`Tree`] never
//! rebalances itself, so inserting sorted values degenerates it into a chain
//! with `height == len - 1`. Calling [`Tree::rebalance`] reshapes it to the
//! minimum possible height of `ceil(lg(N + 1)) - 1`.
//!
//! # Examples
//!
//! ```
//! use linked_bst::Tree;
//!
//! let mut tree: Tree<_> = (1..=7).collect();
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//!
//! assert_eq!(tree.range_find(&2, &4), Some(vec![&2, &3, &4]));
//! assert_eq!(tree.successor(&4), Some(&5));
//! assert_eq!(tree.predecessor(&4), Some(&3));
//!
//! // Default iteration is pre-order, not sorted order.
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [4, 2, 1, 3, 6, 5, 7]);
//! ```
//!
//! ## Features
//!
//! * `consistency_check` - exposes [`Tree::check_consistency`] outside of this
//!   crate's own tests.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod iter;
mod node;
mod tree;

pub use error::{TreeError, TreeResult};
pub use iter::{InOrder, Iter};
pub use tree::Tree;
