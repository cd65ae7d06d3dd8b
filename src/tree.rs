//! A link-based BST. Each `Node` owns its children through a `Box` so the whole structure is a
//! single-owner tree hanging off the `Tree`'s root. Nothing rebalances automatically: the shape is
//! whatever the sequence of `add`s and `remove`s made it until [`Tree::rebalance`] is called.
//!
//! # Examples
//!
//! ```
//! use linked_bst::{Tree, TreeError};
//!
//! let mut tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
//!
//! assert_eq!(tree.find(&4), Some(&4));
//! assert_eq!(tree.find(&7), None);
//!
//! // Removing a key returns the stored value...
//! assert_eq!(tree.remove(&5), Ok(5));
//! // ...and removing it again is an error.
//! assert_eq!(tree.remove(&5), Err(TreeError::KeyNotFound));
//!
//! assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [1, 3, 4, 8]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::{debug, trace, warn};

use crate::error::{TreeError, TreeResult};
use crate::iter::{InOrder, Iter};
use crate::node::{Link, Node};

/// A binary search tree of values ordered by their `Ord` implementation. Equal values are allowed
/// and are routed to the right of the first equal value met on the way down.
pub struct Tree<T> {
    root: Link<T>,
    size: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        Self::drop_subtree(self.root.take());
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut root = None;
        // Each source node is paired with the empty link its copy goes into.
        let mut stack = Vec::new();
        if let Some(source) = self.root.as_deref() {
            stack.push((source, &mut root));
        }
        while let Some((source, link)) = stack.pop() {
            let node = link.insert(Node::new_boxed(source.data.clone()));
            if let Some(left) = source.left.as_deref() {
                stack.push((left, &mut node.left));
            }
            if let Some(right) = source.right.as_deref() {
                stack.push((right, &mut node.right));
            }
        }

        Self {
            root,
            size: self.size,
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inorder()).finish()
    }
}

/// Draws the tree rotated a quarter turn counter-clockwise: the root sits at the left margin,
/// right subtrees above their parent and left subtrees below. Every level of depth adds a `"| "`.
///
/// ```
/// use linked_bst::Tree;
///
/// let tree: Tree<_> = [5, 3, 8].into_iter().collect();
/// assert_eq!(tree.to_string(), "| 8\n5\n| 3\n");
/// ```
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = Vec::new();
        let mut current = self.root.as_deref().map(|root| (root, 0));
        loop {
            while let Some((node, level)) = current {
                stack.push((node, level));
                current = node.right.as_deref().map(|right| (right, level + 1));
            }
            let Some((node, level)) = stack.pop() else {
                return Ok(());
            };
            writeln!(f, "{}{}", "| ".repeat(level), node.data)?;
            current = node.left.as_deref().map(|left| (left, level + 1));
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// The number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        debug!("clearing tree of {} values", self.size);
        Self::drop_subtree(self.root.take());
        self.size = 0;
    }

    /// The number of edges on the longest path from the root down to a leaf. Both an empty tree
    /// and a tree with a single value have height 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    /// assert_eq!(tree.height(), 2);
    ///
    /// // Sorted input degenerates into a chain.
    /// let chain: Tree<_> = (1..=7).collect();
    /// assert_eq!(chain.height(), 6);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<T>, usize)> =
            self.root.as_deref().map(|root| (root, 0)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|left| (left, depth + 1)));
            stack.extend(node.right.as_deref().map(|right| (right, depth + 1)));
        }
        height
    }

    /// A heuristic balance test: the tree counts as balanced when its height is below
    /// `2 * floor(log2(len + 1)) - 1`, i.e. not much taller than a perfectly balanced tree of the
    /// same size. An empty tree is never balanced by this measure.
    pub fn is_balanced(&self) -> bool {
        let perfect_levels = (self.size + 1).ilog2() as usize;
        // `height < 2 * levels - 1` without going negative for an empty tree.
        self.height() + 1 < 2 * perfect_levels
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.data)
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.data)
    }

    /// Iterates over the values in pre-order: the root, then its left subtree, then its right
    /// subtree. Use [`Tree::inorder`] for sorted order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.size)
    }

    /// Iterates over the values in sorted order.
    pub fn inorder(&self) -> InOrder<'_, T> {
        InOrder::new(self.root.as_deref(), self.size)
    }

    fn drop_subtree(root: Link<T>) {
        let mut stack: Vec<Box<Node<T>>> = root.into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }

    /// Dismantles the subtree, moving its values out in sorted order.
    fn into_sorted_vec(root: Link<T>, len: usize) -> Vec<T> {
        let mut sorted = Vec::with_capacity(len);
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        let mut current = root;
        loop {
            while let Some(mut node) = current {
                current = node.left.take();
                stack.push(node);
            }
            let Some(node) = stack.pop() else {
                return sorted;
            };
            let Node { data, right, .. } = *node;
            sorted.push(data);
            current = right;
        }
    }

    /// Builds a minimum-height subtree from the next `len` values of `items`, which must be
    /// sorted. The middle value (`len / 2`, so the upper middle for even lengths) becomes the
    /// subtree's root.
    fn build(items: &mut impl Iterator<Item = T>, len: usize) -> Link<T> {
        if len == 0 {
            return None;
        }
        let mid = len / 2;
        let left = Self::build(items, mid);
        let data = items.next()?;
        let right = Self::build(items, len - mid - 1);
        Some(Box::new(Node { data, left, right }))
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Finds the stored value equal to `key`. The returned reference points at the value held by
    /// the tree, not at `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, key: &T) -> Option<&T> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match key.cmp(&node.data) {
                Ordering::Equal => return Some(&node.data),
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
            }
        }
        None
    }

    /// Whether a value equal to `key` is stored in the tree.
    pub fn contains(&self, key: &T) -> bool {
        self.find(key).is_some()
    }

    /// Adds `item` as a new leaf. Duplicates are kept: an item equal to a stored value goes to
    /// that value's right. The tree is not rebalanced.
    pub fn add(&mut self, item: T) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if item < node.data {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Node::new_boxed(item));
        self.size += 1;
    }

    /// Removes the value equal to `key` and returns it. If the tree doesn't hold such a value,
    /// [`TreeError::KeyNotFound`] is returned and the tree is left untouched.
    ///
    /// A node with two children takes over the largest value of its left subtree, and the node
    /// that held that value is spliced out instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{Tree, TreeError};
    ///
    /// let mut tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&3), Ok(3));
    /// assert_eq!(tree.remove(&3), Err(TreeError::KeyNotFound));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove(&mut self, key: &T) -> TreeResult<T> {
        let link = Self::locate(&mut self.root, key);
        let Some(mut target) = link.take() else {
            debug!("remove: key not found among {} values", self.size);
            return Err(TreeError::KeyNotFound);
        };

        let removed = match (target.left.take(), target.right.take()) {
            (Some(left), Some(right)) => {
                let (max, rest) = Node::lift_max(left);
                target.left = rest;
                target.right = Some(right);
                let removed = mem::replace(&mut target.data, max);
                *link = Some(target);
                removed
            }
            (left, right) => {
                *link = left.or(right);
                let Node { data, .. } = *target;
                data
            }
        };

        self.size -= 1;
        Ok(removed)
    }

    /// Overwrites the stored value equal to `key` with `item` in place and returns the old value,
    /// or returns `None` (and drops `item`) when there is no such value.
    ///
    /// The node is not moved. If `item` doesn't sort the same as `key`, the tree's ordering
    /// breaks and later searches may miss values. This is meant for swapping in a value that
    /// compares equal to the old one, e.g. one carrying a different payload.
    pub fn replace(&mut self, key: &T, item: T) -> Option<T> {
        let node = Self::locate(&mut self.root, key).as_mut()?;
        trace!("replacing a stored value in place");
        Some(mem::replace(&mut node.data, item))
    }

    /// All stored values `v` with `low <= v <= high`, in sorted order.
    ///
    /// Returns `None` when no value is at least `low` or no value is at most `high` (including
    /// when the tree is empty). Otherwise returns the matches, which may be empty if the range
    /// falls in a gap between stored values or `low > high`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.range_find(&2, &6), Some(vec![&3, &4, &5]));
    /// assert_eq!(tree.range_find(&9, &12), None);
    /// assert_eq!(tree.range_find(&6, &7), Some(vec![]));
    /// ```
    pub fn range_find(&self, low: &T, high: &T) -> Option<Vec<&T>> {
        if self.max()? < low || self.min()? > high {
            return None;
        }

        // In-order walk that skips subtrees lying entirely outside the range.
        let mut found = Vec::new();
        let mut stack = Vec::new();
        let mut current = self.root.as_deref();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = if node.data < *low {
                    None
                } else {
                    node.left.as_deref()
                };
            }
            let Some(node) = stack.pop() else {
                return Some(found);
            };
            if *low <= node.data && node.data <= *high {
                found.push(&node.data);
            }
            current = if node.data > *high {
                None
            } else {
                node.right.as_deref()
            };
        }
    }

    /// The smallest stored value strictly greater than `item`.
    pub fn successor(&self, item: &T) -> Option<&T> {
        let mut best = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if node.data > *item {
                best = Some(&node.data);
                current = node.left.as_deref();
            } else {
                current = node.right.as_deref();
            }
        }
        best
    }

    /// The largest stored value strictly less than `item`.
    pub fn predecessor(&self, item: &T) -> Option<&T> {
        let mut best = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if node.data < *item {
                best = Some(&node.data);
                current = node.right.as_deref();
            } else {
                current = node.left.as_deref();
            }
        }
        best
    }

    /// Reshapes the tree into one of minimum height, `ceil(log2(len + 1)) - 1`, holding the same
    /// values.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree: Tree<_> = (1..=7).collect();
    /// assert_eq!(tree.height(), 6);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 2);
    /// assert_eq!(tree.len(), 7);
    /// ```
    pub fn rebalance(&mut self) {
        let sorted = Self::into_sorted_vec(self.root.take(), self.size);
        self.root = Self::build(&mut sorted.into_iter(), self.size);
        debug!("rebalanced {} values to height {}", self.size, self.height());
    }

    /// Replaces the tree's contents with a minimum-height tree built from `items`, which should
    /// already be sorted. Passing no items at all rebalances the current contents instead, just
    /// like [`Tree::rebalance`].
    ///
    /// Items that aren't sorted are used as given, which breaks the tree's ordering.
    pub fn rebalance_from<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = items.into_iter().collect();
        if items.is_empty() {
            return self.rebalance();
        }
        if !items.windows(2).all(|pair| pair[0] <= pair[1]) {
            warn!("rebalancing from {} values that are not sorted", items.len());
        }
        if items.len() != self.size {
            debug!(
                "rebalance replaces {} values with {} supplied values",
                self.size,
                items.len()
            );
        }

        Self::drop_subtree(self.root.take());
        self.size = items.len();
        self.root = Self::build(&mut items.into_iter(), self.size);
    }

    /// Asserts that every value sits between the bounds its ancestors impose (left subtree values
    /// `<=` the node `<=` right subtree values) and that the size counter matches the node count.
    ///
    /// # Panics
    ///
    /// When either property is violated.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        assert_eq!(self.root.is_none(), self.size == 0);

        let mut num_nodes = 0;
        let mut stack: Vec<(&Node<T>, Option<&T>, Option<&T>)> = self
            .root
            .as_deref()
            .map(|root| (root, None, None))
            .into_iter()
            .collect();
        while let Some((node, lower, upper)) = stack.pop() {
            if let Some(lower) = lower {
                assert!(*lower <= node.data);
            }
            if let Some(upper) = upper {
                assert!(node.data <= *upper);
            }
            stack.extend(
                node.left
                    .as_deref()
                    .map(|left| (left, lower, Some(&node.data))),
            );
            stack.extend(
                node.right
                    .as_deref()
                    .map(|right| (right, Some(&node.data), upper)),
            );
            num_nodes += 1;
        }

        assert_eq!(num_nodes, self.size);
    }

    /// Walks down from `link` to the link holding a value equal to `key`, or to the empty link
    /// where it would be.
    fn locate<'a>(mut link: &'a mut Link<T>, key: &T) -> &'a mut Link<T> {
        while link.as_deref().is_some_and(|node| node.data != *key) {
            if let Some(node) = link {
                link = if *key < node.data {
                    &mut node.left
                } else {
                    &mut node.right
                };
            }
        }
        link
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    /// Adds the items one by one in iteration order, so the tree's shape follows that order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
