/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` holds one stored value and exclusively owns up to two children.
pub(crate) struct Node<T> {
    pub(crate) data: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(data: T) -> Box<Self> {
        Box::new(Node {
            data,
            left: None,
            right: None,
        })
    }

    /// Detaches the largest node of the subtree rooted at `root`, returning its value and what
    /// remains of the subtree. The detached node's left child takes its place.
    pub(crate) fn lift_max(mut root: Box<Self>) -> (T, Link<T>) {
        if root.right.is_none() {
            let Node { data, left, .. } = *root;
            return (data, left);
        }

        let mut link = &mut root.right;
        while link.as_deref().is_some_and(|node| node.right.is_some()) {
            if let Some(node) = link {
                link = &mut node.right;
            }
        }
        match link.take() {
            Some(max) => {
                let Node { data, left, .. } = *max;
                *link = left;
                (data, Some(root))
            }
            None => unreachable!("Walked down from a non-empty right link"),
        }
    }
}
