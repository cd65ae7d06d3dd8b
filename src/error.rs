//! Errors raised by [`Tree`][crate::Tree] operations.
//!
//! Lookup misses are not errors: `find`, `replace`, `successor` and friends return `None`.
//! Only operations with a precondition on the tree's contents fail.

use thiserror::Error;

/// The ways a tree operation can fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// [`Tree::remove`][crate::Tree::remove] was asked to remove a key the tree doesn't hold.
    #[error("key not found in tree")]
    KeyNotFound,
}

/// Shorthand for results of fallible tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
