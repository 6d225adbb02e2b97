//! Self-balancing binary search tree that simulates a 2-3 tree by coloring the link to each node
//! red or black. Red links always lean left, which keeps the rebalancing cases small.

mod dot;
mod map;
mod node;
mod tree;

pub use self::map::LlrbMap;

use std::error;
use std::fmt;
use std::result;

/// A violation of one of the structural invariants of a left-leaning red black tree, reported by
/// [`LlrbMap::validate`](struct.LlrbMap.html#method.validate).
#[derive(Debug, PartialEq)]
pub enum Error {
    /// The root is red.
    RedRoot,
    /// A node has a red right child.
    RightLeaningRed,
    /// A red node has a red left child.
    ConsecutiveReds,
    /// The left and right subtrees of a node have different black heights.
    UnbalancedBlacks { left: usize, right: usize },
    /// A key is not between the keys of its ancestors.
    OutOfOrder,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::RedRoot => write!(f, "root node is red"),
            Error::RightLeaningRed => write!(f, "node has a red right child"),
            Error::ConsecutiveReds => write!(f, "red node has a red left child"),
            Error::UnbalancedBlacks { left, right } => {
                write!(f, "unbalanced black heights: left {} and right {}", left, right)
            },
            Error::OutOfOrder => write!(f, "keys are not in search tree order"),
        }
    }
}

/// Convenience `Result` type for validating a left-leaning red black tree.
pub type Result<T> = result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_display() {
        assert_eq!(Error::RedRoot.to_string(), "root node is red");
        assert_eq!(
            Error::UnbalancedBlacks { left: 2, right: 1 }.to_string(),
            "unbalanced black heights: left 2 and right 1",
        );
    }
}
