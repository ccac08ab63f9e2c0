use std::{cmp::Ordering, fmt::Display};

use crate::{
    comparator::Comparator,
    config::Config,
    interval::is_invalid,
    iter::RefIter,
    node::{is_red, size, Node},
};

/// A broken structural invariant, reported by `validate()`.
///
/// Every public mutation maintains all of these invariants, so a violation
/// indicates a corrupt snapshot or an inconsistent [`Comparator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The root is linked by a red link.
    RedRoot,

    /// A node has a red right child.
    RedRightLink,

    /// A red node has a red left child.
    ConsecutiveRedLinks,

    /// Two root-to-nil paths pass through a different number of black links.
    BlackHeightMismatch {
        /// Black links in the left subtree.
        left: usize,
        /// Black links in the right subtree.
        right: usize,
    },

    /// An in-order traversal does not yield strictly ascending keys.
    Unordered,

    /// A node interval is not accepted by the tree [`Config`].
    InvalidInterval,

    /// A node records a subtree size that differs from its actual size.
    SizeMismatch {
        /// The recorded subtree size.
        recorded: usize,
        /// The number of nodes actually in the subtree.
        actual: usize,
    },

    /// A node records a subtree max end that is not the largest end in its
    /// subtree.
    MaxEndMismatch,
}

impl Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RedRoot => write!(f, "root node is red"),
            Self::RedRightLink => write!(f, "red right link"),
            Self::ConsecutiveRedLinks => write!(f, "consecutive red links"),
            Self::BlackHeightMismatch { left, right } => {
                write!(f, "unbalanced black height: left={left}, right={right}")
            }
            Self::Unordered => write!(f, "keys are not in ascending order"),
            Self::InvalidInterval => write!(f, "invalid interval"),
            Self::SizeMismatch { recorded, actual } => {
                write!(f, "subtree size mismatch: recorded={recorded}, actual={actual}")
            }
            Self::MaxEndMismatch => write!(f, "subtree max end mismatch"),
        }
    }
}

impl std::error::Error for Violation {}

/// Assert the BST, left-leaning red-black and augmentation properties of the
/// tree rooted at `root`, ensuring the tree is well-formed.
pub(crate) fn validate<T, P, C>(
    root: Option<&Node<T, P>>,
    cmp: &C,
    config: &Config,
) -> Result<(), Violation>
where
    C: Comparator<T>,
{
    if is_red(root) {
        return Err(Violation::RedRoot);
    }

    check_subtree(root, cmp, config)?;

    // Invariant: an in-order traversal yields strictly ascending keys.
    let mut iter = RefIter::new(root).peekable();
    while let Some(n) = iter.next() {
        if let Some(next) = iter.peek() {
            if n.interval().cmp_interval(next.interval(), cmp) != Ordering::Less {
                return Err(Violation::Unordered);
            }
        }
    }

    Ok(())
}

/// Check the per-node invariants of the subtree rooted at `n`, returning the
/// number of black links on every path from `n` to a nil leaf.
fn check_subtree<T, P, C>(
    n: Option<&Node<T, P>>,
    cmp: &C,
    config: &Config,
) -> Result<usize, Violation>
where
    C: Comparator<T>,
{
    let n = match n {
        Some(v) => v,
        None => return Ok(0),
    };

    if is_invalid(n.interval().start(), n.interval().end(), cmp, config) {
        return Err(Violation::InvalidInterval);
    }

    // Invariant 1: red links lean left.
    if is_red(n.right()) {
        return Err(Violation::RedRightLink);
    }

    // Invariant 2: no node is joined to two red links.
    if n.is_red() && is_red(n.left()) {
        return Err(Violation::ConsecutiveRedLinks);
    }

    // Invariant 3: perfect black balance.
    let left = check_subtree(n.left(), cmp, config)?;
    let right = check_subtree(n.right(), cmp, config)?;
    if left != right {
        return Err(Violation::BlackHeightMismatch { left, right });
    }

    // Invariant 4: the subtree size is the sum of the child subtree sizes,
    // plus this node.
    let actual = 1 + size(n.left()) + size(n.right());
    if n.size() != actual {
        return Err(Violation::SizeMismatch {
            recorded: n.size(),
            actual,
        });
    }

    // Invariant 5: the subtree max of "n" must be equal to either the largest
    // of the two child subtree maxes, or its own upper bound.
    let want_max = [n.left(), n.right()]
        .into_iter()
        .flatten()
        .fold(n.interval().end(), |max, child| cmp.max(max, child.max_end()));
    if !cmp.eq(want_max, n.max_end()) {
        return Err(Violation::MaxEndMismatch);
    }

    Ok(left + usize::from(!n.is_red()))
}
