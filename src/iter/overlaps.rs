use std::ops::RangeInclusive;

use crate::{comparator::Comparator, node::Node};

/// An in-order iterator yielding every node whose interval intersects a closed
/// query range, in ascending key order.
///
/// Subtrees that cannot contain an intersecting interval are pruned using the
/// subtree max end (everything ends before the query starts) and the key order
/// (everything starts after the query ends).
#[derive(Debug)]
pub(crate) struct OverlapsIter<'a, 'q, T, P, C> {
    query: &'q RangeInclusive<T>,
    cmp: &'a C,
    stack: Vec<&'a Node<T, P>>,
}

impl<'a, 'q, T, P, C> OverlapsIter<'a, 'q, T, P, C>
where
    C: Comparator<T>,
{
    pub(crate) fn new(
        root: Option<&'a Node<T, P>>,
        query: &'q RangeInclusive<T>,
        cmp: &'a C,
    ) -> Self {
        let mut this = Self {
            stack: vec![],
            query,
            cmp,
        };

        // Descend down the left side of the tree, pushing all the internal
        // nodes onto the stack until the left-most leaf is reached.
        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    fn push_subtree(&mut self, subtree_root: &'a Node<T, P>) {
        let mut ptr = Some(subtree_root);

        while let Some(v) = ptr {
            if self.cmp.gt(self.query.start(), v.max_end()) {
                // Prune this subtree rooted at "v" from the search.
                //
                // All intervals in this subtree end before the query range
                // starts.
                break;
            }

            self.stack.push(v);
            ptr = v.left();
        }
    }
}

impl<'a, T, P, C> Iterator for OverlapsIter<'a, '_, T, P, C>
where
    C: Comparator<T>,
{
    type Item = &'a Node<T, P>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let v = self.stack.pop()?;

            if self.cmp.lt(self.query.end(), v.interval().start()) {
                // Prune this node and the right subtree from the search.
                //
                // All values in the right subtree start after the query range
                // ends.
                continue;
            }

            // Push the right subtree to be visited next.
            if let Some(right) = v.right() {
                self.push_subtree(right);
            }

            // Yield this node if it intersects with the query range.
            if v.interval().intersects(self.query, self.cmp) {
                return Some(v);
            }
        }
    }
}
