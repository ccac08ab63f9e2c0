use std::{cmp::Ordering, ops::RangeInclusive};

use crate::{
    comparator::Comparator,
    config::Config,
    error::Error,
    interval::{self, Interval},
    iter::{OverlapsIter, RefIter},
    merge::MergePolicy,
    node::{self, size, Color, Node},
    validate::{validate, Violation},
};

/// The unsynchronised tree engine shared by the single-value and multi-value
/// facades, storing a payload `P` for each interval key.
#[derive(Debug, Clone)]
pub(crate) struct Tree<T, P, C> {
    root: Option<Box<Node<T, P>>>,
    cmp: C,
    config: Config,
}

impl<T, P, C> Tree<T, P, C>
where
    C: Comparator<T>,
{
    pub(crate) fn new(cmp: C, config: Config) -> Self {
        Self {
            root: None,
            cmp,
            config,
        }
    }

    /// Construct a tree from an existing node set, without re-inserting (or
    /// checking) it.
    #[cfg_attr(not(feature = "serde"), allow(dead_code))]
    pub(crate) fn from_parts(root: Option<Box<Node<T, P>>>, cmp: C, config: Config) -> Self {
        Self { root, cmp, config }
    }

    pub(crate) fn root(&self) -> Option<&Node<T, P>> {
        self.root.as_deref()
    }

    pub(crate) fn config(&self) -> Config {
        self.config
    }

    /// Insert `payload` for the interval key `range`, merging it into the
    /// existing payload with `merge` if the key is already present.
    pub(crate) fn insert<M>(
        &mut self,
        range: RangeInclusive<T>,
        payload: P,
        merge: &M,
    ) -> Result<(), Error<T>>
    where
        T: Clone,
        M: MergePolicy<P>,
    {
        interval::validate(&range, &self.cmp, &self.config)?;

        node::insert(
            &mut self.root,
            Interval::from(range),
            payload,
            merge,
            &self.cmp,
        );
        self.blacken_root();

        Ok(())
    }

    /// Remove the interval key `range`, returning its payload if it was
    /// present.
    pub(crate) fn delete(&mut self, range: &RangeInclusive<T>) -> Result<Option<P>, Error<T>>
    where
        T: Clone,
    {
        if self.root.is_none() {
            return Ok(None);
        }

        interval::validate(range, &self.cmp, &self.config)?;

        // Skip the restructuring descent entirely for absent keys.
        if self.find(range).is_none() {
            return Ok(None);
        }

        let removed = node::delete(&mut self.root, range, &self.cmp);
        self.blacken_root();

        debug_assert!(removed.is_some());
        Ok(removed.map(|v| v.into_entry().1))
    }

    pub(crate) fn delete_min(&mut self) -> Option<(RangeInclusive<T>, P)>
    where
        T: Clone,
    {
        let removed = node::delete_min(&mut self.root, &self.cmp)?;
        self.blacken_root();
        Some(removed.into_entry())
    }

    pub(crate) fn delete_max(&mut self) -> Option<(RangeInclusive<T>, P)>
    where
        T: Clone,
    {
        let removed = node::delete_max(&mut self.root, &self.cmp)?;
        self.blacken_root();
        Some(removed.into_entry())
    }

    pub(crate) fn clear(&mut self) {
        self.root = None;
    }

    /// The root may have been turned red by a colour flip, or by a borrowing
    /// descent.
    fn blacken_root(&mut self) {
        if let Some(root) = self.root.as_mut() {
            root.set_color(Color::Black);
        }
    }

    pub(crate) fn find(&self, range: &RangeInclusive<T>) -> Option<&Node<T, P>> {
        node::find(self.root(), range, &self.cmp)
    }

    /// Return a node intersecting `range`, if any.
    ///
    /// When more than one interval intersects `range`, the first one found
    /// on the search path is returned (not necessarily the lowest key).
    pub(crate) fn any_intersection(&self, range: &RangeInclusive<T>) -> Option<&Node<T, P>> {
        let mut ptr = self.root();

        while let Some(v) = ptr {
            if v.interval().intersects(range, &self.cmp) {
                return Some(v);
            }

            // If the left subtree contains an interval that ends at or after
            // the query start, then either it intersects, or every interval in
            // the right subtree starts after the query ends too.
            ptr = match v.left() {
                Some(l) if self.cmp.lte(range.start(), l.max_end()) => Some(l),
                _ => v.right(),
            };
        }

        None
    }

    /// Return all nodes intersecting `range`, in ascending key order.
    pub(crate) fn all_intersections<'a, 'q>(
        &'a self,
        range: &'q RangeInclusive<T>,
    ) -> OverlapsIter<'a, 'q, T, P, C> {
        OverlapsIter::new(self.root(), range, &self.cmp)
    }

    /// Return the nodes whose interval end equals the largest end stored in
    /// the tree, in ascending key order.
    pub(crate) fn max_end(&self) -> Vec<&Node<T, P>>
    where
        T: Clone,
    {
        let max = match self.root() {
            Some(v) => v.max_end().clone(),
            None => return vec![],
        };

        // Every interval ending at the maximum end intersects the point query
        // [max, max], and nothing else does.
        let query = max.clone()..=max;
        self.all_intersections(&query).collect()
    }

    pub(crate) fn iter(&self) -> RefIter<'_, T, P> {
        RefIter::new(self.root())
    }

    pub(crate) fn min(&self) -> Option<&Node<T, P>> {
        let mut ptr = self.root()?;
        while let Some(v) = ptr.left() {
            ptr = v;
        }
        Some(ptr)
    }

    pub(crate) fn max(&self) -> Option<&Node<T, P>> {
        let mut ptr = self.root()?;
        while let Some(v) = ptr.right() {
            ptr = v;
        }
        Some(ptr)
    }

    /// Return the node with the smallest key greater than or equal to
    /// `range`.
    pub(crate) fn ceil(&self, range: &RangeInclusive<T>) -> Option<&Node<T, P>> {
        let mut ptr = self.root();
        let mut best = None;

        while let Some(v) = ptr {
            ptr = match v.interval().cmp_range(range, &self.cmp) {
                Ordering::Equal => return Some(v),
                Ordering::Greater => {
                    // A candidate, but a closer one may be to the left.
                    best = Some(v);
                    v.left()
                }
                Ordering::Less => v.right(),
            };
        }

        best
    }

    /// Return the node with the largest key less than or equal to `range`.
    pub(crate) fn floor(&self, range: &RangeInclusive<T>) -> Option<&Node<T, P>> {
        let mut ptr = self.root();
        let mut best = None;

        while let Some(v) = ptr {
            ptr = match v.interval().cmp_range(range, &self.cmp) {
                Ordering::Equal => return Some(v),
                Ordering::Less => {
                    best = Some(v);
                    v.right()
                }
                Ordering::Greater => v.left(),
            };
        }

        best
    }

    /// Return the number of keys strictly less than `range`.
    pub(crate) fn rank(&self, range: &RangeInclusive<T>) -> usize {
        let mut ptr = self.root();
        let mut rank = 0;

        while let Some(v) = ptr {
            ptr = match v.interval().cmp_range(range, &self.cmp) {
                Ordering::Equal => return rank + size(v.left()),
                Ordering::Less => {
                    // "v" and its entire left subtree are less than the key.
                    rank += 1 + size(v.left());
                    v.right()
                }
                Ordering::Greater => v.left(),
            };
        }

        rank
    }

    /// Return the node holding the `k`-th smallest key (0-indexed).
    pub(crate) fn select(&self, mut k: usize) -> Option<&Node<T, P>> {
        let mut ptr = self.root();

        while let Some(v) = ptr {
            let left = size(v.left());
            ptr = match k.cmp(&left) {
                Ordering::Equal => return Some(v),
                Ordering::Less => v.left(),
                Ordering::Greater => {
                    k -= left + 1;
                    v.right()
                }
            };
        }

        None
    }

    /// Return the number of nodes on the longest root-to-leaf path.
    pub(crate) fn height(&self) -> usize {
        fn height<T, P>(n: Option<&Node<T, P>>) -> usize {
            n.map(|v| 1 + height(v.left()).max(height(v.right())))
                .unwrap_or_default()
        }

        height(self.root())
    }

    pub(crate) fn len(&self) -> usize {
        size(self.root())
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn validate(&self) -> Result<(), Violation> {
        validate(self.root(), &self.cmp, &self.config)
    }
}
