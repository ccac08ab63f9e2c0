use std::{
    ops::RangeInclusive,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use crate::{
    comparator::{Comparator, NaturalOrder},
    config::Config,
    error::Error,
    merge::Replace,
    tree::Tree,
    validate::Violation,
};

/// An interval search tree mapping each closed interval key `[start, end]` to
/// a single value `V`.
///
/// Bounds of type `T` are ordered by the [`Comparator`] `C` given at
/// construction, and keys are ordered by their start bound, tie-broken by
/// their end bound. All operations complete in `O(log n)` time, except the
/// exhaustive [`SearchTree::all_intersections()`] query which completes in
/// `O(log n + k)` for `k` results.
///
/// The tree is internally synchronised by a single readers-writer lock:
/// queries share it, and mutations hold it exclusively for the duration of
/// the call. Query results are returned as owned clones.
///
/// ```
/// use interval_search_tree::SearchTree;
///
/// let t = SearchTree::new(|a: &u32, b: &u32| a.cmp(b));
///
/// t.insert(17..=19, "v1").unwrap();
/// t.insert(5..=8, "v2").unwrap();
/// t.insert(21..=24, "v3").unwrap();
///
/// assert_eq!(t.any_intersection(&(23..=25)), Some("v3"));
/// assert_eq!(t.all_intersections(&(8..=17)), ["v2", "v1"]);
/// assert_eq!(t.any_intersection(&(12..=14)), None);
/// ```
#[derive(Debug)]
pub struct SearchTree<T, V, C = NaturalOrder> {
    inner: RwLock<Tree<T, V, C>>,
}

impl<T, V, C> Default for SearchTree<T, V, C>
where
    C: Comparator<T> + Default,
{
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<T, V, C> SearchTree<T, V, C>
where
    C: Comparator<T>,
{
    /// Initialise an empty tree ordering bounds with `cmp`, using the default
    /// [`Config`].
    pub fn new(cmp: C) -> Self {
        Self::with_config(cmp, Config::default())
    }

    /// Initialise an empty tree ordering bounds with `cmp`.
    pub fn with_config(cmp: C, config: Config) -> Self {
        Self::from_tree(Tree::new(cmp, config))
    }

    pub(crate) fn from_tree(tree: Tree<T, V, C>) -> Self {
        Self {
            inner: RwLock::new(tree),
        }
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Tree<T, V, C>> {
        self.inner.read().expect("lock is poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tree<T, V, C>> {
        self.inner.write().expect("lock is poisoned")
    }

    /// The [`Config`] this tree was constructed (or restored) with.
    pub fn config(&self) -> Config {
        self.read().config()
    }

    /// Returns true if `range` is a key in the tree.
    pub fn contains(&self, range: &RangeInclusive<T>) -> bool {
        self.read().find(range).is_some()
    }

    /// Return the number of keys strictly less than `range`.
    ///
    /// `range` does not need to exist in the tree.
    pub fn rank(&self, range: &RangeInclusive<T>) -> usize {
        self.read().rank(range)
    }

    /// Return the number of nodes on the longest path from the root to a
    /// leaf, or 0 for an empty tree.
    pub fn height(&self) -> usize {
        self.read().height()
    }

    /// Return the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Check the structural invariants of the tree.
    ///
    /// This visits every node, and is intended for tests and for diagnosing
    /// an inconsistent [`Comparator`].
    pub fn validate(&self) -> Result<(), Violation> {
        self.read().validate()
    }
}

impl<T, V, C> SearchTree<T, V, C>
where
    T: Clone,
    C: Comparator<T>,
{
    /// Insert `value` for the interval key `range`, replacing the value of an
    /// existing key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] if the end bound of `range` is
    /// ordered before the start, or equal to it without
    /// [`Config::allow_point_intervals()`].
    pub fn insert(&self, range: RangeInclusive<T>, value: V) -> Result<(), Error<T>> {
        self.write().insert(range, value, &Replace).inspect_err(|_| {
            log::debug!("rejected insert of invalid interval");
        })
    }

    /// Insert or replace the value for the interval key `range`.
    ///
    /// For a single-value tree this is identical to
    /// [`SearchTree::insert()`].
    pub fn upsert(&self, range: RangeInclusive<T>, value: V) -> Result<(), Error<T>> {
        self.insert(range, value)
    }

    /// Remove the interval key `range`, returning its value if it was
    /// present.
    ///
    /// Removing an absent key is a no-op. An invalid `range` is rejected with
    /// [`Error::InvalidInterval`], unless the tree is empty.
    pub fn delete(&self, range: &RangeInclusive<T>) -> Result<Option<V>, Error<T>> {
        let mut tree = self.write();

        let removed = tree.delete(range)?;
        if removed.is_some() {
            log::trace!("removed interval, {} remaining", tree.len());
        }

        Ok(removed)
    }

    /// Remove and return the entry with the smallest key, if any.
    pub fn delete_min(&self) -> Option<(RangeInclusive<T>, V)> {
        let mut tree = self.write();
        let removed = tree.delete_min()?;
        log::trace!("removed minimum interval, {} remaining", tree.len());
        Some(removed)
    }

    /// Remove and return the entry with the largest key, if any.
    pub fn delete_max(&self) -> Option<(RangeInclusive<T>, V)> {
        let mut tree = self.write();
        let removed = tree.delete_max()?;
        log::trace!("removed maximum interval, {} remaining", tree.len());
        Some(removed)
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.write().clear();
    }
}

impl<T, V, C> SearchTree<T, V, C>
where
    T: Clone,
    V: Clone,
    C: Comparator<T>,
{
    /// Return the value of the exact interval key `range`, if any.
    pub fn find(&self, range: &RangeInclusive<T>) -> Option<V> {
        self.read().find(range).map(|v| v.payload().clone())
    }

    /// Return the value of an interval that shares at least one point with
    /// the closed `range`, if any.
    ///
    /// When several stored intervals intersect `range`, which one is returned
    /// is unspecified (it is not necessarily the one with the lowest key).
    pub fn any_intersection(&self, range: &RangeInclusive<T>) -> Option<V> {
        self.read()
            .any_intersection(range)
            .map(|v| v.payload().clone())
    }

    /// Return the values of all intervals that share at least one point with
    /// the closed `range`, in ascending key order.
    pub fn all_intersections(&self, range: &RangeInclusive<T>) -> Vec<V> {
        self.read()
            .all_intersections(range)
            .map(|v| v.payload().clone())
            .collect()
    }

    /// Return the values of the intervals ending at the largest end bound in
    /// the tree, in ascending key order.
    pub fn max_end(&self) -> Vec<V> {
        self.read()
            .max_end()
            .into_iter()
            .map(|v| v.payload().clone())
            .collect()
    }

    /// Return the value of the smallest key.
    pub fn min(&self) -> Option<V> {
        self.read().min().map(|v| v.payload().clone())
    }

    /// Return the value of the largest key.
    pub fn max(&self) -> Option<V> {
        self.read().max().map(|v| v.payload().clone())
    }

    /// Return the value of the smallest key greater than or equal to `range`.
    pub fn ceil(&self, range: &RangeInclusive<T>) -> Option<V> {
        self.read().ceil(range).map(|v| v.payload().clone())
    }

    /// Return the value of the largest key less than or equal to `range`.
    pub fn floor(&self, range: &RangeInclusive<T>) -> Option<V> {
        self.read().floor(range).map(|v| v.payload().clone())
    }

    /// Return the value of the `k`-th smallest key (0-indexed), or [`None`]
    /// if `k >= len()`.
    pub fn select(&self, k: usize) -> Option<V> {
        self.read().select(k).map(|v| v.payload().clone())
    }

    /// Return a copy of every entry, in ascending key order.
    pub fn entries(&self) -> Vec<(RangeInclusive<T>, V)> {
        self.read()
            .iter()
            .map(|v| (v.interval().clone().into_range(), v.payload().clone()))
            .collect()
    }
}
