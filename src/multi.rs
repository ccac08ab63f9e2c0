use std::{
    ops::RangeInclusive,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use crate::{
    comparator::{Comparator, NaturalOrder},
    config::Config,
    error::Error,
    merge::{Append, MergePolicy, Replace},
    tree::Tree,
    validate::Violation,
};

/// An interval search tree mapping each closed interval key `[start, end]` to
/// an ordered, non-empty bucket of values.
///
/// [`MultiValueSearchTree::insert()`] appends to the bucket of an existing
/// key (preserving insertion order and duplicates), while
/// [`MultiValueSearchTree::upsert()`] replaces it. Deleting a key removes the
/// whole bucket.
///
/// Ordering, complexity and locking behave as for
/// [`SearchTree`](crate::SearchTree).
///
/// ```
/// use interval_search_tree::MultiValueSearchTree;
///
/// let t = MultiValueSearchTree::<u32, &str>::default();
///
/// t.insert(10..=20, ["e1", "e2", "e3"]).unwrap();
/// t.insert(10..=20, ["e4"]).unwrap();
/// assert_eq!(t.find(&(10..=20)).unwrap(), ["e1", "e2", "e3", "e4"]);
///
/// t.upsert(10..=20, ["e5"]).unwrap();
/// assert_eq!(t.find(&(10..=20)).unwrap(), ["e5"]);
/// ```
#[derive(Debug)]
pub struct MultiValueSearchTree<T, V, C = NaturalOrder> {
    inner: RwLock<Tree<T, Vec<V>, C>>,
}

impl<T, V, C> Default for MultiValueSearchTree<T, V, C>
where
    C: Comparator<T> + Default,
{
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<T, V, C> MultiValueSearchTree<T, V, C>
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

    pub(crate) fn from_tree(tree: Tree<T, Vec<V>, C>) -> Self {
        Self {
            inner: RwLock::new(tree),
        }
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Tree<T, Vec<V>, C>> {
        self.inner.read().expect("lock is poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tree<T, Vec<V>, C>> {
        self.inner.write().expect("lock is poisoned")
    }

    pub fn config(&self) -> Config {
        self.read().config()
    }

    /// Returns true if `range` is a key in the tree.
    pub fn contains(&self, range: &RangeInclusive<T>) -> bool {
        self.read().find(range).is_some()
    }

    /// Return the number of keys strictly less than `range`.
    pub fn rank(&self, range: &RangeInclusive<T>) -> usize {
        self.read().rank(range)
    }

    pub fn height(&self) -> usize {
        self.read().height()
    }

    /// Return the number of keys (not values) in the tree.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Check the structural invariants of the tree.
    pub fn validate(&self) -> Result<(), Violation> {
        self.read().validate()
    }
}

impl<T, V, C> MultiValueSearchTree<T, V, C>
where
    T: Clone,
    C: Comparator<T>,
{
    fn merge_values<M>(
        &self,
        range: RangeInclusive<T>,
        values: impl IntoIterator<Item = V>,
        merge: &M,
    ) -> Result<(), Error<T>>
    where
        M: MergePolicy<Vec<V>>,
    {
        let values = values.into_iter().collect::<Vec<_>>();
        if values.is_empty() {
            log::debug!("rejected insert of empty value list");
            return Err(Error::EmptyValueList);
        }

        self.write().insert(range, values, merge).inspect_err(|_| {
            log::debug!("rejected insert of invalid interval");
        })
    }

    /// Append `values` to the bucket of the interval key `range`, creating it
    /// if necessary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyValueList`] if `values` is empty, or
    /// [`Error::InvalidInterval`] if `range` is not a valid interval.
    pub fn insert(
        &self,
        range: RangeInclusive<T>,
        values: impl IntoIterator<Item = V>,
    ) -> Result<(), Error<T>> {
        self.merge_values(range, values, &Append)
    }

    /// Replace the bucket of the interval key `range` with `values`, creating
    /// it if necessary.
    ///
    /// # Errors
    ///
    /// As for [`MultiValueSearchTree::insert()`].
    pub fn upsert(
        &self,
        range: RangeInclusive<T>,
        values: impl IntoIterator<Item = V>,
    ) -> Result<(), Error<T>> {
        self.merge_values(range, values, &Replace)
    }

    /// Remove the interval key `range` and its entire bucket, returning the
    /// bucket if it was present.
    pub fn delete(&self, range: &RangeInclusive<T>) -> Result<Option<Vec<V>>, Error<T>> {
        let mut tree = self.write();

        let removed = tree.delete(range)?;
        if let Some(v) = &removed {
            log::trace!(
                "removed interval bucket of {} values, {} keys remaining",
                v.len(),
                tree.len()
            );
        }

        Ok(removed)
    }

    /// Remove and return the smallest key and its bucket, if any.
    pub fn delete_min(&self) -> Option<(RangeInclusive<T>, Vec<V>)> {
        let mut tree = self.write();
        let removed = tree.delete_min()?;
        log::trace!("removed minimum interval, {} remaining", tree.len());
        Some(removed)
    }

    /// Remove and return the largest key and its bucket, if any.
    pub fn delete_max(&self) -> Option<(RangeInclusive<T>, Vec<V>)> {
        let mut tree = self.write();
        let removed = tree.delete_max()?;
        log::trace!("removed maximum interval, {} remaining", tree.len());
        Some(removed)
    }

    pub fn clear(&self) {
        self.write().clear();
    }
}

impl<T, V, C> MultiValueSearchTree<T, V, C>
where
    T: Clone,
    V: Clone,
    C: Comparator<T>,
{
    /// Return the bucket of the exact interval key `range`, if any.
    pub fn find(&self, range: &RangeInclusive<T>) -> Option<Vec<V>> {
        self.read().find(range).map(|v| v.payload().clone())
    }

    /// Return the bucket of an interval that shares at least one point with
    /// the closed `range`, if any.
    pub fn any_intersection(&self, range: &RangeInclusive<T>) -> Option<Vec<V>> {
        self.read()
            .any_intersection(range)
            .map(|v| v.payload().clone())
    }

    /// Return the values of all intervals that share at least one point with
    /// the closed `range`.
    ///
    /// Buckets are flattened in ascending key order, each yielding its values
    /// in insertion order.
    pub fn all_intersections(&self, range: &RangeInclusive<T>) -> Vec<V> {
        self.read()
            .all_intersections(range)
            .flat_map(|v| v.payload().iter().cloned())
            .collect()
    }

    /// Return the flattened buckets of the intervals ending at the largest end
    /// bound in the tree, in ascending key order.
    pub fn max_end(&self) -> Vec<V> {
        self.read()
            .max_end()
            .into_iter()
            .flat_map(|v| v.payload().iter().cloned())
            .collect()
    }

    pub fn min(&self) -> Option<Vec<V>> {
        self.read().min().map(|v| v.payload().clone())
    }

    pub fn max(&self) -> Option<Vec<V>> {
        self.read().max().map(|v| v.payload().clone())
    }

    /// Return the bucket of the smallest key greater than or equal to
    /// `range`.
    pub fn ceil(&self, range: &RangeInclusive<T>) -> Option<Vec<V>> {
        self.read().ceil(range).map(|v| v.payload().clone())
    }

    /// Return the bucket of the largest key less than or equal to `range`.
    pub fn floor(&self, range: &RangeInclusive<T>) -> Option<Vec<V>> {
        self.read().floor(range).map(|v| v.payload().clone())
    }

    /// Return the bucket of the `k`-th smallest key (0-indexed).
    pub fn select(&self, k: usize) -> Option<Vec<V>> {
        self.read().select(k).map(|v| v.payload().clone())
    }

    /// Return a copy of every key and bucket, in ascending key order.
    pub fn entries(&self) -> Vec<(RangeInclusive<T>, Vec<V>)> {
        self.read()
            .iter()
            .map(|v| (v.interval().clone().into_range(), v.payload().clone()))
            .collect()
    }
}
