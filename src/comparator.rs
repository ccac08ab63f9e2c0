use std::cmp::Ordering;

/// A caller-supplied total order over the interval bound type `T`.
///
/// Implementations must be a strict total order and transitive: if
/// `compare(x, y)` and `compare(y, z)` are both [`Ordering::Greater`], then
/// `compare(x, z)` must be [`Ordering::Greater`] too. An inconsistent
/// comparator does not cause undefined behaviour, but the tree will silently
/// return incorrect query results.
///
/// Any `Fn(&T, &T) -> Ordering` closure is a [`Comparator`]:
///
/// ```
/// use interval_search_tree::SearchTree;
///
/// // Order bounds in reverse.
/// let t = SearchTree::new(|a: &i64, b: &i64| b.cmp(a));
/// t.insert(10..=2, "reversed").unwrap();
/// ```
pub trait Comparator<T> {
    /// Compare `a` against `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    fn eq(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    fn lt(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    fn lte(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) != Ordering::Greater
    }

    fn gt(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    fn gte(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) != Ordering::Less
    }

    /// Return the larger of `a` and `b`, preferring `a` when they are equal.
    fn max<'a>(&self, a: &'a T, b: &'a T) -> &'a T {
        if self.lt(a, b) {
            b
        } else {
            a
        }
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// A [`Comparator`] that delegates to the [`Ord`] implementation of `T`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T> Comparator<T> for NaturalOrder
where
    T: Ord,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}
