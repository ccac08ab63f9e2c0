use std::{cmp::Ordering, ops::RangeInclusive};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{comparator::Comparator, config::Config, error::Error};

/// A closed interval `[start, end]`, totally ordered under a [`Comparator`].
///
/// An [`Interval`] is ordered by its lower bound, and tie-broken with the
/// upper bound.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) struct Interval<T> {
    start: T,
    end: T,
}

impl<T> Interval<T> {
    pub(crate) fn start(&self) -> &T {
        &self.start
    }

    pub(crate) fn end(&self) -> &T {
        &self.end
    }

    pub(crate) fn into_range(self) -> RangeInclusive<T> {
        self.start..=self.end
    }

    /// Order this interval against the key described by `range`.
    pub(crate) fn cmp_range<C>(&self, range: &RangeInclusive<T>, cmp: &C) -> Ordering
    where
        C: Comparator<T>,
    {
        // To provide ordering of an interval, the lower bound is used as the
        // primary ordering value, falling back to the upper bound when the
        // lower bounds are equal.
        match cmp.compare(&self.start, range.start()) {
            Ordering::Equal => cmp.compare(&self.end, range.end()),
            v => v,
        }
    }

    /// Order this interval against `other`.
    pub(crate) fn cmp_interval<C>(&self, other: &Self, cmp: &C) -> Ordering
    where
        C: Comparator<T>,
    {
        match cmp.compare(&self.start, &other.start) {
            Ordering::Equal => cmp.compare(&self.end, &other.end),
            v => v,
        }
    }

    /// Returns true if this interval shares at least one point with the closed
    /// query `range`.
    pub(crate) fn intersects<C>(&self, range: &RangeInclusive<T>, cmp: &C) -> bool
    where
        C: Comparator<T>,
    {
        cmp.lte(range.start(), &self.end) && cmp.lte(&self.start, range.end())
    }
}

impl<T> From<RangeInclusive<T>> for Interval<T> {
    fn from(value: RangeInclusive<T>) -> Self {
        let (start, end) = value.into_inner();
        Self { start, end }
    }
}

/// Returns true if `start` and `end` do not describe an interval accepted by a
/// tree with the given [`Config`].
pub(crate) fn is_invalid<T, C>(start: &T, end: &T, cmp: &C, config: &Config) -> bool
where
    C: Comparator<T>,
{
    if config.point_intervals_allowed() {
        cmp.lt(end, start)
    } else {
        cmp.lte(end, start)
    }
}

/// Validate `range` as an interval key, returning an
/// [`Error::InvalidInterval`] carrying a copy of the bounds if it is
/// rejected.
pub(crate) fn validate<T, C>(
    range: &RangeInclusive<T>,
    cmp: &C,
    config: &Config,
) -> Result<(), Error<T>>
where
    T: Clone,
    C: Comparator<T>,
{
    if is_invalid(range.start(), range.end(), cmp, config) {
        return Err(Error::InvalidInterval {
            start: range.start().clone(),
            end: range.end().clone(),
        });
    }
    Ok(())
}
