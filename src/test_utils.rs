use std::ops::RangeInclusive;

use proptest::prelude::*;

const RANGE_MAX: usize = 20;

/// Generate arbitrary (potentially invalid!) ranges with bounds from
/// [0..[`RANGE_MAX`]).
pub(crate) fn arbitrary_range() -> impl Strategy<Value = RangeInclusive<usize>> {
    (0..RANGE_MAX, 0..RANGE_MAX).prop_map(|(start, end)| start..=end)
}

/// Return the ranges in `stored` that share at least one point with `query`,
/// in ascending (start, end) order.
pub(crate) fn brute_force_intersections(
    stored: &[RangeInclusive<usize>],
    query: &RangeInclusive<usize>,
) -> Vec<RangeInclusive<usize>> {
    let mut want = stored
        .iter()
        .filter(|v| query.start() <= v.end() && v.start() <= query.end())
        .cloned()
        .collect::<Vec<_>>();

    want.sort_unstable_by_key(|v| (*v.start(), *v.end()));
    want
}
