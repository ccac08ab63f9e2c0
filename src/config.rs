#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Construction-time options for a tree.
///
/// ```
/// use interval_search_tree::{Config, SearchTree};
///
/// let t = SearchTree::with_config(
///     |a: &u32, b: &u32| a.cmp(b),
///     Config::default().allow_point_intervals(true),
/// );
///
/// t.insert(4..=4, "point").unwrap();
/// assert_eq!(t.find(&(4..=4)), Some("point"));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    allow_point_intervals: bool,
}

impl Config {
    /// Accept zero-width intervals where the start and end bounds compare
    /// equal.
    ///
    /// Disabled by default.
    pub fn allow_point_intervals(mut self, allow: bool) -> Self {
        self.allow_point_intervals = allow;
        self
    }

    /// Returns true if zero-width intervals are accepted.
    pub fn point_intervals_allowed(&self) -> bool {
        self.allow_point_intervals
    }
}
