use std::fmt::Debug;

/// Errors returned by tree mutations.
///
/// The tree is never modified when an error is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error<T> {
    /// The interval end is ordered before its start, or the bounds are equal
    /// and point intervals are not enabled in the tree
    /// [`Config`](crate::Config).
    InvalidInterval {
        /// The offending lower bound.
        start: T,
        /// The offending upper bound.
        end: T,
    },

    /// A multi-value insert or upsert was given no values.
    EmptyValueList,
}

impl<T> std::fmt::Display for Error<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInterval { start, end } => write!(
                f,
                "invalid interval: end {end:?} is not ordered after start {start:?}"
            ),
            Self::EmptyValueList => write!(f, "empty value list"),
        }
    }
}

impl<T> std::error::Error for Error<T> where T: Debug {}
