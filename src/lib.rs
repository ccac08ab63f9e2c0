//! An order-statistic [interval search tree] over closed intervals, backed by
//! a left-leaning red-black tree.
//!
//! Each key is a closed interval `[start, end]` with bounds of any type `T`,
//! ordered by a caller-supplied [`Comparator`] (or [`NaturalOrder`] for types
//! implementing [`Ord`]). Keys are ordered by their start bound, tie-broken
//! by their end bound, and two intervals intersect when they share at least
//! one point.
//!
//! Two trees are provided:
//!
//! * [`SearchTree`]: maps each interval key to a single value, replacing it
//!   on re-insertion.
//! * [`MultiValueSearchTree`]: maps each interval key to an ordered bucket of
//!   values, appending to it on re-insertion.
//!
//! Both support exact lookups, intersection queries, ordered navigation
//! (`min`, `max`, `ceil`, `floor`) and order statistics (`rank`, `select`),
//! all in `O(log n)` time.
//!
//! ```
//! use interval_search_tree::SearchTree;
//!
//! let t = SearchTree::<u32, &str>::default();
//!
//! t.insert(17..=19, "v1").unwrap();
//! t.insert(5..=8, "v2").unwrap();
//! t.insert(21..=24, "v3").unwrap();
//! t.insert(4..=8, "v4").unwrap();
//!
//! // Any single interval intersecting [23, 25].
//! assert_eq!(t.any_intersection(&(23..=25)), Some("v3"));
//!
//! // All intervals intersecting [6, 18], in ascending key order.
//! assert_eq!(t.all_intersections(&(6..=18)), ["v4", "v2", "v1"]);
//!
//! // Order statistics.
//! assert_eq!(t.rank(&(17..=19)), 2);
//! assert_eq!(t.select(0), Some("v4"));
//! ```
//!
//! # Features
//!
//! * `serde`: encode and decode trees (including their exact shape) with
//!   [serde](https://docs.rs/serde).
//!
//! [interval search tree]: https://en.wikipedia.org/wiki/Interval_tree#Augmented_tree

#![deny(
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms,
    missing_debug_implementations,
    unsafe_code
)]
#![warn(
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::explicit_iter_loop,
    clippy::todo,
    clippy::use_self
)]

mod comparator;
mod config;
mod error;
mod interval;
mod iter;
mod merge;
mod multi;
mod node;
mod search_tree;
#[cfg(feature = "serde")]
mod snapshot;
mod tree;
mod validate;

#[cfg(test)]
mod test_utils;

pub use comparator::*;
pub use config::*;
pub use error::*;
pub use multi::*;
pub use search_tree::*;
pub use validate::Violation;
