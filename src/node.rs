use std::{cmp::Ordering, ops::RangeInclusive};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{comparator::Comparator, interval::Interval, merge::MergePolicy};

/// The colour of the link from a parent to a [`Node`].
///
/// A missing child is always treated as [`Color::Black`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

impl Color {
    fn flip(&mut self) {
        *self = match self {
            Self::Red => Self::Black,
            Self::Black => Self::Red,
        };
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub(crate) struct Node<T, P> {
    /// Child nodes pointers.
    left: Option<Box<Node<T, P>>>,
    right: Option<Box<Node<T, P>>>,

    /// The colour of the link pointing at this node from its parent.
    color: Color,

    /// The number of nodes in the subtree rooted at this [`Node`], including
    /// itself.
    size: usize,

    /// The maximum upper bound of all intervals for the subtree rooted at this
    /// [`Node`].
    max_end: T,

    interval: Interval<T>,
    payload: P,
}

impl<T, P> Node<T, P> {
    /// Initialise a new red leaf.
    pub(crate) fn new(interval: Interval<T>, payload: P) -> Self
    where
        T: Clone,
    {
        Self {
            max_end: interval.end().clone(),
            interval,
            payload,
            left: None,
            right: None,
            color: Color::Red,
            size: 1,
        }
    }

    pub(crate) fn payload(&self) -> &P {
        &self.payload
    }

    pub(crate) fn interval(&self) -> &Interval<T> {
        &self.interval
    }

    pub(crate) fn max_end(&self) -> &T {
        &self.max_end
    }

    pub(crate) fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn color(&self) -> Color {
        self.color
    }

    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Explode this [`Node`] into the interval key and payload it contains.
    pub(crate) fn into_entry(self) -> (RangeInclusive<T>, P) {
        (self.interval.into_range(), self.payload)
    }
}

/// Returns true if `n` exists and is linked by a red link.
pub(crate) fn is_red<T, P>(n: Option<&Node<T, P>>) -> bool {
    n.map(Node::is_red).unwrap_or_default()
}

/// Returns the number of nodes in the subtree rooted at `n`.
pub(crate) fn size<T, P>(n: Option<&Node<T, P>>) -> usize {
    n.map(Node::size).unwrap_or_default()
}

/// Recompute the subtree size and subtree max end of `n` from its immediate
/// children.
fn update_augmentation<T, P, C>(n: &mut Node<T, P>, cmp: &C)
where
    T: Clone,
    C: Comparator<T>,
{
    n.size = 1 + size(n.left()) + size(n.right());

    let new_max = [n.left(), n.right()]
        .into_iter()
        .flatten()
        .fold(n.interval.end(), |max, child| cmp.max(max, child.max_end()))
        .clone();

    n.max_end = new_max;
}

/// Toggle the colour of `h` and both of its children.
///
/// Used to split a temporary 4-node into two 2-nodes (pushing the middle key
/// up into the parent) and the inverse, merging a parent key and two 2-nodes
/// into a 4-node.
fn flip_colors<T, P>(h: &mut Node<T, P>) {
    h.color.flip();
    if let Some(v) = h.left.as_mut() {
        v.color.flip();
    }
    if let Some(v) = h.right.as_mut() {
        v.color.flip();
    }
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// `P` takes the link colour of `x`, and `x` is linked to `P` with a red link.
///
/// # Panics
///
/// Panics if `x` has no right pointer (cannot be rotated).
fn rotate_left<T, P, C>(x: &mut Box<Node<T, P>>, cmp: &C)
where
    T: Clone,
    C: Comparator<T>,
{
    let mut p = x.right.take().unwrap();
    std::mem::swap(x, &mut p);

    // "x" now refers to the promoted pivot, and "p" to the demoted root.
    p.right = x.left.take();
    x.color = p.color;
    p.color = Color::Red;
    update_augmentation(&mut p, cmp);

    x.left = Some(p);
    update_augmentation(x, cmp);
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// `P` takes the link colour of `y`, and `y` is linked to `P` with a red link.
///
/// # Panics
///
/// Panics if `y` has no left pointer (cannot be rotated).
fn rotate_right<T, P, C>(y: &mut Box<Node<T, P>>, cmp: &C)
where
    T: Clone,
    C: Comparator<T>,
{
    let mut p = y.left.take().unwrap();
    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    y.color = p.color;
    p.color = Color::Red;
    update_augmentation(&mut p, cmp);

    y.right = Some(p);
    update_augmentation(y, cmp);
}

/// Restore the left-leaning red-black shape of the subtree rooted at `h`,
/// assuming both child subtrees are well formed.
///
/// The three steps are applied in order, and each may enable the next:
///
/// 1. A right-leaning red link is rotated to lean left.
/// 2. Two consecutive left-leaning red links are rotated into a node with two
///    red children (a temporary 4-node).
/// 3. A node with two red children is split by flipping colours.
fn balance<T, P, C>(h: &mut Box<Node<T, P>>, cmp: &C)
where
    T: Clone,
    C: Comparator<T>,
{
    if is_red(h.right()) && !is_red(h.left()) {
        rotate_left(h, cmp);
    }
    if is_red(h.left()) && is_red(h.left().and_then(Node::left)) {
        rotate_right(h, cmp);
    }
    if is_red(h.left()) && is_red(h.right()) {
        flip_colors(h);
    }
}

/// Recompute the augmentation of `h` after one of its subtrees changed, and
/// rebalance it.
fn fix_up<T, P, C>(h: &mut Box<Node<T, P>>, cmp: &C)
where
    T: Clone,
    C: Comparator<T>,
{
    update_augmentation(h, cmp);
    balance(h, cmp);
}

/// Assuming `h` is red and both `h.left` and `h.left.left` are black, make
/// `h.left` or one of its children red by borrowing a red link from the
/// right sibling (or merging with it).
///
/// ```text
///          (h)                       h
///         /   \     flip colours   /   \
///        a     c  -------------> (a)   (c)
///       / \   / \                / \   / \
/// ```
///
/// If the right sibling `c` was a 3-node (its left child is red), the borrowed
/// key is rotated across into the left subtree instead of leaving `h` with two
/// red children.
fn move_red_left<T, P, C>(h: &mut Box<Node<T, P>>, cmp: &C)
where
    T: Clone,
    C: Comparator<T>,
{
    flip_colors(h);

    if let Some(right) = h.right.as_mut().filter(|v| is_red(v.left())) {
        rotate_right(right, cmp);
        rotate_left(h, cmp);
        flip_colors(h);
    }
}

/// Assuming `h` is red and both `h.right` and `h.right.left` are black, make
/// `h.right` or one of its children red.
///
/// If the left sibling is a 3-node, a key is rotated across from it into the
/// right subtree.
fn move_red_right<T, P, C>(h: &mut Box<Node<T, P>>, cmp: &C)
where
    T: Clone,
    C: Comparator<T>,
{
    flip_colors(h);

    if is_red(h.left().and_then(Node::left)) {
        rotate_right(h, cmp);
        flip_colors(h);
    }
}

/// Insert `interval` into the subtree in `slot`, merging `payload` into the
/// existing node with `merge` if the key already exists.
///
/// Returns true if a new node was linked into the tree.
pub(crate) fn insert<T, P, C, M>(
    slot: &mut Option<Box<Node<T, P>>>,
    interval: Interval<T>,
    payload: P,
    merge: &M,
    cmp: &C,
) -> bool
where
    T: Clone,
    C: Comparator<T>,
    M: MergePolicy<P>,
{
    let node = match slot {
        Some(v) => v,
        None => {
            // New keys are always attached with a red link, extending the
            // 2-3 tree node of the parent.
            *slot = Some(Box::new(Node::new(interval, payload)));
            return true;
        }
    };

    let child = match interval.cmp_interval(&node.interval, cmp) {
        Ordering::Less => &mut node.left,
        Ordering::Equal => {
            merge.merge(&mut node.payload, payload);
            return false;
        }
        Ordering::Greater => &mut node.right,
    };

    if !insert(child, interval, payload, merge, cmp) {
        // The tree structure has not been modified, so it does not require
        // rebalancing.
        return false;
    }

    fix_up(node, cmp);

    true
}

/// Remove the node holding the minimum interval in the subtree in `slot`,
/// returning it.
///
/// Requires `slot` to be the root (any colour) or a node on a path where the
/// caller has ensured either it or its left child is red.
pub(crate) fn delete_min<T, P, C>(
    slot: &mut Option<Box<Node<T, P>>>,
    cmp: &C,
) -> Option<Box<Node<T, P>>>
where
    T: Clone,
    C: Comparator<T>,
{
    let h = slot.as_mut()?;

    if h.left.is_none() {
        // The left-most node of a left-leaning tree cannot have a right child:
        // a red one would lean right, and a black one would unbalance the
        // black height of the (empty) left subtree.
        debug_assert!(h.right.is_none());
        return slot.take();
    }

    // Never descend into a 2-node.
    if !is_red(h.left()) && !is_red(h.left().and_then(Node::left)) {
        move_red_left(h, cmp);
    }

    let removed = delete_min(&mut h.left, cmp);
    fix_up(h, cmp);
    removed
}

/// Remove the node holding the maximum interval in the subtree in `slot`,
/// returning it.
pub(crate) fn delete_max<T, P, C>(
    slot: &mut Option<Box<Node<T, P>>>,
    cmp: &C,
) -> Option<Box<Node<T, P>>>
where
    T: Clone,
    C: Comparator<T>,
{
    let h = slot.as_mut()?;

    // Lean the red link right so the maximum can be detached as a leaf.
    if is_red(h.left()) {
        rotate_right(h, cmp);
    }

    if h.right.is_none() {
        debug_assert!(h.left.is_none());
        return slot.take();
    }

    if !is_red(h.right()) && !is_red(h.right().and_then(Node::left)) {
        move_red_right(h, cmp);
    }

    let removed = delete_max(&mut h.right, cmp);
    fix_up(h, cmp);
    removed
}

/// Remove the node keyed by `key` from the subtree in `slot`, returning a
/// detached node holding the removed interval and payload.
///
/// The descent borrows red links downwards so the removal never happens in a
/// 2-node. An internal node is removed by moving the interval and payload of
/// its in-order successor into it, and removing the successor from the right
/// subtree instead.
///
/// If `key` does not exist, rotations and colour flips may still be applied
/// along the search path, but no node is removed.
pub(crate) fn delete<T, P, C>(
    slot: &mut Option<Box<Node<T, P>>>,
    key: &RangeInclusive<T>,
    cmp: &C,
) -> Option<Box<Node<T, P>>>
where
    T: Clone,
    C: Comparator<T>,
{
    let h = slot.as_mut()?;

    let removed = if h.interval.cmp_range(key, cmp) == Ordering::Greater {
        // The key is in the left subtree, if anywhere.
        if h
            .left()
            .map(|v| !v.is_red() && !is_red(v.left()))
            .unwrap_or_default()
        {
            move_red_left(h, cmp);
        }

        delete(&mut h.left, key, cmp)
    } else {
        if is_red(h.left()) {
            rotate_right(h, cmp);
        }

        if h.interval.cmp_range(key, cmp) == Ordering::Equal && h.right.is_none() {
            // A matching node with no right child is a leaf (any left child
            // would be black, and unbalance the empty right subtree).
            debug_assert!(h.left.is_none());
            return slot.take();
        }

        if h
            .right()
            .map(|v| !v.is_red() && !is_red(v.left()))
            .unwrap_or_default()
        {
            move_red_right(h, cmp);
        }

        if h.interval.cmp_range(key, cmp) == Ordering::Equal {
            // Swap the successor's contents into "h", leaving the detached
            // successor node holding the removed interval and payload.
            //
            // "h" always has a right subtree here: it was either checked above,
            // or the move_red_right() rotation replaced "h" with a node of a
            // different key.
            let mut successor = delete_min(&mut h.right, cmp).unwrap();
            std::mem::swap(&mut h.interval, &mut successor.interval);
            std::mem::swap(&mut h.payload, &mut successor.payload);

            Some(successor)
        } else {
            delete(&mut h.right, key, cmp)
        }
    };

    fix_up(h, cmp);
    removed
}

/// Descend from `n` by key order and return the node matching `key`, if any.
pub(crate) fn find<'a, T, P, C>(
    mut n: Option<&'a Node<T, P>>,
    key: &RangeInclusive<T>,
    cmp: &C,
) -> Option<&'a Node<T, P>>
where
    C: Comparator<T>,
{
    while let Some(v) = n {
        n = match v.interval.cmp_range(key, cmp) {
            Ordering::Equal => return Some(v),
            Ordering::Greater => v.left(),
            Ordering::Less => v.right(),
        };
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        comparator::NaturalOrder,
        config::Config,
        merge::{Append, Replace},
        validate::validate,
    };

    fn leaf(range: RangeInclusive<u32>, v: u32, color: Color) -> Box<Node<u32, u32>> {
        let mut n = Node::new(Interval::from(range), v);
        n.color = color;
        Box::new(n)
    }

    fn add_left(
        n: &mut Node<u32, u32>,
        range: RangeInclusive<u32>,
        v: u32,
        color: Color,
    ) -> &mut Node<u32, u32> {
        assert!(n.left.is_none());
        n.left = Some(leaf(range, v, color));
        n.left.as_mut().unwrap()
    }

    fn add_right(
        n: &mut Node<u32, u32>,
        range: RangeInclusive<u32>,
        v: u32,
        color: Color,
    ) -> &mut Node<u32, u32> {
        assert!(n.right.is_none());
        n.right = Some(leaf(range, v, color));
        n.right.as_mut().unwrap()
    }

    /// Recompute the augmentation of every node in a hand-built fixture.
    fn fix_fixture(n: &mut Node<u32, u32>) {
        if let Some(v) = n.left.as_mut() {
            fix_fixture(v);
        }
        if let Some(v) = n.right.as_mut() {
            fix_fixture(v);
        }
        update_augmentation(n, &NaturalOrder);
    }

    fn in_order(n: Option<&Node<u32, u32>>, out: &mut Vec<u32>) {
        if let Some(n) = n {
            in_order(n.left(), out);
            out.push(n.payload);
            in_order(n.right(), out);
        }
    }

    #[test]
    fn test_rotate_left() {
        //
        //      2
        //     / \                               4
        //    1   4         Rotate Left        /   \
        //       / \      --------------->    2     6
        //      3   6                        / \   / \
        //         / \                      1   3 5   7
        //        5   7
        //
        let mut t = leaf(2..=2, 2, Color::Black);
        add_left(&mut t, 1..=1, 1, Color::Black);
        let v = add_right(&mut t, 4..=4, 4, Color::Red);
        add_left(v, 3..=3, 3, Color::Black);
        let v = add_right(v, 6..=60, 6, Color::Black);
        add_left(v, 5..=5, 5, Color::Black);
        add_right(v, 7..=7, 7, Color::Black);
        fix_fixture(&mut t);

        rotate_left(&mut t, &NaturalOrder);

        assert_eq!(t.payload, 4);
        assert_eq!(t.color, Color::Black);
        assert_eq!(t.size, 7);
        assert_eq!(t.max_end, 60);

        {
            let left_root = t.left().unwrap();
            assert_eq!(left_root.payload, 2);
            assert_eq!(left_root.color, Color::Red);
            assert_eq!(left_root.size, 3);
            assert_eq!(left_root.max_end, 3);

            assert_eq!(left_root.left().unwrap().payload, 1);
            assert_eq!(left_root.right().unwrap().payload, 3);
        }

        {
            let right_root = t.right().unwrap();
            assert_eq!(right_root.payload, 6);
            assert_eq!(right_root.size, 3);
            assert_eq!(right_root.max_end, 60);

            assert_eq!(right_root.left().unwrap().payload, 5);
            assert_eq!(right_root.right().unwrap().payload, 7);
        }
    }

    #[test]
    fn test_rotate_right() {
        //
        //          6
        //         / \                           4
        //        4   7     Rotate Right       /   \
        //       / \      --------------->    2     6
        //      2   5                        / \   / \
        //     / \                          1   3 5   7
        //    1   3
        //
        let mut t = leaf(6..=6, 6, Color::Black);
        add_right(&mut t, 7..=7, 7, Color::Black);
        let v = add_left(&mut t, 4..=4, 4, Color::Red);
        add_right(v, 5..=50, 5, Color::Black);
        let v = add_left(v, 2..=2, 2, Color::Black);
        add_right(v, 3..=3, 3, Color::Black);
        add_left(v, 1..=1, 1, Color::Black);
        fix_fixture(&mut t);

        rotate_right(&mut t, &NaturalOrder);

        assert_eq!(t.payload, 4);
        assert_eq!(t.color, Color::Black);
        assert_eq!(t.size, 7);
        assert_eq!(t.max_end, 50);

        {
            let left_root = t.left().unwrap();
            assert_eq!(left_root.payload, 2);
            assert_eq!(left_root.size, 3);
            assert_eq!(left_root.max_end, 3);

            assert_eq!(left_root.left().unwrap().payload, 1);
            assert_eq!(left_root.right().unwrap().payload, 3);
        }

        {
            let right_root = t.right().unwrap();
            assert_eq!(right_root.payload, 6);
            assert_eq!(right_root.color, Color::Red);
            assert_eq!(right_root.size, 3);
            assert_eq!(right_root.max_end, 50);

            assert_eq!(right_root.left().unwrap().payload, 5);
            assert_eq!(right_root.right().unwrap().payload, 7);
        }
    }

    #[test]
    fn test_flip_colors() {
        let mut t = leaf(2..=2, 2, Color::Black);
        add_left(&mut t, 1..=1, 1, Color::Red);
        add_right(&mut t, 3..=3, 3, Color::Red);

        flip_colors(&mut t);
        assert_eq!(t.color, Color::Red);
        assert_eq!(t.left().unwrap().color, Color::Black);
        assert_eq!(t.right().unwrap().color, Color::Black);

        // A missing child is left alone.
        let mut t = leaf(2..=2, 2, Color::Red);
        add_left(&mut t, 1..=1, 1, Color::Black);
        flip_colors(&mut t);
        assert_eq!(t.color, Color::Black);
        assert_eq!(t.left().unwrap().color, Color::Red);
    }

    #[test]
    fn test_balance_right_leaning() {
        //
        //    1                   2
        //     \\      --->     //
        //      2              1
        //
        let mut t = leaf(1..=1, 1, Color::Black);
        add_right(&mut t, 2..=2, 2, Color::Red);
        fix_fixture(&mut t);

        balance(&mut t, &NaturalOrder);

        assert_eq!(t.payload, 2);
        assert_eq!(t.color, Color::Black);
        assert_eq!(t.left().unwrap().payload, 1);
        assert_eq!(t.left().unwrap().color, Color::Red);
        assert!(t.right().is_none());
    }

    #[test]
    fn test_balance_left_left() {
        //
        //        3
        //      //                2
        //     2       --->     /   \
        //   //                1     3
        //  1
        //
        let mut t = leaf(3..=3, 3, Color::Black);
        let v = add_left(&mut t, 2..=2, 2, Color::Red);
        add_left(v, 1..=1, 1, Color::Red);
        fix_fixture(&mut t);

        balance(&mut t, &NaturalOrder);

        // The rotation produces a 4-node that is then split, pushing the
        // middle key up with a red link.
        assert_eq!(t.payload, 2);
        assert_eq!(t.color, Color::Red);
        assert_eq!(t.left().unwrap().color, Color::Black);
        assert_eq!(t.right().unwrap().color, Color::Black);
        assert_eq!(t.size, 3);
    }

    #[test]
    fn test_move_red_left_borrows_from_sibling() {
        //
        //         (4)                       (5)
        //        /   \                     /   \
        //       2     6       --->        4     6
        //            //                 //
        //           5                  2
        //
        // The right sibling is a 3-node (6 with a red left child 5), so a key
        // is rotated across into the left subtree instead of merging.
        let mut t = leaf(4..=4, 4, Color::Red);
        add_left(&mut t, 2..=2, 2, Color::Black);
        let v = add_right(&mut t, 6..=6, 6, Color::Black);
        add_left(v, 5..=5, 5, Color::Red);
        fix_fixture(&mut t);

        move_red_left(&mut t, &NaturalOrder);

        // 5 was promoted, 4 moved left with 2 now red beneath it.
        assert_eq!(t.payload, 5);
        let left = t.left().unwrap();
        assert_eq!(left.payload, 4);
        assert_eq!(left.color, Color::Black);
        assert!(left.left().unwrap().is_red());
        assert_eq!(left.left().unwrap().payload, 2);
        assert_eq!(t.right().unwrap().payload, 6);
        assert_eq!(t.right().unwrap().color, Color::Black);
        assert_eq!(t.size, 4);

        let mut got = vec![];
        in_order(Some(&t), &mut got);
        assert_eq!(got, [2, 4, 5, 6]);
    }

    #[test]
    fn test_insert_merge_policies() {
        let mut root: Option<Box<Node<u32, Vec<u32>>>> = None;

        assert!(insert(&mut root, Interval::from(1..=2), vec![1], &Append, &NaturalOrder));
        assert!(!insert(&mut root, Interval::from(1..=2), vec![2], &Append, &NaturalOrder));
        assert_eq!(root.as_ref().unwrap().payload, [1, 2]);

        assert!(!insert(&mut root, Interval::from(1..=2), vec![3], &Replace, &NaturalOrder));
        assert_eq!(root.as_ref().unwrap().payload, [3]);
        assert_eq!(root.as_ref().unwrap().size, 1);
    }

    /// Build a tree from `keys` the way the tree facade does.
    fn build(keys: impl IntoIterator<Item = u32>) -> Option<Box<Node<u32, u32>>> {
        let mut root = None;
        for k in keys {
            insert(&mut root, Interval::from(k..=k + 1), k, &Replace, &NaturalOrder);
            root.as_mut().unwrap().color = Color::Black;
        }
        root
    }

    fn blacken(root: &mut Option<Box<Node<u32, u32>>>) {
        if let Some(v) = root.as_mut() {
            v.color = Color::Black;
        }
    }

    #[test]
    fn test_delete_min_max() {
        let mut root = build(0..100);
        validate(root.as_deref(), &NaturalOrder, &Config::default()).unwrap();

        for want in 0..50 {
            let n = delete_min(&mut root, &NaturalOrder).unwrap();
            blacken(&mut root);
            assert_eq!(n.payload, want);
            assert!(n.left.is_none() && n.right.is_none());
            validate(root.as_deref(), &NaturalOrder, &Config::default()).unwrap();

            let n = delete_max(&mut root, &NaturalOrder).unwrap();
            blacken(&mut root);
            assert_eq!(n.payload, 99 - want);
            validate(root.as_deref(), &NaturalOrder, &Config::default()).unwrap();
        }

        assert!(root.is_none());
        assert!(delete_min(&mut root, &NaturalOrder).is_none());
        assert!(delete_max(&mut root, &NaturalOrder).is_none());
    }

    #[test]
    fn test_delete_internal_node() {
        let mut root = build([17, 5, 21, 4, 15, 7, 16]);

        // The root holds an internal key with two children.
        let root_key = root.as_ref().unwrap().payload;
        let n = delete(&mut root, &(root_key..=root_key + 1), &NaturalOrder).unwrap();
        blacken(&mut root);

        assert_eq!(n.payload, root_key);
        assert_eq!(n.into_entry().0, root_key..=root_key + 1);
        validate(root.as_deref(), &NaturalOrder, &Config::default()).unwrap();

        let mut got = vec![];
        in_order(root.as_deref(), &mut got);
        let mut want = vec![4, 5, 7, 15, 16, 17, 21];
        want.retain(|v| *v != root_key);
        assert_eq!(got, want);
    }

    #[test]
    fn test_delete_absent_key() {
        let mut root = build(0..20);

        assert!(delete(&mut root, &(100..=101), &NaturalOrder).is_none());
        assert!(delete(&mut root, &(3..=5), &NaturalOrder).is_none());
        blacken(&mut root);

        assert_eq!(size(root.as_deref()), 20);
        validate(root.as_deref(), &NaturalOrder, &Config::default()).unwrap();
    }

    #[test]
    fn test_find() {
        let root = build(0..10);

        for k in 0..10 {
            let got = find(root.as_deref(), &(k..=k + 1), &NaturalOrder).unwrap();
            assert_eq!(got.payload, k);
        }

        assert!(find(root.as_deref(), &(1..=3), &NaturalOrder).is_none());
        assert!(find(None::<&Node<u32, u32>>, &(1..=2), &NaturalOrder).is_none());
    }
}
