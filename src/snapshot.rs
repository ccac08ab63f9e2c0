//! Serialisation of trees, behind the `serde` feature.
//!
//! A tree is encoded as its [`Config`] and its node structure, including link
//! colours and subtree augmentation, so decoding restores the exact shape
//! without re-inserting any keys. Decoded trees are validated before use, and
//! a snapshot that violates any structural invariant is rejected.
//!
//! The comparator is never encoded. Trees ordered by a [`Comparator`] that
//! implements [`Default`] can be decoded with [`Deserialize`], otherwise use
//! [`SearchTree::deserialize_with()`] or
//! [`MultiValueSearchTree::deserialize_with()`].

use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    comparator::Comparator, config::Config, node::Node, tree::Tree, MultiValueSearchTree,
    SearchTree,
};

#[derive(Serialize)]
struct SnapshotRef<'a, T, P> {
    config: Config,
    root: Option<&'a Node<T, P>>,
}

#[derive(Deserialize)]
struct Snapshot<T, P> {
    config: Config,
    root: Option<Box<Node<T, P>>>,
}

impl<T, P, C> Serialize for Tree<T, P, C>
where
    T: Serialize,
    P: Serialize,
    C: Comparator<T>,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        SnapshotRef {
            config: self.config(),
            root: self.root(),
        }
        .serialize(serializer)
    }
}

impl<T, P, C> Tree<T, P, C>
where
    C: Comparator<T>,
{
    /// Decode a tree snapshot, ordering it with `cmp`.
    ///
    /// The snapshot is rejected if it is not a well-formed tree under `cmp`.
    pub(crate) fn deserialize_with<'de, D>(deserializer: D, cmp: C) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
        P: Deserialize<'de>,
    {
        let Snapshot { config, root } = Snapshot::deserialize(deserializer)?;

        let tree = Self::from_parts(root, cmp, config);
        if let Err(e) = tree.validate() {
            log::debug!("rejected corrupt tree snapshot: {e}");
            return Err(D::Error::custom(format_args!("corrupt tree snapshot: {e}")));
        }

        log::debug!("restored tree snapshot of {} keys", tree.len());
        Ok(tree)
    }
}

impl<T, V, C> Serialize for SearchTree<T, V, C>
where
    T: Serialize,
    V: Serialize,
    C: Comparator<T>,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.read().serialize(serializer)
    }
}

impl<T, V, C> SearchTree<T, V, C>
where
    C: Comparator<T>,
{
    /// Decode a tree snapshot ordered by `cmp`.
    ///
    /// The [`Config`] of the decoded tree is the one it was encoded with.
    ///
    /// # Errors
    ///
    /// Returns a decode error if the snapshot is malformed, or if the decoded
    /// nodes do not form a valid tree when ordered by `cmp`.
    pub fn deserialize_with<'de, D>(deserializer: D, cmp: C) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
        V: Deserialize<'de>,
    {
        Tree::deserialize_with(deserializer, cmp).map(Self::from_tree)
    }
}

impl<'de, T, V, C> Deserialize<'de> for SearchTree<T, V, C>
where
    T: Deserialize<'de>,
    V: Deserialize<'de>,
    C: Comparator<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Self::deserialize_with(deserializer, C::default())
    }
}

impl<T, V, C> Serialize for MultiValueSearchTree<T, V, C>
where
    T: Serialize,
    V: Serialize,
    C: Comparator<T>,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.read().serialize(serializer)
    }
}

impl<T, V, C> MultiValueSearchTree<T, V, C>
where
    C: Comparator<T>,
{
    /// Decode a tree snapshot ordered by `cmp`.
    ///
    /// Each key must map to a non-empty bucket of values.
    ///
    /// # Errors
    ///
    /// As for [`SearchTree::deserialize_with()`].
    pub fn deserialize_with<'de, D>(deserializer: D, cmp: C) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
        V: Deserialize<'de>,
    {
        let tree: Tree<T, Vec<V>, C> = Tree::deserialize_with(deserializer, cmp)?;
        if tree.iter().any(|v| v.payload().is_empty()) {
            log::debug!("rejected tree snapshot containing an empty value list");
            return Err(D::Error::custom("corrupt tree snapshot: empty value list"));
        }

        Ok(Self::from_tree(tree))
    }
}

impl<'de, T, V, C> Deserialize<'de> for MultiValueSearchTree<T, V, C>
where
    T: Deserialize<'de>,
    V: Deserialize<'de>,
    C: Comparator<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Self::deserialize_with(deserializer, C::default())
    }
}
