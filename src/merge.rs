/// Decides how the payload of an existing key absorbs the payload of a
/// subsequent insert of the same key.
pub(crate) trait MergePolicy<P> {
    fn merge(&self, existing: &mut P, incoming: P);
}

/// Overwrite the existing payload.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Replace;

impl<P> MergePolicy<P> for Replace {
    fn merge(&self, existing: &mut P, incoming: P) {
        *existing = incoming;
    }
}

/// Append the incoming values to the existing bucket, preserving insertion
/// order and duplicates.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Append;

impl<V> MergePolicy<Vec<V>> for Append {
    fn merge(&self, existing: &mut Vec<V>, incoming: Vec<V>) {
        existing.extend(incoming);
    }
}
