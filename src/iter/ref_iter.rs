use crate::node::Node;

/// An in-order iterator over the nodes of a subtree, yielding them in
/// ascending key order.
#[derive(Debug)]
pub(crate) struct RefIter<'a, T, P> {
    stack: Vec<&'a Node<T, P>>,
}

impl<'a, T, P> RefIter<'a, T, P> {
    pub(crate) fn new(root: Option<&'a Node<T, P>>) -> Self {
        let mut this = Self { stack: vec![] };

        // Descend down the left side of the tree.
        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    fn push_subtree(&mut self, subtree_root: &'a Node<T, P>) {
        let mut ptr = Some(subtree_root);

        while let Some(v) = ptr {
            self.stack.push(v);
            ptr = v.left();
        }
    }
}

impl<'a, T, P> Iterator for RefIter<'a, T, P> {
    type Item = &'a Node<T, P>;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        if let Some(right) = v.right() {
            self.push_subtree(right);
        }

        Some(v)
    }
}
