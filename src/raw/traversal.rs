use super::handle::Handle;
use super::raw_tree::{RawTree, Stack};

/// Root, then left subtree, then right subtree.
pub(crate) struct PreOrder<'a, K> {
    tree: &'a RawTree<K>,
    stack: Stack<Handle>,
}

/// Left subtree, then root, then right subtree: ascending key order.
pub(crate) struct InOrder<'a, K> {
    tree: &'a RawTree<K>,
    stack: Stack<Handle>,
    // Next subtree whose left spine has not been pushed yet.
    pending: Handle,
}

/// Left subtree, then right subtree, then root.
pub(crate) struct PostOrder<'a, K> {
    tree: &'a RawTree<K>,
    // `true` once the node's children have been scheduled.
    stack: Stack<(Handle, bool)>,
}

impl<K> RawTree<K> {
    pub(crate) fn preorder(&self) -> PreOrder<'_, K> {
        let mut stack = Stack::new();
        if !self.root().is_nil() {
            stack.push(self.root());
        }
        PreOrder { tree: self, stack }
    }

    pub(crate) fn inorder(&self) -> InOrder<'_, K> {
        InOrder {
            tree: self,
            stack: Stack::new(),
            pending: self.root(),
        }
    }

    pub(crate) fn postorder(&self) -> PostOrder<'_, K> {
        let mut stack = Stack::new();
        if !self.root().is_nil() {
            stack.push((self.root(), false));
        }
        PostOrder { tree: self, stack }
    }
}

impl<K> Iterator for PreOrder<'_, K> {
    type Item = Handle;

    fn next(&mut self) -> Option<Handle> {
        let node = self.stack.pop()?;
        let right = self.tree.right(node);
        let left = self.tree.left(node);
        if !right.is_nil() {
            self.stack.push(right);
        }
        if !left.is_nil() {
            self.stack.push(left);
        }
        Some(node)
    }
}

impl<K> Iterator for InOrder<'_, K> {
    type Item = Handle;

    fn next(&mut self) -> Option<Handle> {
        while !self.pending.is_nil() {
            self.stack.push(self.pending);
            self.pending = self.tree.left(self.pending);
        }
        let node = self.stack.pop()?;
        self.pending = self.tree.right(node);
        Some(node)
    }
}

impl<K> Iterator for PostOrder<'_, K> {
    type Item = Handle;

    fn next(&mut self) -> Option<Handle> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node);
            }
            self.stack.push((node, true));
            let right = self.tree.right(node);
            let left = self.tree.left(node);
            if !right.is_nil() {
                self.stack.push((right, false));
            }
            if !left.is_nil() {
                self.stack.push((left, false));
            }
        }
    }
}
