use core::cmp::Ordering;

use super::handle::Handle;
use super::node::Side;
use super::raw_tree::RawTree;

impl<K> RawTree<K> {
    /// Adds one to the size of `handle` and each of its ancestors.
    pub(crate) fn increment_sizes_from(&mut self, mut handle: Handle) {
        while !handle.is_nil() {
            let size = self.node_size(handle).incremented();
            self.set_node_size(handle, size);
            handle = self.parent(handle);
        }
    }

    /// Subtracts one from the size of `handle` and each of its ancestors.
    ///
    /// Deletion calls this before relinking anything, from the parent of the
    /// position that physically leaves the tree.
    pub(crate) fn decrement_sizes_from(&mut self, mut handle: Handle) {
        while !handle.is_nil() {
            let size = self.node_size(handle).decremented();
            self.set_node_size(handle, size);
            handle = self.parent(handle);
        }
    }

    /// Recomputes `handle`'s size from its children.
    pub(crate) fn recount(&mut self, handle: Handle) {
        let size = 1 + self.size(self.left(handle)) + self.size(self.right(handle));
        self.set_size(handle, size);
    }

    /// [`rotate`](Self::rotate) followed by the size repair of the two nodes
    /// whose subtrees changed: the lifted child inherits `x`'s old total and
    /// `x` is recounted from its new children.
    pub(crate) fn rotate_maintaining_sizes(&mut self, x: Handle, side: Side) {
        let y = self.child(x, side.opposite());
        let total = self.node_size(x);
        self.rotate(x, side);
        self.set_node_size(y, total);
        self.recount(x);
    }

    /// Returns the node holding the `index`-th smallest key (zero-based) in
    /// the subtree rooted at `from`, or `NIL` if `index >= size(from)`.
    pub(crate) fn select_from(&self, mut from: Handle, mut index: usize) -> Handle {
        if index >= self.size(from) {
            return Handle::NIL;
        }
        loop {
            let left = self.left(from);
            let below = self.size(left);
            match index.cmp(&below) {
                Ordering::Equal => return from,
                Ordering::Less => from = left,
                Ordering::Greater => {
                    index -= below + 1;
                    from = self.right(from);
                }
            }
        }
    }

    pub(crate) fn select(&self, index: usize) -> Handle {
        self.select_from(self.root(), index)
    }

    /// Zero-based position of `handle` in key order.
    pub(crate) fn rank(&self, handle: Handle) -> usize {
        let mut rank = self.size(self.left(handle));
        let mut current = handle;
        while current != self.root() {
            let parent = self.parent(current);
            if self.right(parent) == current {
                rank += self.size(self.left(parent)) + 1;
            }
            current = parent;
        }
        rank
    }
}
