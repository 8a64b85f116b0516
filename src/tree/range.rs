use alloc::vec::Vec;
use core::borrow::Borrow;

use super::Tree;
use crate::discipline::Discipline;
use crate::raw::{Handle, Stack};

impl<K: Ord, D: Discipline> Tree<K, D> {
    /// Collects every key in the closed range `[low, high]`, in ascending
    /// order.
    ///
    /// Subtrees lying entirely outside the bounds are never visited, so the
    /// walk costs O(h + m) for a tree of height h and m reported keys. An
    /// inverted range (`low > high`) yields nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<_> = (0..100).step_by(10).collect();
    /// assert_eq!(tree.range_query(&15, &50), [&20, &30, &40, &50]);
    /// assert!(tree.range_query(&50, &15).is_empty());
    /// ```
    #[must_use]
    pub fn range_query<Q>(&self, low: &Q, high: &Q) -> Vec<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut found = Vec::new();
        let mut stack: Stack<Handle> = Stack::new();
        let mut pending = self.raw.root();
        loop {
            while !pending.is_nil() {
                if self.raw.key(pending).borrow() < low {
                    pending = self.raw.right(pending);
                } else {
                    stack.push(pending);
                    pending = self.raw.left(pending);
                }
            }
            let Some(node) = stack.pop() else { break };
            let key = self.raw.key(node);
            if key.borrow() > high {
                break;
            }
            found.push(key);
            pending = self.raw.right(node);
        }
        found
    }
}
