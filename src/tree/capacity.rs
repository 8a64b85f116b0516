use core::marker::PhantomData;

use super::Tree;
use crate::discipline::Discipline;
use crate::raw::RawTree;

impl<K, D: Discipline> Tree<K, D> {
    /// Creates an empty tree with room for at least `capacity` nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = RedBlackTree::with_capacity(16);
    /// assert!(tree.is_empty());
    /// assert!(tree.capacity() >= 16);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Tree {
            raw: RawTree::with_capacity(capacity),
            _discipline: PhantomData,
        }
    }

    /// Returns the number of nodes the tree can hold without reallocating.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Reserves room for at least `additional` more keys. Slots freed by
    /// earlier removals count toward the request.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::from([1, 2, 3]);
    /// tree.reserve(10);
    /// assert!(tree.capacity() >= 13);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        self.raw.reserve(additional);
    }
}
