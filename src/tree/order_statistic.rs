use core::borrow::Borrow;
use core::ops::Index;

use super::Tree;
use crate::discipline::OrderStatistic;
use crate::{Error, Position, Rank};

impl<K> Tree<K, OrderStatistic> {
    /// Returns the key at position `index` in sorted order.
    ///
    /// The index is zero-based: `select(0)` is the smallest key and
    /// `select(len - 1)` the largest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::{Error, OrderStatisticTree};
    ///
    /// let tree = OrderStatisticTree::from([10, 20, 30]);
    /// assert_eq!(tree.select(1), Ok(&20));
    /// assert_eq!(tree.select(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn select(&self, index: usize) -> Result<&K, Error> {
        let position = self.select_node(index)?;
        Ok(self.raw.key(position.0))
    }

    /// Returns the position of the key at `index` in sorted order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn select_node(&self, index: usize) -> Result<Position, Error> {
        Position::from_handle(self.raw.select(index)).ok_or(Error::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Returns the zero-based rank of the node at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if `position` does not name a live
    /// node.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn rank_of_position(&self, position: Position) -> Result<usize, Error> {
        let handle = self.live(position).ok_or(Error::InvalidPosition)?;
        Ok(self.raw.rank(handle))
    }
}

impl<K: Ord> Tree<K, OrderStatistic> {
    /// Returns the zero-based rank of `key` in sorted order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `key` is not present.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::{Error, OrderStatisticTree};
    ///
    /// let tree = OrderStatisticTree::from([10, 20]);
    ///
    /// assert_eq!(tree.rank(&20), Ok(1));
    /// assert_eq!(tree.rank(&15), Err(Error::NotFound));
    /// ```
    pub fn rank<Q>(&self, key: &Q) -> Result<usize, Error>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let position = self.search(key).ok_or(Error::NotFound)?;
        self.rank_of_position(position)
    }
}

/// Indexes into the tree by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use rbos_tree::{OrderStatisticTree, Rank};
///
/// let tree = OrderStatisticTree::from([10, 20, 30]);
/// assert_eq!(tree[Rank(1)], 20);
/// ```
impl<K> Index<Rank> for Tree<K, OrderStatistic> {
    type Output = K;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.select(rank.0).expect("index out of bounds")
    }
}
