use core::borrow::Borrow;
use core::fmt;
use core::marker::PhantomData;

use crate::discipline::Discipline;
use crate::raw::{Color, Handle, RawTree};
use crate::{Error, Position};

mod capacity;
mod iter;
mod order_statistic;
mod range;

pub use iter::{InOrder, IntoIter, Iter, PostOrder, PreOrder};

/// A binary search tree whose balancing is selected by the discipline `D`.
///
/// Most code uses one of the aliases:
///
/// - [`BinarySearchTree`](crate::BinarySearchTree) (`Tree<K, Unbalanced>`):
///   no rebalancing, equal keys are kept and descend to the right.
/// - [`RedBlackTree`](crate::RedBlackTree) (`Tree<K, RedBlack>`): red-black
///   balancing with O(log n) worst-case height; keys are unique.
/// - [`OrderStatisticTree`](crate::OrderStatisticTree)
///   (`Tree<K, OrderStatistic>`): a red-black tree that also answers
///   [`select`](Tree::select) and [`rank`](Tree::rank) in O(log n).
///
/// Nodes live in an arena owned by the tree and are addressed by
/// [`Position`]s. Every node carries its color and the size of its subtree
/// whatever the discipline, so [`len`](Tree::len) is O(1) everywhere.
///
/// It is a logic error for a key to be modified in such a way that its
/// ordering relative to any other key, as determined by the [`Ord`] trait,
/// changes while it is in the tree.
///
/// # Examples
///
/// ```
/// use rbos_tree::RedBlackTree;
///
/// let mut tree = RedBlackTree::new();
/// for key in [7, 11, 9, 18, 14, 19] {
///     tree.insert(key);
/// }
///
/// assert_eq!(tree.len(), 6);
/// assert_eq!(tree.first(), Some(&7));
/// assert_eq!(tree.last(), Some(&19));
/// assert!(tree.height() <= 3);
///
/// let fourteen = tree.search(&14).unwrap();
/// tree.remove(fourteen).unwrap();
/// assert!(!tree.contains(&14));
///
/// let keys: Vec<_> = tree.iter().copied().collect();
/// assert_eq!(keys, [7, 9, 11, 18, 19]);
/// ```
pub struct Tree<K, D: Discipline> {
    raw: RawTree<K>,
    _discipline: PhantomData<D>,
}

impl<K, D: Discipline> Tree<K, D> {
    /// Makes a new, empty tree.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::OrderStatisticTree;
    ///
    /// let mut tree = OrderStatisticTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Tree {
            raw: RawTree::new(),
            _discipline: PhantomData,
        }
    }

    /// Returns the number of keys in the tree.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree contains no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Removes every key, releasing all nodes at once.
    ///
    /// Every outstanding [`Position`] becomes invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::from([1, 2, 3]);
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.root(), None);
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    fn live(&self, position: Position) -> Option<Handle> {
        self.raw.is_live(position.0).then_some(position.0)
    }

    /// Returns the root position, or `None` if the tree is empty.
    #[must_use]
    pub fn root(&self) -> Option<Position> {
        Position::from_handle(self.raw.root())
    }

    /// Returns the key stored at `position`, or `None` if the position is not
    /// live.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&K> {
        self.live(position).map(|h| self.raw.key(h))
    }

    /// Returns the parent of `position`; `None` at the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// let two = tree.insert(2).unwrap();
    /// let one = tree.insert(1).unwrap();
    /// let three = tree.insert(3).unwrap();
    ///
    /// assert_eq!(tree.parent(one), Some(two));
    /// assert_eq!(tree.parent(two), None);
    /// assert_eq!(tree.left(two), Some(one));
    /// assert_eq!(tree.right(two), Some(three));
    /// ```
    #[must_use]
    pub fn parent(&self, position: Position) -> Option<Position> {
        self.live(position).and_then(|h| Position::from_handle(self.raw.parent(h)))
    }

    /// Returns the left child of `position`, if any.
    #[must_use]
    pub fn left(&self, position: Position) -> Option<Position> {
        self.live(position).and_then(|h| Position::from_handle(self.raw.left(h)))
    }

    /// Returns the right child of `position`, if any.
    #[must_use]
    pub fn right(&self, position: Position) -> Option<Position> {
        self.live(position).and_then(|h| Position::from_handle(self.raw.right(h)))
    }

    /// Returns the red-black color of `position`.
    ///
    /// Colors are only meaningful for the balanced disciplines; nodes of a
    /// [`BinarySearchTree`](crate::BinarySearchTree) keep whatever color they
    /// were created with.
    #[must_use]
    pub fn color(&self, position: Position) -> Option<Color> {
        self.live(position).map(|h| self.raw.color(h))
    }

    /// Returns the position of the smallest key, or `None` if the tree is empty.
    #[must_use]
    pub fn min(&self) -> Option<Position> {
        Position::from_handle(self.raw.min(self.raw.root()))
    }

    /// Returns the position of the largest key, or `None` if the tree is empty.
    #[must_use]
    pub fn max(&self) -> Option<Position> {
        Position::from_handle(self.raw.max(self.raw.root()))
    }

    /// Returns the smallest key, or `None` if the tree is empty.
    #[must_use]
    pub fn first(&self) -> Option<&K> {
        self.min().map(|p| self.raw.key(p.0))
    }

    /// Returns the largest key, or `None` if the tree is empty.
    #[must_use]
    pub fn last(&self) -> Option<&K> {
        self.max().map(|p| self.raw.key(p.0))
    }

    /// Returns the position that follows `position` in key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::RedBlackTree;
    ///
    /// let tree = RedBlackTree::from([10, 20, 30]);
    /// let twenty = tree.search(&20).unwrap();
    ///
    /// let next = tree.successor(twenty).unwrap();
    /// assert_eq!(tree.get(next), Some(&30));
    /// assert_eq!(tree.successor(next), None);
    ///
    /// let previous = tree.predecessor(twenty).unwrap();
    /// assert_eq!(tree.get(previous), Some(&10));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) for balanced disciplines.
    #[must_use]
    pub fn successor(&self, position: Position) -> Option<Position> {
        self.live(position).and_then(|h| Position::from_handle(self.raw.successor(h)))
    }

    /// Returns the position that precedes `position` in key order.
    #[must_use]
    pub fn predecessor(&self, position: Position) -> Option<Position> {
        self.live(position).and_then(|h| Position::from_handle(self.raw.predecessor(h)))
    }

    /// Returns the height of the tree: the number of edges on the longest
    /// root-to-leaf path, `0` for a single node and `-1` for an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::{BinarySearchTree, RedBlackTree};
    ///
    /// let empty: RedBlackTree<i32> = RedBlackTree::new();
    /// assert_eq!(empty.height(), -1);
    ///
    /// let chain: BinarySearchTree<_> = (0..8).collect();
    /// assert_eq!(chain.height(), 7);
    ///
    /// let balanced: RedBlackTree<_> = (0..8).collect();
    /// assert!(balanced.height() <= 4);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn height(&self) -> isize {
        self.raw.height(self.raw.root())
    }

    /// Returns the height of the subtree rooted at `position`, or `-1` if the
    /// position is not live.
    #[must_use]
    pub fn height_of(&self, position: Position) -> isize {
        self.live(position).map_or(-1, |h| self.raw.height(h))
    }

    /// Returns the number of edges between `position` and the root.
    #[must_use]
    pub fn depth(&self, position: Position) -> Option<usize> {
        self.live(position).map(|h| self.raw.depth(h))
    }

    /// Counts the nodes of the subtree rooted at `position` by walking it.
    ///
    /// The result always equals [`subtree_size`](Tree::subtree_size); this
    /// walk exists to cross-check the maintained sizes.
    ///
    /// # Complexity
    ///
    /// O(size of the subtree)
    #[must_use]
    pub fn count_descendants(&self, position: Position) -> usize {
        self.live(position).map_or(0, |h| self.raw.count_descendants(h))
    }

    /// Returns the maintained number of nodes in the subtree rooted at
    /// `position`, or `None` if the position is not live.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn subtree_size(&self, position: Position) -> Option<usize> {
        self.live(position).map(|h| self.raw.size(h))
    }

    /// Removes the node at `position` and returns its key.
    ///
    /// Balanced disciplines restore the red-black properties before
    /// returning. Other positions stay valid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if `position` does not name a live
    /// node. The tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::{Error, RedBlackTree};
    ///
    /// let mut tree = RedBlackTree::from([1, 2, 3]);
    /// let two = tree.search(&2).unwrap();
    ///
    /// assert_eq!(tree.remove(two), Ok(2));
    /// assert_eq!(tree.remove(two), Err(Error::InvalidPosition));
    /// assert_eq!(tree.len(), 2);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) for balanced disciplines.
    pub fn remove(&mut self, position: Position) -> Result<K, Error> {
        let handle = self.live(position).ok_or(Error::InvalidPosition)?;
        if D::BALANCED {
            Ok(self.raw.remove_balanced(handle))
        } else {
            Ok(self.raw.remove_unbalanced(handle))
        }
    }

    /// Returns an iterator over the keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::RedBlackTree;
    ///
    /// let tree = RedBlackTree::from([3, 1, 2]);
    /// let mut iter = tree.iter();
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&3));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.raw)
    }

    /// Returns a pre-order traversal: each node before its left subtree,
    /// the left subtree before the right.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::from([2, 1, 3]);
    /// let keys: Vec<_> = tree.preorder().map(|p| *tree.get(p).unwrap()).collect();
    /// assert_eq!(keys, [2, 1, 3]);
    /// ```
    pub fn preorder(&self) -> PreOrder<'_, K> {
        PreOrder::new(&self.raw)
    }

    /// Returns an in-order traversal, which visits positions in ascending
    /// key order.
    pub fn inorder(&self) -> InOrder<'_, K> {
        InOrder::new(&self.raw)
    }

    /// Returns a post-order traversal: both subtrees before their root.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::from([2, 1, 3]);
    /// let keys: Vec<_> = tree.postorder().map(|p| *tree.get(p).unwrap()).collect();
    /// assert_eq!(keys, [1, 3, 2]);
    /// ```
    pub fn postorder(&self) -> PostOrder<'_, K> {
        PostOrder::new(&self.raw)
    }
}

impl<K: Ord, D: Discipline> Tree<K, D> {
    /// Inserts `key` and returns its position.
    ///
    /// Balanced disciplines keep keys unique: if an equal key is already
    /// present the tree is unchanged and `None` is returned. An unbalanced
    /// tree always inserts, placing equal keys to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::{BinarySearchTree, RedBlackTree};
    ///
    /// let mut balanced = RedBlackTree::new();
    /// assert!(balanced.insert(1).is_some());
    /// assert!(balanced.insert(1).is_none());
    /// assert_eq!(balanced.len(), 1);
    ///
    /// let mut plain = BinarySearchTree::new();
    /// plain.insert(1);
    /// plain.insert(1);
    /// assert_eq!(plain.len(), 2);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) for balanced disciplines.
    pub fn insert(&mut self, key: K) -> Option<Position> {
        let handle = if D::BALANCED {
            self.raw.insert_balanced(key)?
        } else {
            self.raw.insert_unbalanced(key)
        };
        Some(Position(handle))
    }

    /// Returns the position holding `key`, or `None` if it is absent.
    ///
    /// With duplicate keys in an unbalanced tree, the first match met on the
    /// way down is returned.
    ///
    /// # Complexity
    ///
    /// O(log n) for balanced disciplines.
    #[must_use]
    pub fn search<Q>(&self, key: &Q) -> Option<Position>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        Position::from_handle(self.raw.search(key))
    }

    /// Searches only the subtree rooted at `from`.
    #[must_use]
    pub fn search_from<Q>(&self, from: Position, key: &Q) -> Option<Position>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.live(from).and_then(|h| Position::from_handle(self.raw.search_from(h, key)))
    }

    /// Returns `true` if the tree contains `key`.
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).is_some()
    }

    /// Removes one occurrence of `key` and returns it, or `None` if absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::OrderStatisticTree;
    ///
    /// let mut tree = OrderStatisticTree::from([1, 2, 3]);
    /// assert_eq!(tree.remove_key(&2), Some(2));
    /// assert_eq!(tree.remove_key(&2), None);
    /// ```
    pub fn remove_key<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let position = self.search(key)?;
        self.remove(position).ok()
    }
}

impl<K: Clone, D: Discipline> Clone for Tree<K, D> {
    fn clone(&self) -> Self {
        Tree {
            raw: self.raw.clone(),
            _discipline: PhantomData,
        }
    }
}

impl<K: PartialEq, D: Discipline> PartialEq for Tree<K, D> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, D: Discipline> Eq for Tree<K, D> {}

impl<K: fmt::Debug, D: Discipline> fmt::Debug for Tree<K, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K, D: Discipline> Default for Tree<K, D> {
    /// Creates an empty tree.
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, D: Discipline> FromIterator<K> for Tree<K, D> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, D: Discipline> Extend<K> for Tree<K, D> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.raw.reserve(iter.size_hint().0);
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K: Ord + Copy + 'a, D: Discipline> Extend<&'a K> for Tree<K, D> {
    fn extend<I: IntoIterator<Item = &'a K>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<K: Ord, D: Discipline, const N: usize> From<[K; N]> for Tree<K, D> {
    /// Converts a `[K; N]` into a tree.
    ///
    /// ```
    /// use rbos_tree::RedBlackTree;
    ///
    /// let tree1 = RedBlackTree::from([1, 2, 3, 4]);
    /// let tree2: RedBlackTree<_> = [1, 2, 3, 4].into();
    /// assert_eq!(tree1, tree2);
    /// ```
    fn from(keys: [K; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl<'a, K, D: Discipline> IntoIterator for &'a Tree<K, D> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

impl<K, D: Discipline> IntoIterator for Tree<K, D> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    /// Gets an owning iterator over the keys in ascending order.
    ///
    /// ```
    /// use rbos_tree::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::from([3, 1, 2, 1]);
    /// let keys: Vec<_> = tree.into_iter().collect();
    /// assert_eq!(keys, [1, 1, 2, 3]);
    /// ```
    fn into_iter(self) -> IntoIter<K> {
        IntoIter::new(self.raw)
    }
}
