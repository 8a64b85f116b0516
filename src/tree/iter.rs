use core::fmt;
use core::iter::FusedIterator;

use crate::Position;
use crate::raw::{self, RawTree};

/// An iterator over the keys of a [`Tree`](crate::Tree) in ascending order.
///
/// This `struct` is created by the [`iter`](crate::Tree::iter) method.
pub struct Iter<'a, K> {
    tree: &'a RawTree<K>,
    inner: raw::InOrder<'a, K>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(super) fn new(tree: &'a RawTree<K>) -> Self {
        Iter {
            tree,
            inner: tree.inorder(),
            remaining: tree.len(),
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let handle = self.inner.next()?;
        self.remaining -= 1;
        Some(self.tree.key(handle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K> FusedIterator for Iter<'_, K> {}

impl<K> fmt::Debug for Iter<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("remaining", &self.remaining).finish()
    }
}

// The three position traversals differ only in the raw walk they wrap.
macro_rules! position_traversal {
    ($(#[$doc:meta])* $name:ident, $method:ident) => {
        $(#[$doc])*
        pub struct $name<'a, K> {
            inner: raw::$name<'a, K>,
            remaining: usize,
        }

        impl<'a, K> $name<'a, K> {
            pub(super) fn new(tree: &'a RawTree<K>) -> Self {
                $name {
                    inner: tree.$method(),
                    remaining: tree.len(),
                }
            }
        }

        impl<K> Iterator for $name<'_, K> {
            type Item = Position;

            fn next(&mut self) -> Option<Position> {
                let handle = self.inner.next()?;
                self.remaining -= 1;
                Some(Position(handle))
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                (self.remaining, Some(self.remaining))
            }
        }

        impl<K> ExactSizeIterator for $name<'_, K> {
            fn len(&self) -> usize {
                self.remaining
            }
        }

        impl<K> FusedIterator for $name<'_, K> {}

        impl<K> fmt::Debug for $name<'_, K> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name)).field("remaining", &self.remaining).finish()
            }
        }
    };
}

position_traversal!(
    /// A pre-order traversal of a [`Tree`](crate::Tree)'s positions.
    ///
    /// This `struct` is created by the [`preorder`](crate::Tree::preorder)
    /// method.
    PreOrder,
    preorder
);

position_traversal!(
    /// An in-order traversal of a [`Tree`](crate::Tree)'s positions.
    ///
    /// This `struct` is created by the [`inorder`](crate::Tree::inorder)
    /// method.
    InOrder,
    inorder
);

position_traversal!(
    /// A post-order traversal of a [`Tree`](crate::Tree)'s positions.
    ///
    /// This `struct` is created by the [`postorder`](crate::Tree::postorder)
    /// method.
    PostOrder,
    postorder
);

/// An owning iterator over the keys of a [`Tree`](crate::Tree) in ascending
/// order.
///
/// This `struct` is created by the `into_iter` method on `Tree`.
pub struct IntoIter<K> {
    tree: RawTree<K>,
}

impl<K> IntoIter<K> {
    pub(super) fn new(tree: RawTree<K>) -> Self {
        IntoIter { tree }
    }
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        let min = self.tree.min(self.tree.root());
        // Colors are dead weight once draining starts.
        (!min.is_nil()).then(|| self.tree.remove_unbalanced(min))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.tree.len();
        (len, Some(len))
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {
    fn len(&self) -> usize {
        self.tree.len()
    }
}

impl<K> FusedIterator for IntoIter<K> {}

impl<K: fmt::Debug> fmt::Debug for IntoIter<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tree.inorder().map(|h| self.tree.key(h))).finish()
    }
}
