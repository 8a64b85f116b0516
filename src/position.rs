use crate::raw::Handle;

/// A node of a [`Tree`](crate::Tree), as returned by searches and traversals.
///
/// A position stays valid until the node it names is removed or the tree is
/// cleared. Rotations and removals of *other* nodes move the node around but
/// never invalidate its position.
///
/// Positions are plain indices. Using one with a tree it did not come from,
/// or after its node was removed and the slot reused, is a logic error: the
/// result is unspecified but memory safe.
///
/// # Examples
///
/// ```
/// use rbos_tree::RedBlackTree;
///
/// let mut tree = RedBlackTree::new();
/// let five = tree.insert(5).unwrap();
/// tree.insert(3);
/// tree.insert(8);
///
/// assert_eq!(tree.get(five), Some(&5));
/// assert_eq!(tree.search(&5), Some(five));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Position(pub(crate) Handle);

impl Position {
    /// Wraps a raw handle, mapping the sentinel to `None`.
    #[inline]
    pub(crate) fn from_handle(handle: Handle) -> Option<Self> {
        (!handle.is_nil()).then_some(Self(handle))
    }
}
