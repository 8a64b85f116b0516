use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Color, Node, Side};
use super::size::Size;

/// Work stack used by the iterative walks. Sixty-four entries cover any
/// balanced tree that fits in the arena without spilling to the heap.
pub(crate) type Stack<T> = SmallVec<[T; 64]>;

/// The node store and link plumbing shared by every tree discipline.
///
/// All absent positions are represented by [`Handle::NIL`]. The sentinel has
/// no arena slot: its color is always black, its size zero, its children
/// itself, and its one mutable field (the parent link) lives in `nil_parent`.
#[derive(Clone)]
pub(crate) struct RawTree<K> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<K>>,
    /// Handle to the root node, or `NIL` if the tree is empty.
    root: Handle,
    /// Parent link of the sentinel. Delete-fixup reads it when the node that
    /// replaced a removed black node is the sentinel itself.
    nil_parent: Handle,
}

impl<K> RawTree<K> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: Handle::NIL,
            nil_parent: Handle::NIL,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: Handle::NIL,
            nil_parent: Handle::NIL,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        log::debug!("reserving room for {additional} additional nodes");
        self.nodes.reserve(additional);
    }

    /// Returns the number of nodes in the tree.
    pub(crate) fn len(&self) -> usize {
        self.size(self.root)
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Releases every node at once.
    pub(crate) fn clear(&mut self) {
        log::debug!("clearing tree of {} nodes", self.nodes.len());
        self.nodes.clear();
        self.root = Handle::NIL;
        self.nil_parent = Handle::NIL;
    }

    /// Returns `true` if `handle` names a live node of this tree.
    pub(crate) fn is_live(&self, handle: Handle) -> bool {
        self.nodes.contains(handle)
    }

    pub(crate) fn alloc(&mut self, key: K) -> Handle {
        self.nodes.alloc(Node::new(key))
    }

    /// Frees a node that has already been unlinked and returns its key.
    pub(crate) fn dealloc(&mut self, handle: Handle) -> K {
        self.nodes.take(handle).into_key()
    }

    #[inline]
    pub(crate) fn root(&self) -> Handle {
        self.root
    }

    #[inline]
    pub(crate) fn key(&self, handle: Handle) -> &K {
        self.nodes.get(handle).key()
    }

    #[inline]
    pub(crate) fn parent(&self, handle: Handle) -> Handle {
        if handle.is_nil() {
            self.nil_parent
        } else {
            self.nodes.get(handle).parent()
        }
    }

    #[inline]
    pub(crate) fn child(&self, handle: Handle, side: Side) -> Handle {
        if handle.is_nil() {
            Handle::NIL
        } else {
            self.nodes.get(handle).child(side)
        }
    }

    #[inline]
    pub(crate) fn left(&self, handle: Handle) -> Handle {
        self.child(handle, Side::Left)
    }

    #[inline]
    pub(crate) fn right(&self, handle: Handle) -> Handle {
        self.child(handle, Side::Right)
    }

    #[inline]
    pub(crate) fn color(&self, handle: Handle) -> Color {
        if handle.is_nil() {
            Color::Black
        } else {
            self.nodes.get(handle).color()
        }
    }

    #[inline]
    pub(crate) fn is_red(&self, handle: Handle) -> bool {
        self.color(handle).is_red()
    }

    #[inline]
    pub(crate) fn is_black(&self, handle: Handle) -> bool {
        self.color(handle).is_black()
    }

    /// Returns the subtree size of `handle`; zero for the sentinel.
    #[inline]
    pub(crate) fn size(&self, handle: Handle) -> usize {
        if handle.is_nil() {
            0
        } else {
            self.nodes.get(handle).size().to_usize()
        }
    }

    /// Which side of its parent `handle` hangs from. The root and the
    /// sentinel's current parent both resolve through `parent`.
    #[inline]
    pub(crate) fn side_of(&self, handle: Handle) -> Side {
        if self.left(self.parent(handle)) == handle {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Sets the parent link. Writing through the sentinel updates `nil_parent`.
    #[inline]
    pub(crate) fn set_parent(&mut self, handle: Handle, parent: Handle) {
        if handle.is_nil() {
            self.nil_parent = parent;
        } else {
            self.nodes.get_mut(handle).set_parent(parent);
        }
    }

    /// Stores `child` in `parent`'s `side` slot and points `child` back at
    /// `parent`. The sentinel's parent is left alone.
    pub(crate) fn set_child(&mut self, parent: Handle, side: Side, child: Handle) {
        self.nodes.get_mut(parent).set_child(side, child);
        if !child.is_nil() {
            self.nodes.get_mut(child).set_parent(parent);
        }
    }

    pub(crate) fn set_left(&mut self, parent: Handle, child: Handle) {
        self.set_child(parent, Side::Left, child);
    }

    pub(crate) fn set_right(&mut self, parent: Handle, child: Handle) {
        self.set_child(parent, Side::Right, child);
    }

    /// Rewrites only `parent`'s child slot, leaving back-references untouched.
    #[inline]
    pub(crate) fn replace_child_slot(&mut self, parent: Handle, side: Side, child: Handle) {
        self.nodes.get_mut(parent).set_child(side, child);
    }

    /// Makes `handle` the root and clears its parent link.
    pub(crate) fn set_root(&mut self, handle: Handle) {
        self.root = handle;
        if !handle.is_nil() {
            self.nodes.get_mut(handle).set_parent(Handle::NIL);
        }
    }

    /// Updates the root slot only; used by `transplant` and `rotate`, which
    /// maintain the parent link themselves.
    #[inline]
    pub(crate) fn replace_root_slot(&mut self, handle: Handle) {
        self.root = handle;
    }

    #[inline]
    pub(crate) fn set_color(&mut self, handle: Handle, color: Color) {
        if handle.is_nil() {
            debug_assert!(color.is_black(), "the sentinel must stay black");
        } else {
            self.nodes.get_mut(handle).set_color(color);
        }
    }

    #[inline]
    pub(crate) fn set_size(&mut self, handle: Handle, size: usize) {
        if handle.is_nil() {
            debug_assert_eq!(size, 0, "the sentinel must stay empty");
        } else {
            self.nodes.get_mut(handle).set_size(Size::from_usize(size));
        }
    }

    #[inline]
    pub(crate) fn node_size(&self, handle: Handle) -> Size {
        self.nodes.get(handle).size()
    }

    #[inline]
    pub(crate) fn set_node_size(&mut self, handle: Handle, size: Size) {
        self.nodes.get_mut(handle).set_size(size);
    }

    /// Height of the subtree rooted at `handle`: `-1` for the sentinel, `0`
    /// for a single node.
    pub(crate) fn height(&self, handle: Handle) -> isize {
        let mut height = -1;
        let mut stack: Stack<(Handle, isize)> = SmallVec::new();
        if !handle.is_nil() {
            stack.push((handle, 0));
        }
        while let Some((current, depth)) = stack.pop() {
            height = height.max(depth);
            for side in [Side::Left, Side::Right] {
                let child = self.child(current, side);
                if !child.is_nil() {
                    stack.push((child, depth + 1));
                }
            }
        }
        height
    }

    /// Counts the nodes of the subtree rooted at `handle` by walking it.
    pub(crate) fn count_descendants(&self, handle: Handle) -> usize {
        let mut count = 0;
        let mut stack: Stack<Handle> = SmallVec::new();
        if !handle.is_nil() {
            stack.push(handle);
        }
        while let Some(current) = stack.pop() {
            count += 1;
            for side in [Side::Left, Side::Right] {
                let child = self.child(current, side);
                if !child.is_nil() {
                    stack.push(child);
                }
            }
        }
        count
    }

    /// Number of edges between `handle` and the root.
    pub(crate) fn depth(&self, handle: Handle) -> usize {
        let mut depth = 0;
        let mut current = self.parent(handle);
        while !current.is_nil() {
            depth += 1;
            current = self.parent(current);
        }
        depth
    }

    #[cfg(test)]
    pub(crate) fn nil_parent(&self) -> Handle {
        self.nil_parent
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Builds the fixture
    ///
    /// ```text
    ///         0
    ///       /   \
    ///      1     2
    ///     / \
    ///    3   4
    ///         \
    ///          5
    /// ```
    fn fixture() -> (RawTree<i32>, [Handle; 6]) {
        let mut tree = RawTree::new();
        let nodes: [Handle; 6] = core::array::from_fn(|i| tree.alloc(i as i32));
        tree.set_root(nodes[0]);
        tree.set_left(nodes[0], nodes[1]);
        tree.set_right(nodes[0], nodes[2]);
        tree.set_left(nodes[1], nodes[3]);
        tree.set_right(nodes[1], nodes[4]);
        tree.set_right(nodes[4], nodes[5]);
        (tree, nodes)
    }

    #[test]
    fn accessors_follow_links() {
        let (tree, n) = fixture();
        let nil = Handle::NIL;
        let expected = [
            (nil, n[1], n[2]),
            (n[0], n[3], n[4]),
            (n[0], nil, nil),
            (n[1], nil, nil),
            (n[1], nil, n[5]),
            (n[4], nil, nil),
        ];

        for (i, &(parent, left, right)) in expected.iter().enumerate() {
            assert_eq!(tree.parent(n[i]), parent, "parent of {i}");
            assert_eq!(tree.left(n[i]), left, "left of {i}");
            assert_eq!(tree.right(n[i]), right, "right of {i}");
            assert_eq!(*tree.key(n[i]), i as i32);
        }
    }

    #[test]
    fn depth_counts_edges_to_root() {
        let (tree, n) = fixture();
        let expected = [0, 1, 1, 2, 2, 3];
        for (i, &depth) in expected.iter().enumerate() {
            assert_eq!(tree.depth(n[i]), depth, "depth of {i}");
        }
    }

    #[test]
    fn height_and_descendants() {
        let (tree, n) = fixture();
        assert_eq!(tree.height(Handle::NIL), -1);
        assert_eq!(tree.height(n[0]), 3);
        assert_eq!(tree.height(n[1]), 2);
        assert_eq!(tree.height(n[2]), 0);
        assert_eq!(tree.count_descendants(Handle::NIL), 0);
        assert_eq!(tree.count_descendants(n[0]), 6);
        assert_eq!(tree.count_descendants(n[1]), 4);
        assert_eq!(tree.count_descendants(n[4]), 2);
    }

    #[test]
    fn sentinel_reads() {
        let mut tree: RawTree<i32> = RawTree::new();
        assert!(tree.is_black(Handle::NIL));
        assert_eq!(tree.size(Handle::NIL), 0);
        assert!(tree.left(Handle::NIL).is_nil());
        assert!(tree.right(Handle::NIL).is_nil());

        let a = tree.alloc(1);
        tree.set_parent(Handle::NIL, a);
        assert_eq!(tree.parent(Handle::NIL), a);
        assert_eq!(tree.nil_parent(), a);
    }

    #[test]
    fn set_child_skips_sentinel_back_reference() {
        let mut tree: RawTree<i32> = RawTree::new();
        let a = tree.alloc(1);
        let b = tree.alloc(2);
        tree.set_root(a);
        tree.set_parent(Handle::NIL, b);
        tree.set_left(a, Handle::NIL);
        assert_eq!(tree.nil_parent(), b);
    }

    #[test]
    fn set_root_clears_parent() {
        let (mut tree, n) = fixture();
        tree.set_root(n[1]);
        assert_eq!(tree.root(), n[1]);
        assert!(tree.parent(n[1]).is_nil());
    }

    #[test]
    fn clear_releases_everything() {
        let (mut tree, n) = fixture();
        tree.clear();
        assert!(tree.root().is_nil());
        assert!(tree.is_empty());
        assert!(!tree.is_live(n[0]));
    }
}
