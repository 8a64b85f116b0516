use core::borrow::Borrow;
use core::cmp::Ordering;

use super::handle::Handle;
use super::node::{Color, Side};
use super::raw_tree::RawTree;

/// Outcome of looking for the slot a new key belongs in.
pub(crate) enum Slot {
    /// The key is already stored at this node.
    Occupied(Handle),
    /// The key belongs in `side` of `parent` (`parent` is `NIL` for an empty tree).
    Vacant { parent: Handle, side: Side },
}

impl<K> RawTree<K> {
    /// Leftmost node of the subtree rooted at `handle`.
    pub(crate) fn min(&self, mut handle: Handle) -> Handle {
        if handle.is_nil() {
            return handle;
        }
        while !self.left(handle).is_nil() {
            handle = self.left(handle);
        }
        handle
    }

    /// Rightmost node of the subtree rooted at `handle`.
    pub(crate) fn max(&self, mut handle: Handle) -> Handle {
        if handle.is_nil() {
            return handle;
        }
        while !self.right(handle).is_nil() {
            handle = self.right(handle);
        }
        handle
    }

    /// Next node in key order, or `NIL` for the maximum.
    pub(crate) fn successor(&self, handle: Handle) -> Handle {
        self.neighbor(handle, Side::Right)
    }

    /// Previous node in key order, or `NIL` for the minimum.
    pub(crate) fn predecessor(&self, handle: Handle) -> Handle {
        self.neighbor(handle, Side::Left)
    }

    // Successor for `Side::Right`, predecessor for `Side::Left`.
    fn neighbor(&self, mut handle: Handle, side: Side) -> Handle {
        let child = self.child(handle, side);
        if !child.is_nil() {
            return match side {
                Side::Right => self.min(child),
                Side::Left => self.max(child),
            };
        }
        let mut parent = self.parent(handle);
        while !parent.is_nil() && handle == self.child(parent, side) {
            handle = parent;
            parent = self.parent(parent);
        }
        parent
    }

    /// Replaces the subtree rooted at `u` with the subtree rooted at `v`, as
    /// seen from `u`'s parent. `v`'s parent link is written even when `v` is
    /// the sentinel. `u`'s own links are left as they were.
    pub(crate) fn transplant(&mut self, u: Handle, v: Handle) {
        let parent = self.parent(u);
        if parent.is_nil() {
            self.replace_root_slot(v);
        } else {
            let side = self.side_of(u);
            self.replace_child_slot(parent, side, v);
        }
        self.set_parent(v, parent);
    }

    /// Detaches `z` from the tree with the three-case deletion, keeping every
    /// ancestor's size exact. `z` is not freed.
    ///
    /// Returns the node that now occupies the vacated position (possibly the
    /// sentinel, whose parent link is then valid) and the color that left the
    /// tree: `z`'s own color, or that of its successor when the successor was
    /// moved into `z`'s place.
    pub(crate) fn unlink(&mut self, z: Handle) -> (Handle, Color) {
        let left = self.left(z);
        let right = self.right(z);

        if left.is_nil() || right.is_nil() {
            let x = if left.is_nil() { right } else { left };
            self.decrement_sizes_from(self.parent(z));
            self.transplant(z, x);
            return (x, self.color(z));
        }

        let y = self.min(right);
        let removed_color = self.color(y);
        let x = self.right(y);

        // Every ancestor of `y`'s old position, `z` included, loses one node.
        self.decrement_sizes_from(self.parent(y));

        if self.parent(y) == z {
            self.set_parent(x, y);
        } else {
            self.transplant(y, x);
            self.set_right(y, right);
        }
        self.transplant(z, y);
        self.set_left(y, left);
        self.set_color(y, self.color(z));
        self.set_node_size(y, self.node_size(z));

        (x, removed_color)
    }

    /// Removes `z` without rebalancing and returns its key.
    pub(crate) fn remove_unbalanced(&mut self, z: Handle) -> K {
        self.unlink(z);
        if self.root().is_nil() {
            self.set_parent(Handle::NIL, Handle::NIL);
        }
        self.dealloc(z)
    }
}

impl<K: Ord> RawTree<K> {
    /// Searches the subtree rooted at `from` for `key`. Returns `NIL` if absent.
    pub(crate) fn search_from<Q>(&self, mut from: Handle, key: &Q) -> Handle
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        while !from.is_nil() {
            match key.cmp(self.key(from).borrow()) {
                Ordering::Less => from = self.left(from),
                Ordering::Greater => from = self.right(from),
                Ordering::Equal => return from,
            }
        }
        from
    }

    /// Searches the whole tree for `key`. Returns `NIL` if absent.
    pub(crate) fn search<Q>(&self, key: &Q) -> Handle
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search_from(self.root(), key)
    }

    /// Finds where `key` would be attached. With `allow_duplicates`, equal
    /// keys descend to the right and the slot is always vacant.
    pub(crate) fn find_slot(&self, key: &K, allow_duplicates: bool) -> Slot {
        let mut parent = Handle::NIL;
        let mut side = Side::Left;
        let mut current = self.root();

        while !current.is_nil() {
            parent = current;
            side = match key.cmp(self.key(current)) {
                Ordering::Less => Side::Left,
                Ordering::Equal if !allow_duplicates => return Slot::Occupied(current),
                Ordering::Equal | Ordering::Greater => Side::Right,
            };
            current = self.child(current, side);
        }

        Slot::Vacant { parent, side }
    }

    /// Attaches a new red leaf holding `key` at the slot found by
    /// [`find_slot`](Self::find_slot). Every ancestor gains one in size.
    ///
    /// Returns `None` if duplicates are not allowed and `key` is present.
    pub(crate) fn attach(&mut self, key: K, allow_duplicates: bool) -> Option<Handle> {
        let Slot::Vacant { parent, side } = self.find_slot(&key, allow_duplicates) else {
            return None;
        };

        let z = self.alloc(key);
        if parent.is_nil() {
            self.set_root(z);
        } else {
            self.set_child(parent, side, z);
            self.increment_sizes_from(parent);
        }
        Some(z)
    }

    /// Inserts `key` without rebalancing. Equal keys go to the right.
    pub(crate) fn insert_unbalanced(&mut self, key: K) -> Handle {
        match self.attach(key, true) {
            Some(z) => z,
            None => unreachable!("duplicates are allowed"),
        }
    }
}
