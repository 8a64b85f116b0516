use super::handle::Handle;
use super::node::{Color, Side};
use super::raw_tree::RawTree;

impl<K> RawTree<K> {
    /// Rotates around `x`. `Side::Left` lifts `x`'s right child into `x`'s
    /// place and lowers `x` to its left; `Side::Right` is the mirror image.
    ///
    /// Only links change. Colors are the fixups' business and sizes are
    /// repaired by [`rotate_maintaining_sizes`](Self::rotate_maintaining_sizes).
    pub(crate) fn rotate(&mut self, x: Handle, side: Side) {
        let rise = side.opposite();
        let y = self.child(x, rise);
        assert!(!y.is_nil(), "`RawTree::rotate()` - no child to lift!");
        log::trace!("rotating {side:?} around {x:?}, lifting {y:?}");

        let inner = self.child(y, side);
        self.set_child(x, rise, inner);
        self.transplant(x, y);
        self.set_child(y, side, x);
    }

    /// Restores the red-black properties after attaching the red node `z`.
    fn insert_fixup(&mut self, mut z: Handle) {
        while self.is_red(self.parent(z)) {
            let parent = self.parent(z);
            let grandparent = self.parent(parent);
            let side = self.side_of(parent);
            let uncle = self.child(grandparent, side.opposite());

            if self.is_red(uncle) {
                log::trace!("insert fixup at {z:?}: red uncle, recoloring");
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                z = grandparent;
                continue;
            }

            if z == self.child(parent, side.opposite()) {
                log::trace!("insert fixup at {z:?}: inner child, straightening");
                z = parent;
                self.rotate_maintaining_sizes(z, side);
            }

            log::trace!("insert fixup at {z:?}: outer child, rotating grandparent");
            let parent = self.parent(z);
            let grandparent = self.parent(parent);
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.rotate_maintaining_sizes(grandparent, side.opposite());
        }

        let root = self.root();
        self.set_color(root, Color::Black);
    }

    /// Restores the red-black properties after a black node left the tree
    /// and `x` took its place carrying an extra black.
    fn delete_fixup(&mut self, mut x: Handle) {
        while x != self.root() && self.is_black(x) {
            let parent = self.parent(x);
            let side = self.side_of(x);
            let far = side.opposite();
            let mut sibling = self.child(parent, far);

            if self.is_red(sibling) {
                log::trace!("delete fixup at {x:?}: red sibling {sibling:?}");
                self.set_color(sibling, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate_maintaining_sizes(parent, side);
                sibling = self.child(parent, far);
            }

            if self.is_black(self.left(sibling)) && self.is_black(self.right(sibling)) {
                log::trace!("delete fixup at {x:?}: black nephews, moving up");
                self.set_color(sibling, Color::Red);
                x = parent;
                continue;
            }

            if self.is_black(self.child(sibling, far)) {
                log::trace!("delete fixup at {x:?}: red near nephew, rotating sibling");
                let near = self.child(sibling, side);
                self.set_color(near, Color::Black);
                self.set_color(sibling, Color::Red);
                self.rotate_maintaining_sizes(sibling, far);
                sibling = self.child(parent, far);
            }

            log::trace!("delete fixup at {x:?}: red far nephew, rotating parent");
            self.set_color(sibling, self.color(parent));
            self.set_color(parent, Color::Black);
            let far_nephew = self.child(sibling, far);
            self.set_color(far_nephew, Color::Black);
            self.rotate_maintaining_sizes(parent, side);
            x = self.root();
        }

        self.set_color(x, Color::Black);
    }

    /// Removes `z` and rebalances. Returns the removed key.
    pub(crate) fn remove_balanced(&mut self, z: Handle) -> K {
        let (x, removed) = self.unlink(z);
        if removed.is_black() {
            self.delete_fixup(x);
        }
        // The sentinel's parent is scratch space for the fixup only.
        self.set_parent(Handle::NIL, Handle::NIL);
        self.dealloc(z)
    }
}

impl<K: Ord> RawTree<K> {
    /// Inserts `key` and rebalances. Returns `None` if `key` is already present.
    pub(crate) fn insert_balanced(&mut self, key: K) -> Option<Handle> {
        let z = self.attach(key, false)?;
        self.insert_fixup(z);
        Some(z)
    }
}
