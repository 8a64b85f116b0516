use super::handle::Handle;
use super::size::Size;

/// Node color for the red-black discipline.
///
/// Every node carries a color, but only the balanced disciplines read it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Returns `true` if the color is [`Red`](Color::Red).
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Red)
    }

    /// Returns `true` if the color is [`Black`](Color::Black).
    #[must_use]
    pub const fn is_black(self) -> bool {
        matches!(self, Self::Black)
    }
}

/// A direction in the tree, used to fold mirrored rotation and fixup cases.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

// Tree vertex. Links are sentinel-terminated: an absent child or the root's
// parent is `Handle::NIL`.
#[derive(Clone)]
pub(crate) struct Node<K> {
    key: K,
    parent: Handle,
    left: Handle,
    right: Handle,
    color: Color,
    // The number of nodes in the subtree rooted here, including this one.
    size: Size,
}

impl<K> Node<K> {
    /// Creates a detached red node with a subtree size of one.
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            parent: Handle::NIL,
            left: Handle::NIL,
            right: Handle::NIL,
            color: Color::Red,
            size: Size::ONE,
        }
    }

    #[inline]
    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    pub(crate) fn into_key(self) -> K {
        self.key
    }

    #[inline]
    pub(crate) fn parent(&self) -> Handle {
        self.parent
    }

    #[inline]
    pub(crate) fn set_parent(&mut self, parent: Handle) {
        self.parent = parent;
    }

    #[inline]
    pub(crate) fn child(&self, side: Side) -> Handle {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, side: Side, child: Handle) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    #[inline]
    pub(crate) fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    #[inline]
    pub(crate) fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub(crate) fn set_size(&mut self, size: Size) {
        self.size = size;
    }
}
