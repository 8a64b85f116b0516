//! Compile-time selection of a tree's balancing and augmentation behavior.
//!
//! A [`Tree`](crate::Tree) is parameterized by one of the marker types in this
//! module. The marker decides how `insert` and `remove` restructure the tree
//! and which extra operations are available; the node layout is the same for
//! all of them.

/// The behavior a [`Tree`](crate::Tree) follows on insertion and removal.
///
/// The node layout and size bookkeeping do not depend on the discipline, so
/// the constant is the whole contract.
pub trait Discipline {
    /// Whether inserts and removals run the red-black fixups. Balanced trees
    /// keep keys unique; unbalanced trees store equal keys to the right.
    const BALANCED: bool;
}

/// Plain binary search tree: no rebalancing, equal keys descend to the right.
#[derive(Debug)]
pub enum Unbalanced {}

/// Red-black tree: worst-case O(log n) height, unique keys.
#[derive(Debug)]
pub enum RedBlack {}

/// Red-black tree exposing `select` and `rank` over its subtree sizes.
#[derive(Debug)]
pub enum OrderStatistic {}

impl Discipline for Unbalanced {
    const BALANCED: bool = false;
}

impl Discipline for RedBlack {
    const BALANCED: bool = true;
}

impl Discipline for OrderStatistic {
    const BALANCED: bool = true;
}
