//! Arena-backed binary search trees for Rust: plain, red-black, and
//! order-statistic.
//!
//! All three trees share one node layout and one generic type, [`Tree`],
//! parameterized by a compile-time [`Discipline`]:
//!
//! - [`BinarySearchTree`] - no rebalancing; equal keys are kept
//! - [`RedBlackTree`] - worst-case O(log n) height; unique keys
//! - [`OrderStatisticTree`] - a red-black tree with O(log n)
//!   [`select`](Tree::select) and [`rank`](Tree::rank), and indexing by [`Rank`]
//!
//! # Example
//!
//! ```
//! use rbos_tree::{OrderStatisticTree, Rank};
//!
//! let mut scores = OrderStatisticTree::new();
//! for score in [88, 95, 61, 74, 99] {
//!     scores.insert(score);
//! }
//!
//! // The median is the key of rank len / 2.
//! assert_eq!(scores.select(scores.len() / 2), Ok(&88));
//!
//! // How many scores are below 95?
//! assert_eq!(scores.rank(&95), Ok(3));
//!
//! // Index by rank.
//! assert_eq!(scores[Rank(0)], 61);
//!
//! // Every key in [70, 90].
//! assert_eq!(scores.range_query(&70, &90), [&74, &88]);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Stable positions** - Nodes are addressed by [`Position`]s that survive
//!   unrelated inserts and removals
//! - **No unsafe code** - Links are arena indices, not pointers
//! - **Iterative walks** - Traversals and queries never recurse, so degenerate
//!   unbalanced trees cannot overflow the stack
//!
//! # Implementation
//!
//! Nodes live in a slot arena with a free list. Absent children and the
//! root's parent are a reserved sentinel handle that reads as a black node of
//! size zero, which lets the red-black fixups run without special cases.
//! Every node carries its subtree size, maintained through insertion,
//! removal and rotation, so [`Tree::len`] is O(1) for all disciplines.
//!
//! Rotations, fixup cases and bulk events are reported through the [`log`]
//! facade at `trace` and `debug` level. No logger is installed by this crate.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;
#[cfg(test)]
extern crate std;

mod discipline;
mod error;
mod order_statistic;
mod position;
mod raw;
mod tree;

pub use discipline::{Discipline, OrderStatistic, RedBlack, Unbalanced};
pub use error::Error;
pub use order_statistic::Rank;
pub use position::Position;
pub use raw::Color;
pub use tree::{InOrder, IntoIter, Iter, PostOrder, PreOrder, Tree};

/// A binary search tree without rebalancing. Equal keys are kept.
pub type BinarySearchTree<K> = Tree<K, Unbalanced>;

/// A red-black tree with unique keys.
pub type RedBlackTree<K> = Tree<K, RedBlack>;

/// A red-black tree augmented with subtree sizes for rank queries.
pub type OrderStatisticTree<K> = Tree<K, OrderStatistic>;
