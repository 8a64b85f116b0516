mod arena;
mod bst;
mod handle;
mod node;
mod order_statistic;
mod raw_tree;
mod red_black;
mod size;
mod traversal;
#[cfg(test)]
mod validate;

pub(crate) use handle::Handle;
pub use node::Color;
pub(crate) use raw_tree::{RawTree, Stack};
pub(crate) use traversal::{InOrder, PostOrder, PreOrder};
