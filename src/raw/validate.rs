use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use super::handle::Handle;
use super::raw_tree::{RawTree, Stack};

impl<K: Ord> RawTree<K> {
    /// Validates links, sizes and key order. Panics with a descriptive message
    /// if anything is off. Duplicate keys are tolerated.
    pub(crate) fn validate_bst(&self) {
        let mut errors: Vec<String> = Vec::new();
        self.collect_structure_errors(&mut errors);
        assert!(errors.is_empty(), "Tree invariant violations:\n{}", errors.join("\n"));
    }

    /// Validates everything [`validate_bst`](Self::validate_bst) does, plus
    /// strictly increasing keys, the four red-black properties and the height
    /// bound.
    pub(crate) fn validate_invariants(&self) {
        let mut errors: Vec<String> = Vec::new();
        self.collect_structure_errors(&mut errors);

        let root = self.root();
        if !root.is_nil() {
            if self.is_red(root) {
                errors.push(format!("root {root:?} is red"));
            }
            let mut previous: Option<&K> = None;
            let mut current = self.min(root);
            while !current.is_nil() {
                let key = self.key(current);
                if previous.is_some_and(|p| p >= key) {
                    errors.push(format!("duplicate or unordered key at {current:?}"));
                }
                previous = Some(key);
                current = self.successor(current);
            }
            self.black_height(root, &mut errors);

            let len = self.len();
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
            let bound = 2.0 * ((len + 1) as f64).log2();
            #[allow(clippy::cast_precision_loss)]
            let height = self.height(root) as f64;
            if height > bound {
                errors.push(format!("height {height} exceeds {bound} for {len} nodes"));
            }
        }

        assert!(errors.is_empty(), "Tree invariant violations:\n{}", errors.join("\n"));
    }

    fn collect_structure_errors(&self, errors: &mut Vec<String>) {
        let root = self.root();
        if root.is_nil() {
            if !self.is_empty() {
                errors.push(String::from("root is the sentinel but nodes are still allocated"));
            }
            return;
        }
        if !self.parent(root).is_nil() {
            errors.push(format!("root {root:?} has a parent"));
        }

        let mut visited = 0;
        let mut stack: Stack<Handle> = Stack::new();
        stack.push(root);
        while let Some(node) = stack.pop() {
            visited += 1;
            let left = self.left(node);
            let right = self.right(node);

            let expected = 1 + self.size(left) + self.size(right);
            if self.size(node) != expected {
                errors.push(format!("size of {node:?} is {}, expected {expected}", self.size(node)));
            }

            if !left.is_nil() {
                if self.parent(left) != node {
                    errors.push(format!("left child {left:?} of {node:?} points elsewhere"));
                }
                if self.key(left) > self.key(node) {
                    errors.push(format!("left child {left:?} of {node:?} has a larger key"));
                }
                stack.push(left);
            }
            if !right.is_nil() {
                if self.parent(right) != node {
                    errors.push(format!("right child {right:?} of {node:?} points elsewhere"));
                }
                if self.key(right) < self.key(node) {
                    errors.push(format!("right child {right:?} of {node:?} has a smaller key"));
                }
                stack.push(right);
            }
        }

        if visited != self.len() {
            errors.push(format!("root size {} but {visited} nodes reachable", self.len()));
        }

        let mut previous: Option<&K> = None;
        let mut current = self.min(root);
        while !current.is_nil() {
            let key = self.key(current);
            if previous.is_some_and(|p| p > key) {
                errors.push(format!("in-order walk decreases at {current:?}"));
            }
            previous = Some(key);
            current = self.successor(current);
        }
    }

    // Black nodes from `node` (exclusive) down to any sentinel (inclusive).
    fn black_height(&self, node: Handle, errors: &mut Vec<String>) -> usize {
        if node.is_nil() {
            return 1;
        }
        let left = self.left(node);
        let right = self.right(node);
        if self.is_red(node) && (self.is_red(left) || self.is_red(right)) {
            errors.push(format!("red node {node:?} has a red child"));
        }
        let count = |child: Handle| usize::from(self.is_black(child) && !child.is_nil());
        let left_height = self.black_height(left, errors) + count(left);
        let right_height = self.black_height(right, errors) + count(right);
        if left_height != right_height {
            errors.push(format!("black height differs under {node:?}: {left_height} vs {right_height}"));
        }
        left_height
    }
}
