use std::collections::BTreeSet;

use proptest::prelude::*;
use rbos_tree::{Error, OrderStatisticTree, Rank};

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 5_000;

/// Generates values in a range that ensures collisions.
fn value_strategy() -> impl Strategy<Value = i64> {
    -5_000i64..5_000i64
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum TreeOp {
    Insert(i64),
    Remove(i64),
    Contains(i64),
    Select(usize),
    Rank(i64),
    First,
    Last,
    RemoveMin,
}

fn tree_op_strategy() -> impl Strategy<Value = TreeOp> {
    prop_oneof![
        5 => value_strategy().prop_map(TreeOp::Insert),
        3 => value_strategy().prop_map(TreeOp::Remove),
        2 => value_strategy().prop_map(TreeOp::Contains),
        2 => (0usize..6_000).prop_map(TreeOp::Select),
        2 => value_strategy().prop_map(TreeOp::Rank),
        1 => Just(TreeOp::First),
        1 => Just(TreeOp::Last),
        1 => Just(TreeOp::RemoveMin),
    ]
}

// ─── Core operations ─────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random sequence of operations on both OrderStatisticTree and
    /// BTreeSet and asserts identical results at every step.
    #[test]
    fn tree_ops_match_btreeset(ops in proptest::collection::vec(tree_op_strategy(), TEST_SIZE)) {
        let mut tree: OrderStatisticTree<i64> = OrderStatisticTree::new();
        let mut model: BTreeSet<i64> = BTreeSet::new();

        for op in &ops {
            match op {
                TreeOp::Insert(v) => {
                    prop_assert_eq!(tree.insert(*v).is_some(), model.insert(*v), "insert({})", v);
                }
                TreeOp::Remove(v) => {
                    prop_assert_eq!(tree.remove_key(v), model.take(v), "remove({})", v);
                }
                TreeOp::Contains(v) => {
                    prop_assert_eq!(tree.contains(v), model.contains(v), "contains({})", v);
                }
                TreeOp::Select(i) => {
                    let expected = model
                        .iter()
                        .nth(*i)
                        .ok_or(Error::IndexOutOfRange { index: *i, len: model.len() });
                    prop_assert_eq!(tree.select(*i), expected, "select({})", i);
                }
                TreeOp::Rank(v) => {
                    let expected = if model.contains(v) {
                        Ok(model.range(..*v).count())
                    } else {
                        Err(Error::NotFound)
                    };
                    prop_assert_eq!(tree.rank(v), expected, "rank({})", v);
                }
                TreeOp::First => {
                    prop_assert_eq!(tree.first(), model.first());
                }
                TreeOp::Last => {
                    prop_assert_eq!(tree.last(), model.last());
                }
                TreeOp::RemoveMin => {
                    let removed = tree.min().map(|p| tree.remove(p));
                    prop_assert_eq!(removed, model.pop_first().map(Ok));
                }
            }
            prop_assert_eq!(tree.len(), model.len());
        }

        prop_assert!(tree.iter().eq(model.iter()));
    }

    /// Navigation through positions matches the sorted order.
    #[test]
    fn successor_chain_matches_iteration(values in proptest::collection::vec(value_strategy(), 0..500)) {
        let tree: OrderStatisticTree<i64> = values.iter().copied().collect();
        let mut forward = Vec::new();
        let mut current = tree.min();
        while let Some(position) = current {
            forward.push(*tree.get(position).unwrap());
            current = tree.successor(position);
        }
        let mut backward = Vec::new();
        let mut current = tree.max();
        while let Some(position) = current {
            backward.push(*tree.get(position).unwrap());
            current = tree.predecessor(position);
        }
        backward.reverse();

        let expected: Vec<i64> = values.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        prop_assert_eq!(&forward, &expected);
        prop_assert_eq!(&backward, &expected);
    }

    /// Ranks stay consistent with `select` for every rank after random removals.
    #[test]
    fn rank_select_are_inverse(
        values in proptest::collection::vec(value_strategy(), 1..400),
        removals in proptest::collection::vec(value_strategy(), 0..200),
    ) {
        let mut tree: OrderStatisticTree<i64> = values.into_iter().collect();
        for v in &removals {
            tree.remove_key(v);
        }
        for i in 0..tree.len() {
            let key = *tree.select(i).unwrap();
            prop_assert_eq!(tree.rank(&key), Ok(i));
            prop_assert_eq!(tree[Rank(i)], key);
            let position = tree.select_node(i).unwrap();
            prop_assert_eq!(tree.rank_of_position(position), Ok(i));
        }
        if let Some(root) = tree.root() {
            prop_assert_eq!(tree.count_descendants(root), tree.len());
        }
    }
}

#[test]
fn median_of_stream() {
    let mut tree = OrderStatisticTree::new();
    let mut medians = Vec::new();
    for value in [5, 15, 1, 3, 8, 7, 9, 10, 20, 2] {
        tree.insert(value);
        medians.push(tree[Rank((tree.len() - 1) / 2)]);
    }
    assert_eq!(medians, [5, 5, 5, 3, 5, 5, 7, 7, 8, 7]);
}

#[test]
fn clear_then_reuse() {
    let mut tree: OrderStatisticTree<i64> = (0..100).collect();
    tree.clear();
    assert_eq!(tree.select(0), Err(Error::IndexOutOfRange { index: 0, len: 0 }));
    tree.extend([3, 1, 2]);
    assert_eq!(tree.select(2), Ok(&3));
    assert_eq!(tree.rank(&1), Ok(0));
}
