use std::sync::OnceLock;

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rbos_tree::{Color, Position, RedBlackTree};

const TOTAL: i32 = 1_000_000;
const DELETE_FREQUENCY: i32 = 5;

/// A large tree built by interleaving inserts with random deletions, shared by
/// the tests below.
struct Scenario {
    tree: RedBlackTree<i32>,
    /// Every key ever inserted, paired with whether it is still present.
    keys: Vec<(bool, i32)>,
    count: usize,
}

fn scenario() -> &'static Scenario {
    static SCENARIO: OnceLock<Scenario> = OnceLock::new();
    SCENARIO.get_or_init(|| {
        let mut rng = StdRng::seed_from_u64(0x5eed_7ee5);
        let mut keys: Vec<(bool, i32)> = (0..TOTAL).map(|key| (true, key)).collect();
        keys.shuffle(&mut rng);

        let mut tree = RedBlackTree::new();
        tree.insert(keys[0].1);
        for i in 1..keys.len() {
            tree.insert(keys[i].1);

            if i % DELETE_FREQUENCY as usize == 0 {
                let mut j = rng.gen_range(0..=i);
                while !keys[j].0 {
                    j = rng.gen_range(0..=i);
                }
                let position = tree.search(&keys[j].1).expect("live key is searchable");
                tree.remove(position).expect("searched position is live");
                keys[j].0 = false;
            }
        }

        let count = (TOTAL - (TOTAL / DELETE_FREQUENCY - 1)) as usize;
        Scenario { tree, keys, count }
    })
}

fn children(tree: &RedBlackTree<i32>, position: Position) -> [Option<Position>; 2] {
    [tree.left(position), tree.right(position)]
}

#[test]
fn count() {
    let Scenario { tree, count, .. } = scenario();
    assert_ne!(*count, 0);
    assert_eq!(tree.len(), *count);
    let root = tree.root().expect("tree is not empty");
    assert_eq!(tree.count_descendants(root), *count);
    assert_eq!(tree.subtree_size(root), Some(*count));
}

#[test]
#[allow(clippy::cast_precision_loss)]
fn height() {
    let Scenario { tree, count, .. } = scenario();
    let bound = 2.0 * ((*count + 1) as f64).log2();
    assert!((tree.height() as f64) <= bound, "height {} exceeds {bound}", tree.height());
}

#[test]
fn root_is_black() {
    let Scenario { tree, .. } = scenario();
    let root = tree.root().expect("tree is not empty");
    assert_eq!(tree.color(root), Some(Color::Black));
}

#[test]
fn children_of_red_are_black() {
    let Scenario { tree, count, .. } = scenario();
    let mut visited = 0;
    for position in tree.preorder() {
        visited += 1;
        if tree.color(position) == Some(Color::Red) {
            for child in children(tree, position).into_iter().flatten() {
                assert_eq!(tree.color(child), Some(Color::Black));
            }
        }
    }
    assert_eq!(visited, *count);
}

#[test]
fn black_height_is_uniform() {
    let Scenario { tree, count, .. } = scenario();
    let mut black_height = None;
    let mut visited = 0;
    for position in tree.postorder() {
        visited += 1;
        if children(tree, position) != [None, None] {
            continue;
        }
        let mut blacks = 0;
        let mut current = Some(position);
        while let Some(node) = current {
            if tree.color(node) == Some(Color::Black) {
                blacks += 1;
            }
            current = tree.parent(node);
        }
        match black_height {
            None => black_height = Some(blacks),
            Some(expected) => assert_eq!(blacks, expected),
        }
    }
    assert_eq!(visited, *count);
}

#[test]
fn search() {
    let Scenario { tree, keys, .. } = scenario();
    for &(present, key) in keys {
        let found = tree.search(&key);
        if present {
            assert_eq!(found.and_then(|p| tree.get(p)), Some(&key));
        } else {
            assert_eq!(found, None);
        }
    }
}

#[test]
fn sorting() {
    let Scenario { tree, keys, count } = scenario();
    let mut present: Vec<i32> = keys.iter().filter(|(p, _)| *p).map(|(_, k)| *k).collect();
    present.sort_unstable();
    assert_eq!(present.len(), *count);

    let inorder: Vec<i32> = tree.inorder().map(|p| *tree.get(p).expect("live")).collect();
    assert_eq!(inorder.len(), *count);
    assert!(inorder == present, "in-order walk differs from sorted survivors");

    assert_eq!(tree.first(), present.first());
    assert_eq!(tree.last(), present.last());
}

#[test_log::test]
fn insert_sequence_from_textbook() {
    let mut tree = RedBlackTree::new();
    for key in [7, 11, 9, 18, 14, 19] {
        tree.insert(key);
    }

    //        9B
    //      /    \
    //     7B    14R
    //          /   \
    //        11B   18B
    //                \
    //                19R
    let node = |key: i32| tree.search(&key).expect("inserted");
    let key = |position: Option<Position>| position.and_then(|p| tree.get(p)).copied();

    assert_eq!(tree.root(), Some(node(9)));
    let expected = [
        (9, None, Some(7), Some(14), Color::Black),
        (7, Some(9), None, None, Color::Black),
        (14, Some(9), Some(11), Some(18), Color::Red),
        (11, Some(14), None, None, Color::Black),
        (18, Some(14), None, Some(19), Color::Black),
        (19, Some(18), None, None, Color::Red),
    ];
    for (k, parent, left, right, color) in expected {
        let p = node(k);
        assert_eq!(
            (key(tree.parent(p)), key(tree.left(p)), key(tree.right(p)), tree.color(p)),
            (parent, left, right, Some(color)),
            "links of {k}"
        );
    }
    assert_eq!(tree.height(), 3);
}

#[test_log::test]
fn remove_every_key_keeps_order() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut keys: Vec<u32> = (0..2_000).collect();
    keys.shuffle(&mut rng);
    let mut tree: RedBlackTree<u32> = keys.iter().copied().collect();

    keys.shuffle(&mut rng);
    for (removed, key) in keys.iter().enumerate() {
        assert_eq!(tree.remove_key(key), Some(*key));
        assert_eq!(tree.len(), keys.len() - removed - 1);
        if removed % 97 == 0 {
            assert!(tree.iter().is_sorted());
        }
    }
    assert!(tree.is_empty());
    assert_eq!(tree.height(), -1);
}
