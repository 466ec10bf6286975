//! Height-balanced (AVL) word-keyed tree over existing records.
//!
//! Same external contract as the unbalanced tree, with the self-balancing
//! protocol on top: after each insert, every node on the insertion path
//! recomputes its height, and any node whose subtree heights differ by more
//! than one is repaired by a rotation. Rotations only reshape the tree;
//! they never change which records are referenced.

use std::cmp::Ordering;

use crate::records::{RecordArena, RecordId};

type Link = Option<Box<AvlNode>>;

#[derive(Debug)]
struct AvlNode {
    record: RecordId,
    /// 1 + max(child heights); a leaf has height 1, an absent subtree 0.
    height: u8,
    left: Link,
    right: Link,
}

impl AvlNode {
    fn leaf(record: RecordId) -> Box<AvlNode> {
        Box::new(AvlNode {
            record,
            height: 1,
            left: None,
            right: None,
        })
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// height(left) - height(right).
    fn balance(&self) -> i32 {
        height(&self.left) as i32 - height(&self.right) as i32
    }
}

fn height(link: &Link) -> u8 {
    link.as_ref().map_or(0, |node| node.height)
}

/// Single right rotation around `y`; `y.left` becomes the subtree root.
fn rotate_right(mut y: Box<AvlNode>) -> Box<AvlNode> {
    let mut x = y.left.take().expect("right rotation requires a left child");
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

/// Single left rotation around `x`; `x.right` becomes the subtree root.
fn rotate_left(mut x: Box<AvlNode>) -> Box<AvlNode> {
    let mut y = x.right.take().expect("left rotation requires a right child");
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

/// AVL-balanced index keyed by `record.word`.
///
/// Guarantees that every node's subtree heights differ by at most one,
/// bounding search depth at O(log n) regardless of insertion order.
#[derive(Debug, Default)]
pub struct AvlIndex {
    root: Link,
}

impl AvlIndex {
    pub fn new() -> AvlIndex {
        AvlIndex::default()
    }

    /// Inserts a record id keyed by its word, rebalancing the insertion
    /// path. An already-present word leaves the tree unchanged.
    pub fn insert(&mut self, arena: &RecordArena, id: RecordId) {
        let word = arena.get(id).word();
        self.root = Some(match self.root.take() {
            None => AvlNode::leaf(id),
            Some(root) => Self::insert_node(root, arena, id, word),
        });
    }

    fn insert_node(
        mut node: Box<AvlNode>,
        arena: &RecordArena,
        id: RecordId,
        word: &str,
    ) -> Box<AvlNode> {
        match word.cmp(arena.get(node.record).word()) {
            Ordering::Less => {
                node.left = Some(match node.left.take() {
                    None => AvlNode::leaf(id),
                    Some(left) => Self::insert_node(left, arena, id, word),
                });
            }
            Ordering::Greater => {
                node.right = Some(match node.right.take() {
                    None => AvlNode::leaf(id),
                    Some(right) => Self::insert_node(right, arena, id, word),
                });
            }
            Ordering::Equal => return node,
        }

        node.update_height();
        Self::rebalance(node, arena, word)
    }

    /// Repairs a node whose balance left the [-1, 1] band, choosing among
    /// the four cases by comparing the inserted key against the child key.
    fn rebalance(mut node: Box<AvlNode>, arena: &RecordArena, word: &str) -> Box<AvlNode> {
        let balance = node.balance();

        if balance > 1 {
            let left = node.left.take().expect("left-heavy node has a left child");
            if word < arena.get(left.record).word() {
                // Left-Left: single right rotation.
                node.left = Some(left);
                return rotate_right(node);
            }
            // Left-Right: rotate the left child left, then this node right.
            node.left = Some(rotate_left(left));
            return rotate_right(node);
        }

        if balance < -1 {
            let right = node
                .right
                .take()
                .expect("right-heavy node has a right child");
            if word > arena.get(right.record).word() {
                // Right-Right: single left rotation.
                node.right = Some(right);
                return rotate_left(node);
            }
            // Right-Left: rotate the right child right, then this node left.
            node.right = Some(rotate_right(right));
            return rotate_left(node);
        }

        node
    }

    /// Recursive descent by word; balance affects only depth, not the
    /// result.
    pub fn search(&self, arena: &RecordArena, word: &str) -> Option<RecordId> {
        let mut link = &self.root;
        while let Some(node) = link {
            match word.cmp(arena.get(node.record).word()) {
                Ordering::Equal => return Some(node.record),
                Ordering::Less => link = &node.left,
                Ordering::Greater => link = &node.right,
            }
        }
        None
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    #[cfg(test)]
    fn check_invariants(&self) {
        fn check(link: &Link) -> u8 {
            match link {
                None => 0,
                Some(node) => {
                    let left = check(&node.left);
                    let right = check(&node.right);
                    let expected = 1 + left.max(right);
                    assert_eq!(node.height, expected, "stale height");
                    assert!(
                        (left as i32 - right as i32).abs() <= 1,
                        "balance violated: left {left}, right {right}"
                    );
                    expected
                }
            }
        }
        check(&self.root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorted::SortedIndex;

    fn populate(words: &[&str]) -> (SortedIndex, AvlIndex) {
        let mut sorted = SortedIndex::new();
        let mut avl = AvlIndex::new();
        for word in words {
            let id = sorted.insert_or_update(word, "q", "s", 2000);
            avl.insert(sorted.arena(), id);
            avl.check_invariants();
        }
        (sorted, avl)
    }

    #[test]
    fn ascending_insertion_stays_balanced() {
        // Worst case for the unbalanced tree; forces repeated RR rotations.
        let words = ["apple", "berry", "cherry", "damson", "elder", "feijoa", "grape"];
        let (sorted, avl) = populate(&words);
        for word in words {
            assert!(avl.search(sorted.arena(), word).is_some());
        }
    }

    #[test]
    fn descending_insertion_stays_balanced() {
        let words = ["grape", "feijoa", "elder", "damson", "cherry", "berry", "apple"];
        let (sorted, avl) = populate(&words);
        for word in words {
            assert!(avl.search(sorted.arena(), word).is_some());
        }
    }

    #[test]
    fn zigzag_insertions_trigger_double_rotations() {
        // "b" under "c"-"a" forces Left-Right; "y" under "x"-"z" Right-Left.
        let (sorted, avl) = populate(&["cccc", "aaaa", "bbbb", "xxxx", "zzzz", "yyyy"]);
        for word in ["aaaa", "bbbb", "cccc", "xxxx", "yyyy", "zzzz"] {
            assert!(avl.search(sorted.arena(), word).is_some());
        }
    }

    #[test]
    fn randomized_insertions_hold_invariant() {
        let mut sorted = SortedIndex::new();
        let mut avl = AvlIndex::new();
        fastrand::seed(7);
        for _ in 0..500 {
            let word: String = (0..6).map(|_| fastrand::char('a'..='z')).collect();
            let id = sorted.insert_or_update(&word, "q", "s", 2000);
            avl.insert(sorted.arena(), id);
            avl.check_invariants();
        }
        // Every word in the authoritative index is reachable here too.
        for id in sorted.ids() {
            let word = sorted.get(*id).word();
            assert_eq!(avl.search(sorted.arena(), word), Some(*id));
        }
    }

    #[test]
    fn duplicate_insert_is_structural_noop() {
        let (mut sorted, mut avl) = populate(&["lion", "tiger", "zebra"]);
        let id = sorted.insert_or_update("tiger", "again", "s", 2001);
        avl.insert(sorted.arena(), id);
        avl.check_invariants();
        assert_eq!(avl.search(sorted.arena(), "tiger"), Some(id));
    }
}
