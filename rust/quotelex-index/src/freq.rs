//! Frequency-keyed AVL tree supporting range queries over occurrence
//! counts.
//!
//! Built in one pass from the sorted index's contents after bulk loading.
//! Frequencies are not unique, so ties always descend into the right
//! subtree: equal-frequency records form a right-leaning chain instead of
//! multi-value nodes. No secondary key is enforced, which leaves the
//! relative order of equal-frequency results insertion-order dependent.

use crate::records::{RecordArena, RecordId};

type Link = Option<Box<FreqNode>>;

#[derive(Debug)]
struct FreqNode {
    record: RecordId,
    height: u8,
    left: Link,
    right: Link,
}

impl FreqNode {
    fn leaf(record: RecordId) -> Box<FreqNode> {
        Box::new(FreqNode {
            record,
            height: 1,
            left: None,
            right: None,
        })
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    fn balance(&self) -> i32 {
        height(&self.left) as i32 - height(&self.right) as i32
    }
}

fn height(link: &Link) -> u8 {
    link.as_ref().map_or(0, |node| node.height)
}

fn rotate_right(mut y: Box<FreqNode>) -> Box<FreqNode> {
    let mut x = y.left.take().expect("right rotation requires a left child");
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

fn rotate_left(mut x: Box<FreqNode>) -> Box<FreqNode> {
    let mut y = x.right.take().expect("left rotation requires a right child");
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

/// AVL-balanced index keyed by record frequency.
///
/// A `FreqIndex` is a snapshot: it reflects the frequencies at [`build`]
/// time and is not updated when words are inserted afterwards. The store
/// facade tracks that staleness and the explicit-rebuild contract.
///
/// [`build`]: FreqIndex::build
#[derive(Debug)]
pub struct FreqIndex {
    root: Link,
}

impl FreqIndex {
    /// Builds the tree by inserting every given record, keyed by its
    /// current frequency, in the order the sorted index holds them.
    pub fn build(arena: &RecordArena, ids: &[RecordId]) -> FreqIndex {
        let mut root: Link = None;
        for &id in ids {
            let freq = arena.get(id).frequency();
            root = Some(match root {
                None => FreqNode::leaf(id),
                Some(node) => Self::insert_node(node, arena, id, freq),
            });
        }
        FreqIndex { root }
    }

    fn insert_node(
        mut node: Box<FreqNode>,
        arena: &RecordArena,
        id: RecordId,
        freq: u32,
    ) -> Box<FreqNode> {
        // Ties descend right, forming a right-leaning duplicate chain.
        if freq < arena.get(node.record).frequency() {
            node.left = Some(match node.left.take() {
                None => FreqNode::leaf(id),
                Some(left) => Self::insert_node(left, arena, id, freq),
            });
        } else {
            node.right = Some(match node.right.take() {
                None => FreqNode::leaf(id),
                Some(right) => Self::insert_node(right, arena, id, freq),
            });
        }

        node.update_height();
        Self::rebalance(node, arena, freq)
    }

    /// Four-case repair; the tie side uses `>=` to match the descend-right
    /// routing of equal frequencies.
    fn rebalance(mut node: Box<FreqNode>, arena: &RecordArena, freq: u32) -> Box<FreqNode> {
        let balance = node.balance();

        if balance > 1 {
            let left = node.left.take().expect("left-heavy node has a left child");
            if freq < arena.get(left.record).frequency() {
                node.left = Some(left);
                return rotate_right(node);
            }
            node.left = Some(rotate_left(left));
            return rotate_right(node);
        }

        if balance < -1 {
            let right = node
                .right
                .take()
                .expect("right-heavy node has a right child");
            if freq >= arena.get(right.record).frequency() {
                node.right = Some(right);
                return rotate_left(node);
            }
            node.right = Some(rotate_right(right));
            return rotate_left(node);
        }

        node
    }

    /// Pruned in-order traversal yielding exactly the records with
    /// `min <= frequency <= max`, in ascending-frequency order.
    ///
    /// Read-only; safe to call any number of times. Range validation is
    /// the caller's contract (the store rejects `max < min` before getting
    /// here).
    pub fn range_query(&self, arena: &RecordArena, min: u32, max: u32) -> Vec<RecordId> {
        let mut results = Vec::new();
        Self::collect_range(&self.root, arena, min, max, &mut results);
        results
    }

    fn collect_range(
        link: &Link,
        arena: &RecordArena,
        min: u32,
        max: u32,
        results: &mut Vec<RecordId>,
    ) {
        let Some(node) = link else {
            return;
        };
        let freq = arena.get(node.record).frequency();

        // Rotations can move equal-frequency records into either subtree,
        // so pruning compares inclusively on the boundary side: the left
        // subtree holds frequencies <= this node's, the right >=.
        if freq >= min {
            Self::collect_range(&node.left, arena, min, max, results);
        }
        if freq >= min && freq <= max {
            results.push(node.record);
        }
        if freq <= max {
            Self::collect_range(&node.right, arena, min, max, results);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    #[cfg(test)]
    fn check_invariants(&self, arena: &RecordArena) {
        fn check(link: &Link, arena: &RecordArena) -> u8 {
            match link {
                None => 0,
                Some(node) => {
                    let left = check(&node.left, arena);
                    let right = check(&node.right, arena);
                    assert_eq!(node.height, 1 + left.max(right), "stale height");
                    assert!((left as i32 - right as i32).abs() <= 1, "balance violated");
                    // Weak ordering: ties are routed right on insert but
                    // rotations may carry them into left subtrees.
                    if let Some(l) = &node.left {
                        assert!(
                            arena.get(l.record).frequency()
                                <= arena.get(node.record).frequency()
                        );
                    }
                    if let Some(r) = &node.right {
                        assert!(
                            arena.get(r.record).frequency()
                                >= arena.get(node.record).frequency()
                        );
                    }
                    1 + left.max(right)
                }
            }
        }
        check(&self.root, arena);
    }
}
