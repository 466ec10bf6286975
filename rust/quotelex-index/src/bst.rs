//! Unbalanced word-keyed binary search tree over existing records.
//!
//! A pure index-maintenance structure: it never creates or mutates records,
//! only routes record ids by word. With no rebalancing, its depth is
//! insertion-order dependent, which is exactly the property the balanced
//! tree is compared against.

use std::cmp::Ordering;

use crate::records::{RecordArena, RecordId};

#[derive(Debug)]
struct BstNode {
    record: RecordId,
    left: Option<Box<BstNode>>,
    right: Option<Box<BstNode>>,
}

impl BstNode {
    fn leaf(record: RecordId) -> Box<BstNode> {
        Box::new(BstNode {
            record,
            left: None,
            right: None,
        })
    }
}

/// Unbalanced BST index keyed by `record.word`.
///
/// Nodes hold record ids; key comparisons resolve through the arena, so
/// every operation takes the arena as an argument.
#[derive(Debug, Default)]
pub struct BstIndex {
    root: Option<Box<BstNode>>,
}

impl BstIndex {
    pub fn new() -> BstIndex {
        BstIndex::default()
    }

    /// Inserts a record id keyed by its word. If the word is already
    /// present the tree is left unchanged: the shared record was updated
    /// by the sorted index, and this node already references it.
    pub fn insert(&mut self, arena: &RecordArena, id: RecordId) {
        let word = arena.get(id).word();
        Self::insert_node(&mut self.root, arena, id, word);
    }

    fn insert_node(
        link: &mut Option<Box<BstNode>>,
        arena: &RecordArena,
        id: RecordId,
        word: &str,
    ) {
        match link {
            None => *link = Some(BstNode::leaf(id)),
            Some(node) => match word.cmp(arena.get(node.record).word()) {
                Ordering::Less => Self::insert_node(&mut node.left, arena, id, word),
                Ordering::Greater => Self::insert_node(&mut node.right, arena, id, word),
                Ordering::Equal => {}
            },
        }
    }

    /// Recursive descent by word.
    pub fn search(&self, arena: &RecordArena, word: &str) -> Option<RecordId> {
        Self::search_node(&self.root, arena, word)
    }

    fn search_node(
        link: &Option<Box<BstNode>>,
        arena: &RecordArena,
        word: &str,
    ) -> Option<RecordId> {
        let node = link.as_ref()?;
        match word.cmp(arena.get(node.record).word()) {
            Ordering::Equal => Some(node.record),
            Ordering::Less => Self::search_node(&node.left, arena, word),
            Ordering::Greater => Self::search_node(&node.right, arena, word),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}
