//! Reorder engines.
//!
//! Pure functions that compute a new ordering from a move request. The
//! caller owns the collection and decides whether to commit the result.
//! [`ReorderOp`] names a move explicitly so hosts dispatch on the variant
//! rather than on which handler happens to be installed.

pub mod grid;
pub mod list;
pub mod tree;

use crate::error::{DragError, DragResult};
use crate::types::{ItemId, ZoneId};

pub use grid::GridShape;
pub use tree::{TreeDropPosition, TreeDropTarget, TreeNode, move_node};

/// A concrete move request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderOp {
    /// Move within a flat list.
    List { from: usize, to: usize },
    /// Move within a grid (same semantics as `List`).
    Grid { from: usize, to: usize },
    /// Re-parent a tree node.
    Tree {
        node: ItemId,
        new_parent: ItemId,
        index: usize,
    },
    /// Move an element between two collections; `to` is an insertion point.
    Transfer {
        from_zone: ZoneId,
        from: usize,
        to_zone: ZoneId,
        to: usize,
    },
}

impl ReorderOp {
    pub fn kind(&self) -> &'static str {
        match self {
            ReorderOp::List { .. } => "list",
            ReorderOp::Grid { .. } => "grid",
            ReorderOp::Tree { .. } => "tree",
            ReorderOp::Transfer { .. } => "transfer",
        }
    }

    /// Whether applying the operation leaves the order unchanged.
    pub fn is_noop(&self) -> bool {
        matches!(
            self,
            ReorderOp::List { from, to } | ReorderOp::Grid { from, to } if from == to
        )
    }

    fn mismatch(&self, expected: &'static str) -> DragError {
        DragError::OperationMismatch {
            expected,
            found: self.kind(),
        }
    }

    /// Apply a `List` or `Grid` move.
    pub fn apply_list<T: Clone>(&self, items: &[T]) -> DragResult<Vec<T>> {
        match *self {
            ReorderOp::List { from, to } => list::move_item(items, from, to),
            ReorderOp::Grid { from, to } => grid::move_cell(items, from, to),
            _ => Err(self.mismatch("list or grid")),
        }
    }

    /// Apply a `Tree` move.
    pub fn apply_tree<T: Clone>(&self, tree: &TreeNode<T>) -> DragResult<TreeNode<T>> {
        match self {
            ReorderOp::Tree {
                node,
                new_parent,
                index,
            } => move_node(tree, node.as_str(), new_parent.as_str(), *index),
            _ => Err(self.mismatch("tree")),
        }
    }

    /// Apply a `Transfer`, returning the new `(source, target)` collections.
    pub fn apply_transfer<T: Clone>(&self, source: &[T], target: &[T]) -> DragResult<(Vec<T>, Vec<T>)> {
        match *self {
            ReorderOp::Transfer { from, to, .. } => list::transfer_item(source, from, target, to),
            _ => Err(self.mismatch("transfer")),
        }
    }
}

/// Elements with a stable identity.
pub trait Keyed {
    fn key(&self) -> &ItemId;
}

impl Keyed for ItemId {
    fn key(&self) -> &ItemId {
        self
    }
}

impl<T> Keyed for TreeNode<T> {
    fn key(&self) -> &ItemId {
        &self.id
    }
}

/// A sequence with no duplicate keys.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedCollection<T> {
    items: Vec<T>,
}

impl<T: Keyed> OrderedCollection<T> {
    /// Wrap `items`, failing on the first repeated key.
    pub fn new(items: Vec<T>) -> DragResult<Self> {
        let mut seen = ferrodrop_core::alloc::HashSet::new();
        for item in &items {
            if !seen.insert(item.key()) {
                return Err(DragError::DuplicateId(item.key().clone()));
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn ids(&self) -> impl Iterator<Item = &ItemId> + '_ {
        self.items.iter().map(Keyed::key)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| *item.key() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Keyed + Clone> OrderedCollection<T> {
    /// Reordered copy; see [`list::move_item`].
    pub fn moved(&self, from: usize, to: usize) -> DragResult<Self> {
        Ok(Self {
            items: list::move_item(&self.items, from, to)?,
        })
    }

    /// Apply a `List` or `Grid` operation.
    pub fn apply(&self, op: &ReorderOp) -> DragResult<Self> {
        Ok(Self {
            items: op.apply_list(&self.items)?,
        })
    }
}
