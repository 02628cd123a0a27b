//! Hierarchical reordering.

use ferrodrop_core::alloc::HashSet;

use crate::error::{DragError, DragResult};
use crate::types::ItemId;

use super::ReorderOp;

/// A node of a caller-owned tree.
///
/// Ids are unique across the whole tree and the structure is acyclic by
/// construction (children are owned).
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode<T> {
    pub id: ItemId,
    pub payload: T,
    pub children: Vec<TreeNode<T>>,
}

impl<T> TreeNode<T> {
    pub fn new(id: impl Into<ItemId>, payload: T) -> Self {
        Self {
            id: id.into(),
            payload,
            children: Vec::new(),
        }
    }

    /// Append a child (builder style).
    pub fn with_child(mut self, child: TreeNode<T>) -> Self {
        self.children.push(child);
        self
    }

    pub fn find(&self, id: &str) -> Option<&TreeNode<T>> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut TreeNode<T>> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Parent of `id` and the node's index among its siblings.
    ///
    /// `None` for the root and for unknown ids.
    pub fn parent_of(&self, id: &str) -> Option<(&TreeNode<T>, usize)> {
        if let Some(index) = self.children.iter().position(|child| child.id == id) {
            return Some((self, index));
        }
        self.children.iter().find_map(|child| child.parent_of(id))
    }

    /// Ids from this node down to `id`, inclusive at both ends.
    pub fn path_to(&self, id: &str) -> Option<Vec<&ItemId>> {
        if self.id == id {
            return Some(vec![&self.id]);
        }
        self.children.iter().find_map(|child| {
            child.path_to(id).map(|mut path| {
                path.insert(0, &self.id);
                path
            })
        })
    }

    /// Whether `ancestor` is `node` or lies on the path from the root to it.
    pub fn is_ancestor_or_self(&self, ancestor: &str, node: &str) -> bool {
        self.path_to(node)
            .is_some_and(|path| path.iter().any(|id| *id == ancestor))
    }

    /// All ids in pre-order.
    pub fn ids(&self) -> Vec<&ItemId> {
        let mut out = Vec::new();
        self.collect_ids(&mut out);
        out
    }

    fn collect_ids<'a>(&'a self, out: &mut Vec<&'a ItemId>) {
        out.push(&self.id);
        for child in &self.children {
            child.collect_ids(out);
        }
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(TreeNode::len).sum::<usize>()
    }

    /// Always false: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Check that no id appears twice.
    pub fn validate(&self) -> DragResult<()> {
        let mut seen = HashSet::new();
        for id in self.ids() {
            if !seen.insert(id) {
                return Err(DragError::DuplicateId(id.clone()));
            }
        }
        Ok(())
    }

    fn detach(&mut self, id: &str) -> Option<TreeNode<T>> {
        if let Some(index) = self.children.iter().position(|child| child.id == id) {
            return Some(self.children.remove(index));
        }
        self.children.iter_mut().find_map(|child| child.detach(id))
    }
}

/// Move `node_id` to be a child of `new_parent_id` at `new_index`.
///
/// The index is clamped to `[0, child_count]` of the new parent after the
/// node has been detached. Fails with [`DragError::NodeNotFound`] for unknown
/// ids and [`DragError::Cycle`] when the new parent is the node itself or
/// one of its descendants (which includes every move of the root).
pub fn move_node<T: Clone>(
    tree: &TreeNode<T>,
    node_id: &str,
    new_parent_id: &str,
    new_index: usize,
) -> DragResult<TreeNode<T>> {
    if !tree.contains(node_id) {
        return Err(DragError::NodeNotFound(node_id.into()));
    }
    let parent_path = tree
        .path_to(new_parent_id)
        .ok_or_else(|| DragError::NodeNotFound(new_parent_id.into()))?;
    if parent_path.iter().any(|id| *id == node_id) {
        return Err(DragError::Cycle {
            node: node_id.into(),
            new_parent: new_parent_id.into(),
        });
    }

    let mut out = tree.clone();
    let node = out
        .detach(node_id)
        .ok_or_else(|| DragError::NodeNotFound(node_id.into()))?;
    let parent = out
        .find_mut(new_parent_id)
        .ok_or_else(|| DragError::NodeNotFound(new_parent_id.into()))?;
    let index = new_index.min(parent.children.len());
    parent.children.insert(index, node);
    Ok(out)
}

/// Where, relative to a hovered row, a tree drop lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeDropPosition {
    /// As the previous sibling of the row.
    Before,
    /// As the last child of the row.
    Inside,
    /// As the next sibling of the row.
    After,
}

/// A hovered tree row and the band of it under the pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeDropTarget {
    pub node: ItemId,
    pub position: TreeDropPosition,
}

impl TreeDropTarget {
    pub fn new(node: impl Into<ItemId>, position: TreeDropPosition) -> Self {
        Self {
            node: node.into(),
            position,
        }
    }

    /// Turn this target into a concrete tree move for `dragged`.
    ///
    /// Sibling placements account for `dragged` being detached first when it
    /// already sits earlier under the same parent.
    pub fn to_reorder<T>(&self, tree: &TreeNode<T>, dragged: &ItemId) -> DragResult<ReorderOp> {
        if !tree.contains(dragged.as_str()) {
            return Err(DragError::NodeNotFound(dragged.clone()));
        }
        let target = tree
            .find(self.node.as_str())
            .ok_or_else(|| DragError::NodeNotFound(self.node.clone()))?;

        let (new_parent, index) = match self.position {
            TreeDropPosition::Inside => (target.id.clone(), target.children.len()),
            TreeDropPosition::Before | TreeDropPosition::After => {
                let (parent, sibling_index) = tree
                    .parent_of(self.node.as_str())
                    .ok_or_else(|| DragError::NoParent(self.node.clone()))?;
                let mut index = match self.position {
                    TreeDropPosition::After => sibling_index + 1,
                    _ => sibling_index,
                };
                if let Some((current_parent, current_index)) = tree.parent_of(dragged.as_str())
                    && current_parent.id == parent.id
                    && current_index < index
                {
                    index -= 1;
                }
                (parent.id.clone(), index)
            }
        };

        Ok(ReorderOp::Tree {
            node: dragged.clone(),
            new_parent,
            index,
        })
    }
}
