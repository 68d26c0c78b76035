//! Plan-node tree built by the backward search.
//!
//! The search records every explored action choice as a node in an arena,
//! with parent links stored as indices rather than pointers. The arena is
//! scoped to one search: it is created fresh, filled by
//! [`find_leaves`](crate::BackwardSearch::find_leaves), queried by the
//! selection policy, and discarded once the chosen path has been
//! materialized into an action list.

use std::sync::Arc;

use crate::ActionRef;

/// Index of a node within its [`PlanTree`].
pub type NodeId = usize;

/// One explored action choice in the plan tree.
///
/// The parent link is a navigation edge used only to reconstruct the path
/// back to the root; ownership of all nodes rests with the arena. A node is
/// a leaf iff regressing the goal through its action produced a requirement
/// already met by the agent's actual state, i.e. the path from the root down
/// to it is a complete plan.
pub struct PlanNode {
    action: Option<ActionRef>,
    parent: Option<NodeId>,
    is_leaf: bool,
}

impl PlanNode {
    /// The action chosen at this node, `None` only for the synthetic root.
    pub fn action(&self) -> Option<&ActionRef> {
        self.action.as_ref()
    }

    /// The parent node, `None` only for the synthetic root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Whether the path ending at this node is a complete plan.
    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }
}

/// Arena owning the nodes of one backward search.
///
/// Created with a synthetic root in place; the search inserts one node per
/// admitted action choice. Parent chains are finite and acyclic because each
/// action is removed from the pool along the path that uses it.
pub struct PlanTree {
    nodes: Vec<PlanNode>,
}

impl PlanTree {
    /// Creates a tree holding only the synthetic root.
    pub fn new() -> Self {
        Self {
            nodes: vec![PlanNode {
                action: None,
                parent: None,
                is_leaf: false,
            }],
        }
    }

    /// The synthetic root node.
    pub fn root(&self) -> NodeId {
        0
    }

    /// Inserts a node for `action` under `parent` and returns its id.
    pub fn insert(&mut self, action: ActionRef, parent: NodeId, is_leaf: bool) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(PlanNode {
            action: Some(action),
            parent: Some(parent),
            is_leaf,
        });
        id
    }

    /// Borrows the node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this tree.
    pub fn node(&self, id: NodeId) -> &PlanNode {
        &self.nodes[id]
    }

    /// Number of nodes in the tree, the root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the tree holds only the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Number of actions on the path from the root down to `id`.
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestry(id).filter(|n| n.action.is_some()).count()
    }

    /// Cumulative action cost of the path from the root down to `id`.
    pub fn path_cost(&self, id: NodeId) -> f32 {
        self.ancestry(id)
            .filter_map(|n| n.action.as_ref())
            .map(|a| a.cost())
            .sum()
    }

    /// Converts the path ending at `leaf` into an executable action list.
    ///
    /// Walks `leaf -> parent -> .. -> root` collecting actions. The tree
    /// grows backward from the goal, so the node under the root is the
    /// goal-achieving final action and the leaf is the first one to execute;
    /// the walk therefore already reads in execution order. The root's empty
    /// action slot is skipped. `None` yields an empty list.
    pub fn materialize(&self, leaf: Option<NodeId>) -> Vec<ActionRef> {
        let mut plan = Vec::new();
        let mut current = leaf;
        while let Some(id) = current {
            let node = &self.nodes[id];
            if let Some(action) = &node.action {
                plan.push(Arc::clone(action));
            }
            current = node.parent;
        }
        plan
    }

    fn ancestry(&self, id: NodeId) -> impl Iterator<Item = &PlanNode> {
        let mut current = Some(id);
        std::iter::from_fn(move || {
            let id = current?;
            let node = &self.nodes[id];
            current = node.parent;
            Some(node)
        })
    }
}

impl Default for PlanTree {
    fn default() -> Self {
        Self::new()
    }
}
