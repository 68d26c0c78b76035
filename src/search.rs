//! # Backward-chaining plan search
//!
//! The search starts from the goal, not from the agent. For each action whose
//! effect covers at least one outstanding goal fact, it regresses the goal
//! through that action ("what must have held before?") and checks whether
//! the agent's actual state already meets the regressed requirement. If it
//! does, the path down to that action is a complete plan and is recorded as
//! a leaf; if not, the search recurses with the regressed state as the new
//! goal and the chosen action removed from the pool.
//!
//! The pool strictly shrinks on every recursive step, so each action is used
//! at most once per path and the search always terminates with depth bounded
//! by the pool size. All admissible leaves are enumerated; ranking them is
//! the job of a [`PlanSelector`](crate::PlanSelector), not the search.
//!
//! ## Basic Usage
//!
//! ```
//! use backplan::{BackwardSearch, EffectRegressor, PlanTree, SimpleAction, StateSet};
//!
//! let mut open_door = SimpleAction::new("open_door", 1.0).unwrap();
//! open_door.preconditions.set("has_key", "true");
//! open_door.effect.set("door_open", "true");
//! let actions = vec![open_door.into_ref()];
//!
//! let mut goal = StateSet::new();
//! goal.set("door_open", "true");
//!
//! let mut agent_state = StateSet::new();
//! agent_state.set("has_key", "true");
//!
//! let mut tree = PlanTree::new();
//! let root = tree.root();
//! let search = BackwardSearch::new(&EffectRegressor);
//! let leaves = search.find_leaves(&mut tree, &goal, &agent_state, &actions, root);
//!
//! assert_eq!(leaves.len(), 1);
//! assert!(tree.node(leaves[0]).is_leaf());
//! ```

use std::sync::Arc;

use crate::{ActionRef, NodeId, PlanTree, StateRegressor, StateSet};

/// Depth-first backward-chaining search over an action pool.
///
/// Borrows the [`StateRegressor`] collaborator for the duration of one
/// planning pass. The search itself holds no other state; every call builds
/// its nodes into the caller's [`PlanTree`].
pub struct BackwardSearch<'a> {
    regressor: &'a dyn StateRegressor,
}

impl<'a> BackwardSearch<'a> {
    /// Creates a search using the given regressor.
    pub fn new(regressor: &'a dyn StateRegressor) -> Self {
        Self { regressor }
    }

    /// Enumerates every complete plan reaching `agent_state` from `goal`.
    ///
    /// Actions are tried in input order, which determines discovery order of
    /// the leaves but not their membership: every admissible leaf is found.
    /// Each admitted action inserts one node under `parent`; leaves close
    /// their branch, non-leaves recurse with the regressed state as the new
    /// goal and the chosen action removed from the pool.
    ///
    /// An empty return value means no plan exists for this goal; that is an
    /// ordinary outcome, not an error.
    pub fn find_leaves(
        &self,
        tree: &mut PlanTree,
        goal: &StateSet,
        agent_state: &StateSet,
        actions: &[ActionRef],
        parent: NodeId,
    ) -> Vec<NodeId> {
        let mut leaves = Vec::new();
        for (idx, action) in actions.iter().enumerate() {
            // Does the action cover at least one outstanding goal fact?
            if !goal.partially_satisfies(action.effect()) {
                continue;
            }

            let current = self.regressor.apply_reverse(action.as_ref(), goal);
            let is_leaf = agent_state.satisfies(&current);
            let node = tree.insert(Arc::clone(action), parent, is_leaf);

            if is_leaf {
                // This action closes the remaining gap.
                leaves.push(node);
                continue;
            }

            let mut remaining = actions.to_vec();
            remaining.remove(idx);
            leaves.extend(self.find_leaves(tree, &current, agent_state, &remaining, node));
        }
        leaves
    }
}
