//! # Plan selection policies
//!
//! The backward search enumerates every admissible plan; picking one is
//! policy, not search. A [`PlanSelector`] receives the leaf nodes of one
//! search together with the tree they live in and chooses the single best
//! candidate, or `None` when there is nothing to choose from.
//!
//! Three stock policies ship with the crate; hosts inject their own by
//! implementing the trait.

use std::cmp::Ordering;

use crate::{NodeId, PlanTree};

/// Policy choosing the best leaf among the candidates of one search.
///
/// Implementations must tolerate an empty slice and return `None` rather
/// than fail.
pub trait PlanSelector {
    /// Chooses a leaf from `leaves`, or `None` when the slice is empty.
    fn select(&self, tree: &PlanTree, leaves: &[NodeId]) -> Option<NodeId>;
}

/// Picks the first leaf the search discovered.
///
/// Cheapest policy to evaluate; discovery order follows the input order of
/// the action pool.
pub struct FirstFound;

impl PlanSelector for FirstFound {
    fn select(&self, _tree: &PlanTree, leaves: &[NodeId]) -> Option<NodeId> {
        leaves.first().copied()
    }
}

/// Picks the leaf with the fewest actions on its path to the root.
///
/// Ties keep the earlier-discovered leaf.
pub struct ShortestPlan;

impl PlanSelector for ShortestPlan {
    fn select(&self, tree: &PlanTree, leaves: &[NodeId]) -> Option<NodeId> {
        leaves.iter().copied().min_by_key(|id| tree.depth(*id))
    }
}

/// Picks the leaf whose path has the lowest cumulative action cost.
///
/// Ties keep the earlier-discovered leaf.
pub struct CheapestPlan;

impl PlanSelector for CheapestPlan {
    fn select(&self, tree: &PlanTree, leaves: &[NodeId]) -> Option<NodeId> {
        leaves.iter().copied().min_by(|a, b| {
            tree.path_cost(*a)
                .partial_cmp(&tree.path_cost(*b))
                .unwrap_or(Ordering::Equal)
        })
    }
}
