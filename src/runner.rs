//! # Plan orchestration
//!
//! [`PlanRunner`] is the facade a host ticks against. Per goal it runs the
//! backward search, hands the candidate leaves to the injected selection
//! policy, materializes the chosen path, and then serves the cached plan one
//! action at a time, replanning once the cache drains.
//!
//! Planning failures are values here: an empty plan (plus an informational
//! log notice) rather than an error. A runner without a bound
//! [`StateRegressor`] degrades the same way instead of crashing.
//!
//! ## Basic Usage
//!
//! ```
//! use backplan::{EffectRegressor, PlanRunner, ShortestPlan, SimpleAction, StateSet};
//!
//! let mut pick_up_key = SimpleAction::new("pick_up_key", 1.0).unwrap();
//! pick_up_key.effect.set("has_key", "true");
//!
//! let mut open_door = SimpleAction::new("open_door", 1.0).unwrap();
//! open_door.preconditions.set("has_key", "true");
//! open_door.effect.set("door_open", "true");
//!
//! let actions = vec![pick_up_key.into_ref(), open_door.into_ref()];
//!
//! let mut goal = StateSet::new();
//! goal.set("door_open", "true");
//!
//! let agent_state = StateSet::new();
//!
//! let mut runner = PlanRunner::new(EffectRegressor, ShortestPlan);
//! let first = runner.next_action(&[goal], &agent_state, &actions).unwrap();
//! assert_eq!(first.name(), "pick_up_key");
//! ```

use std::collections::VecDeque;

use log::{debug, info};

use crate::{
    ActionRef, BackwardSearch, PlanError, PlanSelector, PlanTree, Result, StateRegressor, StateSet,
};

/// Orchestrating facade over search, selection and plan materialization.
///
/// The runner is a two-state machine: *idle* (no cached plan, or the cache
/// has drained) and *executing* (cached plan non-empty). The cached plan is
/// mutated in place as actions are dispensed, so concurrent use for one
/// agent requires external synchronization.
pub struct PlanRunner {
    regressor: Option<Box<dyn StateRegressor + Send + Sync>>,
    selector: Box<dyn PlanSelector + Send + Sync>,
    plan: VecDeque<ActionRef>,
}

impl PlanRunner {
    /// Creates a runner with both collaborators bound.
    pub fn new(
        regressor: impl StateRegressor + Send + Sync + 'static,
        selector: impl PlanSelector + Send + Sync + 'static,
    ) -> Self {
        Self {
            regressor: Some(Box::new(regressor)),
            selector: Box::new(selector),
            plan: VecDeque::new(),
        }
    }

    /// Creates a runner without a state regressor.
    ///
    /// Such a runner cannot search and degrades to empty plans; it exists so
    /// hosts with late-bound collaborators keep a non-crashing fallback.
    pub fn unbound(selector: impl PlanSelector + Send + Sync + 'static) -> Self {
        Self {
            regressor: None,
            selector: Box::new(selector),
            plan: VecDeque::new(),
        }
    }

    /// Binds (or replaces) the state regressor.
    pub fn bind_regressor(&mut self, regressor: impl StateRegressor + Send + Sync + 'static) {
        self.regressor = Some(Box::new(regressor));
    }

    /// Computes an action plan for the given goals.
    ///
    /// Goals are evaluated in input order and the selection for the **last**
    /// goal wins; earlier goals' candidates are discarded once a later goal
    /// is evaluated. An empty return value means no plan was found for the
    /// deciding goal (or no regressor is bound); that is an ordinary
    /// outcome, not an error.
    pub fn create_plan(
        &self,
        goals: &[StateSet],
        agent_state: &StateSet,
        actions: &[ActionRef],
    ) -> Vec<ActionRef> {
        let Some(regressor) = self.regressor.as_deref() else {
            return Vec::new();
        };

        let search = BackwardSearch::new(regressor);
        let mut selected = Vec::new();
        for goal in goals {
            let mut tree = PlanTree::new();
            let root = tree.root();
            let leaves = search.find_leaves(&mut tree, goal, agent_state, actions, root);
            debug!(
                "planning: {} candidate plan(s) over {} node(s)",
                leaves.len(),
                tree.len()
            );
            let best = self.selector.select(&tree, &leaves);
            selected = tree.materialize(best);
        }
        selected
    }

    /// Computes a plan, treating emptiness as an error.
    ///
    /// Convenience wrapper over [`create_plan`](Self::create_plan) for hosts
    /// that prefer `?`-style handling.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::NoPlanFound`] when no goal yields a plan.
    pub fn plan(
        &self,
        goals: &[StateSet],
        agent_state: &StateSet,
        actions: &[ActionRef],
    ) -> Result<Vec<ActionRef>> {
        let plan = self.create_plan(goals, agent_state, actions);
        if plan.is_empty() {
            return Err(PlanError::NoPlanFound);
        }
        Ok(plan)
    }

    /// Returns the next action to perform, replanning when the cache drains.
    ///
    /// If no plan is cached, one is computed and cached first. Returns
    /// `None` (and emits an informational notice) when even a fresh planning
    /// pass yields nothing; the caller can simply retry on a later tick with
    /// updated state.
    pub fn next_action(
        &mut self,
        goals: &[StateSet],
        agent_state: &StateSet,
        actions: &[ActionRef],
    ) -> Option<ActionRef> {
        if self.plan.is_empty() {
            self.plan = self.create_plan(goals, agent_state, actions).into();
        }

        match self.plan.pop_front() {
            Some(action) => Some(action),
            None => {
                info!("no plan found");
                None
            }
        }
    }

    /// Discards the cached plan, forcing a replan on the next call.
    pub fn clear(&mut self) {
        self.plan.clear();
    }

    /// True while a cached plan still holds actions to dispense.
    pub fn is_executing(&self) -> bool {
        !self.plan.is_empty()
    }

    /// Number of actions left in the cached plan.
    pub fn remaining(&self) -> usize {
        self.plan.len()
    }
}
