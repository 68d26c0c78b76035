//! # State regression
//!
//! Backward chaining never simulates actions forward. Instead it asks, for
//! each candidate action, "if the world must look like `G` after this action,
//! what must it have looked like before?". Answering that question is the job
//! of a [`StateRegressor`].
//!
//! [`EffectRegressor`] implements the standard rule: every goal fact the
//! action's effect would establish is dropped from the goal, and the action's
//! preconditions are required in its place.

use crate::{Action, StateSet};

/// Applies an action's effect in reverse to a candidate goal state.
///
/// Implementations must be deterministic and must not mutate the action or
/// the caller's goal; the regressed state is returned as a fresh snapshot.
/// The regressor is a required collaborator of the search; a
/// [`PlanRunner`](crate::PlanRunner) without one degrades to "no plan".
pub trait StateRegressor {
    /// Computes the state that must have held before `action` ran, given
    /// that `goal` must hold afterwards.
    fn apply_reverse(&self, action: &dyn Action, goal: &StateSet) -> StateSet;
}

/// Default regression rule.
///
/// Effect facts satisfied in the goal are removed (the action accounts for
/// them); the action's preconditions are added as new requirements. Facts the
/// effect does not mention pass through untouched.
///
/// # Examples
///
/// ```
/// use backplan::{EffectRegressor, SimpleAction, StateRegressor, StateSet};
///
/// let mut open_door = SimpleAction::new("open_door", 1.0).unwrap();
/// open_door.preconditions.set("has_key", "true");
/// open_door.effect.set("door_open", "true");
///
/// let mut goal = StateSet::new();
/// goal.set("door_open", "true");
///
/// let before = EffectRegressor.apply_reverse(&open_door, &goal);
///
/// // The door requirement is replaced by the key requirement.
/// assert_eq!(before.get("door_open"), None);
/// assert_eq!(before.get("has_key"), Some("true"));
///
/// // The caller's goal is untouched.
/// assert_eq!(goal.get("door_open"), Some("true"));
/// ```
pub struct EffectRegressor;

impl StateRegressor for EffectRegressor {
    fn apply_reverse(&self, action: &dyn Action, goal: &StateSet) -> StateSet {
        let mut state = goal.clone();
        for (key, value) in action.effect().values() {
            if state.get(key) == Some(value.as_str()) {
                state.unset(key);
            }
        }
        for (key, value) in action.preconditions().values() {
            state.set(key, value);
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SimpleAction;

    fn action(pre: &[(&str, &str)], eff: &[(&str, &str)]) -> SimpleAction {
        let mut action = SimpleAction::new("test_action", 1.0).unwrap();
        for (k, v) in pre {
            action.preconditions.set(*k, *v);
        }
        for (k, v) in eff {
            action.effect.set(*k, *v);
        }
        action
    }

    #[test]
    fn test_effect_fact_replaced_by_precondition() {
        let action = action(&[("has_key", "true")], &[("door_open", "true")]);

        let mut goal = StateSet::new();
        goal.set("door_open", "true");

        let before = EffectRegressor.apply_reverse(&action, &goal);
        assert_eq!(before.get("door_open"), None);
        assert_eq!(before.get("has_key"), Some("true"));
        assert_eq!(before.len(), 1);
    }

    #[test]
    fn test_unrelated_goal_facts_pass_through() {
        let action = action(&[], &[("has_wood", "true")]);

        let mut goal = StateSet::new();
        goal.set("has_wood", "true");
        goal.set("fire_lit", "true");

        let before = EffectRegressor.apply_reverse(&action, &goal);
        assert_eq!(before.get("has_wood"), None);
        assert_eq!(before.get("fire_lit"), Some("true"));
    }

    #[test]
    fn test_effect_with_different_value_is_not_removed() {
        let action = action(&[], &[("door_open", "false")]);

        let mut goal = StateSet::new();
        goal.set("door_open", "true");

        let before = EffectRegressor.apply_reverse(&action, &goal);
        assert_eq!(before.get("door_open"), Some("true"));
    }

    #[test]
    fn test_no_preconditions_yields_empty_requirement() {
        let action = action(&[], &[("has_key", "true")]);

        let mut goal = StateSet::new();
        goal.set("has_key", "true");

        let before = EffectRegressor.apply_reverse(&action, &goal);
        assert!(before.is_empty());
    }

    #[test]
    fn test_goal_is_not_mutated() {
        let action = action(&[("has_key", "true")], &[("door_open", "true")]);

        let mut goal = StateSet::new();
        goal.set("door_open", "true");
        let snapshot = goal.clone();

        let _ = EffectRegressor.apply_reverse(&action, &goal);
        assert_eq!(goal, snapshot);
    }
}
