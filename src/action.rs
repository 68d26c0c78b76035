//! # Action capability for the planner
//!
//! An action is something the agent can do: it carries a precondition state
//! set (facts required before it can run), an effect state set (facts it
//! guarantees afterwards), and a cost used by cost-aware selection policies.
//!
//! The planner is polymorphic over the [`Action`] trait; actions are supplied
//! by the host, shared as [`ActionRef`] handles, and never mutated by the
//! planner. [`SimpleAction`] is the stock implementation for the common case
//! of declaratively authored actions.
//!
//! ## Basic Usage
//!
//! ```
//! use backplan::{Action, SimpleAction};
//!
//! let mut open_door = SimpleAction::new("open_door", 1.0).unwrap();
//! open_door.preconditions.set("has_key", "true");
//! open_door.effect.set("door_open", "true");
//!
//! assert_eq!(open_door.name(), "open_door");
//! assert_eq!(open_door.effect().get("door_open"), Some("true"));
//!
//! // Share it with the planner.
//! let action = open_door.into_ref();
//! ```

use std::fmt;
use std::sync::Arc;

use crate::{PlanError, Result, StateSet};

/// A capability the agent can exercise, described by its preconditions and
/// effect.
///
/// Implementations are read-only to the planner. Custom action types can
/// carry whatever execution payload the host needs; the planner only ever
/// looks at the four methods below.
pub trait Action {
    /// Identifying name of the action.
    fn name(&self) -> &str;

    /// Relative expense of performing the action, used by cost-aware
    /// selection policies. Defaults to a flat cost.
    fn cost(&self) -> f32 {
        1.0
    }

    /// Facts that must hold before this action can run.
    fn preconditions(&self) -> &StateSet;

    /// Facts guaranteed to hold after this action has run.
    fn effect(&self) -> &StateSet;
}

/// Shared, read-only handle to an action.
///
/// Plans and plan-tree nodes reference the same underlying actions, so
/// actions travel as reference-counted trait objects.
pub type ActionRef = Arc<dyn Action + Send + Sync>;

impl fmt::Debug for dyn Action + Send + Sync {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("name", &self.name())
            .field("cost", &self.cost())
            .finish()
    }
}

/// Stock [`Action`] implementation backed by two state sets.
///
/// Preconditions and effect are public fields so they can be populated with
/// [`StateSet::set`] after construction.
///
/// # Examples
///
/// ```
/// use backplan::SimpleAction;
///
/// let mut chop_wood = SimpleAction::new("chop_wood", 2.0).unwrap();
/// chop_wood.preconditions.set("has_axe", "true");
/// chop_wood.effect.set("has_wood", "true");
///
/// // Non-positive costs are rejected.
/// assert!(SimpleAction::new("free_lunch", 0.0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SimpleAction {
    /// The name of the action
    pub name: String,
    /// The cost of performing this action
    pub cost: f32,
    /// Facts required before this action can run
    pub preconditions: StateSet,
    /// Facts guaranteed after this action has run
    pub effect: StateSet,
}

impl SimpleAction {
    /// Creates a new action with the given name and cost.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidActionCost`] if the cost is zero or
    /// negative.
    pub fn new(name: impl Into<String>, cost: f32) -> Result<Self> {
        if cost <= 0.0 {
            return Err(PlanError::InvalidActionCost);
        }

        Ok(Self {
            name: name.into(),
            cost,
            preconditions: StateSet::new(),
            effect: StateSet::new(),
        })
    }

    /// Wraps this action in a shared [`ActionRef`] handle.
    pub fn into_ref(self) -> ActionRef {
        Arc::new(self)
    }
}

impl Action for SimpleAction {
    fn name(&self) -> &str {
        &self.name
    }

    fn cost(&self) -> f32 {
        self.cost
    }

    fn preconditions(&self) -> &StateSet {
        &self.preconditions
    }

    fn effect(&self) -> &StateSet {
        &self.effect
    }
}
