//! # World-state snapshots for backward-chaining GOAP
//!
//! A [`StateSet`] is a snapshot mapping of facts describing the world or an
//! agent at one moment. The planner uses state sets in four roles:
//!
//! - **Agent state**: what is actually true right now
//! - **Goal**: what the agent wants to become true
//! - **Preconditions**: what an action requires before it can run
//! - **Effect**: what an action guarantees after it has run
//!
//! Fact values are strings, which covers boolean flags (`"true"`/`"false"`)
//! as well as enumerable values (`"golden_key"`, `"80"`).
//!
//! State sets are snapshots: cloning one and mutating the clone never affects
//! the original. The search clones a fresh state set for every regression
//! step and discards it when the enclosing call returns.
//!
//! ## Basic Usage
//!
//! ```
//! use backplan::StateSet;
//!
//! let mut agent_state = StateSet::new();
//! agent_state.set("has_key", "true");
//! agent_state.set("door_open", "false");
//!
//! let mut goal = StateSet::new();
//! goal.set("door_open", "true");
//!
//! // The goal is not met yet, so the agent needs a plan.
//! assert!(!agent_state.satisfies(&goal));
//! ```

use std::collections::HashMap;

/// A snapshot collection of world-state facts.
///
/// Keys are fact names, values are fact values; keys are unique and order is
/// irrelevant. The two comparison predicates, [`satisfies`](Self::satisfies)
/// and [`partially_satisfies`](Self::partially_satisfies), are the only
/// contract the search needs from a state set.
///
/// # Examples
///
/// ```
/// use backplan::StateSet;
///
/// let mut state = StateSet::new();
/// state.set("has_key", "golden_key");
///
/// assert_eq!(state.get("has_key"), Some("golden_key"));
/// assert_eq!(state.get("door_open"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StateSet {
    values: HashMap<String, String>,
}

impl StateSet {
    /// Creates an empty state set.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Sets a fact, inserting it or overwriting an existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Removes a fact, if present.
    pub fn unset(&mut self, key: &str) {
        self.values.remove(key);
    }

    /// Gets the value of a fact, or `None` if the fact is not recorded.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    /// Checks whether this state meets every requirement in `required`.
    ///
    /// True iff every fact in `required` is present here with an equal value.
    /// This state may carry additional facts; they are ignored. Used by the
    /// search to test whether the agent's actual state already covers a
    /// regressed goal (the leaf test).
    ///
    /// # Examples
    ///
    /// ```
    /// use backplan::StateSet;
    ///
    /// let mut agent = StateSet::new();
    /// agent.set("has_key", "true");
    /// agent.set("has_sword", "true");
    ///
    /// let mut required = StateSet::new();
    /// required.set("has_key", "true");
    /// assert!(agent.satisfies(&required));
    ///
    /// required.set("door_open", "true");
    /// assert!(!agent.satisfies(&required));
    /// ```
    pub fn satisfies(&self, required: &StateSet) -> bool {
        required
            .values
            .iter()
            .all(|(key, value)| self.values.get(key).map_or(false, |v| v == value))
    }

    /// Checks whether `effect` contributes at least one fact of this state.
    ///
    /// True iff at least one fact in `effect` appears here with the same key
    /// and value. This is the branch-admission test of the backward search:
    /// an action is only worth exploring if its effect covers some
    /// outstanding goal fact. It is a coverage heuristic, not a correctness
    /// guarantee.
    ///
    /// # Examples
    ///
    /// ```
    /// use backplan::StateSet;
    ///
    /// let mut goal = StateSet::new();
    /// goal.set("door_open", "true");
    /// goal.set("lights_on", "true");
    ///
    /// let mut effect = StateSet::new();
    /// effect.set("door_open", "true");
    /// effect.set("alarm_armed", "false");
    ///
    /// // One shared fact is enough.
    /// assert!(goal.partially_satisfies(&effect));
    ///
    /// let mut unrelated = StateSet::new();
    /// unrelated.set("has_wood", "true");
    /// assert!(!goal.partially_satisfies(&unrelated));
    /// ```
    pub fn partially_satisfies(&self, effect: &StateSet) -> bool {
        effect
            .values
            .iter()
            .any(|(key, value)| self.values.get(key).map_or(false, |v| v == value))
    }

    /// Read-only access to all facts.
    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    /// Number of facts recorded.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no facts are recorded.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for StateSet {
    fn default() -> Self {
        Self::new()
    }
}
