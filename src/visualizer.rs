//! Graphviz rendering of a finished search, useful when debugging why a
//! plan was or was not found.

use std::fs::File;
use std::io::Write;

use crate::{NodeId, PlanTree, Result, StateSet};

/// A visualizer that renders one search's plan tree as a Graphviz DOT file.
pub struct PlanTreeVisualizer;

impl PlanTreeVisualizer {
    /// Create a new plan-tree visualizer
    pub fn new() -> Self {
        Self
    }

    /// Generate a DOT file for the given tree.
    ///
    /// The root carries the goal and agent states, leaves are tinted, and
    /// the path of the selected leaf (if any) is drawn in red.
    pub fn visualize_tree(
        &self,
        tree: &PlanTree,
        goal: &StateSet,
        agent_state: &StateSet,
        selected: Option<NodeId>,
        filename: &str,
    ) -> Result<()> {
        let mut file = File::create(filename)?;

        writeln!(file, "digraph plan_tree {{")?;
        writeln!(file, "    rankdir=TB;")?;
        writeln!(
            file,
            "    node [shape=box, style=filled, fillcolor=lightblue];"
        )?;

        writeln!(
            file,
            "    node_0 [label=\"Goal\\n{}\\n\\nAgent\\n{}\", fillcolor=lightgreen];",
            Self::state_to_string(goal),
            Self::state_to_string(agent_state)
        )?;

        for id in 1..tree.len() {
            let node = tree.node(id);
            if let Some(action) = node.action() {
                let fill = if node.is_leaf() {
                    "lightpink"
                } else {
                    "lightblue"
                };
                writeln!(
                    file,
                    "    node_{} [label=\"{}\\nCost: {}\", fillcolor={}];",
                    id,
                    action.name(),
                    action.cost(),
                    fill
                )?;
            }
            if let Some(parent) = node.parent() {
                writeln!(file, "    node_{} -> node_{};", parent, id)?;
            }
        }

        // Retrace and tint the chosen path.
        let mut current = selected;
        while let Some(id) = current {
            writeln!(file, "    node_{} [color=red, penwidth=2.0];", id)?;
            current = tree.node(id).parent();
        }

        writeln!(file, "}}")?;

        Ok(())
    }

    /// Helper method to convert a state set to a label fragment
    fn state_to_string(state: &StateSet) -> String {
        state
            .values()
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<_>>()
            .join("\\n")
    }
}

impl Default for PlanTreeVisualizer {
    fn default() -> Self {
        Self::new()
    }
}
