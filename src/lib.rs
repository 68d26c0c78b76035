mod action;
mod error;
mod node;
mod regressor;
mod runner;
mod search;
mod selector;
mod state;
mod visualizer;

pub use action::{Action, ActionRef, SimpleAction};
pub use error::{PlanError, Result};
pub use node::{NodeId, PlanNode, PlanTree};
pub use regressor::{EffectRegressor, StateRegressor};
pub use runner::PlanRunner;
pub use search::BackwardSearch;
pub use selector::{CheapestPlan, FirstFound, PlanSelector, ShortestPlan};
pub use state::StateSet;
pub use visualizer::PlanTreeVisualizer;
