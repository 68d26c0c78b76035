//! Minimal walkthrough: the agent holds nothing, wants the door open, and
//! the planner chains a key pickup before the door.
//!
//! Run with `RUST_LOG=info cargo run --example open_door`.

use backplan::{EffectRegressor, PlanRunner, ShortestPlan, SimpleAction, StateSet};

fn main() {
    env_logger::init();

    let mut pick_up_key = SimpleAction::new("pick_up_key", 1.0).unwrap();
    pick_up_key.effect.set("has_key", "true");

    let mut open_door = SimpleAction::new("open_door", 1.0).unwrap();
    open_door.preconditions.set("has_key", "true");
    open_door.effect.set("door_open", "true");

    let actions = vec![pick_up_key.into_ref(), open_door.into_ref()];

    let mut goal = StateSet::new();
    goal.set("door_open", "true");
    let goals = [goal];

    let agent_state = StateSet::new();

    let mut runner = PlanRunner::new(EffectRegressor, ShortestPlan);

    println!("Goal: door_open = true, agent starts empty-handed.");

    // Serve the plan one action per tick, the way a game loop would.
    let mut step = 1;
    if let Some(first) = runner.next_action(&goals, &agent_state, &actions) {
        println!("  step {}: {}", step, first.name());
        while runner.is_executing() {
            if let Some(action) = runner.next_action(&goals, &agent_state, &actions) {
                step += 1;
                println!("  step {}: {}", step, action.name());
            }
        }
    } else {
        println!("  no plan found");
    }
}
