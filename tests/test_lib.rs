use backplan::{
    ActionRef, CheapestPlan, EffectRegressor, FirstFound, PlanError, PlanRunner, ShortestPlan,
    SimpleAction, StateSet,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn make_action(
        name: &str,
        cost: f32,
        pre: &[(&str, &str)],
        eff: &[(&str, &str)],
    ) -> ActionRef {
        let mut action = SimpleAction::new(name, cost).unwrap();
        for (k, v) in pre {
            action.preconditions.set(*k, *v);
        }
        for (k, v) in eff {
            action.effect.set(*k, *v);
        }
        action.into_ref()
    }

    fn state(facts: &[(&str, &str)]) -> StateSet {
        let mut state = StateSet::new();
        for (k, v) in facts {
            state.set(*k, *v);
        }
        state
    }

    fn names(plan: &[ActionRef]) -> Vec<String> {
        plan.iter().map(|a| a.name().to_string()).collect()
    }

    #[test]
    fn test_single_action_plan() {
        // Agent holds the key, so opening the door is a one-step plan.
        let open_door = make_action(
            "open_door",
            1.0,
            &[("has_key", "true")],
            &[("door_open", "true")],
        );

        let runner = PlanRunner::new(EffectRegressor, FirstFound);
        let goals = [state(&[("door_open", "true")])];
        let agent = state(&[("has_key", "true")]);

        let plan = runner.create_plan(&goals, &agent, &[open_door]);
        assert_eq!(names(&plan), ["open_door"]);
    }

    #[test]
    fn test_two_step_plan() {
        // No key in hand: the planner must chain key pickup before the door.
        let open_door = make_action(
            "open_door",
            1.0,
            &[("has_key", "true")],
            &[("door_open", "true")],
        );
        let pick_up_key = make_action("pick_up_key", 1.0, &[], &[("has_key", "true")]);

        let runner = PlanRunner::new(EffectRegressor, FirstFound);
        let goals = [state(&[("door_open", "true")])];
        let agent = state(&[]);

        let plan = runner.create_plan(&goals, &agent, &[open_door, pick_up_key]);
        assert_eq!(names(&plan), ["pick_up_key", "open_door"]);
    }

    #[test]
    fn test_impossible_goal() {
        // No action establishes the goal fact at all.
        let chop_wood = make_action(
            "chop_wood",
            1.0,
            &[("has_axe", "true")],
            &[("has_wood", "true")],
        );

        let runner = PlanRunner::new(EffectRegressor, FirstFound);
        let goals = [state(&[("x", "true")])];
        let agent = state(&[("has_axe", "true")]);
        let actions = [chop_wood];

        assert!(runner.create_plan(&goals, &agent, &actions).is_empty());
        let result = runner.plan(&goals, &agent, &actions);
        assert!(matches!(result, Err(PlanError::NoPlanFound)));
    }

    #[test]
    fn test_dead_end_branch_is_excluded() {
        // Both actions promise the goal fact, but only the keyed path is
        // reachable from the agent's state.
        let open_door = make_action(
            "open_door",
            1.0,
            &[("has_key", "true")],
            &[("door_open", "true")],
        );
        let force_door = make_action(
            "force_door",
            1.0,
            &[("has_crowbar", "true")],
            &[("door_open", "true")],
        );

        let runner = PlanRunner::new(EffectRegressor, FirstFound);
        let goals = [state(&[("door_open", "true")])];
        let agent = state(&[("has_key", "true")]);

        let plan = runner.create_plan(&goals, &agent, &[force_door, open_door]);
        assert_eq!(names(&plan), ["open_door"]);
    }

    #[test]
    fn test_cheapest_policy_prefers_low_cumulative_cost() {
        let sneak_in = make_action("sneak_in", 1.0, &[], &[("inside", "true")]);
        let bribe_guard = make_action("bribe_guard", 10.0, &[], &[("inside", "true")]);

        let runner = PlanRunner::new(EffectRegressor, CheapestPlan);
        let goals = [state(&[("inside", "true")])];
        let agent = state(&[]);

        let plan = runner.create_plan(&goals, &agent, &[bribe_guard, sneak_in]);
        assert_eq!(names(&plan), ["sneak_in"]);
    }

    #[test]
    fn test_shortest_policy_prefers_fewer_steps() {
        // One direct (pricey) action versus a two-step chain.
        let teleport = make_action("teleport", 8.0, &[], &[("at_castle", "true")]);
        let saddle_horse = make_action("saddle_horse", 1.0, &[], &[("horse_ready", "true")]);
        let ride = make_action(
            "ride",
            1.0,
            &[("horse_ready", "true")],
            &[("at_castle", "true")],
        );

        let runner = PlanRunner::new(EffectRegressor, ShortestPlan);
        let goals = [state(&[("at_castle", "true")])];
        let agent = state(&[]);

        let plan = runner.create_plan(&goals, &agent, &[saddle_horse, ride, teleport]);
        assert_eq!(names(&plan), ["teleport"]);
    }

    #[test]
    fn test_plan_replays_forward_consistently() {
        // Apply the plan forward from the agent state; every step's
        // preconditions must already hold and the goal must hold at the end.
        let gather_wood = make_action(
            "gather_wood",
            1.0,
            &[("has_axe", "true")],
            &[("has_wood", "true")],
        );
        let craft_axe = make_action(
            "craft_axe",
            1.0,
            &[("has_metal", "true")],
            &[("has_axe", "true")],
        );
        let mine_ore = make_action("mine_ore", 1.0, &[], &[("has_metal", "true")]);

        let runner = PlanRunner::new(EffectRegressor, ShortestPlan);
        let goal = state(&[("has_wood", "true")]);
        let agent = state(&[]);

        let plan = runner.create_plan(
            &[goal.clone()],
            &agent,
            &[gather_wood, craft_axe, mine_ore],
        );
        assert_eq!(names(&plan), ["mine_ore", "craft_axe", "gather_wood"]);

        let mut world = agent.clone();
        for action in &plan {
            assert!(
                world.satisfies(action.preconditions()),
                "preconditions of {} not met",
                action.name()
            );
            for (key, value) in action.effect().values() {
                world.set(key, value);
            }
        }
        assert!(world.satisfies(&goal));
    }

    #[test]
    fn test_runner_serves_actions_one_at_a_time() {
        let open_door = make_action(
            "open_door",
            1.0,
            &[("has_key", "true")],
            &[("door_open", "true")],
        );
        let pick_up_key = make_action("pick_up_key", 1.0, &[], &[("has_key", "true")]);
        let actions = vec![open_door, pick_up_key];

        let mut runner = PlanRunner::new(EffectRegressor, FirstFound);
        let goals = [state(&[("door_open", "true")])];
        let agent = state(&[]);

        assert!(!runner.is_executing());
        let first = runner.next_action(&goals, &agent, &actions).unwrap();
        assert_eq!(first.name(), "pick_up_key");
        assert!(runner.is_executing());

        let second = runner.next_action(&goals, &agent, &actions).unwrap();
        assert_eq!(second.name(), "open_door");
        assert!(!runner.is_executing());
    }

    #[test]
    fn test_runner_without_regressor_degrades_gracefully() {
        let open_door = make_action("open_door", 1.0, &[], &[("door_open", "true")]);

        let mut runner = PlanRunner::unbound(FirstFound);
        let goals = [state(&[("door_open", "true")])];
        let agent = state(&[]);

        assert!(runner.next_action(&goals, &agent, &[open_door]).is_none());
    }

    #[test]
    fn test_search_terminates_on_wide_pool() {
        // A pool where every action is admissible at every depth still
        // returns, because each path may use an action only once.
        let keys = ["a", "b", "c", "d", "e", "f", "g"];
        let actions: Vec<ActionRef> = keys
            .iter()
            .map(|k| {
                let pre: Vec<(&str, &str)> = keys
                    .iter()
                    .filter(|other| *other != k)
                    .map(|other| (*other, "true"))
                    .collect();
                make_action(k, 1.0, &pre, &[("goal", "true"), (*k, "true")])
            })
            .collect();

        let runner = PlanRunner::new(EffectRegressor, FirstFound);
        let goals = [state(&[("goal", "true")])];
        let agent = state(&[]);

        assert!(runner.create_plan(&goals, &agent, &actions).is_empty());
    }
}
