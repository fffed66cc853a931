use planner_content::LayoutLoader;
use planner_core::{
    AdversaryReport, Cell, Direction, PlanError, PlannerConfig, RewardKind, ValueIteration,
    WorldView,
};
use runtime::{LayoutWorld, MdpAgent, RuntimeError};

fn agent() -> MdpAgent {
    MdpAgent::new(PlannerConfig::default()).unwrap()
}

fn world(text: &str) -> LayoutWorld {
    LayoutWorld::new(LayoutLoader::parse(text).unwrap())
}

const ROOM: &str = "\
%%%%%%%
%     %
% P G %
%     %
%%%%%%%
";

#[test]
fn open_room_heads_toward_food() {
    let mut world = LayoutWorld::new(LayoutLoader::builtin("open_room").unwrap());
    let food = Cell::new(3, 3);
    let mut agent = agent();

    for start in [Cell::new(1, 1), Cell::new(2, 2), Cell::new(1, 2)] {
        world.set_agent(start);
        let action = agent.next_action(&world).unwrap();
        let next = start.step(action);
        assert!(
            next.manhattan(food) < start.manhattan(food),
            "{action} from {start} does not approach the food"
        );
    }
}

#[test]
fn corridor_hazard_covers_cells_nearest_the_adversary() {
    let world = LayoutWorld::new(LayoutLoader::builtin("corridor").unwrap());
    let plan = agent().plan(&world).unwrap();

    let mut hazardous: Vec<Cell> = plan.hazards.iter().map(|(cell, _)| cell).collect();
    hazardous.sort();
    assert_eq!(hazardous, (6..=9).map(|x| Cell::new(x, 1)).collect::<Vec<_>>());
    assert_eq!(
        plan.classification.kind(Cell::new(10, 1)).unwrap(),
        RewardKind::Adversary { edible: false }
    );
}

#[test]
fn dangerous_adversary_is_avoided() {
    let world = world(ROOM);
    let plan = agent().plan(&world).unwrap();

    assert_ne!(plan.action, Direction::East);
    let east = plan
        .scores
        .iter()
        .find(|scored| scored.direction == Direction::East)
        .unwrap();
    assert!(plan.expected_utility > east.expected_utility);
}

#[test]
fn edible_adversary_is_chased() {
    let world = world(ROOM).with_uniform_timer(30);
    let plan = agent().plan(&world).unwrap();

    assert_eq!(plan.action, Direction::East);
    assert_eq!(
        plan.classification.kind(Cell::new(3, 2)).unwrap(),
        RewardKind::HazardEdible
    );
}

#[test]
fn adversary_utility_is_fixed_by_its_reward() {
    let world = world(ROOM);
    let config = PlannerConfig::default();
    let plan = MdpAgent::new(config).unwrap().plan(&world).unwrap();

    assert_eq!(
        plan.utilities.get(Cell::new(4, 2)).unwrap(),
        config.rewards.dangerous_adversary
    );
}

#[test]
fn convergence_respects_relative_bound() {
    let world = LayoutWorld::new(LayoutLoader::builtin("small_classic").unwrap());
    let config = PlannerConfig::default();
    let mut agent = MdpAgent::new(config).unwrap();
    let plan = agent.plan(&world).unwrap();

    assert!(plan.convergence.residual < config.iteration.convergence_bound());

    // One more sweep from the converged table moves nothing by more than the
    // contraction of the last change.
    let graph = agent.graph().unwrap();
    let engine = ValueIteration::new(
        graph,
        &plan.classification,
        &config.rewards,
        &config.transition,
        config.iteration,
    );
    let (_, residual) = engine.sweep(&plan.utilities).unwrap();
    assert!(residual <= plan.convergence.residual * config.iteration.discount + 1e-9);
}

#[test]
fn utility_domain_matches_graph() {
    let world = LayoutWorld::new(LayoutLoader::builtin("small_grid").unwrap());
    let mut agent = agent();
    let plan = agent.plan(&world).unwrap();

    let graph = agent.graph().unwrap();
    assert_eq!(plan.utilities.len(), graph.len());
    assert!(graph.cells().all(|cell| plan.utilities.get(cell).is_ok()));
}

#[test]
fn map_is_built_once_per_episode() {
    let mut world = LayoutWorld::new(LayoutLoader::builtin("small_grid").unwrap());
    let mut agent = agent();
    assert!(!agent.has_map());

    agent.plan(&world).unwrap();
    let discovered = agent.graph().unwrap().clone();

    world.set_agent(Cell::new(1, 2));
    agent.plan(&world).unwrap();
    assert_eq!(agent.graph(), Some(&discovered));

    agent.end_episode();
    assert!(!agent.has_map());

    let other = LayoutWorld::new(LayoutLoader::builtin("open_room").unwrap());
    agent.plan(&other).unwrap();
    assert_eq!(agent.graph().unwrap().len(), 9);
}

#[test]
fn repeated_cycles_are_deterministic() {
    let world = LayoutWorld::new(LayoutLoader::builtin("small_classic").unwrap());
    let mut agent = agent();

    let first = agent.next_action(&world).unwrap();
    for _ in 0..3 {
        assert_eq!(agent.next_action(&world).unwrap(), first);
    }
}

#[test]
fn adversary_off_map_is_fatal() {
    let mut world = world(ROOM);
    assert!(world.set_adversary(0, AdversaryReport::new(40.0, 40.0, 0)));

    let err = agent().plan(&world).unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Plan(PlanError::CellNotInGraph(cell)) if cell == Cell::new(40, 40)
    ));
}

#[test]
fn stacked_adversaries_use_the_latest_timer() {
    const TWO_ADVERSARIES: &str = "\
%%%%%%%
%    G%
% P G %
%     %
%%%%%%%
";
    for (timers, edible) in [([0, 30], true), ([30, 0], false)] {
        let mut world = world(TWO_ADVERSARIES).with_timers(&timers).unwrap();
        // Second adversary steps onto the first one's cell.
        assert!(world.set_adversary(1, AdversaryReport::new(4.0, 2.0, timers[1])));

        let plan = agent().plan(&world).unwrap();
        assert_eq!(
            plan.classification.kind(Cell::new(4, 2)).unwrap(),
            RewardKind::Adversary { edible }
        );
        if edible {
            assert_eq!(plan.action, Direction::East);
        } else {
            assert_ne!(plan.action, Direction::East);
        }
    }
}

#[test]
fn non_finite_adversary_report_is_rejected() {
    let mut world = world(ROOM);
    assert!(world.set_adversary(0, AdversaryReport::new(f64::NAN, 2.0, 0)));

    let err = agent().plan(&world).unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Plan(PlanError::InvalidPosition { .. })
    ));
}

#[test]
fn fractional_adversary_positions_are_truncated() {
    let mut world = world(ROOM);
    assert!(world.set_adversary(0, AdversaryReport::new(4.5, 2.0, 0)));

    let plan = agent().plan(&world).unwrap();
    assert!(matches!(
        plan.classification.kind(Cell::new(4, 2)).unwrap(),
        RewardKind::Adversary { .. }
    ));
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let config = PlannerConfig::default().with_discount(0.0);
    assert!(matches!(
        MdpAgent::new(config),
        Err(RuntimeError::InvalidConfig(_))
    ));
}

#[test]
fn legal_actions_drive_the_policy() {
    let world = world(ROOM);
    let plan = agent().plan(&world).unwrap();

    let legal = world.legal_actions();
    assert_eq!(
        plan.scores.iter().map(|scored| scored.direction).collect::<Vec<_>>(),
        legal
    );
}
