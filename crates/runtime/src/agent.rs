//! Per-episode planning context.
//!
//! [`MdpAgent`] is the only long-lived piece of planning state: it remembers
//! the adjacency graph discovered on the first cycle of an episode. Hazards,
//! classification and utilities are recomputed from scratch every cycle and
//! returned inside the [`Plan`].

use planner_core::{
    AdjacencyGraph, Classification, Direction, HazardField, Observation, PlannerConfig,
    PlannerError, PolicyExtractor, ValueIteration, WorldView,
};

use crate::error::{Result, RuntimeError};
use crate::plan::Plan;

/// Model-based planner that re-solves the MDP once per turn.
#[derive(Debug, Clone)]
pub struct MdpAgent {
    config: PlannerConfig,
    graph: Option<AdjacencyGraph>,
}

impl MdpAgent {
    /// Creates an agent without a map. The first cycle explores the layout.
    pub fn new(config: PlannerConfig) -> Result<Self> {
        config.validate().map_err(RuntimeError::InvalidConfig)?;
        Ok(Self {
            config,
            graph: None,
        })
    }

    /// True once the adjacency graph has been built for this episode.
    pub fn has_map(&self) -> bool {
        self.graph.is_some()
    }

    pub fn graph(&self) -> Option<&AdjacencyGraph> {
        self.graph.as_ref()
    }

    /// Chooses the move to submit this turn.
    pub fn next_action(&mut self, world: &dyn WorldView) -> Result<Direction> {
        self.plan(world).map(|plan| plan.action)
    }

    /// Runs a full planning cycle and returns all intermediate tables.
    pub fn plan(&mut self, world: &dyn WorldView) -> Result<Plan> {
        let result = self.try_plan(world);
        if let Err(err) = &result {
            report_failure(world, err);
        }
        result
    }

    fn try_plan(&mut self, world: &dyn WorldView) -> Result<Plan> {
        let observation = world.observe()?;

        let graph: &AdjacencyGraph = match &mut self.graph {
            Some(graph) => graph,
            empty => empty.insert(discover(world, &observation, &self.config)?),
        };

        run_cycle(graph, &observation, &self.config)
    }

    /// Clears every piece of planning state at the end of an episode.
    pub fn end_episode(&mut self) {
        tracing::info!("Episode finished, discarding map");
        self.graph = None;
    }
}

/// Internal inconsistencies are logged as errors, everything else as warnings.
fn report_failure(world: &dyn WorldView, err: &RuntimeError) {
    let severity = err.severity();
    if severity.is_internal() {
        tracing::error!(
            severity = severity.as_str(),
            code = err.error_code(),
            "Planning cycle failed at {}: {}",
            world.agent_position(),
            err
        );
    } else {
        tracing::warn!(
            severity = severity.as_str(),
            code = err.error_code(),
            "Planning cycle failed at {}: {}",
            world.agent_position(),
            err
        );
    }
}

fn discover(
    world: &dyn WorldView,
    observation: &Observation,
    config: &PlannerConfig,
) -> Result<AdjacencyGraph> {
    let obstacles = world.obstacles();
    let graph = AdjacencyGraph::explore(observation.agent, &obstacles, config.max_graph_cells)?;
    tracing::info!(
        "Map discovered from {}: {} reachable cells, {} obstacles",
        observation.agent,
        graph.len(),
        obstacles.len()
    );
    Ok(graph)
}

fn run_cycle(
    graph: &AdjacencyGraph,
    observation: &Observation,
    config: &PlannerConfig,
) -> Result<Plan> {
    graph.ensure_contains(observation.agent)?;

    let hazards = HazardField::analyze(
        graph,
        observation.agent,
        &observation.adversaries,
        config.hazard_threshold,
    )?;
    tracing::debug!(
        "Hazard field: {} cells around {} adversaries",
        hazards.len(),
        observation.adversaries.len()
    );

    let classification = Classification::classify(
        graph,
        &observation.adversaries,
        &hazards,
        &observation.collectibles,
        config.edible_threshold,
    )?;
    tracing::trace!("Cell categories: {:?}", classification.histogram());

    let (utilities, convergence) = ValueIteration::new(
        graph,
        &classification,
        &config.rewards,
        &config.transition,
        config.iteration,
    )
    .solve()?;
    tracing::debug!(
        "Value iteration converged after {} sweeps (residual {:.5})",
        convergence.sweeps,
        convergence.residual
    );

    let policy = PolicyExtractor::new(graph, &utilities, &config.transition);
    let scores = policy.score(observation.agent, &observation.legal)?;
    let best = policy.best_move(observation.agent, &observation.legal)?;
    tracing::debug!(
        "Chose {} from {} (EU {:.3})",
        best.direction,
        observation.agent,
        best.expected_utility
    );

    Ok(Plan {
        action: best.direction,
        expected_utility: best.expected_utility,
        scores,
        hazards,
        classification,
        utilities,
        convergence,
    })
}
