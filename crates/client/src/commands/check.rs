//! Validate a layout and print map statistics.

use anyhow::Result;
use clap::Parser;
use planner_core::{AdjacencyGraph, WorldView};
use runtime::{LayoutWorld, RuntimeConfig};

use super::resolve_layout;

/// Validate a layout and print map statistics
#[derive(Parser)]
pub struct Check {
    /// Layout file, or the name of a built-in layout (e.g. small_classic)
    #[arg(value_name = "LAYOUT")]
    layout: String,
}

impl Check {
    pub fn execute(self, runtime_config: RuntimeConfig) -> Result<()> {
        let config = runtime_config.planner_config()?;
        let layout = resolve_layout(&self.layout)?;
        let world = LayoutWorld::new(layout);

        let layout = world.layout();
        let graph = AdjacencyGraph::explore(
            world.agent_position(),
            &world.obstacles(),
            config.max_graph_cells,
        )?;
        for &cell in &layout.adversaries {
            graph.ensure_contains(cell)?;
        }

        let dead_ends = graph.iter().filter(|(_, neighbors)| neighbors.len() == 1).count();

        println!("Layout:      {}", self.layout);
        println!("Size:        {}x{}", layout.width, layout.height);
        println!("Open cells:  {}", graph.len());
        println!("Dead ends:   {}", dead_ends);
        println!("Food:        {}", layout.food.len());
        println!("Capsules:    {}", layout.capsules.len());
        println!("Adversaries: {}", layout.adversaries.len());
        println!("Agent:       {}", layout.agent);

        Ok(())
    }
}
