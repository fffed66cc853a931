//! Run one planning cycle on a layout and report the chosen move.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use runtime::{LayoutWorld, MdpAgent, RuntimeConfig};

use super::resolve_layout;
use crate::view::{PlanView, render_utilities};

/// Choose the next move for a layout
#[derive(Parser)]
pub struct Plan {
    /// Layout file, or the name of a built-in layout (e.g. small_classic)
    #[arg(value_name = "LAYOUT")]
    layout: String,

    /// RON planner configuration (overrides MDP_CONFIG)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Adversary scared timers: one value for all, or one per adversary
    #[arg(short, long, value_name = "TICKS", value_delimiter = ',')]
    timer: Vec<u32>,

    /// Hazard proximity threshold in steps
    #[arg(long, value_name = "STEPS")]
    threshold: Option<usize>,

    /// Print the full plan as JSON
    #[arg(long)]
    json: bool,

    /// Print the converged utility grid
    #[arg(long)]
    show_utilities: bool,
}

impl Plan {
    pub fn execute(self, mut runtime_config: RuntimeConfig) -> Result<()> {
        if let Some(path) = self.config {
            runtime_config.config_path = Some(path);
        }
        if let Some(threshold) = self.threshold {
            runtime_config.overrides.hazard_threshold = Some(threshold);
        }
        let config = runtime_config.planner_config()?;

        let layout = resolve_layout(&self.layout)?;
        let world = match self.timer.as_slice() {
            [] => LayoutWorld::new(layout),
            [timer] => LayoutWorld::new(layout).with_uniform_timer(*timer),
            timers => LayoutWorld::new(layout).with_timers(timers)?,
        };

        let mut agent = MdpAgent::new(config)?;
        let plan = agent
            .plan(&world)
            .with_context(|| format!("Planning failed on layout '{}'", self.layout))?;

        if self.json {
            let view = PlanView::new(&plan);
            println!("{}", serde_json::to_string_pretty(&view)?);
            return Ok(());
        }

        print!("{}", world.layout().render());
        println!();
        println!(
            "Action: {} (expected utility {:.4})",
            plan.action, plan.expected_utility
        );
        for scored in &plan.scores {
            println!("  {:<5} {:>10.4}", scored.direction, scored.expected_utility);
        }
        println!(
            "Converged in {} sweeps (residual {:.6}), {} hazard cells",
            plan.convergence.sweeps,
            plan.convergence.residual,
            plan.hazards.len()
        );

        if self.show_utilities {
            println!();
            print!("{}", render_utilities(world.layout(), &plan.utilities));
        }

        Ok(())
    }
}
