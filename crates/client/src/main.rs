//! Grid-world MDP planner client.
//!
//! Loads a layout, builds a [`runtime::MdpAgent`] from the environment
//! configuration, and reports the move the planner would submit.
//!
//! # Examples
//!
//! ```bash
//! # Plan one move on a built-in layout
//! cargo run -p gridmdp-client -- plan small_classic
//!
//! # Scared adversaries, JSON output
//! cargo run -p gridmdp-client -- plan mazes/trap.lay --timer 30 --json
//! ```

mod commands;
mod logging;
mod view;

use anyhow::Result;
use clap::Parser;
use commands::{Check, Plan};
use runtime::RuntimeConfig;

/// Plan moves for a grid-world agent with value iteration
#[derive(Parser)]
#[command(name = "gridmdp")]
#[command(about = "MDP planner for grid worlds", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Choose the next move for a layout
    Plan(Plan),

    /// Validate a layout and print map statistics
    Check(Check),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for MDP_* variables)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let runtime_config = RuntimeConfig::from_env();
    let _guard = logging::setup_logging(runtime_config.log_dir.as_deref())?;

    match cli.command {
        Command::Plan(cmd) => cmd.execute(runtime_config),
        Command::Check(cmd) => cmd.execute(runtime_config),
    }
}
