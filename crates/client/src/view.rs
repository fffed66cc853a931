//! Presentation of a [`runtime::Plan`] for the terminal and for JSON output.

use std::fmt::Write as _;

use planner_content::Layout;
use planner_core::{Cell, Convergence, Direction, ScoredMove, UtilityTable};
use runtime::Plan;
use serde::Serialize;

/// JSON-friendly snapshot of a plan.
///
/// Per-cell tables are flattened into lists sorted by cell because JSON
/// object keys must be strings.
#[derive(Debug, Serialize)]
pub struct PlanView {
    pub action: Direction,
    pub expected_utility: f64,
    pub scores: Vec<ScoredMove>,
    pub convergence: Convergence,
    pub hazards: Vec<HazardEntry>,
    pub cells: Vec<CellEntry>,
}

#[derive(Debug, Serialize)]
pub struct HazardEntry {
    pub cell: Cell,
    pub adversary: Cell,
}

#[derive(Debug, Serialize)]
pub struct CellEntry {
    pub cell: Cell,
    pub kind: &'static str,
    pub utility: f64,
}

impl PlanView {
    pub fn new(plan: &Plan) -> Self {
        let mut hazards: Vec<HazardEntry> = plan
            .hazards
            .iter()
            .map(|(cell, adversary)| HazardEntry { cell, adversary })
            .collect();
        hazards.sort_by_key(|entry| entry.cell);

        let mut cells: Vec<CellEntry> = plan
            .classification
            .iter()
            .map(|(cell, kind)| CellEntry {
                cell,
                kind: kind.into(),
                utility: plan.utilities.get(cell).unwrap_or(f64::NAN),
            })
            .collect();
        cells.sort_by_key(|entry| entry.cell);

        Self {
            action: plan.action,
            expected_utility: plan.expected_utility,
            scores: plan.scores.clone(),
            convergence: plan.convergence,
            hazards,
            cells,
        }
    }
}

/// Renders utilities on the layout grid, top row first. Walls print as `%`
/// and cells outside the explored graph stay blank.
pub fn render_utilities(layout: &Layout, utilities: &UtilityTable) -> String {
    let mut out = String::new();
    for y in (0..layout.height as i32).rev() {
        for x in 0..layout.width as i32 {
            let cell = Cell::new(x, y);
            if layout.is_wall(cell) {
                out.push_str("       %");
            } else {
                match utilities.get(cell) {
                    Ok(utility) => {
                        let _ = write!(out, "{utility:>8.2}");
                    }
                    Err(_) => out.push_str("        "),
                }
            }
        }
        out.push('\n');
    }
    out
}
