use std::collections::HashSet;

use planner_content::Layout;
use planner_core::{AdversaryReport, Cell, Direction, WorldView};

use crate::error::{Result, RuntimeError};

/// Legal-action ordering reported by the simulator.
const LEGAL_ORDER: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

/// WorldView implementation backed by a parsed layout.
#[derive(Debug, Clone)]
pub struct LayoutWorld {
    layout: Layout,
    agent: Cell,
    food: HashSet<Cell>,
    adversaries: Vec<AdversaryReport>,
}

impl LayoutWorld {
    /// Starts the world in the layout's initial configuration with every
    /// adversary timer at zero.
    pub fn new(layout: Layout) -> Self {
        let adversaries = layout
            .adversaries
            .iter()
            .map(|cell| AdversaryReport::new(cell.x as f64, cell.y as f64, 0))
            .collect();
        Self {
            agent: layout.agent,
            food: layout.food.clone(),
            adversaries,
            layout,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Sets the timer of every adversary, in layout order.
    pub fn with_timers(mut self, timers: &[u32]) -> Result<Self> {
        if timers.len() != self.adversaries.len() {
            return Err(RuntimeError::TimerCountMismatch {
                expected: self.adversaries.len(),
                provided: timers.len(),
            });
        }
        for (adversary, &timer) in self.adversaries.iter_mut().zip(timers) {
            adversary.timer = timer;
        }
        Ok(self)
    }

    /// Sets the same timer on every adversary.
    pub fn with_uniform_timer(mut self, timer: u32) -> Self {
        for adversary in &mut self.adversaries {
            adversary.timer = timer;
        }
        self
    }

    /// Teleports the agent and consumes any food on the destination.
    pub fn set_agent(&mut self, cell: Cell) {
        self.agent = cell;
        self.food.remove(&cell);
    }

    /// Moves adversary `index` to a possibly fractional position.
    pub fn set_adversary(&mut self, index: usize, report: AdversaryReport) -> bool {
        match self.adversaries.get_mut(index) {
            Some(slot) => {
                *slot = report;
                true
            }
            None => false,
        }
    }
}

impl WorldView for LayoutWorld {
    fn agent_position(&self) -> Cell {
        self.agent
    }

    fn obstacles(&self) -> HashSet<Cell> {
        self.layout.walls.clone()
    }

    fn food(&self) -> HashSet<Cell> {
        self.food.clone()
    }

    fn capsules(&self) -> HashSet<Cell> {
        self.layout.capsules.clone()
    }

    fn adversaries(&self) -> Vec<AdversaryReport> {
        self.adversaries.clone()
    }

    fn legal_actions(&self) -> Vec<Direction> {
        LEGAL_ORDER
            .into_iter()
            .filter(|&direction| !self.layout.is_wall(self.agent.step(direction)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use planner_content::LayoutLoader;

    use super::*;

    fn world() -> LayoutWorld {
        LayoutWorld::new(LayoutLoader::parse("%%%%%\n%. G%\n%P %%\n%%%%%\n").unwrap())
    }

    #[test]
    fn legal_actions_exclude_walls_in_simulator_order() {
        let mut world = world();
        assert_eq!(world.legal_actions(), vec![Direction::North, Direction::East]);

        world.set_agent(Cell::new(2, 2));
        assert_eq!(
            world.legal_actions(),
            vec![Direction::South, Direction::East, Direction::West]
        );
    }

    #[test]
    fn observation_truncates_adversary_positions() {
        let mut world = world().with_uniform_timer(7);
        assert!(world.set_adversary(0, AdversaryReport::new(3.5, 2.0, 7)));
        assert!(!world.set_adversary(4, AdversaryReport::new(0.0, 0.0, 0)));

        let observation = world.observe().unwrap();
        let adversary = observation.adversaries.iter().next().unwrap();
        assert_eq!(adversary.cell, Cell::new(3, 2));
        assert_eq!(adversary.timer, 7);
    }

    #[test]
    fn timers_must_match_adversary_count() {
        assert!(matches!(
            world().with_timers(&[1, 2]),
            Err(RuntimeError::TimerCountMismatch {
                expected: 1,
                provided: 2
            })
        ));
        assert!(world().with_timers(&[20]).is_ok());
    }

    #[test]
    fn moving_onto_food_consumes_it() {
        let mut world = world();
        world.set_agent(Cell::new(1, 2));
        assert!(world.food().is_empty());
    }
}
