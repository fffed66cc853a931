//! ASCII layout loader.
//!
//! Layouts use one character per cell:
//!
//! | char | meaning |
//! |------|---------|
//! | `%`  | wall |
//! | `.`  | food |
//! | `o`  | capsule |
//! | `P`  | agent start |
//! | `G`  | adversary start |
//! | ` `  | open floor |
//!
//! The first text row is the top of the world: a row index `r` maps to
//! `y = height - 1 - r`, so `y` grows to the north.

use std::collections::HashSet;
use std::path::Path;

use planner_core::Cell;

use crate::loaders::{LoadResult, read_file};

/// Parsed grid layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub walls: HashSet<Cell>,
    pub food: HashSet<Cell>,
    pub capsules: HashSet<Cell>,
    pub agent: Cell,
    /// Adversary start cells, ordered by `(x, y)`.
    pub adversaries: Vec<Cell>,
}

impl Layout {
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.walls.contains(&cell)
    }

    /// Renders the layout back to its ASCII form.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(((self.width + 1) * self.height) as usize);
        for y in (0..self.height as i32).rev() {
            for x in 0..self.width as i32 {
                let cell = Cell::new(x, y);
                let ch = if self.walls.contains(&cell) {
                    '%'
                } else if cell == self.agent {
                    'P'
                } else if self.adversaries.contains(&cell) {
                    'G'
                } else if self.food.contains(&cell) {
                    '.'
                } else if self.capsules.contains(&cell) {
                    'o'
                } else {
                    ' '
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

/// Loader for ASCII layout files.
pub struct LayoutLoader;

impl LayoutLoader {
    /// Load a layout from a `.lay` file.
    pub fn load(path: &Path) -> LoadResult<Layout> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse layout {}: {}", path.display(), e))
    }

    /// Layouts shipped with the crate, by name.
    pub fn builtin(name: &str) -> LoadResult<Layout> {
        let text = match name {
            "small_grid" => include_str!("../../data/layouts/small_grid.lay"),
            "open_room" => include_str!("../../data/layouts/open_room.lay"),
            "corridor" => include_str!("../../data/layouts/corridor.lay"),
            "small_classic" => include_str!("../../data/layouts/small_classic.lay"),
            other => anyhow::bail!("Unknown built-in layout: {}", other),
        };
        Self::parse(text)
    }

    /// Names accepted by [`LayoutLoader::builtin`].
    pub const BUILTIN: [&'static str; 4] = ["small_grid", "open_room", "corridor", "small_classic"];

    /// Parse a layout from text.
    pub fn parse(content: &str) -> LoadResult<Layout> {
        let rows: Vec<&str> = content
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty())
            .collect();

        let Some(first) = rows.first() else {
            anyhow::bail!("layout is empty");
        };
        let width = first.chars().count();
        let height = rows.len();

        let mut walls = HashSet::new();
        let mut food = HashSet::new();
        let mut capsules = HashSet::new();
        let mut agent = None;
        let mut adversaries = Vec::new();

        for (row, line) in rows.iter().enumerate() {
            let columns = line.chars().count();
            if columns != width {
                anyhow::bail!(
                    "row {} has {} columns, expected {}",
                    row + 1,
                    columns,
                    width
                );
            }

            let y = (height - 1 - row) as i32;
            for (x, ch) in line.chars().enumerate() {
                let cell = Cell::new(x as i32, y);
                match ch {
                    '%' => {
                        walls.insert(cell);
                    }
                    '.' => {
                        food.insert(cell);
                    }
                    'o' => {
                        capsules.insert(cell);
                    }
                    'P' => {
                        if agent.replace(cell).is_some() {
                            anyhow::bail!("layout has more than one agent start");
                        }
                    }
                    'G' | '1'..='4' => adversaries.push(cell),
                    ' ' => {}
                    other => anyhow::bail!("unexpected character {:?} at row {}", other, row + 1),
                }
            }
        }

        let Some(agent) = agent else {
            anyhow::bail!("layout has no agent start 'P'");
        };
        adversaries.sort_by_key(|cell| (cell.x, cell.y));

        Ok(Layout {
            width: width as u32,
            height: height as u32,
            walls,
            food,
            capsules,
            agent,
            adversaries,
        })
    }
}
