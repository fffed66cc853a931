use crate::cell::Cell;

/// Observed adversary: its (truncated) cell and its behaviour timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Adversary {
    pub cell: Cell,
    pub timer: u32,
}

impl Adversary {
    pub const fn new(cell: Cell, timer: u32) -> Self {
        Self { cell, timer }
    }

    /// An adversary is edible while its timer is strictly above `threshold`.
    pub const fn is_edible(&self, threshold: u32) -> bool {
        self.timer > threshold
    }
}

/// Adversaries observed this cycle, in observation order.
///
/// Order matters twice: hazard cells are attributed to the first adversary
/// whose path claims them, while the timer of a cell shared by several
/// adversaries comes from the last one observed there.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Adversaries {
    entries: Vec<Adversary>,
}

impl Adversaries {
    pub fn new(entries: Vec<Adversary>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Adversary> + '_ {
        self.entries.iter()
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.entries.iter().map(|adversary| adversary.cell)
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.entries.iter().any(|adversary| adversary.cell == cell)
    }

    /// Adversary whose timer governs `cell`: the last one observed there.
    pub fn at(&self, cell: Cell) -> Option<&Adversary> {
        self.entries.iter().rev().find(|adversary| adversary.cell == cell)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Adversary> for Adversaries {
    fn from_iter<I: IntoIterator<Item = Adversary>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_cell_reports_latest_timer() {
        let cell = Cell::new(4, 2);
        let adversaries: Adversaries = [
            Adversary::new(cell, 0),
            Adversary::new(Cell::new(1, 1), 7),
            Adversary::new(cell, 30),
        ]
        .into_iter()
        .collect();

        assert_eq!(adversaries.at(cell).map(|adversary| adversary.timer), Some(30));
        assert_eq!(adversaries.at(Cell::new(9, 9)), None);
        assert_eq!(adversaries.len(), 3);
    }

    #[test]
    fn edible_only_above_threshold() {
        assert!(!Adversary::new(Cell::ORIGIN, 15).is_edible(15));
        assert!(Adversary::new(Cell::ORIGIN, 16).is_edible(15));
    }
}
