use std::fmt::{Display, Formatter};
use std::num::NonZero;

use itertools::Itertools;
use ndarray::Array2;

use crate::location::{Dimension, Location};
use crate::moves::{Leap, Phase};
use crate::solver::TourSolver;

/// A validated knight's tour search over a `side × side` board.
///
/// [`Board`]s should be built using a [`TourBuilder`](crate::builder::TourBuilder),
/// which guarantees the start cell, junction step, and priority tables are
/// coherent before any searching happens.
pub struct Board {
    pub(crate) side: Dimension,
    pub(crate) start: Location,
    pub(crate) junction: usize,
    pub(crate) opening: [Leap; 8],
    pub(crate) cornering: [Leap; 8],
}

impl Board {
    /// The board side length.
    pub fn side(&self) -> usize {
        self.side.get()
    }

    /// The cell committed as step 1 of every search on this board.
    pub fn start(&self) -> Location {
        self.start
    }

    /// The number of cells a complete tour must visit.
    pub fn total_cells(&self) -> usize {
        self.side.get() * self.side.get()
    }

    /// The candidate leaps to try, in order, when expanding from a path of
    /// `step_count` committed cells.
    pub(crate) fn candidates(&self, step_count: usize) -> &[Leap; 8] {
        match Phase::of(step_count, self.junction) {
            Phase::Opening => &self.opening,
            Phase::Cornering => &self.cornering,
        }
    }

    /// Searches this board for a complete tour, deferring to a
    /// [`TourSolver`](crate::solver::TourSolver) and consuming `self`.
    ///
    /// Returns the first tour found under the configured candidate orderings,
    /// or `None` once every ordering is exhausted. Exhaustion is an expected
    /// outcome, not an error: the search is exhaustive but the orderings are
    /// heuristics, and some configurations simply admit no tour.
    pub fn solve(self) -> Option<Tour> {
        TourSolver::from(&self).solve()
    }
}

/// A complete knight's tour: every cell visited exactly once, each step a
/// legal leap from its predecessor.
pub struct Tour {
    pub(crate) steps: Array2<NonZero<usize>>,
    pub(crate) path: Vec<Location>,
}

impl Tour {
    /// The visited cells in order. The first entry is the start cell.
    pub fn path(&self) -> &[Location] {
        &self.path
    }

    /// The grid of step numbers, indexed `(y, x)`.
    pub fn steps(&self) -> &Array2<NonZero<usize>> {
        &self.steps
    }

    /// The 1-based step at which `location` was visited.
    pub fn step_at(&self, location: Location) -> NonZero<usize> {
        self.steps[location.as_index()]
    }
}

impl Display for Tour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let width = self.path.len().to_string().len();

        for row in self.steps.rows() {
            writeln!(f, "{}", row.iter().map(|step| format!("{:>width$}", step)).join(" "))?;
        }

        Ok(())
    }
}
