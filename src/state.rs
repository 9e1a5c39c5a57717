use std::num::NonZero;

use ndarray::Array2;

use crate::board::Tour;
use crate::location::{Dimension, Location};

/// Mutable search context: the grid of step marks plus the committed path.
///
/// The two are kept in lock-step by construction: `mark` appends to the path
/// and `unmark` pops it, so `path[i]` always carries mark `i + 1`.
pub(crate) struct TourState {
    marks: Array2<Option<NonZero<usize>>>,
    path: Vec<Location>,
}

impl TourState {
    pub(crate) fn new(side: Dimension) -> Self {
        Self {
            marks: Array2::from_shape_simple_fn((side.get(), side.get()), || None),
            path: Vec::with_capacity(side.get() * side.get()),
        }
    }

    /// Whether `location` is on the board and not yet visited.
    pub(crate) fn is_free(&self, location: Location) -> bool {
        self.marks.get(location.as_index()).is_some_and(|mark| mark.is_none())
    }

    /// Commit `location` as the `step`-th cell of the path.
    ///
    /// The caller must have just confirmed [`is_free`](Self::is_free); marking
    /// an occupied cell means the search invariants are already broken.
    pub(crate) fn mark(&mut self, location: Location, step: NonZero<usize>) {
        let cell = &mut self.marks[location.as_index()];
        debug_assert!(cell.is_none(), "marking an occupied cell");
        *cell = Some(step);
        self.path.push(location);
    }

    /// Revert the most recent [`mark`](Self::mark), which must have been of
    /// `location`. Used only while backtracking.
    pub(crate) fn unmark(&mut self, location: Location) {
        debug_assert_eq!(self.path.last(), Some(&location), "unmark must revert the most recent mark");
        let cell = &mut self.marks[location.as_index()];
        debug_assert!(cell.is_some(), "unmarking a free cell");
        *cell = None;
        self.path.pop();
    }

    /// Freeze this state into a [`Tour`]. Called only after the search
    /// succeeds, at which point every cell carries a mark.
    pub(crate) fn into_tour(self) -> Tour {
        debug_assert_eq!(self.path.len(), self.marks.len());

        Tour {
            steps: self.marks.mapv(|mark| mark.unwrap()),
            path: self.path,
        }
    }
}
