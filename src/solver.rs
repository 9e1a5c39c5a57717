use std::num::NonZero;

use crate::board::{Board, Tour};
use crate::location::Location;
use crate::state::TourState;

/// Depth-first backtracking engine for a single search invocation.
///
/// Borrows the board configuration and owns the mutable [`TourState`], so a
/// failed search drops every mark with it and nothing leaks to the caller.
pub(crate) struct TourSolver<'a> {
    board: &'a Board,
    state: TourState,
}

impl<'a> From<&'a Board> for TourSolver<'a> {
    fn from(board: &'a Board) -> Self {
        Self {
            board,
            state: TourState::new(board.side),
        }
    }
}

impl TourSolver<'_> {
    /// Prime the start cell as step 1, then search. The first complete tour
    /// found wins.
    pub(crate) fn solve(mut self) -> Option<Tour> {
        self.state.mark(self.board.start, NonZero::new(1).unwrap());

        match self.search(self.board.start, 1) {
            true => Some(self.state.into_tour()),
            false => None,
        }
    }

    /// Expand the path from `at`, currently `step_count` cells long.
    ///
    /// Candidates are tried in the order the current phase dictates. A
    /// successful child short-circuits the remaining candidates; a failed one
    /// is unmarked before the next is tried, so on the false branch the state
    /// is exactly as this frame found it.
    fn search(&mut self, at: Location, step_count: usize) -> bool {
        if step_count == self.board.total_cells() {
            return true;
        }

        for leap in self.board.candidates(step_count) {
            let next = leap.attempt_from(at);

            if self.state.is_free(next) {
                // step counts past the first are trivially nonzero
                self.state.mark(next, NonZero::new(step_count + 1).unwrap());

                if self.search(next, step_count + 1) {
                    return true;
                }

                self.state.unmark(next);
            }
        }

        false
    }
}
