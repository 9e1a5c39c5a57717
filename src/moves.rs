use strum::VariantArray;

use crate::location::Location;

/// A knight's leap: one of the eight `(±1, ±2)` and `(±2, ±1)` displacements.
///
/// Variants are named by the compass direction of the displacement, with north
/// toward smaller `y`: [`Nne`](Self::Nne) is `(1, -2)`, and the rest follow
/// clockwise.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Leap {
    /// `(1, -2)`
    Nne,
    /// `(2, -1)`
    Ene,
    /// `(2, 1)`
    Ese,
    /// `(1, 2)`
    Sse,
    /// `(-1, 2)`
    Ssw,
    /// `(-2, 1)`
    Wsw,
    /// `(-2, -1)`
    Wnw,
    /// `(-1, -2)`
    Nnw,
}

impl Leap {
    /// The displacement this leap applies, in `(dx, dy)` order.
    pub fn displacement(&self) -> (isize, isize) {
        match self {
            Self::Nne => (1, -2),
            Self::Ene => (2, -1),
            Self::Ese => (2, 1),
            Self::Sse => (1, 2),
            Self::Ssw => (-1, 2),
            Self::Wsw => (-2, 1),
            Self::Wnw => (-2, -1),
            Self::Nnw => (-1, -2),
        }
    }

    /// Attempt the leap from `location` and return the resultant [`Location`],
    /// which may lie off the board.
    pub fn attempt_from(&self, location: Location) -> Location {
        location.offset_by(self.displacement())
    }
}

/// Candidate ordering tried while the committed path is shorter than the
/// junction step: a general eastward-first priority that fills the board
/// greedily away from the start.
pub const OPENING_PRIORITY: [Leap; 8] = [
    Leap::Ene,
    Leap::Ese,
    Leap::Nne,
    Leap::Sse,
    Leap::Wnw,
    Leap::Wsw,
    Leap::Nnw,
    Leap::Ssw,
];

/// Candidate ordering tried from the junction step onward, tuned to escape
/// the dead ends the opening priority leaves near the search frontier.
pub const CORNERING_PRIORITY: [Leap; 8] = [
    Leap::Nnw,
    Leap::Sse,
    Leap::Ssw,
    Leap::Ene,
    Leap::Wnw,
    Leap::Ese,
    Leap::Wsw,
    Leap::Nne,
];

/// The phase of the search, selecting which priority table orders candidate
/// leaps. Derived from the step count on every expansion, never stored.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Phase {
    /// In effect strictly before the junction step.
    Opening,
    /// In effect from the junction step onward.
    Cornering,
}

impl Phase {
    /// The phase governing expansion from a path of `step_count` committed
    /// cells, for a switch configured at `junction`.
    pub fn of(step_count: usize, junction: usize) -> Self {
        match step_count < junction {
            true => Self::Opening,
            false => Self::Cornering,
        }
    }
}
