use std::num::NonZero;

type Coord = usize;
pub(crate) type Dimension = NonZero<Coord>;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A cell `(x, y)` on the board. The top left corner is `Location(0, 0)`,
/// with `x` growing rightward and `y` growing downward.
pub struct Location(pub Coord, pub Coord);

impl Location {
    // row-major: the step grid is indexed (y, x)
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }

    /// Displace this location by `rhs`, given in `(dx, dy)` order.
    ///
    /// Coordinates wrap on underflow, so a leap off the top or left edge
    /// lands on an absurdly large coordinate and fails the occupancy check
    /// like any other out-of-bounds cell.
    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }
}
