use std::num::NonZero;

use itertools::Itertools;
use strum::VariantArray;

use crate::board::Board;
use crate::location::{Dimension, Location};
use crate::moves::{Leap, CORNERING_PRIORITY, OPENING_PRIORITY};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// The start cell lies outside the `side × side` board.
    StartOutOfBounds,
    /// The junction step lies outside `[1, side * side]`.
    JunctionOutOfRange,
    /// A priority table does not name each of the eight leaps exactly once.
    OrderingNotPermutation,
}

/// A builder for knight's tour searches over square boards.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save
/// their state at some point. Configuration problems accumulate as
/// [`BuilderInvalidReason`]s and surface from [`build`](Self::build), so the
/// engine itself never sees an out-of-range start or a malformed table.
#[derive(Clone)]
pub struct TourBuilder {
    side: Dimension,
    start: Location,
    junction: usize,
    opening: [Leap; 8],
    cornering: [Leap; 8],
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for TourBuilder {
    /// The reference configuration: a 5×5 board toured from `(2, 2)` with the
    /// priority switch at step 17. This is the configuration the two default
    /// tables were tuned against.
    fn default() -> Self {
        let mut builder = Self::with_dims(NonZero::new(5).unwrap());
        builder.start_at(Location(2, 2)).junction_at(17);
        builder
    }
}

impl TourBuilder {
    /// Construct a builder for a `side × side` board, starting at `(0, 0)`
    /// with the junction at the last step, i.e. the opening table ordering
    /// every expansion.
    pub fn with_dims(side: Dimension) -> Self {
        Self {
            side,
            start: Location(0, 0),
            junction: side.get() * side.get(),
            opening: OPENING_PRIORITY,
            cornering: CORNERING_PRIORITY,
            invalid_reasons: Vec::new(),
        }
    }

    /// Tour from `start`, which is committed as step 1 before the search
    /// begins.
    ///
    /// May cause the builder to enter a
    /// [`StartOutOfBounds`](BuilderInvalidReason::StartOutOfBounds) invalid
    /// state if `start` is out of bounds.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn start_at(&mut self, start: Location) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if start.0 >= self.side.get() || start.1 >= self.side.get() {
            self.invalid_reasons.push(BuilderInvalidReason::StartOutOfBounds);
            return self;
        }

        self.start = start;
        self
    }

    /// Switch from the opening to the cornering table once `junction` cells
    /// are committed; expansions at step counts strictly below `junction` use
    /// the opening table.
    ///
    /// May cause the builder to enter a
    /// [`JunctionOutOfRange`](BuilderInvalidReason::JunctionOutOfRange)
    /// invalid state if `junction` is zero or exceeds the cell count.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn junction_at(&mut self, junction: usize) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if junction == 0 || junction > self.side.get() * self.side.get() {
            self.invalid_reasons.push(BuilderInvalidReason::JunctionOutOfRange);
            return self;
        }

        self.junction = junction;
        self
    }

    /// Replace the opening priority table.
    ///
    /// May cause the builder to enter an
    /// [`OrderingNotPermutation`](BuilderInvalidReason::OrderingNotPermutation)
    /// invalid state if `table` repeats a leap.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn opening_order(&mut self, table: [Leap; 8]) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !is_permutation(&table) {
            self.invalid_reasons.push(BuilderInvalidReason::OrderingNotPermutation);
            return self;
        }

        self.opening = table;
        self
    }

    /// Replace the cornering priority table, with the same conditions as
    /// [`opening_order`](Self::opening_order).
    pub fn cornering_order(&mut self, table: [Leap; 8]) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !is_permutation(&table) {
            self.invalid_reasons.push(BuilderInvalidReason::OrderingNotPermutation);
            return self;
        }

        self.cornering = table;
        self
    }

    /// Check the validity of this builder, ensuring no
    /// [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Board`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of
    /// [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Board, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        Ok(Board {
            side: self.side,
            start: self.start,
            junction: self.junction,
            opening: self.opening,
            cornering: self.cornering,
        })
    }
}

fn is_permutation(table: &[Leap; 8]) -> bool {
    table.iter().copied().sorted_unstable().eq(Leap::VARIANTS.iter().copied())
}
