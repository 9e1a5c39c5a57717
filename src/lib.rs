#![warn(missing_docs)]

//! # `destrier`
//!
//! A solver for the [knight's tour](https://en.wikipedia.org/wiki/Knight%27s_tour) over square boards.
//! Begin by configuring a search with a [`TourBuilder`](builder::TourBuilder) (or its [`Default`], the tuned 5×5 reference configuration).
//! Convert it to a board object, then call [`solve()`](crate::Board::solve), consuming the board and yielding a [`Tour`] if one is found.
//!
//! # Internals
//! This crate is driven by plain chronological backtracking: a depth-first walk that commits one cell per recursion frame,
//! marks it with its step number, and unmarks it again whenever the subtree below it dead-ends.
//! There is no memoization and no pruning beyond the visited-cell constraint; what makes the search practical is candidate *ordering*.
//!
//! Each expansion tries the eight [`Leap`](moves::Leap)s in one of two fixed priority tables,
//! [`OPENING_PRIORITY`](moves::OPENING_PRIORITY) and [`CORNERING_PRIORITY`](moves::CORNERING_PRIORITY),
//! switching from the first to the second once the committed path reaches a configurable junction step.
//! The late table reorders the same leaps to escape the dead ends the greedy opening ordering manufactures near the frontier.
//!
//! Both tables and the junction are hand-tuned for the reference configuration (5×5, start `(2, 2)`, junction 17).
//! Other board sizes and starts are accepted, but finding a tour quickly there may require re-tuned tables;
//! the search stays exhaustive either way, so a `None` result means no tour exists from the configured start at all.

pub use board::{Board, Tour};
pub use builder::TourBuilder;
pub use location::Location;

pub(crate) mod board;
mod tests;
pub(crate) mod location;
pub mod moves;
pub mod builder;
pub(crate) mod state;
pub(crate) mod solver;
