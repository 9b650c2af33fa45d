//! Cubie-level state model and face-rotation engine for the 3×3×3 cube.
//!
//! The cube is 26 movable pieces on a lattice centered at the origin. Each
//! piece carries six sticker slots in a fixed physical order; a face turn
//! rotates the positions of one layer and permutes each affected piece's
//! sticker slots rigidly with it. Orientation is therefore tracked
//! independently of position, which is what a solver or validity check needs.
//!
//! All transforms are pure: applying a move returns a fresh [`Cube`] and
//! leaves the input untouched, so animation consumers can hold on to every
//! intermediate state.

mod color;
mod cube;
mod cubie;
mod geom;
mod scramble;
mod seq;
mod solver;

#[cfg(test)]
mod tests;

/// Re-export of `ftcube_notation`.
pub use ftcube_notation as notation;

pub use crate::color::{Color, Rgb};
pub use crate::cube::Cube;
pub use crate::cubie::Cubie;
pub use crate::geom::{Axis, Facet, Pos};
pub use crate::scramble::{DEFAULT_SCRAMBLE_LEN, random_scramble};
pub use crate::seq::States;
pub use crate::solver::{InverseScrambleSolver, SolveError, Solver, SolverSlot};
