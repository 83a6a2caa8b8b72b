//! 3x3x3 Rubik's cube solver in the quarter-turn metric.
//!
//! Cubie-level states, the 18 face turns as precomputed permutation tables,
//! pattern databases filled by breadth-first search out from the solved
//! state, and IDA* over the maximum of the table lookups (with plain IDDFS
//! as a baseline).

pub mod cube;
pub mod heuristic;
pub mod pdb;
pub mod r#move;
pub mod scramble;
pub mod solver;

pub mod prelude;

#[cfg(test)]
mod test;
