pub use crate::cube::*;
pub use crate::heuristic::*;
pub use crate::pdb::*;
pub use crate::r#move::*;
pub use crate::scramble::*;
pub use crate::solver::*;

#[cfg(test)]
pub use crate::test::*;

pub use std::time::Duration;
