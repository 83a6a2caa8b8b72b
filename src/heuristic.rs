use crate::prelude::*;

/// Lower bound on quarter turns to solved: the maximum of the three
/// pattern-database lookups. Zero exactly on the solved state.
pub struct Heuristic {
    corner_orientation: PatternDb,
    edge_orientation: PatternDb,
    corner_permutation: PatternDb,
}

impl Heuristic {
    /// Build all three tables in full.
    pub fn build() -> Heuristic {
        Heuristic {
            corner_orientation: PatternDb::build(Projection::CornerOrientation),
            edge_orientation: PatternDb::build(Projection::EdgeOrientation),
            corner_permutation: PatternDb::build(Projection::CornerPermutation),
        }
    }

    /// Assemble from prebuilt (possibly capped) tables.
    pub fn from_tables(
        corner_orientation: PatternDb,
        edge_orientation: PatternDb,
        corner_permutation: PatternDb,
    ) -> anyhow::Result<Heuristic> {
        anyhow::ensure!(
            corner_orientation.projection() == Projection::CornerOrientation,
            "corner orientation slot holds a {} table",
            corner_orientation.projection().name()
        );
        anyhow::ensure!(
            edge_orientation.projection() == Projection::EdgeOrientation,
            "edge orientation slot holds a {} table",
            edge_orientation.projection().name()
        );
        anyhow::ensure!(
            corner_permutation.projection() == Projection::CornerPermutation,
            "corner permutation slot holds a {} table",
            corner_permutation.projection().name()
        );
        Ok(Heuristic {
            corner_orientation,
            edge_orientation,
            corner_permutation,
        })
    }

    pub fn estimate(&self, cube: &Cube) -> u8 {
        self.corner_orientation
            .lookup(cube)
            .max(self.edge_orientation.lookup(cube))
            .max(self.corner_permutation.lookup(cube))
    }
}
