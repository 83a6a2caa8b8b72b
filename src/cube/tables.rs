use crate::prelude::*;

/// Permutation data for one of the 18 turns.
///
/// `corner_from[i]` is the slot whose cubie lands in slot `i`, so applying
/// the turn is a straight indexed copy; the twist and flip deltas are
/// indexed by the destination slot.
#[derive(Debug, Clone)]
pub(crate) struct MoveTable {
    pub corner_from: [usize; 8],
    pub corner_twist: [u8; 8],
    pub edge_from: [usize; 12],
    pub edge_flip: [u8; 12],
}

impl MoveTable {
    /// Table of `self` followed by `next`.
    fn then(&self, next: &MoveTable) -> MoveTable {
        let mut out = MoveTable {
            corner_from: [0; 8],
            corner_twist: [0; 8],
            edge_from: [0; 12],
            edge_flip: [0; 12],
        };
        for i in 0..8 {
            let j = next.corner_from[i];
            out.corner_from[i] = self.corner_from[j];
            out.corner_twist[i] = (self.corner_twist[j] + next.corner_twist[i]) % 3;
        }
        for i in 0..12 {
            let j = next.edge_from[i];
            out.edge_from[i] = self.edge_from[j];
            out.edge_flip[i] = (self.edge_flip[j] + next.edge_flip[i]) % 2;
        }
        out
    }
}

/// Clockwise quarter turn of one face, written out against the slot
/// numbering documented on `Cube`.
fn primitive(face: Face) -> MoveTable {
    match face {
        Face::Up => MoveTable {
            corner_from: [3, 0, 1, 2, 4, 5, 6, 7],
            corner_twist: [0; 8],
            edge_from: [3, 0, 1, 2, 4, 5, 6, 7, 8, 9, 10, 11],
            edge_flip: [0; 12],
        },
        Face::Down => MoveTable {
            corner_from: [0, 1, 2, 3, 5, 6, 7, 4],
            corner_twist: [0; 8],
            edge_from: [0, 1, 2, 3, 5, 6, 7, 4, 8, 9, 10, 11],
            edge_flip: [0; 12],
        },
        Face::Left => MoveTable {
            corner_from: [0, 2, 6, 3, 4, 1, 5, 7],
            corner_twist: [0, 1, 2, 0, 0, 2, 1, 0],
            edge_from: [0, 1, 10, 3, 4, 5, 9, 7, 8, 2, 6, 11],
            edge_flip: [0; 12],
        },
        Face::Right => MoveTable {
            corner_from: [4, 1, 2, 0, 7, 5, 6, 3],
            corner_twist: [2, 0, 0, 1, 1, 0, 0, 2],
            edge_from: [8, 1, 2, 3, 11, 5, 6, 7, 4, 9, 10, 0],
            edge_flip: [0; 12],
        },
        Face::Front => MoveTable {
            corner_from: [1, 5, 2, 3, 0, 4, 6, 7],
            corner_twist: [1, 2, 0, 0, 2, 1, 0, 0],
            edge_from: [0, 9, 2, 3, 4, 8, 6, 7, 1, 5, 10, 11],
            edge_flip: [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
        },
        Face::Back => MoveTable {
            corner_from: [0, 1, 3, 7, 4, 5, 2, 6],
            corner_twist: [0, 0, 1, 2, 0, 0, 2, 1],
            edge_from: [0, 1, 2, 11, 4, 5, 6, 10, 8, 9, 3, 7],
            edge_flip: [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
        },
    }
}

fn build_tables() -> [MoveTable; 18] {
    std::array::from_fn(|index| {
        let move_ = Move::from_index(index);
        let clockwise = primitive(move_.face);
        match move_.direction {
            Direction::Single => clockwise,
            Direction::Double => clockwise.then(&clockwise),
            Direction::Reverse => clockwise.then(&clockwise).then(&clockwise),
        }
    })
}

lazy_static::lazy_static! {
    static ref TABLES: [MoveTable; 18] = build_tables();
}

pub(crate) fn table(move_: Move) -> &'static MoveTable {
    &TABLES[move_.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_is_a_permutation() {
        for move_ in Move::all() {
            let t = table(move_);
            let mut corners = t.corner_from;
            corners.sort_unstable();
            assert_eq!(corners, [0, 1, 2, 3, 4, 5, 6, 7], "{}", move_);

            let mut edges = t.edge_from;
            edges.sort_unstable();
            assert_eq!(edges, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11], "{}", move_);
        }
    }

    #[test]
    fn deltas_balance_per_table() {
        for move_ in Move::all() {
            let t = table(move_);
            let twist: u32 = t.corner_twist.iter().map(|&d| u32::from(d)).sum();
            let flip: u32 = t.edge_flip.iter().map(|&d| u32::from(d)).sum();
            assert_eq!(twist % 3, 0, "{}", move_);
            assert_eq!(flip % 2, 0, "{}", move_);
        }
    }

    #[test]
    fn up_turn_cycles_the_top_layer() {
        let cube = Cube::solved().apply("U".parse().unwrap());
        assert_eq!(cube.corner_perm, [3, 0, 1, 2, 4, 5, 6, 7]);
        assert_eq!(cube.edge_perm, [3, 0, 1, 2, 4, 5, 6, 7, 8, 9, 10, 11]);
        assert_eq!(cube.corner_orient, [0; 8]);
        assert_eq!(cube.edge_orient, [0; 12]);
    }

    #[test]
    fn right_turn_twists_its_corners() {
        let cube = Cube::solved().apply("R".parse().unwrap());
        assert_eq!(cube.corner_orient, [2, 0, 0, 1, 1, 0, 0, 2]);
        assert_eq!(cube.edge_orient, [0; 12]);
    }

    #[test]
    fn front_turn_flips_its_edges() {
        let cube = Cube::solved().apply("F".parse().unwrap());
        assert_eq!(cube.edge_orient, [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0]);
    }

    #[test]
    fn double_turn_matches_two_singles() {
        for face in enum_iterator::all::<Face>() {
            let single = Move { face, direction: Direction::Single };
            let double = Move { face, direction: Direction::Double };
            let scrambled = cube_with_moves("D L' F B2 R");
            assert_eq!(scrambled.apply(double), scrambled.apply(single).apply(single));
        }
    }
}
