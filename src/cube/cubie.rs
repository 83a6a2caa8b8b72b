use crate::prelude::*;

use super::tables;

/// Cubie-level cube state.
///
/// `corner_perm[i] = j` means the corner cubie from slot `j` of the solved
/// cube currently sits in slot `i`; orientations are twists relative to the
/// solved orientation of the slot. Corner slots are numbered URF, UFL, ULB,
/// UBR, DFR, DLF, DBL, DRB; edge slots UR, UF, UL, UB, DR, DF, DL, DB, FR,
/// FL, BL, BR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cube {
    pub(crate) corner_perm: [u8; 8],
    pub(crate) corner_orient: [u8; 8],
    pub(crate) edge_perm: [u8; 12],
    pub(crate) edge_orient: [u8; 12],
}

impl Cube {
    pub fn solved() -> Cube {
        Cube {
            corner_perm: [0, 1, 2, 3, 4, 5, 6, 7],
            corner_orient: [0; 8],
            edge_perm: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
            edge_orient: [0; 12],
        }
    }

    /// Build a state from raw components, rejecting anything a physical
    /// cube cannot reach.
    pub fn from_components(
        corner_perm: [u8; 8],
        corner_orient: [u8; 8],
        edge_perm: [u8; 12],
        edge_orient: [u8; 12],
    ) -> anyhow::Result<Cube> {
        let cube = Cube {
            corner_perm,
            corner_orient,
            edge_perm,
            edge_orient,
        };
        cube.validate()?;
        Ok(cube)
    }

    pub fn is_solved(&self) -> bool {
        *self == Cube::solved()
    }

    pub fn apply(self, move_: Move) -> Cube {
        let table = tables::table(move_);

        let mut next = Cube::solved();
        for i in 0..8 {
            let j = table.corner_from[i];
            next.corner_perm[i] = self.corner_perm[j];
            next.corner_orient[i] = (self.corner_orient[j] + table.corner_twist[i]) % 3;
        }
        for i in 0..12 {
            let j = table.edge_from[i];
            next.edge_perm[i] = self.edge_perm[j];
            next.edge_orient[i] = (self.edge_orient[j] + table.edge_flip[i]) % 2;
        }
        next
    }

    pub fn apply_all(self, moves: impl IntoIterator<Item = Move>) -> Cube {
        moves.into_iter().fold(self, |cube, m| cube.apply(m))
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    fn validate(&self) -> anyhow::Result<()> {
        if !is_permutation(&self.corner_perm) {
            anyhow::bail!("corner indices are not a permutation of 0..8");
        }
        if !is_permutation(&self.edge_perm) {
            anyhow::bail!("edge indices are not a permutation of 0..12");
        }
        if self.corner_orient.iter().any(|&o| o > 2) {
            anyhow::bail!("corner twist outside 0..3");
        }
        if self.edge_orient.iter().any(|&o| o > 1) {
            anyhow::bail!("edge flip outside 0..2");
        }
        if self.corner_orient.iter().map(|&o| u32::from(o)).sum::<u32>() % 3 != 0 {
            anyhow::bail!("corner twists do not sum to 0 mod 3");
        }
        if self.edge_orient.iter().map(|&o| u32::from(o)).sum::<u32>() % 2 != 0 {
            anyhow::bail!("edge flips do not sum to 0 mod 2");
        }
        if permutation_parity(&self.corner_perm) != permutation_parity(&self.edge_perm) {
            anyhow::bail!("corner and edge permutation parities differ");
        }
        Ok(())
    }
}

fn is_permutation(perm: &[u8]) -> bool {
    let mut seen = [false; 12];
    perm.iter().all(|&v| {
        let slot = v as usize;
        slot < perm.len() && !std::mem::replace(&mut seen[slot], true)
    })
}

/// 0 for even permutations, 1 for odd, by cycle counting.
pub(crate) fn permutation_parity(perm: &[u8]) -> u8 {
    let mut visited = [false; 12];
    let mut parity = 0;

    for start in 0..perm.len() {
        if visited[start] {
            continue;
        }
        let mut length = 0;
        let mut slot = start;
        while !visited[slot] {
            visited[slot] = true;
            slot = perm[slot] as usize;
            length += 1;
        }
        parity = (parity + length - 1) % 2;
    }

    parity
}
