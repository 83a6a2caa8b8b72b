use crate::prelude::*;

use std::collections::VecDeque;
use std::time::Instant;

const UNSET: u8 = u8::MAX;

/// A projection of the cube onto a small keyed subspace.
///
/// Each variant is a bijection between its keys and the canonical
/// representative states returned by `unrank`: a cube holding solved values
/// everywhere outside the projected coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Corner twists, base 3 over the first seven slots; the eighth twist
    /// is fixed by the sum constraint.
    CornerOrientation,
    /// Edge flips, base 2 over the first eleven slots.
    EdgeOrientation,
    /// Corner permutation, factorial-base rank.
    CornerPermutation,
}

impl Projection {
    pub fn size(self) -> usize {
        match self {
            Projection::CornerOrientation => 2_187,
            Projection::EdgeOrientation => 2_048,
            Projection::CornerPermutation => 40_320,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Projection::CornerOrientation => "corner orientation",
            Projection::EdgeOrientation => "edge orientation",
            Projection::CornerPermutation => "corner permutation",
        }
    }

    pub fn index(self, cube: &Cube) -> usize {
        match self {
            Projection::CornerOrientation => cube.corner_orient[..7]
                .iter()
                .rev()
                .fold(0, |acc, &o| acc * 3 + o as usize),
            Projection::EdgeOrientation => cube.edge_orient[..11]
                .iter()
                .enumerate()
                .fold(0, |acc, (i, &o)| acc | (o as usize) << i),
            Projection::CornerPermutation => lehmer_rank(&cube.corner_perm),
        }
    }

    /// Rebuild the canonical representative of a key.
    pub fn unrank(self, mut index: usize) -> Cube {
        let mut cube = Cube::solved();
        match self {
            Projection::CornerOrientation => {
                let mut sum = 0;
                for slot in 0..7 {
                    let twist = (index % 3) as u8;
                    cube.corner_orient[slot] = twist;
                    sum += twist as usize;
                    index /= 3;
                }
                cube.corner_orient[7] = ((3 - sum % 3) % 3) as u8;
            }
            Projection::EdgeOrientation => {
                let mut sum = 0;
                for slot in 0..11 {
                    let flip = ((index >> slot) & 1) as u8;
                    cube.edge_orient[slot] = flip;
                    sum += flip as usize;
                }
                cube.edge_orient[11] = (sum % 2) as u8;
            }
            Projection::CornerPermutation => cube.corner_perm = lehmer_unrank(index),
        }
        cube
    }
}

fn lehmer_rank(perm: &[u8; 8]) -> usize {
    let mut rank = 0;
    for i in 0..8 {
        let smaller = perm[i + 1..].iter().filter(|&&v| v < perm[i]).count();
        rank = rank * (8 - i) + smaller;
    }
    rank
}

fn lehmer_unrank(mut rank: usize) -> [u8; 8] {
    const FACTORIAL: [usize; 8] = [1, 1, 2, 6, 24, 120, 720, 5_040];

    let mut pool: Vec<u8> = (0..8).collect();
    let mut perm = [0; 8];
    for (i, slot) in perm.iter_mut().enumerate() {
        let weight = FACTORIAL[7 - i];
        *slot = pool.remove(rank / weight);
        rank %= weight;
    }
    perm
}

/// Distance-to-solved table over one projection, filled by breadth-first
/// search outward from the solved key. Keys never reached stay at the unset
/// marker and are reported as distance 0.
pub struct PatternDb {
    projection: Projection,
    dist: Vec<u8>,
}

impl PatternDb {
    pub fn build(projection: Projection) -> PatternDb {
        PatternDb::build_capped(projection, None)
    }

    /// Build, stopping discovery once `max_states` keys hold distances.
    pub fn build_capped(projection: Projection, max_states: Option<usize>) -> PatternDb {
        let started = Instant::now();
        let cap = max_states.unwrap_or(usize::MAX);
        log::info!(
            "building {} table over {} keys",
            projection.name(),
            projection.size()
        );

        let mut dist = vec![UNSET; projection.size()];
        let mut frontier = VecDeque::new();

        let solved_key = projection.index(&Cube::solved());
        dist[solved_key] = 0;
        frontier.push_back(solved_key);
        let mut reached = 1;
        let mut max_depth = 0;

        'bfs: while let Some(key) = frontier.pop_front() {
            let here = dist[key];
            let cube = projection.unrank(key);
            for move_ in Move::all() {
                if reached >= cap {
                    break 'bfs;
                }
                let next_key = projection.index(&cube.apply(move_));
                if dist[next_key] != UNSET {
                    continue;
                }
                dist[next_key] = here + 1;
                max_depth = max_depth.max(here + 1);
                frontier.push_back(next_key);
                reached += 1;
            }
        }

        log::info!(
            "{} table: {}/{} keys, depth {}, took {:?}",
            projection.name(),
            reached,
            projection.size(),
            max_depth,
            started.elapsed()
        );

        PatternDb { projection, dist }
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn lookup(&self, cube: &Cube) -> u8 {
        match self.dist[self.projection.index(cube)] {
            UNSET => 0,
            d => d,
        }
    }

    pub fn reached(&self) -> usize {
        self.dist.iter().filter(|&&d| d != UNSET).count()
    }

    #[cfg(test)]
    fn distance_at(&self, key: usize) -> Option<u8> {
        match self.dist[key] {
            UNSET => None,
            d => Some(d),
        }
    }
}
