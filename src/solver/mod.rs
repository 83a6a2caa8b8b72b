use crate::prelude::*;

mod idastar;
pub use idastar::*;

mod iddfs;
pub use iddfs::*;

pub trait Solver {
    fn solve(&self, cube: &Cube) -> SolveResult;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Iddfs,
    IdaStar,
}

impl core::str::FromStr for Algorithm {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Algorithm> {
        match s {
            "iddfs" => Ok(Algorithm::Iddfs),
            "idastar" => Ok(Algorithm::IdaStar),
            other => Err(anyhow::anyhow!(
                "unknown algorithm {:?}, expected iddfs or idastar",
                other
            )),
        }
    }
}

/// Order in which children are expanded. Purely a deterministic
/// tie-breaker; it never affects soundness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOrder {
    Canonical,
    Reversed,
}

impl MoveOrder {
    fn ordering(self) -> Vec<Move> {
        let mut moves: Vec<Move> = Move::all().collect();
        if self == MoveOrder::Reversed {
            moves.reverse();
        }
        moves
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SolveOptions {
    /// Deepest bound IDDFS iterates to.
    pub max_depth: u32,
    /// Outer threshold rounds IDA* is allowed.
    pub max_iterations: u32,
    pub move_order: MoveOrder,
}

impl Default for SolveOptions {
    fn default() -> SolveOptions {
        SolveOptions {
            max_depth: 12,
            max_iterations: 50,
            move_order: MoveOrder::Canonical,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveStatus {
    Found(Vec<Move>),
    /// Budget ran out; a larger budget may still succeed.
    Aborted,
    /// No node exceeded the threshold anywhere. Unreachable from a legal
    /// state; kept as a safety exit.
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct SolveResult {
    pub status: SolveStatus,
    pub expanded_nodes: u64,
    pub iterations: u32,
    pub elapsed: Duration,
}

impl SolveResult {
    pub fn moves(&self) -> Option<&[Move]> {
        match &self.status {
            SolveStatus::Found(moves) => Some(moves),
            _ => None,
        }
    }
}

pub fn solve(
    cube: &Cube,
    algorithm: Algorithm,
    heuristic: &Heuristic,
    options: &SolveOptions,
) -> SolveResult {
    match algorithm {
        Algorithm::Iddfs => Iddfs::new(options).solve(cube),
        Algorithm::IdaStar => IdaStar::new(heuristic, options).solve(cube),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    lazy_static::lazy_static! {
        static ref HEURISTIC: Heuristic = Heuristic::build();
    }

    fn idastar(scramble: &str) -> SolveResult {
        solve(
            &cube_with_moves(scramble),
            Algorithm::IdaStar,
            &HEURISTIC,
            &SolveOptions::default(),
        )
    }

    #[test]
    fn already_solved_cube_needs_no_moves() {
        let result = idastar("");
        assert_eq!(result.moves(), Some(&[][..]));
        assert!(result.expanded_nodes >= 1);
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn undoes_a_single_turn() {
        let result = idastar("U");
        assert_eq!(result.moves(), Some(&Move::parse_sequence("U'").unwrap()[..]));
    }

    #[test]
    fn undoes_a_two_turn_scramble() {
        let result = idastar("R U");
        assert_eq!(result.moves(), Some(&Move::parse_sequence("U' R'").unwrap()[..]));
    }

    #[test]
    fn full_turn_scramble_is_already_solved() {
        let result = idastar("U U U U");
        assert_eq!(result.moves(), Some(&[][..]));
    }

    #[test]
    fn opposite_face_scramble_solves_in_two() {
        let result = idastar("F B");
        let moves = result.moves().unwrap();
        assert_eq!(moves.len(), 2);
        assert!(cube_with_moves("F B").apply_all(moves.iter().copied()).is_solved());
    }

    #[test]
    fn short_random_scrambles_solve_within_a_loose_bound() {
        for length in 1usize..=8 {
            let scramble = scramble(length, 40 + length as u64);
            let start = Cube::solved().apply_all(scramble.iter().copied());
            let result = solve(&start, Algorithm::IdaStar, &HEURISTIC, &SolveOptions::default());

            let moves = result.moves().unwrap_or_else(|| {
                panic!("no solution for {}", Move::format_sequence(&scramble))
            });
            assert!(moves.len() <= 2 * length + 4);
            assert!(start.apply_all(moves.iter().copied()).is_solved());
        }
    }

    #[test]
    fn reversed_move_order_finds_the_same_two_mover() {
        let result = solve(
            &cube_with_moves("R U"),
            Algorithm::IdaStar,
            &HEURISTIC,
            &SolveOptions {
                move_order: MoveOrder::Reversed,
                ..SolveOptions::default()
            },
        );
        assert_eq!(result.moves(), Some(&Move::parse_sequence("U' R'").unwrap()[..]));
    }

    #[test]
    fn aborts_when_iterations_run_out() {
        let result = solve(
            &cube_with_moves("U2 R2"),
            Algorithm::IdaStar,
            &HEURISTIC,
            &SolveOptions {
                max_iterations: 1,
                ..SolveOptions::default()
            },
        );
        assert_eq!(result.status, SolveStatus::Aborted);
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn solutions_print_without_recompression() {
        // Same-face pruning already yields compressed output.
        match idastar("R2 D F'").status {
            SolveStatus::Found(moves) => {
                assert_eq!(Move::compress_sequence(&moves), moves);
            }
            other => panic!("no solution: {:?}", other),
        }
    }

    #[test]
    fn iddfs_undoes_a_single_turn() {
        let result = solve(
            &cube_with_moves("U"),
            Algorithm::Iddfs,
            &HEURISTIC,
            &SolveOptions::default(),
        );
        assert_eq!(result.moves(), Some(&Move::parse_sequence("U'").unwrap()[..]));
    }

    #[test]
    fn iddfs_matches_idastar_on_short_scrambles() {
        for scramble in ["R U", "F B", "R2 D"] {
            let start = cube_with_moves(scramble);
            let baseline = solve(&start, Algorithm::Iddfs, &HEURISTIC, &SolveOptions::default());
            let guided = solve(&start, Algorithm::IdaStar, &HEURISTIC, &SolveOptions::default());
            assert_eq!(
                baseline.moves().unwrap().len(),
                guided.moves().unwrap().len(),
                "{}",
                scramble
            );
        }
    }

    #[test]
    fn iddfs_aborts_past_its_depth_bound() {
        let result = solve(
            &cube_with_moves("R U F"),
            Algorithm::Iddfs,
            &HEURISTIC,
            &SolveOptions {
                max_depth: 1,
                ..SolveOptions::default()
            },
        );
        assert_eq!(result.status, SolveStatus::Aborted);
        assert_eq!(result.iterations, 2);
    }

    // Takes minutes: a full 25-turn scramble against the small tables.
    #[test]
    #[ignore = "long-running full scramble"]
    fn full_random_scramble_solves() {
        let scramble = scramble(25, 42);
        let start = Cube::solved().apply_all(scramble.iter().copied());
        let result = solve(&start, Algorithm::IdaStar, &HEURISTIC, &SolveOptions::default());

        let moves = result.moves().expect("scramble within the iteration budget");
        assert!(start.apply_all(moves.iter().copied()).is_solved());
        assert!(result.expanded_nodes >= 1);
    }
}
