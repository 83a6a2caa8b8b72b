use crate::prelude::*;

use std::time::Instant;

/// Iterative-deepening depth-first search. No heuristic; the bound is the
/// accumulated quarter-turn cost. Baseline for checking the guided search.
pub struct Iddfs {
    moves: Vec<Move>,
    max_depth: u32,
}

impl Iddfs {
    pub fn new(options: &SolveOptions) -> Iddfs {
        Iddfs {
            moves: options.move_order.ordering(),
            max_depth: options.max_depth,
        }
    }

    fn find_solution(
        &self,
        cube: &Cube,
        budget: u32,
        last_face: Option<Face>,
        path: &mut Vec<Move>,
        expanded: &mut u64,
    ) -> bool {
        *expanded += 1;

        if cube.is_solved() {
            return true;
        }

        for &move_ in &self.moves {
            if last_face == Some(move_.face) {
                continue;
            }
            let cost = move_.cost();
            if cost > budget {
                continue;
            }

            path.push(move_);
            let next = cube.apply(move_);
            if self.find_solution(&next, budget - cost, Some(move_.face), path, expanded) {
                return true;
            }
            path.pop();
        }

        false
    }
}

impl Solver for Iddfs {
    fn solve(&self, cube: &Cube) -> SolveResult {
        let started = Instant::now();
        let mut expanded = 0;
        let mut path = Vec::new();
        let mut iterations = 0;

        for depth in 0..=self.max_depth {
            iterations += 1;
            log::debug!("deepening to {}", depth);
            path.clear();

            if self.find_solution(cube, depth, None, &mut path, &mut expanded) {
                log::info!("solved in {} turns, {} nodes", path.len(), expanded);
                return SolveResult {
                    status: SolveStatus::Found(path),
                    expanded_nodes: expanded,
                    iterations,
                    elapsed: started.elapsed(),
                };
            }
        }

        log::info!("no solution within depth {}, {} nodes", self.max_depth, expanded);
        SolveResult {
            status: SolveStatus::Aborted,
            expanded_nodes: expanded,
            iterations,
            elapsed: started.elapsed(),
        }
    }
}
