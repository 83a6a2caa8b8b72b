use crate::prelude::*;

use std::time::Instant;

/// Iterative-deepening A* over the pattern-database bound.
///
/// Each round runs a depth-first search limited to `f = g + h <= threshold`
/// and remembers the smallest f beyond the limit as the next threshold.
pub struct IdaStar<'a> {
    heuristic: &'a Heuristic,
    moves: Vec<Move>,
    max_iterations: u32,
}

enum Search {
    Found,
    /// Minimum f beyond the threshold, `u32::MAX` when nothing was pruned.
    NotFound(u32),
}

impl<'a> IdaStar<'a> {
    pub fn new(heuristic: &'a Heuristic, options: &SolveOptions) -> IdaStar<'a> {
        IdaStar {
            heuristic,
            moves: options.move_order.ordering(),
            max_iterations: options.max_iterations,
        }
    }

    fn find_solution(
        &self,
        cube: &Cube,
        g: u32,
        threshold: u32,
        last_face: Option<Face>,
        path: &mut Vec<Move>,
        expanded: &mut u64,
    ) -> Search {
        *expanded += 1;

        let f = g + u32::from(self.heuristic.estimate(cube));
        if f > threshold {
            return Search::NotFound(f);
        }
        if cube.is_solved() {
            return Search::Found;
        }

        let mut min_beyond = u32::MAX;
        for &move_ in &self.moves {
            // Consecutive turns of one face collapse into a single turn.
            if last_face == Some(move_.face) {
                continue;
            }

            path.push(move_);
            let next = cube.apply(move_);
            match self.find_solution(
                &next,
                g + move_.cost(),
                threshold,
                Some(move_.face),
                path,
                expanded,
            ) {
                Search::Found => return Search::Found,
                Search::NotFound(beyond) => {
                    min_beyond = min_beyond.min(beyond);
                    path.pop();
                }
            }
        }

        Search::NotFound(min_beyond)
    }
}

impl Solver for IdaStar<'_> {
    fn solve(&self, cube: &Cube) -> SolveResult {
        let started = Instant::now();
        let mut expanded = 0;
        let mut path = Vec::new();
        let mut threshold = u32::from(self.heuristic.estimate(cube));

        for iteration in 1..=self.max_iterations {
            log::info!("searching f <= {}", threshold);
            path.clear();

            match self.find_solution(cube, 0, threshold, None, &mut path, &mut expanded) {
                Search::Found => {
                    log::info!("solved in {} turns, {} nodes", path.len(), expanded);
                    return SolveResult {
                        status: SolveStatus::Found(path),
                        expanded_nodes: expanded,
                        iterations: iteration,
                        elapsed: started.elapsed(),
                    };
                }
                Search::NotFound(u32::MAX) => {
                    return SolveResult {
                        status: SolveStatus::Exhausted,
                        expanded_nodes: expanded,
                        iterations: iteration,
                        elapsed: started.elapsed(),
                    };
                }
                Search::NotFound(beyond) => threshold = beyond,
            }
        }

        log::info!("gave up after {} rounds, {} nodes", self.max_iterations, expanded);
        SolveResult {
            status: SolveStatus::Aborted,
            expanded_nodes: expanded,
            iterations: self.max_iterations,
            elapsed: started.elapsed(),
        }
    }
}
