use crate::prelude::*;

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Uniformly random quarter turns, reproducible per seed. Double turns are
/// excluded and no face repeats back to back, so the sequence is already in
/// compressed form.
pub fn scramble(length: usize, seed: u64) -> Vec<Move> {
    let mut rng = StdRng::seed_from_u64(seed);
    let quarter_turns: Vec<Move> = Move::all()
        .filter(|m| m.direction != Direction::Double)
        .collect();

    let mut moves = Vec::with_capacity(length);
    let mut last_face = None;
    while moves.len() < length {
        let candidate = quarter_turns[rng.random_range(0..quarter_turns.len())];
        if last_face == Some(candidate.face) {
            continue;
        }
        last_face = Some(candidate.face);
        moves.push(candidate);
    }
    moves
}
