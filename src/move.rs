use crate::prelude::*;

#[derive(Clone, Copy, Hash, PartialEq, Eq, Debug, enum_iterator::Sequence)]
pub enum Direction {
    Single,
    Double,
    Reverse,
}

/// One of the 18 face turns.
#[derive(Clone, Copy, Hash, PartialEq, Eq, Debug)]
pub struct Move {
    pub face: Face,
    pub direction: Direction,
}

impl Move {
    /// All 18 turns in canonical order: by face U, D, L, R, F, B, then
    /// clockwise, double, inverse within each face.
    pub fn all() -> impl Iterator<Item = Move> {
        enum_iterator::all::<Face>().flat_map(|face| {
            enum_iterator::all::<Direction>().map(move |direction| Move { face, direction })
        })
    }

    pub fn index(self) -> usize {
        self.face as usize * 3 + self.direction as usize
    }

    pub fn from_index(index: usize) -> Move {
        const FACES: [Face; 6] = [
            Face::Up,
            Face::Down,
            Face::Left,
            Face::Right,
            Face::Front,
            Face::Back,
        ];
        const DIRECTIONS: [Direction; 3] =
            [Direction::Single, Direction::Double, Direction::Reverse];
        Move {
            face: FACES[index / 3],
            direction: DIRECTIONS[index % 3],
        }
    }

    pub fn inverse(self) -> Move {
        let direction = match self.direction {
            Direction::Single => Direction::Reverse,
            Direction::Double => Direction::Double,
            Direction::Reverse => Direction::Single,
        };
        Move {
            face: self.face,
            direction,
        }
    }

    /// Cost in the quarter-turn metric.
    pub fn cost(self) -> u32 {
        match self.direction {
            Direction::Single | Direction::Reverse => 1,
            Direction::Double => 2,
        }
    }

    fn quarter_turns(self) -> usize {
        match self.direction {
            Direction::Single => 1,
            Direction::Double => 2,
            Direction::Reverse => 3,
        }
    }

    pub fn parse_sequence(s: &str) -> anyhow::Result<Vec<Move>> {
        s.split_whitespace().map(|token| token.parse()).collect()
    }

    /// Print a sequence in compressed notation, space separated.
    pub fn format_sequence(moves: &[Move]) -> String {
        Move::compress_sequence(moves)
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Rewrite a sequence as clockwise quarter turns only: doubles become
    /// two turns, inverses three.
    pub fn expand_sequence(moves: &[Move]) -> Vec<Move> {
        moves
            .iter()
            .flat_map(|m| {
                let quarter = Move {
                    face: m.face,
                    direction: Direction::Single,
                };
                std::iter::repeat(quarter).take(m.quarter_turns())
            })
            .collect()
    }

    /// Merge runs of turns on one face: three quarter turns collapse to an
    /// inverse, two to a double, four to nothing. Cancelled runs expose
    /// their neighbors, which merge in turn.
    pub fn compress_sequence(moves: &[Move]) -> Vec<Move> {
        let mut runs: Vec<(Face, usize)> = Vec::new();
        for m in moves {
            match runs.last_mut() {
                Some((face, turns)) if *face == m.face => {
                    *turns = (*turns + m.quarter_turns()) % 4;
                    if *turns == 0 {
                        runs.pop();
                    }
                }
                _ => runs.push((m.face, m.quarter_turns())),
            }
        }

        runs.into_iter()
            .map(|(face, turns)| {
                let direction = match turns {
                    1 => Direction::Single,
                    2 => Direction::Double,
                    _ => Direction::Reverse,
                };
                Move { face, direction }
            })
            .collect()
    }

    pub fn inverse_sequence(moves: &[Move]) -> Vec<Move> {
        moves.iter().rev().map(|m| m.inverse()).collect()
    }
}

impl core::str::FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Move> {
        let mut chars = s.chars();

        let face = match chars.next() {
            Some('U') => Face::Up,
            Some('D') => Face::Down,
            Some('L') => Face::Left,
            Some('R') => Face::Right,
            Some('F') => Face::Front,
            Some('B') => Face::Back,
            Some(c) => return Err(anyhow::anyhow!("unrecognized face {:?} in {:?}", c, s)),
            None => return Err(anyhow::anyhow!("empty move token")),
        };

        let direction = match chars.next() {
            None => Direction::Single,
            Some('2') => Direction::Double,
            Some('\'') => Direction::Reverse,
            Some(c) => return Err(anyhow::anyhow!("unrecognized turn {:?} in {:?}", c, s)),
        };

        if chars.next().is_some() {
            return Err(anyhow::anyhow!("trailing characters in {:?}", s));
        }

        Ok(Move { face, direction })
    }
}

impl core::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}{}",
            self.face,
            match self.direction {
                Direction::Single => "",
                Direction::Double => "2",
                Direction::Reverse => "'",
            }
        )
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Move {
    fn arbitrary(g: &mut quickcheck::Gen) -> Move {
        let moves: Vec<Move> = Move::all().collect();
        *g.choose(&moves).unwrap()
    }
}
