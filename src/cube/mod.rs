mod cubie;
pub(crate) mod tables;

pub use cubie::Cube;

/// The six faces, in the order moves are enumerated and expanded.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Debug, enum_iterator::Sequence)]
pub enum Face {
    Up,
    Down,
    Left,
    Right,
    Front,
    Back,
}

impl Face {
    pub fn same_axis(a: Face, b: Face) -> bool {
        if a == b {
            return true;
        }

        if a > b {
            return Face::same_axis(b, a);
        }

        matches!(
            (a, b),
            (Face::Up, Face::Down) | (Face::Left, Face::Right) | (Face::Front, Face::Back)
        )
    }
}

impl core::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Face::Up => "U",
                Face::Down => "D",
                Face::Left => "L",
                Face::Right => "R",
                Face::Front => "F",
                Face::Back => "B",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_axis_pairs() {
        assert!(Face::same_axis(Face::Up, Face::Down));
        assert!(Face::same_axis(Face::Down, Face::Up));
        assert!(Face::same_axis(Face::Front, Face::Front));
        assert!(!Face::same_axis(Face::Up, Face::Right));
        assert!(!Face::same_axis(Face::Left, Face::Back));
    }

    #[test]
    fn six_faces_in_move_order() {
        let letters: Vec<String> = enum_iterator::all::<Face>().map(|f| f.to_string()).collect();
        assert_eq!(letters, ["U", "D", "L", "R", "F", "B"]);
    }
}
