use std::fmt;
use std::str::FromStr;

use pathviz_core::{UnknownAlgo, algo_key};

/// The maze generators known to [`MazeGen`](crate::MazeGen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MazeAlgo {
    RecursiveBacktracking,
    RecursiveDivision,
}

impl MazeAlgo {
    /// Every generator, in menu order.
    pub const ALL: [MazeAlgo; 2] = [MazeAlgo::RecursiveBacktracking, MazeAlgo::RecursiveDivision];

    /// Display name, as shown in a generator picker.
    pub const fn label(self) -> &'static str {
        match self {
            MazeAlgo::RecursiveBacktracking => "Recursive Backtracking",
            MazeAlgo::RecursiveDivision => "Recursive Division",
        }
    }
}

impl fmt::Display for MazeAlgo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MazeAlgo {
    type Err = UnknownAlgo;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match algo_key(s).as_str() {
            "recursivebacktracking" | "backtracking" | "backtracker" => {
                Ok(MazeAlgo::RecursiveBacktracking)
            }
            "recursivedivision" | "division" => Ok(MazeAlgo::RecursiveDivision),
            _ => Err(UnknownAlgo::new(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back() {
        for algo in MazeAlgo::ALL {
            assert_eq!(algo.to_string().parse::<MazeAlgo>(), Ok(algo));
        }
        assert_eq!("division".parse::<MazeAlgo>(), Ok(MazeAlgo::RecursiveDivision));
        assert_eq!(
            "recursive_backtracking".parse::<MazeAlgo>(),
            Ok(MazeAlgo::RecursiveBacktracking)
        );
    }

    #[test]
    fn unknown_name() {
        assert_eq!("Prim".parse::<MazeAlgo>(), Err(UnknownAlgo::new("Prim")));
    }
}
