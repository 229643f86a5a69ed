use std::fmt;
use std::str::FromStr;

use pathviz_core::{UnknownAlgo, algo_key};

/// The path search strategies known to [`PathSearch`](crate::PathSearch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathAlgo {
    AStar,
    Dijkstra,
    BreadthFirst,
    DepthFirst,
    GreedyBestFirst,
}

impl PathAlgo {
    /// Every strategy, in menu order.
    pub const ALL: [PathAlgo; 5] = [
        PathAlgo::AStar,
        PathAlgo::BreadthFirst,
        PathAlgo::DepthFirst,
        PathAlgo::Dijkstra,
        PathAlgo::GreedyBestFirst,
    ];

    /// Display name, as shown in a strategy picker.
    pub const fn label(self) -> &'static str {
        match self {
            PathAlgo::AStar => "A Star",
            PathAlgo::Dijkstra => "Dijkstras",
            PathAlgo::BreadthFirst => "Breadth First",
            PathAlgo::DepthFirst => "Depth First",
            PathAlgo::GreedyBestFirst => "Greedy Best-First",
        }
    }

    /// Whether the strategy always returns a shortest path on a 4-connected
    /// grid.
    pub const fn is_optimal(self) -> bool {
        matches!(
            self,
            PathAlgo::AStar | PathAlgo::Dijkstra | PathAlgo::BreadthFirst
        )
    }
}

impl fmt::Display for PathAlgo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PathAlgo {
    type Err = UnknownAlgo;

    /// Parse a label or a common short name. Case, spaces, hyphens and
    /// underscores are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match algo_key(s).as_str() {
            "astar" | "a*" => Ok(PathAlgo::AStar),
            "dijkstra" | "dijkstras" => Ok(PathAlgo::Dijkstra),
            "breadthfirst" | "bfs" => Ok(PathAlgo::BreadthFirst),
            "depthfirst" | "dfs" => Ok(PathAlgo::DepthFirst),
            "greedybestfirst" | "greedy" | "bestfirst" => Ok(PathAlgo::GreedyBestFirst),
            _ => Err(UnknownAlgo::new(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back() {
        for algo in PathAlgo::ALL {
            assert_eq!(algo.label().parse::<PathAlgo>(), Ok(algo));
        }
    }

    #[test]
    fn short_names() {
        assert_eq!("A*".parse::<PathAlgo>(), Ok(PathAlgo::AStar));
        assert_eq!("bfs".parse::<PathAlgo>(), Ok(PathAlgo::BreadthFirst));
        assert_eq!("DFS".parse::<PathAlgo>(), Ok(PathAlgo::DepthFirst));
        assert_eq!("greedy".parse::<PathAlgo>(), Ok(PathAlgo::GreedyBestFirst));
        assert_eq!("Dijkstra".parse::<PathAlgo>(), Ok(PathAlgo::Dijkstra));
    }

    #[test]
    fn unknown_name() {
        let err = "Bogo Sort".parse::<PathAlgo>().unwrap_err();
        assert_eq!(err.name, "Bogo Sort");
    }

    #[test]
    fn optimality() {
        assert!(PathAlgo::Dijkstra.is_optimal());
        assert!(!PathAlgo::DepthFirst.is_optimal());
        assert!(!PathAlgo::GreedyBestFirst.is_optimal());
    }
}
