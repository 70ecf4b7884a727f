//! Search configuration.

use std::fmt;

use crate::distance::HeuristicKind;

/// Which search loop [`Pathfinder::find`](crate::Pathfinder::find) runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Algorithm {
    /// Cost so far plus heuristic. Hop-count optimal with an admissible heuristic.
    #[default]
    AStar,
    /// Heuristic only. Fast, not optimal.
    BestFirst,
    /// Plain FIFO flood. Always hop-count optimal, ignores the heuristic.
    BreadthFirst,
    /// A* that jumps along straight and diagonal lines, expanding only jump
    /// points. Hop-count optimal; 8-connected movement only.
    JumpPoint,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Self::AStar,
        Self::BestFirst,
        Self::BreadthFirst,
        Self::JumpPoint,
    ];

    /// Whether this algorithm can route a unit of the given speed.
    ///
    /// Jump point search needs the speed disk to be exactly the 8-connected
    /// ring, which holds for speeds 2 and 3.
    pub fn supports_speed(self, speed: u32) -> bool {
        match self {
            Self::JumpPoint => matches!(speed, 2 | 3),
            _ => true,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::AStar => "A*",
            Self::BestFirst => "best-first",
            Self::BreadthFirst => "breadth-first",
            Self::JumpPoint => "jump-point",
        };
        f.write_str(s)
    }
}

/// Tunables for a [`Pathfinder`](crate::Pathfinder).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    pub heuristic: HeuristicKind,
    /// Memoize heuristic values across searches.
    pub memoize: bool,
    /// Flush the heuristic cache when it would grow past this many entries.
    pub cache_limit: Option<usize>,
    /// Give up after expanding this many nodes.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Enable memoization, optionally bounded to `limit` entries.
    pub fn with_memo(mut self, limit: Option<usize>) -> Self {
        self.memoize = true;
        self.cache_limit = limit;
        self
    }

    pub fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }
}
