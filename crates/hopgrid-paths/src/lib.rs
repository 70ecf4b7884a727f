//! Speed-aware pathfinding on square boolean grids.
//!
//! A unit with movement speed `s` may hop to any passable cell within squared
//! Euclidean distance `s` in one move. This crate finds routes under that
//! neighbor relation and hands them out one move per turn:
//!
//! - **A\*** ([`Pathfinder::astar`]): cost so far plus heuristic
//! - **Greedy best-first** ([`Pathfinder::best_first`]): heuristic only
//! - **BFS** ([`Pathfinder::breadth_first`]): minimum hop count, no heuristic
//! - **Jump point search** ([`Pathfinder::jump_point`]): A* over jump points,
//!   for 8-connected movement only
//!
//! Every hop costs 1 regardless of its length, so "shortest" means fewest
//! hops. Results are move vectors `(dx, dy)`; [`Path`] wraps them in a cursor
//! with [`Path::next`], [`Path::prev`], [`Path::reset`] and [`Path::reverse`].
//!
//! ```
//! use hopgrid_core::{PassGrid, Point};
//! use hopgrid_paths::{Path, Step};
//!
//! let grid = PassGrid::open(5).unwrap();
//! let mut path = Path::new();
//! path.make(&grid, Point::new(0, 0), Point::new(0, 1), 1).unwrap();
//! assert_eq!(path.next(), Step::Move(Point::new(0, 1)));
//! assert!(path.at_path_end());
//! ```

mod cache;
mod config;
mod distance;
mod error;
mod heap;
mod jps;
mod neighbors;
mod path;
mod search;
mod trace;
mod traits;

pub use cache::HeuristicCache;
pub use config::{Algorithm, SearchConfig};
pub use distance::{HeuristicKind, TIE_BREAK, chebyshev, manhattan, tie_breaking};
pub use error::PathError;
pub use heap::{EmptyQueue, MinHeap};
pub use neighbors::{SpeedPather, disk_offsets, neighbors};
pub use path::{END_OF_PATH, Path, Step};
pub use search::{Pathfinder, SearchNode, SearchStats};
pub use trace::{moves_between, trace_path};
pub use traits::Pather;
