//! Jump point search for 8-connected movement.
//!
//! Every hop costs 1, diagonal or not, so a jump of `k` cells along a line
//! costs `k`. Only jump points (cells with forced neighbors, or the goal) enter
//! the open set; the cells in between are filled back in when the route is
//! handed out.

use hopgrid_core::Point;

use crate::distance::chebyshev;
use crate::error::PathError;
use crate::heap::MinHeap;
use crate::search::{Frontier, Pathfinder, SearchNode};
use crate::traits::Pather;

const DIRS: [Point; 8] = [
    Point::new(1, 0),
    Point::new(-1, 0),
    Point::new(0, 1),
    Point::new(0, -1),
    Point::new(1, 1),
    Point::new(1, -1),
    Point::new(-1, 1),
    Point::new(-1, -1),
];

impl Pathfinder {
    /// Returns the index of the goal node. Nodes are jump points only.
    pub(crate) fn jump_point_loop<P: Pather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Result<usize, PathError> {
        let mut open = MinHeap::new(|f: &Frontier| f.priority);
        self.push_open(
            &mut open,
            SearchNode {
                pos: from,
                priority: chebyshev(from, to) as f64,
                cost: 0,
                parent: None,
            },
        );
        if let Some(si) = self.idx(from) {
            self.closed[si] = self.generation;
        }

        let mut dirs = Vec::with_capacity(8);
        while !open.is_empty() {
            let ci = open.pop()?.node;
            let pos = self.nodes[ci].pos;
            let Some(pi) = self.idx(pos) else {
                continue;
            };
            if ci != 0 && self.closed[pi] == self.generation {
                continue;
            }
            if pos == to {
                return Ok(ci);
            }
            self.closed[pi] = self.generation;
            self.count_expansion()?;

            dirs.clear();
            match self.nodes[ci].parent {
                None => dirs.extend_from_slice(&DIRS),
                Some(parent) => prune_dirs(pather, pos, self.nodes[parent].pos, &mut dirs),
            }

            let cost = self.nodes[ci].cost;
            for &dir in &dirs {
                let Some((jp, dist)) = jump(pather, pos, dir, to) else {
                    continue;
                };
                let Some(ji) = self.idx(jp) else {
                    continue;
                };
                if self.closed[ji] == self.generation {
                    continue;
                }
                let cost = cost + dist;
                self.push_open(
                    &mut open,
                    SearchNode {
                        pos: jp,
                        priority: cost as f64 + chebyshev(jp, to) as f64,
                        cost,
                        parent: Some(ci),
                    },
                );
            }
        }

        Err(PathError::PathNotFound { from, to })
    }
}

#[inline]
fn open_at<P: Pather>(pather: &P, p: Point) -> bool {
    pather.range().contains(p) && pather.passable(p)
}

/// Directions worth exploring from `p` when it was reached from `parent`:
/// the natural ones plus any forced by an adjacent wall.
fn prune_dirs<P: Pather>(pather: &P, p: Point, parent: Point, dirs: &mut Vec<Point>) {
    let d = (p - parent).signum();
    let open = |q: Point| open_at(pather, q);

    if d.x != 0 && d.y != 0 {
        for n in [Point::new(0, d.y), Point::new(d.x, 0), d] {
            if open(p + n) {
                dirs.push(n);
            }
        }
        if !open(p + Point::new(-d.x, 0)) && open(p + Point::new(-d.x, d.y)) {
            dirs.push(Point::new(-d.x, d.y));
        }
        if !open(p + Point::new(0, -d.y)) && open(p + Point::new(d.x, -d.y)) {
            dirs.push(Point::new(d.x, -d.y));
        }
    } else {
        if open(p + d) {
            dirs.push(d);
        }
        let side = Point::new(d.y, d.x);
        for s in [side, -side] {
            if !open(p + s) && open(p + s + d) {
                dirs.push(s + d);
            }
        }
    }
}

/// Walk from `p` along `dir` until a jump point or a dead end.
///
/// Returns the jump point and the number of steps taken to reach it.
fn jump<P: Pather>(pather: &P, p: Point, dir: Point, goal: Point) -> Option<(Point, u32)> {
    let open = |q: Point| open_at(pather, q);
    let mut n = p + dir;
    let mut dist = 1;

    loop {
        if !open(n) {
            return None;
        }
        if n == goal {
            return Some((n, dist));
        }

        if dir.x != 0 && dir.y != 0 {
            let forced = (!open(n + Point::new(-dir.x, 0)) && open(n + Point::new(-dir.x, dir.y)))
                || (!open(n + Point::new(0, -dir.y)) && open(n + Point::new(dir.x, -dir.y)));
            if forced
                || jump(pather, n, Point::new(dir.x, 0), goal).is_some()
                || jump(pather, n, Point::new(0, dir.y), goal).is_some()
            {
                return Some((n, dist));
            }
        } else {
            let side = Point::new(dir.y, dir.x);
            if [side, -side]
                .into_iter()
                .any(|s| !open(n + s) && open(n + s + dir))
            {
                return Some((n, dist));
            }
        }

        n += dir;
        dist += 1;
    }
}

/// Split jumps along straight or diagonal lines into single-cell steps.
pub(crate) fn unit_steps(jumps: &[Point]) -> Vec<Point> {
    let mut steps = Vec::new();
    for &d in jumps {
        let len = d.x.abs().max(d.y.abs()) as usize;
        steps.extend(std::iter::repeat_n(d.signum(), len));
    }
    steps
}

#[cfg(test)]
mod tests {
    use hopgrid_core::PassGrid;

    use super::*;
    use crate::config::{Algorithm, SearchConfig};

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn walk(from: Point, moves: &[Point]) -> Point {
        moves.iter().fold(from, |at, &d| at + d)
    }

    #[test]
    fn unit_steps_fill_in_lines() {
        let steps = unit_steps(&[p(3, 0), p(-2, -2), p(0, 1)]);
        assert_eq!(
            steps,
            vec![p(1, 0), p(1, 0), p(1, 0), p(-1, -1), p(-1, -1), p(0, 1)]
        );
        assert!(unit_steps(&[]).is_empty());
    }

    #[test]
    fn open_grid_is_chebyshev() {
        let grid = PassGrid::open(9).unwrap();
        let mut pf = Pathfinder::new();
        for (from, to) in [(p(0, 0), p(8, 8)), (p(1, 7), p(8, 2)), (p(4, 4), p(4, 0))] {
            let moves = pf.jump_point(&grid, from, to, 2).unwrap();
            assert_eq!(moves.len() as i32, chebyshev(from, to));
            assert_eq!(walk(from, &moves), to);
            assert!(moves.iter().all(|d| d.x.abs() <= 1 && d.y.abs() <= 1));
        }
    }

    #[test]
    fn expands_fewer_nodes_than_astar() {
        let grid = PassGrid::open(30).unwrap();
        let mut pf = Pathfinder::new();
        pf.jump_point(&grid, p(0, 0), p(29, 12), 2).unwrap();
        let jumps = pf.stats().expanded;
        pf.astar(&grid, p(0, 0), p(29, 12), 2).unwrap();
        assert!(jumps < pf.stats().expanded);
    }

    #[test]
    fn routes_around_a_wall() {
        // Column x = 3 is blocked except at the bottom row.
        let mut grid = PassGrid::open(7).unwrap();
        for y in 0..6 {
            grid.block(p(3, y));
        }
        let mut pf = Pathfinder::new();
        let from = p(0, 0);
        let to = p(6, 0);
        let moves = pf.jump_point(&grid, from, to, 2).unwrap();
        let best = pf.breadth_first(&grid, from, to, 2).unwrap();
        assert_eq!(moves.len(), best.len());
        let mut at = from;
        for &d in &moves {
            at += d;
            assert!(grid.passable(at), "route crosses blocked cell {at}");
        }
        assert_eq!(at, to);
    }

    #[test]
    fn slips_between_diagonal_walls() {
        // A diagonal hop needs only its target cell to be open.
        let grid = PassGrid::from_rows(&[[true, false], [false, true]]).unwrap();
        let mut pf = Pathfinder::new();
        let moves = pf.jump_point(&grid, p(0, 0), p(1, 1), 2).unwrap();
        assert_eq!(moves, vec![p(1, 1)]);
    }

    #[test]
    fn unreachable_goal() {
        let mut grid = PassGrid::open(5).unwrap();
        for wall in [p(3, 3), p(3, 4), p(4, 3)] {
            grid.block(wall);
        }
        let mut pf = Pathfinder::new();
        let err = pf.jump_point(&grid, p(0, 0), p(4, 4), 2).unwrap_err();
        assert!(matches!(err, PathError::PathNotFound { .. }));
    }

    #[test]
    fn other_speeds_are_rejected() {
        let grid = PassGrid::open(5).unwrap();
        let mut pf = Pathfinder::with_config(
            SearchConfig::default().with_algorithm(Algorithm::JumpPoint),
        );
        assert_eq!(
            pf.find(&grid, p(0, 0), p(4, 4), 4),
            Err(PathError::UnsupportedSpeed {
                algorithm: Algorithm::JumpPoint,
                speed: 4
            })
        );
        assert!(pf.jump_point(&grid, p(0, 0), p(4, 4), 1).is_err());
        assert_eq!(pf.find(&grid, p(0, 0), p(4, 4), 3).unwrap().len(), 4);
    }

    #[test]
    fn start_equals_goal() {
        let grid = PassGrid::open(3).unwrap();
        let mut pf = Pathfinder::new();
        assert_eq!(pf.jump_point(&grid, p(1, 1), p(1, 1), 2), Ok(Vec::new()));
    }
}
