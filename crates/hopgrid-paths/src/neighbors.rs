use hopgrid_core::{PassGrid, Point, Range};

use crate::traits::Pather;

/// All non-zero offsets `(dx, dy)` with `dx² + dy² ≤ speed` and
/// `|dx|, |dy| ≤ reach`, row by row from the top-left of the disk.
///
/// `speed = 1` gives the 4 cardinal steps, `speed = 2` the 8-connected ring,
/// `speed = 9` a disk of radius 3. A zero speed yields no offsets. `reach`
/// cuts off hops that could never land on the grid: on an `N`×`N` grid no
/// axis moves further than `N - 1`.
pub fn disk_offsets(speed: u32, reach: i32) -> Vec<Point> {
    let r = (speed.isqrt() as i32).min(reach.max(0));
    let mut offsets = Vec::new();
    for dy in -r..=r {
        for dx in -r..=r {
            let d = Point::new(dx, dy);
            if d != Point::ZERO && d.sq_len() <= i64::from(speed) {
                offsets.push(d);
            }
        }
    }
    offsets
}

/// Cells reachable from `cell` in one hop under `speed`: in bounds, passable,
/// and within the speed disk. Each cell appears once.
pub fn neighbors(grid: &PassGrid, cell: Point, speed: u32) -> Vec<Point> {
    let mut buf = Vec::new();
    SpeedPather::new(grid, speed).neighbors(cell, &mut buf);
    buf
}

/// [`Pather`] over a [`PassGrid`] for a unit with the given speed.
///
/// The disk offsets are computed once per pather, not once per expansion,
/// and never reach past the grid's side.
#[derive(Debug, Clone)]
pub struct SpeedPather<'a> {
    grid: &'a PassGrid,
    speed: u32,
    offsets: Vec<Point>,
}

impl<'a> SpeedPather<'a> {
    /// Create a pather for `grid` and `speed`.
    pub fn new(grid: &'a PassGrid, speed: u32) -> Self {
        Self {
            grid,
            speed,
            offsets: disk_offsets(speed, grid.size() - 1),
        }
    }

    /// The unit speed this pather expands with.
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// The hop offsets, in expansion order.
    pub fn offsets(&self) -> &[Point] {
        &self.offsets
    }
}

impl Pather for SpeedPather<'_> {
    fn range(&self) -> Range {
        self.grid.bounds()
    }

    fn passable(&self, p: Point) -> bool {
        self.grid.passable(p)
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for &d in &self.offsets {
            let n = p + d;
            if self.grid.passable(n) {
                buf.push(n);
            }
        }
    }
}
