//! A unit's position together with the route it is following.

use hopgrid_core::{PassGrid, Point};
use hopgrid_paths::{Path, PathError, Pathfinder, Step};

use crate::compass::step_toward;
use crate::speed::UnitKind;

/// Owns one unit's position and its current [`Path`].
///
/// A walker is driven one turn at a time: [`plan`](Walker::plan) a route,
/// then call [`step`](Walker::step) once per turn until
/// [`arrived`](Walker::arrived). [`retrace`](Walker::retrace) turns the
/// finished route around for the trip back. When the route is blocked or
/// gone, `step` falls back to a greedy single-cell step toward the goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walker {
    pos: Point,
    speed: u32,
    origin: Point,
    goal: Option<Point>,
    path: Path,
}

impl Walker {
    pub fn new(pos: Point, speed: u32) -> Self {
        Self {
            pos,
            speed,
            origin: pos,
            goal: None,
            path: Path::new(),
        }
    }

    /// A walker moving at the speed of `kind`.
    pub fn for_unit(pos: Point, kind: UnitKind) -> Self {
        Self::new(pos, kind.speed())
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Destination of the current route, if one is planned.
    #[inline]
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the current route with one from here to `goal`.
    ///
    /// On failure the walker has no route and no goal.
    pub fn plan(
        &mut self,
        finder: &mut Pathfinder,
        grid: &PassGrid,
        goal: Point,
    ) -> Result<(), PathError> {
        match self.path.make_with(finder, grid, self.pos, goal, self.speed) {
            Ok(()) => {
                self.origin = self.pos;
                self.goal = Some(goal);
                Ok(())
            }
            Err(e) => {
                self.goal = None;
                Err(e)
            }
        }
    }

    /// Take one turn's move and return the new position.
    ///
    /// `passable` must be `false` for cells off the map and for cells taken
    /// by other units. The next route move is taken when its target cell is
    /// passable. Otherwise the walker steps one cell toward its goal with
    /// [`step_toward`], and drops the route since it no longer starts here;
    /// call [`plan`](Self::plan) to get a fresh one. Returns `None`, with
    /// nothing changed, when there is no goal, the goal is reached, or no
    /// step is possible.
    pub fn step(&mut self, passable: impl Fn(Point) -> bool) -> Option<Point> {
        if let Step::Move(d) = self.path.next() {
            let next = self.pos + d;
            if passable(next) {
                self.pos = next;
                return Some(next);
            }
            log::debug!("walker at {} blocked moving to {}", self.pos, next);
            self.path.prev();
        }
        self.detour(passable)
    }

    fn detour(&mut self, passable: impl Fn(Point) -> bool) -> Option<Point> {
        let goal = self.goal?;
        let pos = self.pos;
        let reach = i64::from(self.speed);
        let dir = step_toward(pos, goal, |q| (q - pos).sq_len() <= reach && passable(q))?;
        self.pos = pos + dir.delta();
        self.path.clear();
        log::debug!("walker detoured {dir} to {}", self.pos);
        Some(self.pos)
    }

    /// Whether the walker stands on the goal of its route.
    #[inline]
    pub fn arrived(&self) -> bool {
        self.goal == Some(self.pos)
    }

    /// Reverse the walked route so it leads back where it started.
    ///
    /// Only a fully walked route can be retraced; returns `false` otherwise,
    /// including after a detour dropped the route.
    pub fn retrace(&mut self) -> bool {
        if !self.arrived() || !self.path.at_path_end() || self.path.is_empty() {
            return false;
        }
        self.path.reverse();
        self.goal = Some(self.origin);
        self.origin = self.pos;
        true
    }

    /// Forget the current route.
    pub fn stop(&mut self) {
        self.path.clear();
        self.goal = None;
    }
}
