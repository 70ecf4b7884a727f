//! Eight-way compass directions and the greedy one-step fallback.

use std::fmt;

use hopgrid_core::Point;

/// One of the eight single-cell directions, clockwise from north.
///
/// North is `y - 1` (rows grow downwards).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Compass {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Compass {
    /// All directions in clockwise order starting at north.
    pub const ALL: [Compass; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    /// Unit offset for this direction.
    pub const fn delta(self) -> Point {
        match self {
            Self::N => Point::new(0, -1),
            Self::NE => Point::new(1, -1),
            Self::E => Point::new(1, 0),
            Self::SE => Point::new(1, 1),
            Self::S => Point::new(0, 1),
            Self::SW => Point::new(-1, 1),
            Self::W => Point::new(-1, 0),
            Self::NW => Point::new(-1, -1),
        }
    }

    /// The direction whose [`delta`](Self::delta) is `d`, if any.
    pub fn from_delta(d: Point) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.delta() == d)
    }

    /// Position in [`ALL`](Self::ALL).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Rotate clockwise by `steps` eighths of a turn (negative turns
    /// counter-clockwise).
    pub fn rotate(self, steps: i32) -> Self {
        let i = (self.index() as i32 + steps).rem_euclid(8);
        Self::ALL[i as usize]
    }

    /// The direction that best heads from `from` towards `to`: the sign of
    /// each axis of `to - from`. `None` when the two coincide.
    pub fn toward(from: Point, to: Point) -> Option<Self> {
        Self::from_delta((to - from).signum())
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        };
        f.write_str(s)
    }
}

/// Squared Euclidean distance, the unit speeds and ranges are measured in.
#[inline]
pub fn sq_dist(a: Point, b: Point) -> i64 {
    (a - b).sq_len()
}

/// Pick a single step from `from` towards `to` without searching.
///
/// Tries the direct heading first, then rotates clockwise through the other
/// seven directions and returns the first whose target cell satisfies
/// `passable`. `None` when already at `to` or when every neighbor is blocked.
pub fn step_toward(from: Point, to: Point, passable: impl Fn(Point) -> bool) -> Option<Compass> {
    let heading = Compass::toward(from, to)?;
    (0..8)
        .map(|i| heading.rotate(i))
        .find(|d| passable(from + d.delta()))
}
