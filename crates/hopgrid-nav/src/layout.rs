//! ASCII layouts: parsing maps from text, generating random ones, and
//! drawing a route over a grid.
//!
//! The character set is small:
//!
//! | char | meaning |
//! |------|---------|
//! | `.`  | passable |
//! | `#`  | blocked |
//! | `S`  | passable, route start |
//! | `G`  | passable, route goal |
//! | `*`  | intermediate route cell (render only) |

use hopgrid_core::{GridError, PassGrid, Point};
use hopgrid_paths::Path;
use rand::{Rng, RngExt};

/// Errors from [`parse_layout`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("layout has no lines")]
    Empty,
    #[error("line {line} has {len} cells, expected {expected}")]
    Ragged {
        line: usize,
        len: usize,
        expected: usize,
    },
    #[error("unexpected character {ch:?} at {pos}")]
    InvalidChar { ch: char, pos: Point },
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// A parsed map plus its optional `S`/`G` markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub grid: PassGrid,
    pub start: Option<Point>,
    pub goal: Option<Point>,
}

/// Parse a square map from text.
///
/// Leading and trailing blank lines are ignored, as is trailing whitespace on
/// each line. When `S` or `G` appears more than once the last one wins.
pub fn parse_layout(text: &str) -> Result<Layout, LayoutError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim_end)
        .skip_while(|l| l.is_empty())
        .collect();
    let lines = match lines.iter().rposition(|l| !l.is_empty()) {
        Some(last) => &lines[..=last],
        None => return Err(LayoutError::Empty),
    };

    let expected = lines[0].chars().count();
    let mut rows = Vec::with_capacity(lines.len());
    let mut start = None;
    let mut goal = None;
    for (y, line) in lines.iter().enumerate() {
        let len = line.chars().count();
        if len != expected {
            return Err(LayoutError::Ragged {
                line: y,
                len,
                expected,
            });
        }
        let mut row = Vec::with_capacity(len);
        for (x, ch) in line.chars().enumerate() {
            let pos = Point::new(x as i32, y as i32);
            let open = match ch {
                '.' => true,
                '#' => false,
                'S' => {
                    start = Some(pos);
                    true
                }
                'G' => {
                    goal = Some(pos);
                    true
                }
                _ => return Err(LayoutError::InvalidChar { ch, pos }),
            };
            row.push(open);
        }
        rows.push(row);
    }

    Ok(Layout {
        grid: PassGrid::from_rows(&rows)?,
        start,
        goal,
    })
}

/// A `size`×`size` grid where each cell is blocked with `blocked_pct`
/// percent probability.
pub fn random_grid<R: Rng + ?Sized>(
    rng: &mut R,
    size: i32,
    blocked_pct: u32,
) -> Result<PassGrid, GridError> {
    let mut grid = PassGrid::open(size)?;
    for p in grid.bounds() {
        if rng.random_range(0..100) < blocked_pct {
            grid.block(p);
        }
    }
    Ok(grid)
}

/// Draw `grid` with the route `path` walked from `start` laid over it.
///
/// Rows are separated by `\n` with no trailing newline.
pub fn render(grid: &PassGrid, start: Point, path: &Path) -> String {
    let cells = path.waypoints(start);
    let size = grid.size() as usize;
    let mut out = String::with_capacity(size * (size + 1));
    for y in 0..grid.size() {
        if y > 0 {
            out.push('\n');
        }
        for x in 0..grid.size() {
            let p = Point::new(x, y);
            let ch = if p == start {
                'S'
            } else if cells.last() == Some(&p) {
                'G'
            } else if cells.contains(&p) {
                '*'
            } else if grid.passable(p) {
                '.'
            } else {
                '#'
            };
            out.push(ch);
        }
    }
    out
}
