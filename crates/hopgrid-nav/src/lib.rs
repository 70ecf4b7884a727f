//! Navigation helpers built on hopgrid-paths: compass directions, per-unit
//! speeds, ASCII layouts and the per-unit [`Walker`].

pub mod compass;
pub mod layout;
pub mod speed;
pub mod walker;

pub use compass::{Compass, sq_dist, step_toward};
pub use layout::{Layout, LayoutError, parse_layout, random_grid, render};
pub use speed::UnitKind;
pub use walker::Walker;
