//! **hopgrid-core**: core types shared across the *hopgrid* crates.
//!
//! This crate provides the geometry primitives ([`Point`], [`Range`]) and the
//! square boolean terrain map ([`PassGrid`]) that the search engine reads.

pub mod geom;
pub mod grid;

pub use geom::{Point, Range, RangeIter};
pub use grid::{GridError, PassGrid};
