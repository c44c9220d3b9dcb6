//! Domain models for tilebox
//!
//! Contains the core game logic without any I/O concerns.
//!
//! None of these types are synchronized; a `Game` (and everything inside
//! it) expects a single caller at a time. Wrap it in a lock if you need to
//! share one across threads.

mod board;
mod catalog;
mod game;
mod shape;

pub use board::{Board, PlacementError};
pub use catalog::{CatalogError, ShapeCatalog, ShapeId};
pub use game::{Game, PlayError};
pub use shape::{Cell, Shape, ShapeError, EMPTY, FILLED};
