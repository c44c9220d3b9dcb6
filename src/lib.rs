//! tilebox - An interactive polyomino catalog and board placement game
//!
//! Shapes are created from textual grids, normalized into canonical form,
//! deduplicated across all 8 symmetric orientations, transformed by
//! rotation and mirroring, and placed onto a square occupancy board.
//!
//! The [`domain`] module is the embeddable core; the [`cli`] module is the
//! interactive shell around it. Domain types are not synchronized — one
//! caller at a time per [`Game`](domain::Game).

pub mod cli;
pub mod domain;

pub use domain::{Board, Game, Shape, ShapeCatalog, ShapeId};
