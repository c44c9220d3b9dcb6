//! Game session context
//!
//! One [`Game`] owns one shape catalog and one board. The command layer
//! constructs a `Game` per session and threads it through every operation;
//! nothing in this crate keeps global state, so tests (and embedders) can
//! run as many independent games per process as they like.

use thiserror::Error;

use super::board::{Board, PlacementError};
use super::catalog::{CatalogError, ShapeCatalog, ShapeId};
use super::shape::Shape;

/// Failure of a placement request, which can go wrong either while
/// resolving the id or while fitting the shape on the board.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlayError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// A single game session: one shape catalog plus one board.
#[derive(Debug)]
pub struct Game {
    catalog: ShapeCatalog,
    board: Board,
    starting_board_size: usize,
}

impl Game {
    /// Board side used when no explicit size is given.
    pub const DEFAULT_BOARD_SIZE: usize = 8;

    /// Creates a game with an empty catalog and the default board.
    pub fn new() -> Self {
        Self::with_board_size(Self::DEFAULT_BOARD_SIZE)
    }

    /// Creates a game with an empty catalog and a board of the given side.
    pub fn with_board_size(size: usize) -> Self {
        Self {
            catalog: ShapeCatalog::new(),
            board: Board::new(size),
            starting_board_size: size,
        }
    }

    /// Creates a shape from a raw grid, storing it under a fresh id.
    pub fn create_shape<S: AsRef<str>>(
        &mut self,
        lines: &[S],
        declared: usize,
    ) -> Result<ShapeId, CatalogError> {
        self.catalog.create(lines, declared)
    }

    /// Looks up a shape by id.
    pub fn shape(&self, id: ShapeId) -> Result<&Shape, CatalogError> {
        self.catalog.get(id)
    }

    /// Enumerates stored shapes in creation order.
    pub fn shapes(&self) -> impl Iterator<Item = (ShapeId, &Shape)> {
        self.catalog.iter()
    }

    /// Rotates a stored shape a quarter turn counterclockwise, returning
    /// the updated shape for rendering.
    pub fn rotate_shape(&mut self, id: ShapeId) -> Result<&Shape, CatalogError> {
        let shape = self.catalog.get_mut(id)?;
        shape.rotate_ccw();
        Ok(shape)
    }

    /// Mirrors a stored shape top-to-bottom.
    pub fn mirror_shape_vertical(&mut self, id: ShapeId) -> Result<&Shape, CatalogError> {
        let shape = self.catalog.get_mut(id)?;
        shape.mirror_vertical();
        Ok(shape)
    }

    /// Mirrors a stored shape left-to-right.
    pub fn mirror_shape_horizontal(&mut self, id: ShapeId) -> Result<&Shape, CatalogError> {
        let shape = self.catalog.get_mut(id)?;
        shape.mirror_horizontal();
        Ok(shape)
    }

    /// Places a stored shape on the board with its bounding-box corner at
    /// `(row, col)`. The board copies the shape's current cells; rotating
    /// the shape afterwards does not move what was placed.
    pub fn place_shape(&mut self, id: ShapeId, row: usize, col: usize) -> Result<(), PlayError> {
        let shape = self.catalog.get(id)?;
        self.board.try_place(id, shape, row, col)?;
        Ok(())
    }

    /// Resizes the board, truncating placements that fall outside.
    pub fn resize_board(&mut self, new_size: usize) {
        self.board.resize(new_size);
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game to its initial state: no shapes, id counter back
    /// at 100, and an empty board of the session's starting size.
    pub fn reset(&mut self) {
        self.catalog.clear();
        self.board = Board::new(self.starting_board_size);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
