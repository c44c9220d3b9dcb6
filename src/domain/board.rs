//! Board occupancy grid
//!
//! A square grid that records which cells are covered by placed shapes.
//! Placement is all-or-nothing: a failed attempt leaves the board exactly
//! as it was. The board copies cell coordinates at placement time and holds
//! no references into shapes, so rotating a shape after playing it never
//! disturbs what is already on the board.

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use super::catalog::ShapeId;
use super::shape::{Cell, Shape, EMPTY, FILLED};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("placement extends past the board edge")]
    OutOfBounds,

    #[error("placement overlaps an occupied cell")]
    Occupied,
}

/// Square occupancy grid of side [`size`](Board::size).
///
/// Each occupied cell remembers the id of the shape that covered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    occupied: BTreeMap<Cell, ShapeId>,
}

impl Board {
    /// Creates an empty board of the given side length.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            occupied: BTreeMap::new(),
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }

    /// Returns the id of the shape covering `(row, col)`, if any.
    pub fn owner(&self, row: usize, col: usize) -> Option<ShapeId> {
        self.occupied.get(&Cell::new(row, col)).copied()
    }

    /// Returns true if the cell at `(row, col)` is covered.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.occupied.contains_key(&Cell::new(row, col))
    }

    /// Reallocates the grid to `new_size` x `new_size`.
    ///
    /// Cells outside the new bounds are dropped; cells within both the old
    /// and new bounds keep their occupancy. Growing back afterwards does
    /// not resurrect dropped cells.
    pub fn resize(&mut self, new_size: usize) {
        self.size = new_size;
        self.occupied
            .retain(|cell, _| cell.row < new_size && cell.col < new_size);
    }

    /// Attempts to place `shape` with its bounding-box corner at
    /// `(origin_row, origin_col)`, recording `id` as the owner of every
    /// covered cell.
    ///
    /// Every filled cell lands at `(origin_row + r, origin_col + c)`. If
    /// any landing position is out of bounds or already occupied, the
    /// placement fails and the board is unchanged.
    pub fn try_place(
        &mut self,
        id: ShapeId,
        shape: &Shape,
        origin_row: usize,
        origin_col: usize,
    ) -> Result<(), PlacementError> {
        let mut targets = Vec::with_capacity(shape.cell_count());
        for cell in shape.cells() {
            let row = origin_row.checked_add(cell.row).filter(|&r| r < self.size);
            let col = origin_col.checked_add(cell.col).filter(|&c| c < self.size);
            match (row, col) {
                (Some(row), Some(col)) => targets.push(Cell::new(row, col)),
                _ => return Err(PlacementError::OutOfBounds),
            }
        }

        if targets.iter().any(|t| self.occupied.contains_key(t)) {
            return Err(PlacementError::Occupied);
        }

        for target in targets {
            self.occupied.insert(target, id);
        }
        Ok(())
    }

    /// Removes every placement, keeping the current size.
    pub fn clear(&mut self) {
        self.occupied.clear();
    }

    /// Renders the board as `size` lines of `size` markers.
    pub fn grid_lines(&self) -> Vec<String> {
        (0..self.size)
            .map(|row| {
                (0..self.size)
                    .map(|col| if self.is_occupied(row, col) { FILLED } else { EMPTY })
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.grid_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
