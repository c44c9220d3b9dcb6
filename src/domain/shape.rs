//! Shape domain model
//!
//! A shape is a connected set of filled cells anchored inside a square
//! bounding box. Shapes are parsed from a textual grid (`*` = filled,
//! `.` = empty, row-major top to bottom), normalized into canonical form,
//! and transformed in place by quarter turns and mirror flips.
//!
//! Canonical form: the cells are shifted so at least one touches row 0 and
//! at least one touches column 0, and the box is trimmed to the smallest
//! square that still contains every cell.

use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// Marker for a filled cell in the textual grid format.
pub const FILLED: char = '*';

/// Marker for an empty cell in the textual grid format.
pub const EMPTY: char = '.';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("expected {expected} rows, got {found}")]
    WrongRowCount { expected: usize, found: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    WrongRowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unexpected character '{ch}' at row {row}, column {col}")]
    BadCharacter { ch: char, row: usize, col: usize },

    #[error("shape has no filled cells")]
    EmptyShape,

    #[error("filled cells are not edge-connected")]
    Disconnected,
}

/// A single filled position, `(row, col)` from the top-left corner.
///
/// Ordered row-major so cell sets iterate top to bottom, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A polyomino piece: a non-empty, edge-connected set of cells inside a
/// square bounding box of side [`extent`](Shape::extent).
///
/// Equality is orientation-sensitive (same extent, same cell set). Use
/// [`is_duplicate_of`](Shape::is_duplicate_of) for geometric equivalence
/// across rotations and mirrors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    cells: BTreeSet<Cell>,
    extent: usize,
}

impl Shape {
    /// Parses and normalizes a shape from a textual grid.
    ///
    /// The grid must have exactly `declared` rows of `declared` characters,
    /// each either [`FILLED`] or [`EMPTY`], with at least one filled cell
    /// and all filled cells forming a single 4-connected component.
    ///
    /// On success the shape is in canonical form: anchored to the top-left
    /// and trimmed to the minimal enclosing square.
    pub fn from_grid<S: AsRef<str>>(lines: &[S], declared: usize) -> Result<Shape, ShapeError> {
        if lines.len() != declared {
            return Err(ShapeError::WrongRowCount {
                expected: declared,
                found: lines.len(),
            });
        }

        let mut cells = BTreeSet::new();
        for (row, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let width = line.chars().count();
            if width != declared {
                return Err(ShapeError::WrongRowWidth {
                    row,
                    expected: declared,
                    found: width,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    FILLED => {
                        cells.insert(Cell::new(row, col));
                    }
                    EMPTY => {}
                    ch => return Err(ShapeError::BadCharacter { ch, row, col }),
                }
            }
        }

        if cells.is_empty() {
            return Err(ShapeError::EmptyShape);
        }
        if !is_connected(&cells) {
            return Err(ShapeError::Disconnected);
        }

        Ok(Shape::normalized(cells))
    }

    /// Builds the canonical shape from an arbitrary validated cell set:
    /// shift so the first occupied row and column are 0, then trim the box
    /// by the smaller of the row and column margins so it stays square.
    fn normalized(cells: BTreeSet<Cell>) -> Shape {
        let min_row = cells.iter().map(|c| c.row).min().unwrap_or(0);
        let min_col = cells.iter().map(|c| c.col).min().unwrap_or(0);

        let cells: BTreeSet<Cell> = cells
            .iter()
            .map(|c| Cell::new(c.row - min_row, c.col - min_col))
            .collect();

        let max_row = cells.iter().map(|c| c.row).max().unwrap_or(0);
        let max_col = cells.iter().map(|c| c.col).max().unwrap_or(0);

        Shape {
            extent: 1 + max_row.max(max_col),
            cells,
        }
    }

    /// Side length of the square bounding box.
    ///
    /// Rotation and mirroring act within the box, so the extent never
    /// changes after construction.
    pub fn extent(&self) -> usize {
        self.extent
    }

    /// Number of filled cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Iterates over the filled cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Returns true if the cell at `(row, col)` is filled.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&Cell::new(row, col))
    }

    /// Rotates the shape a quarter turn counterclockwise in place.
    ///
    /// Each cell `(r, c)` maps to `(extent-1-c, r)`; applying this four
    /// times reproduces the original cell set.
    pub fn rotate_ccw(&mut self) {
        let last = self.extent - 1;
        self.cells = self
            .cells
            .iter()
            .map(|c| Cell::new(last - c.col, c.row))
            .collect();
    }

    /// Mirrors the shape top-to-bottom in place: `(r, c)` maps to
    /// `(extent-1-r, c)`. An involution.
    pub fn mirror_vertical(&mut self) {
        let last = self.extent - 1;
        self.cells = self
            .cells
            .iter()
            .map(|c| Cell::new(last - c.row, c.col))
            .collect();
    }

    /// Mirrors the shape left-to-right in place: `(r, c)` maps to
    /// `(r, extent-1-c)`. An involution.
    pub fn mirror_horizontal(&mut self) {
        let last = self.extent - 1;
        self.cells = self
            .cells
            .iter()
            .map(|c| Cell::new(c.row, last - c.col))
            .collect();
    }

    /// Returns true if `other` matches this shape in any of the 8
    /// orientations of the square's symmetry group (4 rotations, plus the
    /// 4 rotations of a mirrored copy).
    ///
    /// Works on a disposable clone; neither shape is mutated. The relation
    /// is symmetric.
    pub fn is_duplicate_of(&self, other: &Shape) -> bool {
        if self.extent != other.extent || self.cells.len() != other.cells.len() {
            return false;
        }

        let mut probe = other.clone();
        for _ in 0..4 {
            if probe == *self {
                return true;
            }
            probe.rotate_ccw();
        }
        probe.mirror_vertical();
        for _ in 0..4 {
            if probe == *self {
                return true;
            }
            probe.rotate_ccw();
        }
        false
    }

    /// Renders the shape as `extent` lines of `extent` markers.
    pub fn grid_lines(&self) -> Vec<String> {
        (0..self.extent)
            .map(|row| {
                (0..self.extent)
                    .map(|col| if self.contains(row, col) { FILLED } else { EMPTY })
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.grid_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Flood fill over 4-connected neighbors; true if every cell is reachable
/// from the first one.
fn is_connected(cells: &BTreeSet<Cell>) -> bool {
    let Some(&start) = cells.iter().next() else {
        return true;
    };

    let mut seen = BTreeSet::from([start]);
    let mut frontier = vec![start];

    while let Some(cell) = frontier.pop() {
        let mut neighbors = vec![
            Cell::new(cell.row + 1, cell.col),
            Cell::new(cell.row, cell.col + 1),
        ];
        if cell.row > 0 {
            neighbors.push(Cell::new(cell.row - 1, cell.col));
        }
        if cell.col > 0 {
            neighbors.push(Cell::new(cell.row, cell.col - 1));
        }

        for next in neighbors {
            if cells.contains(&next) && seen.insert(next) {
                frontier.push(next);
            }
        }
    }

    seen.len() == cells.len()
}
