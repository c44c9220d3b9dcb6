//! Shape catalog and identifier allocation
//!
//! The catalog is the sole owner of every created shape. Identifiers start
//! at 100 and advance by one per successfully stored shape; rejected inputs
//! (invalid definitions, geometric duplicates) never consume an identifier.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::shape::{Shape, ShapeError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error(transparent)]
    InvalidShape(#[from] ShapeError),

    #[error("duplicate of {0}")]
    Duplicate(ShapeId),

    #[error("tile {0} does not exist")]
    UnknownId(ShapeId),
}

/// Identifier assigned to a stored shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(u32);

impl ShapeId {
    /// The identifier assigned to the first stored shape.
    pub const FIRST: ShapeId = ShapeId(100);

    /// The identifier after this one.
    fn next(self) -> ShapeId {
        ShapeId(self.0 + 1)
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ShapeId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ShapeId)
    }
}

/// Owning collection of shapes, indexed by [`ShapeId`].
///
/// Identifiers are strictly increasing, so map order doubles as insertion
/// order for enumeration. No two stored shapes are duplicates of one
/// another under the symmetry relation.
#[derive(Debug)]
pub struct ShapeCatalog {
    shapes: BTreeMap<ShapeId, Shape>,
    next_id: ShapeId,
}

impl Default for ShapeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeCatalog {
    /// Creates an empty catalog. The first stored shape gets id 100.
    pub fn new() -> Self {
        Self {
            shapes: BTreeMap::new(),
            next_id: ShapeId::FIRST,
        }
    }

    /// Parses a shape from a raw grid and stores it under a fresh id.
    ///
    /// Fails with [`CatalogError::InvalidShape`] if the grid does not
    /// define a valid shape, or [`CatalogError::Duplicate`] carrying the
    /// existing shape's id if the new shape matches a stored one in any
    /// orientation. On failure the catalog (including the id counter) is
    /// unchanged.
    pub fn create<S: AsRef<str>>(
        &mut self,
        lines: &[S],
        declared: usize,
    ) -> Result<ShapeId, CatalogError> {
        let shape = Shape::from_grid(lines, declared)?;

        if let Some((&existing, _)) = self
            .shapes
            .iter()
            .find(|(_, stored)| stored.is_duplicate_of(&shape))
        {
            return Err(CatalogError::Duplicate(existing));
        }

        let id = self.next_id;
        self.shapes.insert(id, shape);
        self.next_id = id.next();
        Ok(id)
    }

    /// Looks up a shape by id.
    pub fn get(&self, id: ShapeId) -> Result<&Shape, CatalogError> {
        self.shapes.get(&id).ok_or(CatalogError::UnknownId(id))
    }

    /// Looks up a shape by id for in-place mutation (rotation, mirroring).
    /// Changes are visible to every later lookup of the same id.
    pub fn get_mut(&mut self, id: ShapeId) -> Result<&mut Shape, CatalogError> {
        self.shapes.get_mut(&id).ok_or(CatalogError::UnknownId(id))
    }

    /// Enumerates stored shapes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &Shape)> {
        self.shapes.iter().map(|(&id, shape)| (id, shape))
    }

    /// Number of stored shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Discards every shape and restarts the id sequence at 100.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.next_id = ShapeId::FIRST;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn first_shape_gets_id_100() {
        let mut catalog = ShapeCatalog::new();
        let id = catalog.create(&grid(&["*"]), 1).unwrap();
        assert_eq!(id.to_string(), "100");
    }

    #[test]
    fn successful_creations_increment_by_one() {
        let mut catalog = ShapeCatalog::new();
        let a = catalog.create(&grid(&["*"]), 1).unwrap();
        let b = catalog.create(&grid(&["**", ".."]), 2).unwrap();
        let c = catalog.create(&grid(&["**", "*."]), 2).unwrap();

        assert_eq!(a.to_string(), "100");
        assert_eq!(b.to_string(), "101");
        assert_eq!(c.to_string(), "102");
    }

    #[test]
    fn duplicate_reports_existing_id_and_keeps_counter() {
        let mut catalog = ShapeCatalog::new();
        let original = catalog.create(&grid(&["*.", "*."]), 2).unwrap();

        // Same domino, other orientation.
        let err = catalog.create(&grid(&["**", ".."]), 2).unwrap_err();
        assert_eq!(err, CatalogError::Duplicate(original));
        assert_eq!(catalog.len(), 1);

        // The rejected attempt must not have consumed an id.
        let next = catalog.create(&grid(&["**", "*."]), 2).unwrap();
        assert_eq!(next.to_string(), "101");
    }

    #[test]
    fn invalid_definition_leaves_catalog_unchanged() {
        let mut catalog = ShapeCatalog::new();
        catalog.create(&grid(&["*"]), 1).unwrap();

        assert!(matches!(
            catalog.create(&grid(&["..", ".."]), 2),
            Err(CatalogError::InvalidShape(ShapeError::EmptyShape))
        ));
        assert_eq!(catalog.len(), 1);

        let next = catalog.create(&grid(&["**", ".."]), 2).unwrap();
        assert_eq!(next.to_string(), "101");
    }

    #[test]
    fn lookup_of_unknown_id_fails() {
        let catalog = ShapeCatalog::new();
        let id: ShapeId = "999".parse().unwrap();
        assert_eq!(catalog.get(id).unwrap_err(), CatalogError::UnknownId(id));
    }

    #[test]
    fn mutation_through_get_mut_is_visible_to_later_lookups() {
        let mut catalog = ShapeCatalog::new();
        let id = catalog.create(&grid(&["**", "*."]), 2).unwrap();

        catalog.get_mut(id).unwrap().rotate_ccw();

        assert_eq!(catalog.get(id).unwrap().grid_lines(), vec!["*.", "**"]);
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut catalog = ShapeCatalog::new();
        let a = catalog.create(&grid(&["*"]), 1).unwrap();
        let b = catalog.create(&grid(&["**", ".."]), 2).unwrap();

        let ids: Vec<ShapeId> = catalog.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn clear_restarts_the_id_sequence() {
        let mut catalog = ShapeCatalog::new();
        catalog.create(&grid(&["*"]), 1).unwrap();
        catalog.create(&grid(&["**", ".."]), 2).unwrap();

        catalog.clear();
        assert!(catalog.is_empty());

        let id = catalog.create(&grid(&["*"]), 1).unwrap();
        assert_eq!(id, ShapeId::FIRST);
    }

    #[test]
    fn shape_id_parses_and_round_trips() {
        let id: ShapeId = "100".parse().unwrap();
        assert_eq!(id, ShapeId::FIRST);
        assert!("abc".parse::<ShapeId>().is_err());

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "100");
        let parsed: ShapeId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
