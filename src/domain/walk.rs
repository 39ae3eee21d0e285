use crate::domain::dog::{Dog, DogId};
use nutype::nutype;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Store-assigned identifier for a walk.
#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    AsRef,
    Display,
    From,
    Into
))]
pub struct WalkId(i64);

/// An (x, y) position along a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A coordinate annotated with its zero-up position in the walk path.
///
/// The sequence index is assigned at registration time and is distinct from
/// any storage row identity; retrieval orders by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathPoint {
    pub coordinate: Coordinate,
    pub sequence: i32,
}

/// A recorded walk: the dogs present and the ordered path they took.
///
/// Immutable once persisted; there are no update or delete operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Walk {
    pub id: WalkId,
    pub dogs: Vec<Dog>,
    pub path: Vec<PathPoint>,
}

impl Walk {
    /// Rebuild a walk from storage rows.
    ///
    /// Points may arrive in whatever order the store iterates them; they
    /// are re-sorted by sequence index so the path reads back exactly as
    /// registered.
    pub fn hydrate(id: WalkId, dogs: Vec<Dog>, mut path: Vec<PathPoint>) -> Self {
        path.sort_by_key(|point| point.sequence);
        Self { id, dogs, path }
    }

    pub fn dog_ids(&self) -> HashSet<DogId> {
        self.dogs.iter().map(|dog| dog.id).collect()
    }

    /// The path as plain coordinates, in walk order.
    pub fn coordinates(&self) -> Vec<Coordinate> {
        self.path.iter().map(|point| point.coordinate).collect()
    }
}

/// A walk accepted for registration but not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWalk {
    pub dogs: Vec<Dog>,
    pub path: Vec<PathPoint>,
}

impl NewWalk {
    /// Annotate the input coordinates with zero-up sequence indexes equal
    /// to their input position. Repeated coordinates are kept as-is.
    pub fn from_coordinates(dogs: Vec<Dog>, coordinates: &[Coordinate]) -> Self {
        let path = coordinates
            .iter()
            .enumerate()
            .map(|(index, &coordinate)| PathPoint {
                coordinate,
                sequence: index as i32,
            })
            .collect();
        Self { dogs, path }
    }
}
