use chrono::NaiveDate;
use nutype::nutype;
use serde::{Deserialize, Serialize};

/// Store-assigned identifier for a dog.
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
pub struct DogId(i64);

/// A dog's name, used as a natural lookup key.
#[nutype(
    validate(not_empty, len_char_max = 100),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct DogName(String);

/// A dog known to the system.
///
/// The (name, birthday) pair is the deduplication key; the id is assigned
/// by the store on first creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    pub id: DogId,
    pub name: DogName,
    pub birthday: NaiveDate,
}

/// A dog accepted for creation but not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDog {
    pub name: DogName,
    pub birthday: NaiveDate,
}

/// Outcome of a create-or-find request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DogCreation {
    /// No dog with this (name, birthday) exists yet; the caller must
    /// execute the pending insert.
    Created(NewDog),
    /// The pair already exists; the caller should point at the existing
    /// resource instead of writing anything.
    Exists(DogId),
}

impl Dog {
    /// Resolve a creation request against the store's current knowledge.
    ///
    /// Deterministic: the same (name, birthday) pair resolves to the same
    /// outcome for the same store state.
    pub fn create_or_find(
        name: DogName,
        birthday: NaiveDate,
        existing: Option<&Dog>,
    ) -> DogCreation {
        match existing {
            Some(dog) => DogCreation::Exists(dog.id),
            None => DogCreation::Created(NewDog { name, birthday }),
        }
    }
}
